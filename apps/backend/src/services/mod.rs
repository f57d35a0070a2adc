pub mod game;

pub use game::{GameService, PlayReport};
