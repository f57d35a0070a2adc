#![allow(dead_code)]

pub mod app_builder;
pub mod logging;

#[allow(unused_imports)]
pub use app_builder::{create_test_app, memory_state};

#[ctor::ctor]
fn init_test_logging() {
    logging::init();
}
