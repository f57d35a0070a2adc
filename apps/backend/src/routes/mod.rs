use actix_web::web;

pub mod game;
pub mod health;

/// Full route table: `/health` plus the game API under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/api").configure(game::configure_routes));
}
