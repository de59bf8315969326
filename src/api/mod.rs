//! REST endpoints for contract generation and loan simulation.

pub mod handlers;
pub mod models;

pub use handlers::ApiState;

use actix_web::web;

/// Register the contract and simulation routes (mounted under `/api`).
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/contracts").route(web::post().to(handlers::generate_contract)))
        .service(
            web::resource("/contracts/preview").route(web::post().to(handlers::preview_contract)),
        )
        .service(web::resource("/simulations").route(web::post().to(handlers::simulate_loan)));
}
