pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;

use actix_cors::Cors;
use actix_web::web;

pub const API_PREFIX: &str = "/api/v1";

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_PREFIX).configure(handlers::employee::configure));
}

/// Cross-origin policy allowing a single origin.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allow_any_header()
        .max_age(3600)
}
