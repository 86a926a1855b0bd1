//! CORS middleware configuration.
//!
//! Permissive by default; set `ALLOWED_ORIGINS` (comma-separated) to restrict
//! origins in production deployments.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance for the API.
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
        ])
        .max_age(max_age);

    match env::var("ALLOWED_ORIGINS") {
        Ok(allowed_origins) => {
            let mut cors = cors;
            for origin in allowed_origins.split(',').map(|s| s.trim()) {
                if !origin.is_empty() {
                    log::info!("Adding allowed origin: {}", origin);
                    cors = cors.allowed_origin(origin);
                }
            }
            cors
        }
        Err(_) => cors.allow_any_origin(),
    }
}
