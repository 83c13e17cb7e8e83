use crate::config::CorsConfig;
use actix_cors::Cors;

pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600);

    // An unset or "*" origin keeps the kiosk-friendly open policy.
    match config.allowed_origin.as_deref() {
        Some(origin) if origin != "*" => cors.allowed_origin(origin).supports_credentials(),
        _ => cors.allow_any_origin(),
    }
}
