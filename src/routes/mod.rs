pub mod auth;
pub mod favorites;
pub mod health;
pub mod tourism;

use actix_web::web;

use crate::error::AppError;

/// A body that fails to deserialize (missing or mistyped field) is answered
/// with the enveloped 400 every other error takes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|_err, _req| AppError::BadRequest("Missing attribute".into()).into())
}

/// A path parameter that fails to parse (e.g. a non-numeric id) likewise
/// gets the enveloped 400 instead of the framework default.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_err, _req| AppError::BadRequest("Invalid path parameter".into()).into())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login)
            .service(auth::refresh)
            .service(auth::logout)
            .service(auth::profile),
    )
    .service(
        web::scope("/tourisms")
            .service(tourism::list_tourisms)
            .service(tourism::tourism_detail),
    )
    .service(tourism::list_cities)
    .service(tourism::predicted_hotel)
    .service(
        web::scope("/favorites")
            .service(favorites::add_favorite)
            .service(favorites::remove_favorite),
    );
}
