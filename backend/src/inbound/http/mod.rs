//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod accounts;
pub mod cat_toys;
pub mod cats;
pub mod error;
pub mod feedings;
pub mod health;
pub mod photos;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod toys;
pub mod validation;

pub use error::ApiResult;
pub use validation::{API_PREFIX, json_config};

/// Register every `/api/v1` handler. Callers mount this under
/// [`API_PREFIX`] and wrap it with the session middleware.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(accounts::signup)
        .service(accounts::login)
        .service(accounts::logout)
        .service(cats::list_cats)
        .service(cats::create_cat)
        .service(cats::cat_detail)
        .service(cats::update_cat)
        .service(cats::delete_cat)
        .service(feedings::add_feeding)
        .service(photos::add_photo)
        .service(cat_toys::associate_toy)
        .service(cat_toys::dissociate_toy)
        .service(toys::list_toys)
        .service(toys::create_toy)
        .service(toys::get_toy)
        .service(toys::update_toy)
        .service(toys::delete_toy);
}
