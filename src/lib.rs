//! In-memory HBnB API used to develop the browser client against.

pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod service;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::{
    create_place_handler, create_review_handler, get_place_handler, list_amenities_handler,
    list_places_handler, login_handler, signup_handler,
};
use crate::service::hbnb_service::HbnbService;

pub const API_PREFIX: &str = "/api/v1";

/// Builds the full router. The browser client runs on another origin, so
/// CORS is wide open.
pub fn app(service: HbnbService) -> Router {
    let api = Router::new()
        .route("/users/", post(signup_handler))
        .route("/users/login", post(login_handler))
        .route("/places/", get(list_places_handler).post(create_place_handler))
        .route("/places/{id}", get(get_place_handler))
        .route("/amenities/", get(list_amenities_handler))
        .route("/reviews/", post(create_review_handler))
        .with_state(service);

    Router::new()
        .nest(API_PREFIX, api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
