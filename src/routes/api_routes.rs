use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::{Credentials, NewPlace, NewReview, NewUser};
use crate::service::hbnb_service::HbnbService;

// ── Users ─────────────────────────────────────────────────────────────────────

/// POST `/users/`: register an account
pub async fn signup_handler(
    State(svc): State<HbnbService>,
    Json(input): Json<NewUser>,
) -> Response {
    match svc.register(input).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST `/users/login`: exchange credentials for a token plus the user record
pub async fn login_handler(
    State(svc): State<HbnbService>,
    Json(credentials): Json<Credentials>,
) -> Response {
    match svc.login(credentials).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => e.into_response(),
    }
}

// ── Places ────────────────────────────────────────────────────────────────────

/// GET `/places/`
pub async fn list_places_handler(State(svc): State<HbnbService>) -> impl IntoResponse {
    Json(svc.list_places().await)
}

/// GET `/places/{id}`
pub async fn get_place_handler(
    Path(id): Path<String>,
    State(svc): State<HbnbService>,
) -> Response {
    match svc.get_place(&id).await {
        Ok(place) => Json(place).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST `/places/`
pub async fn create_place_handler(
    State(svc): State<HbnbService>,
    Json(input): Json<NewPlace>,
) -> Response {
    match svc.create_place(input).await {
        Ok(place) => (StatusCode::CREATED, Json(place)).into_response(),
        Err(e) => e.into_response(),
    }
}

// ── Amenities & reviews ───────────────────────────────────────────────────────

/// GET `/amenities/`
pub async fn list_amenities_handler(State(svc): State<HbnbService>) -> impl IntoResponse {
    Json(svc.list_amenities().await)
}

/// POST `/reviews/`
pub async fn create_review_handler(
    State(svc): State<HbnbService>,
    Json(input): Json<NewReview>,
) -> Response {
    match svc.create_review(input).await {
        Ok(review) => (StatusCode::CREATED, Json(review)).into_response(),
        Err(e) => e.into_response(),
    }
}
