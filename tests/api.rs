use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hbnb_stub_api::app;
use hbnb_stub_api::db::store::Store;
use hbnb_stub_api::models::{Amenity, PlaceView};
use hbnb_stub_api::service::hbnb_service::HbnbService;

fn fresh() -> Router {
    app(HbnbService::new(Store::new()))
}

async fn seeded() -> Router {
    let svc = HbnbService::new(Store::new());
    svc.seed_demo_data().await.unwrap();
    app(svc)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

async fn signup(app: &Router, email: &str) -> Value {
    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/v1/users/",
            serde_json::json!({
                "first_name": "Ana",
                "last_name": "Silva",
                "email": email,
                "password": "pw",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- users ---

#[tokio::test]
async fn duplicate_signup_reports_message() {
    let app = fresh();
    signup(&app, "ana@x.io").await;

    let resp = app
        .oneshot(post_json(
            "/api/v1/users/",
            serde_json::json!({
                "first_name": "Ana",
                "last_name": "Again",
                "email": "ANA@x.io",
                "password": "pw",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn login_returns_flat_user_with_token() {
    let app = fresh();
    let user = signup(&app, "ana@x.io").await;

    let resp = app
        .oneshot(post_json(
            "/api/v1/users/login",
            serde_json::json!({ "email": "ana@x.io", "password": "pw" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["id"], user["id"]);
    assert_eq!(body["first_name"], "Ana");
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn bad_login_is_401_with_error_field() {
    let app = fresh();
    signup(&app, "ana@x.io").await;

    let resp = app
        .oneshot(post_json(
            "/api/v1/users/login",
            serde_json::json!({ "email": "ana@x.io", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

// --- places ---

#[tokio::test]
async fn create_then_fetch_place() {
    let app = fresh();
    let owner = signup(&app, "ana@x.io").await;

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/v1/places/",
            serde_json::json!({
                "title": "Loft",
                "description": "Bright",
                "price": 80.0,
                "latitude": 1.5,
                "longitude": -2.0,
                "owner_id": owner["id"],
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: PlaceView = body_json(resp).await;

    let resp = app
        .oneshot(get(&format!("/api/v1/places/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let place: PlaceView = body_json(resp).await;
    assert_eq!(place.title, "Loft");
    assert_eq!(place.owner.unwrap().last_name, "Silva");
    assert!(place.amenities.is_empty());
    assert!(place.reviews.is_empty());
}

#[tokio::test]
async fn unknown_place_is_404() {
    let resp = fresh().oneshot(get("/api/v1/places/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seeded_server_lists_demo_place_and_amenities() {
    let app = seeded().await;

    let resp = app.clone().oneshot(get("/api/v1/places/")).await.unwrap();
    let places: Vec<PlaceView> = body_json(resp).await;
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].title, "Seaside Loft");

    let resp = app.oneshot(get("/api/v1/amenities/")).await.unwrap();
    let amenities: Vec<Amenity> = body_json(resp).await;
    assert_eq!(amenities.len(), 5);
}

// --- reviews ---

#[tokio::test]
async fn review_rating_out_of_range_is_rejected() {
    let app = seeded().await;
    let resp = app.clone().oneshot(get("/api/v1/places/")).await.unwrap();
    let places: Vec<PlaceView> = body_json(resp).await;

    let resp = app
        .oneshot(post_json(
            "/api/v1/reviews/",
            serde_json::json!({
                "text": "Too good",
                "rating": 6,
                "place_id": places[0].id,
                "user_id": places[0].owner_id,
            }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("between 1 and 5"));
}

#[tokio::test]
async fn review_is_nested_into_place() {
    let app = seeded().await;
    let resp = app.clone().oneshot(get("/api/v1/places/")).await.unwrap();
    let places: Vec<PlaceView> = body_json(resp).await;
    let place = &places[0];

    let resp = app
        .clone()
        .oneshot(post_json(
            "/api/v1/reviews/",
            serde_json::json!({
                "text": "Lovely",
                "rating": 4,
                "place_id": place.id,
                "user_id": place.owner_id,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .oneshot(get(&format!("/api/v1/places/{}", place.id)))
        .await
        .unwrap();
    let detail: PlaceView = body_json(resp).await;
    assert_eq!(detail.reviews.len(), 1);
    assert_eq!(detail.reviews[0].rating, 4);
    assert_eq!(detail.reviews[0].user.as_ref().unwrap().first_name, "Demo");
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
    let resp = fresh()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/v1/places/")
                .header(http::header::ORIGIN, "http://localhost:8080")
                .header(http::header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert!(resp
        .headers()
        .contains_key(http::header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
