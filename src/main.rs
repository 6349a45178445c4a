use tracing::info;

use hbnb_stub_api::db::store::Store;
use hbnb_stub_api::service::hbnb_service::HbnbService;
use hbnb_stub_api::{app, API_PREFIX};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hbnb_stub_api=debug,tower_http=debug".into()),
        )
        .init();

    // ── Data ──────────────────────────────────────────────────────────────────
    let service = HbnbService::new(Store::new());

    let seed = std::env::var("HBNB_SEED")
        .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
        .unwrap_or(true);
    if seed {
        service.seed_demo_data().await?;
    }

    // ── Listen ────────────────────────────────────────────────────────────────
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}{API_PREFIX}/");

    axum::serve(listener, app(service)).await?;
    Ok(())
}
