pub mod driver_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Router completo de la API, con CORS y trazas por request
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-registry",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
