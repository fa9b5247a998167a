pub mod crowd_data;

use axum::{response::IntoResponse, Json};

pub use crowd_data::crowd_data;

/// Static greeting used by the frontend to confirm the API is reachable.
pub async fn hello() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Hello from API!"
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "heatmap-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
