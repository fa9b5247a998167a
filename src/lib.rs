use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use handlers::{crowd_data, health, hello};

/// Build the service router. The map frontend runs on a separate origin,
/// so CORS stays permissive.
pub fn app() -> Router {
    Router::new()
        .route("/hello/", get(hello))
        .route("/crowd-data/", get(crowd_data))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
