//! API Routes
//!
//! Configures the Axum router with all weather service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    city_badge_handler, city_badge_query_handler, compact_badge_handler,
    compact_badge_query_handler, health_handler, json_report_handler, json_report_query_handler,
    missing_city_handler, stats_handler, temperature_badge_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin so badges can be embedded anywhere
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/city", get(city_badge_query_handler))
        .route("/api/city/", get(missing_city_handler))
        .route("/api/city/:city", get(city_badge_handler))
        .route("/api/scity", get(compact_badge_query_handler))
        .route("/api/scity/", get(missing_city_handler))
        .route("/api/scity/:city", get(compact_badge_handler))
        .route("/api/json", get(json_report_query_handler))
        .route("/api/json/", get(missing_city_handler))
        .route("/api/json/:city", get(json_report_handler))
        .route("/temperature/city/", get(missing_city_handler))
        .route("/temperature/city/:city", get(temperature_badge_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
