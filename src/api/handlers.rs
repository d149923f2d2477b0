//! API Handlers
//!
//! HTTP request handlers for each weather endpoint. Every badge endpoint has
//! a path form (`/:city`) and a query form (`?cityName=`).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{Result, WeatherError};
use crate::models::{CityQuery, HealthResponse, StatsResponse};
use crate::render::{self, WeatherReport};
use crate::weather::{self, DescriptionSource, OpenMeteoClient, WeatherPipeline, WttrClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cached Open-Meteo lookup pipeline
    pub pipeline: Arc<WeatherPipeline>,
    /// Free-text source for the temperature badge
    pub descriptions: Arc<dyn DescriptionSource>,
}

impl AppState {
    /// Creates a new AppState from its collaborators.
    pub fn new(pipeline: WeatherPipeline, descriptions: Arc<dyn DescriptionSource>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            descriptions,
        }
    }

    /// Creates a new AppState wired to the real upstream services.
    pub fn from_config(config: &Config) -> Self {
        let open_meteo = Arc::new(OpenMeteoClient::new(config));
        let cache = Arc::new(RwLock::new(TtlCache::new(config.cache_ttl)));
        let pipeline = WeatherPipeline::new(open_meteo.clone(), open_meteo, cache);

        Self::new(pipeline, Arc::new(WttrClient::new(config)))
    }
}

/// SVG document response.
#[derive(Debug, Clone)]
pub struct Svg(pub String);

impl IntoResponse for Svg {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, "image/svg+xml")], self.0).into_response()
    }
}

fn required(query: CityQuery) -> Result<String> {
    query.city_name.ok_or(WeatherError::InvalidInput)
}

async fn full_badge(state: &AppState, city: &str) -> Result<Svg> {
    let result = state.pipeline.lookup(city).await?;
    Ok(Svg(render::full_badge(&result)))
}

async fn compact_badge(state: &AppState, city: &str) -> Result<Svg> {
    let result = state.pipeline.lookup(city).await?;
    Ok(Svg(render::compact_badge(&result)))
}

async fn json_report(state: &AppState, city: &str) -> Result<Json<WeatherReport>> {
    let result = state.pipeline.lookup(city).await?;
    Ok(Json(WeatherReport::from(result)))
}

/// Handler for GET /api/city/:city
pub async fn city_badge_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Svg> {
    full_badge(&state, &city).await
}

/// Handler for GET /api/city?cityName=
pub async fn city_badge_query_handler(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Svg> {
    full_badge(&state, &required(query)?).await
}

/// Handler for GET /api/scity/:city
pub async fn compact_badge_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Svg> {
    compact_badge(&state, &city).await
}

/// Handler for GET /api/scity?cityName=
pub async fn compact_badge_query_handler(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Svg> {
    compact_badge(&state, &required(query)?).await
}

/// Handler for GET /api/json/:city
pub async fn json_report_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>> {
    json_report(&state, &city).await
}

/// Handler for GET /api/json?cityName=
pub async fn json_report_query_handler(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<WeatherReport>> {
    json_report(&state, &required(query)?).await
}

/// Handler for GET /temperature/city/:city
///
/// Uncached; classifies wttr.in's free-text description.
pub async fn temperature_badge_handler(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Svg> {
    let observation = weather::describe(state.descriptions.as_ref(), &city).await?;
    Ok(Svg(render::temperature_badge(&observation)))
}

/// Handler for an empty city segment (e.g. GET /api/city/)
pub async fn missing_city_handler() -> WeatherError {
    WeatherError::InvalidInput
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.pipeline.cache().read().await;

    Json(StatsResponse::new(&cache.stats(), cache.ttl().as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
