//! Error types for the weather badge service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Weather Error Enum ==
/// Unified error type for the lookup pipeline and the HTTP layer.
///
/// The `Display` text carries internal detail for logs. Clients only ever see
/// the fixed message from [`WeatherError::public_message`].
#[derive(Error, Debug)]
pub enum WeatherError {
    /// City name missing or blank after normalization
    #[error("City name required")]
    InvalidInput,

    /// Geocoding returned no candidates
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Transport failure, non-2xx status or malformed body from an upstream
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl WeatherError {
    /// HTTP status the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::InvalidInput => StatusCode::BAD_REQUEST,
            WeatherError::CityNotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to clients.
    pub fn public_message(&self) -> &'static str {
        match self {
            WeatherError::InvalidInput => "City name required",
            WeatherError::CityNotFound(_) => "City not found",
            WeatherError::UpstreamUnavailable(_) => "Error fetching weather",
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::UpstreamUnavailable(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        if let WeatherError::UpstreamUnavailable(detail) = &self {
            error!("Error fetching weather: {}", detail);
        }

        let body = Json(ErrorResponse::new(self.public_message()));
        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather service.
pub type Result<T> = std::result::Result<T, WeatherError>;
