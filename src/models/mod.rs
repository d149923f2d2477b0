//! Request and Response models for the weather API
//!
//! DTOs used for query-string extraction and JSON response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::CityQuery;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
