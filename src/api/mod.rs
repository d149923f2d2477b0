//! API Module
//!
//! HTTP handlers and routing for the weather badge service.
//!
//! # Endpoints
//! - `GET /api/city/:city` - Full SVG badge
//! - `GET /api/scity/:city` - Compact SVG badge
//! - `GET /api/json/:city` - JSON weather report
//! - `GET /temperature/city/:city` - Temperature badge from free-text conditions
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint
//!
//! The three `/api/*` endpoints also accept `?cityName=` instead of a path segment.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
