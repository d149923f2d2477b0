//! Weather Badge - SVG and JSON weather for a named city
//!
//! Geocodes a city, fetches current conditions from Open-Meteo, classifies
//! them and keeps the result in a ten-minute in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod weather;

pub use api::AppState;
pub use config::Config;
pub use error::WeatherError;
