//! Weather Module
//!
//! Condition classification, upstream clients and the cached lookup pipeline.

pub mod client;
pub mod condition;
pub mod pipeline;
pub mod types;

pub use client::{DescriptionSource, ForecastSource, Geocoder, OpenMeteoClient, WttrClient};
pub use condition::{classify_by_code, classify_by_text, lookup_display, ConditionDisplay, ConditionKey};
pub use pipeline::{describe, normalize_city, SharedCache, WeatherPipeline};
pub use types::{ForecastSnapshot, GeoResult, RenderableResult, TextObservation, TextReport};
