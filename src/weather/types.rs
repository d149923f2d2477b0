//! Data carried through one lookup: geocoding hit, forecast snapshot and
//! the classified result handed to the renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::condition::ConditionKey;

/// First geocoding candidate for a place name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: Option<String>,
}

impl GeoResult {
    /// "City, Country", or just "City" when the country is missing or
    /// case-insensitively equal to the city (avoids "Singapore, Singapore").
    pub fn location_label(&self) -> String {
        match &self.country {
            Some(country)
                if !country.is_empty() && country.to_lowercase() != self.name.to_lowercase() =>
            {
                format!("{}, {}", self.name, country)
            }
            _ => self.name.clone(),
        }
    }
}

/// Current conditions plus today's aggregates, when the upstream sent them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
    pub daily_min_c: Option<f64>,
    pub daily_max_c: Option<f64>,
    pub daily_precipitation_mm: Option<f64>,
}

/// Outcome of one lookup, consumed by the SVG and JSON renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableResult {
    pub location_label: String,
    pub city: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub condition: ConditionKey,
    /// Raw WMO code the condition was classified from
    pub weather_code: i32,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub daily_min_c: Option<f64>,
    pub daily_max_c: Option<f64>,
    pub daily_precipitation_mm: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}

impl RenderableResult {
    pub fn new(geo: GeoResult, forecast: ForecastSnapshot, condition: ConditionKey) -> Self {
        Self {
            location_label: geo.location_label(),
            city: geo.name,
            country: geo.country,
            latitude: geo.latitude,
            longitude: geo.longitude,
            condition,
            weather_code: forecast.weather_code,
            temperature_c: forecast.temperature_c,
            wind_speed_kmh: forecast.wind_speed_kmh,
            daily_min_c: forecast.daily_min_c,
            daily_max_c: forecast.daily_max_c,
            daily_precipitation_mm: forecast.daily_precipitation_mm,
            fetched_at: Utc::now(),
        }
    }
}

/// Raw reply from a free-text weather service
#[derive(Debug, Clone, PartialEq)]
pub struct TextReport {
    pub description: String,
    pub temperature: String,
}

/// Free-text observation after classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextObservation {
    /// City as the caller typed it, trimmed
    pub city: String,
    pub description: String,
    /// Temperature as the upstream printed it, leading '+' removed (e.g. "12°C")
    pub temperature: String,
    pub condition: ConditionKey,
}
