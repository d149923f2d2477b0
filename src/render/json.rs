//! JSON report for the `/api/json` endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::weather::{ConditionKey, RenderableResult};

/// Lookup result flattened for API consumers, with display hints attached.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub city: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub condition: ConditionKey,
    pub weather_code: i32,
    pub icon: &'static str,
    pub color: &'static str,
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub min_temperature_c: Option<f64>,
    pub max_temperature_c: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub fetched_at: DateTime<Utc>,
}

impl From<RenderableResult> for WeatherReport {
    fn from(result: RenderableResult) -> Self {
        let display = result.condition.display();
        Self {
            location: result.location_label,
            city: result.city,
            country: result.country,
            latitude: result.latitude,
            longitude: result.longitude,
            condition: result.condition,
            weather_code: result.weather_code,
            icon: display.glyph,
            color: display.color,
            temperature_c: result.temperature_c,
            wind_speed_kmh: result.wind_speed_kmh,
            min_temperature_c: result.daily_min_c,
            max_temperature_c: result.daily_max_c,
            precipitation_mm: result.daily_precipitation_mm,
            fetched_at: result.fetched_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialize() {
        let report = WeatherReport::from(RenderableResult {
            location_label: "Paris, France".to_string(),
            city: "Paris".to_string(),
            country: Some("France".to_string()),
            latitude: 48.85,
            longitude: 2.35,
            condition: ConditionKey::PartlyCloudy,
            weather_code: 2,
            temperature_c: 18.5,
            wind_speed_kmh: 7.0,
            daily_min_c: Some(12.0),
            daily_max_c: Some(21.0),
            daily_precipitation_mm: Some(0.0),
            fetched_at: Utc::now(),
        });

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["location"], "Paris, France");
        assert_eq!(json["condition"], "partly_cloudy");
        assert_eq!(json["weather_code"], 2);
        assert_eq!(json["icon"], "🌤️");
        assert_eq!(json["color"], "orange");
        assert_eq!(json["temperature_c"], 18.5);
        assert!(json["fetched_at"].is_string());
    }
}
