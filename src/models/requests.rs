//! Request DTOs for the weather API

use serde::Deserialize;

/// Query string for the `?cityName=` form of the badge endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityQuery {
    #[serde(rename = "cityName", default)]
    pub city_name: Option<String>,
}
