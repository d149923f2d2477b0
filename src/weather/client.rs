//! Upstream collaborators.
//!
//! The lookup pipeline talks to the outside world only through the traits
//! below. [`OpenMeteoClient`] implements geocoding and forecasts against
//! Open-Meteo; [`WttrClient`] fetches free-text conditions from wttr.in.
//! Every call is a single attempt with the transport's default timeout.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::types::{ForecastSnapshot, GeoResult, TextReport};
use crate::config::Config;
use crate::error::{Result, WeatherError};

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum";
const WTTR_FORMAT: &str = "%C|%t";

// == Collaborator Traits ==
/// Resolves a place name to ranked candidates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Candidates in the upstream's own ranking; empty when nothing matched.
    async fn search(&self, name: &str) -> Result<Vec<GeoResult>>;
}

/// Fetches conditions for a coordinate pair.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// `Ok(None)` when the reply carries no current-conditions section.
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Option<ForecastSnapshot>>;
}

/// Fetches a textual description of current conditions for a place name.
#[async_trait]
pub trait DescriptionSource: Send + Sync {
    async fn describe(&self, city: &str) -> Result<TextReport>;
}

// == Open-Meteo wire types ==
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingHit>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingHit {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
}

impl From<GeocodingHit> for GeoResult {
    fn from(hit: GeocodingHit) -> Self {
        Self {
            latitude: hit.latitude,
            longitude: hit.longitude,
            name: hit.name,
            country: hit.country,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
    #[serde(default)]
    daily: Option<DailyAggregates>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Default, Deserialize)]
struct DailyAggregates {
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

fn first_day(values: &[Option<f64>]) -> Option<f64> {
    values.first().copied().flatten()
}

impl ForecastResponse {
    fn into_snapshot(self) -> Option<ForecastSnapshot> {
        let current = self.current_weather?;
        let daily = self.daily.unwrap_or_default();

        Some(ForecastSnapshot {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            weather_code: current.weathercode,
            daily_min_c: first_day(&daily.temperature_2m_min),
            daily_max_c: first_day(&daily.temperature_2m_max),
            daily_precipitation_mm: first_day(&daily.precipitation_sum),
        })
    }
}

/// Helper to turn an upstream reply into JSON or an upstream error.
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| WeatherError::UpstreamUnavailable(format!("JSON parse error: {}", e)))
    } else {
        let text = response.text().await.unwrap_or_default();
        Err(WeatherError::UpstreamUnavailable(format!("{}: {}", status, text)))
    }
}

// == Open-Meteo Client ==
/// Geocoding and forecast client for the Open-Meteo APIs.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_urls(&config.geocoding_url, &config.forecast_url)
    }

    pub fn with_base_urls(geocoding_url: &str, forecast_url: &str) -> Self {
        Self {
            client: Client::new(),
            geocoding_url: geocoding_url.trim_end_matches('/').to_string(),
            forecast_url: forecast_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoClient {
    #[instrument(skip(self), level = "debug")]
    async fn search(&self, name: &str) -> Result<Vec<GeoResult>> {
        let url = format!("{}/v1/search", self.geocoding_url);

        let response = self.client.get(&url).query(&[("name", name)]).send().await?;
        let body: GeocodingResponse = handle_response(response).await?;

        let results: Vec<GeoResult> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeoResult::from)
            .collect();
        debug!("Geocoding returned {} candidate(s)", results.len());
        Ok(results)
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoClient {
    #[instrument(skip(self), level = "debug")]
    async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Option<ForecastSnapshot>> {
        let url = format!("{}/v1/forecast", self.forecast_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;
        let body: ForecastResponse = handle_response(response).await?;

        Ok(body.into_snapshot())
    }
}

// == wttr.in Client ==
/// Free-text conditions from wttr.in's one-line format.
#[derive(Debug, Clone)]
pub struct WttrClient {
    client: Client,
    base_url: String,
}

impl WttrClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.wttr_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    fn city_url(&self, city: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| WeatherError::UpstreamUnavailable(format!("bad wttr url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| WeatherError::UpstreamUnavailable("wttr url cannot be a base".into()))?
            .pop_if_empty()
            .push(city);
        url.query_pairs_mut().append_pair("format", WTTR_FORMAT);
        Ok(url)
    }
}

/// Splits a `%C|%t` reply such as `"Light rain|+12°C"`.
fn parse_wttr_line(body: &str) -> Result<TextReport> {
    let (description, temperature) = body
        .trim()
        .split_once('|')
        .ok_or_else(|| WeatherError::UpstreamUnavailable(format!("unexpected wttr reply: {}", body)))?;

    Ok(TextReport {
        description: description.trim().to_string(),
        temperature: temperature.trim().to_string(),
    })
}

#[async_trait]
impl DescriptionSource for WttrClient {
    #[instrument(skip(self), level = "debug")]
    async fn describe(&self, city: &str) -> Result<TextReport> {
        let url = self.city_url(city)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(WeatherError::UpstreamUnavailable(format!("{}: {}", status, text)));
        }

        parse_wttr_line(&text)
    }
}
