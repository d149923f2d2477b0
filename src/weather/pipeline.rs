//! Weather Lookup Pipeline
//!
//! normalize → cache → geocode → forecast → classify → cache → return.
//!
//! Concurrent lookups for the same cold city are not joined: each one runs
//! the full upstream round-trip and the last to finish wins the cache slot.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::client::{DescriptionSource, ForecastSource, Geocoder};
use super::condition::{classify_by_code, classify_by_text};
use super::types::{RenderableResult, TextObservation};
use crate::cache::TtlCache;
use crate::error::{Result, WeatherError};

/// Cache of lookup results keyed by normalized city name.
pub type SharedCache = Arc<RwLock<TtlCache<RenderableResult>>>;

/// Lowercases and trims a city name; blank input is rejected.
///
/// Percent-decoding happens in the HTTP extractors before this point.
pub fn normalize_city(raw: &str) -> Result<String> {
    let city = raw.trim().to_lowercase();
    if city.is_empty() {
        return Err(WeatherError::InvalidInput);
    }
    Ok(city)
}

// == Weather Pipeline ==
/// Cached city lookup over injected geocoding and forecast collaborators.
pub struct WeatherPipeline {
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastSource>,
    cache: SharedCache,
}

impl WeatherPipeline {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        forecast: Arc<dyn ForecastSource>,
        cache: SharedCache,
    ) -> Self {
        Self {
            geocoder,
            forecast,
            cache,
        }
    }

    /// Handle to the result cache, shared with the stats endpoint.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    /// Resolves `raw_city` to a classified weather result.
    ///
    /// # Errors
    /// - `InvalidInput` if the name is blank; no upstream call is made
    /// - `CityNotFound` if geocoding has no candidates; forecast is skipped
    /// - `UpstreamUnavailable` on any transport or payload failure
    #[instrument(skip(self), level = "info")]
    pub async fn lookup(&self, raw_city: &str) -> Result<RenderableResult> {
        let city = normalize_city(raw_city)?;

        // Write lock: reads update hit/miss counters
        let cached = self.cache.write().await.get(&city);
        if let Some(result) = cached {
            debug!("Serving {} from cache", city);
            return Ok(result);
        }

        let geo = self
            .geocoder
            .search(&city)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::CityNotFound(city.clone()))?;

        let forecast = self
            .forecast
            .forecast(geo.latitude, geo.longitude)
            .await?
            .ok_or_else(|| {
                WeatherError::UpstreamUnavailable(format!("no current weather for {}", city))
            })?;

        let condition = classify_by_code(forecast.weather_code);
        let result = RenderableResult::new(geo, forecast, condition);

        self.cache.write().await.put(city.clone(), result.clone());
        info!(
            "Fetched weather for {}: {} {}°C",
            result.location_label, result.condition, result.temperature_c
        );

        Ok(result)
    }
}

// == Free-text Lookup ==
/// Uncached lookup against a free-text source, classified by keywords.
///
/// The source is queried with the normalized name; the observation keeps
/// the name as the caller typed it for display.
#[instrument(skip(source), level = "info")]
pub async fn describe(source: &dyn DescriptionSource, raw_city: &str) -> Result<TextObservation> {
    let city = normalize_city(raw_city)?;
    let report = source.describe(&city).await?;

    Ok(TextObservation {
        condition: classify_by_text(&report.description),
        temperature: report.temperature.replacen('+', "", 1),
        description: report.description,
        city: raw_city.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::condition::ConditionKey;
    use crate::weather::types::{ForecastSnapshot, GeoResult, TextReport};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // == Fakes ==
    struct FakeGeocoder {
        results: Vec<GeoResult>,
        calls: AtomicUsize,
    }

    impl FakeGeocoder {
        fn new(results: Vec<GeoResult>) -> Arc<Self> {
            Arc::new(Self {
                results,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn search(&self, _name: &str) -> Result<Vec<GeoResult>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.results.clone())
        }
    }

    struct FakeForecast {
        snapshot: Option<ForecastSnapshot>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl FakeForecast {
        fn new(snapshot: Option<ForecastSnapshot>) -> Arc<Self> {
            Arc::new(Self {
                snapshot,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                snapshot: None,
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ForecastSource for FakeForecast {
        async fn forecast(&self, _lat: f64, _lon: f64) -> Result<Option<ForecastSnapshot>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(WeatherError::UpstreamUnavailable("connection reset".into()));
            }
            Ok(self.snapshot.clone())
        }
    }

    struct FakeDescriptions(TextReport);

    #[async_trait]
    impl DescriptionSource for FakeDescriptions {
        async fn describe(&self, _city: &str) -> Result<TextReport> {
            Ok(self.0.clone())
        }
    }

    // == Helpers ==
    fn geo(name: &str, country: &str, latitude: f64, longitude: f64) -> GeoResult {
        GeoResult {
            latitude,
            longitude,
            name: name.to_string(),
            country: Some(country.to_string()),
        }
    }

    fn snapshot(weather_code: i32, temperature_c: f64, wind_speed_kmh: f64) -> ForecastSnapshot {
        ForecastSnapshot {
            temperature_c,
            wind_speed_kmh,
            weather_code,
            daily_min_c: None,
            daily_max_c: None,
            daily_precipitation_mm: None,
        }
    }

    fn new_cache() -> SharedCache {
        Arc::new(RwLock::new(TtlCache::new(Duration::from_secs(600))))
    }

    fn pipeline(geocoder: Arc<FakeGeocoder>, forecast: Arc<FakeForecast>) -> WeatherPipeline {
        WeatherPipeline::new(geocoder, forecast, new_cache())
    }

    // == Tests ==
    #[test]
    fn test_normalize_city() {
        assert_eq!(normalize_city("  PaRiS ").unwrap(), "paris");
        assert_eq!(normalize_city("New York").unwrap(), "new york");
        assert!(matches!(normalize_city(""), Err(WeatherError::InvalidInput)));
        assert!(matches!(normalize_city(" \t "), Err(WeatherError::InvalidInput)));
    }

    #[tokio::test]
    async fn test_blank_input_skips_upstream() {
        let geocoder = FakeGeocoder::new(vec![geo("Paris", "France", 48.85, 2.35)]);
        let forecast = FakeForecast::new(Some(snapshot(0, 22.0, 10.0)));
        let pipeline = pipeline(geocoder.clone(), forecast.clone());

        for raw in ["", "   "] {
            let result = pipeline.lookup(raw).await;
            assert!(matches!(result, Err(WeatherError::InvalidInput)));
        }
        assert_eq!(geocoder.calls(), 0);
        assert_eq!(forecast.calls(), 0);
    }

    #[tokio::test]
    async fn test_lookup_paris() {
        let geocoder = FakeGeocoder::new(vec![geo("Paris", "France", 48.85, 2.35)]);
        let forecast = FakeForecast::new(Some(snapshot(0, 22.0, 10.0)));
        let pipeline = pipeline(geocoder, forecast);

        let result = pipeline.lookup("paris").await.unwrap();

        assert_eq!(result.location_label, "Paris, France");
        assert_eq!(result.condition, ConditionKey::Clear);
        assert_eq!(result.temperature_c, 22.0);
        assert_eq!(result.wind_speed_kmh, 10.0);
    }

    #[tokio::test]
    async fn test_lookup_city_state() {
        let geocoder = FakeGeocoder::new(vec![geo("Singapore", "Singapore", 1.29, 103.85)]);
        let forecast = FakeForecast::new(Some(snapshot(95, 31.0, 5.0)));
        let pipeline = pipeline(geocoder, forecast);

        let result = pipeline.lookup("Singapore").await.unwrap();

        assert_eq!(result.location_label, "Singapore");
        assert_eq!(result.condition, ConditionKey::Thunderstorms);
    }

    #[tokio::test]
    async fn test_city_not_found_skips_forecast() {
        let geocoder = FakeGeocoder::new(vec![]);
        let forecast = FakeForecast::new(Some(snapshot(0, 22.0, 10.0)));
        let pipeline = pipeline(geocoder.clone(), forecast.clone());

        let result = pipeline.lookup("atlantis").await;

        assert!(matches!(result, Err(WeatherError::CityNotFound(city)) if city == "atlantis"));
        assert_eq!(geocoder.calls(), 1);
        assert_eq!(forecast.calls(), 0);
    }

    #[tokio::test]
    async fn test_first_candidate_wins() {
        let geocoder = FakeGeocoder::new(vec![
            geo("Springfield", "United States", 39.8, -89.6),
            geo("Springfield", "Australia", -33.9, 151.0),
        ]);
        let forecast = FakeForecast::new(Some(snapshot(3, 18.0, 12.0)));
        let pipeline = pipeline(geocoder, forecast);

        let result = pipeline.lookup("springfield").await.unwrap();

        assert_eq!(result.location_label, "Springfield, United States");
        assert_eq!(result.latitude, 39.8);
    }

    #[tokio::test]
    async fn test_missing_current_weather() {
        let geocoder = FakeGeocoder::new(vec![geo("Paris", "France", 48.85, 2.35)]);
        let forecast = FakeForecast::new(None);
        let pipeline = pipeline(geocoder, forecast);

        let result = pipeline.lookup("paris").await;

        assert!(matches!(result, Err(WeatherError::UpstreamUnavailable(_))));
        assert!(pipeline.cache().read().await.is_empty());
    }

    #[tokio::test]
    async fn test_forecast_failure_is_not_retried() {
        let geocoder = FakeGeocoder::new(vec![geo("Paris", "France", 48.85, 2.35)]);
        let forecast = FakeForecast::failing();
        let pipeline = pipeline(geocoder, forecast.clone());

        let result = pipeline.lookup("paris").await;

        assert!(matches!(result, Err(WeatherError::UpstreamUnavailable(_))));
        assert_eq!(forecast.calls(), 1);
    }

    #[tokio::test]
    async fn test_second_lookup_served_from_cache() {
        let geocoder = FakeGeocoder::new(vec![geo("Paris", "France", 48.85, 2.35)]);
        let forecast = FakeForecast::new(Some(snapshot(61, 14.0, 20.0)));
        let pipeline = pipeline(geocoder.clone(), forecast.clone());

        let first = pipeline.lookup("Paris").await.unwrap();
        let second = pipeline.lookup("  paris ").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.condition, ConditionKey::Rain);
        assert_eq!(geocoder.calls(), 1);
        assert_eq!(forecast.calls(), 1);

        let stats = pipeline.cache().read().await.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_stale_entry_triggers_refetch() {
        let geocoder = FakeGeocoder::new(vec![geo("Paris", "France", 48.85, 2.35)]);
        let forecast = FakeForecast::new(Some(snapshot(0, 22.0, 10.0)));
        let cache: SharedCache = Arc::new(RwLock::new(TtlCache::new(Duration::ZERO)));
        let pipeline = WeatherPipeline::new(geocoder.clone(), forecast.clone(), cache);

        pipeline.lookup("paris").await.unwrap();
        pipeline.lookup("paris").await.unwrap();

        assert_eq!(geocoder.calls(), 2);
        assert_eq!(pipeline.cache().read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_describe_classifies_text() {
        let source = FakeDescriptions(TextReport {
            description: "Freezing rain".into(),
            temperature: "+1°C".into(),
        });

        let observation = describe(&source, " Oslo ").await.unwrap();

        assert_eq!(observation.city, "Oslo");
        assert_eq!(observation.condition, ConditionKey::Rain);
        assert_eq!(observation.temperature, "1°C");
    }

    #[tokio::test]
    async fn test_describe_rejects_blank_city() {
        let source = FakeDescriptions(TextReport {
            description: "Sunny".into(),
            temperature: "+20°C".into(),
        });

        assert!(matches!(describe(&source, "  ").await, Err(WeatherError::InvalidInput)));
    }
}
