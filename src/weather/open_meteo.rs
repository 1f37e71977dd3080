//! Open-Meteo geocoding and forecast clients

use async_trait::async_trait;
use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::{ForecastSource, HourlyWeatherCodes};
use crate::config::{ForecastConfig, GeocodingConfig};
use crate::error::{PlannerError, Provider};
use crate::http;
use crate::location_resolver::Geocoder;
use crate::models::{Coordinates, ForecastWindow};

/// Minute precision, as the provider expects for `start_hour`/`end_hour`
const PROVIDER_HOUR_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Omitted entirely when nothing matches
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: Option<String>,
    latitude: f64,
    longitude: f64,
}

/// Hourly forecast response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: Option<HourlyWeatherCodes>,
}

/// Client for the Open-Meteo geocoding search endpoint
pub struct OpenMeteoGeocodingClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoGeocodingClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self, PlannerError> {
        Ok(Self {
            client: http::build_client(Provider::Geocoding, config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocodingClient {
    #[instrument(name = "geocode", skip(self))]
    async fn search(&self, name: &str, count: u32) -> Result<Vec<Coordinates>, PlannerError> {
        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("name", name.to_string()), ("count", count.to_string())]);

        let response: GeocodingResponse = http::get_json(Provider::Geocoding, request).await?;
        let results = response.results.unwrap_or_default();

        if results.is_empty() {
            warn!("No geocoding results found for '{}'", name);
        } else {
            debug!(
                "Geocoding results: {:?}",
                results
                    .iter()
                    .map(|r| format!(
                        "{} ({:.4}, {:.4})",
                        r.name.as_deref().unwrap_or("?"),
                        r.latitude,
                        r.longitude
                    ))
                    .collect::<Vec<_>>()
            );
        }

        Ok(results
            .into_iter()
            .map(|r| Coordinates::new(r.latitude, r.longitude))
            .collect())
    }
}

/// Client for the Open-Meteo hourly forecast endpoint
pub struct OpenMeteoForecastClient {
    client: Client,
    base_url: String,
    timezone: Tz,
}

impl OpenMeteoForecastClient {
    pub fn new(config: &ForecastConfig) -> Result<Self, PlannerError> {
        Ok(Self {
            client: http::build_client(Provider::Forecast, config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timezone: config.tz()?,
        })
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoForecastClient {
    #[instrument(name = "get_forecast", skip(self))]
    async fn hourly_weather_codes(
        &self,
        coordinates: Coordinates,
        window: &ForecastWindow,
    ) -> Result<HourlyWeatherCodes, PlannerError> {
        let start_hour = window.start.format(PROVIDER_HOUR_FORMAT).to_string();
        let end_hour = window.end.format(PROVIDER_HOUR_FORMAT).to_string();

        let request = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("timezone", self.timezone.name().to_string()),
                ("start_hour", start_hour),
                ("end_hour", end_hour),
                ("hourly", "weather_code".to_string()),
            ]);

        let response: ForecastResponse = http::get_json(Provider::Forecast, request).await?;
        let hourly = response.hourly.ok_or_else(|| {
            PlannerError::upstream(Provider::Forecast, "response has no hourly block")
        })?;

        info!("Retrieved {} hourly samples", hourly.time.len());
        Ok(hourly)
    }
}
