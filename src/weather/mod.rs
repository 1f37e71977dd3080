//! Hourly forecast retrieval and weather code translation

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{PlannerError, Provider};
use crate::models::{Coordinates, ForecastEntry, ForecastWindow};

pub mod codes;
pub mod open_meteo;

pub use codes::{UNKNOWN_CODE, weather_code_to_description};
pub use open_meteo::{OpenMeteoForecastClient, OpenMeteoGeocodingClient};

/// Hourly weather codes as parallel arrays, in provider order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HourlyWeatherCodes {
    pub time: Vec<String>,
    /// `None` where the provider has no sample for that hour
    pub weather_code: Vec<Option<i64>>,
}

/// Source of hourly weather codes for a location and window
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn hourly_weather_codes(
        &self,
        coordinates: Coordinates,
        window: &ForecastWindow,
    ) -> Result<HourlyWeatherCodes, PlannerError>;
}

/// Fetch the forecast for a window and label every hourly sample
pub async fn fetch_forecast(
    source: &dyn ForecastSource,
    coordinates: Coordinates,
    window: &ForecastWindow,
) -> Result<Vec<ForecastEntry>, PlannerError> {
    let hourly = source.hourly_weather_codes(coordinates, window).await?;
    to_forecast_entries(hourly)
}

/// Pair each timestamp with the label for its weather code
pub fn to_forecast_entries(hourly: HourlyWeatherCodes) -> Result<Vec<ForecastEntry>, PlannerError> {
    if hourly.time.len() != hourly.weather_code.len() {
        return Err(PlannerError::upstream(
            Provider::Forecast,
            format!(
                "hourly arrays differ in length: {} timestamps, {} weather codes",
                hourly.time.len(),
                hourly.weather_code.len()
            ),
        ));
    }

    let entries: Vec<ForecastEntry> = hourly
        .time
        .into_iter()
        .zip(hourly.weather_code)
        .map(|(time, code)| ForecastEntry {
            time,
            weather_condition: weather_code_to_description(code).to_string(),
        })
        .collect();

    debug!("Built {} forecast entries", entries.len());
    Ok(entries)
}
