//! Trip planning orchestration
//!
//! Runs validate → resolve location → fetch forecast → fetch places, strictly
//! in that order. Any failure stops the sequence; there are no partial results
//! and no retries.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::location_resolver::{Geocoder, LocationResolver};
use crate::models::{PlannerRequest, PlannerResponse};
use crate::places::{GooglePlacesClient, PlacesSource};
use crate::validation;
use crate::weather::{self, ForecastSource, OpenMeteoForecastClient, OpenMeteoGeocodingClient};

/// Combines the three providers into one planner response
pub struct PlannerService {
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastSource>,
    places: Arc<dyn PlacesSource>,
}

impl PlannerService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        forecast: Arc<dyn ForecastSource>,
        places: Arc<dyn PlacesSource>,
    ) -> Self {
        Self {
            geocoder,
            forecast,
            places,
        }
    }

    /// Build the service with the HTTP provider clients described by `config`
    pub fn from_config(config: &PlannerConfig) -> Result<Self, PlannerError> {
        Ok(Self::new(
            Arc::new(OpenMeteoGeocodingClient::new(&config.geocoding)?),
            Arc::new(OpenMeteoForecastClient::new(&config.forecast)?),
            Arc::new(GooglePlacesClient::new(&config.places)?),
        ))
    }

    /// Handle one planner request end to end
    #[instrument(name = "plan_trip", skip_all, fields(location = request.location.as_deref()))]
    pub async fn plan(&self, request: &PlannerRequest) -> Result<PlannerResponse, PlannerError> {
        let validated = validation::validate(request)?;

        let coordinates =
            LocationResolver::resolve_name(self.geocoder.as_ref(), &validated.location).await?;

        let weather_forecast =
            weather::fetch_forecast(self.forecast.as_ref(), coordinates, &validated.window)
                .await?;

        let point_of_interest = self.places.nearby_attractions(coordinates).await?;

        info!(
            "Planned '{}' from {} to {}: {} forecast hours, {} attractions",
            validated.location,
            validated.start_time,
            validated.end_time,
            weather_forecast.len(),
            point_of_interest.len()
        );

        Ok(PlannerResponse {
            weather_forecast,
            point_of_interest,
        })
    }
}
