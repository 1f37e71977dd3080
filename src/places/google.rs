//! Google Places Nearby Search client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::PlacesSource;
use crate::config::PlacesConfig;
use crate::error::{PlannerError, Provider};
use crate::http;
use crate::models::Coordinates;

const SEARCH_RADIUS_METERS: u32 = 1500;
const PLACE_TYPE: &str = "tourist_attraction";

/// Statuses that carry a usable (possibly empty) result list
const ACCEPTED_STATUSES: [&str; 2] = ["OK", "ZERO_RESULTS"];

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    #[serde(default)]
    results: Vec<PlaceResult>,
    status: Option<String>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    name: String,
}

/// Nearby Search client
///
/// The credential is handed over at construction; a client built without one
/// fails every lookup with a configuration error and sends nothing.
pub struct GooglePlacesClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GooglePlacesClient {
    pub fn new(config: &PlacesConfig) -> Result<Self, PlannerError> {
        if config.api_key.is_none() {
            warn!("No places API key configured; planner requests will fail");
        }

        Ok(Self {
            client: http::build_client(Provider::Places, config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl PlacesSource for GooglePlacesClient {
    #[instrument(name = "nearby_places", skip(self))]
    async fn nearby_attractions(
        &self,
        coordinates: Coordinates,
    ) -> Result<Vec<String>, PlannerError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| PlannerError::config("Places API key is not configured"))?;

        let request = self
            .client
            .get(format!("{}/nearbysearch/json", self.base_url))
            .query(&[
                ("location", coordinates.to_query_pair()),
                ("radius", SEARCH_RADIUS_METERS.to_string()),
                ("type", PLACE_TYPE.to_string()),
                ("key", api_key.to_string()),
            ]);

        let response: NearbySearchResponse = http::get_json(Provider::Places, request).await?;

        if let Some(status) = response.status.as_deref()
            && !ACCEPTED_STATUSES.contains(&status)
        {
            return Err(PlannerError::upstream(
                Provider::Places,
                format!(
                    "status {status}: {}",
                    response.error_message.as_deref().unwrap_or("no error message")
                ),
            ));
        }

        let names: Vec<String> = response.results.into_iter().map(|p| p.name).collect();
        info!("Found {} nearby attractions", names.len());
        Ok(names)
    }
}
