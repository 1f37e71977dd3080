//! Location Resolution Module
//!
//! Resolves a free-text location name into coordinates through a geocoding
//! provider, taking the provider's single best match.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{PlannerError, Provider};
use crate::models::Coordinates;

/// Forward geocoding provider
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up at most `count` matches for `name`, best first
    async fn search(&self, name: &str, count: u32) -> Result<Vec<Coordinates>, PlannerError>;
}

/// Service for resolving location names
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a location name to the coordinates of its best match
    pub async fn resolve_name(
        geocoder: &dyn Geocoder,
        name: &str,
    ) -> Result<Coordinates, PlannerError> {
        debug!("Geocoding location name: {}", name);

        let coordinates = geocoder
            .search(name, 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                PlannerError::upstream(Provider::Geocoding, format!("Location not found: {name}"))
            })?;

        debug!(
            "Resolved '{}' to ({:.4}, {:.4})",
            name, coordinates.latitude, coordinates.longitude
        );

        Ok(coordinates)
    }
}
