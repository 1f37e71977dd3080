//! Nearby points of interest

use async_trait::async_trait;

use crate::error::PlannerError;
use crate::models::Coordinates;

pub mod google;

pub use google::GooglePlacesClient;

/// Source of attractions near a location
#[async_trait]
pub trait PlacesSource: Send + Sync {
    /// Names of nearby attractions, in the provider's ranking order
    async fn nearby_attractions(&self, coordinates: Coordinates)
    -> Result<Vec<String>, PlannerError>;
}
