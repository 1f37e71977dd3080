//! Travel planner - hourly weather and nearby attractions for a trip window
//!
//! This library validates planner requests, resolves the location through a
//! geocoding provider, fetches the hourly forecast and nearby tourist
//! attractions, and serves the combined result over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod places;
pub mod planner;
pub mod validation;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::PlannerConfig;
pub use error::{PlannerError, Provider};
pub use location_resolver::{Geocoder, LocationResolver};
pub use models::{Coordinates, ForecastEntry, PlannerRequest, PlannerResponse};
pub use places::{GooglePlacesClient, PlacesSource};
pub use planner::PlannerService;
pub use weather::{ForecastSource, OpenMeteoForecastClient, OpenMeteoGeocodingClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;
