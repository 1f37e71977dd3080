//! Data models for the travel planner
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates produced by geocoding
//! - Request: Inbound planner request and its validated form
//! - Forecast: Hourly forecast entries and the combined planner response

pub mod forecast;
pub mod location;
pub mod request;

// Re-export all public types for convenient access
pub use forecast::{ForecastEntry, PlannerResponse};
pub use location::Coordinates;
pub use request::{ForecastWindow, PlannerRequest, ValidatedRequest};
