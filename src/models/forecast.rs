//! Forecast entries and the combined planner response

use serde::{Deserialize, Serialize};

/// One hourly sample of the requested forecast window
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ForecastEntry {
    /// Provider timestamp, e.g. `2024-06-01T00:00`
    pub time: String,
    /// Human-readable condition label
    pub weather_condition: String,
}

/// Successful planner response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlannerResponse {
    /// Hourly forecast, chronological
    pub weather_forecast: Vec<ForecastEntry>,
    /// Nearby attraction names, in provider order
    pub point_of_interest: Vec<String>,
}
