//! Inbound planner request and its validated form

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format accepted for `start_time` and `end_time`
pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw request body as sent by the caller
///
/// Every field is optional on the wire so that a missing field is reported by
/// the validator instead of the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerRequest {
    pub location: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl PlannerRequest {
    pub fn new(
        location: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            location: Some(location.into()),
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
        }
    }
}

/// Parsed forecast window, local to the configured target timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Location name exactly as sent
    pub location: String,
    /// Start time exactly as sent
    pub start_time: String,
    /// End time exactly as sent
    pub end_time: String,
    /// Parsed window, `start < end`
    pub window: ForecastWindow,
}
