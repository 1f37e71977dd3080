//! Input validation for planner requests
//!
//! Validation is a pure function of the request body. It runs before any
//! upstream call so a rejected request costs nothing downstream.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::PlannerError;
use crate::models::request::REQUEST_TIME_FORMAT;
use crate::models::{ForecastWindow, PlannerRequest, ValidatedRequest};

pub const DATE_FORMAT_MESSAGE: &str = "Incorrect date format, should be YYYY-MM-DD HH:MM:SS";
pub const TIME_ORDER_MESSAGE: &str = "Start time must be less than end time";

/// Validate a raw request
///
/// Field presence is checked first and every missing or blank field is
/// reported. Date rules only run once all three fields are present.
pub fn validate(request: &PlannerRequest) -> Result<ValidatedRequest, PlannerError> {
    let mut messages = Vec::new();

    let location = required_field("location", request.location.as_deref(), &mut messages);
    let start_time = required_field("start_time", request.start_time.as_deref(), &mut messages);
    let end_time = required_field("end_time", request.end_time.as_deref(), &mut messages);

    let (Some(location), Some(start_time), Some(end_time)) = (location, start_time, end_time)
    else {
        debug!("Rejecting request with missing fields: {:?}", messages);
        return Err(PlannerError::validation_many(messages));
    };

    let window = parse_window(start_time, end_time)?;

    Ok(ValidatedRequest {
        location: location.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        window,
    })
}

fn required_field<'a>(
    name: &str,
    value: Option<&'a str>,
    messages: &mut Vec<String>,
) -> Option<&'a str> {
    match value {
        None => {
            messages.push(format!("{name}: This field is required."));
            None
        }
        Some(v) if v.trim().is_empty() => {
            messages.push(format!("{name}: This field may not be blank."));
            None
        }
        Some(v) => Some(v),
    }
}

fn parse_window(start_time: &str, end_time: &str) -> Result<ForecastWindow, PlannerError> {
    let (Ok(start), Ok(end)) = (parse_time(start_time), parse_time(end_time)) else {
        return Err(PlannerError::validation(DATE_FORMAT_MESSAGE));
    };

    if start >= end {
        return Err(PlannerError::validation(TIME_ORDER_MESSAGE));
    }

    Ok(ForecastWindow { start, end })
}

fn parse_time(value: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, REQUEST_TIME_FORMAT)
}
