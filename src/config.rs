//! Configuration management for the travel planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use std::path::Path;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::PlannerError;

/// Root configuration structure for the travel planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Geocoding provider settings
    pub geocoding: GeocodingConfig,
    /// Forecast provider settings
    pub forecast: ForecastConfig,
    /// Places provider settings
    pub places: PlacesConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on handling one request, upstream calls included
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum accepted request body size
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

/// Geocoding provider settings (Open-Meteo geocoding)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,
}

/// Forecast provider settings (Open-Meteo forecast)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default = "default_forecast_base_url")]
    pub base_url: String,
    /// IANA timezone the request window is interpreted in
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,
}

/// Places provider settings (Google Places Nearby Search)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
    /// Provider credential; requests fail with a configuration error without it
    pub api_key: Option<String>,
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_body_limit() -> usize {
    16 * 1024
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}

fn default_places_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_provider_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_forecast_base_url(),
            timezone: default_timezone(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_places_base_url(),
            api_key: None,
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ForecastConfig {
    /// Parsed target timezone
    pub fn tz(&self) -> Result<Tz, PlannerError> {
        self.timezone.parse::<Tz>().map_err(|_| {
            PlannerError::config(format!("Unknown forecast timezone '{}'", self.timezone))
        })
    }
}

impl PlannerConfig {
    /// Load configuration from an optional TOML file and `PLANNER_` environment variables
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let mut builder = Config::builder();

        if config_path.exists() {
            builder = builder.add_source(
                File::from(config_path)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // e.g. PLANNER_PLACES__API_KEY, PLANNER_SERVER__PORT
        builder = builder.add_source(
            Environment::with_prefix("PLANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to fields left empty
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.body_limit_bytes == 0 {
            self.server.body_limit_bytes = default_body_limit();
        }
        if self.geocoding.base_url.is_empty() {
            self.geocoding.base_url = default_geocoding_base_url();
        }
        if self.forecast.base_url.is_empty() {
            self.forecast.base_url = default_forecast_base_url();
        }
        if self.forecast.timezone.is_empty() {
            self.forecast.timezone = default_timezone();
        }
        if self.places.base_url.is_empty() {
            self.places.base_url = default_places_base_url();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<(), PlannerError> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the places credential when one is configured
    pub fn validate_api_keys(&self) -> Result<(), PlannerError> {
        if let Some(api_key) = &self.places.api_key
            && api_key.trim().is_empty()
        {
            return Err(PlannerError::config(
                "Places API key cannot be empty if provided. Either remove it or provide a valid key.",
            ));
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<(), PlannerError> {
        let timeouts = [
            ("server.request_timeout_seconds", self.server.request_timeout_seconds),
            ("geocoding.timeout_seconds", self.geocoding.timeout_seconds),
            ("forecast.timeout_seconds", self.forecast.timeout_seconds),
            ("places.timeout_seconds", self.places.timeout_seconds),
        ];
        for (name, value) in timeouts {
            if !(1..=300).contains(&value) {
                return Err(PlannerError::config(format!(
                    "{name} must be between 1 and 300 seconds, got {value}"
                )));
            }
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<(), PlannerError> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        let urls = [
            ("geocoding", &self.geocoding.base_url),
            ("forecast", &self.forecast.base_url),
            ("places", &self.places.base_url),
        ];
        for (name, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(PlannerError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                )));
            }
        }

        self.forecast.tz()?;

        Ok(())
    }
}
