//! WMO weather code labels as reported by Open-Meteo

use std::collections::HashMap;
use std::sync::LazyLock;

/// Label used for any code missing from [`WEATHER_CODES`]
pub const UNKNOWN_CODE: &str = "Unknown code";

/// Every code the forecast provider documents, with its label
pub const WEATHER_CODES: [(i64, &str); 28] = [
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Drizzle: Light intensity"),
    (53, "Drizzle: Moderate intensity"),
    (55, "Drizzle: Dense intensity"),
    (56, "Freezing Drizzle: Light intensity"),
    (57, "Freezing Drizzle: Dense intensity"),
    (61, "Rain: Slight intensity"),
    (63, "Rain: Moderate intensity"),
    (65, "Rain: Heavy intensity"),
    (66, "Freezing Rain: Light intensity"),
    (67, "Freezing Rain: Heavy intensity"),
    (71, "Snow fall: Slight intensity"),
    (73, "Snow fall: Moderate intensity"),
    (75, "Snow fall: Heavy intensity"),
    (77, "Snow grains"),
    (80, "Rain showers: Slight intensity"),
    (81, "Rain showers: Moderate intensity"),
    (82, "Rain showers: Violent intensity"),
    (85, "Snow showers: Slight intensity"),
    (86, "Snow showers: Heavy intensity"),
    (95, "Thunderstorm: Slight or moderate"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

static WEATHER_CODE_TABLE: LazyLock<HashMap<i64, &'static str>> =
    LazyLock::new(|| WEATHER_CODES.into_iter().collect());

/// Convert a weather code to its human-readable description
///
/// Total over all inputs: unknown or absent codes yield [`UNKNOWN_CODE`].
#[must_use]
pub fn weather_code_to_description(code: Option<i64>) -> &'static str {
    code.and_then(|c| WEATHER_CODE_TABLE.get(&c).copied())
        .unwrap_or(UNKNOWN_CODE)
}
