use serde::{Deserialize, Serialize};
use validator::Validate;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "lon must be between -180 and 180"))]
    pub lon: f64,
}

/// What to ask the upstream provider for.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Name(String),
    Coordinates(Coordinate),
}

/// Normalized current-weather record returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    pub location: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub condition: String,
    pub description: String,
    pub humidity: u8,
    pub pressure: u32,
    pub dew_point: f64,
    /// Kilometers; `None` when the provider did not report visibility.
    pub visibility: Option<f64>,
    pub wind_speed: f64,
    pub wind_direction: u16,
    pub wind_direction_text: String,
}

/// Place name and country resolved from a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityInfo {
    pub location: String,
    pub country: String,
    pub coordinates: Coordinate,
}
