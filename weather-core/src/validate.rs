//! Checks raw `lat`/`lon` request values before anything is sent upstream.

use serde::Deserialize;
use validator::Validate;

use crate::{error::WeatherError, model::Coordinate};

/// Raw coordinate query parameters, exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinateQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl CoordinateQuery {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self { lat: Some(lat.into()), lon: Some(lon.into()) }
    }

    /// Parse and range-check both values, reporting every problem at once.
    pub fn into_coordinate(self) -> Result<Coordinate, WeatherError> {
        let lat = parse_field("lat", self.lat.as_deref());
        let lon = parse_field("lon", self.lon.as_deref());

        match (lat, lon) {
            (Ok(lat), Ok(lon)) => validate_coordinate(Coordinate { lat, lon }),
            (lat, lon) => {
                let problems: Vec<String> =
                    [lat.err(), lon.err()].into_iter().flatten().collect();
                Err(WeatherError::Validation(problems.join("; ")))
            }
        }
    }
}

/// Range-check an already numeric pair.
pub fn validate_coordinate(coordinate: Coordinate) -> Result<Coordinate, WeatherError> {
    match coordinate.validate() {
        Ok(()) => Ok(coordinate),
        Err(errors) => {
            let mut problems: Vec<String> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            problems.sort();
            Err(WeatherError::Validation(problems.join("; ")))
        }
    }
}

fn parse_field(name: &str, raw: Option<&str>) -> Result<f64, String> {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(format!("{name} is required")),
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("{name} must be a number")),
    }
}
