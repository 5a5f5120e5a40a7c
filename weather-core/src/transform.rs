//! Pure conversion from the OpenWeather payload into our records.

use crate::{
    model::{CityInfo, Coordinate, WeatherRecord},
    provider::openweather::OwCurrentResponse,
};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;

const UNKNOWN_CONDITION: &str = "Unknown";
const NO_DESCRIPTION: &str = "No description available";

/// Round to the nearest integer, halves toward positive infinity (`-2.5 -> -2`).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Dew point in °C from the Magnus approximation.
pub fn dew_point(temp_c: f64, humidity_pct: f64) -> f64 {
    let alpha = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + (humidity_pct / 100.0).ln();
    round1((MAGNUS_B * alpha) / (MAGNUS_A - alpha))
}

/// 16-point compass label for a bearing in degrees.
pub fn compass_label(deg: f64) -> &'static str {
    let index = (round_half_up(deg / 22.5) as i64).rem_euclid(16) as usize;
    COMPASS_POINTS[index]
}

/// Whole-degree bearing normalized into `[0, 360)`.
pub fn bearing_degrees(deg: f64) -> u16 {
    (round_half_up(deg) as i64).rem_euclid(360) as u16
}

pub fn meters_to_km(meters: f64) -> f64 {
    round1(meters / 1000.0)
}

pub fn mps_to_kmh(speed: f64) -> f64 {
    round1(speed * 3.6)
}

pub fn weather_record(data: &OwCurrentResponse) -> WeatherRecord {
    let primary = data.weather.first();
    let condition = primary
        .and_then(|w| w.main.as_deref())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(UNKNOWN_CONDITION);
    let description = primary
        .and_then(|w| w.description.as_deref())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);

    // No wind block reads as calm from the north.
    let (wind_speed, wind_deg) = data
        .wind
        .as_ref()
        .map(|w| (w.speed, w.deg.unwrap_or(0.0)))
        .unwrap_or((0.0, 0.0));

    WeatherRecord {
        location: data.name.clone(),
        temperature: round_half_up(data.main.temp) as i64,
        feels_like: round_half_up(data.main.feels_like) as i64,
        condition: condition.to_string(),
        description: description.to_string(),
        humidity: data.main.humidity,
        pressure: data.main.pressure,
        dew_point: dew_point(data.main.temp, f64::from(data.main.humidity)),
        visibility: data.visibility.map(meters_to_km),
        wind_speed: mps_to_kmh(wind_speed),
        wind_direction: bearing_degrees(wind_deg),
        wind_direction_text: compass_label(wind_deg).to_string(),
    }
}

pub fn city_info(data: &OwCurrentResponse) -> CityInfo {
    CityInfo {
        location: data.name.clone(),
        country: data
            .sys
            .as_ref()
            .and_then(|sys| sys.country.clone())
            .unwrap_or_default(),
        coordinates: Coordinate { lat: data.coord.lat, lon: data.coord.lon },
    }
}
