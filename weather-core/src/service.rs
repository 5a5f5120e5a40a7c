use std::sync::Arc;

use tracing::{instrument, warn};

use crate::{
    config::{API_KEY_ENV, ProviderConfig},
    error::{ProviderError, WeatherError},
    model::{CityInfo, Coordinate, LocationQuery, WeatherRecord},
    provider::{WeatherProvider, provider_from_config},
    transform,
};

pub const LIST_ALL_UNAVAILABLE: &str =
    "This endpoint is not available. Use /weather/location/:location or /weather/coordinates";

const DEFAULT_UNAUTHORIZED: &str = "Invalid API key";
const WEATHER_FALLBACK: &str = "Failed to fetch weather data";
const CITY_FALLBACK: &str = "Failed to fetch city information";

#[derive(Debug, Clone, Copy)]
enum Lookup<'a> {
    Name(&'a str),
    Coordinates,
}

/// Dispatches weather lookups to the upstream provider and normalizes the answers.
#[derive(Debug, Clone)]
pub struct WeatherService {
    api_key: Option<String>,
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(config: &ProviderConfig, provider: Arc<dyn WeatherProvider>) -> Self {
        let api_key = config.api_key().map(str::to_owned);
        if api_key.is_none() {
            warn!("{API_KEY_ENV} is not set. Weather API calls will fail.");
        }

        Self { api_key, provider }
    }

    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        Ok(Self::new(config, provider_from_config(config)?))
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, WeatherError> {
        self.api_key.as_deref().ok_or(WeatherError::Configuration)
    }

    /// There is no "all locations" listing for this provider.
    pub fn all_weather(&self) -> Result<Vec<WeatherRecord>, WeatherError> {
        Err(WeatherError::NotFound(LIST_ALL_UNAVAILABLE.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn weather_by_location(&self, location: &str) -> Result<WeatherRecord, WeatherError> {
        let api_key = self.api_key()?;
        let query = LocationQuery::Name(location.to_string());

        let data = self
            .provider
            .current_weather(&query, api_key)
            .await
            .map_err(|e| map_provider_error(e, Lookup::Name(location), WEATHER_FALLBACK))?;

        Ok(transform::weather_record(&data))
    }

    #[instrument(skip(self))]
    pub async fn weather_by_coordinates(
        &self,
        coordinate: Coordinate,
    ) -> Result<WeatherRecord, WeatherError> {
        let api_key = self.api_key()?;

        let data = self
            .provider
            .current_weather(&LocationQuery::Coordinates(coordinate), api_key)
            .await
            .map_err(|e| map_provider_error(e, Lookup::Coordinates, WEATHER_FALLBACK))?;

        Ok(transform::weather_record(&data))
    }

    /// Reverse-geocode a coordinate pair through the same weather endpoint.
    #[instrument(skip(self))]
    pub async fn city_by_coordinates(&self, coordinate: Coordinate) -> Result<CityInfo, WeatherError> {
        let api_key = self.api_key()?;

        let data = self
            .provider
            .current_weather(&LocationQuery::Coordinates(coordinate), api_key)
            .await
            .map_err(|e| map_provider_error(e, Lookup::Coordinates, CITY_FALLBACK))?;

        Ok(transform::city_info(&data))
    }
}

fn map_provider_error(err: ProviderError, lookup: Lookup<'_>, fallback: &str) -> WeatherError {
    let cause = err.to_string();

    let mapped = match err {
        ProviderError::Status { status, message } => match (status, lookup) {
            (404, Lookup::Name(location)) => {
                WeatherError::NotFound(format!("Location \"{location}\" not found"))
            }
            (400, Lookup::Coordinates) => WeatherError::InvalidCoordinates,
            (401, _) => {
                WeatherError::Unauthorized(message.unwrap_or_else(|| DEFAULT_UNAUTHORIZED.into()))
            }
            (status, _) => WeatherError::Upstream {
                status: Some(status),
                message: message.unwrap_or_else(|| fallback.into()),
            },
        },
        ProviderError::Transport(_) | ProviderError::Decode(_) => {
            WeatherError::Upstream { status: None, message: fallback.into() }
        }
    };

    warn!(%cause, status = mapped.status_code(), error = %mapped, "Weather lookup failed");
    mapped
}
