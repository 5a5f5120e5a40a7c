use crate::{
    config::ProviderConfig, error::ProviderError, model::LocationQuery,
    provider::openweather::{OpenWeatherProvider, OwCurrentResponse},
};
use anyhow::Context;
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// One upstream "current weather" call.
///
/// The credential is passed per call so the provider itself holds no secrets.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(
        &self,
        query: &LocationQuery,
        api_key: &str,
    ) -> Result<OwCurrentResponse, ProviderError>;
}

/// Construct the HTTP-backed provider from config.
pub fn provider_from_config(config: &ProviderConfig) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::new(&config.base_url, config.timeout())
        .context("Failed to build HTTP client for OpenWeather")?;
    Ok(Arc::new(provider))
}
