use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{error::ProviderError, model::LocationQuery};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Client for `base_url`; requests have no timeout when `timeout` is unset.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    fn query_params(query: &LocationQuery, api_key: &str) -> Vec<(&'static str, String)> {
        let mut params = match query {
            LocationQuery::Name(name) => vec![("q", name.clone())],
            LocationQuery::Coordinates(coord) => {
                vec![("lat", coord.lat.to_string()), ("lon", coord.lon.to_string())]
            }
        };
        params.push(("appid", api_key.to_string()));
        params.push(("units", "metric".to_string()));
        params
    }
}

/// Body of `GET /weather`. Only the fields we read are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct OwCurrentResponse {
    #[serde(default)]
    pub name: String,
    pub sys: Option<OwSys>,
    pub coord: OwCoord,
    pub main: OwMain,
    #[serde(default)]
    pub weather: Vec<OwWeather>,
    pub wind: Option<OwWind>,
    /// Meters.
    pub visibility: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwSys {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwWeather {
    pub main: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwWind {
    /// Meters per second.
    #[serde(default)]
    pub speed: f64,
    pub deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        query: &LocationQuery,
        api_key: &str,
    ) -> Result<OwCurrentResponse, ProviderError> {
        let url = format!("{}/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&Self::query_params(query, api_key))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            debug!(%status, body = %truncate_body(&body), "OpenWeather request failed");
            let message = serde_json::from_str::<OwErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty());
            return Err(ProviderError::Status { status: status.as_u16(), message });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
