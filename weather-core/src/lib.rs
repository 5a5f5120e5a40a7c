//! Core library for the weather proxy.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - Coordinate validation
//! - The upstream provider abstraction and its OpenWeather implementation
//! - The transform from provider payloads into stable records
//! - The dispatch service and its client-facing error taxonomy
//!
//! It is used by `weather-server`, but has no dependency on any web framework.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod transform;
pub mod validate;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use error::{ProviderError, WeatherError};
pub use model::{CityInfo, Coordinate, LocationQuery, WeatherRecord};
pub use provider::WeatherProvider;
pub use service::WeatherService;
pub use validate::CoordinateQuery;
