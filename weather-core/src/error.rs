use thiserror::Error;

/// Client-facing failures of a weather request.
///
/// Each variant maps to exactly one HTTP status via [`WeatherError::status_code`];
/// the `Display` text is the message shown to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    #[error("{0}")]
    Validation(String),

    #[error("OpenWeatherMap API key is not configured")]
    Configuration,

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid coordinates provided")]
    InvalidCoordinates,

    #[error("OpenWeatherMap API error: {0}. Please verify your API key is valid and activated.")]
    Unauthorized(String),

    /// Any other upstream failure. `status` is `None` when no response was received.
    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },
}

impl WeatherError {
    pub fn status_code(&self) -> u16 {
        match self {
            WeatherError::Validation(_) | WeatherError::InvalidCoordinates => 400,
            WeatherError::Unauthorized(_) => 401,
            WeatherError::NotFound(_) => 404,
            WeatherError::Configuration | WeatherError::Upstream { .. } => 500,
        }
    }
}

/// Failure of a single upstream call, before it is mapped to a [`WeatherError`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("upstream responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}
