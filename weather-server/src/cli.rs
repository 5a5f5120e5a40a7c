use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use weather_core::{Config, WeatherService};

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather proxy HTTP service")]
pub struct Cli {
    /// Path to a TOML config file. Defaults to the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the upstream base URL, e.g. for a local mock.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Listen address, e.g. "0.0.0.0:8080".
        #[arg(long)]
        bind: Option<String>,
    },

    /// Look up the current weather for a location once and print it as JSON.
    Show {
        /// Location name, e.g. "London" or "London,GB".
        location: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(base_url) = self.base_url {
            config.provider.base_url = base_url;
        }

        match self.command.unwrap_or(Command::Serve { bind: None }) {
            Command::Serve { bind } => {
                if let Some(bind) = bind {
                    config.server.bind = bind;
                }
                server::run(config).await
            }
            Command::Show { location } => {
                let service = WeatherService::from_config(&config.provider)?;
                let record = service
                    .weather_by_location(&location)
                    .await
                    .with_context(|| format!("Weather lookup for \"{location}\" failed"))?;

                println!("{}", serde_json::to_string_pretty(&record)?);
                Ok(())
            }
        }
    }
}
