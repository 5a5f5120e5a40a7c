//! Binary crate for the `weather-server` HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Exposing the core service over HTTP

use clap::Parser;

mod cli;
mod routes;
mod server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_server=info,weather_core=info,actix_web=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
