use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use tracing::info;
use weather_core::{Config, WeatherService};

use crate::routes;

/// Serve the weather routes until the process is stopped.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let service = web::Data::new(WeatherService::from_config(&config.provider)?);
    let bind = config.server.bind;

    info!(
        %bind,
        upstream = %config.provider.base_url,
        configured = service.is_configured(),
        "Starting weather server"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(service.clone())
            .configure(routes::configure)
    })
    .bind(bind.as_str())
    .with_context(|| format!("Failed to bind {bind}"))?
    .run()
    .await
    .context("HTTP server stopped with an error")
}
