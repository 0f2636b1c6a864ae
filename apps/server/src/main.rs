//! # Postboard Server
//!
//! Bootstraps the store (retrying until it answers, ensuring the schema,
//! seeding an empty posts table) and only then binds the HTTP listener.

use actix_web::{
    App, Error, HttpServer,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;
mod views;

use config::AppConfig;
use middleware::MethodOverrideMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;
use views::Views;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        store = %config.store,
        max_attempts = config.retry.max_attempts,
        delay_ms = config.retry.delay_ms(),
        "Starting Postboard"
    );

    let views = Views::new().context("failed to compile templates")?;

    // Exit non-zero without ever binding when the store cannot be prepared.
    let state = AppState::bootstrap(&config, views)
        .await
        .context("database bootstrap failed")?;

    tracing::info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || build_app(state.clone()))
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
        .run()
        .await?;

    Ok(())
}

/// The application with its middleware and routes.
pub(crate) fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(MethodOverrideMiddleware)
        .wrap(TracingLogger::default())
        .app_data(web::Data::new(state))
        .configure(handlers::configure_routes)
}
