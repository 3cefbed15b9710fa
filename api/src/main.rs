// api/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod messages;
mod state;
mod web;

#[cfg(test)]
mod test_support;

use crate::config::{AppConfig, LogFormat, StoreBackend};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use products_core::{InMemoryProductStore, PgProductStore, ProductStore};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default `info` level
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ProductStore>> {
  match config.store_backend {
    StoreBackend::Postgres => {
      let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres store")?;
      let store = PgProductStore::connect(database_url, config.db_max_connections)
        .await
        .context("Failed to connect to the database")?;
      Ok(Arc::new(store))
    }
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory product store; data is lost on shutdown.");
      Ok(Arc::new(InMemoryProductStore::new()))
    }
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Tracing needs the log format, so configuration is read first and its error reported afterwards
  let config_result = AppConfig::from_env();
  init_tracing(config_result.as_ref().map(|cfg| cfg.log_format).unwrap_or_default());

  tracing::info!("Starting products API server...");

  let app_config = match config_result {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e).context("Configuration error");
    }
  };
  tracing::info!(
    store_backend = %app_config.store_backend,
    max_connections = app_config.db_max_connections,
    "Application configuration loaded successfully."
  );

  let store = build_store(&app_config).await.map_err(|e| {
    tracing::error!(error = %e, "Failed to initialize the product store.");
    e
  })?;

  let app_state = AppState {
    store,
    config: app_config.clone(),
  };

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("Server terminated with an error")
}
