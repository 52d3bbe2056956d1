// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Workout-Unifier API Server
//!
//! Serves the unified local/remote activity timeline and per-activity
//! heart-rate overlay series.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_unifier::{
    config::Config,
    services::{JsonExportStore, RemoteClient, TimelineService},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Workout-Unifier API");

    let local = JsonExportStore::new(&config.local_export_path);
    tracing::info!(path = %local.path().display(), "Using local health export");

    let remote = RemoteClient::new(config.remote_base_url.clone(), config.remote_timeout());
    tracing::info!(
        base_url = %remote.base_url(),
        timeout_secs = config.remote_timeout_secs,
        "Remote client initialized"
    );

    let timeline = TimelineService::new(
        Arc::new(local),
        Arc::new(remote),
        config.correlation_window(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        timeline,
    });

    let app = workout_unifier::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,workout_unifier=debug"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
