// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Application configuration loaded from environment variables.

use crate::services::correlator::{DEFAULT_WINDOW_SECS, MAX_WINDOW_SECS};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_EXPORT_PATH: &str = "data/health_export.json";
const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 15;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote fitness API (e.g. "http://localhost:8000/garmin")
    pub remote_base_url: String,
    /// Health data export read by the local store
    pub local_export_path: PathBuf,
    /// Default correlation window in seconds
    pub correlation_window_secs: u64,
    /// Time budget for one remote request before it is abandoned
    pub remote_timeout_secs: u64,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            remote_base_url: "http://localhost:8000/garmin".to_string(),
            local_export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            correlation_window_secs: DEFAULT_WINDOW_SECS,
            remote_timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            remote_base_url: env::var("REMOTE_BASE_URL")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("REMOTE_BASE_URL"))?,
            local_export_path: env::var("LOCAL_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_PATH)),
            correlation_window_secs: window_or_default(parse_or(
                "CORRELATION_WINDOW_SECS",
                DEFAULT_WINDOW_SECS,
            )),
            remote_timeout_secs: parse_or("REMOTE_TIMEOUT_SECS", DEFAULT_REMOTE_TIMEOUT_SECS),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_or("PORT", 8080),
        })
    }

    /// Default correlation window, never longer than `MAX_WINDOW_SECS`.
    pub fn correlation_window(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.correlation_window_secs.min(MAX_WINDOW_SECS) as i64)
    }

    pub fn remote_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.remote_timeout_secs)
    }
}

/// Read and parse an env var, falling back to `default` when unset or invalid.
fn parse_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Out-of-range windows fall back to the default like unparseable ones.
fn window_or_default(secs: u64) -> u64 {
    if secs > MAX_WINDOW_SECS {
        tracing::warn!(
            value = secs,
            max = MAX_WINDOW_SECS,
            "CORRELATION_WINDOW_SECS out of range, using default"
        );
        DEFAULT_WINDOW_SECS
    } else {
        secs
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
