// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Workout-Unifier: one timeline from on-device workouts and a remote
//! fitness tracker.
//!
//! This crate correlates local workouts with remote activities by start
//! time, groups heart-rate samples by recording device, and builds the
//! overlay chart series served to the presentation layer.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::TimelineService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub timeline: TimelineService,
}
