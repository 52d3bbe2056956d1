// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Data models for the application.

pub mod activity;
pub mod heart_rate;
pub mod series;
pub mod unified;

pub use activity::{ActivityKind, LocalActivity, RemoteActivity, RemoteActivityRecord};
pub use heart_rate::{
    HeartRateRecord, HeartRateSample, HeartRateSourceGroup, RawHeartRateSample,
    RemoteActivityDetails, SourceKey,
};
pub use series::{SeriesPoint, SeriesStats, TimeSeries};
pub use unified::UnifiedActivity;
