// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Named time series for overlay charts.

use chrono::{DateTime, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Colours assigned to local series in order.
pub const LOCAL_SERIES_PALETTE: [&str; 6] = ["blue", "green", "orange", "purple", "teal", "pink"];

/// Colour of the remote series.
pub const REMOTE_SERIES_COLOR: &str = "red";

/// A point on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// A named, coloured sequence of points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TimeSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<SeriesPoint>,
}

/// Min/max/average of a series' values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeriesStats {
    pub name: String,
    pub min: f64,
    pub max: f64,
    /// Mean truncated to a whole number of beats per minute
    pub avg: i64,
}

impl TimeSeries {
    /// Summary statistics, or `None` for an empty series.
    pub fn stats(&self) -> Option<SeriesStats> {
        let first = self.points.first()?;
        let (min, max, sum) = self.points.iter().fold(
            (first.value, first.value, 0.0),
            |(min, max, sum), p| (min.min(p.value), max.max(p.value), sum + p.value),
        );

        Some(SeriesStats {
            name: self.name.clone(),
            min,
            max,
            avg: (sum / self.points.len() as f64).trunc() as i64,
        })
    }
}
