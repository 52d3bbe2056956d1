// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Activity records from the local store and the remote fitness API.

use crate::time_utils::parse_remote_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of workout recorded by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Cycling,
    Walking,
    Swimming,
    Yoga,
    FunctionalStrengthTraining,
    HighIntensityIntervalTraining,
    #[serde(other)]
    Other,
}

impl ActivityKind {
    /// Human readable name shown in the timeline.
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Cycling => "Cycling",
            ActivityKind::Walking => "Walking",
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Yoga => "Yoga",
            ActivityKind::FunctionalStrengthTraining => "Strength Training",
            ActivityKind::HighIntensityIntervalTraining => "HIIT",
            ActivityKind::Other => "Workout",
        }
    }
}

/// A workout recorded by the on-device activity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalActivity {
    /// Opaque identifier assigned by the local store
    pub id: String,
    /// Start of the workout
    pub start: DateTime<Utc>,
    /// Duration in seconds
    pub duration_secs: f64,
    pub kind: ActivityKind,
}

impl LocalActivity {
    /// End of the workout (start plus duration, rounded to milliseconds).
    /// Durations past the representable range end at `MAX_UTC`.
    pub fn end(&self) -> DateTime<Utc> {
        let millis = (self.duration_secs.max(0.0) * 1000.0).round() as i64;
        chrono::TimeDelta::try_milliseconds(millis)
            .and_then(|duration| self.start.checked_add_signed(duration))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// Activity as returned by `GET /activities` on the remote API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteActivityRecord {
    pub activity_id: String,
    pub name: String,
    /// e.g. "2025-12-07 09:27:35.000000"
    pub start_time: String,
    pub sport: String,
    pub distance: Option<f64>,
    pub avg_hr: Option<i32>,
}

/// A remote activity with its start time normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteActivity {
    pub id: String,
    pub name: String,
    /// Parsed start; the fallback instant when `start_time` was malformed
    pub start: DateTime<Utc>,
    /// Start time exactly as the remote API sent it
    pub start_time: String,
    pub sport: String,
    pub distance_meters: Option<f64>,
    pub avg_heart_rate: Option<i32>,
}

impl From<RemoteActivityRecord> for RemoteActivity {
    fn from(record: RemoteActivityRecord) -> Self {
        Self {
            id: record.activity_id,
            name: record.name,
            start: parse_remote_timestamp(&record.start_time),
            start_time: record.start_time,
            sport: record.sport,
            distance_meters: record.distance,
            avg_heart_rate: record.avg_hr,
        }
    }
}
