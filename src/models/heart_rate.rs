// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Heart-rate samples, per-device groups and remote heart-rate records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A heart-rate sample from the local store with its device metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHeartRateSample {
    pub timestamp: DateTime<Utc>,
    /// Beats per minute
    pub bpm: f64,
    /// App or device that wrote the sample (always present)
    pub source_name: String,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

impl RawHeartRateSample {
    /// Grouping key for this sample's physical sensor.
    pub fn source_key(&self) -> SourceKey {
        SourceKey {
            source_name: self.source_name.clone(),
            device_name: self.device_name.clone(),
            manufacturer: self.manufacturer.clone(),
            model: self.model.clone(),
        }
    }
}

/// Identity of one physical sensor. Absent fields are part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceKey {
    pub source_name: String,
    pub device_name: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
}

/// A single `(instant, bpm)` reading inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeartRateSample {
    pub timestamp: DateTime<Utc>,
    pub bpm: f64,
}

/// All samples attributed to one sensor during one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct HeartRateSourceGroup {
    pub source_name: String,
    pub device_name: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub sample_count: usize,
    /// Samples in the order the local store delivered them
    pub samples: Vec<HeartRateSample>,
}

impl HeartRateSourceGroup {
    /// Device name if known, else "manufacturer model", else the source name.
    pub fn display_name(&self) -> String {
        if let Some(device) = &self.device_name {
            return device.clone();
        }
        match (&self.manufacturer, &self.model) {
            (Some(manufacturer), Some(model)) => format!("{} {}", manufacturer, model),
            _ => self.source_name.clone(),
        }
    }
}

/// One heart-rate record from the remote activity detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateRecord {
    /// e.g. "2025-12-07 09:27:38.000000"
    pub timestamp: String,
    pub hr: i32,
}

/// Response of `GET /activities/{id}` on the remote API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteActivityDetails {
    pub activity_id: String,
    pub records: Vec<HeartRateRecord>,
}
