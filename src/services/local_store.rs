// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Local activity store: workouts and heart-rate samples recorded on device.
//!
//! The device exports its health data as a JSON document:
//!
//! ```json
//! {
//!   "workouts": [
//!     {"id": "…", "start": "2025-12-07T09:27:00Z", "duration_secs": 1800.0, "kind": "running"}
//!   ],
//!   "heart_rate": [
//!     {"timestamp": "2025-12-07T09:27:05Z", "bpm": 96.0, "source_name": "Watch",
//!      "device_name": "Apple Watch", "manufacturer": "Apple Inc.", "model": "Watch7,1"}
//!   ]
//! }
//! ```

use crate::models::activity::LocalActivity;
use crate::models::heart_rate::RawHeartRateSample;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Provider of local workouts and their heart-rate samples.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// All workouts currently in the store.
    async fn list_workouts(&self) -> Result<Vec<LocalActivity>, LocalStoreError>;

    /// Samples recorded during `workout`, in ascending time order.
    async fn heart_rate_samples(
        &self,
        workout: &LocalActivity,
    ) -> Result<Vec<RawHeartRateSample>, LocalStoreError>;
}

/// Parsed health data export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthExport {
    #[serde(default)]
    pub workouts: Vec<LocalActivity>,
    #[serde(default)]
    pub heart_rate: Vec<RawHeartRateSample>,
}

impl HealthExport {
    /// Samples whose timestamp lies within the workout, oldest first.
    pub fn samples_for(&self, workout: &LocalActivity) -> Vec<RawHeartRateSample> {
        let end = workout.end();
        let mut samples: Vec<RawHeartRateSample> = self
            .heart_rate
            .iter()
            .filter(|s| s.timestamp >= workout.start && s.timestamp <= end)
            .cloned()
            .collect();
        samples.sort_by_key(|s| s.timestamp);
        samples
    }
}

/// Local store backed by a JSON export file, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonExportStore {
    path: PathBuf,
}

impl JsonExportStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HealthExport, LocalStoreError> {
        let json_data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LocalStoreError::Io(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&json_data).map_err(|e| LocalStoreError::Parse(e.to_string()))
    }
}

#[async_trait]
impl LocalStore for JsonExportStore {
    async fn list_workouts(&self) -> Result<Vec<LocalActivity>, LocalStoreError> {
        let export = self.load().await?;
        tracing::debug!(count = export.workouts.len(), "Loaded local workouts");
        Ok(export.workouts)
    }

    async fn heart_rate_samples(
        &self,
        workout: &LocalActivity,
    ) -> Result<Vec<RawHeartRateSample>, LocalStoreError> {
        let samples = self.load().await?.samples_for(workout);
        tracing::debug!(
            workout_id = %workout.id,
            count = samples.len(),
            "Loaded heart rate samples"
        );
        Ok(samples)
    }
}

/// Errors from the local store.
#[derive(Debug, thiserror::Error)]
pub enum LocalStoreError {
    #[error("Failed to read export: {0}")]
    Io(String),

    #[error("Failed to parse export: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityKind;
    use chrono::{TimeZone, Utc};

    const EXPORT: &str = r#"{
        "workouts": [
            {"id": "w1", "start": "2025-12-07T09:00:00Z", "duration_secs": 600.0, "kind": "running"}
        ],
        "heart_rate": [
            {"timestamp": "2025-12-07T09:05:00Z", "bpm": 120.0, "source_name": "Watch"},
            {"timestamp": "2025-12-07T08:59:59Z", "bpm": 70.0, "source_name": "Watch"},
            {"timestamp": "2025-12-07T09:01:00Z", "bpm": 110.0, "source_name": "Strap",
             "manufacturer": "Polar", "model": "H10"},
            {"timestamp": "2025-12-07T09:10:00Z", "bpm": 130.0, "source_name": "Watch"},
            {"timestamp": "2025-12-07T09:10:01Z", "bpm": 90.0, "source_name": "Watch"}
        ]
    }"#;

    fn workout() -> LocalActivity {
        LocalActivity {
            id: "w1".to_string(),
            start: Utc.with_ymd_and_hms(2025, 12, 7, 9, 0, 0).unwrap(),
            duration_secs: 600.0,
            kind: ActivityKind::Running,
        }
    }

    #[test]
    fn test_samples_within_workout_sorted() {
        let export: HealthExport = serde_json::from_str(EXPORT).unwrap();
        let bpms: Vec<f64> = export.samples_for(&workout()).iter().map(|s| s.bpm).collect();
        // Inclusive of both ends, ascending by time.
        assert_eq!(bpms, vec![110.0, 120.0, 130.0]);
    }

    #[test]
    fn test_export_optional_sections() {
        let export: HealthExport = serde_json::from_str("{}").unwrap();
        assert!(export.workouts.is_empty());
        assert!(export.samples_for(&workout()).is_empty());
    }

    #[test]
    fn test_oversized_duration_covers_later_samples() {
        let export: HealthExport = serde_json::from_str(EXPORT).unwrap();
        let workout = LocalActivity {
            duration_secs: 1e300,
            ..workout()
        };
        assert_eq!(workout.end(), chrono::DateTime::<Utc>::MAX_UTC);

        let bpms: Vec<f64> = export.samples_for(&workout).iter().map(|s| s.bpm).collect();
        assert_eq!(bpms, vec![110.0, 120.0, 130.0, 90.0]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let store = JsonExportStore::new("does/not/exist.json");
        let result = store.list_workouts().await;
        assert!(matches!(result, Err(LocalStoreError::Io(_))));
    }

    #[tokio::test]
    async fn test_reads_export_file() {
        let path = std::env::temp_dir().join(format!(
            "workout-unifier-export-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, EXPORT).await.unwrap();

        let store = JsonExportStore::new(&path);
        let workouts = store.list_workouts().await.unwrap();
        assert_eq!(workouts, vec![workout()]);

        let samples = store.heart_rate_samples(&workouts[0]).await.unwrap();
        assert_eq!(samples.len(), 3);

        tokio::fs::remove_file(&path).await.ok();
    }
}
