// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use workout_unifier::config::Config;
use workout_unifier::models::{
    ActivityKind, HeartRateRecord, LocalActivity, RawHeartRateSample, RemoteActivity,
    RemoteActivityDetails, RemoteActivityRecord,
};
use workout_unifier::routes::create_router;
use workout_unifier::services::{
    LocalStore, LocalStoreError, RemoteError, RemoteSource, TimelineService,
};
use workout_unifier::AppState;

/// Instant `secs` seconds after the Unix epoch.
#[allow(dead_code)]
pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).expect("valid timestamp")
}

#[allow(dead_code)]
pub fn local(id: &str, secs: i64) -> LocalActivity {
    LocalActivity {
        id: id.to_string(),
        start: at(secs),
        duration_secs: 600.0,
        kind: ActivityKind::Running,
    }
}

/// Remote activity built through the wire format so the timestamp goes
/// through the normalizer.
#[allow(dead_code)]
pub fn remote(id: &str, secs: i64) -> RemoteActivity {
    RemoteActivity::from(RemoteActivityRecord {
        activity_id: id.to_string(),
        name: format!("Remote {}", id),
        start_time: at(secs).format("%Y-%m-%d %H:%M:%S.000000").to_string(),
        sport: "running".to_string(),
        distance: Some(5000.0),
        avg_hr: Some(140),
    })
}

#[allow(dead_code)]
pub fn sample(secs: i64, bpm: f64, source: &str, device: Option<&str>) -> RawHeartRateSample {
    RawHeartRateSample {
        timestamp: at(secs),
        bpm,
        source_name: source.to_string(),
        device_name: device.map(str::to_string),
        manufacturer: None,
        model: None,
    }
}

#[allow(dead_code)]
pub fn record(secs: i64, hr: i32) -> HeartRateRecord {
    HeartRateRecord {
        timestamp: at(secs).format("%Y-%m-%d %H:%M:%S.000000").to_string(),
        hr,
    }
}

/// In-memory local store.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeLocalStore {
    pub workouts: Vec<LocalActivity>,
    pub samples: HashMap<String, Vec<RawHeartRateSample>>,
    pub fail: bool,
}

#[async_trait]
impl LocalStore for FakeLocalStore {
    async fn list_workouts(&self) -> Result<Vec<LocalActivity>, LocalStoreError> {
        if self.fail {
            return Err(LocalStoreError::Io("store offline".to_string()));
        }
        Ok(self.workouts.clone())
    }

    async fn heart_rate_samples(
        &self,
        workout: &LocalActivity,
    ) -> Result<Vec<RawHeartRateSample>, LocalStoreError> {
        Ok(self.samples.get(&workout.id).cloned().unwrap_or_default())
    }
}

/// In-memory remote source. `list_error`/`details_error` force failures;
/// `details_calls` counts `activity_details` requests.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeRemote {
    pub activities: Vec<RemoteActivity>,
    pub records: HashMap<String, Vec<HeartRateRecord>>,
    pub list_error: Option<RemoteError>,
    pub details_error: Option<RemoteError>,
    pub details_calls: Arc<AtomicUsize>,
}

#[async_trait]
impl RemoteSource for FakeRemote {
    async fn list_activities(&self) -> Result<Vec<RemoteActivity>, RemoteError> {
        match &self.list_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.activities.clone()),
        }
    }

    async fn activity_details(
        &self,
        activity_id: &str,
    ) -> Result<RemoteActivityDetails, RemoteError> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.details_error {
            return Err(e.clone());
        }
        let records = self
            .records
            .get(activity_id)
            .cloned()
            .ok_or_else(|| RemoteError::Status {
                status: 404,
                body: "not found".to_string(),
            })?;
        Ok(RemoteActivityDetails {
            activity_id: activity_id.to_string(),
            records,
        })
    }
}

#[allow(dead_code)]
pub fn timeline_service(local: FakeLocalStore, remote: FakeRemote) -> TimelineService {
    let config = Config::default();
    TimelineService::new(Arc::new(local), Arc::new(remote), config.correlation_window())
}

/// Create a test app backed by in-memory collaborators.
#[allow(dead_code)]
pub fn create_test_app(local: FakeLocalStore, remote: FakeRemote) -> axum::Router {
    let state = Arc::new(AppState {
        config: Config::default(),
        timeline: timeline_service(local, remote),
    });
    create_router(state)
}
