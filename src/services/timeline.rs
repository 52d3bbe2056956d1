// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Timeline service.
//!
//! Handles the fetch/correlate/unify cycle:
//! 1. Fetch local workouts and remote activities concurrently
//! 2. Correlate them into the unified timeline
//! 3. For one entry, fetch local samples and remote records concurrently
//! 4. Group local samples by device and build the chart series
//!
//! The device breakdown of one entry needs only step 3's local half.
//!
//! Local store failures propagate. Remote failures degrade to "no remote
//! data"; cancellation is not logged as a failure.

use crate::error::{AppError, Result};
use crate::models::heart_rate::{HeartRateSourceGroup, RawHeartRateSample};
use crate::models::series::{SeriesStats, TimeSeries};
use crate::models::unified::{UnifiedActivity, REMOTE_SOURCE_LABEL};
use crate::services::correlator::correlate;
use crate::services::grouping::group_by_source;
use crate::services::local_store::LocalStore;
use crate::services::remote::{RemoteError, RemoteSource};
use crate::services::unifier::{unify, LOCAL_LABEL_PREFIX};
use chrono::Duration;
use serde::Serialize;
use std::sync::Arc;

/// Outcome of the remote side of a request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum RemoteStatus {
    Available,
    /// The entry has no remote counterpart, so nothing was fetched.
    NotApplicable,
    Cancelled,
    Unavailable(String),
}

/// Unified timeline plus whether remote data made it in.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub activities: Vec<UnifiedActivity>,
    pub remote_status: RemoteStatus,
}

/// Chart data for one timeline entry.
#[derive(Debug, Clone)]
pub struct ActivitySeries {
    pub activity: UnifiedActivity,
    pub groups: Vec<HeartRateSourceGroup>,
    pub series: Vec<TimeSeries>,
    pub remote_status: RemoteStatus,
}

/// Per-device grouping of the local samples of one timeline entry.
#[derive(Debug, Clone)]
pub struct ActivitySources {
    pub activity: UnifiedActivity,
    pub groups: Vec<HeartRateSourceGroup>,
}

/// Identifies one timeline entry.
///
/// Local and remote ids come from separate id spaces, so a local workout and
/// a remote-only activity can share an id. `kind` ("local", "remote" or
/// "matched") picks between them; without it the most recent entry wins.
#[derive(Debug, Clone, Copy)]
pub struct ActivityRef<'a> {
    pub id: &'a str,
    pub kind: Option<&'a str>,
}

impl<'a> ActivityRef<'a> {
    pub fn new(id: &'a str) -> Self {
        Self { id, kind: None }
    }

    pub fn with_kind(id: &'a str, kind: &'a str) -> Self {
        Self {
            id,
            kind: Some(kind),
        }
    }

    fn matches(&self, activity: &UnifiedActivity) -> bool {
        activity.id() == self.id && self.kind.is_none_or(|k| activity.variant_name() == k)
    }
}

impl ActivitySeries {
    /// Stats for every non-empty series, in series order.
    pub fn stats(&self) -> Vec<SeriesStats> {
        self.series.iter().filter_map(TimeSeries::stats).collect()
    }
}

/// Runs correlation and unification against the two collaborators.
#[derive(Clone)]
pub struct TimelineService {
    local: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteSource>,
    default_window: Duration,
}

impl TimelineService {
    pub fn new(
        local: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteSource>,
        default_window: Duration,
    ) -> Self {
        Self {
            local,
            remote,
            default_window,
        }
    }

    pub fn default_window(&self) -> Duration {
        self.default_window
    }

    /// Build the unified timeline, most recent first.
    pub async fn unified_timeline(&self, window: Option<Duration>) -> Result<Timeline> {
        let window = window.unwrap_or(self.default_window);

        let (local, remote) = tokio::join!(self.local.list_workouts(), self.remote.list_activities());

        let local = local?;
        let (remote, remote_status) = match remote {
            Ok(activities) => (activities, RemoteStatus::Available),
            Err(e) => (Vec::new(), degrade("list_activities", &e)),
        };

        let activities = correlate(&local, &remote, window);
        tracing::info!(
            count = activities.len(),
            remote_status = ?remote_status,
            "Built unified timeline"
        );

        Ok(Timeline {
            activities,
            remote_status,
        })
    }

    /// Resolve one entry of the unified timeline.
    async fn find_activity(
        &self,
        target: ActivityRef<'_>,
        window: Option<Duration>,
    ) -> Result<UnifiedActivity> {
        let timeline = self.unified_timeline(window).await?;
        timeline
            .activities
            .into_iter()
            .find(|a| target.matches(a))
            .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", target.id)))
    }

    async fn local_samples(&self, activity: &UnifiedActivity) -> Result<Vec<RawHeartRateSample>> {
        match activity.local() {
            Some(workout) => Ok(self.local.heart_rate_samples(workout).await?),
            None => Ok(Vec::new()),
        }
    }

    /// Build chart series for one timeline entry.
    pub async fn activity_series(
        &self,
        target: ActivityRef<'_>,
        window: Option<Duration>,
    ) -> Result<ActivitySeries> {
        let activity = self.find_activity(target, window).await?;

        let local_samples = self.local_samples(&activity);
        let remote_details = async {
            match activity.remote() {
                Some(remote) => Some(self.remote.activity_details(&remote.id).await),
                None => None,
            }
        };

        let (samples, details) = tokio::join!(local_samples, remote_details);
        let samples = samples?;

        let (records, remote_status) = match details {
            None => (None, RemoteStatus::NotApplicable),
            Some(Ok(details)) => (Some(details.records), RemoteStatus::Available),
            Some(Err(e)) => (None, degrade("activity_details", &e)),
        };

        let groups = group_by_source(&samples);
        let series = unify(
            &groups,
            records.as_deref(),
            LOCAL_LABEL_PREFIX,
            REMOTE_SOURCE_LABEL,
        );

        tracing::debug!(
            activity_id = target.id,
            sources = groups.len(),
            series = series.len(),
            "Built activity series"
        );

        Ok(ActivitySeries {
            activity,
            groups,
            series,
            remote_status,
        })
    }

    /// Group the local samples of one timeline entry by device.
    /// Remote records are not fetched.
    pub async fn activity_sources(
        &self,
        target: ActivityRef<'_>,
        window: Option<Duration>,
    ) -> Result<ActivitySources> {
        let activity = self.find_activity(target, window).await?;
        let samples = self.local_samples(&activity).await?;
        let groups = group_by_source(&samples);

        tracing::debug!(
            activity_id = target.id,
            sources = groups.len(),
            "Built activity source breakdown"
        );

        Ok(ActivitySources { activity, groups })
    }
}

/// Turn a remote failure into a status, logging anything but cancellation.
fn degrade(operation: &str, error: &RemoteError) -> RemoteStatus {
    if error.is_cancelled() {
        tracing::debug!(operation, "Remote fetch cancelled, continuing without it");
        RemoteStatus::Cancelled
    } else {
        tracing::warn!(operation, error = %error, "Remote fetch failed, continuing without it");
        RemoteStatus::Unavailable(error.to_string())
    }
}
