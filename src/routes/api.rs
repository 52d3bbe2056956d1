// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! API routes consumed by the presentation layer.

use crate::error::{AppError, Result};
use crate::models::heart_rate::HeartRateSourceGroup;
use crate::models::series::{SeriesStats, TimeSeries};
use crate::models::unified::UnifiedActivity;
use crate::services::correlator::MAX_WINDOW_SECS;
use crate::services::grouping::total_samples;
use crate::services::timeline::{ActivityRef, RemoteStatus};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(get_activities))
        .route("/api/activities/{id}/series", get(get_activity_series))
        .route("/api/activities/{id}/sources", get(get_activity_sources))
}

#[derive(Deserialize)]
struct WindowQuery {
    /// Correlation window override in seconds
    window_secs: Option<u64>,
}

fn parse_window(query: &WindowQuery) -> Result<Option<chrono::Duration>> {
    match query.window_secs {
        Some(secs) if secs > MAX_WINDOW_SECS => Err(AppError::BadRequest(format!(
            "window_secs must be at most {}",
            MAX_WINDOW_SECS
        ))),
        Some(secs) => Ok(Some(chrono::Duration::seconds(secs as i64))),
        None => Ok(None),
    }
}

#[derive(Deserialize)]
struct EntryQuery {
    window_secs: Option<u64>,
    /// "local", "remote" or "matched"; disambiguates ids shared across sources
    kind: Option<String>,
}

impl EntryQuery {
    fn window(&self) -> Result<Option<chrono::Duration>> {
        parse_window(&WindowQuery {
            window_secs: self.window_secs,
        })
    }

    fn target<'a>(&'a self, id: &'a str) -> Result<ActivityRef<'a>> {
        match self.kind.as_deref() {
            None => Ok(ActivityRef::new(id)),
            Some(kind @ ("local" | "remote" | "matched")) => Ok(ActivityRef::with_kind(id, kind)),
            Some(other) => Err(AppError::BadRequest(format!(
                "kind must be one of local, remote, matched (got {})",
                other
            ))),
        }
    }
}

// ─── Timeline ────────────────────────────────────────────────

#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitySummary {
    pub id: String,
    /// "local", "remote" or "matched"
    pub kind: String,
    pub display_name: String,
    pub start: String,
    pub duration_secs: Option<f64>,
    pub local_id: Option<String>,
    pub remote_id: Option<String>,
    pub sport: Option<String>,
    pub distance_meters: Option<f64>,
    pub avg_hr: Option<i32>,
}

impl From<&UnifiedActivity> for ActivitySummary {
    fn from(activity: &UnifiedActivity) -> Self {
        let remote = activity.remote();
        Self {
            id: activity.id().to_string(),
            kind: activity.variant_name().to_string(),
            display_name: activity.display_name(),
            start: format_utc_rfc3339(activity.sort_instant()),
            duration_secs: activity.duration_secs(),
            local_id: activity.local().map(|l| l.id.clone()),
            remote_id: remote.map(|r| r.id.clone()),
            sport: remote.map(|r| r.sport.clone()),
            distance_meters: remote.and_then(|r| r.distance_meters),
            avg_hr: remote.and_then(|r| r.avg_heart_rate),
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivitySummary>,
    #[cfg_attr(feature = "binding-generation", ts(skip))]
    pub remote_status: RemoteStatus,
}

/// Get the unified timeline.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WindowQuery>,
) -> Result<Json<ActivitiesResponse>> {
    let window = parse_window(&params)?;
    tracing::debug!(window_secs = ?params.window_secs, "Fetching unified timeline");

    let timeline = state.timeline.unified_timeline(window).await?;

    Ok(Json(ActivitiesResponse {
        activities: timeline.activities.iter().map(ActivitySummary::from).collect(),
        remote_status: timeline.remote_status,
    }))
}

// ─── Heart Rate Series ───────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SeriesResponse {
    pub activity: ActivitySummary,
    pub series: Vec<TimeSeries>,
    pub stats: Vec<SeriesStats>,
    #[cfg_attr(feature = "binding-generation", ts(skip))]
    pub remote_status: RemoteStatus,
}

/// Get overlay chart series for one timeline entry.
async fn get_activity_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<EntryQuery>,
) -> Result<Json<SeriesResponse>> {
    let window = params.window()?;
    let result = state
        .timeline
        .activity_series(params.target(&id)?, window)
        .await?;
    let stats = result.stats();

    Ok(Json(SeriesResponse {
        activity: ActivitySummary::from(&result.activity),
        series: result.series,
        stats,
        remote_status: result.remote_status,
    }))
}

// ─── Source Breakdown ────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SourceSummary {
    pub display_name: String,
    pub source_name: String,
    pub device_name: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub sample_count: usize,
}

impl From<&HeartRateSourceGroup> for SourceSummary {
    fn from(group: &HeartRateSourceGroup) -> Self {
        Self {
            display_name: group.display_name(),
            source_name: group.source_name.clone(),
            device_name: group.device_name.clone(),
            manufacturer: group.manufacturer.clone(),
            model: group.model.clone(),
            sample_count: group.sample_count,
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SourcesResponse {
    pub activity: ActivitySummary,
    pub total_samples: usize,
    pub source_count: usize,
    pub sources: Vec<SourceSummary>,
}

/// Get the per-device breakdown of local heart-rate samples.
async fn get_activity_sources(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<EntryQuery>,
) -> Result<Json<SourcesResponse>> {
    let window = params.window()?;
    let result = state
        .timeline
        .activity_sources(params.target(&id)?, window)
        .await?;

    Ok(Json(SourcesResponse {
        activity: ActivitySummary::from(&result.activity),
        total_samples: total_samples(&result.groups),
        source_count: result.groups.len(),
        sources: result.groups.iter().map(SourceSummary::from).collect(),
    }))
}
