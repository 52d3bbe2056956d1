// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Matches local workouts to remote activities by start time.
//!
//! Matching is greedy: local workouts are visited most recent first and
//! each takes the first unconsumed remote activity (also most recent first)
//! whose start lies strictly within the window. Assignments are never
//! revisited.

use crate::models::activity::{LocalActivity, RemoteActivity};
use crate::models::unified::UnifiedActivity;
use chrono::Duration;
use std::collections::HashSet;

/// Default correlation window (15 minutes).
pub const DEFAULT_WINDOW_SECS: u64 = 900;

/// Largest accepted correlation window (one day).
pub const MAX_WINDOW_SECS: u64 = 86_400;

/// Build the unified timeline, most recent first.
///
/// A zero window disables matching.
pub fn correlate(
    local: &[LocalActivity],
    remote: &[RemoteActivity],
    window: Duration,
) -> Vec<UnifiedActivity> {
    let mut local_sorted: Vec<&LocalActivity> = local.iter().collect();
    local_sorted.sort_by(|a, b| b.start.cmp(&a.start));

    // Remote ids are unique in the output; later duplicates are dropped.
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut remote_sorted: Vec<&RemoteActivity> = remote
        .iter()
        .filter(|activity| seen_ids.insert(activity.id.as_str()))
        .collect();
    if remote_sorted.len() < remote.len() {
        tracing::debug!(
            dropped = remote.len() - remote_sorted.len(),
            "Ignoring remote activities with duplicate ids"
        );
    }
    remote_sorted.sort_by(|a, b| b.start.cmp(&a.start));

    let mut consumed: HashSet<&str> = HashSet::new();
    let mut unified = Vec::with_capacity(local.len() + remote_sorted.len());

    for workout in local_sorted {
        let candidate = remote_sorted.iter().find(|activity| {
            !consumed.contains(activity.id.as_str())
                && (activity.start - workout.start).abs() < window
        });

        match candidate {
            Some(activity) => {
                consumed.insert(activity.id.as_str());
                unified.push(UnifiedActivity::Matched {
                    local: workout.clone(),
                    remote: (*activity).clone(),
                });
            }
            None => unified.push(UnifiedActivity::LocalOnly(workout.clone())),
        }
    }

    let matched = consumed.len();
    unified.extend(
        remote_sorted
            .iter()
            .filter(|activity| !consumed.contains(activity.id.as_str()))
            .map(|activity| UnifiedActivity::RemoteOnly((*activity).clone())),
    );

    unified.sort_by(|a, b| b.sort_instant().cmp(&a.sort_instant()));

    tracing::debug!(
        local = local.len(),
        remote = remote.len(),
        matched,
        window_secs = window.num_seconds(),
        "Correlated activities"
    );

    unified
}
