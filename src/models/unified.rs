// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Unified view over local and remote activities.

use crate::models::activity::{LocalActivity, RemoteActivity};
use chrono::{DateTime, Utc};

/// Label appended to matched entries and used for the remote series.
pub const REMOTE_SOURCE_LABEL: &str = "Garmin";

/// One entry of the unified timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum UnifiedActivity {
    LocalOnly(LocalActivity),
    RemoteOnly(RemoteActivity),
    Matched {
        local: LocalActivity,
        remote: RemoteActivity,
    },
}

impl UnifiedActivity {
    /// Local id when a local record is present, else the remote id.
    pub fn id(&self) -> &str {
        match self {
            UnifiedActivity::LocalOnly(local) => &local.id,
            UnifiedActivity::RemoteOnly(remote) => &remote.id,
            UnifiedActivity::Matched { local, .. } => &local.id,
        }
    }

    /// Instant used to order the timeline.
    pub fn sort_instant(&self) -> DateTime<Utc> {
        match self {
            UnifiedActivity::LocalOnly(local) => local.start,
            UnifiedActivity::RemoteOnly(remote) => remote.start,
            UnifiedActivity::Matched { local, .. } => local.start,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            UnifiedActivity::LocalOnly(local) => local.kind.name().to_string(),
            UnifiedActivity::RemoteOnly(remote) => remote.name.clone(),
            UnifiedActivity::Matched { local, .. } => {
                format!("{} + {}", local.kind.name(), REMOTE_SOURCE_LABEL)
            }
        }
    }

    /// Duration in seconds; remote activities carry none.
    pub fn duration_secs(&self) -> Option<f64> {
        match self {
            UnifiedActivity::LocalOnly(local) => Some(local.duration_secs),
            UnifiedActivity::RemoteOnly(_) => None,
            UnifiedActivity::Matched { local, .. } => Some(local.duration_secs),
        }
    }

    pub fn local(&self) -> Option<&LocalActivity> {
        match self {
            UnifiedActivity::LocalOnly(local) => Some(local),
            UnifiedActivity::RemoteOnly(_) => None,
            UnifiedActivity::Matched { local, .. } => Some(local),
        }
    }

    pub fn remote(&self) -> Option<&RemoteActivity> {
        match self {
            UnifiedActivity::LocalOnly(_) => None,
            UnifiedActivity::RemoteOnly(remote) => Some(remote),
            UnifiedActivity::Matched { remote, .. } => Some(remote),
        }
    }

    /// Short tag for API responses: "local", "remote" or "matched".
    pub fn variant_name(&self) -> &'static str {
        match self {
            UnifiedActivity::LocalOnly(_) => "local",
            UnifiedActivity::RemoteOnly(_) => "remote",
            UnifiedActivity::Matched { .. } => "matched",
        }
    }
}
