// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Builds overlay chart series from grouped local samples and remote records.

use crate::models::heart_rate::{HeartRateRecord, HeartRateSourceGroup};
use crate::models::series::{SeriesPoint, TimeSeries, LOCAL_SERIES_PALETTE, REMOTE_SERIES_COLOR};
use crate::time_utils::parse_remote_timestamp;

/// Label prefix for series built from the local store.
pub const LOCAL_LABEL_PREFIX: &str = "Apple Health";

/// One series per local group (in group order), then the remote series if
/// remote records were supplied. Points are never re-sorted.
pub fn unify(
    local_groups: &[HeartRateSourceGroup],
    remote_records: Option<&[HeartRateRecord]>,
    local_label_prefix: &str,
    remote_label: &str,
) -> Vec<TimeSeries> {
    let mut series: Vec<TimeSeries> = local_groups
        .iter()
        .enumerate()
        .map(|(i, group)| TimeSeries {
            name: format!("{}: {}", local_label_prefix, group.display_name()),
            color: LOCAL_SERIES_PALETTE[i % LOCAL_SERIES_PALETTE.len()].to_string(),
            points: group
                .samples
                .iter()
                .map(|s| SeriesPoint {
                    timestamp: s.timestamp,
                    value: s.bpm,
                })
                .collect(),
        })
        .collect();

    if let Some(records) = remote_records {
        series.push(TimeSeries {
            name: remote_label.to_string(),
            color: REMOTE_SERIES_COLOR.to_string(),
            points: records
                .iter()
                .map(|r| SeriesPoint {
                    timestamp: parse_remote_timestamp(&r.timestamp),
                    value: f64::from(r.hr),
                })
                .collect(),
        });
    }

    series
}
