// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Groups heart-rate samples by the sensor that recorded them.

use crate::models::heart_rate::{
    HeartRateSample, HeartRateSourceGroup, RawHeartRateSample, SourceKey,
};
use std::collections::HashMap;

/// Partition samples by sensor, busiest sensor first.
///
/// Samples keep their input order within a group. Groups with equal sample
/// counts stay in first-encountered order.
pub fn group_by_source(samples: &[RawHeartRateSample]) -> Vec<HeartRateSourceGroup> {
    let mut index: HashMap<SourceKey, usize> = HashMap::new();
    let mut groups: Vec<HeartRateSourceGroup> = Vec::new();

    for sample in samples {
        let key = sample.source_key();
        let slot = *index.entry(key).or_insert_with_key(|key| {
            groups.push(HeartRateSourceGroup {
                source_name: key.source_name.clone(),
                device_name: key.device_name.clone(),
                manufacturer: key.manufacturer.clone(),
                model: key.model.clone(),
                sample_count: 0,
                samples: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.samples.push(HeartRateSample {
            timestamp: sample.timestamp,
            bpm: sample.bpm,
        });
        group.sample_count += 1;
    }

    // Stable: ties keep first-encountered order.
    groups.sort_by(|a, b| b.sample_count.cmp(&a.sample_count));
    groups
}

/// Total number of samples across all groups.
pub fn total_samples(groups: &[HeartRateSourceGroup]) -> usize {
    groups.iter().map(|g| g.sample_count).sum()
}
