// SPDX-License-Identifier: MIT
// Copyright 2026 The workout-unifier Authors

//! Services module - correlation core and collaborator clients.

pub mod correlator;
pub mod grouping;
pub mod local_store;
pub mod remote;
pub mod timeline;
pub mod unifier;

pub use correlator::correlate;
pub use grouping::group_by_source;
pub use local_store::{JsonExportStore, LocalStore, LocalStoreError};
pub use remote::{RemoteClient, RemoteError, RemoteSource};
pub use timeline::{ActivityRef, ActivitySeries, ActivitySources, RemoteStatus, Timeline, TimelineService};
pub use unifier::unify;
