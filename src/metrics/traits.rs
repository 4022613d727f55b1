//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting, and export are split into small traits so that
//! collection logic only ever writes counters.
//!
//! ## Architecture
//!
//! ```text
//!   Recording (inside collections):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ OrderedMetricsRecorder       │    │ MruMetricsRecorder           │
//!   │ insert/set/remove/clear      │    │ get/insert/promote/evict     │
//!   ├──────────────────────────────┤    ├──────────────────────────────┤
//!   │ OrderedMetricsReadRecorder   │    │ MruMetricsReadRecorder       │
//!   │ (&self: search paths)        │    │ (&self: peek)                │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```
//!
//! Read recorders exist because `peek` and the insertion-point search run
//! under `&self`; their counters use [`MetricsCell`](super::cell::MetricsCell).

/// Counters for sorted-collection mutations.
pub trait OrderedMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_insert_rejected(&mut self);
    fn record_set_call(&mut self);
    fn record_set_rejected(&mut self);
    fn record_remove(&mut self);
    fn record_clear(&mut self);
}

/// Read-only sorted-collection metrics for &self methods.
pub trait OrderedMetricsReadRecorder {
    fn record_linear_search(&self);
    fn record_binary_search(&self);
}

/// Counters for recency-ordered collections.
pub trait MruMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_set_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_promotion(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_remove(&mut self);
    fn record_clear(&mut self);
}

/// Read-only MRU metrics for &self methods.
pub trait MruMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
