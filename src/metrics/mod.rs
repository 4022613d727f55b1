//! Optional counters for the collections, enabled by the `metrics` feature.
//!
//! Each collection owns its recorder and exposes `metrics_snapshot()`; the
//! snapshot can be handed to any [`MetricsExporter`](traits::MetricsExporter),
//! such as [`PrometheusTextExporter`](exporter::PrometheusTextExporter).

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
