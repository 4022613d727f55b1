use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::{MruMetricsSnapshot, OrderedMetricsSnapshot};
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for collection metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// by Prometheus or forwarded to an OpenTelemetry collector.
///
/// # Example
///
/// ```
/// use orderkit::collection::mru::MruCollection;
/// use orderkit::metrics::exporter::PrometheusTextExporter;
/// use orderkit::metrics::traits::MetricsExporter;
///
/// let mut recent = MruCollection::new(4);
/// recent.insert("a");
///
/// let exporter = PrometheusTextExporter::new("recent_files", Vec::new());
/// exporter.export(&recent.metrics_snapshot());
///
/// let text = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(text.contains("recent_files_insert_calls_total 1"));
/// ```
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        // A panic mid-write leaves at worst a truncated sample.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: u64) {
        self.write_metric("gauge", suffix, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<OrderedMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &OrderedMetricsSnapshot) {
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_rejected_total", snapshot.insert_rejected);
        self.write_counter("set_calls_total", snapshot.set_calls);
        self.write_counter("set_rejected_total", snapshot.set_rejected);
        self.write_counter("removals_total", snapshot.removals);
        self.write_counter("clears_total", snapshot.clears);
        self.write_counter("linear_searches_total", snapshot.linear_searches);
        self.write_counter("binary_searches_total", snapshot.binary_searches);
        self.write_gauge("len", snapshot.len as u64);
    }
}

impl<W: Write + Send> MetricsExporter<MruMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &MruMetricsSnapshot) {
        self.write_counter("get_calls_total", snapshot.get_calls);
        self.write_counter("get_hits_total", snapshot.get_hits);
        self.write_counter("get_misses_total", snapshot.get_misses);
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("set_calls_total", snapshot.set_calls);
        self.write_counter("insert_updates_total", snapshot.insert_updates);
        self.write_counter("insert_new_total", snapshot.insert_new);
        self.write_counter("promotions_total", snapshot.promotions);
        self.write_counter("evict_calls_total", snapshot.evict_calls);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter("removals_total", snapshot.removals);
        self.write_counter("clears_total", snapshot.clears);
        self.write_counter("peek_calls_total", snapshot.peek_calls);
        self.write_counter("peek_found_total", snapshot.peek_found);
        self.write_gauge("len", snapshot.len as u64);
        self.write_gauge("capacity", snapshot.capacity as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_export_format() {
        let exporter = PrometheusTextExporter::new("heroes", Vec::new());
        exporter.export(&OrderedMetricsSnapshot {
            insert_calls: 4,
            insert_rejected: 1,
            len: 3,
            ..Default::default()
        });

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE heroes_insert_calls_total counter\n"));
        assert!(text.contains("heroes_insert_calls_total 4\n"));
        assert!(text.contains("heroes_insert_rejected_total 1\n"));
        assert!(text.contains("# TYPE heroes_len gauge\nheroes_len 3\n"));
    }

    #[test]
    fn mru_export_without_prefix() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&MruMetricsSnapshot {
            promotions: 2,
            set_calls: 5,
            removals: 1,
            capacity: 12,
            ..Default::default()
        });

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("\npromotions_total 2\n"));
        assert!(text.contains("\nset_calls_total 5\n"));
        assert!(text.contains("\nremovals_total 1\n"));
        assert!(text.contains("capacity 12"));
        assert!(!text.contains("_promotions_total"));
    }

    #[test]
    fn every_sample_has_a_type_line() {
        let exporter = PrometheusTextExporter::new("m", Vec::new());
        exporter.export(&MruMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len() % 2, 0);
        for pair in lines.chunks(2) {
            assert!(pair[0].starts_with("# TYPE "));
            assert!(!pair[1].starts_with('#'));
        }
    }
}
