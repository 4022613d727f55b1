use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    MruMetricsReadRecorder, MruMetricsRecorder, OrderedMetricsReadRecorder,
    OrderedMetricsRecorder,
};

#[derive(Debug, Default, Clone)]
pub struct OrderedMetrics {
    pub insert_calls: u64,
    pub insert_rejected: u64,
    pub set_calls: u64,
    pub set_rejected: u64,
    pub removals: u64,
    pub clears: u64,
    pub linear_searches: MetricsCell,
    pub binary_searches: MetricsCell,
}

impl OrderedMetricsRecorder for OrderedMetrics {
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_rejected(&mut self) {
        self.insert_rejected += 1;
    }

    fn record_set_call(&mut self) {
        self.set_calls += 1;
    }

    fn record_set_rejected(&mut self) {
        self.set_rejected += 1;
    }

    fn record_remove(&mut self) {
        self.removals += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl OrderedMetricsReadRecorder for OrderedMetrics {
    fn record_linear_search(&self) {
        self.linear_searches.incr();
    }

    fn record_binary_search(&self) {
        self.binary_searches.incr();
    }
}

#[derive(Debug, Default, Clone)]
pub struct MruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub set_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub promotions: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub removals: u64,
    pub clears: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl MruMetricsRecorder for MruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_set_call(&mut self) {
        self.set_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_remove(&mut self) {
        self.removals += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl MruMetricsReadRecorder for MruMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}
