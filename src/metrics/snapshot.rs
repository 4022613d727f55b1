#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrderedMetricsSnapshot {
    pub insert_calls: u64,
    pub insert_rejected: u64, // duplicates turned away by insert

    pub set_calls: u64,
    pub set_rejected: u64,

    pub removals: u64,
    pub clears: u64,

    pub linear_searches: u64,
    pub binary_searches: u64,

    // gauge captured at snapshot time
    pub len: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub set_calls: u64,
    pub insert_updates: u64, // equivalent item already present, insert or set
    pub insert_new: u64,
    pub promotions: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub removals: u64, // remove, remove_at, pop_least_recent
    pub clears: u64,

    pub peek_calls: u64,
    pub peek_found: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl OrderedMetricsSnapshot {
    /// Fraction of inserts turned away as duplicates.
    pub fn rejection_rate(&self) -> f64 {
        if self.insert_calls == 0 {
            return 0.0;
        }
        self.insert_rejected as f64 / self.insert_calls as f64
    }
}

impl MruMetricsSnapshot {
    /// Fraction of indexed reads that found an item.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            return 0.0;
        }
        self.get_hits as f64 / self.get_calls as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_handle_zero_calls() {
        assert_eq!(OrderedMetricsSnapshot::default().rejection_rate(), 0.0);
        assert_eq!(MruMetricsSnapshot::default().hit_rate(), 0.0);
    }

    #[test]
    fn hit_rate_divides_hits_by_calls() {
        let snap = MruMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            get_misses: 1,
            ..Default::default()
        };
        assert!((snap.hit_rate() - 0.75).abs() < f64::EPSILON);
    }
}
