use std::sync::atomic::{AtomicU64, Ordering};

/// Per-process counters, updated from every worker with relaxed atomics.
#[derive(Debug, Default)]
pub struct QueryStats {
    queries: AtomicU64,
    hits: AtomicU64,
    misses: AtomicU64,
    dropped: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryStatsSnapshot {
    pub queries: u64,
    pub hits: u64,
    pub misses: u64,
    pub dropped: u64,
}

impl QueryStats {
    pub fn record_hit(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// A datagram that never became a query (undecodable).
    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> QueryStatsSnapshot {
        QueryStatsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}

impl QueryStatsSnapshot {
    pub fn hit_rate(&self) -> f64 {
        if self.queries > 0 {
            (self.hits as f64 / self.queries as f64) * 100.0
        } else {
            0.0
        }
    }
}
