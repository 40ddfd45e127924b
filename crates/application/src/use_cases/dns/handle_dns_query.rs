use super::query_stats::QueryStats;
use crate::ports::ZoneLookup;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::debug;

pub struct HandleDnsQueryUseCase {
    zone: Arc<dyn ZoneLookup>,
    stats: Arc<QueryStats>,
}

impl HandleDnsQueryUseCase {
    pub fn new(zone: Arc<dyn ZoneLookup>) -> Self {
        Self {
            zone,
            stats: Arc::new(QueryStats::default()),
        }
    }

    /// Resolves `domain` against the zone. A miss is reported as `None`, not
    /// as an error; what goes on the wire for a miss is the encoder's call.
    pub fn execute(&self, domain: &str) -> Option<Ipv4Addr> {
        match self.zone.lookup(domain) {
            Some(address) => {
                self.stats.record_hit();
                debug!(domain = %domain, address = %address, "Zone hit");
                Some(address)
            }
            None => {
                self.stats.record_miss();
                debug!(domain = %domain, "Domain not in zone");
                None
            }
        }
    }

    pub fn record_dropped(&self) {
        self.stats.record_dropped();
    }

    pub fn stats(&self) -> Arc<QueryStats> {
        Arc::clone(&self.stats)
    }

    pub fn zone_size(&self) -> usize {
        self.zone.len()
    }
}
