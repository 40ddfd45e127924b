use pocket_dns_application::ports::ZoneLookup;
use pocket_dns_domain::config::ZoneConfig;
use pocket_dns_domain::{DomainError, ZoneRecord};
use rustc_hash::FxHashMap;
use std::net::Ipv4Addr;
use tracing::warn;

/// Immutable domain → IPv4 map built once at startup.
///
/// There are no mutating methods; share it behind an `Arc` and read it from
/// any number of workers.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    records: FxHashMap<Box<str>, Ipv4Addr>,
}

impl ZoneTable {
    /// Builds the table. When a domain appears more than once the last
    /// record wins.
    pub fn new(records: impl IntoIterator<Item = ZoneRecord>) -> Self {
        let mut map = FxHashMap::default();
        for record in records {
            let domain = record.domain.into_boxed_str();
            if let Some(previous) = map.insert(domain.clone(), record.address) {
                warn!(
                    domain = %domain,
                    previous = %previous,
                    address = %record.address,
                    "Duplicate zone record, keeping the last one"
                );
            }
        }
        Self { records: map }
    }

    pub fn from_config(config: &ZoneConfig) -> Result<Self, DomainError> {
        Ok(Self::new(config.to_records()?))
    }
}

impl ZoneLookup for ZoneTable {
    fn lookup(&self, domain: &str) -> Option<Ipv4Addr> {
        self.records.get(domain).copied()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
