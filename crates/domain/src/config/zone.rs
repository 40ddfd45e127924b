use crate::errors::DomainError;
use crate::zone_record::ZoneRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ZoneEntry {
    pub domain: String,

    pub ip: String,
}

impl ZoneEntry {
    pub fn new(domain: &str, ip: &str) -> Self {
        Self {
            domain: domain.to_string(),
            ip: ip.to_string(),
        }
    }

    pub fn to_record(&self) -> Result<ZoneRecord, DomainError> {
        ZoneRecord::parse(&self.domain, &self.ip)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    #[serde(default = "default_records")]
    pub records: Vec<ZoneEntry>,
}

impl ZoneConfig {
    /// Parses every entry, failing on the first one that is not a valid A mapping.
    pub fn to_records(&self) -> Result<Vec<ZoneRecord>, DomainError> {
        self.records.iter().map(ZoneEntry::to_record).collect()
    }
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            records: default_records(),
        }
    }
}

fn default_records() -> Vec<ZoneEntry> {
    vec![
        ZoneEntry::new("example.com", "93.184.216.34"),
        ZoneEntry::new("localhost", "127.0.0.1"),
    ]
}
