#![allow(dead_code)]

use pocket_dns_application::ports::ZoneLookup;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockZone {
    records: HashMap<String, Ipv4Addr>,
    lookups: AtomicUsize,
}

impl MockZone {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_record(mut self, domain: &str, ip: &str) -> Self {
        self.records.insert(domain.to_string(), ip.parse().unwrap());
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ZoneLookup for MockZone {
    fn lookup(&self, domain: &str) -> Option<Ipv4Addr> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.records.get(domain).copied()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
