use std::net::Ipv4Addr;

/// Read-only view of the authoritative zone.
///
/// Implementations are populated once before serving and must not change
/// afterwards, so they can be shared across workers without locking.
pub trait ZoneLookup: Send + Sync {
    /// Exact, case-sensitive match. `None` means the name is not in the zone.
    fn lookup(&self, domain: &str) -> Option<Ipv4Addr>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
