use crate::errors::DomainError;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Longest label a DNS name may carry.
const MAX_LABEL_LEN: usize = 63;

/// One authoritative A mapping. Domains match exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    pub domain: String,
    pub address: Ipv4Addr,
}

impl ZoneRecord {
    pub fn new(domain: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            domain: domain.into(),
            address,
        }
    }

    /// Builds a record from the textual form used in configuration files.
    pub fn parse(domain: &str, ip: &str) -> Result<Self, DomainError> {
        validate_domain(domain)?;
        let address = Ipv4Addr::from_str(ip.trim())
            .map_err(|_| DomainError::InvalidIpAddress(format!("{} ({})", ip, domain)))?;
        Ok(Self::new(domain, address))
    }
}

/// Queries decode to dot-joined labels with no trailing dot, so a configured
/// domain must have the same shape to ever match.
fn validate_domain(domain: &str) -> Result<(), DomainError> {
    if domain.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain must not be empty".to_string(),
        ));
    }
    if domain.ends_with('.') {
        return Err(DomainError::InvalidDomainName(format!(
            "{}: trailing dot is not allowed",
            domain
        )));
    }
    for label in domain.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{}: empty label",
                domain
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{}: label longer than {} bytes",
                domain, MAX_LABEL_LEN
            )));
        }
    }
    Ok(())
}
