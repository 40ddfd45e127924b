//! Pocket DNS Domain Layer
pub mod config;
pub mod dns_header;
pub mod errors;
pub mod zone_record;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::DnsHeader;
pub use errors::{DecodeError, DomainError};
pub use zone_record::ZoneRecord;
