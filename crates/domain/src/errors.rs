use thiserror::Error;

/// Reasons a datagram cannot be decoded as a query. Both mean "drop the
/// packet, send nothing".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Payload shorter than the 12-byte DNS header")]
    TooShort,

    #[error("Malformed question section")]
    MalformedQuery,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Failed to decode query: {0}")]
    Decode(#[from] DecodeError),
}
