use serde::{Deserialize, Serialize};
use std::net::{AddrParseError, IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Number of UDP sockets bound with SO_REUSEPORT, one task each.
    #[serde(default = "default_num_workers")]
    pub num_workers: usize,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.bind_address.parse()?;
        Ok(SocketAddr::new(ip, self.dns_port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            bind_address: default_bind_address(),
            num_workers: default_num_workers(),
        }
    }
}

fn default_dns_port() -> u16 {
    5353
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_num_workers() -> usize {
    1
}
