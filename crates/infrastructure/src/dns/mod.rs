pub mod hex_dump;
pub mod query_decoder;
pub mod server;
pub mod wire_response;
pub mod zone_table;

pub use query_decoder::{decode, DecodedQuery};
pub use server::DnsServerHandler;
pub use zone_table::ZoneTable;
