mod handle_dns_query;
mod query_stats;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use query_stats::{QueryStats, QueryStatsSnapshot};
