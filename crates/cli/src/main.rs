use clap::Parser;
use pocket_dns_application::use_cases::HandleDnsQueryUseCase;
use pocket_dns_domain::CliOverrides;
use pocket_dns_infrastructure::dns::{DnsServerHandler, ZoneTable};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "pocket-dns")]
#[command(version)]
#[command(about = "Pocket DNS - Minimal authoritative A-record server")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Number of UDP workers
    #[arg(short = 'w', long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        num_workers: cli.workers,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Pocket DNS Server v{}", env!("CARGO_PKG_VERSION"));

    // Built once here; nothing mutates the zone after this point
    let zone = ZoneTable::from_config(&config.zone)?;
    let use_case = Arc::new(HandleDnsQueryUseCase::new(Arc::new(zone)));
    info!(records = use_case.zone_size(), "Zone loaded");

    let dns_addr = config.server.socket_addr()?;
    let dns_handler = DnsServerHandler::new(use_case.clone());

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_handler, config.server.num_workers) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    let stats = use_case.stats().snapshot();
    info!(
        queries = stats.queries,
        hits = stats.hits,
        misses = stats.misses,
        dropped = stats.dropped,
        hit_rate = stats.hit_rate(),
        "Server shutdown complete"
    );
    Ok(())
}
