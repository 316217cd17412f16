use clap::Parser;
use iterdns_domain::CliOverrides;
use std::net::Ipv4Addr;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod session;

use session::Session;

#[derive(Parser, Debug)]
#[command(name = "iterdns")]
#[command(version = "0.1.0")]
#[command(about = "iterdns - iterative DNS resolver walking root, TLD and authoritative servers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Root server to start every cold resolution from
    #[arg(long, value_name = "IP")]
    root_server: Option<Ipv4Addr>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Remove a cache entry by its listing position after resolving
    #[arg(long, value_name = "INDEX")]
    remove_entry: Option<String>,

    /// Empty the cache after resolving
    #[arg(long)]
    clear_cache: bool,

    /// Print the cache listing at the end of the run
    #[arg(long)]
    show_cache: bool,

    /// Domains to resolve, in order
    #[arg(value_name = "DOMAIN", required = true)]
    domains: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root_server,
        query_timeout: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting iterdns v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config)?;
    let mut session = Session::new(services.resolver);

    for domain in &cli.domains {
        match session.resolve(domain) {
            Ok(resolution) => {
                let source = if resolution.cache_hit { " (cached)" } else { "" };
                if resolution.aliases.is_empty() {
                    println!("{} -> {}{}", resolution.query, resolution.address, source);
                } else {
                    println!(
                        "{} -> {} via {}{}",
                        resolution.query, resolution.address, resolution.canonical_name, source
                    );
                }
            }
            Err(e) => {
                warn!(domain = %domain, error = %e, "Resolution failed");
                println!("{} -> error: {}", domain, e);
            }
        }
    }

    if let Some(index) = cli.remove_entry.as_deref() {
        match session.remove_cache_entry(index) {
            Ok(entry) => println!("Removed {}", entry),
            Err(e) => println!("Cache: {}", e),
        }
    }

    if cli.clear_cache {
        session.clear_cache();
        println!("Cache cleared");
    }

    if cli.show_cache {
        let entries = session.cache_entries();
        if entries.is_empty() {
            println!("Cache is empty");
        }
        for entry in entries {
            println!("{}", entry);
        }
    }

    Ok(())
}
