// ABOUTME: Entry point for the textlog binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use textlog_server::{DEFAULT_BIND, DEFAULT_STORAGE_DIR, TextlogConfig};

const DEFAULT_LOG_FILTER: &str =
    "textlog=debug,textlog_server=debug,textlog_store=debug,tower_http=debug";

/// Append-only text log over HTTP.
#[derive(Debug, Parser)]
#[command(name = "textlog", version, about)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value_t = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Directory holding logs.txt; created if missing.
    #[arg(long, default_value = DEFAULT_STORAGE_DIR)]
    storage_dir: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let config = TextlogConfig::new(cli.bind, cli.storage_dir);

    tracing::info!(
        "textlog starting on {} with storage in {}",
        config.bind,
        config.storage_dir.display()
    );

    if let Err(e) = textlog_server::serve(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
