//! LoL champion mastery browser.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 champ-mastery                 │
//!                         │                                               │
//!     Browser request     │  ┌──────────┐    ┌───────────┐                │
//!     ────────────────────┼─▶│   http   │───▶│ handlers  │                │
//!                         │  │  server  │    └─────┬─────┘                │
//!                         │  └──────────┘          │                      │
//!                         │        ┌───────────────┼──────────────┐       │
//!                         │        ▼               ▼              ▼       │
//!                         │  ┌──────────┐  ┌──────────────┐  ┌─────────┐  │
//!                         │  │ session  │  │  game_data   │  │ player  │──┼──▶ Riot API
//!                         │  │  store   │  │   client     │  │ client  │  │
//!                         │  └──────────┘  └──────┬───────┘  └────┬────┘  │
//!                         │                       │          ┌────┴────┐  │
//!     HTML page           │  ┌──────────┐         │          │ region  │  │
//!     ◀───────────────────┼──│  pages   │         ▼          └─────────┘  │
//!                         │  └──────────┘     Data Dragon                 │
//!                         └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use champ_mastery::config::load_config;
use champ_mastery::observability::{logging, metrics};
use champ_mastery::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "champ-mastery")]
#[command(about = "Browse League of Legends champions with your mastery levels", long_about = None)]
struct Cli {
    /// TOML config file. Defaults plus environment are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    logging::init_tracing(&config.observability.log_level);

    tracing::info!("champ-mastery v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_dragon_url = %config.upstream.data_dragon_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validated in load_config
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
