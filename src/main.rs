//! Flow API — CLI server
//!
//! ```sh
//! # Run with default config (~/.config/flow-api/config.toml)
//! flow-api
//!
//! # Custom config path and port
//! flow-api --config /etc/flow-api/config.toml --port 8080
//!
//! # Validate config without starting
//! flow-api --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use flow_api::config::AppConfig;
use flow_api::server::{init_tracing, ServerHandle, ServerOptions};

/// Read-only paginated HTTP API over captured network flows.
#[derive(Parser, Debug)]
#[command(
    name = "flow-api",
    version,
    about = "Read-only paginated HTTP API over captured network flows",
    long_about = "Serves GET /flows/ over the FLOW_INFO table written by the flow collector.\n\n\
                  Default config: ~/.config/flow-api/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FLOW_API_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Write the resolved configuration to the config path and exit.
    #[arg(long, conflicts_with = "check")]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(flow_api::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(e.into());
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate()?;

    // ── Config validation / init modes ─────────────────────────
    if cli.check {
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!(
            "   Database    : {}",
            flow_api::DatabaseConfig {
                url: config.database.connection_url(),
                pool: config.database.pool.clone(),
            }
            .redacted_url()
        );
        println!("   Page size   : {}", config.pagination.default_size);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }
    if cli.init {
        config.save(&config_path)?;
        println!("✅ Configuration written to {}", config_path.display());
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions { config }).await {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start flow API: {}", e);
            return Err(e);
        }
    };

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}
