//! # Reachd
//!
//! Domain reachability probe: DNS, HTTP and HTTPS checks behind a small JSON API.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use reachd_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "reachd")]
#[command(version)]
#[command(about = "Checks whether a domain resolves and answers over HTTP and HTTPS")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        bind_address: cli.bind,
        port: cli.port,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Reachd starting");

    let services = di::Services::new(&config)?;
    server::start_web_server(&config.server, services.app_state()).await?;

    info!("Reachd stopped");
    Ok(())
}
