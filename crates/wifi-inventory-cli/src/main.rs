//! wifi-inventory CLI Entry Point

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wifi_inventory_cli::{config, decode, snapshot, vendor, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output.
    let filter = match cli.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level).context("Invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Decode(args) => {
            decode::execute(args)?;
        }
        Commands::Vendor(args) => {
            let config = config::load(cli.config.as_deref(), cli.vendor_url.as_deref())?;
            vendor::execute(args, &config).await?;
        }
        Commands::Snapshot(args) => {
            let config = config::load(cli.config.as_deref(), cli.vendor_url.as_deref())?;
            snapshot::execute(args, &config).await?;
        }
        Commands::Version => {
            println!("wifi-inventory {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
