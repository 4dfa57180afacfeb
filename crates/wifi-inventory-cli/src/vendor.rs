//! `vendor` subcommand: resolve one or more BSSIDs to vendor names.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};
use wifi_inventory_scan::{InventoryConfig, LOOKUP_FAILED};

use crate::{build_resolver, OutputFormat};

/// Arguments for the vendor command
#[derive(Args, Debug)]
pub struct VendorArgs {
    /// BSSIDs to resolve (aa:bb:cc:dd:ee:ff)
    #[arg(required = true)]
    pub bssids: Vec<String>,

    /// Use the built-in OUI table instead of the HTTP lookup service
    #[arg(long)]
    pub offline: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Vendor display row for tables
#[derive(Tabled, Serialize, Debug, PartialEq, Eq)]
pub struct VendorRow {
    #[tabled(rename = "BSSID")]
    pub bssid: String,
    #[tabled(rename = "Vendor")]
    pub vendor: String,
}

/// Resolve every BSSID in argument order, one lookup at a time.
pub async fn resolve_all(args: &VendorArgs, config: &InventoryConfig) -> Result<Vec<VendorRow>> {
    let resolver = build_resolver(&config.resolver, args.offline)?;

    let mut rows = Vec::with_capacity(args.bssids.len());
    for bssid in &args.bssids {
        let vendor = resolver.resolve_bssid(bssid).await;
        rows.push(VendorRow {
            bssid: bssid.clone(),
            vendor: if vendor.is_empty() {
                LOOKUP_FAILED.to_string()
            } else {
                vendor
            },
        });
    }
    Ok(rows)
}

/// Execute the vendor command
pub async fn execute(args: VendorArgs, config: &InventoryConfig) -> Result<()> {
    let rows = resolve_all(&args, config).await?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }
    Ok(())
}
