//! wifi-inventory CLI
//!
//! Command-line interface for inspecting the local wireless environment.
//!
//! # Features
//!
//! - **decode**: Decode a raw 802.11 Information Element buffer
//! - **vendor**: Resolve access point vendors by BSSID
//! - **snapshot**: Build a full wireless snapshot from a recorded scan
//! - **version**: Display version information
//!
//! # Usage
//!
//! ```bash
//! # Decode the IEs of a beacon captured on channel 36
//! wifi-inventory decode 30140100000fac040100000fac040100000fac080000 --channel 36
//!
//! # Look up two BSSIDs against the built-in OUI table
//! wifi-inventory vendor 00:10:18:aa:bb:01 00:50:f2:11:22:33 --offline
//!
//! # Snapshot a recorded scan as JSON
//! wifi-inventory snapshot --fixture scan.json --format json
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use wifi_inventory_scan::{
    MacVendorsClient, ResolverConfig, StaticOuiLookup, VendorCache, VendorLookup, VendorResolver,
};

pub mod config;
pub mod decode;
pub mod snapshot;
pub mod vendor;

/// wifi-inventory Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "wifi-inventory")]
#[command(author, version, about = "Inspect 802.11 networks, vendors and security suites")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the vendor lookup base URL
    #[arg(long, global = true)]
    pub vendor_url: Option<String>,

    /// Log filter (e.g. "debug", "wifi_inventory_scan=trace"); defaults to RUST_LOG or "info"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a hex-encoded Information Element buffer
    Decode(decode::DecodeArgs),

    /// Resolve access point vendors
    Vendor(vendor::VendorArgs),

    /// Build a wireless snapshot from a recorded scan
    Snapshot(snapshot::SnapshotArgs),

    /// Display version information
    Version,
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty table output
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Build a resolver over the HTTP endpoint, or the built-in OUI table when
/// `offline`.
pub fn build_resolver(config: &ResolverConfig, offline: bool) -> Result<VendorResolver> {
    let lookup: Arc<dyn VendorLookup> = if offline {
        Arc::new(StaticOuiLookup)
    } else {
        Arc::new(MacVendorsClient::new(config)?)
    };
    Ok(VendorResolver::new(lookup, Arc::new(VendorCache::new()), config.clone()))
}
