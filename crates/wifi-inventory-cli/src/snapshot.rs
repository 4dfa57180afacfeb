//! `snapshot` subcommand: build a [`WirelessSnapshot`] from a recorded scan.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use wifi_inventory_core::SignalHealth;
use wifi_inventory_scan::{
    FixtureWirelessInterface, InventoryConfig, NearbyWifiNetwork, SnapshotBuilder,
    WirelessSnapshot,
};

use crate::{build_resolver, OutputFormat};

/// Arguments for the snapshot command
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Recorded scan (JSON) to serve as the wireless interface
    #[arg(short = 'i', long)]
    pub fixture: PathBuf,

    /// Use the built-in OUI table instead of the HTTP lookup service
    #[arg(long)]
    pub offline: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Network display row for tables
#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "SSID")]
    ssid: String,
    #[tabled(rename = "BSSID")]
    bssid: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Ch")]
    channel: u32,
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "PHY")]
    phy_mode: String,
    #[tabled(rename = "RSSI")]
    rssi: i32,
    #[tabled(rename = "Signal")]
    health: SignalHealth,
}

impl From<&NearbyWifiNetwork> for NetworkRow {
    fn from(n: &NearbyWifiNetwork) -> Self {
        Self {
            marker: if n.is_connected { "*" } else { "" },
            ssid: if n.ssid.is_empty() {
                "<hidden>".to_string()
            } else {
                n.ssid.clone()
            },
            bssid: n.bssid.clone(),
            vendor: n.vendor.clone(),
            channel: n.channel,
            band: n.band.clone(),
            phy_mode: n.phy_mode.clone(),
            rssi: n.rssi,
            health: n.signal_health(),
        }
    }
}

/// Execute the snapshot command
pub async fn execute(args: SnapshotArgs, config: &InventoryConfig) -> Result<()> {
    let wireless = FixtureWirelessInterface::from_path(&args.fixture)
        .with_context(|| format!("Failed to load scan fixture {}", args.fixture.display()))?;
    let resolver = build_resolver(&config.resolver, args.offline)?;
    let builder = SnapshotBuilder::new(Arc::new(wireless), resolver, config.aggregator.clone());

    let Some(snapshot) = builder.build().await else {
        anyhow::bail!("no active wireless interface");
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Table => print_snapshot(&snapshot),
    }
    Ok(())
}

fn health_colored(health: SignalHealth) -> colored::ColoredString {
    match health {
        SignalHealth::Excellent | SignalHealth::Good => health.label().green(),
        SignalHealth::Fair => health.label().yellow(),
        SignalHealth::Poor | SignalHealth::Unusable => health.label().red(),
    }
}

fn print_snapshot(s: &WirelessSnapshot) {
    println!("{}", "Wireless Snapshot".bold().cyan());
    println!("{}", "=".repeat(50));
    println!("  {} {}", "Interface:".dimmed(), s.interface_name);
    println!("  {} {}", "SSID:".dimmed(), s.ssid);
    println!("  {} {}", "BSSID:".dimmed(), s.bssid);
    let vendor = if s.vendor.is_empty() { "-" } else { s.vendor.as_str() };
    println!("  {} {}", "Vendor:".dimmed(), vendor);
    println!("  {} {}", "Country:".dimmed(), s.country_code);
    println!(
        "  {} {} dBm ({})",
        "RSSI:".dimmed(),
        s.rssi,
        health_colored(s.rssi_health)
    );
    println!("  {} {} dBm", "Noise:".dimmed(), s.noise);
    println!("  {} {} dB ({})", "SNR:".dimmed(), s.snr, health_colored(s.snr_health));
    println!("  {} {:.0} Mbps", "Tx Rate:".dimmed(), s.tx_rate_mbps);
    println!("  {} {}", "Channel:".dimmed(), s.channel_description);
    println!("  {} {}", "PHY Mode:".dimmed(), s.phy_mode);
    println!("  {} {}", "Security:".dimmed(), s.security);
    println!("  {} {}", "Encryption:".dimmed(), s.encryption);

    if let Some(load) = &s.bss_load {
        println!(
            "  {} {} stations, {:.1}% utilization",
            "BSS Load:".dimmed(),
            load.station_count,
            load.channel_utilization_percent
        );
    }
    if !s.secondary_channels.is_empty() {
        let channels: Vec<String> = s.secondary_channels.iter().map(i32::to_string).collect();
        println!("  {} {}", "Bonded Channels:".dimmed(), channels.join(", "));
    }
    if !s.vendor_ies.is_empty() {
        let names: Vec<&str> = s.vendor_ies.iter().map(|v| v.vendor_name.as_str()).collect();
        println!("  {} {}", "Vendor IEs:".dimmed(), names.join(", "));
    }
    println!(
        "  {} {}",
        "Captured:".dimmed(),
        s.captured_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    print_networks("Same-SSID Access Points", &s.same_ssid_networks);
    print_networks("Nearby Networks", &s.nearby_networks);
}

fn print_networks(title: &str, networks: &[NearbyWifiNetwork]) {
    println!();
    println!("{} ({})", title.bold(), networks.len());
    if networks.is_empty() {
        println!("  none");
        return;
    }
    let rows: Vec<NetworkRow> = networks.iter().map(NetworkRow::from).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "interface": {"ssid": "HomeNet", "bssid": "00:10:18:aa:bb:01", "rssi": -60, "noise": -90,
                      "phy_mode": "ac", "security": "wpa2_personal"},
        "networks": [
            {"ssid": "HomeNet", "bssid": "00:10:18:aa:bb:01", "rssi": -60, "channel": 6,
             "band": "2.4ghz"}
        ]
    }"#;

    #[tokio::test]
    async fn offline_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        let args = SnapshotArgs {
            fixture: file.path().to_path_buf(),
            offline: true,
            format: OutputFormat::Table,
        };
        execute(args, &InventoryConfig::default()).await.unwrap();
    }

    #[tokio::test]
    async fn missing_interface_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"interface": null, "networks": []}"#).unwrap();
        let args = SnapshotArgs {
            fixture: file.path().to_path_buf(),
            offline: true,
            format: OutputFormat::Json,
        };
        let err = execute(args, &InventoryConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("no active wireless interface"));
    }

    #[test]
    fn hidden_ssid_row() {
        let net = NearbyWifiNetwork {
            ssid: String::new(),
            bssid: "aa:bb:cc:dd:ee:ff".into(),
            vendor: String::new(),
            channel: 1,
            band: "2.4 GHz".into(),
            phy_mode: "Unknown".into(),
            rssi: -90,
            is_connected: true,
        };
        let row = NetworkRow::from(&net);
        assert_eq!(row.ssid, "<hidden>");
        assert_eq!(row.marker, "*");
        assert_eq!(row.health, SignalHealth::Unusable);
    }
}
