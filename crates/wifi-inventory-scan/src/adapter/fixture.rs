//! Adapter that replays a recorded scan from JSON.
//!
//! Used by the CLI on hosts without a supported wireless backend and by the
//! integration tests. The file holds the active interface (or `null`) and
//! every network the scan returned:
//!
//! ```json
//! {
//!   "interface": {"interface_name": "en0", "ssid": "HomeNet", "bssid": "aa:bb:cc:dd:ee:ff",
//!                 "rssi": -52, "noise": -90, "phy_mode": "ax", "security": "wpa3_personal",
//!                 "channel": {"number": 36, "band": "5ghz", "width": "80mhz"}},
//!   "networks": [
//!     {"ssid": "HomeNet", "bssid": "aa:bb:cc:dd:ee:ff", "rssi": -52, "channel": 36,
//!      "band": "5ghz", "supported_phy_modes": ["n", "ac", "ax"], "ie_hex": "30140100..."}
//!   ]
//! }
//! ```
//!
//! An SSID-filtered scan returns the networks whose SSID matches exactly.
//! Each entry's supported PHY modes collapse to the highest one, the way
//! CoreWLAN scan results are reported.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use wifi_inventory_core::{ChannelBand, PhyMode};

use crate::domain::record::{ConnectedInterface, ScannedNetworkRecord, UNKNOWN};
use crate::error::WirelessError;
use crate::port::WirelessInterface;

// ---------------------------------------------------------------------------
// File schema
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    interface: Option<ConnectedInterface>,
    #[serde(default)]
    networks: Vec<FixtureNetwork>,
}

#[derive(Debug, Deserialize)]
struct FixtureNetwork {
    #[serde(default)]
    ssid: String,
    #[serde(default)]
    bssid: String,
    rssi: i32,
    #[serde(default)]
    noise: Option<i32>,
    channel: u32,
    #[serde(default = "unknown_band")]
    band: ChannelBand,
    #[serde(default)]
    supported_phy_modes: Vec<PhyMode>,
    #[serde(default)]
    ie_hex: Option<String>,
}

fn unknown_band() -> ChannelBand {
    ChannelBand::Unknown
}

impl FixtureNetwork {
    fn into_record(self) -> Result<ScannedNetworkRecord, WirelessError> {
        let ie_payload = self
            .ie_hex
            .as_deref()
            .map(|text| {
                let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
                hex::decode(compact)
            })
            .transpose()
            .map_err(|source| WirelessError::InvalidHex {
                bssid: self.bssid.clone(),
                source,
            })?;

        let phy_mode = PhyMode::highest(self.supported_phy_modes.iter().copied())
            .map_or_else(|| UNKNOWN.to_owned(), |mode| mode.to_string());

        Ok(ScannedNetworkRecord {
            ssid: self.ssid,
            bssid: self.bssid,
            rssi: self.rssi,
            noise: self.noise,
            channel_number: self.channel,
            band: self.band.to_string(),
            phy_mode,
            ie_payload,
        })
    }
}

// ---------------------------------------------------------------------------
// FixtureWirelessInterface
// ---------------------------------------------------------------------------

/// A [`WirelessInterface`] that serves one recorded scan.
#[derive(Debug, Clone, Default)]
pub struct FixtureWirelessInterface {
    interface: Option<ConnectedInterface>,
    networks: Vec<ScannedNetworkRecord>,
}

impl FixtureWirelessInterface {
    /// Build directly from in-memory parts.
    pub fn new(interface: Option<ConnectedInterface>, networks: Vec<ScannedNetworkRecord>) -> Self {
        Self {
            interface,
            networks,
        }
    }

    /// Parse a fixture from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, WirelessError> {
        let file: FixtureFile = serde_json::from_str(json)?;
        let networks = file
            .networks
            .into_iter()
            .map(FixtureNetwork::into_record)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            networks = networks.len(),
            has_interface = file.interface.is_some(),
            "loaded scan fixture"
        );
        Ok(Self::new(file.interface, networks))
    }

    /// Read and parse a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WirelessError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[async_trait]
impl WirelessInterface for FixtureWirelessInterface {
    async fn active_interface(&self) -> Result<Option<ConnectedInterface>, WirelessError> {
        Ok(self.interface.clone())
    }

    async fn scan(&self, ssid: Option<&str>) -> Result<Vec<ScannedNetworkRecord>, WirelessError> {
        let records = match ssid {
            Some(wanted) => self
                .networks
                .iter()
                .filter(|n| n.ssid == wanted)
                .cloned()
                .collect(),
            None => self.networks.clone(),
        };
        Ok(records)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "interface": {
            "interface_name": "en0",
            "ssid": "HomeNet",
            "bssid": "aa:bb:cc:dd:ee:ff",
            "rssi": -52,
            "noise": -90,
            "phy_mode": "ax",
            "security": "wpa3_personal",
            "channel": {"number": 36, "band": "5ghz", "width": "80mhz"}
        },
        "networks": [
            {"ssid": "HomeNet", "bssid": "aa:bb:cc:dd:ee:ff", "rssi": -52, "channel": 36,
             "band": "5ghz", "supported_phy_modes": ["a", "n", "ac", "ax"],
             "ie_hex": "0b 05 05 00 80 64 00"},
            {"ssid": "Guest", "bssid": "11:22:33:44:55:66", "rssi": -71, "channel": 6,
             "band": "2.4ghz", "supported_phy_modes": ["b", "g", "n"]},
            {"ssid": "", "bssid": "", "rssi": -88, "channel": 11}
        ]
    }"#;

    #[tokio::test]
    async fn parses_interface_and_networks() {
        let fixture = FixtureWirelessInterface::from_json(SAMPLE).unwrap();
        let iface = fixture.active_interface().await.unwrap().unwrap();
        assert_eq!(iface.ssid.as_deref(), Some("HomeNet"));
        assert_eq!(iface.primary_channel(), 36);

        let all = fixture.scan(None).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].phy_mode, "802.11ax (Wi-Fi 6/6E)");
        assert_eq!(all[0].band, "5 GHz");
        assert_eq!(all[0].ie_payload.as_deref(), Some(&[11u8, 5, 5, 0, 128, 100, 0][..]));
        assert_eq!(all[1].phy_mode, "802.11n (Wi-Fi 4)");
        assert_eq!(all[2].phy_mode, "Unknown");
        assert_eq!(all[2].band, "Unknown");
        assert!(all[2].ie_payload.is_none());
    }

    #[tokio::test]
    async fn ssid_filter_is_exact() {
        let fixture = FixtureWirelessInterface::from_json(SAMPLE).unwrap();
        let home = fixture.scan(Some("HomeNet")).await.unwrap();
        assert_eq!(home.len(), 1);
        assert!(fixture.scan(Some("homenet")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn null_interface() {
        let fixture = FixtureWirelessInterface::from_json(r#"{"interface": null}"#).unwrap();
        assert!(fixture.active_interface().await.unwrap().is_none());
        assert!(fixture.scan(None).await.unwrap().is_empty());
    }

    #[test]
    fn bad_hex_names_the_bssid() {
        let json = r#"{"networks": [
            {"bssid": "aa:bb:cc:dd:ee:01", "rssi": -60, "channel": 1, "ie_hex": "zz"}
        ]}"#;
        match FixtureWirelessInterface::from_json(json) {
            Err(WirelessError::InvalidHex { bssid, .. }) => assert_eq!(bssid, "aa:bb:cc:dd:ee:01"),
            other => panic!("expected InvalidHex, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FixtureWirelessInterface::from_path("/nonexistent/scan.json").unwrap_err();
        assert!(matches!(err, WirelessError::Io(_)));
    }
}
