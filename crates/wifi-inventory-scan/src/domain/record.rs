//! Scan input and per-network output value objects.

use serde::{Deserialize, Serialize};
use wifi_inventory_core::{BssidId, PhyMode, SecurityMode, SignalHealth, WlanChannel};

/// Placeholder for identity fields the interface did not report.
pub const UNKNOWN: &str = "Unknown";

// ---------------------------------------------------------------------------
// ScannedNetworkRecord -- input
// ---------------------------------------------------------------------------

/// One access point as returned by a wireless scan.
///
/// Owned by the [`WirelessInterface`](crate::port::WirelessInterface); the
/// aggregator only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedNetworkRecord {
    /// Network name. Empty for hidden networks.
    pub ssid: String,
    /// Access point MAC. Empty when the platform redacted it.
    pub bssid: String,
    /// Received signal strength in dBm.
    pub rssi: i32,
    /// Noise floor in dBm; only reported for the associated network.
    pub noise: Option<i32>,
    pub channel_number: u32,
    /// Rendered band, e.g. `"5 GHz"`.
    pub band: String,
    /// Rendered highest PHY mode, e.g. `"802.11ax (Wi-Fi 6/6E)"`.
    pub phy_mode: String,
    /// Raw IE octets from the beacon or probe response, if captured.
    pub ie_payload: Option<Vec<u8>>,
}

impl ScannedNetworkRecord {
    /// The parsed BSSID, if the textual form is a valid MAC.
    pub fn bssid_id(&self) -> Option<BssidId> {
        BssidId::parse(&self.bssid).ok()
    }
}

// ---------------------------------------------------------------------------
// NearbyWifiNetwork -- output
// ---------------------------------------------------------------------------

/// A scanned network enriched with its resolved vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyWifiNetwork {
    pub ssid: String,
    pub bssid: String,
    /// Resolved vendor name; empty when the lookup was unavailable.
    pub vendor: String,
    pub channel: u32,
    pub band: String,
    pub phy_mode: String,
    pub rssi: i32,
    /// Whether this is the access point the interface is associated with.
    pub is_connected: bool,
}

impl NearbyWifiNetwork {
    /// Combine a scan record with its resolved vendor.
    pub fn from_record(
        record: &ScannedNetworkRecord,
        vendor: String,
        connected_bssid: &str,
    ) -> Self {
        Self {
            ssid: record.ssid.clone(),
            bssid: record.bssid.clone(),
            vendor,
            channel: record.channel_number,
            band: record.band.clone(),
            phy_mode: record.phy_mode.clone(),
            rssi: record.rssi,
            is_connected: record.bssid == connected_bssid,
        }
    }

    pub fn signal_health(&self) -> SignalHealth {
        SignalHealth::from_rssi(self.rssi)
    }
}

// ---------------------------------------------------------------------------
// ConnectedInterface -- input
// ---------------------------------------------------------------------------

/// Live properties of the active wireless interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedInterface {
    /// BSD name of the interface, e.g. `en0`.
    #[serde(default)]
    pub interface_name: Option<String>,
    #[serde(default)]
    pub ssid: Option<String>,
    #[serde(default)]
    pub bssid: Option<String>,
    /// Received signal strength in dBm.
    pub rssi: i32,
    /// Noise floor in dBm.
    pub noise: i32,
    #[serde(default)]
    pub channel: Option<WlanChannel>,
    pub phy_mode: PhyMode,
    pub security: SecurityMode,
    #[serde(default)]
    pub country_code: Option<String>,
    /// Negotiated transmit rate in Mbps.
    #[serde(default)]
    pub tx_rate_mbps: f64,
}

impl ConnectedInterface {
    /// Signal-to-noise ratio in dB.
    pub fn snr(&self) -> i32 {
        self.rssi - self.noise
    }

    /// Operating channel number, or 0 if the interface reports none.
    pub fn primary_channel(&self) -> i32 {
        self.channel
            .map(|ch| i32::try_from(ch.number).unwrap_or(0))
            .unwrap_or(0)
    }
}
