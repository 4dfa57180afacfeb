//! The immutable result of one inventory poll.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wifi_inventory_core::{
    BssLoadInfo, CipherSuiteInfo, IeReport, PhyMode, SecondaryChannelOffset, SecurityMode,
    SignalHealth, VendorSpecificIe, WlanChannel,
};

use super::record::{ConnectedInterface, NearbyWifiNetwork, UNKNOWN};

/// Connected-network details plus the two enriched scan lists.
///
/// Built wholesale by [`SnapshotBuilder`](crate::service::SnapshotBuilder);
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirelessSnapshot {
    pub captured_at: DateTime<Utc>,

    // -- identity --
    pub interface_name: String,
    pub ssid: String,
    pub bssid: String,
    /// Vendor of the connected access point; empty when unresolved.
    pub vendor: String,
    pub country_code: String,

    // -- signal --
    pub rssi: i32,
    pub noise: i32,
    pub snr: i32,
    pub rssi_health: SignalHealth,
    pub snr_health: SignalHealth,
    pub tx_rate_mbps: f64,

    // -- radio --
    pub channel: Option<WlanChannel>,
    /// e.g. `"36 (5 GHz, 80 MHz, UNII-1, Non-DFS)"`, or `"Unknown"`.
    pub channel_description: String,
    pub phy_mode: PhyMode,
    pub security: SecurityMode,

    // -- decoded IEs of the connected BSS --
    pub cipher: Option<CipherSuiteInfo>,
    /// Rendered suite summary, or `"Unknown"` when no security element was seen.
    pub encryption: String,
    pub bss_load: Option<BssLoadInfo>,
    pub vendor_ies: Vec<VendorSpecificIe>,
    pub secondary_channel_offset: Option<SecondaryChannelOffset>,
    pub secondary_channels: Vec<i32>,

    // -- scans --
    pub same_ssid_networks: Vec<NearbyWifiNetwork>,
    pub nearby_networks: Vec<NearbyWifiNetwork>,
}

impl WirelessSnapshot {
    /// Assemble a snapshot from its already-computed parts.
    pub fn assemble(
        iface: &ConnectedInterface,
        report: IeReport,
        vendor: String,
        same_ssid_networks: Vec<NearbyWifiNetwork>,
        nearby_networks: Vec<NearbyWifiNetwork>,
    ) -> Self {
        let snr = iface.snr();
        let encryption = report
            .encryption_summary()
            .unwrap_or_else(|| UNKNOWN.to_owned());
        let channel_description = iface
            .channel
            .map_or_else(|| UNKNOWN.to_owned(), |ch| ch.detailed_description());
        let or_unknown =
            |field: &Option<String>| field.clone().unwrap_or_else(|| UNKNOWN.to_owned());

        Self {
            captured_at: Utc::now(),
            interface_name: or_unknown(&iface.interface_name),
            ssid: or_unknown(&iface.ssid),
            bssid: or_unknown(&iface.bssid),
            vendor,
            country_code: or_unknown(&iface.country_code),
            rssi: iface.rssi,
            noise: iface.noise,
            snr,
            rssi_health: SignalHealth::from_rssi(iface.rssi),
            snr_health: SignalHealth::from_snr(snr),
            tx_rate_mbps: iface.tx_rate_mbps,
            channel: iface.channel,
            channel_description,
            phy_mode: iface.phy_mode,
            security: iface.security,
            cipher: report.cipher,
            encryption,
            bss_load: report.bss_load,
            vendor_ies: report.vendor_ies,
            secondary_channel_offset: report.secondary_channel_offset,
            secondary_channels: report.secondary_channels,
            same_ssid_networks,
            nearby_networks,
        }
    }

    /// The connected network's entry in the nearby list, if it was scanned.
    pub fn connected_network(&self) -> Option<&NearbyWifiNetwork> {
        self.nearby_networks.iter().find(|n| n.is_connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iface() -> ConnectedInterface {
        ConnectedInterface {
            interface_name: Some("en0".into()),
            ssid: None,
            bssid: Some("aa:bb:cc:dd:ee:ff".into()),
            rssi: -70,
            noise: -90,
            channel: None,
            phy_mode: PhyMode::Ac,
            security: SecurityMode::Wpa2Personal,
            country_code: None,
            tx_rate_mbps: 433.0,
        }
    }

    #[test]
    fn missing_fields_render_unknown() {
        let snap = WirelessSnapshot::assemble(
            &iface(),
            IeReport::default(),
            String::new(),
            vec![],
            vec![],
        );
        assert_eq!(snap.ssid, "Unknown");
        assert_eq!(snap.country_code, "Unknown");
        assert_eq!(snap.channel_description, "Unknown");
        assert_eq!(snap.encryption, "Unknown");
        assert_eq!(snap.snr, 20);
        assert_eq!(snap.rssi_health, SignalHealth::Fair);
        assert_eq!(snap.snr_health, SignalHealth::Fair);
        assert!(snap.connected_network().is_none());
    }

    #[test]
    fn truncated_rsn_reads_unknown() {
        // RSN element carrying only its version.
        let report = IeReport::decode(&[48, 2, 0x01, 0x00], 0);
        let snap = WirelessSnapshot::assemble(&iface(), report, String::new(), vec![], vec![]);
        assert_eq!(snap.cipher, None);
        assert_eq!(snap.encryption, "Unknown");
    }

    #[test]
    fn serializes_to_json() {
        let snap = WirelessSnapshot::assemble(
            &iface(),
            IeReport::default(),
            "Acme".into(),
            vec![],
            vec![],
        );
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["vendor"], "Acme");
        assert_eq!(json["phy_mode"], "ac");
        assert_eq!(json["security"], "wpa2_personal");
    }
}
