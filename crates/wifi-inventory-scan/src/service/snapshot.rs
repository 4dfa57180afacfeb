//! Composes one [`WirelessSnapshot`] from the wireless interface, the IE
//! decoder and the scan aggregator.

use std::sync::Arc;

use wifi_inventory_core::IeReport;

use crate::config::AggregatorConfig;
use crate::domain::record::ScannedNetworkRecord;
use crate::domain::snapshot::WirelessSnapshot;
use crate::port::WirelessInterface;

use super::aggregator::ScanAggregator;
use super::resolver::VendorResolver;

/// Builds snapshots on demand. Each call to [`build`](Self::build) is
/// independent; only the vendor cache persists between calls.
pub struct SnapshotBuilder {
    wireless: Arc<dyn WirelessInterface>,
    aggregator: ScanAggregator,
}

impl SnapshotBuilder {
    pub fn new(
        wireless: Arc<dyn WirelessInterface>,
        resolver: VendorResolver,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            wireless,
            aggregator: ScanAggregator::new(resolver, config),
        }
    }

    pub fn aggregator(&self) -> &ScanAggregator {
        &self.aggregator
    }

    /// Capture the current wireless state.
    ///
    /// Returns `None` when no wireless interface is active. Scan failures
    /// degrade to empty network lists.
    pub async fn build(&self) -> Option<WirelessSnapshot> {
        let iface = match self.wireless.active_interface().await {
            Ok(Some(iface)) => iface,
            Ok(None) => {
                tracing::info!("no active wireless interface");
                return None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read wireless interface");
                return None;
            }
        };

        let connected_bssid = iface.bssid.clone().unwrap_or_default();
        let same_ssid_records = match iface.ssid.as_deref() {
            Some(ssid) if !ssid.is_empty() => self.scan_or_empty(Some(ssid)).await,
            _ => Vec::new(),
        };
        let nearby_records = self.scan_or_empty(None).await;

        let report =
            decode_connected(&same_ssid_records, &connected_bssid, iface.primary_channel());

        let resolver = self.aggregator.resolver();
        let (vendor, same_ssid, nearby) = tokio::join!(
            resolver.resolve_bssid(&connected_bssid),
            self.aggregator.same_ssid_list(&same_ssid_records, &connected_bssid),
            self.aggregator.nearby_list(&nearby_records, &connected_bssid),
        );

        tracing::info!(
            ssid = iface.ssid.as_deref().unwrap_or_default(),
            same_ssid = same_ssid.len(),
            nearby = nearby.len(),
            "wireless snapshot built"
        );
        Some(WirelessSnapshot::assemble(&iface, report, vendor, same_ssid, nearby))
    }

    async fn scan_or_empty(&self, ssid: Option<&str>) -> Vec<ScannedNetworkRecord> {
        match self.wireless.scan(ssid).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(ssid, error = %err, "WiFi scan failed, treating as empty");
                Vec::new()
            }
        }
    }
}

/// Decode the IEs of the scan record for the connected BSS, if one was
/// captured.
fn decode_connected(
    records: &[ScannedNetworkRecord],
    connected_bssid: &str,
    primary_channel: i32,
) -> IeReport {
    if connected_bssid.is_empty() {
        return IeReport::default();
    }
    records
        .iter()
        .find(|r| r.bssid == connected_bssid)
        .and_then(|r| r.ie_payload.as_deref())
        .map(|buffer| IeReport::decode(buffer, primary_channel))
        .unwrap_or_default()
}
