//! Concurrent vendor resolution across a scan result set.

use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::sleep;

use crate::config::AggregatorConfig;
use crate::domain::record::{NearbyWifiNetwork, ScannedNetworkRecord};

use super::resolver::VendorResolver;

/// Fans a scan out to one resolution task per access point and gathers the
/// results back in scan order.
#[derive(Debug, Clone)]
pub struct ScanAggregator {
    resolver: VendorResolver,
    config: AggregatorConfig,
}

impl ScanAggregator {
    pub fn new(resolver: VendorResolver, config: AggregatorConfig) -> Self {
        Self { resolver, config }
    }

    pub fn resolver(&self) -> &VendorResolver {
        &self.resolver
    }

    /// Resolve the vendor of every record with a BSSID.
    ///
    /// Output order equals input order (records without a BSSID removed),
    /// whatever order the lookups finish in. With `stagger`, the record at
    /// input position `i` delays its start by `(i % stagger_slots) *
    /// stagger_step` to spread load on the lookup service. Positions count
    /// the records without a BSSID too.
    ///
    /// Dropping the returned future aborts every outstanding task.
    pub async fn build_network_list(
        &self,
        records: &[ScannedNetworkRecord],
        connected_bssid: &str,
        stagger: bool,
    ) -> Vec<NearbyWifiNetwork> {
        let mut tasks = JoinSet::new();

        for (index, record) in records
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.bssid.is_empty())
        {
            let record = record.clone();
            let resolver = self.resolver.clone();
            let delay = if stagger {
                self.config.stagger_delay(index)
            } else {
                Duration::ZERO
            };

            tasks.spawn(async move {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                let vendor = resolver.resolve_bssid(&record.bssid).await;
                (index, record, vendor)
            });
        }

        let mut resolved = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(entry) => resolved.push(entry),
                Err(err) => tracing::warn!(error = %err, "vendor resolution task failed"),
            }
        }
        resolved.sort_unstable_by_key(|(index, _, _)| *index);

        tracing::debug!(networks = resolved.len(), stagger, "network list built");
        resolved
            .into_iter()
            .map(|(_, record, vendor)| {
                NearbyWifiNetwork::from_record(&record, vendor, connected_bssid)
            })
            .collect()
    }

    /// Networks sharing the connected SSID. Hidden (empty-SSID) entries are
    /// dropped; lookups start immediately.
    pub async fn same_ssid_list(
        &self,
        records: &[ScannedNetworkRecord],
        connected_bssid: &str,
    ) -> Vec<NearbyWifiNetwork> {
        let named: Vec<ScannedNetworkRecord> = records
            .iter()
            .filter(|r| !r.ssid.is_empty())
            .cloned()
            .collect();
        self.build_network_list(&named, connected_bssid, false).await
    }

    /// Every scanned network, with staggered lookups.
    pub async fn nearby_list(
        &self,
        records: &[ScannedNetworkRecord],
        connected_bssid: &str,
    ) -> Vec<NearbyWifiNetwork> {
        self.build_network_list(records, connected_bssid, true).await
    }
}
