//! Domain types for scan aggregation: the records handed in by the wireless
//! interface and the snapshot handed back to the consumer.

pub mod record;
pub mod snapshot;

pub use record::{ConnectedInterface, NearbyWifiNetwork, ScannedNetworkRecord};
pub use snapshot::WirelessSnapshot;
