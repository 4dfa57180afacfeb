//! The driving port for reading the wireless environment.

use async_trait::async_trait;

use crate::domain::record::{ConnectedInterface, ScannedNetworkRecord};
use crate::error::WirelessError;

/// Platform wireless backend.
///
/// Implementations include:
/// - [`crate::adapter::FixtureWirelessInterface`] -- replays a recorded scan.
#[async_trait]
pub trait WirelessInterface: Send + Sync {
    /// Properties of the active interface, or `None` when no wireless
    /// interface is present.
    async fn active_interface(&self) -> Result<Option<ConnectedInterface>, WirelessError>;

    /// Scan for access points, restricted to `ssid` when given.
    async fn scan(&self, ssid: Option<&str>) -> Result<Vec<ScannedNetworkRecord>, WirelessError>;
}
