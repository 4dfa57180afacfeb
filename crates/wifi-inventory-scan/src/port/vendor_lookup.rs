//! The port for the external MAC-to-vendor service.

use async_trait::async_trait;

use crate::error::LookupError;

/// Raw outcome of one lookup request.
///
/// Status interpretation (200, 404, 429, ...) belongs to the resolver, not
/// to the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    pub status: u16,
    pub body: String,
}

impl LookupResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// One request against a vendor-lookup backend.
#[async_trait]
pub trait VendorLookup: Send + Sync {
    /// Look up the vendor for `identifier` (a BSSID or OUI prefix).
    ///
    /// Returns `Err` only for failures below HTTP (transport, timeout).
    async fn lookup(&self, identifier: &str) -> Result<LookupResponse, LookupError>;
}
