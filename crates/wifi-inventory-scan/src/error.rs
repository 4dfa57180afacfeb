//! Error types for the wifi-inventory-scan crate.
//!
//! None of these cross the aggregator boundary: lookup failures are absorbed
//! by the resolver as an empty vendor string, and wireless failures surface
//! as an absent snapshot or an empty scan.

use thiserror::Error;

/// Errors from a single vendor-lookup request.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("vendor lookup transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("vendor lookup timed out after {after_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        after_ms: u64,
    },
}

/// Errors raised by a [`WirelessInterface`](crate::port::WirelessInterface)
/// implementation.
#[derive(Debug, Error)]
pub enum WirelessError {
    /// No wireless interface is available (absent hardware, permissions).
    #[error("wireless interface unavailable: {0}")]
    InterfaceUnavailable(String),

    /// The platform scan call failed.
    #[error("WiFi scan failed: {reason}")]
    ScanFailed {
        /// Human-readable description of what went wrong.
        reason: String,
    },

    /// Reading a recorded scan failed.
    #[error("scan fixture I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A recorded scan is not valid JSON for the expected schema.
    #[error("scan fixture parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A recorded IE payload is not valid hex.
    #[error("invalid IE hex for BSSID '{bssid}': {source}")]
    InvalidHex {
        /// BSSID of the record carrying the bad payload.
        bssid: String,
        /// Underlying decode failure.
        source: hex::FromHexError,
    },
}
