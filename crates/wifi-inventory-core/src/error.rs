//! Error types for the wifi-inventory core crate.
//!
//! The IE decoder itself is total: malformed element buffers produce partial
//! results rather than errors. Only the MAC/OUI value objects can fail, when
//! they are built from text or byte slices of the wrong shape.

use thiserror::Error;

/// Errors raised when constructing BSSID or OUI value objects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The MAC address bytes are invalid (must be exactly 6 bytes).
    #[error("invalid MAC address: expected 6 bytes, got {len}")]
    InvalidMac {
        /// The number of bytes that were provided.
        len: usize,
    },

    /// Failed to parse a MAC address string (expected `aa:bb:cc:dd:ee:ff`).
    #[error("failed to parse MAC address from '{input}': expected aa:bb:cc:dd:ee:ff")]
    MacParseFailed {
        /// The input string that could not be parsed.
        input: String,
    },
}
