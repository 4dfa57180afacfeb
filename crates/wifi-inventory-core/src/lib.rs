//! # wifi-inventory-core
//!
//! Pure, synchronous building blocks for inspecting the local wireless
//! environment:
//!
//! - **IE decoding**: [`parse_elements`] splits a raw 802.11 Information
//!   Element buffer into `(id, payload)` pairs, and the `extract_*` functions
//!   derive cipher/AKM suites, BSS load, channel bonding geometry and
//!   vendor-specific elements from the parsed list.
//! - **Radio value types**: [`PhyMode`], [`SecurityMode`], [`ChannelBand`],
//!   [`ChannelWidth`], [`WlanChannel`] and [`SignalHealth`], each with a fixed
//!   human-readable rendering.
//! - **Identity**: [`BssidId`] and [`Oui`].
//!
//! # Design Principles
//!
//! 1. **Total parsing**: truncated or noisy capture data yields partial
//!    results, never a panic or an error
//! 2. **No I/O**: everything operates on byte slices handed in by the caller
//! 3. **Deterministic**: same bytes in, same decoded output
//!
//! # Example
//!
//! ```rust
//! use wifi_inventory_core::{extract_cipher_info, parse_elements};
//!
//! // RSN element: version 1, group CCMP, one pairwise CCMP, one AKM PSK.
//! let raw = [
//!     48, 20, 1, 0, 0x00, 0x0F, 0xAC, 4, 1, 0, 0x00, 0x0F, 0xAC, 4,
//!     1, 0, 0x00, 0x0F, 0xAC, 2, 0x0C, 0x00,
//! ];
//! let elements = parse_elements(&raw);
//! let info = extract_cipher_info(&elements).unwrap();
//! assert_eq!(info.group.as_deref(), Some("CCMP-128 (AES)"));
//! assert_eq!(info.akms, vec!["PSK (WPA2)".to_string()]);
//! ```

pub mod bssid;
pub mod error;
pub mod ie;
pub mod radio;

pub use bssid::{BssidId, Oui};
pub use error::CoreError;
pub use ie::bss_load::{extract_bss_load, BssLoadInfo};
pub use ie::channel::{
    extract_secondary_channel_offset, extract_secondary_channels, SecondaryChannelOffset,
};
pub use ie::suites::{extract_cipher_info, CipherSuiteInfo};
pub use ie::vendor::{extract_vendor_specific_ies, known_vendor, VendorSpecificIe};
pub use ie::{parse_elements, IeReport, InformationElement};
pub use radio::{ChannelBand, ChannelWidth, PhyMode, SecurityMode, SignalHealth, WlanChannel};
