//! Adapter implementations for the [`WirelessInterface`](crate::port::WirelessInterface)
//! and [`VendorLookup`](crate::port::VendorLookup) ports.
//!
//! - [`MacVendorsClient`]: HTTP lookup against a macvendors-style endpoint.
//! - [`StaticOuiLookup`]: offline lookup against the built-in OUI table.
//! - [`FixtureWirelessInterface`]: replays a recorded scan from JSON.

pub mod fixture;
pub mod http_lookup;
pub mod static_lookup;

pub use fixture::FixtureWirelessInterface;
pub use http_lookup::MacVendorsClient;
pub use static_lookup::StaticOuiLookup;
