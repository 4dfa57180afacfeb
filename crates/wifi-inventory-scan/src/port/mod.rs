//! Ports abstracting the two outbound dependencies: the wireless interface
//! that produces scan data, and the vendor lookup service.
//!
//! Adapters in [`crate::adapter`] implement them; tests substitute fakes.

mod vendor_lookup;
mod wireless;

pub use vendor_lookup::{LookupResponse, VendorLookup};
pub use wireless::WirelessInterface;
