//! # wifi-inventory-scan
//!
//! Asynchronous half of wifi-inventory: turns wireless scans into enriched,
//! ordered network lists and composes them into a [`WirelessSnapshot`].
//!
//! - **Domain types**: [`ScannedNetworkRecord`], [`NearbyWifiNetwork`],
//!   [`ConnectedInterface`], [`WirelessSnapshot`]
//! - **Ports**: [`WirelessInterface`] and [`VendorLookup`]
//! - **Adapters**: [`MacVendorsClient`] (HTTP), [`StaticOuiLookup`] (offline),
//!   [`FixtureWirelessInterface`] (recorded scans)
//! - **Services**: [`VendorCache`], [`VendorResolver`], [`ScanAggregator`],
//!   [`SnapshotBuilder`]
//!
//! Vendor resolution failures never surface as errors: a network whose
//! vendor could not be looked up carries an empty vendor string.

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;

pub use adapter::{FixtureWirelessInterface, MacVendorsClient, StaticOuiLookup};
pub use config::{AggregatorConfig, InventoryConfig, ResolverConfig, VendorKey};
pub use domain::record::{ConnectedInterface, NearbyWifiNetwork, ScannedNetworkRecord};
pub use domain::snapshot::WirelessSnapshot;
pub use error::{LookupError, WirelessError};
pub use port::{LookupResponse, VendorLookup, WirelessInterface};
pub use service::{
    ScanAggregator, SnapshotBuilder, VendorCache, VendorResolver, LOOKUP_FAILED, UNKNOWN_VENDOR,
};
