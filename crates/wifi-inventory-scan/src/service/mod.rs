//! Application services: the vendor cache and resolver, the concurrent scan
//! aggregator, and the snapshot builder that composes them.

pub mod aggregator;
pub mod cache;
pub mod resolver;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod fakes;

pub use aggregator::ScanAggregator;
pub use cache::VendorCache;
pub use resolver::{VendorResolver, LOOKUP_FAILED, UNKNOWN_VENDOR};
pub use snapshot::SnapshotBuilder;
