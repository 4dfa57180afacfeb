//! Rate-limited vendor resolution for a single BSSID or OUI.
//!
//! Status handling:
//!
//! | Outcome                    | Result                     | Cached | Retried        |
//! |----------------------------|----------------------------|--------|----------------|
//! | 200                        | trimmed body               | yes    | no             |
//! | 404                        | [`UNKNOWN_VENDOR`]         | yes    | no             |
//! | 429                        | empty once retries run out | no     | linear backoff |
//! | other status / error       | empty once retries run out | no     | fixed backoff  |
//!
//! All failure kinds draw from one retry budget.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use wifi_inventory_core::BssidId;

use crate::config::{ResolverConfig, VendorKey};
use crate::error::LookupError;
use crate::port::{LookupResponse, VendorLookup};

use super::cache::VendorCache;

/// Vendor name cached for identifiers the lookup service does not know.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// Display text for a lookup that could not be completed. Never cached.
pub const LOOKUP_FAILED: &str = "Lookup failed";

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Resolves identifiers to vendor names through a [`VendorLookup`], with
/// caching and bounded retry.
///
/// Cheap to clone; clones share the cache and the lookup backend.
#[derive(Clone)]
pub struct VendorResolver {
    lookup: Arc<dyn VendorLookup>,
    cache: Arc<VendorCache>,
    config: ResolverConfig,
}

impl VendorResolver {
    pub fn new(
        lookup: Arc<dyn VendorLookup>,
        cache: Arc<VendorCache>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            lookup,
            cache,
            config,
        }
    }

    pub fn cache(&self) -> &Arc<VendorCache> {
        &self.cache
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve an access point's vendor using the configured cache key.
    pub async fn resolve_bssid(&self, bssid: &str) -> String {
        let key = self.cache_key(bssid);
        self.resolve(&key).await
    }

    /// The identifier looked up and cached for `bssid`.
    ///
    /// With [`VendorKey::Oui`] a parseable BSSID maps to its `XX:XX:XX`
    /// prefix; anything else is used verbatim.
    pub fn cache_key(&self, bssid: &str) -> String {
        match self.config.key {
            VendorKey::Bssid => bssid.to_owned(),
            VendorKey::Oui => BssidId::parse(bssid)
                .map(|id| id.oui().to_string())
                .unwrap_or_else(|_| bssid.to_owned()),
        }
    }

    /// Resolve `identifier` to a vendor name.
    ///
    /// Returns an empty string for an empty identifier, and when every
    /// attempt failed. Neither case touches the cache.
    pub async fn resolve(&self, identifier: &str) -> String {
        if identifier.is_empty() {
            return String::new();
        }

        if let Some(name) = self.cache.get(identifier) {
            if name != LOOKUP_FAILED {
                tracing::trace!(identifier, vendor = %name, "vendor cache hit");
                return name;
            }
        }

        let mut attempt: u32 = 0;
        loop {
            let outcome = self.lookup_once(identifier).await;

            // No await between the lookup completing and the cache write, so
            // a cancelled resolution never leaves a partial entry behind.
            let backoff = match outcome {
                Ok(LookupResponse { status, body }) if status == STATUS_OK => {
                    let trimmed = body.trim();
                    let name = if trimmed.is_empty() {
                        UNKNOWN_VENDOR
                    } else {
                        trimmed
                    };
                    self.cache.set(identifier, name);
                    tracing::debug!(identifier, vendor = name, "vendor resolved");
                    return name.to_owned();
                }
                Ok(LookupResponse { status, .. }) if status == STATUS_NOT_FOUND => {
                    self.cache.set(identifier, UNKNOWN_VENDOR);
                    tracing::debug!(identifier, "vendor not found");
                    return UNKNOWN_VENDOR.to_owned();
                }
                Ok(LookupResponse { status, .. }) if status == STATUS_TOO_MANY_REQUESTS => {
                    tracing::debug!(identifier, attempt, "vendor lookup rate limited");
                    Backoff::RateLimited
                }
                Ok(LookupResponse { status, .. }) => {
                    tracing::debug!(identifier, attempt, status, "vendor lookup unexpected status");
                    Backoff::Transient
                }
                Err(err) => {
                    tracing::debug!(identifier, attempt, error = %err, "vendor lookup failed");
                    Backoff::Transient
                }
            };

            if attempt >= self.config.max_retries {
                tracing::warn!(
                    identifier,
                    attempts = attempt + 1,
                    "vendor lookup retries exhausted"
                );
                return String::new();
            }
            attempt += 1;
            sleep(backoff.delay(&self.config, attempt)).await;
        }
    }

    async fn lookup_once(&self, identifier: &str) -> Result<LookupResponse, LookupError> {
        let timeout = self.config.request_timeout();
        match tokio::time::timeout(timeout, self.lookup.lookup(identifier)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                after_ms: self.config.request_timeout_ms,
            }),
        }
    }
}

impl std::fmt::Debug for VendorResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorResolver")
            .field("cache_entries", &self.cache.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Wait class chosen by the failure kind of the previous attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backoff {
    RateLimited,
    Transient,
}

impl Backoff {
    /// Delay before retry number `retry` (1-based).
    fn delay(self, config: &ResolverConfig, retry: u32) -> Duration {
        match self {
            Self::RateLimited => config.rate_limit_backoff() * retry,
            Self::Transient => config.transient_backoff(),
        }
    }
}
