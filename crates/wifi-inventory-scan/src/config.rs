//! Tunables for vendor resolution and scan fan-out.
//!
//! Every field carries a serde default so a partial TOML file (or none at
//! all) yields a working configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration shared by the library services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub aggregator: AggregatorConfig,
}

/// Which identifier the resolver caches and looks up for an access point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorKey {
    /// The full BSSID.
    #[default]
    Bssid,
    /// The `XX:XX:XX` OUI prefix, shared by every radio of one vendor.
    Oui,
}

/// Vendor lookup endpoint, retry policy and timeouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Lookup URL prefix; the identifier is appended verbatim.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Retries after the first attempt, shared across all failure kinds.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Multiplied by the attempt number after a 429.
    #[serde(default = "default_rate_limit_backoff_ms")]
    pub rate_limit_backoff_ms: u64,

    /// Fixed wait after any other failure.
    #[serde(default = "default_transient_backoff_ms")]
    pub transient_backoff_ms: u64,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default)]
    pub key: VendorKey,
}

/// Stagger schedule for the nearby-network fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u64,

    /// Number of distinct delay slots; task `i` waits `(i % slots) * step`.
    #[serde(default = "default_stagger_slots")]
    pub stagger_slots: usize,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.macvendors.com/".to_string()
}

fn default_max_retries() -> u32 {
    2
}

fn default_rate_limit_backoff_ms() -> u64 {
    1000
}

fn default_transient_backoff_ms() -> u64 {
    500
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!("wifi-inventory/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_stagger_step_ms() -> u64 {
    100
}

fn default_stagger_slots() -> usize {
    10
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_retries: default_max_retries(),
            rate_limit_backoff_ms: default_rate_limit_backoff_ms(),
            transient_backoff_ms: default_transient_backoff_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
            key: VendorKey::default(),
        }
    }
}

impl ResolverConfig {
    pub fn rate_limit_backoff(&self) -> Duration {
        Duration::from_millis(self.rate_limit_backoff_ms)
    }

    pub fn transient_backoff(&self) -> Duration {
        Duration::from_millis(self.transient_backoff_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            stagger_step_ms: default_stagger_step_ms(),
            stagger_slots: default_stagger_slots(),
        }
    }
}

impl AggregatorConfig {
    /// Start delay for the task at `index` in a staggered fan-out.
    pub fn stagger_delay(&self, index: usize) -> Duration {
        if self.stagger_slots == 0 {
            return Duration::ZERO;
        }
        let slot = (index % self.stagger_slots) as u64;
        Duration::from_millis(slot * self.stagger_step_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = InventoryConfig::default();
        assert_eq!(cfg.resolver.base_url, "https://api.macvendors.com/");
        assert_eq!(cfg.resolver.max_retries, 2);
        assert_eq!(cfg.resolver.rate_limit_backoff(), Duration::from_secs(1));
        assert_eq!(cfg.resolver.transient_backoff(), Duration::from_millis(500));
        assert_eq!(cfg.resolver.request_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.resolver.key, VendorKey::Bssid);
        assert_eq!(cfg.aggregator.stagger_slots, 10);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: InventoryConfig = toml::from_str(
            r#"
            [resolver]
            max_retries = 5
            key = "oui"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.resolver.max_retries, 5);
        assert_eq!(cfg.resolver.key, VendorKey::Oui);
        assert_eq!(cfg.resolver.transient_backoff_ms, 500);
        assert_eq!(cfg.aggregator, AggregatorConfig::default());
    }

    #[test]
    fn stagger_wraps_after_slots() {
        let agg = AggregatorConfig::default();
        assert_eq!(agg.stagger_delay(0), Duration::ZERO);
        assert_eq!(agg.stagger_delay(3), Duration::from_millis(300));
        assert_eq!(agg.stagger_delay(9), Duration::from_millis(900));
        assert_eq!(agg.stagger_delay(10), Duration::ZERO);
        assert_eq!(agg.stagger_delay(23), Duration::from_millis(300));

        let none = AggregatorConfig {
            stagger_slots: 0,
            ..agg
        };
        assert_eq!(none.stagger_delay(7), Duration::ZERO);
    }
}
