//! Configuration loading for the CLI.
//!
//! Precedence: command-line flags > environment variables > config file >
//! defaults.

use std::path::Path;

use anyhow::{Context, Result};
use wifi_inventory_scan::InventoryConfig;

/// Environment variable overriding the vendor lookup base URL.
pub const ENV_VENDOR_URL: &str = "WIFI_INVENTORY_VENDOR_URL";
/// Environment variable overriding the retry budget.
pub const ENV_MAX_RETRIES: &str = "WIFI_INVENTORY_MAX_RETRIES";

/// Load configuration from a TOML file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<InventoryConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: InventoryConfig = toml::from_str(&content).context("Failed to parse config file")?;
    Ok(config)
}

/// Load the file (if given), then apply environment and flag overrides.
pub fn load(config_path: Option<&Path>, vendor_url: Option<&str>) -> Result<InventoryConfig> {
    let mut config = match config_path {
        Some(path) => from_file(path)?,
        None => InventoryConfig::default(),
    };

    apply_env_vars(&mut config, |key| std::env::var(key).ok())?;

    if let Some(url) = vendor_url {
        config.resolver.base_url = url.to_string();
    }

    tracing::debug!(
        base_url = %config.resolver.base_url,
        max_retries = config.resolver.max_retries,
        "configuration loaded"
    );
    Ok(config)
}

/// Apply environment overrides read through `var`.
fn apply_env_vars<F>(config: &mut InventoryConfig, var: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = var(ENV_VENDOR_URL) {
        config.resolver.base_url = url;
    }

    if let Some(retries) = var(ENV_MAX_RETRIES) {
        config.resolver.max_retries = retries
            .parse()
            .with_context(|| format!("Invalid {ENV_MAX_RETRIES}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wifi_inventory_scan::VendorKey;

    #[test]
    fn file_then_flag_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[resolver]
base_url = "http://localhost:8080/"
key = "oui"

[aggregator]
stagger_step_ms = 50"#
        )
        .unwrap();

        let config = from_file(file.path()).unwrap();
        assert_eq!(config.resolver.base_url, "http://localhost:8080/");
        assert_eq!(config.resolver.key, VendorKey::Oui);
        assert_eq!(config.aggregator.stagger_step_ms, 50);
        assert_eq!(config.aggregator.stagger_slots, 10);

        let overridden = load(Some(file.path()), Some("http://mirror/")).unwrap();
        assert_eq!(overridden.resolver.base_url, "http://mirror/");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/wifi-inventory.toml")), None).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn env_overrides() {
        let mut config = InventoryConfig::default();
        apply_env_vars(&mut config, |key| match key {
            ENV_VENDOR_URL => Some("http://env/".into()),
            ENV_MAX_RETRIES => Some("4".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.resolver.base_url, "http://env/");
        assert_eq!(config.resolver.max_retries, 4);

        let bad =
            apply_env_vars(&mut config, |key| (key == ENV_MAX_RETRIES).then(|| "many".into()));
        assert!(bad.is_err());
    }
}
