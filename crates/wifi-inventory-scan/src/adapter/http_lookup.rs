//! HTTP vendor lookup against `api.macvendors.com` or a compatible endpoint.
//!
//! The endpoint answers `GET <base>/<mac>` with the vendor name as plain text
//! (200), 404 for unassigned prefixes, and 429 when the caller exceeds its
//! rate limit.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ResolverConfig;
use crate::error::LookupError;
use crate::port::{LookupResponse, VendorLookup};

/// Vendor lookup over HTTP.
#[derive(Debug, Clone)]
pub struct MacVendorsClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl MacVendorsClient {
    /// Build a client with the configured base URL, timeout and user agent.
    pub fn new(config: &ResolverConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout_ms: config.request_timeout_ms,
        })
    }

    /// Full request URL for `identifier`.
    pub fn url_for(&self, identifier: &str) -> String {
        format!("{}{}", self.base_url, identifier)
    }
}

#[async_trait]
impl VendorLookup for MacVendorsClient {
    async fn lookup(&self, identifier: &str) -> Result<LookupResponse, LookupError> {
        let url = self.url_for(identifier);
        tracing::debug!(%url, "vendor lookup request");

        let response = self.client.get(&url).send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        Ok(LookupResponse { status, body })
    }
}

impl MacVendorsClient {
    fn classify(&self, err: reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout {
                after_ms: self.timeout_ms,
            }
        } else {
            LookupError::Http(err)
        }
    }
}
