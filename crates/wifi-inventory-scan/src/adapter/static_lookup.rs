//! Offline vendor lookup backed by the decoder's built-in OUI table.

use async_trait::async_trait;
use wifi_inventory_core::{known_vendor, BssidId, Oui};

use crate::error::LookupError;
use crate::port::{LookupResponse, VendorLookup};

/// Answers 200 with the vendor name for OUIs in the built-in table and 404
/// for everything else, mirroring the HTTP endpoint's status semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticOuiLookup;

fn parse_oui(identifier: &str) -> Option<Oui> {
    if let Ok(bssid) = BssidId::parse(identifier) {
        return Some(bssid.oui());
    }
    let octets = identifier
        .split([':', '-'])
        .map(|part| u8::from_str_radix(part, 16).ok())
        .collect::<Option<Vec<u8>>>()?;
    match octets.as_slice() {
        &[a, b, c] => Some(Oui([a, b, c])),
        _ => None,
    }
}

#[async_trait]
impl VendorLookup for StaticOuiLookup {
    async fn lookup(&self, identifier: &str) -> Result<LookupResponse, LookupError> {
        let response = match parse_oui(identifier).and_then(known_vendor) {
            Some(name) => LookupResponse::new(200, name),
            None => LookupResponse::new(404, r#"{"errors":{"detail":"Not Found"}}"#),
        };
        Ok(response)
    }
}
