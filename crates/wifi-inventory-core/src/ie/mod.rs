//! 802.11 Information Element decoder.
//!
//! Parses the tagged element list carried in beacon and probe-response frame
//! bodies (IEEE 802.11-2024 clause 9.4.2).
//!
//! # Element Format
//!
//! ```text
//! Offset  Size    Field
//! ------  ----    -----
//! 0       1       Element ID
//! 1       1       Length (N)
//! 2       N       Payload
//! ```
//!
//! Elements are concatenated back to back. Captures taken over the air are
//! routinely truncated, so the decoder never treats a short buffer as an
//! error: it returns every element that was complete and stops at the first
//! one that is not.

pub mod bss_load;
pub mod channel;
pub mod suites;
pub mod vendor;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use self::bss_load::{extract_bss_load, BssLoadInfo};
use self::channel::{
    extract_secondary_channel_offset, extract_secondary_channels, SecondaryChannelOffset,
};
use self::suites::{extract_cipher_info, CipherSuiteInfo};
use self::vendor::{extract_vendor_specific_ies, VendorSpecificIe};

/// BSS Load (clause 9.4.2.26).
pub const ELEMENT_BSS_LOAD: u8 = 11;
/// Robust Security Network (clause 9.4.2.24).
pub const ELEMENT_RSN: u8 = 48;
/// HT Operation (clause 9.4.2.56).
pub const ELEMENT_HT_OPERATION: u8 = 61;
/// VHT Operation (clause 9.4.2.158).
pub const ELEMENT_VHT_OPERATION: u8 = 192;
/// Vendor Specific (clause 9.4.2.25).
pub const ELEMENT_VENDOR_SPECIFIC: u8 = 221;

/// Size of the id + length header preceding every element payload.
const HEADER_LEN: usize = 2;

/// One tagged element from a management frame body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InformationElement {
    pub id: u8,
    pub payload: Vec<u8>,
}

/// Split a raw IE buffer into its elements, in order.
///
/// Parsing stops, without error, as soon as fewer than two header bytes
/// remain or a declared length would run past the end of `buffer`.
pub fn parse_elements(buffer: &[u8]) -> Vec<InformationElement> {
    let mut elements = Vec::new();
    let mut offset = 0;

    while offset + HEADER_LEN <= buffer.len() {
        let id = buffer[offset];
        let len = buffer[offset + 1] as usize;
        let start = offset + HEADER_LEN;
        let end = start + len;

        if end > buffer.len() {
            tracing::trace!(
                id,
                declared = len,
                available = buffer.len() - start,
                "truncated information element, stopping"
            );
            break;
        }

        elements.push(InformationElement {
            id,
            payload: buffer[start..end].to_vec(),
        });
        offset = end;
    }

    elements
}

/// First element with the given id.
pub(crate) fn find(elements: &[InformationElement], id: u8) -> Option<&InformationElement> {
    elements.iter().find(|ie| ie.id == id)
}

// ---------------------------------------------------------------------------
// IeReport
// ---------------------------------------------------------------------------

/// Everything the decoder derives from one access point's IE buffer.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IeReport {
    pub cipher: Option<CipherSuiteInfo>,
    pub bss_load: Option<BssLoadInfo>,
    pub vendor_ies: Vec<VendorSpecificIe>,
    pub secondary_channel_offset: Option<SecondaryChannelOffset>,
    pub secondary_channels: Vec<i32>,
}

impl IeReport {
    /// Parse `buffer` once and run every extractor over the result.
    ///
    /// `primary_channel` is the operating channel of the link; it anchors the
    /// secondary-channel computation.
    pub fn decode(buffer: &[u8], primary_channel: i32) -> Self {
        let elements = parse_elements(buffer);
        Self::from_elements(&elements, primary_channel)
    }

    /// Run every extractor over an already parsed element list.
    pub fn from_elements(elements: &[InformationElement], primary_channel: i32) -> Self {
        Self {
            cipher: extract_cipher_info(elements),
            bss_load: extract_bss_load(elements),
            vendor_ies: extract_vendor_specific_ies(elements),
            secondary_channel_offset: extract_secondary_channel_offset(elements),
            secondary_channels: extract_secondary_channels(primary_channel, elements),
        }
    }

    /// One-line summary of the security suites, e.g.
    /// `"AKM: SAE (WPA3); Pairwise: CCMP-128 (AES); Group: CCMP-128 (AES)"`.
    ///
    /// Returns `None` when no RSN or WPA1 element was present.
    pub fn encryption_summary(&self) -> Option<String> {
        self.cipher.as_ref().map(CipherSuiteInfo::summary)
    }
}
