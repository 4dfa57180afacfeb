//! Cipher and AKM suite extraction from RSN (WPA2/WPA3) and WPA1 elements.
//!
//! # Suite list layout
//!
//! ```text
//! Field                       Size
//! -----                       ----
//! Group data cipher suite     4   (OUI 3 + type 1)
//! Pairwise suite count        2   (little-endian)
//! Pairwise suite list         4 * m
//! AKM suite count             2   (little-endian)
//! AKM suite list              4 * n
//! ```
//!
//! In the RSN element (id 48) the list follows a 2-byte version. In the WPA1
//! vendor element (id 221, `00:50:F2` type 1) it follows the 4-byte OUI/type
//! and a 2-byte version.

use byteorder::{ByteOrder, LittleEndian};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{find, InformationElement, ELEMENT_RSN, ELEMENT_VENDOR_SPECIFIC};
use crate::bssid::Oui;

/// Payload prefix identifying a WPA1 element inside a vendor-specific IE.
const WPA1_PREFIX: [u8; 4] = [0x00, 0x50, 0xF2, 0x01];
/// Suite list offset inside an RSN payload (after the version).
const RSN_SUITES_OFFSET: usize = 2;
/// Suite list offset inside a WPA1 payload (after OUI, type and version).
const WPA1_SUITES_OFFSET: usize = 6;
const SUITE_LEN: usize = 4;

/// Security suites advertised by one access point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CipherSuiteInfo {
    /// Group data cipher. Always present on decoded elements.
    pub group: Option<String>,
    pub pairwise: Vec<String>,
    pub akms: Vec<String>,
}

impl CipherSuiteInfo {
    /// `"AKM: <akms>; Pairwise: <pairwise>; Group: <group>"`.
    pub fn summary(&self) -> String {
        fn join(list: &[String]) -> String {
            if list.is_empty() {
                "None".to_owned()
            } else {
                list.join(", ")
            }
        }

        format!(
            "AKM: {}; Pairwise: {}; Group: {}",
            join(&self.akms),
            join(&self.pairwise),
            self.group.as_deref().unwrap_or("Unknown")
        )
    }
}

/// Extract the security suites from the first RSN element, falling back to
/// the first WPA1 vendor element.
///
/// Returns `None` when neither element is present, or when the chosen
/// element is too short to carry a group suite. A short RSN element does not
/// fall back to WPA1.
pub fn extract_cipher_info(elements: &[InformationElement]) -> Option<CipherSuiteInfo> {
    if let Some(rsn) = find(elements, ELEMENT_RSN) {
        return parse_suite_lists(&rsn.payload, RSN_SUITES_OFFSET);
    }

    elements
        .iter()
        .find(|ie| ie.id == ELEMENT_VENDOR_SPECIFIC && ie.payload.starts_with(&WPA1_PREFIX))
        .and_then(|wpa| parse_suite_lists(&wpa.payload, WPA1_SUITES_OFFSET))
}

/// A 4-byte suite selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Suite {
    oui: Oui,
    kind: u8,
}

impl Suite {
    fn read(payload: &[u8], offset: usize) -> Option<Self> {
        let bytes = payload.get(offset..offset + SUITE_LEN)?;
        Some(Self {
            oui: Oui([bytes[0], bytes[1], bytes[2]]),
            kind: bytes[3],
        })
    }

    /// `"00:0F:AC:07"` for selectors missing from the tables.
    fn fallback(&self) -> String {
        format!("{}:{:02X}", self.oui, self.kind)
    }

    fn cipher_name(&self) -> String {
        let name = match (self.oui, self.kind) {
            (Oui::IEEE_80211, 1) => Some("WEP-40"),
            (Oui::IEEE_80211, 2) => Some("TKIP"),
            (Oui::IEEE_80211, 4) => Some("CCMP-128 (AES)"),
            (Oui::IEEE_80211, 5) => Some("WEP-104"),
            (Oui::IEEE_80211, 6) => Some("BIP-CMAC-128"),
            (Oui::IEEE_80211, 8) => Some("GCMP-128"),
            (Oui::IEEE_80211, 9) => Some("GCMP-256"),
            (Oui::IEEE_80211, 10) => Some("CCMP-256"),
            (Oui::IEEE_80211, 11) => Some("BIP-GMAC-128"),
            (Oui::IEEE_80211, 12) => Some("BIP-GMAC-256"),
            (Oui::IEEE_80211, 13) => Some("BIP-CMAC-256"),
            (Oui::MICROSOFT, 1) => Some("WEP-40"),
            (Oui::MICROSOFT, 2) => Some("TKIP (WPA)"),
            (Oui::MICROSOFT, 4) => Some("CCMP (WPA)"),
            (Oui::MICROSOFT, 5) => Some("WEP-104"),
            _ => None,
        };
        name.map_or_else(|| self.fallback(), str::to_owned)
    }

    fn akm_name(&self) -> String {
        let name = match (self.oui, self.kind) {
            (Oui::IEEE_80211, 1) => Some("802.1X (EAP)"),
            (Oui::IEEE_80211, 2) => Some("PSK (WPA2)"),
            (Oui::IEEE_80211, 3) => Some("FT-802.1X"),
            (Oui::IEEE_80211, 4) => Some("FT-PSK"),
            (Oui::IEEE_80211, 5) => Some("802.1X-SHA256"),
            (Oui::IEEE_80211, 6) => Some("PSK-SHA256"),
            (Oui::IEEE_80211, 8) => Some("SAE (WPA3)"),
            (Oui::IEEE_80211, 9) => Some("FT-SAE"),
            (Oui::IEEE_80211, 11) => Some("802.1X-Suite-B"),
            (Oui::IEEE_80211, 12) => Some("802.1X-Suite-B-192"),
            (Oui::IEEE_80211, 18) => Some("OWE"),
            (Oui::IEEE_80211, 24) => Some("SAE-EXT-KEY"),
            (Oui::IEEE_80211, 25) => Some("FT-SAE-EXT-KEY"),
            (Oui::MICROSOFT, 1) => Some("802.1X (WPA)"),
            (Oui::MICROSOFT, 2) => Some("PSK (WPA)"),
            _ => None,
        };
        name.map_or_else(|| self.fallback(), str::to_owned)
    }
}

/// Walks a suite list, never reading past the end of the payload.
struct SuiteReader<'a> {
    payload: &'a [u8],
    offset: usize,
}

impl<'a> SuiteReader<'a> {
    /// Read a little-endian count followed by that many suites.
    ///
    /// A missing count yields an empty list; a short list stops at the last
    /// complete suite.
    fn read_list(&mut self) -> Vec<Suite> {
        let Some(count_bytes) = self.payload.get(self.offset..self.offset + 2) else {
            return Vec::new();
        };
        let count = LittleEndian::read_u16(count_bytes);
        self.offset += 2;

        let mut suites = Vec::new();
        for _ in 0..count {
            let Some(suite) = Suite::read(self.payload, self.offset) else {
                break;
            };
            suites.push(suite);
            self.offset += SUITE_LEN;
        }
        suites
    }
}

fn parse_suite_lists(payload: &[u8], base: usize) -> Option<CipherSuiteInfo> {
    let group = Suite::read(payload, base)?;

    let mut reader = SuiteReader {
        payload,
        offset: base + SUITE_LEN,
    };
    let pairwise = reader.read_list();
    let akms = reader.read_list();

    Some(CipherSuiteInfo {
        group: Some(group.cipher_name()),
        pairwise: pairwise.iter().map(Suite::cipher_name).collect(),
        akms: akms.iter().map(Suite::akm_name).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsn(payload: &[u8]) -> Vec<InformationElement> {
        vec![InformationElement {
            id: ELEMENT_RSN,
            payload: payload.to_vec(),
        }]
    }

    const WPA2_PSK: &[u8] = &[
        0x01, 0x00, // version
        0x00, 0x0F, 0xAC, 0x04, // group CCMP
        0x02, 0x00, // 2 pairwise
        0x00, 0x0F, 0xAC, 0x04, // CCMP
        0x00, 0x0F, 0xAC, 0x02, // TKIP
        0x01, 0x00, // 1 AKM
        0x00, 0x0F, 0xAC, 0x02, // PSK
        0x0C, 0x00, // capabilities
    ];

    #[test]
    fn rsn_group_ccmp() {
        let info = extract_cipher_info(&rsn(WPA2_PSK)).unwrap();
        assert_eq!(info.group.as_deref(), Some("CCMP-128 (AES)"));
        assert_eq!(info.pairwise, vec!["CCMP-128 (AES)", "TKIP"]);
        assert_eq!(info.akms, vec!["PSK (WPA2)"]);
    }

    #[test]
    fn wpa3_transition_akms() {
        let payload = [
            0x01, 0x00, 0x00, 0x0F, 0xAC, 0x04, 0x01, 0x00, 0x00, 0x0F, 0xAC, 0x04, 0x02, 0x00,
            0x00, 0x0F, 0xAC, 0x02, 0x00, 0x0F, 0xAC, 0x08,
        ];
        let info = extract_cipher_info(&rsn(&payload)).unwrap();
        assert_eq!(info.akms, vec!["PSK (WPA2)", "SAE (WPA3)"]);
        assert_eq!(
            info.summary(),
            "AKM: PSK (WPA2), SAE (WPA3); Pairwise: CCMP-128 (AES); Group: CCMP-128 (AES)"
        );
    }

    #[test]
    fn declared_count_longer_than_payload_stops_early() {
        // Claims 3 pairwise suites but carries one, and no AKM list.
        let payload = [0x01, 0x00, 0x00, 0x0F, 0xAC, 0x02, 0x03, 0x00, 0x00, 0x0F, 0xAC, 0x04];
        let info = extract_cipher_info(&rsn(&payload)).unwrap();
        assert_eq!(info.group.as_deref(), Some("TKIP"));
        assert_eq!(info.pairwise, vec!["CCMP-128 (AES)"]);
        assert!(info.akms.is_empty());
    }

    #[test]
    fn rsn_too_short_for_group() {
        assert_eq!(extract_cipher_info(&rsn(&[0x01, 0x00])), None);
        assert_eq!(extract_cipher_info(&rsn(&[0x01, 0x00, 0x00, 0x0F, 0xAC])), None);
        // Exactly a group suite and nothing else.
        let info = extract_cipher_info(&rsn(&[0x01, 0x00, 0x00, 0x0F, 0xAC, 0x04])).unwrap();
        assert_eq!(info.summary(), "AKM: None; Pairwise: None; Group: CCMP-128 (AES)");
    }

    #[test]
    fn short_rsn_hides_wpa1() {
        let elements = vec![
            InformationElement {
                id: ELEMENT_RSN,
                payload: vec![0x01, 0x00],
            },
            InformationElement {
                id: ELEMENT_VENDOR_SPECIFIC,
                payload: vec![0x00, 0x50, 0xF2, 0x01, 0x01, 0x00, 0x00, 0x50, 0xF2, 0x02],
            },
        ];
        assert_eq!(extract_cipher_info(&elements), None);
    }

    #[test]
    fn short_wpa1_is_absent() {
        let elements = vec![InformationElement {
            id: ELEMENT_VENDOR_SPECIFIC,
            payload: vec![0x00, 0x50, 0xF2, 0x01, 0x01, 0x00, 0x00, 0x50],
        }];
        assert_eq!(extract_cipher_info(&elements), None);
    }

    #[test]
    fn wpa1_fallback() {
        let elements = vec![
            InformationElement {
                id: ELEMENT_VENDOR_SPECIFIC,
                payload: vec![0x00, 0x50, 0xF2, 0x02, 0x01, 0x01],
            },
            InformationElement {
                id: ELEMENT_VENDOR_SPECIFIC,
                payload: vec![
                    0x00, 0x50, 0xF2, 0x01, // OUI + type
                    0x01, 0x00, // version
                    0x00, 0x50, 0xF2, 0x02, // group TKIP
                    0x01, 0x00, 0x00, 0x50, 0xF2, 0x04, // 1 pairwise CCMP
                    0x01, 0x00, 0x00, 0x50, 0xF2, 0x02, // 1 AKM PSK
                ],
            },
        ];
        let info = extract_cipher_info(&elements).unwrap();
        assert_eq!(info.group.as_deref(), Some("TKIP (WPA)"));
        assert_eq!(info.pairwise, vec!["CCMP (WPA)"]);
        assert_eq!(info.akms, vec!["PSK (WPA)"]);
    }

    #[test]
    fn rsn_takes_priority_over_wpa1() {
        let mut elements = vec![InformationElement {
            id: ELEMENT_VENDOR_SPECIFIC,
            payload: vec![0x00, 0x50, 0xF2, 0x01, 0x01, 0x00, 0x00, 0x50, 0xF2, 0x02],
        }];
        elements.extend(rsn(WPA2_PSK));
        let info = extract_cipher_info(&elements).unwrap();
        assert_eq!(info.group.as_deref(), Some("CCMP-128 (AES)"));
    }

    #[test]
    fn unknown_selectors_render_as_hex() {
        let payload = [
            0x01, 0x00, 0x00, 0x0F, 0xAC, 0x07, 0x01, 0x00, 0x00, 0x13, 0x74, 0x01, 0x01, 0x00,
            0x00, 0x0F, 0xAC, 0x63,
        ];
        let info = extract_cipher_info(&rsn(&payload)).unwrap();
        assert_eq!(info.group.as_deref(), Some("00:0F:AC:07"));
        assert_eq!(info.pairwise, vec!["00:13:74:01"]);
        assert_eq!(info.akms, vec!["00:0F:AC:63"]);
    }

    #[test]
    fn no_security_element() {
        let elements = vec![InformationElement {
            id: 0,
            payload: b"Cafe".to_vec(),
        }];
        assert_eq!(extract_cipher_info(&elements), None);
    }
}
