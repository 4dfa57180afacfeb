//! Vendor Specific elements (id 221) resolved against a built-in OUI table.
//!
//! Vendor IEs reveal chipset and firmware families (Broadcom, Qualcomm,
//! Apple, ...) without any network lookup, which is how survey tools label
//! them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{InformationElement, ELEMENT_VENDOR_SPECIFIC};
use crate::bssid::Oui;

/// Well-known OUIs seen in vendor-specific IEs.
const KNOWN_OUIS: &[(Oui, &str)] = &[
    (Oui([0x00, 0x50, 0xF2]), "Microsoft"),
    (Oui([0x00, 0x0B, 0x86]), "Aruba Networks"),
    (Oui([0x00, 0x03, 0x7F]), "Atheros Communications"),
    (Oui([0x50, 0x6F, 0x9A]), "Wi-Fi Alliance"),
    (Oui([0x00, 0x40, 0x96]), "Cisco Systems"),
    (Oui([0x00, 0x10, 0x18]), "Broadcom"),
    (Oui([0x00, 0x90, 0x4C]), "Epigram (Broadcom)"),
    (Oui([0x00, 0x17, 0xF2]), "Apple"),
    (Oui([0x00, 0xE0, 0x4C]), "Realtek Semiconductor"),
    (Oui([0x8C, 0xFD, 0xF0]), "Qualcomm"),
    (Oui([0x00, 0x15, 0x6D]), "Ubiquiti"),
    (Oui([0x00, 0x27, 0x22]), "Ubiquiti Networks"),
    (Oui([0x00, 0x0C, 0xE7]), "MediaTek"),
    (Oui([0x00, 0x0C, 0x43]), "Ralink Technology"),
    (Oui([0x00, 0x24, 0xD7]), "Intel Corporate"),
    (Oui([0x00, 0x1A, 0x11]), "Google"),
    (Oui([0x00, 0x26, 0x86]), "Quantenna"),
    (Oui([0xAC, 0x85, 0x3D]), "Huawei Technologies"),
    (Oui([0x00, 0x14, 0x6C]), "Netgear"),
    (Oui([0x00, 0x1B, 0x11]), "D-Link"),
    (Oui([0x00, 0x0F, 0xAC]), "IEEE 802.11"),
    (Oui([0x00, 0x13, 0x74]), "Atheros"),
    (Oui([0x00, 0x1D, 0x6E]), "Nokia"),
    (Oui([0x00, 0x26, 0x44]), "Thomson Telecom"),
];

/// One distinct vendor OUI advertised by an access point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VendorSpecificIe {
    /// `"XX:XX:XX"`
    pub oui_hex: String,
    /// Vendor name, or `oui_hex` itself when the OUI is not in the table.
    pub vendor_name: String,
}

/// Look up an OUI in the built-in table.
pub fn known_vendor(oui: Oui) -> Option<&'static str> {
    KNOWN_OUIS
        .iter()
        .find(|(known, _)| *known == oui)
        .map(|(_, name)| *name)
}

/// Distinct vendor OUIs from all Vendor Specific elements, first occurrence
/// first.
pub fn extract_vendor_specific_ies(elements: &[InformationElement]) -> Vec<VendorSpecificIe> {
    let mut seen: Vec<Oui> = Vec::new();
    let mut result = Vec::new();

    for ie in elements.iter().filter(|ie| ie.id == ELEMENT_VENDOR_SPECIFIC) {
        let Some(oui) = Oui::from_prefix(&ie.payload) else {
            continue;
        };
        if seen.contains(&oui) {
            continue;
        }
        seen.push(oui);

        let oui_hex = oui.to_string();
        let vendor_name = known_vendor(oui).map_or_else(|| oui_hex.clone(), str::to_owned);
        result.push(VendorSpecificIe {
            oui_hex,
            vendor_name,
        });
    }
    result
}
