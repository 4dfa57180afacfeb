//! Value objects for access point identity: [`BssidId`] and [`Oui`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// BssidId -- Value Object
// ---------------------------------------------------------------------------

/// A BSSID wrapping a 6-byte IEEE 802.11 MAC address.
///
/// Two `BssidId` values are equal when their MAC bytes match, regardless of
/// how the textual form was cased or separated.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BssidId(pub [u8; 6]);

impl BssidId {
    /// Create a `BssidId` from a byte slice.
    ///
    /// Returns an error if the slice is not exactly 6 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let arr: [u8; 6] = bytes
            .try_into()
            .map_err(|_| CoreError::InvalidMac { len: bytes.len() })?;
        Ok(Self(arr))
    }

    /// Parse a `BssidId` from `"aa:bb:cc:dd:ee:ff"` or `"aa-bb-cc-dd-ee-ff"`.
    ///
    /// Single-digit octets (`"0:1b:2:..."`, as some drivers print them) are
    /// accepted.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let fail = || CoreError::MacParseFailed {
            input: s.to_owned(),
        };

        let parts: Vec<&str> = s.trim().split([':', '-']).collect();
        if parts.len() != 6 {
            return Err(fail());
        }

        let mut bytes = [0u8; 6];
        for (byte, part) in bytes.iter_mut().zip(&parts) {
            if part.is_empty() || part.len() > 2 {
                return Err(fail());
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| fail())?;
        }
        Ok(Self(bytes))
    }

    /// Return the raw 6-byte MAC address.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// The Organizationally Unique Identifier (first three octets).
    pub fn oui(&self) -> Oui {
        Oui([self.0[0], self.0[1], self.0[2]])
    }
}

impl fmt::Debug for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BssidId({self})")
    }
}

impl fmt::Display for BssidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

// ---------------------------------------------------------------------------
// Oui -- Value Object
// ---------------------------------------------------------------------------

/// A 3-byte Organizationally Unique Identifier.
///
/// Renders as upper-case colon-separated hex (`"00:0F:AC"`), the form used by
/// the vendor table and the vendor-lookup cache keys.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Oui(pub [u8; 3]);

impl Oui {
    /// IEEE 802.11 standard suite selector OUI.
    pub const IEEE_80211: Oui = Oui([0x00, 0x0F, 0xAC]);
    /// Microsoft OUI, used by legacy WPA1 suites and WMM.
    pub const MICROSOFT: Oui = Oui([0x00, 0x50, 0xF2]);

    /// Take the OUI from the first three bytes of `bytes`, if present.
    pub fn from_prefix(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [a, b, c, ..] => Some(Self([*a, *b, *c])),
            _ => None,
        }
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bssid_id_roundtrip() {
        let mac = [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff];
        let id = BssidId(mac);
        assert_eq!(id.to_string(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(BssidId::parse("aa:bb:cc:dd:ee:ff").unwrap(), id);
        assert_eq!(BssidId::parse("AA-BB-CC-DD-EE-FF").unwrap(), id);
    }

    #[test]
    fn bssid_id_accepts_short_octets() {
        let id = BssidId::parse("0:1b:2:3c:4:5").unwrap();
        assert_eq!(id.0, [0x00, 0x1b, 0x02, 0x3c, 0x04, 0x05]);
    }

    #[test]
    fn bssid_id_parse_errors() {
        assert!(BssidId::parse("aa:bb:cc").is_err());
        assert!(BssidId::parse("zz:bb:cc:dd:ee:ff").is_err());
        assert!(BssidId::parse("aaa:bb:cc:dd:ee:ff").is_err());
        assert!(BssidId::parse("").is_err());
        assert_eq!(
            BssidId::parse("nope"),
            Err(CoreError::MacParseFailed {
                input: "nope".into()
            })
        );
    }

    #[test]
    fn bssid_id_from_bytes() {
        let id = BssidId::from_bytes(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]).unwrap();
        assert_eq!(id.0, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(
            BssidId::from_bytes(&[0x01, 0x02]),
            Err(CoreError::InvalidMac { len: 2 })
        );
    }

    #[test]
    fn oui_rendering() {
        let id = BssidId::parse("00:0b:86:12:34:56").unwrap();
        assert_eq!(id.oui().to_string(), "00:0B:86");
        assert_eq!(Oui::IEEE_80211.to_string(), "00:0F:AC");
        assert_eq!(Oui::from_prefix(&[0x50, 0x6f]), None);
        assert_eq!(Oui::from_prefix(&[0x50, 0x6f, 0x9a, 0x09]), Some(Oui([0x50, 0x6f, 0x9a])));
    }
}
