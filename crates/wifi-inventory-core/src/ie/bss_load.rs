//! BSS Load element (id 11).
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0       2     Station count (little-endian)
//! 2       1     Channel utilization (0-255 of busy time)
//! 3       2     Available admission capacity (units of 32 us/s)
//! ```

use byteorder::{ByteOrder, LittleEndian};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{find, InformationElement, ELEMENT_BSS_LOAD};

const BSS_LOAD_LEN: usize = 5;

/// Admission capacity units per second of medium time (1 000 000 us / 32 us).
const CAPACITY_UNITS_PER_SECOND: f64 = 31_250.0;

/// Station count and medium usage reported by an access point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BssLoadInfo {
    pub station_count: u16,
    /// Channel utilization as a percentage (0-100).
    pub channel_utilization_percent: f64,
    /// Available admission capacity in units of 32 us/s.
    pub available_capacity_units: u16,
}

impl BssLoadInfo {
    /// Available admission capacity as a percentage of medium time.
    pub fn available_capacity_percent(&self) -> f64 {
        f64::from(self.available_capacity_units) / CAPACITY_UNITS_PER_SECOND * 100.0
    }
}

/// Decode the first BSS Load element, if one with a full payload exists.
pub fn extract_bss_load(elements: &[InformationElement]) -> Option<BssLoadInfo> {
    let ie = find(elements, ELEMENT_BSS_LOAD)?;
    if ie.payload.len() < BSS_LOAD_LEN {
        return None;
    }

    let bytes = &ie.payload;
    Some(BssLoadInfo {
        station_count: LittleEndian::read_u16(&bytes[0..2]),
        channel_utilization_percent: f64::from(bytes[2]) / 255.0 * 100.0,
        available_capacity_units: LittleEndian::read_u16(&bytes[3..5]),
    })
}
