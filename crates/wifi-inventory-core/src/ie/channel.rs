//! Channel bonding geometry from the HT Operation (id 61) and VHT Operation
//! (id 192) elements.
//!
//! HT Operation byte 1, bits 0-1, carry the secondary channel offset of a
//! 40 MHz channel. VHT Operation bytes 0-2 carry the channel width and the
//! two center-frequency segment indices used for 80, 160 and 80+80 MHz.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{find, InformationElement, ELEMENT_HT_OPERATION, ELEMENT_VHT_OPERATION};

/// 20 MHz channel spacing in channel-number units.
const CHANNEL_STEP: i32 = 4;

/// 20 MHz sub-channel offsets around an 80 MHz segment center.
const OFFSETS_80MHZ: [i32; 4] = [-6, -2, 2, 6];
/// 20 MHz sub-channel offsets around a 160 MHz center.
const OFFSETS_160MHZ: [i32; 8] = [-14, -10, -6, -2, 2, 6, 10, 14];

/// Position of the secondary 20 MHz channel relative to the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SecondaryChannelOffset {
    None,
    Above,
    Below,
    Reserved,
}

impl SecondaryChannelOffset {
    fn from_ht_info(byte: u8) -> Self {
        match byte & 0x03 {
            0 => Self::None,
            1 => Self::Above,
            3 => Self::Below,
            _ => Self::Reserved,
        }
    }
}

impl fmt::Display for SecondaryChannelOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Above => write!(f, "Above"),
            Self::Below => write!(f, "Below"),
            Self::Reserved => write!(f, "Reserved"),
        }
    }
}

/// VHT channel width field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VhtWidth {
    Mhz80,
    Mhz160,
    Mhz80Plus80,
}

impl VhtWidth {
    fn from_field(width: u8) -> Option<Self> {
        match width {
            1 => Some(Self::Mhz80),
            2 => Some(Self::Mhz160),
            3 => Some(Self::Mhz80Plus80),
            // 0 means 20/40 MHz: the HT element describes the geometry.
            _ => None,
        }
    }
}

fn ht_offset(elements: &[InformationElement]) -> Option<SecondaryChannelOffset> {
    let ht = find(elements, ELEMENT_HT_OPERATION)?;
    ht.payload
        .get(1)
        .map(|&info| SecondaryChannelOffset::from_ht_info(info))
}

/// Secondary channel offset from the first HT Operation element.
pub fn extract_secondary_channel_offset(
    elements: &[InformationElement],
) -> Option<SecondaryChannelOffset> {
    ht_offset(elements)
}

/// Every 20 MHz channel bonded with `primary_channel`, excluding the primary
/// itself, in ascending order.
///
/// VHT geometry wins when it describes an 80, 160 or 80+80 MHz channel;
/// otherwise the HT secondary offset is used. A strictly 20 MHz network, or a
/// non-positive primary channel, yields an empty list.
pub fn extract_secondary_channels(
    primary_channel: i32,
    elements: &[InformationElement],
) -> Vec<i32> {
    if primary_channel <= 0 {
        return Vec::new();
    }

    if let Some(channels) = vht_channels(elements) {
        let mut channels: Vec<i32> = channels
            .into_iter()
            .filter(|&ch| ch != primary_channel)
            .collect();
        channels.sort_unstable();
        channels.dedup();
        return channels;
    }

    match ht_offset(elements) {
        Some(SecondaryChannelOffset::Above) => vec![primary_channel + CHANNEL_STEP],
        Some(SecondaryChannelOffset::Below) => vec![primary_channel - CHANNEL_STEP],
        _ => Vec::new(),
    }
}

/// All 20 MHz channels spanned by the VHT operating channel, if VHT defines
/// one wider than 40 MHz.
fn vht_channels(elements: &[InformationElement]) -> Option<Vec<i32>> {
    let vht = find(elements, ELEMENT_VHT_OPERATION)?;
    let &[width, center1, center2, ..] = vht.payload.as_slice() else {
        return None;
    };
    let center1 = i32::from(center1);
    let center2 = i32::from(center2);

    let around = |center: i32, offsets: &[i32]| -> Vec<i32> {
        offsets.iter().map(|off| center + off).collect()
    };

    let channels = match VhtWidth::from_field(width)? {
        VhtWidth::Mhz80 => around(center1, &OFFSETS_80MHZ),
        VhtWidth::Mhz160 => around(center1, &OFFSETS_160MHZ),
        VhtWidth::Mhz80Plus80 => {
            let mut both = around(center1, &OFFSETS_80MHZ);
            both.extend(around(center2, &OFFSETS_80MHZ));
            both
        }
    };
    Some(channels)
}
