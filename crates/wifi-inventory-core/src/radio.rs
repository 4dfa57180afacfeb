//! Radio value types reported by the wireless interface.
//!
//! Each enumeration has exactly one human-readable rendering per variant via
//! `Display`; these strings are what the snapshot and CLI output carry.
//!
//! Regulatory references for the UNII/DFS mapping: FCC 47 CFR 15.247
//! (2.4 GHz), FCC 47 CFR 15.407 (5/6 GHz), ETSI EN 301 893 (5 GHz).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PhyMode
// ---------------------------------------------------------------------------

/// The 802.11 PHY mode of a link or access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhyMode {
    None,
    /// 802.11a
    A,
    /// 802.11b
    B,
    /// 802.11g
    G,
    /// 802.11n (Wi-Fi 4)
    N,
    /// 802.11ac (Wi-Fi 5)
    Ac,
    /// 802.11ax (Wi-Fi 6/6E)
    Ax,
    /// 802.11be (Wi-Fi 7)
    Be,
    /// A raw mode value the platform reported but we do not recognise.
    Unknown(u8),
}

impl PhyMode {
    /// Most capable first. Probing in this order yields the highest mode an
    /// access point advertises.
    const PROBE_ORDER: [PhyMode; 7] = [
        PhyMode::Be,
        PhyMode::Ax,
        PhyMode::Ac,
        PhyMode::N,
        PhyMode::G,
        PhyMode::A,
        PhyMode::B,
    ];

    /// Pick the highest mode from a set of supported modes.
    ///
    /// Returns `None` when the set contains no recognised mode.
    pub fn highest<I>(supported: I) -> Option<PhyMode>
    where
        I: IntoIterator<Item = PhyMode>,
    {
        let supported: Vec<PhyMode> = supported.into_iter().collect();
        Self::PROBE_ORDER
            .into_iter()
            .find(|mode| supported.contains(mode))
    }
}

impl fmt::Display for PhyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::A => write!(f, "802.11a"),
            Self::B => write!(f, "802.11b"),
            Self::G => write!(f, "802.11g"),
            Self::N => write!(f, "802.11n (Wi-Fi 4)"),
            Self::Ac => write!(f, "802.11ac (Wi-Fi 5)"),
            Self::Ax => write!(f, "802.11ax (Wi-Fi 6/6E)"),
            Self::Be => write!(f, "802.11be (Wi-Fi 7)"),
            Self::Unknown(raw) => write!(f, "Unknown ({raw})"),
        }
    }
}

// ---------------------------------------------------------------------------
// SecurityMode
// ---------------------------------------------------------------------------

/// Link security as negotiated by the active interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SecurityMode {
    Open,
    Wep,
    WpaPersonal,
    WpaPersonalMixed,
    Wpa2Personal,
    Personal,
    DynamicWep,
    WpaEnterprise,
    WpaEnterpriseMixed,
    Wpa2Enterprise,
    Enterprise,
    Wpa3Personal,
    Wpa3Enterprise,
    Wpa3Transition,
    Owe,
    OweTransition,
    Unknown,
}

impl fmt::Display for SecurityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::WpaPersonal => "WPA Personal",
            Self::WpaPersonalMixed => "WPA/WPA2 Personal",
            Self::Wpa2Personal => "WPA2 Personal",
            Self::Personal => "Personal",
            Self::DynamicWep => "Dynamic WEP",
            Self::WpaEnterprise => "WPA Enterprise",
            Self::WpaEnterpriseMixed => "WPA/WPA2 Enterprise",
            Self::Wpa2Enterprise => "WPA2 Enterprise",
            Self::Enterprise => "Enterprise",
            Self::Wpa3Personal => "WPA3 Personal",
            Self::Wpa3Enterprise => "WPA3 Enterprise",
            Self::Wpa3Transition => "WPA2/WPA3 Personal",
            Self::Owe => "OWE (Enhanced Open)",
            Self::OweTransition => "OWE Transition",
            Self::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// ChannelBand / ChannelWidth
// ---------------------------------------------------------------------------

/// The frequency band of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelBand {
    /// 2.4 GHz (channels 1-14)
    #[cfg_attr(feature = "serde", serde(rename = "2.4ghz"))]
    Band2_4GHz,
    /// 5 GHz
    #[cfg_attr(feature = "serde", serde(rename = "5ghz"))]
    Band5GHz,
    /// 6 GHz (Wi-Fi 6E / 7)
    #[cfg_attr(feature = "serde", serde(rename = "6ghz"))]
    Band6GHz,
    #[cfg_attr(feature = "serde", serde(rename = "unknown"))]
    Unknown,
}

impl fmt::Display for ChannelBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Band2_4GHz => write!(f, "2.4 GHz"),
            Self::Band5GHz => write!(f, "5 GHz"),
            Self::Band6GHz => write!(f, "6 GHz"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The bonded width of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelWidth {
    #[cfg_attr(feature = "serde", serde(rename = "20mhz"))]
    Width20MHz,
    #[cfg_attr(feature = "serde", serde(rename = "40mhz"))]
    Width40MHz,
    #[cfg_attr(feature = "serde", serde(rename = "80mhz"))]
    Width80MHz,
    #[cfg_attr(feature = "serde", serde(rename = "160mhz"))]
    Width160MHz,
    #[cfg_attr(feature = "serde", serde(rename = "unknown"))]
    Unknown,
}

impl fmt::Display for ChannelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width20MHz => write!(f, "20 MHz"),
            Self::Width40MHz => write!(f, "40 MHz"),
            Self::Width80MHz => write!(f, "80 MHz"),
            Self::Width160MHz => write!(f, "160 MHz"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

// ---------------------------------------------------------------------------
// WlanChannel
// ---------------------------------------------------------------------------

/// The channel an interface is operating on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WlanChannel {
    /// The 802.11 channel number.
    pub number: u32,
    pub band: ChannelBand,
    pub width: ChannelWidth,
}

impl WlanChannel {
    /// The UNII sub-band name for this channel.
    pub fn unii_band(&self) -> &'static str {
        match self.band {
            ChannelBand::Band2_4GHz => "ISM",
            ChannelBand::Band5GHz => match self.number {
                36..=48 => "UNII-1",
                52..=64 => "UNII-2A",
                100..=144 => "UNII-2C",
                149..=165 => "UNII-3",
                _ => "Unknown",
            },
            ChannelBand::Band6GHz => match self.number {
                1..=93 => "UNII-5",
                _ => "6GHz (Other)",
            },
            ChannelBand::Unknown => "Unknown",
        }
    }

    /// Whether the channel falls in a Dynamic Frequency Selection range.
    pub fn is_dfs(&self) -> bool {
        matches!(self.number, 52..=64 | 100..=144)
    }

    /// `"36 (5 GHz, 80 MHz, UNII-1, Non-DFS)"`.
    pub fn detailed_description(&self) -> String {
        let dfs = if self.is_dfs() { "DFS" } else { "Non-DFS" };
        format!(
            "{} ({}, {}, {}, {})",
            self.number,
            self.band,
            self.width,
            self.unii_band(),
            dfs
        )
    }
}

// ---------------------------------------------------------------------------
// SignalHealth
// ---------------------------------------------------------------------------

/// Coarse link-quality classification.
///
/// RSSI thresholds follow enterprise RF design guidance; SNR thresholds
/// follow the minimum SNR required by common MCS rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SignalHealth {
    Excellent,
    Good,
    Fair,
    Poor,
    Unusable,
}

impl SignalHealth {
    /// Classify a received signal strength in dBm.
    pub fn from_rssi(rssi: i32) -> Self {
        match rssi {
            r if r >= -55 => Self::Excellent,
            r if r >= -67 => Self::Good,
            r if r >= -75 => Self::Fair,
            r if r >= -85 => Self::Poor,
            _ => Self::Unusable,
        }
    }

    /// Classify a signal-to-noise ratio in dB.
    pub fn from_snr(snr: i32) -> Self {
        match snr {
            s if s >= 35 => Self::Excellent,
            s if s >= 25 => Self::Good,
            s if s >= 15 => Self::Fair,
            s if s >= 10 => Self::Poor,
            _ => Self::Unusable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Unusable => "Unusable",
        }
    }
}

impl fmt::Display for SignalHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phy_mode_rendering() {
        assert_eq!(PhyMode::N.to_string(), "802.11n (Wi-Fi 4)");
        assert_eq!(PhyMode::Ax.to_string(), "802.11ax (Wi-Fi 6/6E)");
        assert_eq!(PhyMode::Unknown(9).to_string(), "Unknown (9)");
    }

    #[test]
    fn phy_mode_highest() {
        let supported = [PhyMode::B, PhyMode::G, PhyMode::N, PhyMode::Ac];
        assert_eq!(PhyMode::highest(supported), Some(PhyMode::Ac));
        assert_eq!(PhyMode::highest([PhyMode::A, PhyMode::B]), Some(PhyMode::A));
        assert_eq!(PhyMode::highest([PhyMode::None]), None);
        assert_eq!(PhyMode::highest(Vec::new()), None);
    }

    #[test]
    fn security_mode_rendering() {
        assert_eq!(SecurityMode::Wpa3Transition.to_string(), "WPA2/WPA3 Personal");
        assert_eq!(SecurityMode::Owe.to_string(), "OWE (Enhanced Open)");
        assert_eq!(SecurityMode::Open.to_string(), "Open");
    }

    #[test]
    fn unii_band_mapping() {
        let ch = |number, band| WlanChannel {
            number,
            band,
            width: ChannelWidth::Width20MHz,
        };
        assert_eq!(ch(6, ChannelBand::Band2_4GHz).unii_band(), "ISM");
        assert_eq!(ch(36, ChannelBand::Band5GHz).unii_band(), "UNII-1");
        assert_eq!(ch(60, ChannelBand::Band5GHz).unii_band(), "UNII-2A");
        assert_eq!(ch(132, ChannelBand::Band5GHz).unii_band(), "UNII-2C");
        assert_eq!(ch(161, ChannelBand::Band5GHz).unii_band(), "UNII-3");
        assert_eq!(ch(177, ChannelBand::Band5GHz).unii_band(), "Unknown");
        assert_eq!(ch(37, ChannelBand::Band6GHz).unii_band(), "UNII-5");
        assert_eq!(ch(101, ChannelBand::Band6GHz).unii_band(), "6GHz (Other)");
    }

    #[test]
    fn dfs_and_description() {
        let ch = WlanChannel {
            number: 100,
            band: ChannelBand::Band5GHz,
            width: ChannelWidth::Width80MHz,
        };
        assert!(ch.is_dfs());
        assert_eq!(ch.detailed_description(), "100 (5 GHz, 80 MHz, UNII-2C, DFS)");

        let ch = WlanChannel {
            number: 36,
            band: ChannelBand::Band5GHz,
            width: ChannelWidth::Width40MHz,
        };
        assert!(!ch.is_dfs());
        assert_eq!(ch.detailed_description(), "36 (5 GHz, 40 MHz, UNII-1, Non-DFS)");
    }

    #[test]
    fn signal_health_thresholds() {
        assert_eq!(SignalHealth::from_rssi(-40), SignalHealth::Excellent);
        assert_eq!(SignalHealth::from_rssi(-55), SignalHealth::Excellent);
        assert_eq!(SignalHealth::from_rssi(-60), SignalHealth::Good);
        assert_eq!(SignalHealth::from_rssi(-75), SignalHealth::Fair);
        assert_eq!(SignalHealth::from_rssi(-80), SignalHealth::Poor);
        assert_eq!(SignalHealth::from_rssi(-90), SignalHealth::Unusable);

        assert_eq!(SignalHealth::from_snr(40), SignalHealth::Excellent);
        assert_eq!(SignalHealth::from_snr(25), SignalHealth::Good);
        assert_eq!(SignalHealth::from_snr(20), SignalHealth::Fair);
        assert_eq!(SignalHealth::from_snr(10), SignalHealth::Poor);
        assert_eq!(SignalHealth::from_snr(3), SignalHealth::Unusable);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn channel_serde_names() {
        let ch: WlanChannel =
            serde_json::from_str(r#"{"number":149,"band":"5ghz","width":"80mhz"}"#).unwrap();
        assert_eq!(ch.band, ChannelBand::Band5GHz);
        assert_eq!(ch.width, ChannelWidth::Width80MHz);
        let phy: PhyMode = serde_json::from_str(r#""ax""#).unwrap();
        assert_eq!(phy, PhyMode::Ax);
    }
}
