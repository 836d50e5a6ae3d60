//! Console classification types.
//!
//! Every discovered disc image is tagged with a [`ConsoleType`], which
//! determines the on-device folder layout a USB loader expects. `Unknown` is
//! a terminal classification: such files are listed but never transferred.

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ConsoleType {
    Wii,
    Gamecube,
    #[default]
    Unknown,
}

impl ConsoleType {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Whether images of this type have a defined destination layout on a
    /// loader drive.
    pub fn is_transferable(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for ConsoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Disc region, taken from the region byte of a GameCube-shaped header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum Region {
    Japan,
    Usa,
    Europe,
    #[default]
    Unknown,
}

impl Region {
    /// Map the header region byte. Total: unmapped bytes resolve to
    /// `Unknown`, never an error.
    pub fn from_byte(value: u8) -> Self {
        match value {
            0x00 => Self::Japan,
            0x01 => Self::Usa,
            0x02 => Self::Europe,
            _ => Self::Unknown,
        }
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_console_type_from_str() {
        assert_eq!(ConsoleType::from_str("Wii"), Ok(ConsoleType::Wii));
        assert_eq!(ConsoleType::from_str("gamecube"), Ok(ConsoleType::Gamecube));
        assert_eq!(ConsoleType::from_str("UNKNOWN"), Ok(ConsoleType::Unknown));
        assert!(ConsoleType::from_str("PS2").is_err());
    }

    #[test]
    fn test_console_type_serde_strings() {
        assert_eq!(
            serde_json::to_string(&ConsoleType::Gamecube).unwrap(),
            "\"Gamecube\""
        );
        let parsed: ConsoleType = serde_json::from_str("\"Wii\"").unwrap();
        assert_eq!(parsed, ConsoleType::Wii);
    }

    #[test]
    fn test_region_from_byte_is_total() {
        assert_eq!(Region::from_byte(0x00), Region::Japan);
        assert_eq!(Region::from_byte(0x01), Region::Usa);
        assert_eq!(Region::from_byte(0x02), Region::Europe);
        assert_eq!(Region::from_byte(0x03), Region::Unknown);
        assert_eq!(Region::from_byte(0xFF), Region::Unknown);
    }
}
