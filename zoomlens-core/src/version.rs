//! Controller firmware version

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Firmware version reported by the version register
///
/// High byte is the major revision, low byte the minor revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FirmwareVersion(pub u16);

impl FirmwareVersion {
    /// Oldest firmware with calibration map support
    pub const CALIBRATION_MAP_MIN: FirmwareVersion = FirmwareVersion(0x0105);

    /// Major revision
    pub const fn major(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Minor revision
    pub const fn minor(self) -> u8 {
        self.0 as u8
    }

    /// Check if the calibration map registers are available
    ///
    /// The driver does not enforce this; callers should check before
    /// reading or writing the map.
    pub fn supports_calibration_map(self) -> bool {
        self >= Self::CALIBRATION_MAP_MIN
    }
}

impl From<u16> for FirmwareVersion {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}
