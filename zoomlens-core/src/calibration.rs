//! Lens calibration map
//!
//! The controller stores a focus/zoom travel curve as 22 words in its
//! non-volatile memory, split across two 11-word blocks. The driver treats
//! it as an opaque blob and never validates individual entries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::marshal;

/// Number of words in a calibration map
pub const CALIBRATION_WORDS: usize = 22;

/// Number of words in each calibration block
pub const CALIBRATION_BLOCK_WORDS: usize = CALIBRATION_WORDS / 2;

/// Number of bytes in each calibration block
pub const CALIBRATION_BLOCK_BYTES: usize = CALIBRATION_BLOCK_WORDS * 2;

/// Focus/zoom travel curve stored on the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationMap([u16; CALIBRATION_WORDS]);

impl CalibrationMap {
    /// Create a map from its 22 words
    pub const fn new(words: [u16; CALIBRATION_WORDS]) -> Self {
        Self(words)
    }

    /// Create a map from a slice
    ///
    /// Returns `None` unless the slice holds exactly 22 words.
    pub fn from_slice(words: &[u16]) -> Option<Self> {
        let words: [u16; CALIBRATION_WORDS] = words.try_into().ok()?;
        Some(Self(words))
    }

    /// Decode a map from the raw contents of both blocks
    pub fn from_blocks(
        low: &[u8; CALIBRATION_BLOCK_BYTES],
        high: &[u8; CALIBRATION_BLOCK_BYTES],
    ) -> Self {
        let mut words = [0u16; CALIBRATION_WORDS];
        let (first, second) = words.split_at_mut(CALIBRATION_BLOCK_WORDS);
        marshal::decode_be_words(low, first);
        marshal::decode_be_words(high, second);
        Self(words)
    }

    /// Get all 22 words
    pub fn words(&self) -> &[u16; CALIBRATION_WORDS] {
        &self.0
    }

    /// Words stored in the first block (0x50)
    pub fn low_block(&self) -> &[u16] {
        &self.0[..CALIBRATION_BLOCK_WORDS]
    }

    /// Words stored in the second block (0x51)
    pub fn high_block(&self) -> &[u16] {
        &self.0[CALIBRATION_BLOCK_WORDS..]
    }
}

impl AsRef<[u16]> for CalibrationMap {
    fn as_ref(&self) -> &[u16] {
        &self.0
    }
}

impl From<[u16; CALIBRATION_WORDS]> for CalibrationMap {
    fn from(words: [u16; CALIBRATION_WORDS]) -> Self {
        Self(words)
    }
}
