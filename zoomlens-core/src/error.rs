//! Lens driver errors

use crate::calibration::CALIBRATION_WORDS;

/// Errors from lens controller operations
///
/// Out-of-range values and an expired busy poll are not errors: values are
/// clamped and the driver proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LensError<E> {
    /// Bus transfer failed (not retried)
    Transport(E),
    /// Calibration map with the wrong number of words
    InvalidLength {
        /// Required word count
        expected: usize,
        /// Word count supplied
        actual: usize,
    },
}

impl<E> LensError<E> {
    /// Calibration map length error for `actual` words
    pub const fn invalid_length(actual: usize) -> Self {
        LensError::InvalidLength {
            expected: CALIBRATION_WORDS,
            actual,
        }
    }

    /// Check if the error came from the bus
    pub const fn is_transport(&self) -> bool {
        matches!(self, LensError::Transport(_))
    }
}

impl<E> From<E> for LensError<E> {
    fn from(e: E) -> Self {
        LensError::Transport(e)
    }
}
