//! Controller configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::reg;

/// Default number of busy-flag polls before giving up
pub const DEFAULT_POLL_ATTEMPTS: u16 = 600;

/// Default delay between busy-flag polls
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid UTF-8 in TOML data
    InvalidUtf8,
    /// TOML parsing failed
    TomlParse,
    /// Busy poll with zero attempts would never wait for the controller
    ZeroPollAttempts,
}

/// Busy-flag polling cadence
///
/// The poll gives up silently after `max_attempts` polls; worst-case
/// blocking time is `max_attempts * interval_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusyPollConfig {
    /// Maximum number of busy-flag reads
    pub max_attempts: u16,
    /// Delay between reads in milliseconds
    pub interval_ms: u32,
}

impl Default for BusyPollConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_ATTEMPTS,
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl BusyPollConfig {
    /// Worst-case time spent in one busy poll
    pub const fn timeout_ms(&self) -> u64 {
        self.max_attempts as u64 * self.interval_ms as u64
    }
}

/// Lens controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// 7-bit I2C address of the controller
    pub address: u8,
    /// Busy-flag polling cadence
    pub busy_poll: BusyPollConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            address: reg::CHIP_ADDR,
            busy_poll: BusyPollConfig::default(),
        }
    }
}

impl ControllerConfig {
    /// Check the configuration for values the driver cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.busy_poll.max_attempts == 0 {
            return Err(ConfigError::ZeroPollAttempts);
        }
        Ok(())
    }
}
