//! TOML configuration loading
//!
//! ```toml
//! address = 0x0C
//!
//! [busy_poll]
//! max_attempts = 600
//! interval_ms = 10
//! ```
//!
//! Missing keys keep their defaults.

use core::str;

use super::types::{ConfigError, ControllerConfig};

impl ControllerConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ControllerConfig =
            toml::from_str(text).map_err(|_| ConfigError::TomlParse)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from raw TOML bytes
    pub fn from_toml_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let text = str::from_utf8(bytes).map_err(|_| ConfigError::InvalidUtf8)?;
        Self::from_toml_str(text)
    }
}
