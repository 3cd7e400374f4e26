//! Board-agnostic core types for motorized zoom lens modules
//!
//! This crate contains everything about the lens controller that does not
//! depend on a bus implementation:
//!
//! - Register map of the peripheral
//! - Option table (register, range and reset register per capability)
//! - Byte-order marshaling for the SMBus word path
//! - Calibration map and firmware version types
//! - Error kinds and controller configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod calibration;
pub mod config;
pub mod error;
pub mod marshal;
pub mod option;
pub mod reg;
pub mod version;

pub use calibration::{CalibrationMap, CALIBRATION_BLOCK_WORDS, CALIBRATION_WORDS};
pub use config::{BusyPollConfig, ControllerConfig};
pub use error::LensError;
pub use option::{LensOption, OptionDescriptor};
pub use version::FirmwareVersion;
