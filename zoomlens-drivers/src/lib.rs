//! Lens controller drivers
//!
//! This crate provides the register-level driver for motorized zoom lens
//! controllers (focus, zoom, pan/tilt servos, IR-cut filter):
//!
//! - [`Focuser`] - blocking driver over an [`SmbusTransport`]
//! - [`AsyncFocuser`] - the same protocol over an [`AsyncSmbusTransport`]
//!
//! The controller runs motor commands on its own and raises a busy flag
//! while doing so. Every operation polls that flag before touching any
//! other register.
//!
//! ```ignore
//! let bus = Smbus::new(i2c);
//! let mut lens = Focuser::new(bus, delay);
//!
//! lens.reset(LensOption::Focus)?;
//! lens.set(LensOption::Focus, 1200)?;
//! lens.move_to(800, 1500)?;
//!
//! if lens.driver_version()?.supports_calibration_map() {
//!     let map = lens.read_calibration_map()?;
//! }
//! ```
//!
//! [`SmbusTransport`]: zoomlens_hal::SmbusTransport
//! [`AsyncSmbusTransport`]: zoomlens_hal::AsyncSmbusTransport

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt; // must be first, the logging macros are textually scoped

pub mod focuser;

#[cfg(test)]
mod fake;

pub use focuser::{AsyncFocuser, Confirm, Focuser};
pub use zoomlens_core::{
    CalibrationMap, ControllerConfig, FirmwareVersion, LensError, LensOption,
};
