//! Zoomlens Hardware Abstraction Layer
//!
//! This crate defines the bus transport contract the lens drivers are
//! written against, and adapters that implement it on top of any
//! `embedded-hal` I2C bus. Platform HALs (Linux `i2cdev`, RP2040, STM32,
//! ...) only need to provide an `embedded-hal` I2C implementation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  zoomlens-drivers (Focuser)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  zoomlens-hal (this crate - transport)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal / embedded-hal-async I2C  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::SmbusTransport`] - Blocking SMBus word/block transfers
//! - [`i2c::AsyncSmbusTransport`] - The same contract for async buses

#![no_std]
#![deny(unsafe_code)]

pub mod i2c;
pub mod smbus;

// Re-export key traits at crate root for convenience
pub use i2c::{AsyncSmbusTransport, SmbusTransport};
pub use smbus::{Smbus, SmbusError, MAX_BLOCK_LEN};
