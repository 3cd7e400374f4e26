//! Lens controller driver
//!
//! # Protocol
//!
//! The controller sits at a fixed 7-bit address (0x0C) and exposes 16-bit
//! big-endian registers:
//!
//! | Register    | Purpose                                   |
//! |-------------|-------------------------------------------|
//! | 0x00 / 0x01 | Focus / zoom target                       |
//! | 0x04        | Busy flag (non-zero while motors run)     |
//! | 0x05 / 0x06 | Pan / tilt servo angle                    |
//! | 0x0A / 0x0B | Focus / zoom reset (homing)               |
//! | 0x0C        | IR-cut filter                             |
//! | 0x0F        | Combined focus + zoom move (4-byte block) |
//! | 0x10        | Controller reset trigger                  |
//! | 0x30        | Mode                                      |
//! | 0x40        | Firmware version                          |
//! | 0x50 / 0x51 | Calibration map, 11 words each            |
//!
//! Writing a target starts a motor move and raises the busy flag. Any
//! access while the flag is up can corrupt the move in progress, so every
//! operation waits for the flag first. The wait is bounded (600 polls at
//! 10 ms by default); when the bound is reached the driver logs a warning
//! and carries on.
//!
//! # Concurrency
//!
//! The driver owns its transport and assumes it is the only user of the
//! controller. Sharing a controller between threads or tasks must be
//! serialized by the caller.
//!
//! [`AsyncFocuser`] runs the same command sequences over the async traits.
//! Pure steps (clamping, move field order, calibration block layout) live in
//! `zoomlens-core`; the bus sequencing is written out twice, so protocol
//! changes must be made to both drivers.

mod asynch;

pub use asynch::AsyncFocuser;

use embedded_hal::delay::DelayNs;
use zoomlens_core::calibration::CALIBRATION_BLOCK_BYTES;
use zoomlens_core::{
    marshal, option, reg, CalibrationMap, ControllerConfig, FirmwareVersion, LensError,
    LensOption,
};
use zoomlens_hal::SmbusTransport;

/// Whether a command waits for the motors to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Confirm {
    /// Block until the controller clears its busy flag
    #[default]
    Wait,
    /// Return right after the write; the next operation absorbs the wait
    NoWait,
}

impl Confirm {
    /// Check if the command waits for completion
    pub const fn waits(self) -> bool {
        matches!(self, Confirm::Wait)
    }
}

/// Blocking lens controller driver
pub struct Focuser<T, D> {
    transport: T,
    delay: D,
    config: ControllerConfig,
}

impl<T, D> Focuser<T, D>
where
    T: SmbusTransport,
    D: DelayNs,
{
    /// Create a driver with the default configuration
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_config(transport, delay, ControllerConfig::default())
    }

    /// Create a driver with a custom configuration
    ///
    /// The configuration is used as given; see [`ControllerConfig::validate`].
    pub fn with_config(transport: T, delay: D, config: ControllerConfig) -> Self {
        Self {
            transport,
            delay,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Release the transport and delay
    pub fn release(self) -> (T, D) {
        (self.transport, self.delay)
    }

    /// Read a register through the word path
    fn read16(&mut self, register: u8) -> Result<u16, LensError<T::Error>> {
        let raw = self.transport.read_word(self.config.address, register)?;
        Ok(marshal::swap_word(raw))
    }

    /// Write a register through the word path
    fn write16(&mut self, register: u8, value: u16) -> Result<(), LensError<T::Error>> {
        self.transport
            .write_word(self.config.address, register, marshal::swap_word(value))?;
        Ok(())
    }

    /// Check the busy flag once, without waiting
    pub fn is_busy(&mut self) -> Result<bool, LensError<T::Error>> {
        Ok(self.read16(reg::BUSY)? != 0)
    }

    /// Wait until the controller clears its busy flag
    ///
    /// Gives up silently after the configured number of polls. Only bus
    /// errors are reported.
    pub fn wait_until_free(&mut self) -> Result<(), LensError<T::Error>> {
        let poll = self.config.busy_poll;
        // Always check at least once, even with a zero-attempt config
        let attempts = poll.max_attempts.max(1);

        for attempt in 0..attempts {
            if !self.is_busy()? {
                trace!("lens free after {} polls", attempt + 1);
                return Ok(());
            }
            if attempt + 1 < attempts {
                self.delay.delay_ms(poll.interval_ms);
            }
        }

        warn!("lens still busy after {} polls, proceeding", attempts);
        Ok(())
    }

    fn settle(&mut self, confirm: Confirm) -> Result<(), LensError<T::Error>> {
        if confirm.waits() {
            self.wait_until_free()?;
        }
        Ok(())
    }

    /// Read the current value of an option
    ///
    /// Values are returned as reported; no range check is applied.
    pub fn get(&mut self, option: LensOption) -> Result<u16, LensError<T::Error>> {
        self.wait_until_free()?;
        self.read16(option.descriptor().register)
    }

    /// Set an option and wait for the move to finish
    ///
    /// The value is clamped to the option's range.
    pub fn set(&mut self, option: LensOption, value: i32) -> Result<(), LensError<T::Error>> {
        self.set_with(option, value, Confirm::Wait)
    }

    /// Set an option, optionally without waiting for the move to finish
    pub fn set_with(
        &mut self,
        option: LensOption,
        value: i32,
        confirm: Confirm,
    ) -> Result<(), LensError<T::Error>> {
        self.wait_until_free()?;

        let desc = option.descriptor();
        let value = desc.clamp(value);
        self.write16(desc.register, value)?;

        self.settle(confirm)
    }

    /// Home an option and wait for the move to finish
    ///
    /// Options without a reset register are left untouched.
    pub fn reset(&mut self, option: LensOption) -> Result<(), LensError<T::Error>> {
        self.reset_with(option, Confirm::Wait)
    }

    /// Home an option, optionally without waiting for the move to finish
    pub fn reset_with(
        &mut self,
        option: LensOption,
        confirm: Confirm,
    ) -> Result<(), LensError<T::Error>> {
        self.wait_until_free()?;

        let Some(register) = option.descriptor().reset_register else {
            debug!("{} has no reset register, skipping", option);
            return Ok(());
        };
        self.write16(register, 0)?;

        self.settle(confirm)
    }

    /// Move focus and zoom together and wait for the move to finish
    ///
    /// Each axis is clamped to its own range. Both targets go out in one
    /// bus transaction.
    pub fn move_to(&mut self, focus: i32, zoom: i32) -> Result<(), LensError<T::Error>> {
        self.move_to_with(focus, zoom, Confirm::Wait)
    }

    /// Move focus and zoom together, optionally without waiting
    pub fn move_to_with(
        &mut self,
        focus: i32,
        zoom: i32,
        confirm: Confirm,
    ) -> Result<(), LensError<T::Error>> {
        self.wait_until_free()?;

        let (first, second) = option::move_targets(focus, zoom);
        self.transport
            .write_block4(self.config.address, reg::MOVE, first, second)?;

        self.settle(confirm)
    }

    /// Read the calibration map from both blocks
    ///
    /// Needs firmware 0x0105 or later, see
    /// [`FirmwareVersion::supports_calibration_map`].
    pub fn read_calibration_map(&mut self) -> Result<CalibrationMap, LensError<T::Error>> {
        let address = self.config.address;
        let mut low = [0u8; CALIBRATION_BLOCK_BYTES];
        let mut high = [0u8; CALIBRATION_BLOCK_BYTES];

        self.wait_until_free()?;
        self.transport
            .read_block(address, reg::CALIBRATION_MAP_LOW, &mut low)?;
        self.wait_until_free()?;
        self.transport
            .read_block(address, reg::CALIBRATION_MAP_HIGH, &mut high)?;

        debug!("read calibration map");
        Ok(CalibrationMap::from_blocks(&low, &high))
    }

    /// Write a calibration map given as a word slice
    ///
    /// Fails with [`LensError::InvalidLength`] before any bus traffic unless
    /// `words` holds exactly 22 values. The write is not read back.
    pub fn write_calibration_map(&mut self, words: &[u16]) -> Result<(), LensError<T::Error>> {
        let Some(map) = CalibrationMap::from_slice(words) else {
            return Err(LensError::invalid_length(words.len()));
        };
        self.write_calibration(&map)
    }

    /// Write a calibration map
    pub fn write_calibration(&mut self, map: &CalibrationMap) -> Result<(), LensError<T::Error>> {
        let address = self.config.address;

        self.wait_until_free()?;
        self.transport
            .write_block(address, reg::CALIBRATION_MAP_LOW, map.low_block())?;
        self.wait_until_free()?;
        self.transport
            .write_block(address, reg::CALIBRATION_MAP_HIGH, map.high_block())?;

        debug!("wrote calibration map");
        Ok(())
    }

    /// Read the controller firmware version
    pub fn driver_version(&mut self) -> Result<FirmwareVersion, LensError<T::Error>> {
        self.wait_until_free()?;
        Ok(FirmwareVersion(self.read16(reg::VERSION)?))
    }
}
