//! Async lens controller driver
//!
//! Same register protocol as [`Focuser`](super::Focuser). The busy poll
//! yields to the executor between reads instead of blocking the thread,
//! with the same attempt bound and the same silent give-up.
//!
//! Every method here mirrors the blocking driver step for step. Keep the two
//! in sync when changing the command sequences.

use embedded_hal_async::delay::DelayNs;
use zoomlens_core::calibration::CALIBRATION_BLOCK_BYTES;
use zoomlens_core::{
    marshal, option, reg, CalibrationMap, ControllerConfig, FirmwareVersion, LensError,
    LensOption,
};
use zoomlens_hal::AsyncSmbusTransport;

use super::Confirm;

/// Async lens controller driver
pub struct AsyncFocuser<T, D> {
    transport: T,
    delay: D,
    config: ControllerConfig,
}

impl<T, D> AsyncFocuser<T, D>
where
    T: AsyncSmbusTransport,
    D: DelayNs,
{
    /// Create a driver with the default configuration
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_config(transport, delay, ControllerConfig::default())
    }

    /// Create a driver with a custom configuration
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

    async fn read16(&mut self, register: u8) -> Result<u16, LensError<T::Error>> {
        let raw = self
            .transport
            .read_word(self.config.address, register)
            .await?;
        Ok(marshal::swap_word(raw))
    }

    async fn write16(&mut self, register: u8, value: u16) -> Result<(), LensError<T::Error>> {
        self.transport
            .write_word(self.config.address, register, marshal::swap_word(value))
            .await?;
        Ok(())
    }

    /// Check the busy flag once, without waiting
    pub async fn is_busy(&mut self) -> Result<bool, LensError<T::Error>> {
        Ok(self.read16(reg::BUSY).await? != 0)
    }

    /// Wait until the controller clears its busy flag
    ///
    /// Gives up silently after the configured number of polls.
    pub async fn wait_until_free(&mut self) -> Result<(), LensError<T::Error>> {
        let poll = self.config.busy_poll;
        // Always check at least once, even with a zero-attempt config
        let attempts = poll.max_attempts.max(1);

        for attempt in 0..attempts {
            if !self.is_busy().await? {
                trace!("lens free after {} polls", attempt + 1);
                return Ok(());
            }
            if attempt + 1 < attempts {
                self.delay.delay_ms(poll.interval_ms).await;
            }
        }

        warn!("lens still busy after {} polls, proceeding", attempts);
        Ok(())
    }

    async fn settle(&mut self, confirm: Confirm) -> Result<(), LensError<T::Error>> {
        if confirm.waits() {
            self.wait_until_free().await?;
        }
        Ok(())
    }

    /// Read the current value of an option
    pub async fn get(&mut self, option: LensOption) -> Result<u16, LensError<T::Error>> {
        self.wait_until_free().await?;
        self.read16(option.descriptor().register).await
    }

    /// Set an option and wait for the move to finish
    pub async fn set(&mut self, option: LensOption, value: i32) -> Result<(), LensError<T::Error>> {
        self.set_with(option, value, Confirm::Wait).await
    }

    /// Set an option, optionally without waiting for the move to finish
    pub async fn set_with(
        &mut self,
        option: LensOption,
        value: i32,
        confirm: Confirm,
    ) -> Result<(), LensError<T::Error>> {
        self.wait_until_free().await?;

        let desc = option.descriptor();
        self.write16(desc.register, desc.clamp(value)).await?;

        self.settle(confirm).await
    }

    /// Home an option and wait for the move to finish
    pub async fn reset(&mut self, option: LensOption) -> Result<(), LensError<T::Error>> {
        self.reset_with(option, Confirm::Wait).await
    }

    /// Home an option, optionally without waiting for the move to finish
    pub async fn reset_with(
        &mut self,
        option: LensOption,
        confirm: Confirm,
    ) -> Result<(), LensError<T::Error>> {
        self.wait_until_free().await?;

        let Some(register) = option.descriptor().reset_register else {
            debug!("{} has no reset register, skipping", option);
            return Ok(());
        };
        self.write16(register, 0).await?;

        self.settle(confirm).await
    }

    /// Move focus and zoom together and wait for the move to finish
    pub async fn move_to(&mut self, focus: i32, zoom: i32) -> Result<(), LensError<T::Error>> {
        self.move_to_with(focus, zoom, Confirm::Wait).await
    }

    /// Move focus and zoom together, optionally without waiting
    pub async fn move_to_with(
        &mut self,
        focus: i32,
        zoom: i32,
        confirm: Confirm,
    ) -> Result<(), LensError<T::Error>> {
        self.wait_until_free().await?;

        let (first, second) = option::move_targets(focus, zoom);
        self.transport
            .write_block4(self.config.address, reg::MOVE, first, second)
            .await?;

        self.settle(confirm).await
    }

    /// Read the calibration map from both blocks
    pub async fn read_calibration_map(&mut self) -> Result<CalibrationMap, LensError<T::Error>> {
        let address = self.config.address;
        let mut low = [0u8; CALIBRATION_BLOCK_BYTES];
        let mut high = [0u8; CALIBRATION_BLOCK_BYTES];

        self.wait_until_free().await?;
        self.transport
            .read_block(address, reg::CALIBRATION_MAP_LOW, &mut low)
            .await?;
        self.wait_until_free().await?;
        self.transport
            .read_block(address, reg::CALIBRATION_MAP_HIGH, &mut high)
            .await?;

        debug!("read calibration map");
        Ok(CalibrationMap::from_blocks(&low, &high))
    }

    /// Write a calibration map given as a word slice
    ///
    /// Fails with [`LensError::InvalidLength`] before any bus traffic unless
    /// `words` holds exactly 22 values.
    pub async fn write_calibration_map(
        &mut self,
        words: &[u16],
    ) -> Result<(), LensError<T::Error>> {
        let Some(map) = CalibrationMap::from_slice(words) else {
            return Err(LensError::invalid_length(words.len()));
        };
        self.write_calibration(&map).await
    }

    /// Write a calibration map
    pub async fn write_calibration(
        &mut self,
        map: &CalibrationMap,
    ) -> Result<(), LensError<T::Error>> {
        let address = self.config.address;

        self.wait_until_free().await?;
        self.transport
            .write_block(address, reg::CALIBRATION_MAP_LOW, map.low_block())
            .await?;
        self.wait_until_free().await?;
        self.transport
            .write_block(address, reg::CALIBRATION_MAP_HIGH, map.high_block())
            .await?;

        debug!("wrote calibration map");
        Ok(())
    }

    /// Read the controller firmware version
    pub async fn driver_version(&mut self) -> Result<FirmwareVersion, LensError<T::Error>> {
        self.wait_until_free().await?;
        Ok(FirmwareVersion(self.read16(reg::VERSION).await?))
    }
}
