//! SMBus framing over embedded-hal I2C
//!
//! [`Smbus`] turns any `embedded-hal` (or `embedded-hal-async`) I2C master
//! into an [`SmbusTransport`]. Framing:
//!
//! | Operation   | Wire                                       |
//! |-------------|--------------------------------------------|
//! | read word   | W `[reg]`, R `[lo, hi]`                    |
//! | write word  | W `[reg, lo, hi]`                          |
//! | write block | W `[reg, w0_hi, w0_lo, w1_hi, ...]`        |
//! | read block  | W `[reg]`, R `[b0, b1, ...]`               |

use heapless::Vec;

use crate::i2c::{AsyncSmbusTransport, SmbusTransport};

/// Maximum data bytes in one SMBus I2C-block transfer
pub const MAX_BLOCK_LEN: usize = 32;

/// Error from SMBus transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SmbusError<E> {
    /// Underlying I2C bus error (NACK, arbitration loss, timeout, ...)
    Bus(E),
    /// Block longer than [`MAX_BLOCK_LEN`] bytes
    BlockTooLong,
}

impl<E> From<E> for SmbusError<E> {
    fn from(e: E) -> Self {
        SmbusError::Bus(e)
    }
}

/// SMBus adapter owning an I2C bus
pub struct Smbus<I2C> {
    i2c: I2C,
}

impl<I2C> Smbus<I2C> {
    /// Wrap an I2C bus
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Build a word write frame: register, then the word low byte first
fn word_frame(register: u8, value: u16) -> [u8; 3] {
    let [lo, hi] = value.to_le_bytes();
    [register, lo, hi]
}

/// Build a block write frame: register, then each word big-endian
fn block_frame<E>(
    register: u8,
    words: &[u16],
) -> Result<Vec<u8, { MAX_BLOCK_LEN + 1 }>, SmbusError<E>> {
    if words.len() * 2 > MAX_BLOCK_LEN {
        return Err(SmbusError::BlockTooLong);
    }

    let mut frame = Vec::new();
    if frame.push(register).is_err() {
        return Err(SmbusError::BlockTooLong);
    }
    for word in words {
        if frame.extend_from_slice(&word.to_be_bytes()).is_err() {
            return Err(SmbusError::BlockTooLong);
        }
    }
    Ok(frame)
}

impl<I2C> SmbusTransport for Smbus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = SmbusError<I2C::Error>;

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    fn write_word(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error> {
        self.i2c.write(address, &word_frame(register, value))?;
        Ok(())
    }

    fn write_block(
        &mut self,
        address: u8,
        register: u8,
        words: &[u16],
    ) -> Result<(), Self::Error> {
        let frame = block_frame::<I2C::Error>(register, words)?;
        self.i2c.write(address, &frame)?;
        Ok(())
    }

    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        if buf.len() > MAX_BLOCK_LEN {
            return Err(SmbusError::BlockTooLong);
        }
        self.i2c.write_read(address, &[register], buf)?;
        Ok(())
    }
}

impl<I2C> AsyncSmbusTransport for Smbus<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    type Error = SmbusError<I2C::Error>;

    async fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(address, &[register], &mut buf).await?;
        Ok(u16::from_le_bytes(buf))
    }

    async fn write_word(
        &mut self,
        address: u8,
        register: u8,
        value: u16,
    ) -> Result<(), Self::Error> {
        self.i2c.write(address, &word_frame(register, value)).await?;
        Ok(())
    }

    async fn write_block(
        &mut self,
        address: u8,
        register: u8,
        words: &[u16],
    ) -> Result<(), Self::Error> {
        let frame = block_frame::<I2C::Error>(register, words)?;
        self.i2c.write(address, &frame).await?;
        Ok(())
    }

    async fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        if buf.len() > MAX_BLOCK_LEN {
            return Err(SmbusError::BlockTooLong);
        }
        self.i2c.write_read(address, &[register], buf).await?;
        Ok(())
    }
}
