//! Simulated lens controller for driver tests
//!
//! Behaves like the real controller on the register level: word writes are
//! stored and read back, block writes persist per register, and every write
//! can hold the busy flag up for a number of polls. Word transfers use SMBus
//! byte order, so values come back swapped exactly as on hardware.

use zoomlens_core::{marshal, reg};
use zoomlens_hal::{AsyncSmbusTransport, SmbusTransport, MAX_BLOCK_LEN};

/// Simulated bus failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeError {
    /// Device did not acknowledge
    Nack,
}

/// Simulated lens controller
pub struct FakeLens {
    address: u8,
    /// Register values, in register (big-endian) value space
    registers: [u16; 256],
    /// Last block written to each register
    blocks: [[u8; MAX_BLOCK_LEN]; 256],
    /// Busy polls left before the flag clears
    busy_left: u32,
    /// Busy polls to hold after each write
    pub busy_after_write: u32,
    /// Never clear the busy flag
    pub stuck_busy: bool,
    /// Fail every transfer
    pub fail: bool,
    /// Reads of the busy register
    pub busy_reads: u32,
    /// Word reads of other registers
    pub word_reads: u32,
    /// Word writes
    pub word_writes: u32,
    /// Block reads
    pub block_reads: u32,
    /// Block writes
    pub block_writes: u32,
    /// Writes that arrived while the busy flag was up
    pub busy_writes: u32,
    /// Combined moves in write order, as (first, second) field
    pub moves: Vec<(u16, u16)>,
}

impl FakeLens {
    /// Create an idle controller at the default address
    pub fn new() -> Self {
        Self::with_address(reg::CHIP_ADDR)
    }

    /// Create an idle controller at a custom address
    pub fn with_address(address: u8) -> Self {
        Self {
            address,
            registers: [0; 256],
            blocks: [[0; MAX_BLOCK_LEN]; 256],
            busy_left: 0,
            busy_after_write: 0,
            stuck_busy: false,
            fail: false,
            busy_reads: 0,
            word_reads: 0,
            word_writes: 0,
            block_reads: 0,
            block_writes: 0,
            busy_writes: 0,
            moves: Vec::new(),
        }
    }

    /// Report busy for the next `polls` busy reads
    pub fn hold_busy(&mut self, polls: u32) {
        self.busy_left = polls;
    }

    /// Check if the controller would report busy
    pub fn is_busy(&self) -> bool {
        self.stuck_busy || self.busy_left > 0
    }

    /// Get a register value
    pub fn register(&self, register: u8) -> u16 {
        self.registers[register as usize]
    }

    /// Preload a register value
    pub fn set_register(&mut self, register: u8, value: u16) {
        self.registers[register as usize] = value;
    }

    /// First `len` bytes last written as a block to `register`
    pub fn block(&self, register: u8, len: usize) -> &[u8] {
        &self.blocks[register as usize][..len]
    }

    /// Total write transactions
    pub fn writes(&self) -> u32 {
        self.word_writes + self.block_writes
    }

    /// Total bus transactions
    pub fn transactions(&self) -> u32 {
        self.busy_reads + self.word_reads + self.block_reads + self.writes()
    }

    fn check(&self, address: u8) -> Result<(), FakeError> {
        if self.fail || address != self.address {
            return Err(FakeError::Nack);
        }
        Ok(())
    }

    fn start_motion(&mut self) {
        if self.is_busy() {
            self.busy_writes += 1;
        }
        self.busy_left = self.busy_after_write;
    }

    fn on_read_word(&mut self, address: u8, register: u8) -> Result<u16, FakeError> {
        if register == reg::BUSY {
            self.busy_reads += 1;
            self.check(address)?;
            let busy = self.is_busy();
            self.busy_left = self.busy_left.saturating_sub(1);
            return Ok(marshal::swap_word(busy as u16));
        }

        self.word_reads += 1;
        self.check(address)?;
        Ok(marshal::swap_word(self.register(register)))
    }

    fn on_write_word(&mut self, address: u8, register: u8, value: u16) -> Result<(), FakeError> {
        self.word_writes += 1;
        self.check(address)?;
        self.set_register(register, marshal::swap_word(value));
        self.start_motion();
        Ok(())
    }

    fn on_write_block(&mut self, address: u8, register: u8, words: &[u16]) -> Result<(), FakeError> {
        self.block_writes += 1;
        self.check(address)?;

        let block = &mut self.blocks[register as usize];
        for (pair, word) in block.chunks_exact_mut(2).zip(words) {
            pair.copy_from_slice(&word.to_be_bytes());
        }
        if register == reg::MOVE && words.len() == 2 {
            self.moves.push((words[0], words[1]));
        }
        self.start_motion();
        Ok(())
    }

    fn on_read_block(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), FakeError> {
        self.block_reads += 1;
        self.check(address)?;

        let len = buf.len().min(MAX_BLOCK_LEN);
        buf[..len].copy_from_slice(&self.blocks[register as usize][..len]);
        Ok(())
    }
}

impl SmbusTransport for FakeLens {
    type Error = FakeError;

    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, FakeError> {
        self.on_read_word(address, register)
    }

    fn write_word(&mut self, address: u8, register: u8, value: u16) -> Result<(), FakeError> {
        self.on_write_word(address, register, value)
    }

    fn write_block(&mut self, address: u8, register: u8, words: &[u16]) -> Result<(), FakeError> {
        self.on_write_block(address, register, words)
    }

    fn read_block(&mut self, address: u8, register: u8, buf: &mut [u8]) -> Result<(), FakeError> {
        self.on_read_block(address, register, buf)
    }
}

impl AsyncSmbusTransport for FakeLens {
    type Error = FakeError;

    async fn read_word(&mut self, address: u8, register: u8) -> Result<u16, FakeError> {
        self.on_read_word(address, register)
    }

    async fn write_word(&mut self, address: u8, register: u8, value: u16) -> Result<(), FakeError> {
        self.on_write_word(address, register, value)
    }

    async fn write_block(
        &mut self,
        address: u8,
        register: u8,
        words: &[u16],
    ) -> Result<(), FakeError> {
        self.on_write_block(address, register, words)
    }

    async fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), FakeError> {
        self.on_read_block(address, register, buf)
    }
}

/// Delay that records instead of sleeping
#[derive(Debug, Default)]
pub struct CountingDelay {
    /// Number of `delay_ms` calls
    pub calls: u32,
    /// Sum of requested milliseconds
    pub total_ms: u32,
}

impl embedded_hal::delay::DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms;
    }
}

impl embedded_hal_async::delay::DelayNs for CountingDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms;
    }
}
