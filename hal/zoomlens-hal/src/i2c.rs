//! SMBus transport abstractions
//!
//! Provides the register-level transfer primitives the lens controller
//! needs. Implementations own the bus handle; the driver never touches the
//! raw I2C interface.
//!
//! # Byte order
//!
//! Word transfers follow SMBus convention: the first byte on the wire is the
//! low byte. Block transfers carry 16-bit values big-endian. Drivers that
//! talk to big-endian register maps must swap single words themselves.

/// Blocking SMBus transport
///
/// Every method addresses a 7-bit chip address and an 8-bit register
/// (command code). Errors are fatal to the transfer in flight and are
/// returned as-is; implementations must not retry.
pub trait SmbusTransport {
    /// Error type for bus operations
    type Error;

    /// Read a raw SMBus word (low byte first on the wire)
    fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;

    /// Write a raw SMBus word (low byte first on the wire)
    fn write_word(&mut self, address: u8, register: u8, value: u16) -> Result<(), Self::Error>;

    /// Write a block of 16-bit values, each as two big-endian bytes
    fn write_block(&mut self, address: u8, register: u8, words: &[u16])
        -> Result<(), Self::Error>;

    /// Read `buf.len()` raw bytes starting at `register`
    fn read_block(&mut self, address: u8, register: u8, buf: &mut [u8])
        -> Result<(), Self::Error>;

    /// Write two big-endian 16-bit values as a single 4-byte block
    fn write_block4(
        &mut self,
        address: u8,
        register: u8,
        first: u16,
        second: u16,
    ) -> Result<(), Self::Error> {
        self.write_block(address, register, &[first, second])
    }
}

/// Async SMBus transport
///
/// Same contract as [`SmbusTransport`] for buses driven by an async
/// executor.
#[allow(async_fn_in_trait)]
pub trait AsyncSmbusTransport {
    /// Error type for bus operations
    type Error;

    /// Read a raw SMBus word (low byte first on the wire)
    async fn read_word(&mut self, address: u8, register: u8) -> Result<u16, Self::Error>;

    /// Write a raw SMBus word (low byte first on the wire)
    async fn write_word(
        &mut self,
        address: u8,
        register: u8,
        value: u16,
    ) -> Result<(), Self::Error>;

    /// Write a block of 16-bit values, each as two big-endian bytes
    async fn write_block(
        &mut self,
        address: u8,
        register: u8,
        words: &[u16],
    ) -> Result<(), Self::Error>;

    /// Read `buf.len()` raw bytes starting at `register`
    async fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Write two big-endian 16-bit values as a single 4-byte block
    async fn write_block4(
        &mut self,
        address: u8,
        register: u8,
        first: u16,
        second: u16,
    ) -> Result<(), Self::Error> {
        self.write_block(address, register, &[first, second]).await
    }
}
