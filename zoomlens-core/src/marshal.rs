//! Byte-order marshaling
//!
//! The controller keeps its registers big-endian, but an SMBus word transfer
//! puts the low byte on the wire first. Every value that goes through the
//! word path therefore has its bytes exchanged once, here, and the rest of
//! the driver works with plain register values.

/// Convert a register value to the SMBus word that carries it (and back)
#[inline]
pub const fn swap_word(value: u16) -> u16 {
    value.swap_bytes()
}

/// Convert a requested value to an unsigned register value
///
/// Negative requests become 0 and oversize requests saturate. Option
/// setters clamp to the option range first; this is the last stop before
/// the bus.
#[inline]
pub fn to_wire(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

/// Decode big-endian byte pairs into words
///
/// Decodes `min(bytes.len() / 2, out.len())` words and returns the count.
/// A trailing odd byte is ignored.
pub fn decode_be_words(bytes: &[u8], out: &mut [u16]) -> usize {
    let mut count = 0;
    for (word, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
        *word = u16::from_be_bytes([pair[0], pair[1]]);
        count += 1;
    }
    count
}
