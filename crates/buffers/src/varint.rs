//! Variable-length integer encoding.
//!
//! Protobuf varints store an unsigned 64-bit value in little-endian groups of
//! seven bits; the high bit of every byte is a continuation flag. Values
//! 0..=127 take one byte and `u64::MAX` takes ten.
//!
//! Signed types declared `sint32`/`sint64` are mapped through ZigZag first so
//! that small negative numbers stay short: 0 → 0, -1 → 1, 1 → 2, -2 → 3.

use crate::{BufferError, Reader, Writer};

/// Longest legal varint, in bytes.
pub const MAX_VARINT_LEN: usize = 10;

/// Appends `value` to `writer` as a varint.
pub fn write_varint(writer: &mut Writer, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            writer.u8(byte);
            break;
        }
        writer.u8(byte | 0x80);
    }
}

/// Reads one varint from `reader`.
///
/// Fails with [`BufferError::EndOfBuffer`] when the input ends before a byte
/// without the continuation bit, and with [`BufferError::VarintOverflow`] when
/// the encoding does not fit in 64 bits.
pub fn read_varint(reader: &mut Reader<'_>) -> Result<u64, BufferError> {
    let mut value: u64 = 0;
    for i in 0..MAX_VARINT_LEN {
        let byte = reader.u8()?;
        if i == MAX_VARINT_LEN - 1 && byte > 0x01 {
            return Err(BufferError::VarintOverflow);
        }
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(BufferError::VarintOverflow)
}

/// Number of bytes `value` occupies as a varint.
pub fn varint_size(value: u64) -> usize {
    // ((bits - 1) / 7) + 1, with 0 needing one byte
    let bits = 64 - (value | 1).leading_zeros() as usize;
    (bits + 6) / 7
}

#[inline]
pub fn zigzag_encode_32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

#[inline]
pub fn zigzag_decode_32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

#[inline]
pub fn zigzag_encode_64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline]
pub fn zigzag_decode_64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}
