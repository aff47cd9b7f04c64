//! Bounds-checked binary reader with cursor tracking.

use std::str;

use crate::varint;
use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position and an exclusive end bound. Every
/// read checks the remaining length first and fails with
/// [`BufferError::EndOfBuffer`] instead of panicking, so a truncated wire
/// payload surfaces as an error to the decoder.
///
/// # Example
///
/// ```
/// use vision_proto_buffers::Reader;
///
/// let data = [0x96, 0x01, 0x2a];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.varint().unwrap(), 150);
/// assert_eq!(reader.u8().unwrap(), 0x2a);
/// assert!(reader.u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader from a slice with custom start and end positions.
    ///
    /// `end` is clamped to the slice length and `x` to `end`.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        Self {
            uint8,
            x: x.min(end),
            end,
        }
    }

    /// Resets the reader with a new byte slice.
    pub fn reset(&mut self, uint8: &'a [u8]) {
        self.x = 0;
        self.end = uint8.len();
        self.uint8 = uint8;
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Returns `true` when the cursor has reached the end bound.
    pub fn is_empty(&self) -> bool {
        self.x >= self.end
    }

    fn ensure(&self, n: usize) -> Result<(), BufferError> {
        if n > self.size() {
            return Err(BufferError::EndOfBuffer);
        }
        Ok(())
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        Ok(self.uint8[self.x])
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.ensure(length)?;
        self.x += length;
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let x = self.x;
        let end = x + size;
        self.x = end;
        Ok(&self.uint8[x..end])
    }

    /// Creates a new Reader over the next `size` bytes and advances the cursor
    /// past them.
    pub fn cut(&mut self, size: usize) -> Result<Reader<'a>, BufferError> {
        self.ensure(size)?;
        let slice = Reader::from_slice(self.uint8, self.x, self.x + size);
        self.x += size;
        Ok(slice)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    #[inline]
    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.uint8[self.x..self.x + N]);
        self.x += N;
        Ok(out)
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32_le(&mut self) -> Result<u32, BufferError> {
        self.array::<4>().map(u32::from_le_bytes)
    }

    /// Reads a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32_le(&mut self) -> Result<i32, BufferError> {
        self.array::<4>().map(i32::from_le_bytes)
    }

    /// Reads an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64_le(&mut self) -> Result<u64, BufferError> {
        self.array::<8>().map(u64::from_le_bytes)
    }

    /// Reads a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64_le(&mut self) -> Result<i64, BufferError> {
        self.array::<8>().map(i64::from_le_bytes)
    }

    /// Reads a 32-bit floating point number (little-endian).
    #[inline]
    pub fn f32_le(&mut self) -> Result<f32, BufferError> {
        self.array::<4>().map(f32::from_le_bytes)
    }

    /// Reads a 64-bit floating point number (little-endian).
    #[inline]
    pub fn f64_le(&mut self) -> Result<f64, BufferError> {
        self.array::<8>().map(f64::from_le_bytes)
    }

    /// Reads a base-128 varint of up to ten bytes.
    #[inline]
    pub fn varint(&mut self) -> Result<u64, BufferError> {
        varint::read_varint(self)
    }

    /// Reads a UTF-8 string of the given size.
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        let bytes = self.buf(size)?;
        str::from_utf8(bytes).map_err(|_| BufferError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8(), Ok(0x01));
        assert_eq!(reader.u8(), Ok(0x02));
        assert_eq!(reader.u8(), Ok(0x03));
        assert_eq!(reader.u8(), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_u32_le() {
        let data = [0x04, 0x03, 0x02, 0x01];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32_le(), Ok(0x01020304));
    }

    #[test]
    fn test_truncated_fixed_does_not_advance() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u32_le(), Err(BufferError::EndOfBuffer));
        assert_eq!(reader.x, 0);
    }

    #[test]
    fn test_skip() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = Reader::new(&data);
        reader.skip(2).unwrap();
        assert_eq!(reader.u8(), Ok(0x03));
        assert_eq!(reader.skip(2), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_cut() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut reader = Reader::new(&data);
        reader.skip(1).unwrap();
        let mut inner = reader.cut(2).unwrap();
        assert_eq!(inner.u8(), Ok(0x02));
        assert_eq!(inner.u8(), Ok(0x03));
        assert!(inner.is_empty());
        assert_eq!(reader.u8(), Ok(0x04));
    }

    #[test]
    fn test_utf8() {
        let data = b"hello world";
        let mut reader = Reader::new(data);
        assert_eq!(reader.utf8(5), Ok("hello"));
        assert_eq!(reader.utf8(6), Ok(" world"));
    }

    #[test]
    fn test_invalid_utf8() {
        let data = [0xff, 0xfe];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.utf8(2), Err(BufferError::InvalidUtf8));
    }
}
