//! Auto-growing binary writer.

use crate::varint;

/// A binary buffer writer backed by a growable `Vec<u8>`.
///
/// Fixed-width scalars are written little-endian, as the protobuf wire
/// format requires. [`Writer::flush`] hands out the accumulated bytes and
/// leaves the writer empty for reuse.
///
/// # Example
///
/// ```
/// use vision_proto_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x08);
/// writer.varint(150);
/// assert_eq!(writer.flush(), vec![0x08, 0x96, 0x01]);
/// assert!(writer.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    /// The accumulated output.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates a new empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates a writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Discards any written bytes, keeping the allocation.
    pub fn reset(&mut self) {
        self.uint8.clear();
    }

    /// Returns the written bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Borrows the written bytes without resetting.
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32_le(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a signed 32-bit integer (little-endian).
    #[inline]
    pub fn i32_le(&mut self, val: i32) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64_le(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a signed 64-bit integer (little-endian).
    #[inline]
    pub fn i64_le(&mut self, val: i64) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a 32-bit floating point number (little-endian).
    #[inline]
    pub fn f32_le(&mut self, val: f32) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a 64-bit floating point number (little-endian).
    #[inline]
    pub fn f64_le(&mut self, val: f64) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes a base-128 varint.
    #[inline]
    pub fn varint(&mut self, val: u64) {
        varint::write_varint(self, val);
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, data: &[u8]) {
        self.uint8.extend_from_slice(data);
    }

    /// Writes the UTF-8 bytes of a string, without a length prefix.
    pub fn utf8(&mut self, s: &str) {
        self.uint8.extend_from_slice(s.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_little_endian() {
        let mut w = Writer::new();
        w.u32_le(0x01020304);
        w.u64_le(1);
        assert_eq!(
            w.flush(),
            vec![0x04, 0x03, 0x02, 0x01, 1, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_flush_resets() {
        let mut w = Writer::with_capacity(4);
        w.utf8("ab");
        assert_eq!(w.len(), 2);
        assert_eq!(w.flush(), b"ab".to_vec());
        assert!(w.is_empty());
        w.u8(7);
        assert_eq!(w.as_slice(), &[7]);
    }
}
