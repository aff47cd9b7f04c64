//! Field-level protobuf writer.

use vision_proto_buffers::varint::{zigzag_encode_32, zigzag_encode_64};
use vision_proto_buffers::Writer;

use crate::wire::{make_tag, WireType};

/// Writes tags and typed values in protobuf wire format.
///
/// Value methods write only the value; callers emit the tag first with
/// [`BinaryWriter::write_tag`]. Writing never fails.
#[derive(Debug, Clone, Default)]
pub struct BinaryWriter {
    pub writer: Writer,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::with_capacity(capacity),
        }
    }

    /// Returns the encoded bytes and resets the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        self.writer.flush()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.writer.as_slice()
    }

    pub fn len(&self) -> usize {
        self.writer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writer.is_empty()
    }

    pub fn write_tag(&mut self, number: u32, wire_type: WireType) {
        self.writer.varint(u64::from(make_tag(number, wire_type)));
    }

    #[inline]
    pub fn write_varint(&mut self, value: u64) {
        self.writer.varint(value);
    }

    /// Negative values are sign-extended and always take ten bytes.
    pub fn write_int32(&mut self, value: i32) {
        self.writer.varint(i64::from(value) as u64);
    }

    pub fn write_int64(&mut self, value: i64) {
        self.writer.varint(value as u64);
    }

    pub fn write_uint32(&mut self, value: u32) {
        self.writer.varint(u64::from(value));
    }

    pub fn write_uint64(&mut self, value: u64) {
        self.writer.varint(value);
    }

    pub fn write_sint32(&mut self, value: i32) {
        self.writer.varint(u64::from(zigzag_encode_32(value)));
    }

    pub fn write_sint64(&mut self, value: i64) {
        self.writer.varint(zigzag_encode_64(value));
    }

    pub fn write_bool(&mut self, value: bool) {
        self.writer.u8(u8::from(value));
    }

    pub fn write_enum(&mut self, value: i32) {
        self.write_int32(value);
    }

    pub fn write_fixed32(&mut self, value: u32) {
        self.writer.u32_le(value);
    }

    pub fn write_fixed64(&mut self, value: u64) {
        self.writer.u64_le(value);
    }

    pub fn write_sfixed32(&mut self, value: i32) {
        self.writer.i32_le(value);
    }

    pub fn write_sfixed64(&mut self, value: i64) {
        self.writer.i64_le(value);
    }

    pub fn write_float(&mut self, value: f32) {
        self.writer.f32_le(value);
    }

    pub fn write_double(&mut self, value: f64) {
        self.writer.f64_le(value);
    }

    /// Length-prefixed UTF-8.
    pub fn write_string(&mut self, value: &str) {
        self.writer.varint(value.len() as u64);
        self.writer.utf8(value);
    }

    /// Length-prefixed raw bytes.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.writer.varint(value.len() as u64);
        self.writer.buf(value);
    }

    /// Tag plus length-prefixed payload.
    pub fn write_length_delimited(&mut self, number: u32, payload: &[u8]) {
        self.write_tag(number, WireType::LengthDelimited);
        self.write_bytes(payload);
    }

    /// Encodes a nested body with `f` and writes it as a length-delimited
    /// field.
    pub fn write_nested(&mut self, number: u32, f: impl FnOnce(&mut BinaryWriter)) {
        let mut nested = BinaryWriter::new();
        f(&mut nested);
        self.write_length_delimited(number, nested.as_slice());
    }
}
