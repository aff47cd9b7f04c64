//! Field-level protobuf reader.

use vision_proto_buffers::varint::{zigzag_decode_32, zigzag_decode_64};
use vision_proto_buffers::Reader;

use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::wire::{WireType, MIN_FIELD_NUMBER};

/// Reads tags and typed values from protobuf wire bytes.
///
/// Wraps a [`Reader`] and tracks nesting depth so that deeply nested
/// messages and groups fail with [`DecodeError::RecursionLimitExceeded`]
/// instead of exhausting the stack.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    pub reader: Reader<'a>,
    depth: u32,
    recursion_limit: u32,
}

impl<'a> BinaryReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_options(bytes, &DecodeOptions::default())
    }

    pub fn with_options(bytes: &'a [u8], options: &DecodeOptions) -> Self {
        Self {
            reader: Reader::new(bytes),
            depth: 0,
            recursion_limit: options.recursion_limit,
        }
    }

    /// `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.reader.size()
    }

    /// Current nesting depth; 0 for the top-level message.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Reads the next tag, or returns `None` at end of input.
    pub fn next_field(&mut self) -> Result<Option<(u32, WireType)>, DecodeError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.read_tag().map(Some)
    }

    /// Reads a tag and splits it into field number and wire type.
    pub fn read_tag(&mut self) -> Result<(u32, WireType), DecodeError> {
        let tag = self.reader.varint()?;
        if tag > u64::from(u32::MAX) {
            return Err(DecodeError::InvalidFieldNumber(tag >> 3));
        }
        let number = (tag >> 3) as u32;
        if number < MIN_FIELD_NUMBER {
            return Err(DecodeError::InvalidFieldNumber(u64::from(number)));
        }
        let bits = (tag & 0x07) as u8;
        let wire_type = WireType::from_u8(bits).ok_or(DecodeError::InvalidWireType(bits))?;
        Ok((number, wire_type))
    }

    #[inline]
    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        Ok(self.reader.varint()?)
    }

    /// `int32` values are varints of the sign-extended 64-bit value; the
    /// upper bits are discarded.
    pub fn read_int32(&mut self) -> Result<i32, DecodeError> {
        Ok(self.read_varint()? as i32)
    }

    pub fn read_int64(&mut self) -> Result<i64, DecodeError> {
        Ok(self.read_varint()? as i64)
    }

    pub fn read_uint32(&mut self) -> Result<u32, DecodeError> {
        Ok(self.read_varint()? as u32)
    }

    pub fn read_uint64(&mut self) -> Result<u64, DecodeError> {
        self.read_varint()
    }

    pub fn read_sint32(&mut self) -> Result<i32, DecodeError> {
        Ok(zigzag_decode_32(self.read_varint()? as u32))
    }

    pub fn read_sint64(&mut self) -> Result<i64, DecodeError> {
        Ok(zigzag_decode_64(self.read_varint()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_varint()? != 0)
    }

    pub fn read_enum(&mut self) -> Result<i32, DecodeError> {
        self.read_int32()
    }

    pub fn read_fixed32(&mut self) -> Result<u32, DecodeError> {
        Ok(self.reader.u32_le()?)
    }

    pub fn read_fixed64(&mut self) -> Result<u64, DecodeError> {
        Ok(self.reader.u64_le()?)
    }

    pub fn read_sfixed32(&mut self) -> Result<i32, DecodeError> {
        Ok(self.reader.i32_le()?)
    }

    pub fn read_sfixed64(&mut self) -> Result<i64, DecodeError> {
        Ok(self.reader.i64_le()?)
    }

    pub fn read_float(&mut self) -> Result<f32, DecodeError> {
        Ok(self.reader.f32_le()?)
    }

    pub fn read_double(&mut self) -> Result<f64, DecodeError> {
        Ok(self.reader.f64_le()?)
    }

    /// Reads a length prefix and checks it against the remaining input.
    pub fn read_length(&mut self) -> Result<usize, DecodeError> {
        let len = self.read_varint()?;
        let remaining = self.remaining();
        if len > remaining as u64 {
            return Err(DecodeError::LengthOverflow { len, remaining });
        }
        Ok(len as usize)
    }

    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let len = self.read_length()?;
        Ok(self.reader.utf8(len)?.to_owned())
    }

    pub fn read_bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        let len = self.read_length()?;
        Ok(self.reader.buf(len)?.to_vec())
    }

    /// Splits off a length-delimited region at the same depth, for packed
    /// repeated scalars.
    pub fn read_packed(&mut self) -> Result<BinaryReader<'a>, DecodeError> {
        let len = self.read_length()?;
        Ok(BinaryReader {
            reader: self.reader.cut(len)?,
            depth: self.depth,
            recursion_limit: self.recursion_limit,
        })
    }

    /// Splits off the body of a nested message one level deeper.
    pub fn read_nested(&mut self) -> Result<BinaryReader<'a>, DecodeError> {
        if self.depth >= self.recursion_limit {
            return Err(DecodeError::RecursionLimitExceeded(self.recursion_limit));
        }
        let mut nested = self.read_packed()?;
        nested.depth += 1;
        Ok(nested)
    }

    /// Skips the value of a field that is not part of the schema.
    pub fn skip_field(&mut self, number: u32, wire_type: WireType) -> Result<(), DecodeError> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::Fixed64 => self.reader.skip(8)?,
            WireType::LengthDelimited => {
                let len = self.read_length()?;
                self.reader.skip(len)?;
            }
            WireType::StartGroup => self.skip_group(number)?,
            WireType::EndGroup => return Err(DecodeError::UnexpectedEndGroup(number)),
            WireType::Fixed32 => self.reader.skip(4)?,
        }
        Ok(())
    }

    fn skip_group(&mut self, number: u32) -> Result<(), DecodeError> {
        if self.depth >= self.recursion_limit {
            return Err(DecodeError::RecursionLimitExceeded(self.recursion_limit));
        }
        self.depth += 1;
        let result = loop {
            if self.is_empty() {
                break Err(DecodeError::UnterminatedGroup(number));
            }
            let (inner, wire_type) = match self.read_tag() {
                Ok(tag) => tag,
                Err(err) => break Err(err),
            };
            if wire_type == WireType::EndGroup {
                break if inner == number {
                    Ok(())
                } else {
                    Err(DecodeError::UnexpectedEndGroup(inner))
                };
            }
            if let Err(err) = self.skip_field(inner, wire_type) {
                break Err(err);
            }
        };
        self.depth -= 1;
        result
    }
}
