//! Binary buffer utilities for the protobuf wire runtime.
//!
//! This crate holds the byte-level half of the codec: a bounds-checked
//! cursor over a borrowed slice, an auto-growing output buffer, and the
//! base-128 varint / zig-zag primitives every protobuf scalar is built from.
//!
//! # Overview
//!
//! - [`Reader`] - Reads little-endian scalars and varints from a byte slice with cursor tracking
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`varint`] - Varint sizing and zig-zag mapping helpers
//!
//! # Example
//!
//! ```
//! use vision_proto_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.varint(300);
//! writer.u32_le(0x0403_0201);
//! writer.utf8("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.varint().unwrap(), 300);
//! assert_eq!(reader.u32_le().unwrap(), 0x0403_0201);
//! assert_eq!(reader.utf8(5).unwrap(), "hello");
//! assert!(reader.is_empty());
//! ```

mod reader;
pub mod varint;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
    /// Varint longer than ten bytes, or a tenth byte carrying more than one bit.
    VarintOverflow,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
            BufferError::VarintOverflow => write!(f, "varint overflows 64 bits"),
        }
    }
}

impl std::error::Error for BufferError {}
