//! Error types of the message runtime.

use thiserror::Error;
use vision_proto_buffers::BufferError;

use crate::wire::WireType;

/// Failure while decoding wire bytes. Fatal to the decode call that raised it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed input: {0}")]
    Buffer(#[from] BufferError),
    #[error("invalid field number {0}")]
    InvalidFieldNumber(u64),
    #[error("invalid wire type {0}")]
    InvalidWireType(u8),
    #[error("field {number} of {message}: expected {expected} wire type, found {actual}")]
    WireTypeMismatch {
        message: &'static str,
        number: u32,
        expected: WireType,
        actual: WireType,
    },
    #[error("unexpected end group for field {0}")]
    UnexpectedEndGroup(u32),
    #[error("unterminated group for field {0}")]
    UnterminatedGroup(u32),
    #[error("length prefix {len} exceeds remaining {remaining} bytes")]
    LengthOverflow { len: u64, remaining: usize },
    #[error("recursion limit of {0} exceeded")]
    RecursionLimitExceeded(u32),
    #[error("message of {size} bytes exceeds limit of {max}")]
    MessageTooLarge { size: usize, max: usize },
    #[error("unknown message type `{0}`")]
    UnknownType(String),
}

/// Misuse of the checked field mutators on [`DynamicMessage`](crate::DynamicMessage).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{message} has no field {number}")]
    UnknownField { message: &'static str, number: u32 },
    #[error("field `{field}` of {message} expects {expected}")]
    KindMismatch {
        message: &'static str,
        field: &'static str,
        expected: &'static str,
    },
    #[error("field `{field}` of {message} is repeated")]
    Repeated {
        message: &'static str,
        field: &'static str,
    },
    #[error("field `{field}` of {message} is not repeated")]
    NotRepeated {
        message: &'static str,
        field: &'static str,
    },
}

/// Failure while building a message from its plain-object form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlainObjectError {
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),
    #[error("{message} has no field `{key}`")]
    UnknownKey { message: &'static str, key: String },
    #[error("field `{field}` expects {expected}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field `{field}` holds invalid base64")]
    InvalidBase64 { field: &'static str },
    #[error("field `{field}` is out of range")]
    OutOfRange { field: &'static str },
}
