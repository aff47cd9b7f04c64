//! `google.rpc.Status` and the canonical status codes.

use std::fmt;

use vision_proto_runtime::{message, FieldDescriptor, Kind, MessageDescriptor};

use crate::protobuf::Any;

pub(crate) static STATUS: MessageDescriptor = MessageDescriptor {
    full_name: "google.rpc.Status",
    fields: &[
        FieldDescriptor::singular(1, "code", Kind::Int32),
        FieldDescriptor::singular(2, "message", Kind::String),
        FieldDescriptor::repeated(3, "details", Kind::Message(Any::descriptor)),
    ],
    oneofs: &[],
};

/// Canonical error codes carried in [`Status::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum Code {
    #[default]
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl Code {
    pub fn from_i32(value: i32) -> Option<Self> {
        Some(match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => return None,
        })
    }
}

message! {
    /// Error model of RPC responses and long-running operations.
    pub struct Status => STATUS
}

impl Status {
    scalar_field!(1, code, set_code, i32);
    string_field!(2, message, set_message);
    repeated_message_field!(3, details, set_details, add_details, Any);

    pub fn with_code(code: Code, message: impl Into<String>) -> Self {
        let mut status = Self::new();
        status.set_code(code as i32).set_message(message);
        status
    }

    /// The code as a [`Code`]; unrecognized numbers map to `Unknown`.
    pub fn code_kind(&self) -> Code {
        Code::from_i32(self.code()).unwrap_or(Code::Unknown)
    }

    pub fn is_ok(&self) -> bool {
        self.code() == Code::Ok as i32
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {:?}: {}", self.code_kind(), self.message())
    }
}

impl std::error::Error for Status {}
