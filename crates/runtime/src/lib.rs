//! Protocol-buffer message runtime.
//!
//! Messages are described by `'static` descriptor tables and stored as
//! [`DynamicMessage`] field maps. Typed bindings wrap a dynamic instance with
//! [`message!`] and add accessors on top.
//!
//! # Overview
//!
//! - [`descriptor`] - Static message, field, oneof and enum descriptors
//! - [`DynamicMessage`] - Field storage with proto3 presence and oneof rules
//! - [`BinaryReader`] / [`BinaryWriter`] - Field-level wire reader and writer
//! - [`codec`] - Descriptor-driven encode and merge-decode
//! - [`plain`] - Conversion to and from plain JSON objects
//! - [`TypeRegistry`] - Lookup of message types by full name or type URL
//!
//! # Example
//!
//! ```
//! use vision_proto_runtime::{DynamicMessage, FieldDescriptor, Kind, MessageDescriptor};
//!
//! static VERTEX: MessageDescriptor = MessageDescriptor {
//!     full_name: "demo.Vertex",
//!     fields: &[
//!         FieldDescriptor::singular(1, "x", Kind::Int32),
//!         FieldDescriptor::singular(2, "y", Kind::Int32),
//!     ],
//!     oneofs: &[],
//! };
//!
//! let mut vertex = DynamicMessage::new(&VERTEX);
//! vertex.set_field(1, 3).unwrap().set_field(2, -1).unwrap();
//!
//! let bytes = vertex.encode_to_vec();
//! assert_eq!(&bytes[..2], &[0x08, 0x03]);
//!
//! let plain = DynamicMessage::decode(&VERTEX, &bytes).unwrap().to_plain_object(false);
//! assert_eq!(plain, serde_json::json!({"x": 3, "y": -1}));
//! ```

pub mod codec;
pub mod descriptor;
mod dynamic;
mod error;
mod message;
mod options;
pub mod plain;
mod reader;
mod registry;
mod value;
pub mod wire;
mod writer;

pub use codec::{encode_message, merge_message};
pub use descriptor::{
    Cardinality, EnumDescriptor, EnumValue, FieldDescriptor, Kind, MessageDescriptor,
    OneofDescriptor,
};
pub use dynamic::DynamicMessage;
pub use error::{DecodeError, FieldError, PlainObjectError};
pub use message::Message;
pub use options::{DecodeOptions, DEFAULT_MAX_MESSAGE_SIZE, DEFAULT_RECURSION_LIMIT};
pub use reader::BinaryReader;
pub use registry::{TypeRegistry, TypeRegistryBuilder, TYPE_URL_PREFIX};
pub use value::{FieldValue, Scalar};
pub use wire::WireType;
pub use writer::BinaryWriter;
pub use vision_proto_buffers::BufferError;
