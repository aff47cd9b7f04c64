//! Typed message wrappers.
//!
//! Each schema message gets a newtype around [`DynamicMessage`] bound to its
//! descriptor. The wrappers add typed accessors; encoding, decoding and
//! plain-object conversion all go through the dynamic core.

use std::fmt;

use crate::descriptor::MessageDescriptor;
use crate::dynamic::DynamicMessage;
use crate::error::{DecodeError, PlainObjectError};
use crate::options::DecodeOptions;
use crate::reader::BinaryReader;
use crate::writer::BinaryWriter;

/// A statically typed message.
///
/// Implementations are produced by [`message!`](crate::message!); only the
/// required methods differ between types.
pub trait Message: Clone + PartialEq + fmt::Debug + Default {
    /// Schema of this message type.
    fn descriptor() -> &'static MessageDescriptor;

    fn as_dynamic(&self) -> &DynamicMessage;

    fn as_dynamic_mut(&mut self) -> &mut DynamicMessage;

    /// Wraps a dynamic instance. The instance must have been built from
    /// [`Message::descriptor`].
    fn from_dynamic(message: DynamicMessage) -> Self;

    fn into_dynamic(self) -> DynamicMessage;

    fn full_name() -> &'static str {
        Self::descriptor().full_name
    }

    /// Unsets every field.
    fn clear(&mut self) {
        self.as_dynamic_mut().clear();
    }

    fn serialize_binary_to_writer(&self, writer: &mut BinaryWriter) {
        self.as_dynamic().serialize_binary_to_writer(writer);
    }

    fn encode_to_vec(&self) -> Vec<u8> {
        self.as_dynamic().encode_to_vec()
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        DynamicMessage::decode(Self::descriptor(), bytes).map(Self::from_dynamic)
    }

    fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Self, DecodeError> {
        DynamicMessage::decode_with(Self::descriptor(), bytes, options).map(Self::from_dynamic)
    }

    fn deserialize_binary_from_reader(reader: &mut BinaryReader<'_>) -> Result<Self, DecodeError> {
        DynamicMessage::deserialize_binary_from_reader(Self::descriptor(), reader)
            .map(Self::from_dynamic)
    }

    fn merge_from_bytes(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.as_dynamic_mut().merge_from_bytes(bytes)
    }

    fn to_plain_object(&self, include_instance: bool) -> serde_json::Value {
        self.as_dynamic().to_plain_object(include_instance)
    }

    fn from_plain_object(value: &serde_json::Value) -> Result<Self, PlainObjectError> {
        DynamicMessage::from_plain_object(Self::descriptor(), value).map(Self::from_dynamic)
    }
}

/// Declares a typed wrapper around [`DynamicMessage`](crate::DynamicMessage)
/// for the descriptor static named after `=>`.
///
/// The generated struct keeps the dynamic instance in a private `inner`
/// field, so accessors must be written in the declaring module.
///
/// ```
/// use vision_proto_runtime::{message, FieldDescriptor, FieldValue, Kind, Message, MessageDescriptor};
///
/// static KEY_VALUE: MessageDescriptor = MessageDescriptor {
///     full_name: "demo.KeyValue",
///     fields: &[
///         FieldDescriptor::singular(1, "key", Kind::String),
///         FieldDescriptor::singular(2, "value", Kind::String),
///     ],
///     oneofs: &[],
/// };
///
/// message! {
///     /// A label.
///     pub struct KeyValue => KEY_VALUE
/// }
///
/// impl KeyValue {
///     pub fn key(&self) -> &str {
///         self.inner.get_str(1)
///     }
///
///     pub fn set_key(&mut self, key: &str) -> &mut Self {
///         self.inner.put_field(1, FieldValue::from(key));
///         self
///     }
/// }
///
/// let mut kv = KeyValue::new();
/// kv.set_key("color");
/// let decoded = KeyValue::decode(&kv.encode_to_vec()).unwrap();
/// assert_eq!(decoded.key(), "color");
/// ```
#[macro_export]
macro_rules! message {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $descriptor:path) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq)]
        $vis struct $name {
            inner: $crate::DynamicMessage,
        }

        impl $name {
            /// Creates an instance with every field unset.
            pub fn new() -> Self {
                Self {
                    inner: $crate::DynamicMessage::new(&$descriptor),
                }
            }

            pub fn descriptor() -> &'static $crate::MessageDescriptor {
                &$descriptor
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.inner, f)
            }
        }

        impl $crate::Message for $name {
            fn descriptor() -> &'static $crate::MessageDescriptor {
                &$descriptor
            }

            fn as_dynamic(&self) -> &$crate::DynamicMessage {
                &self.inner
            }

            fn as_dynamic_mut(&mut self) -> &mut $crate::DynamicMessage {
                &mut self.inner
            }

            fn from_dynamic(message: $crate::DynamicMessage) -> Self {
                let expected: &'static $crate::MessageDescriptor = &$descriptor;
                debug_assert_eq!(message.full_name(), expected.full_name);
                Self { inner: message }
            }

            fn into_dynamic(self) -> $crate::DynamicMessage {
                self.inner
            }
        }

        impl ::std::convert::From<$name> for $crate::DynamicMessage {
            fn from(message: $name) -> Self {
                message.inner
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, Kind};
    use crate::value::FieldValue;

    static LABEL: MessageDescriptor = MessageDescriptor {
        full_name: "test.Label",
        fields: &[
            FieldDescriptor::singular(1, "text", Kind::String),
            FieldDescriptor::singular(2, "weight", Kind::Uint64),
        ],
        oneofs: &[],
    };

    message! {
        struct Label => LABEL
    }

    impl Label {
        fn text(&self) -> &str {
            self.inner.get_str(1)
        }

        fn set_text(&mut self, text: &str) -> &mut Self {
            self.inner.put_field(1, FieldValue::from(text));
            self
        }
    }

    #[test]
    fn wrapper_delegates_to_dynamic() {
        let mut label = Label::new();
        label.set_text("sale");
        assert_eq!(Label::full_name(), "test.Label");
        assert_eq!(label.encode_to_vec(), vec![0x0a, 0x04, b's', b'a', b'l', b'e']);

        let decoded = Label::decode(&label.encode_to_vec()).unwrap();
        assert_eq!(decoded, label);
        assert_eq!(decoded.text(), "sale");
        assert_eq!(format!("{decoded:?}"), format!("{:?}", label.as_dynamic()));

        label.clear();
        assert_eq!(label, Label::default());
    }

    #[test]
    fn wrapper_plain_object() {
        let mut label = Label::new();
        label.set_text("a").as_dynamic_mut().put_field(2, FieldValue::Uint64(3));
        let plain = label.to_plain_object(false);
        assert_eq!(plain, serde_json::json!({"text": "a", "weight": 3}));
        assert_eq!(Label::from_plain_object(&plain).unwrap(), label);
    }
}
