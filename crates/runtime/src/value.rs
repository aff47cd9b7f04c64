//! Tagged field values.

use crate::dynamic::DynamicMessage;

/// A value stored under one field number.
///
/// Integer variants follow the in-memory type rather than the wire encoding:
/// `int32`, `sint32` and `sfixed32` fields all hold [`FieldValue::Int32`].
/// Repeated fields hold a [`FieldValue::List`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Uint32(u32),
    Uint64(u64),
    Float(f32),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    Enum(i32),
    Message(DynamicMessage),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Int32(_) => "int32",
            FieldValue::Int64(_) => "int64",
            FieldValue::Uint32(_) => "uint32",
            FieldValue::Uint64(_) => "uint64",
            FieldValue::Float(_) => "float",
            FieldValue::Double(_) => "double",
            FieldValue::String(_) => "string",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Enum(_) => "enum",
            FieldValue::Message(_) => "message",
            FieldValue::List(_) => "list",
        }
    }

    /// `true` for the proto3 zero value of a scalar and for an empty list.
    /// Messages are never default: a present message is always written.
    pub fn is_default(&self) -> bool {
        match self {
            FieldValue::Bool(v) => !*v,
            FieldValue::Int32(v) | FieldValue::Enum(v) => *v == 0,
            FieldValue::Int64(v) => *v == 0,
            FieldValue::Uint32(v) => *v == 0,
            FieldValue::Uint64(v) => *v == 0,
            FieldValue::Float(v) => *v == 0.0,
            FieldValue::Double(v) => *v == 0.0,
            FieldValue::String(v) => v.is_empty(),
            FieldValue::Bytes(v) => v.is_empty(),
            FieldValue::Message(_) => false,
            FieldValue::List(v) => v.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_message(&self) -> Option<&DynamicMessage> {
        match self {
            FieldValue::Message(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Conversion between Rust scalar types and [`FieldValue`], used by the
/// typed accessors of generated messages.
pub trait Scalar: Sized {
    fn from_field_value(value: &FieldValue) -> Option<Self>;
    fn into_field_value(self) -> FieldValue;
}

macro_rules! scalar_impl {
    ($ty:ty, $variant:ident) => {
        impl Scalar for $ty {
            fn from_field_value(value: &FieldValue) -> Option<Self> {
                match value {
                    FieldValue::$variant(v) => Some(v.clone()),
                    _ => None,
                }
            }

            fn into_field_value(self) -> FieldValue {
                FieldValue::$variant(self)
            }
        }

        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::$variant(value)
            }
        }
    };
}

scalar_impl!(bool, Bool);
scalar_impl!(i64, Int64);
scalar_impl!(u32, Uint32);
scalar_impl!(u64, Uint64);
scalar_impl!(f32, Float);
scalar_impl!(f64, Double);
scalar_impl!(String, String);
scalar_impl!(Vec<u8>, Bytes);

// Enum fields store their number; reading one as i32 is allowed.
impl Scalar for i32 {
    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int32(v) | FieldValue::Enum(v) => Some(*v),
            _ => None,
        }
    }

    fn into_field_value(self) -> FieldValue {
        FieldValue::Int32(self)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int32(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_owned())
    }
}

impl From<&[u8]> for FieldValue {
    fn from(value: &[u8]) -> Self {
        FieldValue::Bytes(value.to_vec())
    }
}

impl From<DynamicMessage> for FieldValue {
    fn from(value: DynamicMessage) -> Self {
        FieldValue::Message(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(value: Vec<FieldValue>) -> Self {
        FieldValue::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert!(FieldValue::Int32(0).is_default());
        assert!(FieldValue::Bool(false).is_default());
        assert!(FieldValue::String(String::new()).is_default());
        assert!(FieldValue::Float(-0.0).is_default());
        assert!(FieldValue::List(vec![]).is_default());
        assert!(!FieldValue::Enum(2).is_default());
        assert!(!FieldValue::Bytes(vec![0]).is_default());
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(i32::from_field_value(&FieldValue::Enum(3)), Some(3));
        assert_eq!(i64::from_field_value(&FieldValue::Int32(3)), None);
        assert_eq!(
            String::from_field_value(&FieldValue::from("x")),
            Some("x".to_owned())
        );
        assert_eq!(7u64.into_field_value(), FieldValue::Uint64(7));
        assert_eq!(FieldValue::from(&b"ab"[..]), FieldValue::Bytes(vec![b'a', b'b']));
    }
}
