//! Conversion between messages and plain JSON-shaped objects.
//!
//! The plain form is meant for debugging and interop. Every declared field
//! appears under its lowerCamelCase name (repeated fields get a `List`
//! suffix). Unset scalars show their default; unset messages and unset oneof
//! members show `null`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{Map, Number, Value};

use crate::descriptor::{FieldDescriptor, Kind, MessageDescriptor};
use crate::dynamic::DynamicMessage;
use crate::error::PlainObjectError;
use crate::value::FieldValue;

/// Key carrying the message's full type name when instances are included.
pub const TYPE_KEY: &str = "@type";

/// Converts `message` and everything it contains into a JSON object.
///
/// With `include_instance`, every object also carries [`TYPE_KEY`] naming its
/// message type. The source message is not modified.
pub fn to_plain_object(message: &DynamicMessage, include_instance: bool) -> Value {
    let mut map = Map::new();
    if include_instance {
        map.insert(TYPE_KEY.to_owned(), Value::String(message.full_name().to_owned()));
    }
    for field in message.descriptor().fields {
        let value = if field.is_repeated() {
            Value::Array(
                message
                    .get_repeated_field(field.number)
                    .iter()
                    .map(|item| value_to_plain(item, include_instance))
                    .collect(),
            )
        } else {
            match message.get_field(field.number) {
                Some(value) => value_to_plain(value, include_instance),
                None if field.oneof.is_some() => Value::Null,
                None => field
                    .kind
                    .default_value()
                    .map(|v| value_to_plain(&v, include_instance))
                    .unwrap_or(Value::Null),
            }
        };
        map.insert(field.plain_key(), value);
    }
    Value::Object(map)
}

fn value_to_plain(value: &FieldValue, include_instance: bool) -> Value {
    match value {
        FieldValue::Bool(v) => Value::Bool(*v),
        FieldValue::Int32(v) | FieldValue::Enum(v) => Value::from(*v),
        FieldValue::Int64(v) => Value::from(*v),
        FieldValue::Uint32(v) => Value::from(*v),
        FieldValue::Uint64(v) => Value::from(*v),
        FieldValue::Float(v) => float_to_plain(f64::from(*v)),
        FieldValue::Double(v) => float_to_plain(*v),
        FieldValue::String(v) => Value::String(v.clone()),
        FieldValue::Bytes(v) => Value::String(STANDARD.encode(v)),
        FieldValue::Message(m) => to_plain_object(m, include_instance),
        FieldValue::List(items) => Value::Array(
            items
                .iter()
                .map(|item| value_to_plain(item, include_instance))
                .collect(),
        ),
    }
}

fn float_to_plain(v: f64) -> Value {
    if v.is_nan() {
        Value::String("NaN".to_owned())
    } else if v == f64::INFINITY {
        Value::String("Infinity".to_owned())
    } else if v == f64::NEG_INFINITY {
        Value::String("-Infinity".to_owned())
    } else {
        Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Builds a message of type `descriptor` from its plain form.
///
/// Keys may be the plain key, the lowerCamelCase name or the schema name.
/// `null` leaves a field unset. Any other value for a oneof member selects
/// that member, its default included.
pub fn from_plain_object(
    descriptor: &'static MessageDescriptor,
    value: &Value,
) -> Result<DynamicMessage, PlainObjectError> {
    let Value::Object(map) = value else {
        return Err(PlainObjectError::NotAnObject(descriptor.full_name));
    };
    let mut message = DynamicMessage::new(descriptor);
    for (key, item) in map {
        if key == TYPE_KEY {
            continue;
        }
        let field = descriptor
            .field_by_name(key)
            .ok_or_else(|| PlainObjectError::UnknownKey {
                message: descriptor.full_name,
                key: key.clone(),
            })?;
        if item.is_null() {
            continue;
        }
        if field.is_repeated() {
            let Value::Array(items) = item else {
                return Err(PlainObjectError::InvalidValue {
                    field: field.name,
                    expected: "array",
                });
            };
            let values = items
                .iter()
                .map(|item| plain_to_value(field, item))
                .collect::<Result<Vec<_>, _>>()?;
            message.put_repeated_field(field.number, values);
        } else {
            message.put_field(field.number, plain_to_value(field, item)?);
        }
    }
    Ok(message)
}

fn plain_to_value(field: &FieldDescriptor, item: &Value) -> Result<FieldValue, PlainObjectError> {
    let invalid = |expected: &'static str| PlainObjectError::InvalidValue {
        field: field.name,
        expected,
    };
    let out_of_range = || PlainObjectError::OutOfRange { field: field.name };
    Ok(match field.kind {
        Kind::Bool => FieldValue::Bool(item.as_bool().ok_or_else(|| invalid("a boolean"))?),
        Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => {
            let v = plain_i64(item).ok_or_else(|| invalid("an integer"))?;
            FieldValue::Int32(i32::try_from(v).map_err(|_| out_of_range())?)
        }
        Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => {
            FieldValue::Int64(plain_i64(item).ok_or_else(|| invalid("an integer"))?)
        }
        Kind::Uint32 | Kind::Fixed32 => {
            let v = plain_u64(item).ok_or_else(|| invalid("an unsigned integer"))?;
            FieldValue::Uint32(u32::try_from(v).map_err(|_| out_of_range())?)
        }
        Kind::Uint64 | Kind::Fixed64 => {
            FieldValue::Uint64(plain_u64(item).ok_or_else(|| invalid("an unsigned integer"))?)
        }
        Kind::Float => {
            let v = plain_f64(item).ok_or_else(|| invalid("a number"))?;
            let narrowed = v as f32;
            if v.is_finite() && !narrowed.is_finite() {
                return Err(out_of_range());
            }
            FieldValue::Float(narrowed)
        }
        Kind::Double => FieldValue::Double(plain_f64(item).ok_or_else(|| invalid("a number"))?),
        Kind::String => FieldValue::String(
            item.as_str()
                .ok_or_else(|| invalid("a string"))?
                .to_owned(),
        ),
        Kind::Bytes => {
            let text = item.as_str().ok_or_else(|| invalid("a base64 string"))?;
            let bytes = STANDARD
                .decode(text)
                .map_err(|_| PlainObjectError::InvalidBase64 { field: field.name })?;
            FieldValue::Bytes(bytes)
        }
        Kind::Enum(descriptor) => {
            let number = match item {
                Value::String(name) => descriptor.value_number(name),
                other => plain_i64(other).and_then(|v| i32::try_from(v).ok()),
            };
            FieldValue::Enum(number.ok_or_else(|| invalid("an enum number or name"))?)
        }
        Kind::Message(descriptor) => FieldValue::Message(from_plain_object(descriptor(), item)?),
    })
}

fn plain_i64(item: &Value) -> Option<i64> {
    match item {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn plain_u64(item: &Value) -> Option<u64> {
    match item {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn plain_f64(item: &Value) -> Option<f64> {
    match item {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => match s.as_str() {
            "NaN" => Some(f64::NAN),
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            other => other.parse().ok(),
        },
        _ => None,
    }
}
