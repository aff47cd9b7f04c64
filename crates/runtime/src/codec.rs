//! Descriptor-driven binary encoding and decoding.

use tracing::{trace, warn};

use crate::descriptor::{FieldDescriptor, Kind};
use crate::dynamic::DynamicMessage;
use crate::error::DecodeError;
use crate::reader::BinaryReader;
use crate::value::FieldValue;
use crate::wire::WireType;
use crate::writer::BinaryWriter;

/// Writes every set field of `message` in ascending field-number order.
///
/// Singular proto3 scalars at their default are skipped, oneof members and
/// present messages are always written, and repeated numeric fields are
/// packed.
pub fn encode_message(message: &DynamicMessage, writer: &mut BinaryWriter) {
    for (field, value) in message.iter() {
        encode_field(field, value, writer);
    }
}

fn encode_field(field: &FieldDescriptor, value: &FieldValue, writer: &mut BinaryWriter) {
    match value {
        FieldValue::List(items) => {
            if items.is_empty() {
                return;
            }
            if field.kind.is_packable() {
                let mut packed = BinaryWriter::new();
                for item in items.iter().filter(|v| accepted(field, v)) {
                    encode_value(field.kind, item, &mut packed);
                }
                writer.write_length_delimited(field.number, packed.as_slice());
            } else {
                for item in items.iter().filter(|v| accepted(field, v)) {
                    encode_tagged(field, item, writer);
                }
            }
        }
        value => {
            if !accepted(field, value) {
                return;
            }
            if field.oneof.is_none() && value.is_default() {
                return;
            }
            encode_tagged(field, value, writer);
        }
    }
}

fn encode_tagged(field: &FieldDescriptor, value: &FieldValue, writer: &mut BinaryWriter) {
    match value {
        FieldValue::Message(m) => {
            writer.write_nested(field.number, |nested| encode_message(m, nested));
        }
        value => {
            writer.write_tag(field.number, field.kind.wire_type());
            encode_value(field.kind, value, writer);
        }
    }
}

fn accepted(field: &FieldDescriptor, value: &FieldValue) -> bool {
    let ok = field.kind.accepts(value);
    if !ok {
        warn!(
            field = field.name,
            expected = field.kind.name(),
            found = value.type_name(),
            "skipping value that does not match its field kind"
        );
    }
    ok
}

/// Writes one scalar without its tag. Callers have checked the pairing with
/// [`Kind::accepts`]; messages go through [`encode_tagged`].
fn encode_value(kind: Kind, value: &FieldValue, writer: &mut BinaryWriter) {
    match (kind, value) {
        (Kind::Int32, FieldValue::Int32(v)) => writer.write_int32(*v),
        (Kind::Sint32, FieldValue::Int32(v)) => writer.write_sint32(*v),
        (Kind::Sfixed32, FieldValue::Int32(v)) => writer.write_sfixed32(*v),
        (Kind::Int64, FieldValue::Int64(v)) => writer.write_int64(*v),
        (Kind::Sint64, FieldValue::Int64(v)) => writer.write_sint64(*v),
        (Kind::Sfixed64, FieldValue::Int64(v)) => writer.write_sfixed64(*v),
        (Kind::Uint32, FieldValue::Uint32(v)) => writer.write_uint32(*v),
        (Kind::Fixed32, FieldValue::Uint32(v)) => writer.write_fixed32(*v),
        (Kind::Uint64, FieldValue::Uint64(v)) => writer.write_uint64(*v),
        (Kind::Fixed64, FieldValue::Uint64(v)) => writer.write_fixed64(*v),
        (Kind::Bool, FieldValue::Bool(v)) => writer.write_bool(*v),
        (Kind::Float, FieldValue::Float(v)) => writer.write_float(*v),
        (Kind::Double, FieldValue::Double(v)) => writer.write_double(*v),
        (Kind::String, FieldValue::String(v)) => writer.write_string(v),
        (Kind::Bytes, FieldValue::Bytes(v)) => writer.write_bytes(v),
        (Kind::Enum(_), FieldValue::Enum(v)) => writer.write_enum(*v),
        _ => {}
    }
}

/// Reads fields from `reader` until it is exhausted and merges them into
/// `message`.
///
/// Unknown field numbers are skipped by their wire type. Scalars overwrite,
/// repeated fields append (packed and unpacked encodings are both accepted),
/// a singular message seen again is merged into the existing one, and a oneof
/// member replaces any sibling decoded before it.
pub fn merge_message(
    message: &mut DynamicMessage,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    let descriptor = message.descriptor();
    while let Some((number, wire_type)) = reader.next_field()? {
        if wire_type == WireType::EndGroup {
            return Err(DecodeError::UnexpectedEndGroup(number));
        }
        match descriptor.field(number) {
            Some(field) => merge_field(message, field, wire_type, reader)?,
            None => {
                trace!(
                    message = descriptor.full_name,
                    number,
                    %wire_type,
                    "skipping unknown field"
                );
                reader.skip_field(number, wire_type)?;
            }
        }
    }
    Ok(())
}

fn merge_field(
    message: &mut DynamicMessage,
    field: &FieldDescriptor,
    wire_type: WireType,
    reader: &mut BinaryReader<'_>,
) -> Result<(), DecodeError> {
    if field.is_repeated() && field.kind.is_packable() && wire_type == WireType::LengthDelimited {
        let mut packed = reader.read_packed()?;
        let mut items = Vec::new();
        while !packed.is_empty() {
            items.push(decode_value(field.kind, &mut packed)?);
        }
        message.extend_repeated_field(field.number, items);
        return Ok(());
    }

    let expected = field.kind.wire_type();
    if wire_type != expected {
        return Err(DecodeError::WireTypeMismatch {
            message: message.full_name(),
            number: field.number,
            expected,
            actual: wire_type,
        });
    }

    if field.is_repeated() {
        let value = decode_value(field.kind, reader)?;
        message.push_repeated_field(field.number, value, None);
        return Ok(());
    }

    if let Kind::Message(_) = field.kind {
        if let Some(FieldValue::Message(existing)) = message.get_field_mut(field.number) {
            let mut nested = reader.read_nested()?;
            return merge_message(existing, &mut nested);
        }
    }

    let value = decode_value(field.kind, reader)?;
    message.put_field(field.number, value);
    Ok(())
}

fn decode_value(kind: Kind, reader: &mut BinaryReader<'_>) -> Result<FieldValue, DecodeError> {
    Ok(match kind {
        Kind::Int32 => FieldValue::Int32(reader.read_int32()?),
        Kind::Sint32 => FieldValue::Int32(reader.read_sint32()?),
        Kind::Sfixed32 => FieldValue::Int32(reader.read_sfixed32()?),
        Kind::Int64 => FieldValue::Int64(reader.read_int64()?),
        Kind::Sint64 => FieldValue::Int64(reader.read_sint64()?),
        Kind::Sfixed64 => FieldValue::Int64(reader.read_sfixed64()?),
        Kind::Uint32 => FieldValue::Uint32(reader.read_uint32()?),
        Kind::Fixed32 => FieldValue::Uint32(reader.read_fixed32()?),
        Kind::Uint64 => FieldValue::Uint64(reader.read_uint64()?),
        Kind::Fixed64 => FieldValue::Uint64(reader.read_fixed64()?),
        Kind::Bool => FieldValue::Bool(reader.read_bool()?),
        Kind::Float => FieldValue::Float(reader.read_float()?),
        Kind::Double => FieldValue::Double(reader.read_double()?),
        Kind::String => FieldValue::String(reader.read_string()?),
        Kind::Bytes => FieldValue::Bytes(reader.read_bytes()?),
        Kind::Enum(_) => FieldValue::Enum(reader.read_enum()?),
        Kind::Message(descriptor) => {
            let mut nested = reader.read_nested()?;
            let mut message = DynamicMessage::new(descriptor());
            merge_message(&mut message, &mut nested)?;
            FieldValue::Message(message)
        }
    })
}
