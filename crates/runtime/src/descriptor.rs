//! Static schema descriptors.
//!
//! Generated bindings emit one [`MessageDescriptor`] per message type as
//! `'static` data. The codec, the plain-object converter and the registry are
//! all driven from these tables; nothing here is mutated after compilation.

use crate::value::FieldValue;
use crate::wire::WireType;

/// Semantic type of a field.
///
/// Message-typed fields point at their descriptor through a function so that
/// self-referential and mutually recursive schemas can be expressed as
/// statics.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Fixed64,
    Fixed32,
    Bool,
    String,
    Bytes,
    Uint32,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    Enum(&'static EnumDescriptor),
    Message(fn() -> &'static MessageDescriptor),
}

impl Kind {
    /// Wire type used for a single (unpacked) value of this kind.
    pub fn wire_type(&self) -> WireType {
        match self {
            Kind::Int32
            | Kind::Int64
            | Kind::Uint32
            | Kind::Uint64
            | Kind::Sint32
            | Kind::Sint64
            | Kind::Bool
            | Kind::Enum(_) => WireType::Varint,
            Kind::Fixed64 | Kind::Sfixed64 | Kind::Double => WireType::Fixed64,
            Kind::Fixed32 | Kind::Sfixed32 | Kind::Float => WireType::Fixed32,
            Kind::String | Kind::Bytes | Kind::Message(_) => WireType::LengthDelimited,
        }
    }

    /// Repeated fields of packable kinds are written packed.
    pub fn is_packable(&self) -> bool {
        !matches!(self, Kind::String | Kind::Bytes | Kind::Message(_))
    }

    /// Schema spelling of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Double => "double",
            Kind::Float => "float",
            Kind::Int64 => "int64",
            Kind::Uint64 => "uint64",
            Kind::Int32 => "int32",
            Kind::Fixed64 => "fixed64",
            Kind::Fixed32 => "fixed32",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Bytes => "bytes",
            Kind::Uint32 => "uint32",
            Kind::Sfixed32 => "sfixed32",
            Kind::Sfixed64 => "sfixed64",
            Kind::Sint32 => "sint32",
            Kind::Sint64 => "sint64",
            Kind::Enum(_) => "enum",
            Kind::Message(_) => "message",
        }
    }

    /// Value an unset singular field reads as. `None` for message kinds,
    /// whose default is "absent".
    pub fn default_value(&self) -> Option<FieldValue> {
        Some(match self {
            Kind::Double => FieldValue::Double(0.0),
            Kind::Float => FieldValue::Float(0.0),
            Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => FieldValue::Int64(0),
            Kind::Uint64 | Kind::Fixed64 => FieldValue::Uint64(0),
            Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => FieldValue::Int32(0),
            Kind::Uint32 | Kind::Fixed32 => FieldValue::Uint32(0),
            Kind::Bool => FieldValue::Bool(false),
            Kind::String => FieldValue::String(String::new()),
            Kind::Bytes => FieldValue::Bytes(Vec::new()),
            Kind::Enum(_) => FieldValue::Enum(0),
            Kind::Message(_) => return None,
        })
    }

    /// Whether `value` can be stored in a field of this kind.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Kind::Int32 | Kind::Sint32 | Kind::Sfixed32, FieldValue::Int32(_)) => true,
            (Kind::Int64 | Kind::Sint64 | Kind::Sfixed64, FieldValue::Int64(_)) => true,
            (Kind::Uint32 | Kind::Fixed32, FieldValue::Uint32(_)) => true,
            (Kind::Uint64 | Kind::Fixed64, FieldValue::Uint64(_)) => true,
            (Kind::Bool, FieldValue::Bool(_)) => true,
            (Kind::Float, FieldValue::Float(_)) => true,
            (Kind::Double, FieldValue::Double(_)) => true,
            (Kind::String, FieldValue::String(_)) => true,
            (Kind::Bytes, FieldValue::Bytes(_)) => true,
            (Kind::Enum(_), FieldValue::Enum(_)) => true,
            (Kind::Message(descriptor), FieldValue::Message(message)) => {
                message.descriptor().full_name == descriptor().full_name
            }
            _ => false,
        }
    }

    /// Maps interchangeable representations onto the canonical one: plain
    /// `Int32` values become `Enum` for enum kinds.
    pub fn normalize(&self, value: FieldValue) -> FieldValue {
        match (self, value) {
            (Kind::Enum(_), FieldValue::Int32(v)) => FieldValue::Enum(v),
            (_, value) => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Singular,
    Repeated,
}

/// One declared field of a message.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub number: u32,
    /// Field name as written in the schema (snake_case).
    pub name: &'static str,
    pub kind: Kind,
    pub cardinality: Cardinality,
    /// Index into [`MessageDescriptor::oneofs`] for oneof members.
    pub oneof: Option<usize>,
}

impl FieldDescriptor {
    pub const fn singular(number: u32, name: &'static str, kind: Kind) -> Self {
        Self {
            number,
            name,
            kind,
            cardinality: Cardinality::Singular,
            oneof: None,
        }
    }

    pub const fn repeated(number: u32, name: &'static str, kind: Kind) -> Self {
        Self {
            number,
            name,
            kind,
            cardinality: Cardinality::Repeated,
            oneof: None,
        }
    }

    pub const fn oneof(number: u32, name: &'static str, kind: Kind, group: usize) -> Self {
        Self {
            number,
            name,
            kind,
            cardinality: Cardinality::Singular,
            oneof: Some(group),
        }
    }

    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }

    /// Oneof members and message fields distinguish "unset" from "default".
    pub fn tracks_presence(&self) -> bool {
        self.oneof.is_some() || matches!(self.kind, Kind::Message(_))
    }

    /// lowerCamelCase form of the field name.
    pub fn json_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut upper = false;
        for ch in self.name.chars() {
            if ch == '_' {
                upper = true;
            } else if upper {
                out.extend(ch.to_uppercase());
                upper = false;
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Key used in plain objects: the JSON name, with a `List` suffix for
    /// repeated fields.
    pub fn plain_key(&self) -> String {
        let mut key = self.json_name();
        if self.is_repeated() {
            key.push_str("List");
        }
        key
    }

    /// Descriptor of the nested message type, for message-typed fields.
    pub fn message_descriptor(&self) -> Option<&'static MessageDescriptor> {
        match self.kind {
            Kind::Message(descriptor) => Some(descriptor()),
            _ => None,
        }
    }
}

/// A named group of mutually exclusive fields.
#[derive(Debug)]
pub struct OneofDescriptor {
    pub name: &'static str,
    /// Field numbers of the members.
    pub fields: &'static [u32],
}

/// Schema of one message type.
#[derive(Debug)]
pub struct MessageDescriptor {
    /// Fully-qualified name, e.g. `google.cloud.vision.v1.Product`.
    pub full_name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldDescriptor],
    pub oneofs: &'static [OneofDescriptor],
}

impl MessageDescriptor {
    /// Unqualified type name.
    pub fn name(&self) -> &'static str {
        let full_name = self.full_name;
        full_name.rsplit('.').next().unwrap_or(full_name)
    }

    pub fn field(&self, number: u32) -> Option<&'static FieldDescriptor> {
        let fields = self.fields;
        fields.iter().find(|f| f.number == number)
    }

    /// Looks a field up by schema name, JSON name or plain-object key.
    pub fn field_by_name(&self, name: &str) -> Option<&'static FieldDescriptor> {
        let fields = self.fields;
        fields
            .iter()
            .find(|f| f.name == name || f.json_name() == name || f.plain_key() == name)
    }

    pub fn oneof(&self, group: usize) -> Option<&'static OneofDescriptor> {
        let oneofs = self.oneofs;
        oneofs.get(group)
    }

    pub fn oneof_by_name(&self, name: &str) -> Option<usize> {
        self.oneofs.iter().position(|o| o.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub name: &'static str,
    pub number: i32,
}

/// Schema of one enum type. proto3 enums are open: numbers outside
/// [`EnumDescriptor::values`] are still valid field contents.
#[derive(Debug)]
pub struct EnumDescriptor {
    pub full_name: &'static str,
    pub values: &'static [EnumValue],
}

impl EnumDescriptor {
    pub fn value_name(&self, number: i32) -> Option<&'static str> {
        self.values
            .iter()
            .find(|v| v.number == number)
            .map(|v| v.name)
    }

    pub fn value_number(&self, name: &str) -> Option<i32> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static COLOR: EnumDescriptor = EnumDescriptor {
        full_name: "test.Color",
        values: &[
            EnumValue {
                name: "COLOR_UNSPECIFIED",
                number: 0,
            },
            EnumValue {
                name: "RED",
                number: 1,
            },
        ],
    };

    static NODE: MessageDescriptor = MessageDescriptor {
        full_name: "test.Node",
        fields: &[
            FieldDescriptor::singular(1, "display_name", Kind::String),
            FieldDescriptor::repeated(2, "child_nodes", Kind::Message(node)),
            FieldDescriptor::oneof(3, "color", Kind::Enum(&COLOR), 0),
            FieldDescriptor::oneof(4, "raw_id", Kind::Sint64, 0),
        ],
        oneofs: &[OneofDescriptor {
            name: "tag",
            fields: &[3, 4],
        }],
    };

    fn node() -> &'static MessageDescriptor {
        &NODE
    }

    #[test]
    fn names() {
        assert_eq!(NODE.name(), "Node");
        let field = NODE.field(1).unwrap();
        assert_eq!(field.json_name(), "displayName");
        assert_eq!(field.plain_key(), "displayName");
        let children = NODE.field(2).unwrap();
        assert_eq!(children.plain_key(), "childNodesList");
    }

    #[test]
    fn lookup_by_any_spelling() {
        assert_eq!(NODE.field_by_name("child_nodes").map(|f| f.number), Some(2));
        assert_eq!(NODE.field_by_name("childNodes").map(|f| f.number), Some(2));
        assert_eq!(NODE.field_by_name("childNodesList").map(|f| f.number), Some(2));
        assert!(NODE.field_by_name("missing").is_none());
        assert!(NODE.field(99).is_none());
    }

    #[test]
    fn recursive_descriptor_resolves() {
        let children = NODE.field(2).unwrap();
        assert_eq!(children.message_descriptor().map(|d| d.full_name), Some("test.Node"));
        assert!(children.tracks_presence());
        assert!(!NODE.field(1).unwrap().tracks_presence());
        assert!(NODE.field(4).unwrap().tracks_presence());
    }

    #[test]
    fn wire_types_and_packing() {
        assert_eq!(Kind::Sint64.wire_type(), WireType::Varint);
        assert_eq!(Kind::Float.wire_type(), WireType::Fixed32);
        assert_eq!(Kind::Sfixed64.wire_type(), WireType::Fixed64);
        assert_eq!(Kind::Bytes.wire_type(), WireType::LengthDelimited);
        assert!(Kind::Enum(&COLOR).is_packable());
        assert!(!Kind::String.is_packable());
    }

    #[test]
    fn enum_values() {
        assert_eq!(COLOR.value_name(1), Some("RED"));
        assert_eq!(COLOR.value_number("COLOR_UNSPECIFIED"), Some(0));
        assert_eq!(COLOR.value_name(7), None);
        assert_eq!(NODE.oneof_by_name("tag"), Some(0));
    }

    #[test]
    fn enum_fields_accept_plain_integers_after_normalizing() {
        let kind = Kind::Enum(&COLOR);
        assert!(!kind.accepts(&FieldValue::Int32(1)));
        assert!(kind.accepts(&kind.normalize(FieldValue::Int32(1))));
    }
}
