//! Field storage for a single message instance.

use std::collections::BTreeMap;
use std::fmt;

use crate::codec;
use crate::descriptor::{FieldDescriptor, MessageDescriptor};
use crate::error::{DecodeError, FieldError, PlainObjectError};
use crate::message::Message;
use crate::options::DecodeOptions;
use crate::plain;
use crate::reader::BinaryReader;
use crate::value::{FieldValue, Scalar};
use crate::writer::BinaryWriter;

/// A message instance: its descriptor plus a map from field number to value.
///
/// Only set fields are stored. proto3 scalars outside a oneof are never
/// stored at their default value, so a field explicitly set to `0`, `""` or
/// `false` compares equal to one that was never set, exactly as the two are
/// indistinguishable on the wire.
///
/// ```
/// use vision_proto_runtime::{DynamicMessage, FieldDescriptor, Kind, MessageDescriptor};
///
/// static ITEM: MessageDescriptor = MessageDescriptor {
///     full_name: "demo.Item",
///     fields: &[
///         FieldDescriptor::singular(1, "name", Kind::String),
///         FieldDescriptor::repeated(2, "tags", Kind::String),
///     ],
///     oneofs: &[],
/// };
///
/// let mut item = DynamicMessage::new(&ITEM);
/// item.set_field(1, "products/1").unwrap();
/// item.add_to_repeated_field(2, "shoe", None).unwrap();
///
/// let bytes = item.encode_to_vec();
/// let decoded = DynamicMessage::decode(&ITEM, &bytes).unwrap();
/// assert_eq!(decoded.get_str(1), "products/1");
/// assert_eq!(decoded, item);
/// ```
#[derive(Clone)]
pub struct DynamicMessage {
    descriptor: &'static MessageDescriptor,
    fields: BTreeMap<u32, FieldValue>,
}

impl DynamicMessage {
    /// Creates an empty instance with every field unset.
    pub fn new(descriptor: &'static MessageDescriptor) -> Self {
        Self {
            descriptor,
            fields: BTreeMap::new(),
        }
    }

    pub fn descriptor(&self) -> &'static MessageDescriptor {
        self.descriptor
    }

    pub fn full_name(&self) -> &'static str {
        self.descriptor.full_name
    }

    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates set fields in ascending field-number order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDescriptor, &FieldValue)> + '_ {
        let descriptor = self.descriptor;
        self.fields
            .iter()
            .filter_map(move |(number, value)| descriptor.field(*number).map(|f| (f, value)))
    }

    fn lookup(&self, number: u32) -> Result<&'static FieldDescriptor, FieldError> {
        self.descriptor
            .field(number)
            .ok_or(FieldError::UnknownField {
                message: self.descriptor.full_name,
                number,
            })
    }

    // ------------------------------------------------------------------ get

    /// Stored value of a field, or `None` when unset. Unknown numbers read
    /// as unset.
    pub fn get_field(&self, number: u32) -> Option<&FieldValue> {
        self.fields.get(&number)
    }

    pub(crate) fn get_field_mut(&mut self, number: u32) -> Option<&mut FieldValue> {
        self.fields.get_mut(&number)
    }

    /// Stored scalar of a field, or `default` when unset or of another type.
    pub fn get_field_with_default<T: Scalar>(&self, number: u32, default: T) -> T {
        self.fields
            .get(&number)
            .and_then(T::from_field_value)
            .unwrap_or(default)
    }

    /// String field contents, `""` when unset.
    pub fn get_str(&self, number: u32) -> &str {
        self.fields
            .get(&number)
            .and_then(FieldValue::as_str)
            .unwrap_or("")
    }

    /// Bytes field contents, empty when unset.
    pub fn get_bytes(&self, number: u32) -> &[u8] {
        self.fields
            .get(&number)
            .and_then(FieldValue::as_bytes)
            .unwrap_or(&[])
    }

    /// Numeric value of an enum field, `0` when unset.
    pub fn get_enum(&self, number: u32) -> i32 {
        self.get_field_with_default(number, 0i32)
    }

    /// Whether a field is set. Repeated fields count as set when non-empty.
    pub fn has_field(&self, number: u32) -> bool {
        match self.fields.get(&number) {
            Some(FieldValue::List(items)) => !items.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    /// Elements of a repeated field; empty when unset.
    pub fn get_repeated_field(&self, number: u32) -> &[FieldValue] {
        self.fields
            .get(&number)
            .and_then(FieldValue::as_list)
            .unwrap_or(&[])
    }

    /// Elements of a repeated scalar field converted to `T`; elements of
    /// another type are skipped.
    pub fn get_repeated_scalar<T: Scalar>(&self, number: u32) -> Vec<T> {
        self.get_repeated_field(number)
            .iter()
            .filter_map(T::from_field_value)
            .collect()
    }

    /// Materializes the typed wrapper of a nested message field. `None` means
    /// absent, which is distinct from a present but empty message.
    pub fn get_wrapper_field<M: Message>(&self, number: u32) -> Option<M> {
        match self.fields.get(&number) {
            Some(FieldValue::Message(message)) => Some(M::from_dynamic(message.clone())),
            _ => None,
        }
    }

    /// Typed wrappers of every element of a repeated message field.
    pub fn get_repeated_wrapper_field<M: Message>(&self, number: u32) -> Vec<M> {
        self.get_repeated_field(number)
            .iter()
            .filter_map(FieldValue::as_message)
            .map(|m| M::from_dynamic(m.clone()))
            .collect()
    }

    /// Number of the active member of oneof `group`, or `0` when none is set.
    pub fn which_oneof(&self, group: usize) -> u32 {
        self.descriptor
            .oneof(group)
            .and_then(|oneof| {
                oneof
                    .fields
                    .iter()
                    .copied()
                    .find(|number| self.fields.contains_key(number))
            })
            .unwrap_or(0)
    }

    // ------------------------------------------------------- checked set

    /// Stores a singular value after checking the field exists and the value
    /// matches its kind. Setting a oneof member clears its siblings.
    pub fn set_field(
        &mut self,
        number: u32,
        value: impl Into<FieldValue>,
    ) -> Result<&mut Self, FieldError> {
        let field = self.lookup(number)?;
        if field.is_repeated() {
            return Err(FieldError::Repeated {
                message: self.descriptor.full_name,
                field: field.name,
            });
        }
        let value = field.kind.normalize(value.into());
        self.check_kind(field, &value)?;
        Ok(self.put_field(number, value))
    }

    /// Replaces every element of a repeated field.
    pub fn set_repeated_field(
        &mut self,
        number: u32,
        values: Vec<FieldValue>,
    ) -> Result<&mut Self, FieldError> {
        let field = self.repeated_lookup(number)?;
        let values: Vec<FieldValue> = values.into_iter().map(|v| field.kind.normalize(v)).collect();
        for value in &values {
            self.check_kind(field, value)?;
        }
        Ok(self.put_repeated_field(number, values))
    }

    /// Inserts into a repeated field at `index`, or appends when `index` is
    /// `None` or past the end.
    pub fn add_to_repeated_field(
        &mut self,
        number: u32,
        value: impl Into<FieldValue>,
        index: Option<usize>,
    ) -> Result<&mut Self, FieldError> {
        let field = self.repeated_lookup(number)?;
        let value = field.kind.normalize(value.into());
        self.check_kind(field, &value)?;
        Ok(self.push_repeated_field(number, value, index))
    }

    fn repeated_lookup(&self, number: u32) -> Result<&'static FieldDescriptor, FieldError> {
        let field = self.lookup(number)?;
        if !field.is_repeated() {
            return Err(FieldError::NotRepeated {
                message: self.descriptor.full_name,
                field: field.name,
            });
        }
        Ok(field)
    }

    fn check_kind(&self, field: &FieldDescriptor, value: &FieldValue) -> Result<(), FieldError> {
        if field.kind.accepts(value) {
            Ok(())
        } else {
            Err(FieldError::KindMismatch {
                message: self.descriptor.full_name,
                field: field.name,
                expected: field.kind.name(),
            })
        }
    }

    // ----------------------------------------------------- unchecked set
    //
    // Used by generated accessors, whose field numbers and value types come
    // straight from the descriptor.

    /// Stores a singular value without kind checks. Clears oneof siblings and
    /// drops proto3 default scalars. Numbers absent from the descriptor are
    /// ignored.
    pub fn put_field(&mut self, number: u32, value: FieldValue) -> &mut Self {
        let Some(field) = self.descriptor.field(number) else {
            tracing::warn!(
                message = self.descriptor.full_name,
                number,
                "ignoring write to undeclared field"
            );
            return self;
        };
        if let Some(oneof) = field.oneof.and_then(|group| self.descriptor.oneof(group)) {
            for sibling in oneof.fields.iter().filter(|n| **n != number) {
                self.fields.remove(sibling);
            }
        }
        if !field.tracks_presence() && value.is_default() {
            self.fields.remove(&number);
        } else {
            self.fields.insert(number, value);
        }
        self
    }

    /// Replaces a repeated field without kind checks.
    pub fn put_repeated_field(&mut self, number: u32, values: Vec<FieldValue>) -> &mut Self {
        if values.is_empty() {
            self.fields.remove(&number);
        } else if self.descriptor.field(number).is_some() {
            self.fields.insert(number, FieldValue::List(values));
        }
        self
    }

    /// Inserts one element into a repeated field without kind checks.
    pub fn push_repeated_field(
        &mut self,
        number: u32,
        value: FieldValue,
        index: Option<usize>,
    ) -> &mut Self {
        if self.descriptor.field(number).is_none() {
            return self;
        }
        let entry = self
            .fields
            .entry(number)
            .or_insert_with(|| FieldValue::List(Vec::new()));
        match entry {
            FieldValue::List(items) => match index {
                Some(i) if i < items.len() => items.insert(i, value),
                _ => items.push(value),
            },
            other => *other = FieldValue::List(vec![value]),
        }
        self
    }

    pub(crate) fn extend_repeated_field(&mut self, number: u32, values: Vec<FieldValue>) {
        if values.is_empty() {
            return;
        }
        let entry = self
            .fields
            .entry(number)
            .or_insert_with(|| FieldValue::List(Vec::new()));
        match entry {
            FieldValue::List(items) => items.extend(values),
            other => *other = FieldValue::List(values),
        }
    }

    /// Stores or clears a nested message field.
    pub fn set_wrapper_field<M: Message>(&mut self, number: u32, value: Option<M>) -> &mut Self {
        match value {
            Some(message) => self.put_field(number, FieldValue::Message(message.into_dynamic())),
            None => self.clear_field(number),
        }
    }

    /// Replaces a repeated message field.
    pub fn set_repeated_wrapper_field<M: Message>(
        &mut self,
        number: u32,
        values: Vec<M>,
    ) -> &mut Self {
        let values = values
            .into_iter()
            .map(|m| FieldValue::Message(m.into_dynamic()))
            .collect();
        self.put_repeated_field(number, values)
    }

    /// Inserts into a repeated message field; appends when `index` is `None`.
    pub fn add_to_repeated_wrapper_field<M: Message>(
        &mut self,
        number: u32,
        value: M,
        index: Option<usize>,
    ) -> &mut Self {
        self.push_repeated_field(number, FieldValue::Message(value.into_dynamic()), index)
    }

    /// Unsets a field. For a oneof member this leaves the group unset.
    pub fn clear_field(&mut self, number: u32) -> &mut Self {
        self.fields.remove(&number);
        self
    }

    /// Unsets every member of oneof `group`.
    pub fn clear_oneof(&mut self, group: usize) -> &mut Self {
        if let Some(oneof) = self.descriptor.oneof(group) {
            for number in oneof.fields {
                self.fields.remove(number);
            }
        }
        self
    }

    /// Unsets every field.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    // ------------------------------------------------------------ codec

    /// Writes every set field to `writer` in ascending field-number order.
    pub fn serialize_binary_to_writer(&self, writer: &mut BinaryWriter) {
        codec::encode_message(self, writer);
    }

    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut writer = BinaryWriter::new();
        codec::encode_message(self, &mut writer);
        writer.flush()
    }

    /// Decodes a fresh instance of `descriptor` from `bytes`.
    pub fn decode(descriptor: &'static MessageDescriptor, bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_with(descriptor, bytes, &DecodeOptions::default())
    }

    pub fn decode_with(
        descriptor: &'static MessageDescriptor,
        bytes: &[u8],
        options: &DecodeOptions,
    ) -> Result<Self, DecodeError> {
        if bytes.len() > options.max_message_size {
            return Err(DecodeError::MessageTooLarge {
                size: bytes.len(),
                max: options.max_message_size,
            });
        }
        let mut reader = BinaryReader::with_options(bytes, options);
        Self::deserialize_binary_from_reader(descriptor, &mut reader)
    }

    /// Decodes a fresh instance from the remaining input of `reader`.
    pub fn deserialize_binary_from_reader(
        descriptor: &'static MessageDescriptor,
        reader: &mut BinaryReader<'_>,
    ) -> Result<Self, DecodeError> {
        let mut message = Self::new(descriptor);
        codec::merge_message(&mut message, reader)?;
        Ok(message)
    }

    /// Merges encoded fields into this instance: scalars overwrite, repeated
    /// fields append, nested messages merge.
    pub fn merge_from_bytes(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let mut reader = BinaryReader::new(bytes);
        codec::merge_message(self, &mut reader)
    }

    // ------------------------------------------------------------ plain

    pub fn to_plain_object(&self, include_instance: bool) -> serde_json::Value {
        plain::to_plain_object(self, include_instance)
    }

    pub fn from_plain_object(
        descriptor: &'static MessageDescriptor,
        value: &serde_json::Value,
    ) -> Result<Self, PlainObjectError> {
        plain::from_plain_object(descriptor, value)
    }
}

impl PartialEq for DynamicMessage {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.full_name == other.descriptor.full_name && self.fields == other.fields
    }
}

impl fmt::Debug for DynamicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.descriptor.name());
        for (field, value) in self.iter() {
            s.field(field.name, value);
        }
        s.finish()
    }
}
