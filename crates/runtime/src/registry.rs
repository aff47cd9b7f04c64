//! Lookup of message types by fully-qualified name.

use std::collections::BTreeMap;

use crate::descriptor::{Kind, MessageDescriptor};
use crate::dynamic::DynamicMessage;
use crate::error::DecodeError;
use crate::message::Message;
use crate::options::DecodeOptions;

/// Prefix of type URLs produced when packing messages into `Any`.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Immutable map from full type name to descriptor.
///
/// Built once through [`TypeRegistryBuilder`] and then shared; lookups never
/// mutate it.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: BTreeMap<&'static str, &'static MessageDescriptor>,
}

impl TypeRegistry {
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.types.contains_key(full_name)
    }

    pub fn find(&self, full_name: &str) -> Option<&'static MessageDescriptor> {
        self.types.get(full_name).copied()
    }

    /// Resolves a type URL such as
    /// `type.googleapis.com/google.cloud.vision.v1.Product`. Only the part
    /// after the last `/` is significant.
    pub fn find_by_type_url(&self, type_url: &str) -> Option<&'static MessageDescriptor> {
        let name = type_url.rsplit('/').next().unwrap_or(type_url);
        self.find(name)
    }

    /// Registered type names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    /// Empty instance of the named type.
    pub fn create(&self, full_name: &str) -> Option<DynamicMessage> {
        self.find(full_name).map(DynamicMessage::new)
    }

    /// Decodes `bytes` as the named type.
    pub fn decode(&self, full_name: &str, bytes: &[u8]) -> Result<DynamicMessage, DecodeError> {
        self.decode_with(full_name, bytes, &DecodeOptions::default())
    }

    pub fn decode_with(
        &self,
        full_name: &str,
        bytes: &[u8],
        options: &DecodeOptions,
    ) -> Result<DynamicMessage, DecodeError> {
        let descriptor = self
            .find(full_name)
            .ok_or_else(|| DecodeError::UnknownType(full_name.to_owned()))?;
        DynamicMessage::decode_with(descriptor, bytes, options)
    }
}

#[derive(Debug, Default)]
pub struct TypeRegistryBuilder {
    types: BTreeMap<&'static str, &'static MessageDescriptor>,
}

impl TypeRegistryBuilder {
    /// Registers `descriptor` and every message type reachable through its
    /// fields.
    pub fn add(mut self, descriptor: &'static MessageDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// Registers the descriptor of a typed message.
    pub fn add_message<M: Message>(self) -> Self {
        self.add(M::descriptor())
    }

    fn insert(&mut self, descriptor: &'static MessageDescriptor) {
        if self.types.insert(descriptor.full_name, descriptor).is_some() {
            return;
        }
        for field in descriptor.fields {
            if let Kind::Message(nested) = field.kind {
                self.insert(nested());
            }
        }
    }

    pub fn build(self) -> TypeRegistry {
        tracing::debug!(types = self.types.len(), "built type registry");
        TypeRegistry { types: self.types }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldDescriptor;

    static LEAF: MessageDescriptor = MessageDescriptor {
        full_name: "test.Leaf",
        fields: &[FieldDescriptor::singular(1, "id", Kind::Uint32)],
        oneofs: &[],
    };

    static TREE: MessageDescriptor = MessageDescriptor {
        full_name: "test.Tree",
        fields: &[
            FieldDescriptor::repeated(1, "leaves", Kind::Message(leaf)),
            FieldDescriptor::singular(2, "subtree", Kind::Message(tree)),
        ],
        oneofs: &[],
    };

    fn leaf() -> &'static MessageDescriptor {
        &LEAF
    }

    fn tree() -> &'static MessageDescriptor {
        &TREE
    }

    #[test]
    fn registers_reachable_types() {
        let registry = TypeRegistry::builder().add(&TREE).build();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["test.Leaf", "test.Tree"]);
        assert!(registry.contains("test.Leaf"));
        assert!(registry.find("test.Missing").is_none());
    }

    #[test]
    fn resolves_type_urls() {
        let registry = TypeRegistry::builder().add(&LEAF).build();
        let found = registry.find_by_type_url("type.googleapis.com/test.Leaf");
        assert_eq!(found.map(|d| d.full_name), Some("test.Leaf"));
        assert!(registry.find_by_type_url("test.Leaf").is_some());
    }

    #[test]
    fn decodes_by_name() {
        let registry = TypeRegistry::builder().add(&LEAF).build();
        let leaf = registry.decode("test.Leaf", &[0x08, 0x07]).unwrap();
        assert_eq!(leaf.get_field_with_default(1, 0u32), 7);
        assert_eq!(registry.create("test.Leaf").map(|m| m.is_empty()), Some(true));
        assert_eq!(
            registry.decode("test.Nope", &[]),
            Err(DecodeError::UnknownType("test.Nope".to_owned()))
        );
    }
}
