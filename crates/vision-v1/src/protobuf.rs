//! Well-known types from `google.protobuf`.

use vision_proto_runtime::{
    message, DecodeError, DynamicMessage, FieldDescriptor, Kind, Message, MessageDescriptor,
    TypeRegistry, TYPE_URL_PREFIX,
};

pub(crate) static ANY: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Any",
    fields: &[
        FieldDescriptor::singular(1, "type_url", Kind::String),
        FieldDescriptor::singular(2, "value", Kind::Bytes),
    ],
    oneofs: &[],
};

pub(crate) static EMPTY: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Empty",
    fields: &[],
    oneofs: &[],
};

pub(crate) static TIMESTAMP: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.Timestamp",
    fields: &[
        FieldDescriptor::singular(1, "seconds", Kind::Int64),
        FieldDescriptor::singular(2, "nanos", Kind::Int32),
    ],
    oneofs: &[],
};

pub(crate) static FIELD_MASK: MessageDescriptor = MessageDescriptor {
    full_name: "google.protobuf.FieldMask",
    fields: &[FieldDescriptor::repeated(1, "paths", Kind::String)],
    oneofs: &[],
};

message! {
    /// An encoded message together with a URL naming its type.
    pub struct Any => ANY
}

impl Any {
    string_field!(1, type_url, set_type_url);
    bytes_field!(2, value, set_value);

    /// Encodes `message` under `type.googleapis.com/<full name>`.
    pub fn pack<M: Message>(message: &M) -> Self {
        let mut any = Self::new();
        any.set_type_url(format!("{TYPE_URL_PREFIX}{}", M::full_name()))
            .set_value(message.encode_to_vec());
        any
    }

    /// Full name of the packed type: everything after the last `/`.
    pub fn type_name(&self) -> &str {
        let url = self.type_url();
        url.rsplit('/').next().unwrap_or(url)
    }

    /// Whether the packed value is an `M`.
    pub fn is<M: Message>(&self) -> bool {
        self.type_name() == M::full_name()
    }

    /// Decodes the packed value as `M`. `Ok(None)` when it holds another
    /// type.
    pub fn unpack<M: Message>(&self) -> Result<Option<M>, DecodeError> {
        if !self.is::<M>() {
            return Ok(None);
        }
        M::decode(self.value()).map(Some)
    }

    /// Decodes the packed value with the descriptor `registry` holds for it.
    pub fn unpack_dynamic(&self, registry: &TypeRegistry) -> Result<DynamicMessage, DecodeError> {
        let descriptor = registry
            .find_by_type_url(self.type_url())
            .ok_or_else(|| DecodeError::UnknownType(self.type_url().to_owned()))?;
        DynamicMessage::decode(descriptor, self.value())
    }
}

message! {
    /// A message with no fields.
    pub struct Empty => EMPTY
}

message! {
    /// A point in time as seconds and nanoseconds since the Unix epoch.
    pub struct Timestamp => TIMESTAMP
}

impl Timestamp {
    scalar_field!(1, seconds, set_seconds, i64);
    scalar_field!(2, nanos, set_nanos, i32);

    pub fn at(seconds: i64, nanos: i32) -> Self {
        let mut ts = Self::new();
        ts.set_seconds(seconds).set_nanos(nanos);
        ts
    }
}

message! {
    /// Set of field paths touched by an update.
    pub struct FieldMask => FIELD_MASK
}

impl FieldMask {
    repeated_string_field!(1, paths, set_paths, add_paths);

    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mask = Self::new();
        mask.set_paths(paths.into_iter().map(Into::into).collect());
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_wire_form() {
        let ts = Timestamp::at(1, 5);
        assert_eq!(ts.encode_to_vec(), vec![0x08, 0x01, 0x10, 0x05]);
        assert_eq!(Timestamp::decode(&ts.encode_to_vec()).unwrap(), ts);
        assert!(Timestamp::at(0, 0).encode_to_vec().is_empty());
    }

    #[test]
    fn pack_and_unpack() {
        let any = Any::pack(&Timestamp::at(42, 0));
        assert_eq!(any.type_url(), "type.googleapis.com/google.protobuf.Timestamp");
        assert_eq!(any.type_name(), "google.protobuf.Timestamp");
        assert!(any.is::<Timestamp>());
        assert!(!any.is::<Empty>());
        assert_eq!(any.unpack::<Timestamp>().unwrap().map(|t| t.seconds()), Some(42));
        assert_eq!(any.unpack::<FieldMask>().unwrap(), None);
    }

    #[test]
    fn unpack_corrupt_value() {
        let mut any = Any::pack(&Empty::new());
        any.set_type_url("type.googleapis.com/google.protobuf.Timestamp")
            .set_value(vec![0x08]);
        assert!(any.unpack::<Timestamp>().is_err());
    }

    #[test]
    fn field_mask_paths() {
        let mut mask = FieldMask::from_paths(["display_name"]);
        mask.add_paths("product_labels");
        assert_eq!(mask.paths(), vec!["display_name", "product_labels"]);
        assert_eq!(
            mask.to_plain_object(false),
            serde_json::json!({"pathsList": ["display_name", "product_labels"]})
        );
    }
}
