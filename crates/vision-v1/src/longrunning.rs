//! `google.longrunning.Operation`, the handle returned by batch RPCs.

use vision_proto_runtime::{
    message, DecodeError, FieldDescriptor, Kind, Message, MessageDescriptor, OneofDescriptor,
};

use crate::protobuf::Any;
use crate::rpc::Status;

pub(crate) static OPERATION: MessageDescriptor = MessageDescriptor {
    full_name: "google.longrunning.Operation",
    fields: &[
        FieldDescriptor::singular(1, "name", Kind::String),
        FieldDescriptor::singular(2, "metadata", Kind::Message(Any::descriptor)),
        FieldDescriptor::singular(3, "done", Kind::Bool),
        FieldDescriptor::oneof(4, "error", Kind::Message(Status::descriptor), 0),
        FieldDescriptor::oneof(5, "response", Kind::Message(Any::descriptor), 0),
    ],
    oneofs: &[OneofDescriptor {
        name: "result",
        fields: &[4, 5],
    }],
};

pub mod operation {
    /// Which member of the `result` oneof is set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ResultCase {
        NotSet = 0,
        Error = 4,
        Response = 5,
    }
}

message! {
    /// A pollable long-running operation.
    ///
    /// Until `done` is set neither `error` nor `response` is present; after
    /// completion exactly one of them is.
    pub struct Operation => OPERATION
}

impl Operation {
    string_field!(1, name, set_name);
    message_field!(2, metadata, set_metadata, has_metadata, clear_metadata, Any);
    scalar_field!(3, done, set_done, bool);
    message_field!(4, error, set_error, has_error, clear_error, Status);
    message_field!(5, response, set_response, has_response, clear_response, Any);

    pub fn result_case(&self) -> operation::ResultCase {
        match self.inner.which_oneof(0) {
            4 => operation::ResultCase::Error,
            5 => operation::ResultCase::Response,
            _ => operation::ResultCase::NotSet,
        }
    }

    pub fn clear_result(&mut self) -> &mut Self {
        self.inner.clear_oneof(0);
        self
    }

    /// Decodes the metadata as `M`. `Ok(None)` when absent or of another
    /// type.
    pub fn metadata_as<M: Message>(&self) -> Result<Option<M>, DecodeError> {
        match self.metadata() {
            Some(any) => any.unpack(),
            None => Ok(None),
        }
    }

    /// Decodes the response as `M`. `Ok(None)` when the operation has not
    /// succeeded or the response is of another type.
    pub fn response_as<M: Message>(&self) -> Result<Option<M>, DecodeError> {
        match self.response() {
            Some(any) => any.unpack(),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protobuf::{Empty, Timestamp};
    use crate::rpc::Code;

    #[test]
    fn result_is_exclusive() {
        let mut op = Operation::new();
        op.set_name("operations/7");
        assert_eq!(op.result_case(), operation::ResultCase::NotSet);

        op.set_done(true)
            .set_error(Status::with_code(Code::Internal, "boom"));
        assert_eq!(op.result_case(), operation::ResultCase::Error);

        op.set_response(Any::pack(&Empty::new()));
        assert_eq!(op.result_case(), operation::ResultCase::Response);
        assert!(!op.has_error());

        op.clear_result();
        assert_eq!(op.result_case(), operation::ResultCase::NotSet);
    }

    #[test]
    fn typed_metadata_and_response() {
        let mut op = Operation::new();
        op.set_metadata(Any::pack(&Timestamp::at(10, 0)))
            .set_response(Any::pack(&Empty::new()));
        let decoded = Operation::decode(&op.encode_to_vec()).unwrap();
        assert_eq!(
            decoded.metadata_as::<Timestamp>().unwrap().map(|t| t.seconds()),
            Some(10)
        );
        assert_eq!(decoded.response_as::<Empty>().unwrap(), Some(Empty::new()));
        assert_eq!(decoded.response_as::<Timestamp>().unwrap(), None);
    }

    #[test]
    fn empty_response_is_still_encoded() {
        let mut op = Operation::new();
        op.set_response(Any::new());
        assert_eq!(op.encode_to_vec(), vec![0x2a, 0x00]);
        let decoded = Operation::decode(&[0x2a, 0x00]).unwrap();
        assert_eq!(decoded.result_case(), operation::ResultCase::Response);
    }
}
