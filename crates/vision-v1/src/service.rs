//! Unary RPC surface of `google.cloud.vision.v1.ProductSearch`.
//!
//! Transport is out of scope: a [`UnaryChannel`] moves encoded request bytes
//! to a method path and returns the encoded reply. [`ProductSearchClient`]
//! wraps a channel with typed calls, and [`ProductSearchServer`] turns a
//! [`ProductSearch`] handler into a channel, which also makes it usable
//! in-process.

use thiserror::Error;
use tracing::{debug, warn};
use vision_proto_runtime::{DecodeError, Message, MessageDescriptor};

use crate::longrunning::Operation;
use crate::product_search_service::*;
use crate::protobuf::Empty;
use crate::rpc::{Code, Status};

/// Fully-qualified service name.
pub const SERVICE_NAME: &str = "google.cloud.vision.v1.ProductSearch";

/// Result and metadata types packed into the [`Operation`] of a
/// long-running method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongRunning {
    pub response_type: &'static str,
    pub metadata_type: &'static str,
}

/// Static description of one RPC.
#[derive(Debug, Clone, Copy)]
pub struct MethodDescriptor {
    pub name: &'static str,
    /// `/<service>/<method>`, as used on the wire.
    pub path: &'static str,
    pub input: fn() -> &'static MessageDescriptor,
    pub output: fn() -> &'static MessageDescriptor,
    pub long_running: Option<LongRunning>,
}

impl MethodDescriptor {
    pub fn input_type(&self) -> &'static str {
        (self.input)().full_name
    }

    pub fn output_type(&self) -> &'static str {
        (self.output)().full_name
    }
}

/// Looks a method up by its wire path.
pub fn method_by_path(path: &str) -> Option<&'static MethodDescriptor> {
    METHODS.iter().find(|m| m.path == path)
}

pub fn method_by_name(name: &str) -> Option<&'static MethodDescriptor> {
    METHODS.iter().find(|m| m.name == name)
}

/// Moves one encoded request to `path` and returns the encoded reply.
pub trait UnaryChannel {
    fn unary(&mut self, path: &str, request: Vec<u8>) -> Result<Vec<u8>, Status>;
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("rpc failed: {0}")]
    Status(#[from] Status),
    #[error("malformed message: {0}")]
    Decode(#[from] DecodeError),
    #[error("unknown method `{0}`")]
    UnknownMethod(String),
}

impl RpcError {
    /// The status a server reports for this error.
    pub fn into_status(self) -> Status {
        match self {
            RpcError::Status(status) => status,
            RpcError::Decode(err) => Status::with_code(Code::InvalidArgument, err.to_string()),
            RpcError::UnknownMethod(path) => {
                Status::with_code(Code::Unimplemented, format!("unknown method {path}"))
            }
        }
    }
}

/// Typed client over a [`UnaryChannel`].
#[derive(Debug, Clone)]
pub struct ProductSearchClient<C> {
    channel: C,
}

impl<C: UnaryChannel> ProductSearchClient<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    pub fn get_ref(&self) -> &C {
        &self.channel
    }

    pub fn into_inner(self) -> C {
        self.channel
    }

    fn call<Req: Message, Resp: Message>(
        &mut self,
        path: &'static str,
        request: &Req,
    ) -> Result<Resp, RpcError> {
        debug!(path, "unary call");
        let reply = self.channel.unary(path, request.encode_to_vec())?;
        Ok(Resp::decode(&reply)?)
    }
}

/// Wraps a [`ProductSearch`] handler and dispatches encoded calls to it.
#[derive(Debug, Clone)]
pub struct ProductSearchServer<S> {
    inner: S,
}

impl<S> ProductSearchServer<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ProductSearch> UnaryChannel for ProductSearchServer<S> {
    fn unary(&mut self, path: &str, request: Vec<u8>) -> Result<Vec<u8>, Status> {
        self.dispatch(path, &request).map_err(RpcError::into_status)
    }
}

fn unimplemented(method: &str) -> Status {
    Status::with_code(Code::Unimplemented, format!("{method} is not implemented"))
}

fn handle<Req: Message, Resp: Message>(
    path: &str,
    request: &[u8],
    handler: impl FnOnce(Req) -> Result<Resp, Status>,
) -> Result<Vec<u8>, RpcError> {
    let request = Req::decode(request)?;
    match handler(request) {
        Ok(reply) => Ok(reply.encode_to_vec()),
        Err(status) => {
            warn!(path, code = status.code(), message = status.message(), "handler failed");
            Err(RpcError::Status(status))
        }
    }
}

macro_rules! product_search_service {
    (@long_running) => {
        None
    };
    (@long_running $response:literal, $metadata:literal) => {
        Some(LongRunning {
            response_type: $response,
            metadata_type: $metadata,
        })
    };
    ($(
        $(#[$doc:meta])*
        $method:ident => $name:literal ($input:ty) -> $output:ty
            $(, long_running($response:literal, $metadata:literal))?;
    )*) => {
        /// Every method of the service, in schema order.
        pub static METHODS: &[MethodDescriptor] = &[$(
            MethodDescriptor {
                name: $name,
                path: concat!("/google.cloud.vision.v1.ProductSearch/", $name),
                input: <$input>::descriptor,
                output: <$output>::descriptor,
                long_running: product_search_service!(@long_running $($response, $metadata)?),
            },
        )*];

        /// Server-side handler. Methods left at their default answer
        /// `UNIMPLEMENTED`.
        pub trait ProductSearch {
            $(
                $(#[$doc])*
                fn $method(&self, _request: $input) -> Result<$output, Status> {
                    Err(unimplemented($name))
                }
            )*
        }

        impl<C: UnaryChannel> ProductSearchClient<C> {
            $(
                $(#[$doc])*
                pub fn $method(&mut self, request: $input) -> Result<$output, RpcError> {
                    self.call(concat!("/google.cloud.vision.v1.ProductSearch/", $name), &request)
                }
            )*
        }

        impl<S: ProductSearch> ProductSearchServer<S> {
            /// Decodes `request` for the method at `path`, runs the handler and
            /// encodes its reply.
            pub fn dispatch(&self, path: &str, request: &[u8]) -> Result<Vec<u8>, RpcError> {
                let method = method_by_path(path)
                    .ok_or_else(|| RpcError::UnknownMethod(path.to_owned()))?;
                debug!(method = method.name, bytes = request.len(), "dispatching");
                match method.name {
                    $(
                        $name => handle(path, request, |r: $input| self.inner.$method(r)),
                    )*
                    _ => Err(RpcError::UnknownMethod(path.to_owned())),
                }
            }
        }
    };
}

product_search_service! {
    /// Creates a product set. The id is chosen by the server unless given.
    create_product_set => "CreateProductSet" (CreateProductSetRequest) -> ProductSet;
    list_product_sets => "ListProductSets" (ListProductSetsRequest) -> ListProductSetsResponse;
    get_product_set => "GetProductSet" (GetProductSetRequest) -> ProductSet;
    /// Only the fields named in `update_mask` are changed.
    update_product_set => "UpdateProductSet" (UpdateProductSetRequest) -> ProductSet;
    /// Products in the set are kept.
    delete_product_set => "DeleteProductSet" (DeleteProductSetRequest) -> Empty;
    create_product => "CreateProduct" (CreateProductRequest) -> Product;
    list_products => "ListProducts" (ListProductsRequest) -> ListProductsResponse;
    get_product => "GetProduct" (GetProductRequest) -> Product;
    /// Only the fields named in `update_mask` are changed.
    update_product => "UpdateProduct" (UpdateProductRequest) -> Product;
    /// Also deletes the product's reference images.
    delete_product => "DeleteProduct" (DeleteProductRequest) -> Empty;
    create_reference_image => "CreateReferenceImage"
        (CreateReferenceImageRequest) -> ReferenceImage;
    delete_reference_image => "DeleteReferenceImage" (DeleteReferenceImageRequest) -> Empty;
    list_reference_images => "ListReferenceImages"
        (ListReferenceImagesRequest) -> ListReferenceImagesResponse;
    get_reference_image => "GetReferenceImage" (GetReferenceImageRequest) -> ReferenceImage;
    add_product_to_product_set => "AddProductToProductSet"
        (AddProductToProductSetRequest) -> Empty;
    remove_product_from_product_set => "RemoveProductFromProductSet"
        (RemoveProductFromProductSetRequest) -> Empty;
    list_products_in_product_set => "ListProductsInProductSet"
        (ListProductsInProductSetRequest) -> ListProductsInProductSetResponse;
    /// Starts a batch import; poll the returned operation for an
    /// `ImportProductSetsResponse`.
    import_product_sets => "ImportProductSets" (ImportProductSetsRequest) -> Operation,
        long_running(
            "google.cloud.vision.v1.ImportProductSetsResponse",
            "google.cloud.vision.v1.BatchOperationMetadata"
        );
    /// Starts an asynchronous purge of products.
    purge_products => "PurgeProducts" (PurgeProductsRequest) -> Operation,
        long_running("google.protobuf.Empty", "google.cloud.vision.v1.BatchOperationMetadata");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_table() {
        assert_eq!(METHODS.len(), 19);
        let get = method_by_name("GetProduct").unwrap();
        assert_eq!(get.path, "/google.cloud.vision.v1.ProductSearch/GetProduct");
        assert_eq!(get.input_type(), "google.cloud.vision.v1.GetProductRequest");
        assert_eq!(get.output_type(), "google.cloud.vision.v1.Product");
        assert!(get.long_running.is_none());

        let purge = method_by_path("/google.cloud.vision.v1.ProductSearch/PurgeProducts").unwrap();
        assert_eq!(purge.output_type(), "google.longrunning.Operation");
        assert_eq!(
            purge.long_running.map(|lr| lr.response_type),
            Some("google.protobuf.Empty")
        );
        assert!(METHODS
            .iter()
            .all(|m| m.path == format!("/{SERVICE_NAME}/{}", m.name)));
    }

    struct Nothing;

    impl ProductSearch for Nothing {}

    #[test]
    fn default_handlers_are_unimplemented() {
        let server = ProductSearchServer::new(Nothing);
        let err = server
            .dispatch(
                "/google.cloud.vision.v1.ProductSearch/GetProduct",
                &GetProductRequest::new().encode_to_vec(),
            )
            .unwrap_err();
        match err {
            RpcError::Status(status) => assert_eq!(status.code_kind(), Code::Unimplemented),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_path_and_bad_payload() {
        let mut server = ProductSearchServer::new(Nothing);
        assert!(matches!(
            server.dispatch("/google.cloud.vision.v1.ProductSearch/Annotate", &[]),
            Err(RpcError::UnknownMethod(_))
        ));
        let status = server
            .unary("/google.cloud.vision.v1.ProductSearch/GetProduct", vec![0x0a, 0x05])
            .unwrap_err();
        assert_eq!(status.code_kind(), Code::InvalidArgument);
    }
}
