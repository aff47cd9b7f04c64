//! Cloud Vision v1 product-search bindings.
//!
//! Typed messages for `google.cloud.vision.v1` geometry, product search and
//! the `ProductSearch` service, together with the `google.protobuf`,
//! `google.rpc` and `google.longrunning` types they reference. Every message
//! is a [`vision_proto_runtime::Message`] over a dynamic core.
//!
//! # Example
//!
//! ```
//! use vision_proto_runtime::Message;
//! use vision_proto_v1::Product;
//!
//! let mut product = Product::new();
//! product.set_name("products/1").set_display_name("Shoe");
//!
//! let decoded = Product::decode(&product.encode_to_vec()).unwrap();
//! assert_eq!(decoded.display_name(), "Shoe");
//!
//! let plain = decoded.to_plain_object(false);
//! assert_eq!(plain["name"], "products/1");
//! assert_eq!(plain["productLabelsList"], serde_json::json!([]));
//! ```

#[macro_use]
mod macros;

pub mod geometry;
pub mod longrunning;
pub mod product_search;
pub mod product_search_service;
pub mod protobuf;
pub mod registry;
pub mod rpc;
pub mod service;

pub use geometry::{BoundingPoly, NormalizedVertex, Position, Vertex};
pub use longrunning::Operation;
pub use product_search::{product_search_results, ProductSearchParams, ProductSearchResults};
pub use product_search_service::*;
pub use registry::registry;
pub use rpc::{Code, Status};
pub use service::{
    ProductSearch, ProductSearchClient, ProductSearchServer, RpcError, UnaryChannel, METHODS,
};
