//! Process-wide registry of every message type in this crate.

use once_cell::sync::Lazy;
use vision_proto_runtime::TypeRegistry;

use crate::geometry::{BoundingPoly, NormalizedVertex, Position, Vertex};
use crate::longrunning::Operation;
use crate::product_search::{ProductSearchParams, ProductSearchResults};
use crate::product_search_service::*;
use crate::protobuf::{Any, Empty, FieldMask, Timestamp};
use crate::rpc::Status;

static REGISTRY: Lazy<TypeRegistry> = Lazy::new(|| {
    TypeRegistry::builder()
        .add_message::<Any>()
        .add_message::<Empty>()
        .add_message::<Timestamp>()
        .add_message::<FieldMask>()
        .add_message::<Status>()
        .add_message::<Operation>()
        .add_message::<Vertex>()
        .add_message::<NormalizedVertex>()
        .add_message::<BoundingPoly>()
        .add_message::<Position>()
        .add_message::<ProductSearchParams>()
        .add_message::<ProductSearchResults>()
        .add_message::<Product>()
        .add_message::<ProductSet>()
        .add_message::<ReferenceImage>()
        .add_message::<CreateProductRequest>()
        .add_message::<ListProductsRequest>()
        .add_message::<ListProductsResponse>()
        .add_message::<GetProductRequest>()
        .add_message::<UpdateProductRequest>()
        .add_message::<DeleteProductRequest>()
        .add_message::<CreateProductSetRequest>()
        .add_message::<ListProductSetsRequest>()
        .add_message::<ListProductSetsResponse>()
        .add_message::<GetProductSetRequest>()
        .add_message::<UpdateProductSetRequest>()
        .add_message::<DeleteProductSetRequest>()
        .add_message::<CreateReferenceImageRequest>()
        .add_message::<DeleteReferenceImageRequest>()
        .add_message::<ListReferenceImagesRequest>()
        .add_message::<ListReferenceImagesResponse>()
        .add_message::<GetReferenceImageRequest>()
        .add_message::<AddProductToProductSetRequest>()
        .add_message::<RemoveProductFromProductSetRequest>()
        .add_message::<ListProductsInProductSetRequest>()
        .add_message::<ListProductsInProductSetResponse>()
        .add_message::<ImportProductSetsGcsSource>()
        .add_message::<ImportProductSetsInputConfig>()
        .add_message::<ImportProductSetsRequest>()
        .add_message::<ImportProductSetsResponse>()
        .add_message::<BatchOperationMetadata>()
        .add_message::<ProductSetPurgeConfig>()
        .add_message::<PurgeProductsRequest>()
        .build()
});

/// The registry, built on first use and read-only afterwards.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_types_are_reachable() {
        let registry = registry();
        assert!(registry.contains("google.cloud.vision.v1.Product.KeyValue"));
        assert!(registry.contains("google.cloud.vision.v1.ProductSearchResults.GroupedResult"));
        assert!(registry.contains("google.cloud.vision.v1.ProductSearchResults.ObjectAnnotation"));
        assert_eq!(registry.len(), 47);
    }
}
