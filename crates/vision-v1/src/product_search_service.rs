//! Resources, requests and responses of the `ProductSearch` service.

use vision_proto_runtime::{
    message, EnumDescriptor, EnumValue, FieldDescriptor, Kind, MessageDescriptor, OneofDescriptor,
};

use crate::geometry::BoundingPoly;
use crate::protobuf::{FieldMask, Timestamp};
use crate::rpc::Status;

macro_rules! full_name {
    ($name:literal) => {
        concat!("google.cloud.vision.v1.", $name)
    };
}

// ---------------------------------------------------------------- resources

pub(crate) static PRODUCT: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("Product"),
    fields: &[
        FieldDescriptor::singular(1, "name", Kind::String),
        FieldDescriptor::singular(2, "display_name", Kind::String),
        FieldDescriptor::singular(3, "description", Kind::String),
        FieldDescriptor::singular(4, "product_category", Kind::String),
        FieldDescriptor::repeated(5, "product_labels", Kind::Message(product::KeyValue::descriptor)),
    ],
    oneofs: &[],
};

pub(crate) static PRODUCT_SET: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ProductSet"),
    fields: &[
        FieldDescriptor::singular(1, "name", Kind::String),
        FieldDescriptor::singular(2, "display_name", Kind::String),
        FieldDescriptor::singular(3, "index_time", Kind::Message(Timestamp::descriptor)),
        FieldDescriptor::singular(4, "index_error", Kind::Message(Status::descriptor)),
    ],
    oneofs: &[],
};

pub(crate) static REFERENCE_IMAGE: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ReferenceImage"),
    fields: &[
        FieldDescriptor::singular(1, "name", Kind::String),
        FieldDescriptor::singular(2, "uri", Kind::String),
        FieldDescriptor::repeated(3, "bounding_polys", Kind::Message(BoundingPoly::descriptor)),
    ],
    oneofs: &[],
};

message! {
    /// A product with labels, searchable once it belongs to a product set.
    pub struct Product => PRODUCT
}

impl Product {
    string_field!(1, name, set_name);
    string_field!(2, display_name, set_display_name);
    string_field!(3, description, set_description);
    string_field!(4, product_category, set_product_category);
    repeated_message_field!(
        5,
        product_labels,
        set_product_labels,
        add_product_labels,
        product::KeyValue
    );
}

/// Nested types of [`Product`].
pub mod product {
    use vision_proto_runtime::{message, FieldDescriptor, Kind, MessageDescriptor};

    pub(crate) static KEY_VALUE: MessageDescriptor = MessageDescriptor {
        full_name: full_name!("Product.KeyValue"),
        fields: &[
            FieldDescriptor::singular(1, "key", Kind::String),
            FieldDescriptor::singular(2, "value", Kind::String),
        ],
        oneofs: &[],
    };

    message! {
        /// A product label such as `color: red`.
        pub struct KeyValue => KEY_VALUE
    }

    impl KeyValue {
        string_field!(1, key, set_key);
        string_field!(2, value, set_value);

        pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
            let mut kv = Self::new();
            kv.set_key(key).set_value(value);
            kv
        }
    }
}

message! {
    /// A group of products searched together.
    pub struct ProductSet => PRODUCT_SET
}

impl ProductSet {
    string_field!(1, name, set_name);
    string_field!(2, display_name, set_display_name);
    message_field!(
        3,
        index_time,
        set_index_time,
        has_index_time,
        clear_index_time,
        Timestamp
    );
    message_field!(
        4,
        index_error,
        set_index_error,
        has_index_error,
        clear_index_error,
        Status
    );
}

message! {
    /// An image of a product, optionally with regions of interest.
    pub struct ReferenceImage => REFERENCE_IMAGE
}

impl ReferenceImage {
    string_field!(1, name, set_name);
    string_field!(2, uri, set_uri);
    repeated_message_field!(
        3,
        bounding_polys,
        set_bounding_polys,
        add_bounding_polys,
        BoundingPoly
    );
}

// ----------------------------------------------------------------- products

pub(crate) static CREATE_PRODUCT_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("CreateProductRequest"),
    fields: &[
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(2, "product", Kind::Message(Product::descriptor)),
        FieldDescriptor::singular(3, "product_id", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static LIST_PRODUCTS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListProductsRequest"),
    fields: &[
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(2, "page_size", Kind::Int32),
        FieldDescriptor::singular(3, "page_token", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static LIST_PRODUCTS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListProductsResponse"),
    fields: &[
        FieldDescriptor::repeated(1, "products", Kind::Message(Product::descriptor)),
        FieldDescriptor::singular(2, "next_page_token", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static GET_PRODUCT_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("GetProductRequest"),
    fields: &[FieldDescriptor::singular(1, "name", Kind::String)],
    oneofs: &[],
};

pub(crate) static UPDATE_PRODUCT_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("UpdateProductRequest"),
    fields: &[
        FieldDescriptor::singular(1, "product", Kind::Message(Product::descriptor)),
        FieldDescriptor::singular(2, "update_mask", Kind::Message(FieldMask::descriptor)),
    ],
    oneofs: &[],
};

pub(crate) static DELETE_PRODUCT_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("DeleteProductRequest"),
    fields: &[FieldDescriptor::singular(1, "name", Kind::String)],
    oneofs: &[],
};

message! {
    pub struct CreateProductRequest => CREATE_PRODUCT_REQUEST
}

impl CreateProductRequest {
    string_field!(1, parent, set_parent);
    message_field!(2, product, set_product, has_product, clear_product, Product);
    string_field!(3, product_id, set_product_id);
}

message! {
    pub struct ListProductsRequest => LIST_PRODUCTS_REQUEST
}

impl ListProductsRequest {
    string_field!(1, parent, set_parent);
    scalar_field!(2, page_size, set_page_size, i32);
    string_field!(3, page_token, set_page_token);
}

message! {
    pub struct ListProductsResponse => LIST_PRODUCTS_RESPONSE
}

impl ListProductsResponse {
    repeated_message_field!(1, products, set_products, add_products, Product);
    string_field!(2, next_page_token, set_next_page_token);
}

message! {
    pub struct GetProductRequest => GET_PRODUCT_REQUEST
}

impl GetProductRequest {
    string_field!(1, name, set_name);
}

message! {
    pub struct UpdateProductRequest => UPDATE_PRODUCT_REQUEST
}

impl UpdateProductRequest {
    message_field!(1, product, set_product, has_product, clear_product, Product);
    message_field!(
        2,
        update_mask,
        set_update_mask,
        has_update_mask,
        clear_update_mask,
        FieldMask
    );
}

message! {
    pub struct DeleteProductRequest => DELETE_PRODUCT_REQUEST
}

impl DeleteProductRequest {
    string_field!(1, name, set_name);
}

// ------------------------------------------------------------- product sets

pub(crate) static CREATE_PRODUCT_SET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("CreateProductSetRequest"),
    fields: &[
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(2, "product_set", Kind::Message(ProductSet::descriptor)),
        FieldDescriptor::singular(3, "product_set_id", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static LIST_PRODUCT_SETS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListProductSetsRequest"),
    fields: &[
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(2, "page_size", Kind::Int32),
        FieldDescriptor::singular(3, "page_token", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static LIST_PRODUCT_SETS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListProductSetsResponse"),
    fields: &[
        FieldDescriptor::repeated(1, "product_sets", Kind::Message(ProductSet::descriptor)),
        FieldDescriptor::singular(2, "next_page_token", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static GET_PRODUCT_SET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("GetProductSetRequest"),
    fields: &[FieldDescriptor::singular(1, "name", Kind::String)],
    oneofs: &[],
};

pub(crate) static UPDATE_PRODUCT_SET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("UpdateProductSetRequest"),
    fields: &[
        FieldDescriptor::singular(1, "product_set", Kind::Message(ProductSet::descriptor)),
        FieldDescriptor::singular(2, "update_mask", Kind::Message(FieldMask::descriptor)),
    ],
    oneofs: &[],
};

pub(crate) static DELETE_PRODUCT_SET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("DeleteProductSetRequest"),
    fields: &[FieldDescriptor::singular(1, "name", Kind::String)],
    oneofs: &[],
};

message! {
    pub struct CreateProductSetRequest => CREATE_PRODUCT_SET_REQUEST
}

impl CreateProductSetRequest {
    string_field!(1, parent, set_parent);
    message_field!(
        2,
        product_set,
        set_product_set,
        has_product_set,
        clear_product_set,
        ProductSet
    );
    string_field!(3, product_set_id, set_product_set_id);
}

message! {
    pub struct ListProductSetsRequest => LIST_PRODUCT_SETS_REQUEST
}

impl ListProductSetsRequest {
    string_field!(1, parent, set_parent);
    scalar_field!(2, page_size, set_page_size, i32);
    string_field!(3, page_token, set_page_token);
}

message! {
    pub struct ListProductSetsResponse => LIST_PRODUCT_SETS_RESPONSE
}

impl ListProductSetsResponse {
    repeated_message_field!(1, product_sets, set_product_sets, add_product_sets, ProductSet);
    string_field!(2, next_page_token, set_next_page_token);
}

message! {
    pub struct GetProductSetRequest => GET_PRODUCT_SET_REQUEST
}

impl GetProductSetRequest {
    string_field!(1, name, set_name);
}

message! {
    pub struct UpdateProductSetRequest => UPDATE_PRODUCT_SET_REQUEST
}

impl UpdateProductSetRequest {
    message_field!(
        1,
        product_set,
        set_product_set,
        has_product_set,
        clear_product_set,
        ProductSet
    );
    message_field!(
        2,
        update_mask,
        set_update_mask,
        has_update_mask,
        clear_update_mask,
        FieldMask
    );
}

message! {
    pub struct DeleteProductSetRequest => DELETE_PRODUCT_SET_REQUEST
}

impl DeleteProductSetRequest {
    string_field!(1, name, set_name);
}

// --------------------------------------------------------- reference images

pub(crate) static CREATE_REFERENCE_IMAGE_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("CreateReferenceImageRequest"),
    fields: &[
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(
            2,
            "reference_image",
            Kind::Message(ReferenceImage::descriptor),
        ),
        FieldDescriptor::singular(3, "reference_image_id", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static DELETE_REFERENCE_IMAGE_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("DeleteReferenceImageRequest"),
    fields: &[FieldDescriptor::singular(1, "name", Kind::String)],
    oneofs: &[],
};

pub(crate) static LIST_REFERENCE_IMAGES_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListReferenceImagesRequest"),
    fields: &[
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(2, "page_size", Kind::Int32),
        FieldDescriptor::singular(3, "page_token", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static LIST_REFERENCE_IMAGES_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListReferenceImagesResponse"),
    fields: &[
        FieldDescriptor::repeated(
            1,
            "reference_images",
            Kind::Message(ReferenceImage::descriptor),
        ),
        FieldDescriptor::singular(2, "page_size", Kind::Int32),
        FieldDescriptor::singular(3, "next_page_token", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static GET_REFERENCE_IMAGE_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("GetReferenceImageRequest"),
    fields: &[FieldDescriptor::singular(1, "name", Kind::String)],
    oneofs: &[],
};

message! {
    pub struct CreateReferenceImageRequest => CREATE_REFERENCE_IMAGE_REQUEST
}

impl CreateReferenceImageRequest {
    string_field!(1, parent, set_parent);
    message_field!(
        2,
        reference_image,
        set_reference_image,
        has_reference_image,
        clear_reference_image,
        ReferenceImage
    );
    string_field!(3, reference_image_id, set_reference_image_id);
}

message! {
    pub struct DeleteReferenceImageRequest => DELETE_REFERENCE_IMAGE_REQUEST
}

impl DeleteReferenceImageRequest {
    string_field!(1, name, set_name);
}

message! {
    pub struct ListReferenceImagesRequest => LIST_REFERENCE_IMAGES_REQUEST
}

impl ListReferenceImagesRequest {
    string_field!(1, parent, set_parent);
    scalar_field!(2, page_size, set_page_size, i32);
    string_field!(3, page_token, set_page_token);
}

message! {
    pub struct ListReferenceImagesResponse => LIST_REFERENCE_IMAGES_RESPONSE
}

impl ListReferenceImagesResponse {
    repeated_message_field!(
        1,
        reference_images,
        set_reference_images,
        add_reference_images,
        ReferenceImage
    );
    scalar_field!(2, page_size, set_page_size, i32);
    string_field!(3, next_page_token, set_next_page_token);
}

message! {
    pub struct GetReferenceImageRequest => GET_REFERENCE_IMAGE_REQUEST
}

impl GetReferenceImageRequest {
    string_field!(1, name, set_name);
}

// ------------------------------------------------------ set membership

pub(crate) static ADD_PRODUCT_TO_PRODUCT_SET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("AddProductToProductSetRequest"),
    fields: &[
        FieldDescriptor::singular(1, "name", Kind::String),
        FieldDescriptor::singular(2, "product", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static REMOVE_PRODUCT_FROM_PRODUCT_SET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("RemoveProductFromProductSetRequest"),
    fields: &[
        FieldDescriptor::singular(1, "name", Kind::String),
        FieldDescriptor::singular(2, "product", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static LIST_PRODUCTS_IN_PRODUCT_SET_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListProductsInProductSetRequest"),
    fields: &[
        FieldDescriptor::singular(1, "name", Kind::String),
        FieldDescriptor::singular(2, "page_size", Kind::Int32),
        FieldDescriptor::singular(3, "page_token", Kind::String),
    ],
    oneofs: &[],
};

pub(crate) static LIST_PRODUCTS_IN_PRODUCT_SET_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ListProductsInProductSetResponse"),
    fields: &[
        FieldDescriptor::repeated(1, "products", Kind::Message(Product::descriptor)),
        FieldDescriptor::singular(2, "next_page_token", Kind::String),
    ],
    oneofs: &[],
};

message! {
    pub struct AddProductToProductSetRequest => ADD_PRODUCT_TO_PRODUCT_SET_REQUEST
}

impl AddProductToProductSetRequest {
    string_field!(1, name, set_name);
    string_field!(2, product, set_product);
}

message! {
    pub struct RemoveProductFromProductSetRequest => REMOVE_PRODUCT_FROM_PRODUCT_SET_REQUEST
}

impl RemoveProductFromProductSetRequest {
    string_field!(1, name, set_name);
    string_field!(2, product, set_product);
}

message! {
    pub struct ListProductsInProductSetRequest => LIST_PRODUCTS_IN_PRODUCT_SET_REQUEST
}

impl ListProductsInProductSetRequest {
    string_field!(1, name, set_name);
    scalar_field!(2, page_size, set_page_size, i32);
    string_field!(3, page_token, set_page_token);
}

message! {
    pub struct ListProductsInProductSetResponse => LIST_PRODUCTS_IN_PRODUCT_SET_RESPONSE
}

impl ListProductsInProductSetResponse {
    repeated_message_field!(1, products, set_products, add_products, Product);
    string_field!(2, next_page_token, set_next_page_token);
}

// ------------------------------------------------------------ batch import

pub(crate) static IMPORT_PRODUCT_SETS_GCS_SOURCE: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ImportProductSetsGcsSource"),
    fields: &[FieldDescriptor::singular(1, "csv_file_uri", Kind::String)],
    oneofs: &[],
};

pub(crate) static IMPORT_PRODUCT_SETS_INPUT_CONFIG: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ImportProductSetsInputConfig"),
    fields: &[FieldDescriptor::oneof(
        1,
        "gcs_source",
        Kind::Message(ImportProductSetsGcsSource::descriptor),
        0,
    )],
    oneofs: &[OneofDescriptor {
        name: "source",
        fields: &[1],
    }],
};

pub(crate) static IMPORT_PRODUCT_SETS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ImportProductSetsRequest"),
    fields: &[
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(
            2,
            "input_config",
            Kind::Message(ImportProductSetsInputConfig::descriptor),
        ),
    ],
    oneofs: &[],
};

pub(crate) static IMPORT_PRODUCT_SETS_RESPONSE: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ImportProductSetsResponse"),
    fields: &[
        FieldDescriptor::repeated(
            1,
            "reference_images",
            Kind::Message(ReferenceImage::descriptor),
        ),
        FieldDescriptor::repeated(2, "statuses", Kind::Message(Status::descriptor)),
    ],
    oneofs: &[],
};

pub(crate) static BATCH_OPERATION_STATE: EnumDescriptor = EnumDescriptor {
    full_name: full_name!("BatchOperationMetadata.State"),
    values: &[
        EnumValue {
            name: "STATE_UNSPECIFIED",
            number: 0,
        },
        EnumValue {
            name: "PROCESSING",
            number: 1,
        },
        EnumValue {
            name: "SUCCESSFUL",
            number: 2,
        },
        EnumValue {
            name: "FAILED",
            number: 3,
        },
        EnumValue {
            name: "CANCELLED",
            number: 4,
        },
    ],
};

pub(crate) static BATCH_OPERATION_METADATA: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("BatchOperationMetadata"),
    fields: &[
        FieldDescriptor::singular(1, "state", Kind::Enum(&BATCH_OPERATION_STATE)),
        FieldDescriptor::singular(2, "submit_time", Kind::Message(Timestamp::descriptor)),
        FieldDescriptor::singular(3, "end_time", Kind::Message(Timestamp::descriptor)),
    ],
    oneofs: &[],
};

message! {
    /// Location of a CSV file listing images to import.
    pub struct ImportProductSetsGcsSource => IMPORT_PRODUCT_SETS_GCS_SOURCE
}

impl ImportProductSetsGcsSource {
    string_field!(1, csv_file_uri, set_csv_file_uri);
}

message! {
    pub struct ImportProductSetsInputConfig => IMPORT_PRODUCT_SETS_INPUT_CONFIG
}

impl ImportProductSetsInputConfig {
    message_field!(
        1,
        gcs_source,
        set_gcs_source,
        has_gcs_source,
        clear_gcs_source,
        ImportProductSetsGcsSource
    );

    pub fn source_case(&self) -> import_product_sets_input_config::SourceCase {
        match self.inner.which_oneof(0) {
            1 => import_product_sets_input_config::SourceCase::GcsSource,
            _ => import_product_sets_input_config::SourceCase::NotSet,
        }
    }
}

pub mod import_product_sets_input_config {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SourceCase {
        NotSet = 0,
        GcsSource = 1,
    }
}

message! {
    pub struct ImportProductSetsRequest => IMPORT_PRODUCT_SETS_REQUEST
}

impl ImportProductSetsRequest {
    string_field!(1, parent, set_parent);
    message_field!(
        2,
        input_config,
        set_input_config,
        has_input_config,
        clear_input_config,
        ImportProductSetsInputConfig
    );
}

message! {
    /// Final result of an `ImportProductSets` operation.
    ///
    /// `statuses` lines up with the rows of the input CSV.
    pub struct ImportProductSetsResponse => IMPORT_PRODUCT_SETS_RESPONSE
}

impl ImportProductSetsResponse {
    repeated_message_field!(
        1,
        reference_images,
        set_reference_images,
        add_reference_images,
        ReferenceImage
    );
    repeated_message_field!(2, statuses, set_statuses, add_statuses, Status);
}

message! {
    /// Progress metadata of batch operations.
    pub struct BatchOperationMetadata => BATCH_OPERATION_METADATA
}

impl BatchOperationMetadata {
    enum_field!(1, state, set_state, batch_operation_metadata::State);
    message_field!(
        2,
        submit_time,
        set_submit_time,
        has_submit_time,
        clear_submit_time,
        Timestamp
    );
    message_field!(
        3,
        end_time,
        set_end_time,
        has_end_time,
        clear_end_time,
        Timestamp
    );
}

/// Nested types of [`BatchOperationMetadata`].
pub mod batch_operation_metadata {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[repr(i32)]
    pub enum State {
        #[default]
        Unspecified = 0,
        Processing = 1,
        Successful = 2,
        Failed = 3,
        Cancelled = 4,
    }

    impl State {
        pub fn from_i32(value: i32) -> Option<Self> {
            match value {
                0 => Some(State::Unspecified),
                1 => Some(State::Processing),
                2 => Some(State::Successful),
                3 => Some(State::Failed),
                4 => Some(State::Cancelled),
                _ => None,
            }
        }

        /// Schema name of the value, e.g. `PROCESSING`.
        pub fn as_str_name(&self) -> &'static str {
            super::BATCH_OPERATION_STATE
                .value_name(*self as i32)
                .unwrap_or("STATE_UNSPECIFIED")
        }

        /// `true` once the operation can no longer change state.
        pub fn is_terminal(&self) -> bool {
            matches!(self, State::Successful | State::Failed | State::Cancelled)
        }
    }
}

// ------------------------------------------------------------------- purge

pub(crate) static PRODUCT_SET_PURGE_CONFIG: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("ProductSetPurgeConfig"),
    fields: &[FieldDescriptor::singular(1, "product_set_id", Kind::String)],
    oneofs: &[],
};

pub(crate) static PURGE_PRODUCTS_REQUEST: MessageDescriptor = MessageDescriptor {
    full_name: full_name!("PurgeProductsRequest"),
    fields: &[
        FieldDescriptor::oneof(
            2,
            "product_set_purge_config",
            Kind::Message(ProductSetPurgeConfig::descriptor),
            0,
        ),
        FieldDescriptor::oneof(3, "delete_orphan_products", Kind::Bool, 0),
        FieldDescriptor::singular(1, "parent", Kind::String),
        FieldDescriptor::singular(4, "force", Kind::Bool),
    ],
    oneofs: &[OneofDescriptor {
        name: "target",
        fields: &[2, 3],
    }],
};

message! {
    /// Products of this set are deleted by a purge.
    pub struct ProductSetPurgeConfig => PRODUCT_SET_PURGE_CONFIG
}

impl ProductSetPurgeConfig {
    string_field!(1, product_set_id, set_product_set_id);
}

message! {
    /// Request to delete many products at once.
    ///
    /// The `target` oneof picks either the products of one set or every
    /// product that belongs to no set. `force` must be `true` for the purge
    /// to run.
    pub struct PurgeProductsRequest => PURGE_PRODUCTS_REQUEST
}

impl PurgeProductsRequest {
    string_field!(1, parent, set_parent);
    message_field!(
        2,
        product_set_purge_config,
        set_product_set_purge_config,
        has_product_set_purge_config,
        clear_product_set_purge_config,
        ProductSetPurgeConfig
    );
    scalar_field!(3, delete_orphan_products, set_delete_orphan_products, bool);
    scalar_field!(4, force, set_force, bool);

    pub fn has_delete_orphan_products(&self) -> bool {
        self.inner.has_field(3)
    }

    pub fn target_case(&self) -> purge_products_request::TargetCase {
        match self.inner.which_oneof(0) {
            2 => purge_products_request::TargetCase::ProductSetPurgeConfig,
            3 => purge_products_request::TargetCase::DeleteOrphanProducts,
            _ => purge_products_request::TargetCase::NotSet,
        }
    }

    pub fn clear_target(&mut self) -> &mut Self {
        self.inner.clear_oneof(0);
        self
    }
}

pub mod purge_products_request {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TargetCase {
        NotSet = 0,
        ProductSetPurgeConfig = 2,
        DeleteOrphanProducts = 3,
    }
}

/// Resource name builders for the `projects/*/locations/*` hierarchy.
pub mod names {
    pub fn location_path(project: &str, location: &str) -> String {
        format!("projects/{project}/locations/{location}")
    }

    pub fn product_path(project: &str, location: &str, product: &str) -> String {
        format!("projects/{project}/locations/{location}/products/{product}")
    }

    pub fn product_set_path(project: &str, location: &str, product_set: &str) -> String {
        format!("projects/{project}/locations/{location}/productSets/{product_set}")
    }

    pub fn reference_image_path(
        project: &str,
        location: &str,
        product: &str,
        reference_image: &str,
    ) -> String {
        format!(
            "{}/referenceImages/{reference_image}",
            product_path(project, location, product)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vision_proto_runtime::Message;

    #[test]
    fn product_labels_round_trip() {
        let mut product = Product::new();
        product
            .set_name("products/1")
            .set_display_name("Shoe")
            .set_product_category("apparel-v2")
            .add_product_labels(product::KeyValue::pair("color", "red"), None)
            .add_product_labels(product::KeyValue::pair("style", "sneaker"), None);
        let decoded = Product::decode(&product.encode_to_vec()).unwrap();
        assert_eq!(decoded, product);
        let labels = decoded.product_labels();
        assert_eq!(labels[1].key(), "style");
        assert_eq!(
            product::KeyValue::full_name(),
            "google.cloud.vision.v1.Product.KeyValue"
        );
    }

    #[test]
    fn purge_target_is_exclusive() {
        let mut request = PurgeProductsRequest::new();
        request.set_parent("projects/p/locations/l").set_force(true);
        assert_eq!(request.target_case(), purge_products_request::TargetCase::NotSet);

        let mut config = ProductSetPurgeConfig::new();
        config.set_product_set_id("summer");
        request.set_product_set_purge_config(config);
        assert_eq!(
            request.target_case(),
            purge_products_request::TargetCase::ProductSetPurgeConfig
        );

        request.set_delete_orphan_products(true);
        assert_eq!(
            request.target_case(),
            purge_products_request::TargetCase::DeleteOrphanProducts
        );
        assert!(!request.has_product_set_purge_config());
        assert_eq!(request.parent(), "projects/p/locations/l");
        assert!(request.force());
    }

    #[test]
    fn purge_encodes_fields_in_number_order() {
        let mut request = PurgeProductsRequest::new();
        request
            .set_force(true)
            .set_delete_orphan_products(false)
            .set_parent("p");
        assert_eq!(
            request.encode_to_vec(),
            vec![0x0a, 0x01, b'p', 0x18, 0x00, 0x20, 0x01]
        );
        let decoded = PurgeProductsRequest::decode(&request.encode_to_vec()).unwrap();
        assert!(decoded.has_delete_orphan_products());
        assert!(!decoded.delete_orphan_products());
    }

    #[test]
    fn batch_state() {
        let mut metadata = BatchOperationMetadata::new();
        assert_eq!(metadata.state(), batch_operation_metadata::State::Unspecified);
        metadata.set_state(batch_operation_metadata::State::Processing);
        assert_eq!(metadata.encode_to_vec(), vec![0x08, 0x01]);
        assert_eq!(metadata.state().as_str_name(), "PROCESSING");
        assert!(!metadata.state().is_terminal());

        let decoded = BatchOperationMetadata::decode(&[0x08, 0x09]).unwrap();
        assert_eq!(decoded.state(), batch_operation_metadata::State::Unspecified);
        assert_eq!(decoded.as_dynamic().get_enum(1), 9);
    }

    #[test]
    fn import_source_case() {
        let mut config = ImportProductSetsInputConfig::new();
        assert_eq!(
            config.source_case(),
            import_product_sets_input_config::SourceCase::NotSet
        );
        let mut source = ImportProductSetsGcsSource::new();
        source.set_csv_file_uri("gs://bucket/products.csv");
        config.set_gcs_source(source);
        assert_eq!(
            config.source_case(),
            import_product_sets_input_config::SourceCase::GcsSource
        );
    }

    #[test]
    fn resource_names() {
        assert_eq!(
            names::reference_image_path("p", "us-west1", "shoe", "img1"),
            "projects/p/locations/us-west1/products/shoe/referenceImages/img1"
        );
        assert_eq!(
            names::product_set_path("p", "us-west1", "s"),
            "projects/p/locations/us-west1/productSets/s"
        );
        assert_eq!(names::location_path("p", "l"), "projects/p/locations/l");
    }
}
