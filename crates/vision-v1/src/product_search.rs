//! Product search request parameters and results.

use vision_proto_runtime::{message, FieldDescriptor, Kind, MessageDescriptor};

use crate::geometry::BoundingPoly;
use crate::product_search_service::Product;
use crate::protobuf::Timestamp;

pub(crate) static PRODUCT_SEARCH_PARAMS: MessageDescriptor = MessageDescriptor {
    full_name: "google.cloud.vision.v1.ProductSearchParams",
    fields: &[
        FieldDescriptor::singular(6, "product_set", Kind::String),
        FieldDescriptor::repeated(7, "product_categories", Kind::String),
        FieldDescriptor::singular(8, "filter", Kind::String),
        FieldDescriptor::singular(9, "bounding_poly", Kind::Message(BoundingPoly::descriptor)),
    ],
    oneofs: &[],
};

pub(crate) static PRODUCT_SEARCH_RESULTS: MessageDescriptor = MessageDescriptor {
    full_name: "google.cloud.vision.v1.ProductSearchResults",
    fields: &[
        FieldDescriptor::singular(2, "index_time", Kind::Message(Timestamp::descriptor)),
        FieldDescriptor::repeated(
            5,
            "results",
            Kind::Message(product_search_results::Result::descriptor),
        ),
        FieldDescriptor::repeated(
            6,
            "product_grouped_results",
            Kind::Message(product_search_results::GroupedResult::descriptor),
        ),
    ],
    oneofs: &[],
};

message! {
    /// Parameters for a product search request.
    pub struct ProductSearchParams => PRODUCT_SEARCH_PARAMS
}

impl ProductSearchParams {
    string_field!(6, product_set, set_product_set);
    repeated_string_field!(
        7,
        product_categories,
        set_product_categories,
        add_product_categories
    );
    string_field!(8, filter, set_filter);
    message_field!(
        9,
        bounding_poly,
        set_bounding_poly,
        has_bounding_poly,
        clear_bounding_poly,
        BoundingPoly
    );
}

message! {
    /// Results for a product search request.
    pub struct ProductSearchResults => PRODUCT_SEARCH_RESULTS
}

impl ProductSearchResults {
    message_field!(
        2,
        index_time,
        set_index_time,
        has_index_time,
        clear_index_time,
        Timestamp
    );
    repeated_message_field!(5, results, set_results, add_results, product_search_results::Result);
    repeated_message_field!(
        6,
        product_grouped_results,
        set_product_grouped_results,
        add_product_grouped_results,
        product_search_results::GroupedResult
    );
}

/// Nested types of [`ProductSearchResults`].
pub mod product_search_results {
    use vision_proto_runtime::{message, FieldDescriptor, Kind, MessageDescriptor};

    use super::{BoundingPoly, Product};

    pub(crate) static RESULT: MessageDescriptor = MessageDescriptor {
        full_name: "google.cloud.vision.v1.ProductSearchResults.Result",
        fields: &[
            FieldDescriptor::singular(1, "product", Kind::Message(Product::descriptor)),
            FieldDescriptor::singular(2, "score", Kind::Float),
            FieldDescriptor::singular(3, "image", Kind::String),
        ],
        oneofs: &[],
    };

    pub(crate) static OBJECT_ANNOTATION: MessageDescriptor = MessageDescriptor {
        full_name: "google.cloud.vision.v1.ProductSearchResults.ObjectAnnotation",
        fields: &[
            FieldDescriptor::singular(1, "mid", Kind::String),
            FieldDescriptor::singular(2, "language_code", Kind::String),
            FieldDescriptor::singular(3, "name", Kind::String),
            FieldDescriptor::singular(4, "score", Kind::Float),
        ],
        oneofs: &[],
    };

    pub(crate) static GROUPED_RESULT: MessageDescriptor = MessageDescriptor {
        full_name: "google.cloud.vision.v1.ProductSearchResults.GroupedResult",
        fields: &[
            FieldDescriptor::singular(1, "bounding_poly", Kind::Message(BoundingPoly::descriptor)),
            FieldDescriptor::repeated(2, "results", Kind::Message(Result::descriptor)),
            FieldDescriptor::repeated(
                3,
                "object_annotations",
                Kind::Message(ObjectAnnotation::descriptor),
            ),
        ],
        oneofs: &[],
    };

    message! {
        /// One matching product.
        pub struct Result => RESULT
    }

    impl Result {
        message_field!(1, product, set_product, has_product, clear_product, Product);
        scalar_field!(2, score, set_score, f32);
        string_field!(3, image, set_image);
    }

    message! {
        /// A label detected in the query image region.
        pub struct ObjectAnnotation => OBJECT_ANNOTATION
    }

    impl ObjectAnnotation {
        string_field!(1, mid, set_mid);
        string_field!(2, language_code, set_language_code);
        string_field!(3, name, set_name);
        scalar_field!(4, score, set_score, f32);
    }

    message! {
        /// Matches for one product found in the query image.
        pub struct GroupedResult => GROUPED_RESULT
    }

    impl GroupedResult {
        message_field!(
            1,
            bounding_poly,
            set_bounding_poly,
            has_bounding_poly,
            clear_bounding_poly,
            BoundingPoly
        );
        repeated_message_field!(2, results, set_results, add_results, Result);
        repeated_message_field!(
            3,
            object_annotations,
            set_object_annotations,
            add_object_annotations,
            ObjectAnnotation
        );
    }
}
