//! In-process client/server round trips through the ProductSearch service.

use std::cell::RefCell;
use std::collections::BTreeMap;

use vision_proto_runtime::Message;
use vision_proto_v1::longrunning::operation::ResultCase;
use vision_proto_v1::product_search_service::{batch_operation_metadata, names};
use vision_proto_v1::protobuf::{Any, Empty, Timestamp};
use vision_proto_v1::service::method_by_name;
use vision_proto_v1::{
    BatchOperationMetadata, Code, CreateProductRequest, DeleteProductRequest, GetProductRequest,
    ImportProductSetsRequest, ImportProductSetsResponse, ListProductsRequest, ListProductsResponse,
    Operation, Product, ProductSearch, ProductSearchClient, ProductSearchServer,
    PurgeProductsRequest, RpcError, Status, UnaryChannel,
};

#[derive(Default)]
struct Catalog {
    products: RefCell<BTreeMap<String, Product>>,
}

impl ProductSearch for Catalog {
    fn create_product(&self, request: CreateProductRequest) -> Result<Product, Status> {
        let mut product = request.product().unwrap_or_default();
        if request.product_id().is_empty() {
            return Err(Status::with_code(Code::InvalidArgument, "product_id is required"));
        }
        let name = format!("{}/products/{}", request.parent(), request.product_id());
        product.set_name(name.clone());
        self.products.borrow_mut().insert(name, product.clone());
        Ok(product)
    }

    fn get_product(&self, request: GetProductRequest) -> Result<Product, Status> {
        self.products
            .borrow()
            .get(request.name())
            .cloned()
            .ok_or_else(|| Status::with_code(Code::NotFound, request.name()))
    }

    fn list_products(&self, request: ListProductsRequest) -> Result<ListProductsResponse, Status> {
        let prefix = format!("{}/", request.parent());
        let mut response = ListProductsResponse::new();
        for (name, product) in self.products.borrow().iter() {
            if name.starts_with(&prefix) {
                response.add_products(product.clone(), None);
            }
        }
        Ok(response)
    }

    fn delete_product(&self, request: DeleteProductRequest) -> Result<Empty, Status> {
        match self.products.borrow_mut().remove(request.name()) {
            Some(_) => Ok(Empty::new()),
            None => Err(Status::with_code(Code::NotFound, request.name())),
        }
    }

    fn import_product_sets(&self, request: ImportProductSetsRequest) -> Result<Operation, Status> {
        let mut metadata = BatchOperationMetadata::new();
        metadata
            .set_state(batch_operation_metadata::State::Successful)
            .set_submit_time(Timestamp::at(10, 0))
            .set_end_time(Timestamp::at(12, 0));
        let mut operation = Operation::new();
        operation
            .set_name(format!("{}/operations/import", request.parent()))
            .set_metadata(Any::pack(&metadata))
            .set_done(true)
            .set_response(Any::pack(&ImportProductSetsResponse::new()));
        Ok(operation)
    }

    fn purge_products(&self, _request: PurgeProductsRequest) -> Result<Operation, Status> {
        let mut operation = Operation::new();
        operation
            .set_done(true)
            .set_error(Status::with_code(Code::FailedPrecondition, "purge disabled"));
        Ok(operation)
    }
}

fn client() -> ProductSearchClient<ProductSearchServer<Catalog>> {
    ProductSearchClient::new(ProductSearchServer::new(Catalog::default()))
}

fn create(
    client: &mut ProductSearchClient<ProductSearchServer<Catalog>>,
    id: &str,
    display_name: &str,
) -> Product {
    let mut product = Product::new();
    product
        .set_display_name(display_name)
        .set_product_category("apparel-v2");
    let mut request = CreateProductRequest::new();
    request
        .set_parent(names::location_path("p", "us-west1"))
        .set_product(product)
        .set_product_id(id);
    client.create_product(request).unwrap()
}

#[test]
fn create_then_get() {
    let mut client = client();
    let created = create(&mut client, "shoe", "Shoe");
    assert_eq!(
        created.name(),
        names::product_path("p", "us-west1", "shoe")
    );

    let mut get = GetProductRequest::new();
    get.set_name(created.name());
    let fetched = client.get_product(get).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.product_category(), "apparel-v2");
}

#[test]
fn list_delete_and_not_found() {
    let mut client = client();
    create(&mut client, "a", "A");
    create(&mut client, "b", "B");

    let mut list = ListProductsRequest::new();
    list.set_parent(names::location_path("p", "us-west1"));
    let listed = client.list_products(list.clone()).unwrap();
    let shown: Vec<String> = listed
        .products()
        .iter()
        .map(|p| p.display_name().to_owned())
        .collect();
    assert_eq!(shown, vec!["A", "B"]);

    let mut delete = DeleteProductRequest::new();
    delete.set_name(names::product_path("p", "us-west1", "a"));
    assert_eq!(client.delete_product(delete.clone()).unwrap(), Empty::new());
    assert_eq!(client.list_products(list).unwrap().products().len(), 1);

    match client.delete_product(delete) {
        Err(RpcError::Status(status)) => {
            assert_eq!(status.code_kind(), Code::NotFound);
            assert_eq!(status.message(), "projects/p/locations/us-west1/products/a");
        }
        other => panic!("expected NOT_FOUND, got {other:?}"),
    }
}

#[test]
fn handler_errors_reach_the_client() {
    let mut client = client();
    let err = client
        .create_product(CreateProductRequest::new())
        .unwrap_err();
    assert_eq!(err.into_status().code_kind(), Code::InvalidArgument);
}

#[test]
fn unimplemented_methods() {
    let mut client = client();
    let err = client
        .get_product_set(Default::default())
        .unwrap_err();
    assert_eq!(err.into_status().code_kind(), Code::Unimplemented);
}

#[test]
fn long_running_import() {
    let mut client = client();
    let mut request = ImportProductSetsRequest::new();
    request.set_parent("projects/p/locations/us-west1");
    let operation = client.import_product_sets(request).unwrap();
    assert!(operation.done());
    assert_eq!(operation.result_case(), ResultCase::Response);

    let method = method_by_name("ImportProductSets").unwrap();
    let long_running = method.long_running.unwrap();
    assert_eq!(
        operation.response().unwrap().type_name(),
        long_running.response_type
    );
    assert_eq!(
        operation.metadata().unwrap().type_name(),
        long_running.metadata_type
    );

    let metadata: BatchOperationMetadata = operation.metadata_as().unwrap().unwrap();
    assert!(metadata.state().is_terminal());
    assert_eq!(metadata.end_time().map(|t| t.seconds()), Some(12));
    let response: Option<ImportProductSetsResponse> = operation.response_as().unwrap();
    assert_eq!(response, Some(ImportProductSetsResponse::new()));
}

#[test]
fn long_running_failure() {
    let mut client = client();
    let operation = client.purge_products(PurgeProductsRequest::new()).unwrap();
    assert_eq!(operation.result_case(), ResultCase::Error);
    assert_eq!(
        operation.error().map(|s| s.code_kind()),
        Some(Code::FailedPrecondition)
    );
    assert_eq!(operation.response_as::<Empty>().unwrap(), None);
}

#[test]
fn raw_channel_bytes() {
    let mut server = ProductSearchServer::new(Catalog::default());
    let mut request = CreateProductRequest::new();
    request.set_parent("projects/p/locations/l").set_product_id("x");
    let reply = server
        .unary(
            "/google.cloud.vision.v1.ProductSearch/CreateProduct",
            request.encode_to_vec(),
        )
        .unwrap();
    let product = Product::decode(&reply).unwrap();
    assert_eq!(product.name(), "projects/p/locations/l/products/x");
    assert_eq!(server.get_ref().products.borrow().len(), 1);
}
