//! Mock API client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::{ApiResult, BookstoreApi};
use crate::domain::book::{BookCreationRequest, BookSummary};
use crate::domain::material::RawMaterial;
use crate::domain::page_option::PageOption;

mock! {
    pub BookstoreApi {}

    #[async_trait]
    impl BookstoreApi for BookstoreApi {
        async fn list_raw_materials(&self) -> ApiResult<Vec<RawMaterial>>;
        async fn list_page_options(&self) -> ApiResult<Vec<PageOption>>;
        async fn create_book(&self, request: &BookCreationRequest) -> ApiResult<()>;
        async fn list_books(&self, search: Option<String>) -> ApiResult<Vec<BookSummary>>;
    }
}
