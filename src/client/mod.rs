//! Access to the bookstore REST API.
//!
//! Services depend on the [`BookstoreApi`] trait only; [`http::HttpBookstoreApi`]
//! is the production implementation and `mock` provides a mockall double.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{BookCreationRequest, BookSummary};
use crate::domain::material::RawMaterial;
use crate::domain::page_option::PageOption;

pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub const MATERIALS_PATH: &str = "/materials/";
pub const PAGE_OPTIONS_PATH: &str = "/page-options/";
pub const BOOKS_PATH: &str = "/books/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// A read request answered with a non-success status.
    #[error("request failed with HTTP status {status}")]
    Fetch { status: u16 },

    /// The response body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// The request never completed.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    /// The API refused to create a resource.
    #[error("request rejected with HTTP status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Whether the request failed before any HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Connection(_) | ApiError::Timeout)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait BookstoreApi: Send + Sync {
    /// `GET /materials/`, items in server order.
    async fn list_raw_materials(&self) -> ApiResult<Vec<RawMaterial>>;
    /// `GET /page-options/`, items in server order.
    async fn list_page_options(&self) -> ApiResult<Vec<PageOption>>;
    /// `POST /books/`. The success body is ignored.
    async fn create_book(&self, request: &BookCreationRequest) -> ApiResult<()>;
    /// `GET /books/?q=`, optionally filtered by name.
    async fn list_books(&self, search: Option<String>) -> ApiResult<Vec<BookSummary>>;
}
