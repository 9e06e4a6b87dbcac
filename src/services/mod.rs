//! Use cases behind the back-office pages.

use thiserror::Error;

use crate::client::ApiError;

pub mod books;
pub mod bootstrap;
pub mod reference_data;
pub mod submission;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("bookstore API error: {0}")]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
