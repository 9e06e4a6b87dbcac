//! Form definitions backing the back-office routes.

use thiserror::Error;

pub mod books;

#[derive(Debug, Error, PartialEq, Eq)]
/// Client-side validation failures. None of these ever reach the network.
pub enum FormError {
    #[error("Please enter a valid name")]
    InvalidName,

    #[error("Please enter a valid price")]
    InvalidPrice,

    #[error("Please select a valid number of pages")]
    InvalidPageCount,

    /// A whole-number quantity too large to send.
    #[error("Please enter a valid quantity")]
    InvalidQuantity,
}
