//! Book aggregates: the creation request and the listing summary.

use serde::{Deserialize, Serialize};

use crate::domain::material::MaterialRequirement;
use crate::domain::types::{BookId, BookName, PageCount, Price};

/// Validated payload for creating a book. Built once per submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCreationRequest {
    pub name: BookName,
    pub price: Price,
    pub pages_per_book: PageCount,
    pub materials: Vec<MaterialRequirement>,
}

impl BookCreationRequest {
    #[must_use]
    pub fn new(
        name: BookName,
        price: Price,
        pages_per_book: PageCount,
        materials: Vec<MaterialRequirement>,
    ) -> Self {
        Self {
            name,
            price,
            pages_per_book,
            materials,
        }
    }
}

/// Row shown at the book listing location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub name: String,
    pub price: f64,
    pub stock_total: i64,
}
