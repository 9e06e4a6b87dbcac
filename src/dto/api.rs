//! Wire shapes exchanged with the bookstore REST API.
//!
//! The API speaks camelCase JSON. Incoming shapes are converted into domain
//! values through `TryFrom`, so anything that violates a domain invariant is
//! rejected at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::book::{BookCreationRequest, BookSummary};
use crate::domain::material::RawMaterial;
use crate::domain::page_option::PageOption;
use crate::domain::types::{
    BookId, MaterialId, MaterialName, PageCount, PageOptionLabel, TypeConstraintError,
};

/// Item returned by `GET /materials/`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RawMaterialDto {
    pub id: i32,
    pub name: String,
}

impl TryFrom<RawMaterialDto> for RawMaterial {
    type Error = TypeConstraintError;

    fn try_from(dto: RawMaterialDto) -> Result<Self, Self::Error> {
        Ok(RawMaterial::new(
            MaterialId::new(dto.id)?,
            MaterialName::new(dto.name)?,
        ))
    }
}

/// Item returned by `GET /page-options/`: either a bare count or a labelled one.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PageOptionDto {
    Count(i64),
    #[serde(rename_all = "camelCase")]
    Described {
        page_count: i64,
        #[serde(default)]
        label: Option<String>,
    },
}

impl TryFrom<PageOptionDto> for PageOption {
    type Error = TypeConstraintError;

    fn try_from(dto: PageOptionDto) -> Result<Self, Self::Error> {
        match dto {
            PageOptionDto::Count(count) => Ok(PageOption::Bare(PageCount::try_from(count)?)),
            PageOptionDto::Described { page_count, label } => {
                let count = PageCount::try_from(page_count)?;
                // A blank label is the same as no label.
                match label.map(PageOptionLabel::new) {
                    Some(Ok(label)) => Ok(PageOption::Labeled(count, label)),
                    Some(Err(TypeConstraintError::EmptyString)) | None => {
                        Ok(PageOption::Bare(count))
                    }
                    Some(Err(err)) => Err(err),
                }
            }
        }
    }
}

/// One entry of the `materials` array in the create-book body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaterialQuantityDto {
    pub id: i32,
    pub quantity: u32,
}

/// JSON body of `POST /books/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBookPayload {
    pub name: String,
    pub price: f64,
    pub pages_per_book: u32,
    pub materials: Vec<MaterialQuantityDto>,
}

impl From<&BookCreationRequest> for NewBookPayload {
    fn from(request: &BookCreationRequest) -> Self {
        Self {
            name: request.name.as_str().to_string(),
            price: request.price.get(),
            pages_per_book: request.pages_per_book.get(),
            materials: request
                .materials
                .iter()
                .map(|requirement| MaterialQuantityDto {
                    id: requirement.material_id.get(),
                    quantity: requirement.quantity.get(),
                })
                .collect(),
        }
    }
}

/// Error body the API may attach to a non-success response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Parses an error body, treating anything unparseable as an empty body.
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// Human readable detail: strings verbatim, other JSON compacted.
    pub fn detail_message(&self) -> Option<String> {
        match &self.detail {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => {
                let text = text.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Item returned by `GET /books/`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookSummaryDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock_total: i64,
}

impl TryFrom<BookSummaryDto> for BookSummary {
    type Error = TypeConstraintError;

    fn try_from(dto: BookSummaryDto) -> Result<Self, Self::Error> {
        Ok(BookSummary {
            id: BookId::new(dto.id)?,
            name: dto.name,
            price: dto.price,
            stock_total: dto.stock_total,
        })
    }
}
