//! New-book form: the posted payload, the in-memory form state and the
//! material requirement collector.

use std::num::IntErrorKind;

use serde::Deserialize;

use crate::domain::book::BookCreationRequest;
use crate::domain::material::MaterialRequirement;
use crate::domain::types::{BookName, FormToken, MaterialId, PageCount, Price, Quantity};
use crate::forms::FormError;

/// Raw `application/x-www-form-urlencoded` body of the new-book form.
///
/// `material_id` and `quantity` are repeated fields posted in pairs, one
/// pair per rendered material input.
#[derive(Debug, Default, Deserialize)]
pub struct NewBookForm {
    #[serde(default)]
    pub form_token: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub pages_per_book: String,
    #[serde(default)]
    pub material_id: Vec<String>,
    #[serde(default)]
    pub quantity: Vec<String>,
}

impl NewBookForm {
    /// Token of the form instance that was submitted, if it is well formed.
    pub fn token(&self) -> Option<FormToken> {
        self.form_token.parse().ok()
    }
}

/// Quantity typed for one material, kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialField {
    pub material_id: MaterialId,
    pub quantity: String,
}

/// Current values of the new-book form.
///
/// The page is rendered from this state; nothing reads values back out of
/// rendered markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFormState {
    pub name: String,
    pub price: String,
    pub pages_per_book: String,
    pub materials: Vec<MaterialField>,
}

impl From<NewBookForm> for BookFormState {
    fn from(form: NewBookForm) -> Self {
        let materials = form
            .material_id
            .iter()
            .zip(form.quantity)
            .filter_map(|(id, quantity)| {
                id.parse::<MaterialId>()
                    .ok()
                    .map(|material_id| MaterialField {
                        material_id,
                        quantity,
                    })
            })
            .collect();

        Self {
            name: form.name,
            price: form.price,
            pages_per_book: form.pages_per_book,
            materials,
        }
    }
}

impl BookFormState {
    /// Raw quantity entered for `material_id`, if the material has a field.
    pub fn quantity_for(&self, material_id: MaterialId) -> Option<&str> {
        self.materials
            .iter()
            .find(|field| field.material_id == material_id)
            .map(|field| field.quantity.as_str())
    }

    /// Selected page count, when it is a usable number.
    pub fn selected_page_count(&self) -> Option<PageCount> {
        self.pages_per_book.parse().ok()
    }

    /// Validates the fields in order (name, price, page count, quantities),
    /// stopping at the first failure, and assembles the creation request.
    pub fn validate(&self) -> Result<BookCreationRequest, FormError> {
        let name = BookName::new(self.name.as_str()).map_err(|_| FormError::InvalidName)?;
        // An empty price is invalid rather than zero; the input is `required`.
        let price = self
            .price
            .parse::<Price>()
            .map_err(|_| FormError::InvalidPrice)?;
        let pages_per_book = self
            .pages_per_book
            .parse::<PageCount>()
            .map_err(|_| FormError::InvalidPageCount)?;
        if self
            .materials
            .iter()
            .any(|field| quantity_out_of_range(&field.quantity))
        {
            return Err(FormError::InvalidQuantity);
        }

        Ok(BookCreationRequest::new(
            name,
            price,
            pages_per_book,
            collect_material_requirements(self),
        ))
    }
}

/// Lenient quantity coercion: anything that is not a positive integer means
/// the material is not required.
fn parse_quantity(raw: &str) -> Option<Quantity> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|value| Quantity::try_from(value).ok())
}

/// Whole numbers above what a quantity can hold. These are refused instead
/// of being read as "not required".
fn quantity_out_of_range(raw: &str) -> bool {
    match raw.trim().parse::<i64>() {
        Ok(value) => value > i64::from(u32::MAX),
        Err(err) => matches!(err.kind(), IntErrorKind::PosOverflow),
    }
}

/// Material requirements with a positive quantity, in field order.
pub fn collect_material_requirements(state: &BookFormState) -> Vec<MaterialRequirement> {
    state
        .materials
        .iter()
        .filter_map(|field| {
            parse_quantity(&field.quantity)
                .map(|quantity| MaterialRequirement::new(field.material_id, quantity))
        })
        .collect()
}
