//! Raw materials and the quantities a book recipe requires.

use serde::{Deserialize, Serialize};

use crate::domain::types::{MaterialId, MaterialName, Quantity};

/// Raw material offered by the bookstore API. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMaterial {
    pub id: MaterialId,
    pub name: MaterialName,
}

impl RawMaterial {
    #[must_use]
    pub fn new(id: MaterialId, name: MaterialName) -> Self {
        Self { id, name }
    }
}

/// How much of a raw material one book consumes.
///
/// Only positive quantities are representable: a material that is not
/// required simply has no requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    pub material_id: MaterialId,
    pub quantity: Quantity,
}

impl MaterialRequirement {
    #[must_use]
    pub fn new(material_id: MaterialId, quantity: Quantity) -> Self {
        Self {
            material_id,
            quantity,
        }
    }
}
