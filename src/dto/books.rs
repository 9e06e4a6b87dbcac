//! Page data for the book templates.

use serde::{Deserialize, Serialize};

use crate::domain::book::BookSummary;
use crate::domain::types::FormToken;
use crate::forms::books::BookFormState;
use crate::view::{MaterialControl, PageSelectOption, Section};

/// Query string accepted by the listing page.
#[derive(Debug, Default, Deserialize)]
pub struct BookListQuery {
    pub q: Option<String>,
}

/// Data required to render the book listing.
#[derive(Debug, Serialize)]
pub struct BookListPageData {
    pub books: Vec<BookSummary>,
    pub search_query: Option<String>,
}

/// Data required to render the new-book form.
#[derive(Debug, Serialize)]
pub struct NewBookPageData {
    pub form_token: FormToken,
    pub name: String,
    pub price: String,
    pub materials: Section<MaterialControl>,
    pub page_options: Section<PageSelectOption>,
}

impl NewBookPageData {
    /// Renders the form state into freshly loaded sections.
    ///
    /// Quantities and the selected page count flow from `state` into the
    /// controls; materials the state does not mention keep their default.
    pub fn new(
        form_token: FormToken,
        state: &BookFormState,
        mut materials: Section<MaterialControl>,
        mut page_options: Section<PageSelectOption>,
    ) -> Self {
        for control in materials.items_mut() {
            if let Some(quantity) = state.quantity_for(control.material_id) {
                control.value = quantity.to_string();
            }
        }

        let selected = state.selected_page_count().map(|count| count.get());
        for option in page_options.items_mut() {
            option.selected = Some(option.value) == selected;
        }

        Self {
            form_token,
            name: state.name.clone(),
            price: state.price.clone(),
            materials,
            page_options,
        }
    }
}
