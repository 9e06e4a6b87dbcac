//! Page-ready work for the new-book form.

use crate::client::BookstoreApi;
use crate::services::reference_data::{load_page_options, load_raw_materials};
use crate::view::{MaterialControl, PageSelectOption, Section};

/// Both reference-data sections of the new-book form.
#[derive(Debug, Default)]
pub struct NewBookSections {
    pub materials: Section<MaterialControl>,
    pub page_options: Section<PageSelectOption>,
}

/// Runs both loaders concurrently. Neither waits on the other and either may
/// finish first; each writes only to its own section.
pub async fn load_new_book_sections<A>(api: &A) -> NewBookSections
where
    A: BookstoreApi + ?Sized,
{
    let mut sections = NewBookSections::default();
    let NewBookSections {
        materials,
        page_options,
    } = &mut sections;

    tokio::join!(
        load_raw_materials(api, materials),
        load_page_options(api, page_options)
    );

    sections
}
