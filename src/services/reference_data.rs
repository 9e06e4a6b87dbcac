//! Reference data loaders for the new-book form.
//!
//! Each loader owns one [`Section`] exclusively. Failures are logged and
//! rendered in place; they never escape the loader.

use std::future::Future;

use crate::client::{ApiResult, BookstoreApi};
use crate::domain::material::RawMaterial;
use crate::domain::page_option::PageOption;
use crate::view::{MaterialControl, PageSelectOption, Section};

/// Texts shown by a section while loading and after a failure.
#[derive(Debug, Clone, Copy)]
pub struct CollectionMessages {
    /// Collection name used in diagnostics.
    pub collection: &'static str,
    pub loading: &'static str,
    pub failed: &'static str,
}

pub const MATERIALS_MESSAGES: CollectionMessages = CollectionMessages {
    collection: "raw materials",
    loading: "Loading raw materials...",
    failed: "Could not load raw materials.",
};

pub const PAGE_OPTIONS_MESSAGES: CollectionMessages = CollectionMessages {
    collection: "page options",
    loading: "Loading...",
    failed: "Could not load page options.",
};

/// Loads a collection into `target`.
///
/// The loading placeholder is set before `fetch` is first polled. On success
/// the section is cleared and one control per item is appended in the order
/// the API returned them.
pub async fn load_collection<T, C, F, R>(
    target: &mut Section<C>,
    messages: &CollectionMessages,
    fetch: F,
    render: R,
) where
    F: Future<Output = ApiResult<Vec<T>>>,
    R: Fn(&T) -> C,
{
    target.begin_loading(messages.loading);

    match fetch.await {
        Ok(items) => {
            target.clear();
            for item in &items {
                target.push(render(item));
            }
        }
        Err(err) => {
            log::error!("Failed to load {}: {err}", messages.collection);
            target.fail(messages.failed);
        }
    }
}

/// Quantity input tagged with the material id, starting at zero.
pub fn render_material_control(material: &RawMaterial) -> MaterialControl {
    MaterialControl {
        material_id: material.id,
        label: material.name.to_string(),
        value: "0".to_string(),
    }
}

/// Select option whose value is always the bare page count.
pub fn render_page_option(option: &PageOption) -> PageSelectOption {
    PageSelectOption {
        value: option.page_count().get(),
        text: option.to_string(),
        selected: false,
    }
}

pub async fn load_raw_materials<A>(api: &A, target: &mut Section<MaterialControl>)
where
    A: BookstoreApi + ?Sized,
{
    load_collection(
        target,
        &MATERIALS_MESSAGES,
        api.list_raw_materials(),
        render_material_control,
    )
    .await;
}

pub async fn load_page_options<A>(api: &A, target: &mut Section<PageSelectOption>)
where
    A: BookstoreApi + ?Sized,
{
    load_collection(
        target,
        &PAGE_OPTIONS_MESSAGES,
        api.list_page_options(),
        render_page_option,
    )
    .await;
}
