//! Routes for the book listing and the new-book form.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::client::http::HttpBookstoreApi;
use crate::domain::types::FormToken;
use crate::dto::books::{BookListQuery, NewBookPageData};
use crate::forms::books::{BookFormState, NewBookForm};
use crate::routes::{base_context, redirect, render_template, send_flash};
use crate::services::books::load_book_list;
use crate::services::bootstrap::load_new_book_sections;
use crate::services::submission::{Notice, SubmissionController};

#[get("/")]
pub async fn index(controller: web::Data<SubmissionController>) -> impl Responder {
    redirect(controller.listing_location())
}

#[get("/books")]
/// Show the books known to the bookstore API, optionally filtered by name.
pub async fn show_books(
    query: web::Query<BookListQuery>,
    api: web::Data<HttpBookstoreApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &[], "books");

    match load_book_list(api.get_ref(), query.into_inner()).await {
        Ok(data) => {
            context.insert("books", &data.books);
            context.insert("search_query", &data.search_query);
        }
        Err(err) => {
            log::error!("Failed to load books page: {err}");
            context.insert("load_error", "Could not load books.");
        }
    }

    render_template(&tera, "books/index.html", &context)
}

/// Loads both reference lists and renders the form from `state`.
async fn render_new_book_page(
    api: &HttpBookstoreApi,
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    notices: &[Notice],
    token: FormToken,
    state: &BookFormState,
) -> HttpResponse {
    let sections = load_new_book_sections(api).await;
    let page = NewBookPageData::new(token, state, sections.materials, sections.page_options);

    let mut context = base_context(flash_messages, notices, "new_book");
    context.insert("page", &page);

    render_template(tera, "books/new.html", &context)
}

#[get("/books/new")]
/// Show an empty new-book form with freshly loaded reference data.
pub async fn new_book(
    api: web::Data<HttpBookstoreApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_new_book_page(
        api.get_ref(),
        &tera,
        &flash_messages,
        &[],
        FormToken::new(),
        &BookFormState::default(),
    )
    .await
}

#[post("/books/new")]
/// Submit the new-book form. Success, or a duplicate of a submission that is
/// still running, redirects to the listing; anything else renders the form
/// again with the submitted values and a notice.
pub async fn create_book(
    body: web::Bytes,
    api: web::Data<HttpBookstoreApi>,
    controller: web::Data<SubmissionController>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form: NewBookForm = match serde_html_form::from_bytes(&body) {
        Ok(form) => form,
        Err(err) => {
            log::warn!("Malformed new book form: {err}");
            return HttpResponse::BadRequest().finish();
        }
    };

    let token = form.token().unwrap_or_else(|| {
        log::warn!("New book form posted without a valid token");
        FormToken::new()
    });
    let state = BookFormState::from(form);

    let mut notices: Vec<Notice> = Vec::new();
    let mut location: Option<String> = None;
    controller
        .submit(api.get_ref(), token, &state, &mut notices, &mut location)
        .await;

    if let Some(location) = location {
        notices.iter().for_each(send_flash);
        return redirect(&location);
    }

    render_new_book_page(
        api.get_ref(),
        &tera,
        &flash_messages,
        &notices,
        token,
        &state,
    )
    .await
}
