mod common;

use std::time::Duration;

use libreria_backoffice::client::http::HttpBookstoreApi;
use libreria_backoffice::client::{ApiError, BookstoreApi};
use libreria_backoffice::domain::book::BookCreationRequest;
use libreria_backoffice::domain::material::MaterialRequirement;
use libreria_backoffice::domain::page_option::PageOption;
use libreria_backoffice::domain::types::{BookName, MaterialId, PageCount, Price, Quantity};
use libreria_backoffice::models::config::ApiConfig;
use serde_json::json;

use common::{FakeBackend, unreachable_base_url};

fn client(base_url: &str, timeout: Duration) -> HttpBookstoreApi {
    HttpBookstoreApi::new(ApiConfig::new(base_url, timeout)).unwrap()
}

fn request() -> BookCreationRequest {
    BookCreationRequest::new(
        BookName::new("Dune").unwrap(),
        Price::new(12.5).unwrap(),
        PageCount::new(200).unwrap(),
        vec![MaterialRequirement::new(
            MaterialId::new(1).unwrap(),
            Quantity::new(3).unwrap(),
        )],
    )
}

#[actix_web::test]
async fn lists_reference_data_in_server_order() {
    let backend = FakeBackend::start();
    backend.set_materials(
        200,
        json!([{"id": 7, "name": "Paper"}, {"id": 2, "name": "Ink"}]),
    );
    backend.set_page_options(200, json!([100, {"pageCount": 300, "label": "Hardcover"}]));
    let api = client(&backend.base_url, Duration::from_secs(5));

    let materials = api.list_raw_materials().await.unwrap();
    let names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Paper", "Ink"]);

    let options = api.list_page_options().await.unwrap();
    assert!(matches!(options[0], PageOption::Bare(count) if count.get() == 100));
    assert_eq!(options[1].to_string(), "300 pages — Hardcover");
}

#[actix_web::test]
async fn non_success_status_is_a_fetch_error() {
    let backend = FakeBackend::start();
    backend.set_materials(503, json!({"detail": "maintenance"}));
    let api = client(&backend.base_url, Duration::from_secs(5));

    let result = api.list_raw_materials().await;

    assert_eq!(result, Err(ApiError::Fetch { status: 503 }));
}

#[actix_web::test]
async fn non_array_body_is_a_shape_error() {
    let backend = FakeBackend::start();
    backend.set_materials_raw(200, r#"{"results": []}"#);
    let api = client(&backend.base_url, Duration::from_secs(5));

    let result = api.list_raw_materials().await;

    assert!(matches!(result, Err(ApiError::Shape(_))));
}

#[actix_web::test]
async fn refused_connection_is_a_transport_error() {
    let api = client(&unreachable_base_url(), Duration::from_secs(5));

    let err = api.list_page_options().await.unwrap_err();

    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[actix_web::test]
async fn slow_api_times_out() {
    let backend = FakeBackend::start();
    backend.delay_materials(Duration::from_millis(1500));
    let api = client(&backend.base_url, Duration::from_millis(200));

    let result = api.list_raw_materials().await;

    assert_eq!(result, Err(ApiError::Timeout));
}

#[actix_web::test]
async fn create_book_posts_camel_case_json() {
    let backend = FakeBackend::start();
    let api = client(&backend.base_url, Duration::from_secs(5));

    api.create_book(&request()).await.unwrap();

    let posts = backend.posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        posts[0].body,
        json!({
            "name": "Dune",
            "price": 12.5,
            "pagesPerBook": 200,
            "materials": [{"id": 1, "quantity": 3}],
        })
    );
}

#[actix_web::test]
async fn rejection_carries_the_detail() {
    let backend = FakeBackend::start();
    backend.set_create_book(400, json!({"detail": "duplicate name"}));
    let api = client(&backend.base_url, Duration::from_secs(5));

    let result = api.create_book(&request()).await;

    assert_eq!(
        result,
        Err(ApiError::Rejected {
            status: 400,
            detail: Some("duplicate name".to_string()),
        })
    );
}

#[actix_web::test]
async fn unparseable_rejection_body_has_no_detail() {
    let backend = FakeBackend::start();
    backend.set_create_book_raw(500, "<html>Internal Server Error</html>");
    let api = client(&backend.base_url, Duration::from_secs(5));

    let result = api.create_book(&request()).await;

    assert_eq!(
        result,
        Err(ApiError::Rejected {
            status: 500,
            detail: None,
        })
    );
}

#[actix_web::test]
async fn search_term_is_trimmed_and_forwarded() {
    let backend = FakeBackend::start();
    backend.set_books(
        200,
        json!([{"id": 4, "name": "Dune", "price": 12.5, "stockTotal": 8}]),
    );
    let api = client(&backend.base_url, Duration::from_secs(5));

    let books = api.list_books(Some("  dune ".to_string())).await.unwrap();
    api.list_books(Some("   ".to_string())).await.unwrap();

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].stock_total, 8);
    let queries = backend.book_queries();
    assert_eq!(queries[0].get("q").map(String::as_str), Some("dune"));
    assert!(queries[1].get("q").is_none());
}
