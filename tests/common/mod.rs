//! In-process stand-in for the bookstore REST API.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;

#[derive(Clone)]
struct Canned {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

impl Canned {
    fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }
}

/// A request body received by `POST /books/`.
#[derive(Clone, Debug)]
pub struct RecordedPost {
    pub content_type: Option<String>,
    pub body: Value,
}

struct FakeState {
    materials: Mutex<Canned>,
    page_options: Mutex<Canned>,
    create_book: Mutex<Canned>,
    books: Mutex<Canned>,
    posts: Mutex<Vec<RecordedPost>>,
    book_queries: Mutex<Vec<HashMap<String, String>>>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            materials: Mutex::new(Canned::json(200, Value::Array(Vec::new()))),
            page_options: Mutex::new(Canned::json(200, Value::Array(Vec::new()))),
            create_book: Mutex::new(Canned::json(201, serde_json::json!({"id": 1}))),
            books: Mutex::new(Canned::json(200, Value::Array(Vec::new()))),
            posts: Mutex::new(Vec::new()),
            book_queries: Mutex::new(Vec::new()),
        }
    }
}

async fn reply(slot: &Mutex<Canned>) -> HttpResponse {
    let canned = slot.lock().unwrap().clone();
    if let Some(delay) = canned.delay {
        actix_web::rt::time::sleep(delay).await;
    }
    HttpResponse::build(StatusCode::from_u16(canned.status).unwrap())
        .content_type("application/json")
        .body(canned.body)
}

async fn materials(state: web::Data<FakeState>) -> HttpResponse {
    reply(&state.materials).await
}

async fn page_options(state: web::Data<FakeState>) -> HttpResponse {
    reply(&state.page_options).await
}

async fn create_book(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<FakeState>,
) -> HttpResponse {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .posts
        .lock()
        .unwrap()
        .push(RecordedPost { content_type, body });
    reply(&state.create_book).await
}

async fn list_books(
    query: web::Query<HashMap<String, String>>,
    state: web::Data<FakeState>,
) -> HttpResponse {
    state.book_queries.lock().unwrap().push(query.into_inner());
    reply(&state.books).await
}

/// Fake bookstore API listening on an ephemeral local port.
pub struct FakeBackend {
    pub base_url: String,
    state: web::Data<FakeState>,
}

impl FakeBackend {
    /// Must be called from inside an actix runtime (e.g. `#[actix_web::test]`).
    pub fn start() -> Self {
        let state = web::Data::new(FakeState::default());
        let app_state = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .route("/materials/", web::get().to(materials))
                .route("/page-options/", web::get().to(page_options))
                .route("/books/", web::post().to(create_book))
                .route("/books/", web::get().to(list_books))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind fake backend");

        let address = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{address}"),
            state,
        }
    }

    pub fn set_materials(&self, status: u16, body: Value) {
        *self.state.materials.lock().unwrap() = Canned::json(status, body);
    }

    pub fn set_materials_raw(&self, status: u16, body: &str) {
        *self.state.materials.lock().unwrap() = Canned {
            status,
            body: body.to_string(),
            delay: None,
        };
    }

    pub fn set_page_options(&self, status: u16, body: Value) {
        *self.state.page_options.lock().unwrap() = Canned::json(status, body);
    }

    pub fn set_create_book(&self, status: u16, body: Value) {
        *self.state.create_book.lock().unwrap() = Canned::json(status, body);
    }

    pub fn set_create_book_raw(&self, status: u16, body: &str) {
        *self.state.create_book.lock().unwrap() = Canned {
            status,
            body: body.to_string(),
            delay: None,
        };
    }

    pub fn set_books(&self, status: u16, body: Value) {
        *self.state.books.lock().unwrap() = Canned::json(status, body);
    }

    /// Makes `GET /materials/` answer only after `delay`.
    pub fn delay_materials(&self, delay: Duration) {
        self.state.materials.lock().unwrap().delay = Some(delay);
    }

    /// Makes `POST /books/` answer only after `delay`.
    pub fn delay_create_book(&self, delay: Duration) {
        self.state.create_book.lock().unwrap().delay = Some(delay);
    }

    pub fn posts(&self) -> Vec<RecordedPost> {
        self.state.posts.lock().unwrap().clone()
    }

    pub fn book_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.book_queries.lock().unwrap().clone()
    }
}

/// Base URL on which nothing is listening, for connection-refused cases.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind probe port");
    let address = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{address}")
}
