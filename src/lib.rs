#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;
#[cfg(feature = "server")]
use validator::Validate;

#[cfg(feature = "server")]
use crate::client::http::HttpBookstoreApi;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::books::{create_book, index, new_book, show_books};
#[cfg(feature = "server")]
use crate::services::submission::SubmissionController;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod view;

#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Registers every page handler. The submission handler is registered once.
#[cfg(feature = "server")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(show_books)
        .service(new_book)
        .service(create_book);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    server_config
        .validate()
        .map_err(|e| std::io::Error::other(format!("Invalid server config: {e}")))?;

    let api = HttpBookstoreApi::new(server_config.api_config())
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
    let api = web::Data::new(api);

    // One controller, and so one in-flight gate, shared by every worker.
    let controller = web::Data::new(SubmissionController::new(
        server_config.listing_location.clone(),
    ));

    // Keys and stores for flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    let tera = web::Data::new(tera);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving the back-office on {}:{} against {}",
        bind_address.0,
        bind_address.1,
        server_config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(tera.clone())
            .app_data(api.clone())
            .app_data(controller.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
