//! HTTP handlers and the rendering helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::services::submission::{Notice, NoticeLevel};

pub mod books;

/// Alert rendered at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub message: String,
    pub level: &'static str,
}

pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

impl From<&Notice> for Alert {
    fn from(notice: &Notice) -> Self {
        let level = match notice.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "danger",
        };
        Self {
            message: notice.message.clone(),
            level,
        }
    }
}

/// Carries a notice across a redirect.
pub fn send_flash(notice: &Notice) {
    let message = notice.message.clone();
    match notice.level {
        NoticeLevel::Success => FlashMessage::success(message).send(),
        NoticeLevel::Warning => FlashMessage::warning(message).send(),
        NoticeLevel::Error => FlashMessage::error(message).send(),
    }
}

/// Template context with the shared `alerts` and `current_page` entries.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    notices: &[Notice],
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| Alert {
            message: f.content().to_string(),
            level: alert_level_to_str(&f.level()),
        })
        .chain(notices.iter().map(Alert::from))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
