//! Submission of the new-book form.
//!
//! The controller validates the form state, sends the creation request and
//! turns the outcome into a user notice plus, on success, a navigation to the
//! listing. A per-form in-flight gate refuses duplicate submissions while a
//! request for the same form instance is outstanding.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::client::{ApiError, BookstoreApi};
use crate::domain::types::FormToken;
use crate::forms::FormError;
use crate::forms::books::BookFormState;

pub const CREATED_MESSAGE: &str = "Book created successfully";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error: could not reach the bookstore API";
pub const BUSY_MESSAGE: &str = "This form is already being submitted, please wait";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Message for the user-notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Displays notices to the user.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Moves the user to another location, discarding the current form.
pub trait Navigator {
    fn navigate(&mut self, location: &str);
}

/// Collects notices so they can be rendered with the page.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Remembers the requested location so the caller can redirect to it.
impl Navigator for Option<String> {
    fn navigate(&mut self, location: &str) {
        *self = Some(location.to_string());
    }
}

/// Form instances that currently have a request in flight.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    in_flight: Mutex<HashSet<FormToken>>,
}

impl SubmissionGate {
    fn tokens(&self) -> MutexGuard<'_, HashSet<FormToken>> {
        // The set stays consistent even if a holder panicked.
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `token` as in flight, or returns `None` if it already is.
    pub fn try_begin(&self, token: FormToken) -> Option<InFlight<'_>> {
        if self.tokens().insert(token) {
            Some(InFlight { gate: self, token })
        } else {
            None
        }
    }

    pub fn is_in_flight(&self, token: FormToken) -> bool {
        self.tokens().contains(&token)
    }
}

/// Releases its token when dropped, whatever the outcome of the request.
#[derive(Debug)]
pub struct InFlight<'a> {
    gate: &'a SubmissionGate,
    token: FormToken,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.tokens().remove(&self.token);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Created,
    /// Refused by client-side validation; nothing was sent.
    Invalid(FormError),
    /// The API answered with an error status.
    Rejected(ApiError),
    /// The request never completed.
    ConnectionFailed(ApiError),
    /// Another submission of the same form is still in flight; nothing was
    /// sent and the user is moved to the listing.
    Busy,
}

/// Notice text for a refused creation request.
fn rejection_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected {
            detail: Some(detail),
            ..
        } => format!("Error: {detail}"),
        ApiError::Rejected {
            status,
            detail: None,
        } => format!("Could not create the book (HTTP {status})"),
        _ => "Could not create the book".to_string(),
    }
}

/// Handles new-book submissions. One instance serves every form.
#[derive(Debug)]
pub struct SubmissionController {
    gate: SubmissionGate,
    listing_location: String,
}

impl SubmissionController {
    pub fn new(listing_location: impl Into<String>) -> Self {
        Self {
            gate: SubmissionGate::default(),
            listing_location: listing_location.into(),
        }
    }

    pub fn gate(&self) -> &SubmissionGate {
        &self.gate
    }

    pub fn listing_location(&self) -> &str {
        &self.listing_location
    }

    /// Submits the form identified by `token`.
    ///
    /// Validation failures, API errors and connection failures all notify the
    /// user and leave `state` untouched. A successful creation navigates to
    /// the listing, and so does a duplicate refused by the in-flight gate.
    pub async fn submit<A, N, V>(
        &self,
        api: &A,
        token: FormToken,
        state: &BookFormState,
        notifier: &mut N,
        navigator: &mut V,
    ) -> SubmissionOutcome
    where
        A: BookstoreApi + ?Sized,
        N: Notifier + ?Sized,
        V: Navigator + ?Sized,
    {
        let Some(_in_flight) = self.gate.try_begin(token) else {
            log::warn!("Ignoring duplicate submission of form {token}");
            notifier.notify(Notice::warning(BUSY_MESSAGE));
            // The running request owns this form instance; a copy of it must
            // not be handed back resubmittable.
            navigator.navigate(&self.listing_location);
            return SubmissionOutcome::Busy;
        };

        let request = match state.validate() {
            Ok(request) => request,
            Err(err) => {
                notifier.notify(Notice::error(err.to_string()));
                return SubmissionOutcome::Invalid(err);
            }
        };

        log::debug!("Submitting new book: {request:?}");

        match api.create_book(&request).await {
            Ok(()) => {
                log::info!("Created book {}", request.name);
                notifier.notify(Notice::success(CREATED_MESSAGE));
                navigator.navigate(&self.listing_location);
                SubmissionOutcome::Created
            }
            Err(err) if err.is_transport() => {
                log::error!("Failed to reach the bookstore API: {err}");
                notifier.notify(Notice::error(CONNECTION_ERROR_MESSAGE));
                SubmissionOutcome::ConnectionFailed(err)
            }
            Err(err) => {
                log::warn!("Book creation rejected: {err}");
                notifier.notify(Notice::error(rejection_message(&err)));
                SubmissionOutcome::Rejected(err)
            }
        }
    }
}
