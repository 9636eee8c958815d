//! Error categorization.
//!
//! This module turns transport failures and HTTP statuses into `ScrapeError`s.
//! It is the only place raw `reqwest` errors are inspected.

use std::error::Error as StdError;
use std::io;

use reqwest::StatusCode;

use super::types::ScrapeError;
use crate::config::{HTTP_STATUS_FORBIDDEN, HTTP_STATUS_SERVICE_UNAVAILABLE};

/// Classifies an HTTP response status.
///
/// Statuses below 500 are normal responses whose body is still parsed, with the
/// exception of 403, which always means the site is refusing automated clients.
///
/// # Returns
///
/// `None` if the response should be parsed, or the classified error otherwise.
pub fn classify_status(status: StatusCode) -> Option<ScrapeError> {
    match status.as_u16() {
        HTTP_STATUS_FORBIDDEN => Some(ScrapeError::AccessDenied),
        HTTP_STATUS_SERVICE_UNAVAILABLE => Some(ScrapeError::ServiceUnavailable),
        _ if status.is_server_error() => Some(ScrapeError::ScrapeFailed(format!(
            "Request failed with status code {status}"
        ))),
        // No standard status class above 5xx
        code if code >= 600 => Some(ScrapeError::ScrapeFailed(format!(
            "Request failed with status code {code}"
        ))),
        _ => None,
    }
}

/// Categorizes a `reqwest::Error` into a `ScrapeError`.
///
/// Timeouts are detected both through `reqwest`'s own flag and through an
/// `io::Error` of kind `TimedOut` or `ConnectionAborted` anywhere in the source
/// chain. Status-carrying errors reuse `classify_status`. Everything else is
/// wrapped as `ScrapeFailed` with the full cause chain as its message.
pub fn classify_reqwest_error(error: &reqwest::Error) -> ScrapeError {
    if error.is_timeout() || has_timeout_source(error) {
        return ScrapeError::Timeout;
    }

    if let Some(status) = error.status() {
        if let Some(classified) = classify_status(status) {
            return classified;
        }
    }

    ScrapeError::ScrapeFailed(error_chain_message(error))
}

impl From<reqwest::Error> for ScrapeError {
    fn from(error: reqwest::Error) -> Self {
        classify_reqwest_error(&error)
    }
}

impl From<url::ParseError> for ScrapeError {
    fn from(error: url::ParseError) -> Self {
        ScrapeError::ScrapeFailed(format!("Invalid URL: {error}"))
    }
}

fn has_timeout_source(error: &(dyn StdError + 'static)) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            if matches!(
                io_error.kind(),
                io::ErrorKind::TimedOut | io::ErrorKind::ConnectionAborted
            ) {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

/// Joins an error and its sources into one message.
///
/// `reqwest` keeps the useful part (DNS failure, refused connection) in the
/// source chain, so the top-level message alone is rarely actionable.
fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
