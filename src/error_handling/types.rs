//! Error type definitions.
//!
//! This module defines the errors a scrape can end in, the plain kind enum used
//! for counting them, and initialization errors.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The supplied configuration is out of range.
    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigValidationError),
}

/// A classified scrape failure.
///
/// Every failure crossing the `ProductScraper` boundary is one of these. The
/// display text is meant to be shown to an end user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    /// The transport layer gave up waiting for the site.
    #[error("Request timeout - website took too long to respond")]
    Timeout,

    /// The site answered 403 Forbidden.
    #[error("Access denied (403) - website is blocking automated requests")]
    AccessDenied,

    /// The site answered 503 Service Unavailable.
    #[error("Service unavailable (503) - website may be down or rate limiting requests")]
    ServiceUnavailable,

    /// The page was fetched and parsed but the name or price could not be found.
    #[error(
        "Could not extract product data - the website structure may have changed or access is blocked"
    )]
    ExtractionFailed,

    /// Any other failure, with the underlying cause.
    #[error("Failed to scrape product: {0}")]
    ScrapeFailed(String),
}

impl ScrapeError {
    /// Returns the kind of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Timeout => ErrorKind::Timeout,
            ScrapeError::AccessDenied => ErrorKind::AccessDenied,
            ScrapeError::ServiceUnavailable => ErrorKind::ServiceUnavailable,
            ScrapeError::ExtractionFailed => ErrorKind::ExtractionFailed,
            ScrapeError::ScrapeFailed(_) => ErrorKind::ScrapeFailed,
        }
    }
}

/// Kinds of scrape failure, in classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// See `ScrapeError::Timeout`
    Timeout,
    /// See `ScrapeError::AccessDenied`
    AccessDenied,
    /// See `ScrapeError::ServiceUnavailable`
    ServiceUnavailable,
    /// See `ScrapeError::ExtractionFailed`
    ExtractionFailed,
    /// See `ScrapeError::ScrapeFailed`
    ScrapeFailed,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Short label used in run summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Timeout => "Request timeout",
            ErrorKind::AccessDenied => "Access denied (403)",
            ErrorKind::ServiceUnavailable => "Service unavailable (503)",
            ErrorKind::ExtractionFailed => "Extraction failed",
            ErrorKind::ScrapeFailed => "Scrape failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_as_str() {
        assert_eq!(ErrorKind::Timeout.as_str(), "Request timeout");
        assert_eq!(ErrorKind::AccessDenied.as_str(), "Access denied (403)");
        assert_eq!(ErrorKind::ExtractionFailed.to_string(), "Extraction failed");
    }

    #[test]
    fn test_all_error_kinds_have_string_representation() {
        for kind in ErrorKind::iter() {
            assert!(!kind.as_str().is_empty(), "{:?} should have a label", kind);
        }
    }

    #[test]
    fn test_scrape_error_kind_mapping() {
        assert_eq!(ScrapeError::Timeout.kind(), ErrorKind::Timeout);
        assert_eq!(ScrapeError::AccessDenied.kind(), ErrorKind::AccessDenied);
        assert_eq!(
            ScrapeError::ServiceUnavailable.kind(),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            ScrapeError::ExtractionFailed.kind(),
            ErrorKind::ExtractionFailed
        );
        assert_eq!(
            ScrapeError::ScrapeFailed("dns".into()).kind(),
            ErrorKind::ScrapeFailed
        );
    }

    #[test]
    fn test_scrape_error_messages_are_actionable() {
        assert!(ScrapeError::Timeout.to_string().contains("took too long"));
        assert!(ScrapeError::AccessDenied
            .to_string()
            .contains("blocking automated requests"));
        assert!(ScrapeError::ServiceUnavailable
            .to_string()
            .contains("rate limiting"));
        assert!(ScrapeError::ExtractionFailed
            .to_string()
            .contains("structure may have changed"));
    }

    #[test]
    fn test_scrape_failed_carries_cause() {
        let err = ScrapeError::ScrapeFailed("dns error: no such host".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to scrape product: dns error: no such host"
        );
    }
}
