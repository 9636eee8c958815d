//! Configuration constants.
//!
//! This module defines the constants used throughout the scraper, including
//! timeouts, redirect limits, and fallback values.

/// Per-request timeout in seconds.
///
/// Covers connect, redirects and body read. It is the only bound on the
/// duration of a scrape.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Maximum number of redirect hops to follow before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Upper bound accepted by `Config::validate` for the timeout.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Upper bound accepted by `Config::validate` for the redirect limit.
pub const MAX_REDIRECTS_LIMIT: usize = 20;

/// Default User-Agent string for HTTP requests.
///
/// Mimics a current desktop Chrome on Windows. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Currency reported when a strategy cannot detect one from the price text.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Number of characters of page text logged when extraction fails.
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default number of URLs the CLI scrapes at the same time.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Status reported as `ScrapeError::AccessDenied`.
pub const HTTP_STATUS_FORBIDDEN: u16 = 403;
/// Status reported as `ScrapeError::ServiceUnavailable`.
pub const HTTP_STATUS_SERVICE_UNAVAILABLE: u16 = 503;
