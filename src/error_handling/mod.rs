//! Error handling and scrape statistics.
//!
//! This module provides:
//! - The `ScrapeError` kinds every scrape failure is normalized to
//! - Classification of transport errors and HTTP statuses
//! - Thread-safe outcome counters for batch runs
//!
//! Classification priority is: timeout, access denied (403), service
//! unavailable (503), extraction failure, then everything else as a generic
//! scrape failure carrying its cause.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{classify_reqwest_error, classify_status};
pub use stats::ScrapeStats;
pub use types::{ErrorKind, InitializationError, ScrapeError};
