//! Batch-run helpers.
//!
//! This module provides URL validation for batch input and summary printing
//! used by the `run` module and the binary.

pub mod statistics;
pub mod url;

// Re-export public API
pub use statistics::{print_error_statistics, print_simple_summary};
pub use url::{is_skippable_line, validate_and_normalize_url};
