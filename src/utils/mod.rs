//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Text sanitization for log previews

pub mod sanitize;
mod selector;

pub use sanitize::text_preview;
pub use selector::parse_selector_with_fallback;
