//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector, logging instead of failing.
///
/// Selector chains are data, and one bad entry must not abort the remaining
/// candidates, so an unparsable selector is reported and skipped.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Context description for error logging (e.g., "amazon price")
///
/// # Returns
///
/// The parsed `Selector`, or `None` if parsing fails.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Option<Selector> {
    match Selector::parse(selector_str) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' in {}: {}. Skipping selector.",
                selector_str,
                context,
                e
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector_with_fallback("#productTitle", "test").is_some());
        assert!(parse_selector_with_fallback("span[class*=\"price\"]", "test").is_some());
        assert!(parse_selector_with_fallback(".pdp-price strong", "test").is_some());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector_with_fallback("", "test").is_none());
        assert!(parse_selector_with_fallback("div[", "test").is_none());
        assert!(parse_selector_with_fallback(">>>", "test").is_none());
    }
}
