//! Ordered-fallback field extraction.
//!
//! A field is looked up with a chain of CSS selectors. Selectors are tried
//! strictly in order; for each one only the first matching element is
//! considered, and the first non-empty (trimmed) value ends the search.
//! An element that exists but is empty does not stop the chain: the next
//! selector is tried, since product pages often keep empty placeholders from
//! other page variants.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::utils::parse_selector_with_fallback;

static BODY_SELECTOR: LazyLock<Option<Selector>> =
    LazyLock::new(|| parse_selector_with_fallback("body", "BODY_SELECTOR"));

/// An ordered selector chain, parsed once and reusable across documents.
///
/// Entries that fail to parse are logged and left out, so they match nothing.
#[derive(Debug, Clone)]
pub struct SelectorChain {
    selectors: Vec<(String, Selector)>,
}

impl SelectorChain {
    /// Parses `selectors` in order. `context` labels parse failures in the log.
    pub fn parse<S: AsRef<str>>(selectors: &[S], context: &str) -> Self {
        let selectors = selectors
            .iter()
            .filter_map(|source| {
                let source = source.as_ref();
                parse_selector_with_fallback(source, context)
                    .map(|selector| (source.to_string(), selector))
            })
            .collect();
        Self { selectors }
    }

    /// Number of usable selectors in the chain.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Returns `true` if no selector in the chain parsed.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Trimmed text of the first non-empty match, see [`extract_field`].
    pub fn first_text(&self, document: &Html) -> Option<String> {
        self.first_non_empty(document, "text field", |element| {
            element.text().collect::<String>()
        })
    }

    /// Trimmed `attribute` value of the first non-empty match, see
    /// [`extract_attribute`].
    pub fn first_attribute(&self, document: &Html, attribute: &str) -> Option<String> {
        self.first_non_empty(document, attribute, |element| {
            element.value().attr(attribute).unwrap_or_default().to_string()
        })
    }

    fn first_non_empty<F>(&self, document: &Html, context: &str, value_of: F) -> Option<String>
    where
        F: Fn(ElementRef<'_>) -> String,
    {
        for (source, selector) in &self.selectors {
            let Some(element) = document.select(selector).next() else {
                log::trace!("Selector '{source}' matched nothing");
                continue;
            };
            let value = value_of(element);
            let trimmed = value.trim();
            if trimmed.is_empty() {
                log::trace!("Selector '{source}' matched an empty {context}");
                continue;
            }
            log::trace!("Selector '{source}' matched {context}: {trimmed:?}");
            return Some(trimmed.to_string());
        }
        None
    }
}

/// Returns the trimmed text of the first element matched by the first selector
/// that yields non-empty text.
///
/// Parses `selectors` on every call; use a [`SelectorChain`] to reuse them.
///
/// # Returns
///
/// The text, or `None` if every selector matches nothing or only empty text.
pub fn extract_field<S: AsRef<str>>(document: &Html, selectors: &[S]) -> Option<String> {
    SelectorChain::parse(selectors, "text field").first_text(document)
}

/// Returns the trimmed value of `attribute` on the first element matched by the
/// first selector that yields a non-empty value.
///
/// Used for images, where the value lives in `src` rather than in text.
pub fn extract_attribute<S: AsRef<str>>(
    document: &Html,
    selectors: &[S],
    attribute: &str,
) -> Option<String> {
    SelectorChain::parse(selectors, attribute).first_attribute(document, attribute)
}

/// Returns the text content of `<body>`, or an empty string if there is none.
pub fn body_text(document: &Html) -> String {
    BODY_SELECTOR
        .as_ref()
        .and_then(|selector| document.select(selector).next())
        .map(|body| body.text().collect::<String>())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_first_non_empty_selector_wins() {
        // S1 matches nothing, S2 matches an empty element, S3 matches "Widget"
        let document = doc(
            r#"<html><body>
                <span class="s2">   </span>
                <span class="s3">Widget</span>
            </body></html>"#,
        );
        let selectors = [".s1", ".s2", ".s3"];
        assert_eq!(extract_field(&document, &selectors), Some("Widget".to_string()));
    }

    #[test]
    fn test_earlier_selector_takes_priority() {
        let document = doc(
            r#"<h1 id="productTitle"> Primary </h1><h1 class="a-size-large">Secondary</h1>"#,
        );
        let selectors = ["#productTitle", "h1.a-size-large"];
        assert_eq!(extract_field(&document, &selectors), Some("Primary".to_string()));
    }

    #[test]
    fn test_only_first_element_of_a_selector_is_considered() {
        // The first .price is empty, so the chain moves on even though a later
        // .price element has text
        let document = doc(
            r#"<span class="price"></span><span class="price">₹10</span><span class="amount">₹20</span>"#,
        );
        let selectors = [".price", ".amount"];
        assert_eq!(extract_field(&document, &selectors), Some("₹20".to_string()));
    }

    #[test]
    fn test_nested_text_is_collected() {
        let document = doc(r#"<div class="pdp-price"><strong>Rs. <b>1,299</b></strong></div>"#);
        assert_eq!(
            extract_field(&document, &[".pdp-price strong"]),
            Some("Rs. 1,299".to_string())
        );
    }

    #[test]
    fn test_all_empty_is_none() {
        let document = doc(r#"<p class="a"></p>"#);
        assert_eq!(extract_field(&document, &[".a", ".b"]), None);
        let empty: [&str; 0] = [];
        assert_eq!(extract_field(&document, &empty), None);
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let document = doc(r#"<p class="ok">fine</p>"#);
        assert_eq!(
            extract_field(&document, &["div[", ".ok"]),
            Some("fine".to_string())
        );
    }

    #[test]
    fn test_extract_attribute_skips_missing_and_empty() {
        let document = doc(
            r#"<img id="landingImage">
               <img id="imgBlkFront" src="  ">
               <img class="a-dynamic-image" src=" https://m.media-amazon.com/images/I/1.jpg ">"#,
        );
        let selectors = ["#landingImage", "#imgBlkFront", ".a-dynamic-image"];
        assert_eq!(
            extract_attribute(&document, &selectors, "src"),
            Some("https://m.media-amazon.com/images/I/1.jpg".to_string())
        );
    }

    #[test]
    fn test_extract_attribute_keeps_relative_urls() {
        let document = doc(r#"<div class="product-image"><img src="/img/p.png"></div>"#);
        assert_eq!(
            extract_attribute(&document, &[".product-image img"], "src"),
            Some("/img/p.png".to_string())
        );
    }

    #[test]
    fn test_extract_attribute_none() {
        let document = doc(r#"<img class="x">"#);
        assert_eq!(extract_attribute(&document, &[".x", ".y"], "src"), None);
    }

    #[test]
    fn test_accepts_owned_selectors() {
        let document = doc(r#"<h1>Owned</h1>"#);
        let selectors = vec!["h1".to_string()];
        assert_eq!(extract_field(&document, &selectors), Some("Owned".to_string()));
    }

    #[test]
    fn test_selector_chain_reused_across_documents() {
        let chain = SelectorChain::parse(&["div[", "#productTitle", "h1"], "name");
        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.first_text(&doc(r#"<span id="productTitle">Mouse</span>"#)),
            Some("Mouse".to_string())
        );
        assert_eq!(
            chain.first_text(&doc(r#"<h1>Keyboard</h1>"#)),
            Some("Keyboard".to_string())
        );
        assert_eq!(chain.first_text(&doc("<p>none</p>")), None);
    }

    #[test]
    fn test_selector_chain_all_invalid_is_empty() {
        let chain = SelectorChain::parse(&["div[", ">>>"], "name");
        assert!(chain.is_empty());
        assert_eq!(chain.first_text(&doc("<h1>x</h1>")), None);
    }

    #[test]
    fn test_body_text() {
        let document = doc(r#"<html><body><p>Robot</p><p>Check</p></body></html>"#);
        assert_eq!(body_text(&document), "RobotCheck");
    }
}
