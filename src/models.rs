//! Product record produced by a scrape.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CURRENCY;

/// Normalized product data extracted from a product page.
///
/// Serializes with camelCase field names (`productName`, `currentPrice`,
/// `currencyCode`, `productImageUrl`), which is the shape the price-tracking
/// store persists.
///
/// A record is valid only when both `product_name` and `current_price` are
/// present. `ProductScraper` never returns an invalid record; records built by
/// hand can be checked with [`ProductRecord::is_valid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Product title, trimmed
    pub product_name: Option<String>,
    /// Current selling price, never negative
    pub current_price: Option<f64>,
    /// Three-letter currency code
    pub currency_code: String,
    /// Main product image, as found in the markup (may be relative)
    pub product_image_url: Option<String>,
}

impl Default for ProductRecord {
    fn default() -> Self {
        Self {
            product_name: None,
            current_price: None,
            currency_code: DEFAULT_CURRENCY.to_string(),
            product_image_url: None,
        }
    }
}

impl ProductRecord {
    /// Returns `true` if the name and price are both present.
    ///
    /// A price of `0.0` counts as present. Prices are non-negative, and a free
    /// item is still a product. Only a missing price fails validation, unlike a
    /// truthiness check that would also reject zero.
    pub fn is_valid(&self) -> bool {
        self.product_name.as_deref().is_some_and(|name| !name.is_empty())
            && self.current_price.is_some()
    }
}
