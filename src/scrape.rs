//! Product scraping: fetch, parse, pick a strategy, extract, validate.

use std::sync::Arc;

use log::{debug, error, info, warn};
use scraper::Html;
use url::Url;

use crate::config::{Config, BODY_PREVIEW_CHARS};
use crate::error_handling::{InitializationError, ScrapeError};
use crate::extract::body_text;
use crate::fetch::{fetch_page, parse_product_url};
use crate::initialization::init_client;
use crate::models::ProductRecord;
use crate::price::parse_price;
use crate::strategy::SiteStrategyRegistry;
use crate::utils::text_preview;

/// Fetches product pages and extracts `ProductRecord`s.
///
/// Holds only the HTTP client and a shared read-only strategy table, so it is
/// cheap to clone and safe to share between tasks. Calls are
/// independent: nothing observed in one scrape affects another.
#[derive(Debug, Clone)]
pub struct ProductScraper {
    client: reqwest::Client,
    registry: Arc<SiteStrategyRegistry>,
}

impl ProductScraper {
    /// Creates a scraper from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError` if the configuration is out of range or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        config.validate()?;
        let client = init_client(config)?;
        Ok(Self::with_client(client))
    }

    /// Creates a scraper around an existing client, using the built-in strategies.
    ///
    /// The client's timeout and redirect policy are used as-is; build it with
    /// `initialization::client_builder` to keep the scraper defaults.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            registry: SiteStrategyRegistry::builtin_shared(),
        }
    }

    /// Replaces the strategy table.
    ///
    /// The registry can be built at runtime; clones of this scraper share it.
    pub fn with_registry(mut self, registry: Arc<SiteStrategyRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Scrapes one product page.
    ///
    /// Makes a single GET request (no retries), parses the body, selects the
    /// strategy for the URL's hostname and extracts the record.
    ///
    /// # Errors
    ///
    /// Every failure is one of the `ScrapeError` kinds: `Timeout`,
    /// `AccessDenied` (403), `ServiceUnavailable` (503), `ExtractionFailed`
    /// (name or price missing), or `ScrapeFailed` with the cause.
    pub async fn scrape_product(&self, url: &str) -> Result<ProductRecord, ScrapeError> {
        let result = self.scrape_inner(url).await;
        if let Err(e) = &result {
            warn!("Scraping {url} failed: {e}");
        }
        result
    }

    async fn scrape_inner(&self, url: &str) -> Result<ProductRecord, ScrapeError> {
        let parsed = parse_product_url(url)?;
        let page = fetch_page(&self.client, &parsed).await?;
        if page.final_url != parsed {
            debug!("{parsed} redirected to {} ({})", page.final_url, page.status);
        }
        // Strategy follows the requested host, not the redirect target
        extract_with(&self.registry, &page.body, &parsed)
    }
}

/// Scrapes one product page with the default configuration.
///
/// Builds a fresh client per call; use [`ProductScraper`] when scraping more
/// than one page.
///
/// # Errors
///
/// See [`ProductScraper::scrape_product`].
pub async fn scrape_product(url: &str) -> Result<ProductRecord, ScrapeError> {
    let scraper = ProductScraper::new(&Config::default())
        .map_err(|e| ScrapeError::ScrapeFailed(e.to_string()))?;
    scraper.scrape_product(url).await
}

/// Extracts a product record from already-fetched HTML.
///
/// `url` is the page's address; only its hostname is used, to select the
/// strategy.
///
/// # Errors
///
/// `ScrapeFailed` if `url` is not an absolute http(s) URL, `ExtractionFailed`
/// if the name or price cannot be found.
///
/// # Examples
///
/// ```
/// use price_scraper::extract_product;
///
/// let html = r#"<span id="productTitle"> Wireless Mouse </span>
///               <span class="a-price-whole">799</span>"#;
/// let record = extract_product(html, "https://www.amazon.in/dp/B0EXAMPLE").unwrap();
/// assert_eq!(record.product_name.as_deref(), Some("Wireless Mouse"));
/// assert_eq!(record.current_price, Some(799.0));
/// assert_eq!(record.currency_code, "INR");
/// ```
pub fn extract_product(html: &str, url: &str) -> Result<ProductRecord, ScrapeError> {
    let parsed = parse_product_url(url)?;
    extract_with(SiteStrategyRegistry::builtin(), html, &parsed)
}

fn extract_with(
    registry: &SiteStrategyRegistry,
    html: &str,
    url: &Url,
) -> Result<ProductRecord, ScrapeError> {
    let document = Html::parse_document(html);
    let hostname = url.host_str().unwrap_or_default().to_lowercase();
    let compiled = registry.resolve_compiled(&hostname);
    let strategy = &compiled.strategy;
    debug!("Using {} strategy for {hostname}", strategy.name);

    let product_name = compiled.name_chain.first_text(&document);
    let price_text = compiled.price_chain.first_text(&document);
    let current_price = parse_price(price_text.as_deref());
    let product_image_url = compiled.image_chain.first_attribute(&document, "src");
    let currency_code = strategy
        .currency_rule
        .currency_for(price_text.as_deref())
        .to_string();

    debug!(
        "Extracted from {url}: name={product_name:?}, price_text={price_text:?}, image={product_image_url:?}"
    );

    let record = ProductRecord {
        product_name,
        current_price,
        currency_code,
        product_image_url,
    };

    if !record.is_valid() {
        error!(
            "Extraction failed for {url} ({} strategy). HTML preview: {}",
            strategy.name,
            text_preview(&body_text(&document), BODY_PREVIEW_CHARS)
        );
        return Err(ScrapeError::ExtractionFailed);
    }

    info!(
        "Successfully scraped: {} - {} {}",
        record.product_name.as_deref().unwrap_or_default(),
        record.currency_code,
        record.current_price.unwrap_or_default()
    );
    Ok(record)
}
