//! price_scraper library: product page scraping for price tracking
//!
//! This library fetches e-commerce product pages and extracts a normalized
//! `ProductRecord` (name, price, currency, image). Extraction is driven by a
//! per-site strategy table (Amazon, Flipkart, Myntra, plus a generic fallback)
//! of ordered CSS selector chains.
//!
//! # Example
//!
//! ```no_run
//! use price_scraper::{Config, ProductScraper};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scraper = ProductScraper::new(&Config::default())?;
//! let record = scraper
//!     .scrape_product("https://www.amazon.in/dp/B0EXAMPLE")
//!     .await?;
//! println!("{:?} costs {} {:?}",
//!          record.product_name, record.currency_code, record.current_price);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Scraping requires a Tokio runtime. [`extract_product`] and [`parse_price`]
//! are synchronous and work on already-fetched HTML.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
mod extract;
mod fetch;
pub mod initialization;
mod models;
mod price;
mod run;
mod scrape;
pub mod strategy;
mod utils;

// Re-export public API
pub use config::{Config, ConfigValidationError, LogFormat, LogLevel, Opt};
pub use error_handling::{
    classify_reqwest_error, classify_status, ErrorKind, InitializationError, ScrapeError,
    ScrapeStats,
};
pub use extract::{extract_attribute, extract_field, SelectorChain};
pub use models::ProductRecord;
pub use price::parse_price;
pub use run::{read_urls, scrape_all, ScrapeOutcome, ScrapeReport};
pub use scrape::{extract_product, scrape_product, ProductScraper};
pub use strategy::{resolve_strategy, CurrencyRule, SiteStrategy, SiteStrategyRegistry};
