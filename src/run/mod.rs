//! Batch scraping with bounded concurrency.

mod input;

use std::time::Instant;

use futures::stream::{self, StreamExt};
use log::info;

use crate::app::{print_error_statistics, print_simple_summary};
use crate::error_handling::{ScrapeError, ScrapeStats};
use crate::models::ProductRecord;
use crate::scrape::ProductScraper;

pub use input::read_urls;

/// The result of scraping one URL in a batch.
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    /// URL as it was requested
    pub url: String,
    /// Extracted record or the classified failure
    pub result: Result<ProductRecord, ScrapeError>,
}

/// Summary of a batch run.
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Number of URLs attempted
    pub total_urls: usize,
    /// Number of URLs that produced a record
    pub successful: usize,
    /// Number of URLs that failed
    pub failed: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Scrapes `urls` with at most `concurrency` requests in flight.
///
/// `on_outcome` is called once per URL, in input order, as results become
/// available. Failures never stop the batch. Error counts by kind and a
/// one-line summary are logged at the end.
///
/// # Example
///
/// ```no_run
/// use price_scraper::{scrape_all, Config, ProductScraper};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let scraper = ProductScraper::new(&Config::default())?;
/// let urls = vec!["https://www.amazon.in/dp/B0EXAMPLE".to_string()];
/// let report = scrape_all(&scraper, urls, 4, |outcome| {
///     println!("{}: {:?}", outcome.url, outcome.result);
/// })
/// .await;
/// println!("{} succeeded, {} failed", report.successful, report.failed);
/// # Ok(())
/// # }
/// ```
pub async fn scrape_all<F>(
    scraper: &ProductScraper,
    urls: Vec<String>,
    concurrency: usize,
    mut on_outcome: F,
) -> ScrapeReport
where
    F: FnMut(&ScrapeOutcome),
{
    let start = Instant::now();
    let stats = ScrapeStats::new();
    // buffered(0) would never poll anything
    let concurrency = concurrency.max(1);
    info!("Scraping {} URLs (concurrency {concurrency})", urls.len());

    let mut outcomes = stream::iter(urls)
        .map(|url| async move {
            let result = scraper.scrape_product(&url).await;
            ScrapeOutcome { url, result }
        })
        .buffered(concurrency);

    while let Some(outcome) = outcomes.next().await {
        match &outcome.result {
            Ok(_) => stats.record_success(),
            Err(e) => stats.record_error(e),
        }
        on_outcome(&outcome);
    }

    let elapsed_seconds = start.elapsed().as_secs_f64();
    print_error_statistics(&stats);
    print_simple_summary(&stats, elapsed_seconds);

    ScrapeReport {
        total_urls: stats.total(),
        successful: stats.successes(),
        failed: stats.total_errors(),
        elapsed_seconds,
    }
}
