//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `price_scraper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output (JSON records on stdout, failures on stderr)
//!
//! All core functionality is implemented in the library crate.

use std::io::Write;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use price_scraper::initialization::init_logger;
use price_scraper::{read_urls, scrape_all, Config, Opt, ProductScraper};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    let config = Config::from(&opt);
    init_logger(&config).context("Failed to initialize logger")?;

    let scraper = match ProductScraper::new(&config) {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("price_scraper error: {e}");
            process::exit(1);
        }
    };

    let urls = read_urls(&opt.urls, opt.file.as_deref()).await?;
    if urls.is_empty() {
        eprintln!("price_scraper error: no valid URLs to scrape");
        process::exit(2);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut write_error = None;

    let report = scrape_all(&scraper, urls, opt.concurrency, |outcome| {
        match &outcome.result {
            Ok(record) => {
                let written = serde_json::to_string(record)
                    .map_err(anyhow::Error::from)
                    .and_then(|line| writeln!(out, "{line}").map_err(anyhow::Error::from));
                if let Err(e) = written {
                    write_error.get_or_insert(e);
                }
            }
            Err(e) => eprintln!("{}: {e}", outcome.url),
        }
    })
    .await;

    if let Some(e) = write_error {
        return Err(e.context("Failed to write record to stdout"));
    }
    out.flush().context("Failed to flush stdout")?;

    if report.failed > 0 {
        process::exit(1);
    }
    Ok(())
}
