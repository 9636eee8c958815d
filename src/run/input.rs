//! URL input: command-line arguments plus an optional file or stdin.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::app::{is_skippable_line, validate_and_normalize_url};

/// Collects the URLs to scrape.
///
/// `args` come first, in order, followed by the lines of `file` (`-` reads
/// stdin). Blank lines and `#` comments are skipped; invalid URLs are logged
/// and dropped. Duplicates are kept, each is scraped independently.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub async fn read_urls(args: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    let mut lines = args.to_vec();

    if let Some(path) = file {
        if path.as_os_str() == "-" {
            info!("Reading URLs from stdin");
            let stdin_lines = collect_lines(BufReader::new(tokio::io::stdin()))
                .await
                .context("Failed to read URLs from stdin")?;
            lines.extend(stdin_lines);
        } else {
            let input = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            let file_lines = collect_lines(BufReader::new(input))
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            lines.extend(file_lines);
        }
    }

    let urls: Vec<String> = lines
        .iter()
        .filter(|line| !is_skippable_line(line))
        .filter_map(|line| validate_and_normalize_url(line))
        .collect();
    debug!("Collected {} URLs from {} input lines", urls.len(), lines.len());
    Ok(urls)
}

async fn collect_lines<R>(reader: R) -> std::io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut collected = Vec::new();
    while let Some(line) = lines.next_line().await? {
        collected.push(line);
    }
    Ok(collected)
}
