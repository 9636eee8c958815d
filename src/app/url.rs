//! URL validation and normalization for batch input.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a product URL read from the command line or a file.
///
/// Adds an `https://` prefix if no scheme is given, then checks that the URL
/// parses, uses http or https, and has a host. Rejects URLs longer than
/// `MAX_URL_LENGTH` before and after normalization.
///
/// Logs a warning and returns `None` for anything that should be skipped.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    let url = url.trim();

    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
                Some(normalized)
            }
            "http" | "https" => {
                warn!("Skipping URL without a host: {url}");
                None
            }
            _ => {
                warn!("Skipping unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

/// Returns true for input lines that carry no URL (blank or `#` comments).
pub fn is_skippable_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
