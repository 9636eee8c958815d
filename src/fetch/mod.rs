//! Product page fetching.
//!
//! One GET per call, no retries. Responses below 500 are returned to the caller
//! for parsing (a 404 page is still HTML), except 403, which is reported as
//! access denied without looking at the body.

mod request;

use log::debug;
use reqwest::StatusCode;
use url::Url;

use crate::error_handling::{classify_status, ScrapeError};
use request::RequestHeaders;

/// A fetched page ready for parsing.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects
    pub final_url: Url,
    /// Final response status
    pub status: StatusCode,
    /// Decoded response body
    pub body: String,
}

/// Parses `url` and checks that it is an absolute http(s) URL.
///
/// # Errors
///
/// Returns `ScrapeError::ScrapeFailed` for malformed URLs, other schemes, and
/// URLs without a host.
pub fn parse_product_url(url: &str) -> Result<Url, ScrapeError> {
    let parsed = Url::parse(url.trim())?;
    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ScrapeError::ScrapeFailed(format!(
                "Invalid URL: unsupported scheme '{scheme}'"
            )))
        }
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ScrapeError::ScrapeFailed(format!(
            "Invalid URL: '{url}' has no host"
        )));
    }
    Ok(parsed)
}

/// Fetches `url` with browser-like headers.
///
/// The client decides the timeout and redirect policy (see
/// `initialization::init_client`).
///
/// # Errors
///
/// Returns a classified `ScrapeError` for timeouts, 403, 503, other 5xx
/// statuses, and any transport or body-read failure.
pub async fn fetch_page(client: &reqwest::Client, url: &Url) -> Result<FetchedPage, ScrapeError> {
    debug!("Fetching {url}");

    let response = RequestHeaders::apply_to_request_builder(client.get(url.clone()))
        .send()
        .await?;

    let status = response.status();
    let final_url = response.url().clone();
    debug!("Received {status} from {final_url}");

    if let Some(error) = classify_status(status) {
        return Err(error);
    }

    let body = response.text().await?;
    debug!("Read {} bytes of body from {final_url}", body.len());

    Ok(FetchedPage {
        final_url,
        status,
        body,
    })
}
