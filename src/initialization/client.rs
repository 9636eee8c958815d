//! HTTP client initialization.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for product page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Request timeout from the configuration
/// - Redirect following limited to `max_redirects` hops (0 disables following,
///   so a 3xx response is returned as-is)
/// - gzip, deflate and brotli decoding
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    client_builder(config).build()
}

/// Returns a `ClientBuilder` preconfigured from `config`.
///
/// Useful when the caller needs extra settings (a proxy, DNS overrides)
/// on top of the scraper defaults.
pub fn client_builder(config: &Config) -> ClientBuilder {
    let redirect_policy = if config.max_redirects == 0 {
        Policy::none()
    } else {
        Policy::limited(config.max_redirects)
    };

    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(redirect_policy)
        .user_agent(config.user_agent.clone())
        .gzip(true)
        .deflate(true)
        .brotli(true)
}
