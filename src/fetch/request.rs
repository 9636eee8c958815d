//! HTTP request building.
//!
//! Retail sites run aggressive bot detection, so every request carries the
//! header set a desktop Chrome sends on a top-level navigation.

/// Browser-like request headers for product page fetches.
///
/// - **Accept headers**: Match modern browser content negotiation
/// - **Accept-Language**: English-speaking user (common default)
/// - **Accept-Encoding**: Compression the client can decode (gzip, deflate, brotli)
/// - **Sec-Fetch-***: Navigation metadata sent by Chromium browsers
/// - **Upgrade-Insecure-Requests**, **Cache-Control**: Fresh top-level load
///
/// The User-Agent itself is configured on the client.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    pub(crate) const ACCEPT: &'static str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
    pub(crate) const ACCEPT_LANGUAGE: &'static str = "en-US,en;q=0.9";
    pub(crate) const ACCEPT_ENCODING: &'static str = "gzip, deflate, br";

    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::ACCEPT, Self::ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .header(reqwest::header::ACCEPT_ENCODING, Self::ACCEPT_ENCODING)
            .header(reqwest::header::CONNECTION, "keep-alive")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "none",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-user"),
                "?1",
            )
            .header(reqwest::header::CACHE_CONTROL, "max-age=0")
    }
}
