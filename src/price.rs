//! Price text normalization.
//!
//! Price markup differs between sites and locales (symbol before or after the
//! amount, thousands separators, stray labels like "M.R.P."). All sites share
//! one strip-then-parse pass.

use regex::Regex;
use std::sync::LazyLock;

// Currency symbols (Unicode category Sc), thousands separators and whitespace
const SYMBOLS_AND_SEPARATORS_PATTERN: &str = r"[\p{Sc},\s]";
const NON_NUMERIC_PATTERN: &str = r"[^0-9.]";
const LEADING_NUMERAL_PATTERN: &str = r"^[0-9]*\.?[0-9]*";

/// Compiles a static regex pattern, panicking with a detailed message if it is invalid.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static SYMBOLS_AND_SEPARATORS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(SYMBOLS_AND_SEPARATORS_PATTERN, "SYMBOLS_AND_SEPARATORS_RE")
});
static NON_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(NON_NUMERIC_PATTERN, "NON_NUMERIC_RE"));
static LEADING_NUMERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LEADING_NUMERAL_PATTERN, "LEADING_NUMERAL_RE"));

/// Converts raw price text into a number.
///
/// Currency symbols, commas and whitespace are removed first, then every
/// character that is not a digit or a decimal point. The longest leading
/// numeral of what remains is parsed, so `"1.234.50"` yields `1.234` and a
/// trailing point as in Amazon's `"799."` is accepted.
///
/// # Returns
///
/// The price, or `None` if the input is absent, empty, has no digits, or is
/// too large to represent as a finite number.
/// The result is never negative because `-` is stripped.
///
/// # Examples
///
/// ```
/// use price_scraper::parse_price;
///
/// assert_eq!(parse_price(Some("₹1,234.50")), Some(1234.50));
/// assert_eq!(parse_price(Some("$19.99")), Some(19.99));
/// assert_eq!(parse_price(Some("N/A")), None);
/// assert_eq!(parse_price(None), None);
/// ```
pub fn parse_price(text: Option<&str>) -> Option<f64> {
    let text = text?;
    if text.is_empty() {
        return None;
    }

    let stripped = SYMBOLS_AND_SEPARATORS_RE.replace_all(text, "");
    let numeric = NON_NUMERIC_RE.replace_all(&stripped, "");

    let numeral = LEADING_NUMERAL_RE.find(&numeric)?.as_str();
    if !numeral.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    // Overlong digit runs parse to infinity
    numeral.parse::<f64>().ok().filter(|price| price.is_finite())
}
