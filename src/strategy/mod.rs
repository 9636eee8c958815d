//! Site strategies.
//!
//! A strategy bundles the selector chains and the currency rule used for one
//! recognized site, or for arbitrary unknown markup (the generic strategy).
//! Strategies are plain data: adding a site means adding a table entry in
//! `registry.rs`, not a code path.

mod registry;

pub use registry::{resolve_strategy, SiteStrategyRegistry};

use crate::config::DEFAULT_CURRENCY;
use crate::extract::SelectorChain;

/// How the currency code of a product is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyRule {
    /// The site always prices in this currency.
    Fixed(&'static str),
    /// `USD` if the raw price text contains `$`, otherwise `DEFAULT_CURRENCY`.
    ///
    /// Other symbols (`€`, `£`) are not special-cased and fall through to the
    /// default.
    DollarOrDefault,
}

impl CurrencyRule {
    /// Determines the currency code for the raw (unparsed) price text.
    pub fn currency_for(&self, price_text: Option<&str>) -> &'static str {
        match self {
            CurrencyRule::Fixed(code) => code,
            CurrencyRule::DollarOrDefault => {
                if price_text.is_some_and(|text| text.contains('$')) {
                    "USD"
                } else {
                    DEFAULT_CURRENCY
                }
            }
        }
    }
}

/// Selector chains and currency rule for one site.
///
/// Each chain is evaluated first to last; the first selector producing a
/// non-empty value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteStrategy {
    /// Short label used in logs
    pub name: &'static str,
    /// Substring of the lower-cased hostname that selects this strategy
    pub hostname_match: &'static str,
    pub name_selectors: &'static [&'static str],
    pub price_selectors: &'static [&'static str],
    /// Selectors whose `src` attribute holds the product image
    pub image_selectors: &'static [&'static str],
    pub currency_rule: CurrencyRule,
}

impl SiteStrategy {
    /// Returns `true` if this strategy applies to `hostname` (already lower-cased).
    pub fn matches(&self, hostname: &str) -> bool {
        !self.hostname_match.is_empty() && hostname.contains(self.hostname_match)
    }
}

/// A strategy with its selector chains parsed.
#[derive(Debug, Clone)]
pub(crate) struct CompiledStrategy {
    pub(crate) strategy: SiteStrategy,
    pub(crate) name_chain: SelectorChain,
    pub(crate) price_chain: SelectorChain,
    pub(crate) image_chain: SelectorChain,
}

impl CompiledStrategy {
    pub(crate) fn new(strategy: SiteStrategy) -> Self {
        Self {
            name_chain: SelectorChain::parse(
                strategy.name_selectors,
                &format!("{} name", strategy.name),
            ),
            price_chain: SelectorChain::parse(
                strategy.price_selectors,
                &format!("{} price", strategy.name),
            ),
            image_chain: SelectorChain::parse(
                strategy.image_selectors,
                &format!("{} image", strategy.name),
            ),
            strategy,
        }
    }
}
