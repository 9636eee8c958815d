//! Built-in strategy table and hostname resolution.
//!
//! Selector lists mirror the markup each retailer has shipped over time (deal
//! pages, regional variants, A/B tests). When a site changes its layout, add
//! the new selector at the position it should be tried and keep the old ones.

use std::sync::{Arc, LazyLock};

use super::{CompiledStrategy, CurrencyRule, SiteStrategy};

const AMAZON: SiteStrategy = SiteStrategy {
    name: "amazon",
    hostname_match: "amazon",
    name_selectors: &["#productTitle", "h1.a-size-large", "#title"],
    price_selectors: &[
        ".a-price-whole",
        "#priceblock_ourprice",
        "#priceblock_dealprice",
        ".a-price .a-offscreen",
        "span.a-price-whole",
        ".apexPriceToPay .a-offscreen",
    ],
    image_selectors: &[
        "#landingImage",
        "#imgBlkFront",
        ".a-dynamic-image",
        "#main-image",
    ],
    // amazon.com prices in dollars, amazon.in in rupees
    currency_rule: CurrencyRule::DollarOrDefault,
};

const FLIPKART: SiteStrategy = SiteStrategy {
    name: "flipkart",
    hostname_match: "flipkart",
    name_selectors: &["span.VU-ZEz", "._35KyD6", "h1.yhB1nd", "h1 span"],
    price_selectors: &[".Nx9bqj", "._30jeq3", "._1vC4OE", "div._16Jk6d"],
    image_selectors: &["._396cs4", "._2r_T1I", "img._53J4C-"],
    currency_rule: CurrencyRule::Fixed("INR"),
};

const MYNTRA: SiteStrategy = SiteStrategy {
    name: "myntra",
    hostname_match: "myntra",
    name_selectors: &["h1.pdp-title", ".pdp-name"],
    price_selectors: &[".pdp-price strong", "span.pdp-price"],
    image_selectors: &[".image-grid-image", "img.img-responsive"],
    currency_rule: CurrencyRule::Fixed("INR"),
};

const GENERIC: SiteStrategy = SiteStrategy {
    name: "generic",
    hostname_match: "",
    name_selectors: &["h1", ".product-title", "[itemprop=\"name\"]", ".product-name"],
    price_selectors: &[
        ".price",
        "[itemprop=\"price\"]",
        ".product-price",
        "span[class*=\"price\"]",
        "div[class*=\"price\"]",
        ".amount",
    ],
    image_selectors: &[
        ".product-image img",
        "[itemprop=\"image\"]",
        ".main-image",
        "img.product-img",
    ],
    currency_rule: CurrencyRule::DollarOrDefault,
};

static BUILTIN: LazyLock<Arc<SiteStrategyRegistry>> = LazyLock::new(|| {
    Arc::new(SiteStrategyRegistry::new(
        vec![AMAZON, FLIPKART, MYNTRA],
        GENERIC,
    ))
});

/// Ordered collection of site strategies with a generic fallback.
///
/// Read-only after construction. Selector chains are parsed once, when the
/// registry is built. The process-wide built-in table is available through
/// [`SiteStrategyRegistry::builtin`].
#[derive(Debug, Clone)]
pub struct SiteStrategyRegistry {
    strategies: Vec<SiteStrategy>,
    compiled: Vec<CompiledStrategy>,
    generic: CompiledStrategy,
}

impl SiteStrategyRegistry {
    /// Creates a registry trying `strategies` in order, falling back to `generic`.
    pub fn new(strategies: Vec<SiteStrategy>, generic: SiteStrategy) -> Self {
        let compiled = strategies.iter().copied().map(CompiledStrategy::new).collect();
        Self {
            strategies,
            compiled,
            generic: CompiledStrategy::new(generic),
        }
    }

    /// The built-in table: Amazon, Flipkart, Myntra, then the generic strategy.
    pub fn builtin() -> &'static SiteStrategyRegistry {
        &BUILTIN
    }

    /// Shared handle to the built-in table.
    pub fn builtin_shared() -> Arc<SiteStrategyRegistry> {
        Arc::clone(&*BUILTIN)
    }

    /// Selects the strategy for `hostname`.
    ///
    /// The hostname is lower-cased, then strategies are tried in declared order
    /// and the first whose `hostname_match` is a substring wins. If none match,
    /// the generic strategy is returned.
    pub fn resolve(&self, hostname: &str) -> &SiteStrategy {
        &self.resolve_compiled(hostname).strategy
    }

    pub(crate) fn resolve_compiled(&self, hostname: &str) -> &CompiledStrategy {
        let hostname = hostname.to_lowercase();
        self.compiled
            .iter()
            .find(|compiled| compiled.strategy.matches(&hostname))
            .unwrap_or(&self.generic)
    }

    /// Site-specific strategies in the order they are tried.
    pub fn strategies(&self) -> &[SiteStrategy] {
        &self.strategies
    }

    /// The fallback used for unrecognized hosts.
    pub fn generic(&self) -> &SiteStrategy {
        &self.generic.strategy
    }
}

/// Resolves `hostname` against the built-in registry.
pub fn resolve_strategy(hostname: &str) -> &'static SiteStrategy {
    SiteStrategyRegistry::builtin().resolve(hostname)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_amazon_variants() {
        assert_eq!(resolve_strategy("www.amazon.in").name, "amazon");
        assert_eq!(resolve_strategy("amazon.com").name, "amazon");
        assert_eq!(resolve_strategy("smile.amazon.co.uk").name, "amazon");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_strategy("WWW.AMAZON.IN").name, "amazon");
        assert_eq!(resolve_strategy("www.Flipkart.com").name, "flipkart");
    }

    #[test]
    fn test_resolve_indian_retailers() {
        assert_eq!(resolve_strategy("www.flipkart.com").name, "flipkart");
        assert_eq!(resolve_strategy("www.myntra.com").name, "myntra");
    }

    #[test]
    fn test_resolve_unknown_host_is_generic() {
        assert_eq!(resolve_strategy("shop.example.com").name, "generic");
        assert_eq!(resolve_strategy("").name, "generic");
        assert_eq!(resolve_strategy("127.0.0.1").name, "generic");
    }

    #[test]
    fn test_resolve_first_declared_match_wins() {
        // Substring matching means a host naming two retailers goes to the first one
        assert_eq!(resolve_strategy("amazon-vs-flipkart.example").name, "amazon");
    }

    #[test]
    fn test_builtin_order() {
        let names: Vec<_> = SiteStrategyRegistry::builtin()
            .strategies()
            .iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["amazon", "flipkart", "myntra"]);
        assert_eq!(SiteStrategyRegistry::builtin().generic().name, "generic");
    }

    #[test]
    fn test_builtin_currency_rules() {
        assert_eq!(
            resolve_strategy("www.flipkart.com").currency_rule,
            CurrencyRule::Fixed("INR")
        );
        assert_eq!(
            resolve_strategy("www.myntra.com").currency_rule,
            CurrencyRule::Fixed("INR")
        );
        assert_eq!(
            resolve_strategy("shop.example.com").currency_rule,
            CurrencyRule::DollarOrDefault
        );
    }

    #[test]
    fn test_every_builtin_selector_parses() {
        let registry = SiteStrategyRegistry::builtin();
        for strategy in registry
            .strategies()
            .iter()
            .chain(std::iter::once(registry.generic()))
        {
            for selector in strategy
                .name_selectors
                .iter()
                .chain(strategy.price_selectors)
                .chain(strategy.image_selectors)
            {
                assert!(
                    scraper::Selector::parse(selector).is_ok(),
                    "{} selector '{}' should parse",
                    strategy.name,
                    selector
                );
            }
        }
    }

    #[test]
    fn test_builtin_chains_are_parsed_once() {
        let registry = SiteStrategyRegistry::builtin();
        let compiled = registry.resolve_compiled("www.amazon.in");
        assert_eq!(compiled.strategy.name, "amazon");
        assert_eq!(compiled.name_chain.len(), AMAZON.name_selectors.len());
        assert_eq!(compiled.price_chain.len(), AMAZON.price_selectors.len());
        assert_eq!(compiled.image_chain.len(), AMAZON.image_selectors.len());
        // Same chain on every lookup
        assert!(std::ptr::eq(
            compiled,
            registry.resolve_compiled("amazon.com")
        ));
        assert!(Arc::ptr_eq(
            &SiteStrategyRegistry::builtin_shared(),
            &SiteStrategyRegistry::builtin_shared()
        ));
    }

    #[test]
    fn test_custom_registry_skips_unparsable_selectors() {
        const BROKEN: SiteStrategy = SiteStrategy {
            name: "broken",
            hostname_match: "broken.example",
            name_selectors: &["div[", "h1"],
            price_selectors: &[".cost"],
            image_selectors: &[],
            currency_rule: CurrencyRule::Fixed("EUR"),
        };
        let registry = SiteStrategyRegistry::new(vec![BROKEN], GENERIC);
        let compiled = registry.resolve_compiled("broken.example");
        assert_eq!(compiled.name_chain.len(), 1);
        assert!(compiled.image_chain.is_empty());
    }

    #[test]
    fn test_custom_registry() {
        const SHOP: SiteStrategy = SiteStrategy {
            name: "shop",
            hostname_match: "shop.example",
            name_selectors: &[".title"],
            price_selectors: &[".cost"],
            image_selectors: &[],
            currency_rule: CurrencyRule::Fixed("EUR"),
        };
        let registry = SiteStrategyRegistry::new(vec![SHOP], GENERIC);
        assert_eq!(registry.resolve("shop.example.com").name, "shop");
        assert_eq!(registry.resolve("www.amazon.in").name, "generic");
    }
}
