//! Rule-based shopping assistant
//!
//! The chat widget answers from a fixed set of intents. Messages are
//! matched against ordered keyword lists; product questions are answered
//! from the catalog through the search engine, everything else with a
//! canned response. There is no model and no network call behind it.
//!
//! # Usage
//!
//! ```ignore
//! use entropic_lib::chat::{KeywordResponder, Responder};
//!
//! let engine = SearchEngine::new(MemoryCatalog::sample());
//! let responder = KeywordResponder::new(&engine);
//!
//! let reply = responder.reply("any headphones under $400?");
//! for product in &reply.suggestions {
//!     println!("{} ${:.2}", product.name, product.price);
//! }
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{Product, ProductId, ProductStore};
use crate::score::Scorer;
use crate::search::{compare_names, CategoryFilter, FilterState, SearchEngine, SortMode};

mod intent;

pub use intent::{
    detect_category_group, detect_intent, extract_price_range, search_terms, Intent, PriceRange,
};

/// Most products suggested in one reply
pub const MAX_SUGGESTIONS: usize = 3;

const GREETING: &str =
    "Hi! I'm the Entropic shopping assistant. Ask me about products, prices, shipping or returns.";
const RETURNS: &str = "You can return any item within 30 days of delivery for a full refund. \
     Start a return from your order history or reach us through the Contact page.";
const SHIPPING: &str = "Standard shipping takes 3-5 business days and is free on orders over $50. \
     Express delivery is available at checkout.";
const SUPPORT: &str = "Happy to help! For account or order issues, our support team is available \
     through the Contact page and usually replies within 24 hours.";
const FALLBACK: &str =
    "Sorry, I didn't quite get that. Try asking about a product, our deals, shipping or returns.";
const NO_PRODUCTS: &str =
    "I couldn't find any products matching that. Try a different search or browse the full catalog.";

/// An assistant answer, optionally with products to show as cards
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub intent: Intent,
    pub message: String,
    pub suggestions: Vec<Product>,
}

impl ChatReply {
    fn canned(intent: Intent, message: &str) -> Self {
        Self {
            intent,
            message: message.to_string(),
            suggestions: Vec::new(),
        }
    }
}

/// Trait for chat widget backends
pub trait Responder {
    /// Answer a single shopper message.
    fn reply(&self, message: &str) -> ChatReply;
}

/// Keyword-matching responder backed by the product catalog.
pub struct KeywordResponder<'a, S: ProductStore, R: Scorer> {
    engine: &'a SearchEngine<S, R>,
}

impl<'a, S: ProductStore, R: Scorer> KeywordResponder<'a, S, R> {
    #[must_use]
    pub fn new(engine: &'a SearchEngine<S, R>) -> Self {
        Self { engine }
    }

    /// Map a keyword group ("home") onto a catalog label ("Home & Kitchen").
    fn resolve_category(&self, group: &str) -> Option<String> {
        self.engine
            .store()
            .categories()
            .into_iter()
            .find(|label| label.to_lowercase().contains(group))
    }

    /// Score a product against every term, also trying the singular form
    /// of plural terms ("laptops" → "laptop").
    fn term_score(&self, product: &Product, terms: &[String]) -> u32 {
        let scorer = self.engine.scorer();
        terms
            .iter()
            .map(|term| {
                let plural = scorer.score(product, term);
                let singular = term
                    .strip_suffix('s')
                    .filter(|s| s.len() > 2)
                    .map_or(0, |s| scorer.score(product, s));
                plural.max(singular)
            })
            .sum()
    }

    /// Products to suggest for a message, best first.
    fn suggest(&self, message: &str, intent: Intent) -> Vec<Product> {
        let category = detect_category_group(message)
            .and_then(|group| self.resolve_category(group))
            .map_or(CategoryFilter::All, CategoryFilter::Only);
        let price_range = extract_price_range(message);
        let terms = search_terms(message);
        let narrowed = category != CategoryFilter::All || price_range.is_some();

        // empty term + relevance = alphabetical within the category
        let filter = FilterState::new("", category, SortMode::Relevance);
        let candidates: Vec<&Product> = self
            .engine
            .search(&filter)
            .into_iter()
            .filter(|p| price_range.map_or(true, |range| range.contains(p.price)))
            .collect();

        let scores: HashMap<ProductId, u32> = candidates
            .iter()
            .map(|p| (p.id, self.term_score(p, &terms)))
            .collect();
        let any_hit = scores.values().any(|&s| s > 0);

        let mut picks: Vec<&Product> = if any_hit {
            candidates.into_iter().filter(|p| scores[&p.id] > 0).collect()
        } else if narrowed {
            candidates
        } else {
            Vec::new()
        };

        if intent == Intent::PriceInquiry {
            picks.sort_by(|a, b| a.price.total_cmp(&b.price));
        } else {
            picks.sort_by(|a, b| {
                scores[&b.id]
                    .cmp(&scores[&a.id])
                    .then_with(|| compare_names(&a.name, &b.name))
            });
        }

        debug!(
            %intent,
            terms = ?terms,
            ?price_range,
            "chat matched {} products",
            picks.len()
        );
        picks.into_iter().take(MAX_SUGGESTIONS).cloned().collect()
    }

    fn product_reply(&self, message: &str, intent: Intent) -> ChatReply {
        let suggestions = self.suggest(message, intent);
        if suggestions.is_empty() {
            return ChatReply::canned(intent, NO_PRODUCTS);
        }

        let lead = match intent {
            Intent::PriceInquiry => "Here are the best-priced options I found:",
            Intent::Recommendation => "Here are a few picks I'd recommend:",
            _ => "Here's what I found:",
        };
        let lines: Vec<String> = suggestions
            .iter()
            .map(|p| format!("- {} (${:.2})", p.name, p.price))
            .collect();

        ChatReply {
            intent,
            message: format!("{lead}\n{}", lines.join("\n")),
            suggestions,
        }
    }
}

impl<S: ProductStore, R: Scorer> Responder for KeywordResponder<'_, S, R> {
    fn reply(&self, message: &str) -> ChatReply {
        if message.trim().is_empty() {
            return ChatReply::canned(Intent::General, FALLBACK);
        }

        let intent = detect_intent(message);
        match intent {
            Intent::Returns => ChatReply::canned(intent, RETURNS),
            Intent::Shipping => ChatReply::canned(intent, SHIPPING),
            Intent::Support => ChatReply::canned(intent, SUPPORT),
            Intent::Greeting => ChatReply::canned(intent, GREETING),
            Intent::PriceInquiry | Intent::Recommendation | Intent::ProductSearch => {
                self.product_reply(message, intent)
            }
            Intent::General => {
                // a bare product name still deserves an answer
                let reply = self.product_reply(message, Intent::ProductSearch);
                if reply.suggestions.is_empty() {
                    ChatReply::canned(Intent::General, FALLBACK)
                } else {
                    reply
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn make_product(id: ProductId, name: &str, description: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            price,
            image: String::new(),
            stock: 5,
        }
    }

    fn engine() -> SearchEngine<MemoryCatalog> {
        SearchEngine::new(
            MemoryCatalog::from_products(vec![
                make_product(1, "Wireless Headphones", "Noise cancelling", "Electronics", 99.99),
                make_product(2, "Studio Headphones", "Wired monitors", "Electronics", 249.0),
                make_product(3, "Laptop", "Fast SSD storage", "Electronics", 1299.99),
                make_product(4, "Coffee Maker", "Thermal carafe", "Home & Kitchen", 89.99),
                make_product(5, "Dinner Set", "Ceramic set for the kitchen", "Home & Kitchen", 59.99),
                make_product(6, "Running Shoes", "Cushioned support", "Sports", 129.99),
            ])
            .unwrap(),
        )
    }

    fn suggestion_ids(reply: &ChatReply) -> Vec<ProductId> {
        reply.suggestions.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_greeting() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("hello!");

        assert_eq!(reply.intent, Intent::Greeting);
        assert!(reply.suggestions.is_empty());
    }

    #[test]
    fn test_canned_intents() {
        let engine = engine();
        let responder = KeywordResponder::new(&engine);

        assert_eq!(responder.reply("I want a refund").intent, Intent::Returns);
        assert_eq!(responder.reply("how long is shipping?").intent, Intent::Shipping);
        assert_eq!(responder.reply("I have a problem with my account").intent, Intent::Support);
    }

    #[test]
    fn test_product_search() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("I'm looking for headphones");

        assert_eq!(reply.intent, Intent::ProductSearch);
        assert_eq!(suggestion_ids(&reply), vec![2, 1]);
        assert!(reply.message.contains("Wireless Headphones"));
    }

    #[test]
    fn test_plural_falls_back_to_singular() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("do you have laptops?");

        assert_eq!(suggestion_ids(&reply), vec![3]);
    }

    #[test]
    fn test_price_bound_and_ordering() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("headphones under $150");

        assert_eq!(reply.intent, Intent::PriceInquiry);
        assert_eq!(suggestion_ids(&reply), vec![1]);
    }

    #[test]
    fn test_category_only_query() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("what's cheap for the home?");

        assert_eq!(reply.intent, Intent::PriceInquiry);
        assert_eq!(suggestion_ids(&reply), vec![5, 4]);
    }

    #[test]
    fn test_suggestions_are_capped() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("recommend some electronics");

        assert_eq!(reply.intent, Intent::Recommendation);
        assert_eq!(reply.suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_bare_product_name() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("coffee maker");

        assert_eq!(reply.intent, Intent::ProductSearch);
        assert_eq!(suggestion_ids(&reply), vec![4]);
    }

    #[test]
    fn test_no_products_found() {
        let engine = engine();
        let reply = KeywordResponder::new(&engine).reply("show me kayaks");

        assert_eq!(reply.intent, Intent::ProductSearch);
        assert!(reply.suggestions.is_empty());
        assert_eq!(reply.message, NO_PRODUCTS);
    }

    #[test]
    fn test_fallback() {
        let engine = engine();
        let responder = KeywordResponder::new(&engine);

        assert_eq!(responder.reply("qwerty").message, FALLBACK);
        assert_eq!(responder.reply("   ").intent, Intent::General);
    }
}
