//! Relevance scoring
//!
//! A scorer turns a search term into a ranking signal per product. The
//! default [`KeywordScorer`] is a fixed heuristic: substring hits in the
//! name weigh more than hits in the description.

use crate::catalog::Product;

/// Trait for relevance scorers.
///
/// Implementations must be pure: the same product and term always give
/// the same score.
pub trait Scorer: Send + Sync {
    /// Score a product against a search term. Higher ranks first.
    fn score(&self, product: &Product, term: &str) -> u32;
}

/// Points awarded when the name contains the term
pub const NAME_MATCH_SCORE: u32 = 100;

/// Points awarded when the description contains the term
pub const DESCRIPTION_MATCH_SCORE: u32 = 50;

/// Case-insensitive substring scorer.
///
/// Name and description hits add up, so scores are 0, 50, 100 or 150.
/// An empty term scores every product 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl Scorer for KeywordScorer {
    fn score(&self, product: &Product, term: &str) -> u32 {
        if term.is_empty() {
            return 0;
        }

        let term = term.to_lowercase();
        let mut score = 0;
        if product.name.to_lowercase().contains(&term) {
            score += NAME_MATCH_SCORE;
        }
        if product.description.to_lowercase().contains(&term) {
            score += DESCRIPTION_MATCH_SCORE;
        }
        score
    }
}
