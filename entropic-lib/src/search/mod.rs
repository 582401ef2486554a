//! Product search
//!
//! Combines a catalog and a scorer into the filter → score → sort pass
//! that feeds the product grid.
//!
//! # Usage
//!
//! ```ignore
//! use entropic_lib::catalog::MemoryCatalog;
//! use entropic_lib::search::{CategoryFilter, FilterState, SearchEngine, SortMode};
//!
//! let engine = SearchEngine::new(MemoryCatalog::sample());
//! let filter = FilterState::new("shoe", CategoryFilter::All, SortMode::Relevance);
//! let results = engine.search(&filter);
//!
//! // First page of 12, plus the unpaginated total for the result count
//! let page = engine.search_page(&filter, 0, Some(12));
//! ```

use tracing::debug;

use crate::catalog::{Product, ProductStore};
use crate::score::{KeywordScorer, Scorer};

mod filter;
mod sort;

pub use filter::*;
pub use sort::*;

/// One page of an ordered result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Products on this page, in result order
    pub items: Vec<&'a Product>,
    /// Size of the full result set before paging
    pub total: usize,
    /// Offset of the first item on this page
    pub skip: usize,
}

/// Search engine over a read-only catalog.
pub struct SearchEngine<S: ProductStore, R: Scorer = KeywordScorer> {
    store: S,
    scorer: R,
}

// Constructor for engines using the keyword scorer
impl<S: ProductStore> SearchEngine<S, KeywordScorer> {
    /// Create a new search engine with the default keyword scorer.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            scorer: KeywordScorer,
        }
    }
}

impl<S: ProductStore, R: Scorer> SearchEngine<S, R> {
    /// Create a new search engine with a custom scorer.
    #[must_use]
    pub fn with_scorer(store: S, scorer: R) -> Self {
        Self { store, scorer }
    }

    /// Filter the full catalog and order the matches.
    ///
    /// Runs over every product on each call; the cost of sorting is
    /// bounded by the number of matches.
    pub fn search(&self, filter: &FilterState) -> Vec<&Product> {
        let mut results: Vec<&Product> = self
            .store
            .products()
            .iter()
            .filter(|p| matches(p, &filter.search_term, &filter.category))
            .collect();

        sort_products(
            &mut results,
            filter.sort_mode,
            &filter.search_term,
            &self.scorer,
        );

        debug!(
            term = %filter.search_term,
            category = %filter.category,
            sort = %filter.sort_mode,
            "search matched {} of {} products",
            results.len(),
            self.store.len()
        );
        results
    }

    /// Search and return a single page of results.
    ///
    /// `limit` of `None` returns everything after `skip`. Skipping past
    /// the end yields an empty page with the correct total.
    pub fn search_page(&self, filter: &FilterState, skip: usize, limit: Option<usize>) -> Page<'_> {
        let results = self.search(filter);
        let total = results.len();
        let items = results
            .into_iter()
            .skip(skip)
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        Page { items, total, skip }
    }

    /// Returns a reference to the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the scorer.
    #[must_use]
    pub fn scorer(&self) -> &R {
        &self.scorer
    }
}
