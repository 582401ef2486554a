use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::Error;

/// Label the category controls use for "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Category selection from the filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Sentinel: every category matches
    #[default]
    All,
    /// Only products whose category equals this label exactly
    Only(String),
}

impl CategoryFilter {
    /// Returns `true` if `category` passes this filter.
    ///
    /// Comparison is exact and case-sensitive; an unknown label simply
    /// matches nothing.
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Only(label) => f.write_str(label),
        }
    }
}

/// Ordering applied to a filtered result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Score descending, then name ascending
    #[default]
    Relevance,
    PriceAscending,
    PriceDescending,
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "price-low" | "price-asc" | "price-ascending" => Ok(Self::PriceAscending),
            "price-high" | "price-desc" | "price-descending" => Ok(Self::PriceDescending),
            other => Err(Error::InvalidInput(format!("unknown sort mode '{other}'"))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Relevance => "relevance",
            Self::PriceAscending => "price-low",
            Self::PriceDescending => "price-high",
        };
        f.write_str(label)
    }
}

/// Transient UI state driving a search pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free text from the search box, possibly empty
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort_mode: SortMode,
}

impl FilterState {
    #[must_use]
    pub fn new(
        search_term: impl Into<String>,
        category: CategoryFilter,
        sort_mode: SortMode,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            category,
            sort_mode,
        }
    }
}

/// Decide whether a product is part of the result set.
///
/// True when the category passes `category` and either the term is empty
/// or the case-folded name or description contains the case-folded term.
#[must_use]
pub fn matches(product: &Product, search_term: &str, category: &CategoryFilter) -> bool {
    if !category.accepts(&product.category) {
        return false;
    }
    if search_term.is_empty() {
        return true;
    }

    let term = search_term.to_lowercase();
    product.name.to_lowercase().contains(&term)
        || product.description.to_lowercase().contains(&term)
}
