//! Product catalog
//!
//! The catalog is a static, ordered list of products loaded once per
//! session and never mutated afterwards. Search, scoring and the cart all
//! read from it through the [`ProductStore`] trait.
//!
//! # Usage
//!
//! ```ignore
//! use entropic_lib::catalog::{MemoryCatalog, ProductStore};
//!
//! let catalog = MemoryCatalog::load("catalog.json")?;
//! let headphones = catalog.get(1);
//! let labels = catalog.categories();
//! ```

use serde::{Deserialize, Serialize};

/// Stable product identifier, unique within a catalog
pub type ProductId = u32;

/// A product record as supplied by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Display name, searched case-insensitively
    pub name: String,
    /// Display description, searched case-insensitively
    #[serde(default)]
    pub description: String,
    /// Category label, compared exactly
    pub category: String,
    /// Unit price, never negative
    pub price: f64,
    /// Reference to the display asset
    #[serde(default)]
    pub image: String,
    /// Units on hand
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Returns `true` if at least one unit is on hand.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Aggregate figures over a whole catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_products: usize,
    pub categories: usize,
    /// Cheapest price, `None` for an empty catalog
    pub min_price: Option<f64>,
    /// Most expensive price, `None` for an empty catalog
    pub max_price: Option<f64>,
    /// Products with at least one unit on hand
    pub in_stock: usize,
}

/// Trait for read-only product catalogs
pub trait ProductStore: Send + Sync {
    /// All products in catalog order
    fn products(&self) -> &[Product];

    /// Look up a product by id
    fn get(&self, id: ProductId) -> Option<&Product>;

    /// Number of products in the catalog
    fn len(&self) -> usize {
        self.products().len()
    }

    /// Check if catalog is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct category labels in first-seen order
    fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = Vec::new();
        for product in self.products() {
            if !labels.iter().any(|l| *l == product.category) {
                labels.push(product.category.clone());
            }
        }
        labels
    }

    /// Summarize the catalog for dashboard display
    fn summary(&self) -> CatalogSummary {
        let products = self.products();
        let prices = products.iter().map(|p| p.price);

        CatalogSummary {
            total_products: products.len(),
            categories: self.categories().len(),
            min_price: prices.clone().min_by(f64::total_cmp),
            max_price: prices.max_by(f64::total_cmp),
            in_stock: products.iter().filter(|p| p.in_stock()).count(),
        }
    }
}

mod memory;
mod sample;

pub use memory::*;
