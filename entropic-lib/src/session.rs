//! Browsing session
//!
//! Owns everything one storefront visitor mutates: the current filter
//! controls and the cart. Created when the visitor arrives, dropped when
//! they leave; views only reach the state through these methods.

use tracing::debug;

use crate::cart::Cart;
use crate::catalog::{Product, ProductId, ProductStore};
use crate::search::{CategoryFilter, FilterState, SearchEngine, SortMode};
use crate::{Error, Result};

/// State container for a single browsing session.
pub struct Session<S: ProductStore> {
    engine: SearchEngine<S>,
    filter: FilterState,
    cart: Cart,
}

impl<S: ProductStore> Session<S> {
    /// Start a session with an empty cart and cleared filters.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_cart(store, Cart::new())
    }

    /// Start a session around an existing cart (e.g. one restored from a snapshot).
    #[must_use]
    pub fn with_cart(store: S, cart: Cart) -> Self {
        Self {
            engine: SearchEngine::new(store),
            filter: FilterState::default(),
            cart,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.filter.sort_mode = mode;
    }

    /// Back to an empty search, all categories, relevance order.
    pub fn reset_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// Products for the current filter state, in display order.
    pub fn results(&self) -> Vec<&Product> {
        self.engine.search(&self.filter)
    }

    /// Add one unit of a catalog product to the cart.
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<()> {
        self.add_quantity(id, 1)
    }

    /// Add `quantity` units of a catalog product to the cart.
    pub fn add_quantity(&mut self, id: ProductId, quantity: u32) -> Result<()> {
        let product = self
            .engine
            .store()
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("product {id}")))?;

        self.cart.add_quantity(product, quantity);
        debug!("session: cart holds {} items", self.cart.total_items());
        Ok(())
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub fn engine(&self) -> &SearchEngine<S> {
        &self.engine
    }

    /// End the session, handing back the cart.
    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.cart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn make_product(id: ProductId, name: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            price,
            image: String::new(),
            stock: 1,
        }
    }

    fn session() -> Session<MemoryCatalog> {
        let catalog = MemoryCatalog::from_products(vec![
            make_product(1, "Red Shoe", "Footwear", 50.0),
            make_product(2, "Blue Shoe", "Footwear", 30.0),
            make_product(3, "Red Shirt", "Clothing", 20.0),
        ])
        .unwrap();
        Session::new(catalog)
    }

    #[test]
    fn test_filter_changes_rerun_search() {
        let mut session = session();
        assert_eq!(session.results().len(), 3);

        session.set_search_term("shoe");
        assert_eq!(session.results().len(), 2);

        session.set_category(CategoryFilter::Only("Clothing".to_string()));
        assert!(session.results().is_empty());

        session.reset_filters();
        assert_eq!(session.filter(), &FilterState::default());
        assert_eq!(session.results().len(), 3);
    }

    #[test]
    fn test_sort_mode() {
        let mut session = session();
        session.set_sort_mode(SortMode::PriceDescending);

        let ids: Vec<_> = session.results().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_cart_is_independent_of_filters() {
        let mut session = session();
        session.add_to_cart(1).unwrap();
        session.add_to_cart(1).unwrap();
        session.set_search_term("nothing matches this");

        assert!(session.results().is_empty());
        assert_eq!(session.cart().total_items(), 2);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = session();
        let result = session.add_to_cart(42);

        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_add_quantity() {
        let mut session = session();
        session.add_quantity(2, 3).unwrap();
        session.add_to_cart(2).unwrap();

        assert_eq!(session.cart().quantity_of(2), 4);
        assert!((session.cart().total_price() - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_into_cart() {
        let mut session = session();
        session.add_to_cart(3).unwrap();
        session.cart_mut().update_quantity(3, 4);

        let cart = session.into_cart();
        assert_eq!(cart.quantity_of(3), 4);
    }
}
