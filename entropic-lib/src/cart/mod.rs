//! Shopping cart state
//!
//! A cart maps product ids to lines holding a product snapshot and a
//! positive quantity. Every operation is a total state transition: unknown
//! ids and non-positive quantities are absorbed rather than reported.
//!
//! The cart is a plain owned value. Whoever creates it (normally a
//! [`Session`](crate::session::Session)) is its only writer.
//!
//! # Usage
//!
//! ```ignore
//! use entropic_lib::cart::Cart;
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart(&product);
//! cart.add_to_cart(&product);
//! assert_eq!(cart.total_items(), 2);
//!
//! cart.update_quantity(product.id, 0); // removes the line
//! assert!(cart.is_empty());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Product, ProductId};

/// A product in the cart and how many of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always at least 1 while the line exists
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Cart keyed by product id.
///
/// Lines iterate in ascending id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: BTreeMap<ProductId, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, creating the line if needed.
    pub fn add_to_cart(&mut self, product: &Product) {
        self.add_quantity(product, 1);
    }

    /// Add `quantity` units of `product`. Adding zero does nothing.
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let line = self
            .lines
            .entry(product.id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(quantity))
            .or_insert_with(|| CartLine {
                product: product.clone(),
                quantity,
            });
        debug!("cart: product {} now at quantity {}", product.id, line.quantity);
    }

    /// Remove the line for `id`. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        if self.lines.remove(&id).is_some() {
            debug!("cart: removed product {id}");
        }
    }

    /// Set the quantity for `id`; zero or less removes the line.
    ///
    /// A positive quantity for an id not in the cart is ignored, since
    /// there is no product snapshot to create the line from.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }

        match self.lines.get_mut(&id) {
            Some(line) => {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                debug!("cart: product {id} set to quantity {}", line.quantity);
            }
            None => warn!("cart: ignoring quantity update for product {id} not in cart"),
        }
    }

    /// Sum of quantities across all lines (the header badge count).
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lines.values().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of quantity times unit price across all lines.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    /// Quantity held for `id`, 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.lines.get(&id).map_or(0, |l| l.quantity)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("cart: cleared");
    }

    /// Lines in ascending product id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

mod snapshot;

pub use snapshot::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: ProductId, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            category: "Footwear".to_string(),
            price,
            image: String::new(),
            stock: 10,
        }
    }

    #[test]
    fn test_add_twice_makes_one_line() {
        let mut cart = Cart::new();
        let shoe = make_product(1, 50.0);

        cart.add_to_cart(&shoe);
        cart.add_to_cart(&shoe);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(1), 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&make_product(1, 50.0));
        let before = cart.clone();

        cart.remove_from_cart(99);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_present() {
        let mut cart = Cart::new();
        cart.add_to_cart(&make_product(1, 50.0));
        cart.add_to_cart(&make_product(2, 30.0));

        cart.remove_from_cart(1);

        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&make_product(1, 50.0));

        cart.update_quantity(1, 5);
        assert_eq!(cart.quantity_of(1), 5);

        cart.update_quantity(1, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_negative_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&make_product(1, 50.0));

        cart.update_quantity(1, -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_id_is_ignored() {
        let mut cart = Cart::new();
        cart.update_quantity(7, 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        let shoe = make_product(1, 50.0);
        let shirt = make_product(3, 20.0);

        cart.add_to_cart(&shoe);
        cart.add_quantity(&shirt, 3);

        assert_eq!(cart.total_items(), 4);
        assert!((cart.total_price() - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add_quantity(&make_product(1, 50.0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_to_cart(&make_product(1, 50.0));
        cart.add_to_cart(&make_product(2, 30.0));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_lines_in_id_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&make_product(3, 1.0));
        cart.add_to_cart(&make_product(1, 1.0));

        let ids: Vec<_> = cart.lines().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
