//! Entropic - storefront core library
//!
//! # Architecture
//!
//! ```text
//! Catalog (static) --> Filter --> Scorer --> Sort --> product grid
//!        |                 ^
//!        |            FilterState (search box, category, sort)
//!        v
//!      Cart <-- "add to cart" on a product card
//! ```
//!
//! A [`session::Session`] owns the filter state and the cart for one
//! visitor. The chat widget and the registration form sit beside it and
//! never touch the cart.
//!
//! # Example
//!
//! ```ignore
//! use entropic_lib::{catalog::MemoryCatalog, search::{CategoryFilter, SortMode}, session::Session};
//!
//! let mut session = Session::new(MemoryCatalog::sample());
//! session.set_search_term("shoe");
//! session.set_sort_mode(SortMode::PriceAscending);
//!
//! for product in session.results() {
//!     println!("{} ${:.2}", product.name, product.price);
//! }
//!
//! session.add_to_cart(4)?;
//! println!("{} items in cart", session.cart().total_items());
//! ```

pub mod cart;
pub mod catalog;
pub mod chat;
pub mod error;
pub mod register;
pub mod score;
pub mod search;
pub mod session;

pub use error::{Error, Result};
