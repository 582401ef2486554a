use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::sample::sample_products;
use crate::catalog::{Product, ProductId, ProductStore};
use crate::{Error, Result};

/// In-memory catalog backed by an ordered product list.
///
/// Products keep the order they were supplied in; lookups by id go
/// through a side index. The catalog is immutable once built.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl MemoryCatalog {
    /// Build a catalog, rejecting duplicate ids and invalid prices.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(Error::Catalog(format!(
                    "product {} has invalid price {}",
                    product.id, product.price
                )));
            }
            if index.insert(product.id, position).is_some() {
                return Err(Error::Catalog(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The built-in static catalog used by the storefront pages.
    #[must_use]
    pub fn sample() -> Self {
        let products = sample_products();
        let index = products
            .iter()
            .enumerate()
            .map(|(position, p)| (p.id, position))
            .collect();
        Self { products, index }
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl ProductStore for MemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

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

    #[test]
    fn test_from_products_keeps_order() {
        let catalog = MemoryCatalog::from_products(vec![
            make_product(3, "c", "X", 1.0),
            make_product(1, "a", "X", 1.0),
            make_product(2, "b", "Y", 1.0),
        ])
        .unwrap();

        let ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.get(1).unwrap().name, "a");
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = MemoryCatalog::from_products(vec![
            make_product(1, "a", "X", 1.0),
            make_product(1, "b", "X", 2.0),
        ]);

        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_negative_price_rejected() {
        let result = MemoryCatalog::from_products(vec![make_product(1, "a", "X", -5.0)]);
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = MemoryCatalog::from_products(vec![
            make_product(1, "a", "Footwear", 1.0),
            make_product(2, "b", "Clothing", 1.0),
            make_product(3, "c", "Footwear", 1.0),
        ])
        .unwrap();

        assert_eq!(catalog.categories(), vec!["Footwear", "Clothing"]);
    }

    #[test]
    fn test_summary() {
        let mut out_of_stock = make_product(3, "c", "Y", 5.0);
        out_of_stock.stock = 0;
        let catalog = MemoryCatalog::from_products(vec![
            make_product(1, "a", "X", 50.0),
            make_product(2, "b", "X", 20.0),
            out_of_stock,
        ])
        .unwrap();

        let summary = catalog.summary();
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.min_price, Some(5.0));
        assert_eq!(summary.max_price, Some(50.0));
        assert_eq!(summary.in_stock, 2);
    }

    #[test]
    fn test_summary_empty() {
        let catalog = MemoryCatalog::from_products(Vec::new()).unwrap();
        let summary = catalog.summary();

        assert!(catalog.is_empty());
        assert_eq!(summary.min_price, None);
        assert_eq!(summary.max_price, None);
    }

    #[test]
    fn test_json_missing_optional_fields() {
        let json = r#"[{"id": 7, "name": "Mug", "category": "Home & Kitchen", "price": 9.5}]"#;
        let catalog = MemoryCatalog::from_json_str(json).unwrap();
        let mug = catalog.get(7).unwrap();

        assert_eq!(mug.description, "");
        assert_eq!(mug.image, "");
        assert_eq!(mug.stock, 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "name": "Red Shoe", "category": "Footwear", "price": 50}}]"#
        )
        .unwrap();

        let catalog = MemoryCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let sample = MemoryCatalog::sample();
        let rebuilt = MemoryCatalog::from_products(sample.products().to_vec());

        assert!(rebuilt.is_ok());
        assert!(!sample.is_empty());
    }
}
