use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cart::Cart;
use crate::catalog::{ProductId, ProductStore};
use crate::Result;

/// Persisted form of a cart: ids and quantities only.
///
/// Prices are not stored; restoring re-reads them from the catalog so a
/// reload never resurrects a stale price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<SnapshotLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartSnapshot {
    /// Read a snapshot file. A missing file is an empty cart.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the snapshot as JSON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!("Saved cart with {} lines to {}", self.lines.len(), path.display());
        Ok(())
    }
}

impl Cart {
    /// Capture ids and quantities for persistence.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self
                .lines()
                .map(|l| SnapshotLine {
                    product_id: l.product.id,
                    quantity: l.quantity,
                })
                .collect(),
        }
    }

    /// Rebuild a cart against the current catalog.
    ///
    /// Lines whose product has left the catalog, or whose quantity is
    /// zero, are dropped.
    pub fn from_snapshot<S: ProductStore + ?Sized>(snapshot: &CartSnapshot, store: &S) -> Self {
        let mut cart = Cart::new();
        for line in &snapshot.lines {
            match store.get(line.product_id) {
                Some(product) => cart.add_quantity(product, line.quantity),
                None => warn!(
                    "Dropping cart line for product {} no longer in catalog",
                    line.product_id
                ),
            }
        }
        cart
    }
}
