//! # Product Registry
//!
//! The in-memory collection of [`Product`] records the menu operates on.
//!
//! ## Structure
//!
//! - [`entity`] - [`Entity`](crate::framework::Entity) implementation for [`Product`]
//! - [`error`] - [`InventoryError`] type for type-safe error handling
//! - [`legacy`] - [`LegacySnapshot`], the three-map shape used by [`ProductRegistry::save`]
//!
//! ## Usage
//!
//! ```rust
//! use inventory_menu::model::ProductUpdate;
//! use inventory_menu::registry::ProductRegistry;
//! use rust_decimal::Decimal;
//!
//! let mut registry = ProductRegistry::seeded().unwrap();
//! let id = registry.add("Zapatos", Decimal::new(250, 0), 20).unwrap();
//! registry
//!     .update(id, ProductUpdate { stock: Some(18), ..Default::default() })
//!     .unwrap();
//! registry.delete(id).unwrap();
//! ```

pub mod entity;
pub mod error;
pub mod legacy;

pub use error::*;
pub use legacy::*;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::framework::ResourceStore;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};

/// Domain facade over [`ResourceStore<Product>`].
///
/// Maps store errors to [`InventoryError`] and speaks in product terms
/// (`add`, `delete`, `update`, `save`) rather than generic CRUD.
#[derive(Default)]
pub struct ProductRegistry {
    store: ResourceStore<Product>,
}

impl ProductRegistry {
    /// An empty registry; the first product added gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the [`LegacySnapshot::seed`] catalogue.
    pub fn seeded() -> Result<Self, InventoryError> {
        Self::from_legacy(&LegacySnapshot::seed())
    }

    /// Builds a registry from the legacy three-map shape.
    ///
    /// Every record is validated like a regular `add`. An id missing from any
    /// of `Productos`, `Precios` or `Stock` is rejected, as is id 0.
    pub fn from_legacy(snapshot: &LegacySnapshot) -> Result<Self, InventoryError> {
        if let Some(id) = snapshot
            .prices
            .keys()
            .chain(snapshot.stock.keys())
            .find(|id| !snapshot.names.contains_key(id))
        {
            return Err(InventoryError::Validation(format!(
                "Falta el nombre del producto {id}"
            )));
        }

        let mut registry = Self::new();
        for (&id, name) in &snapshot.names {
            if id == 0 {
                return Err(InventoryError::Validation(
                    "ID de producto inválido: 0".to_string(),
                ));
            }
            let price = snapshot.prices.get(&id).ok_or_else(|| {
                InventoryError::Validation(format!("Falta el precio del producto {id}"))
            })?;
            let stock = snapshot.stock.get(&id).ok_or_else(|| {
                InventoryError::Validation(format!("Falta el stock del producto {id}"))
            })?;
            let params = ProductCreate {
                name: name.clone(),
                price: *price,
                stock: i64::from(*stock),
            };
            registry.store.import(ProductId(id), params)?;
        }
        info!(size = registry.len(), "Registry loaded");
        Ok(registry)
    }

    /// All products in insertion order.
    pub fn list(&self) -> Vec<&Product> {
        self.store.list().collect()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.store.get(&id)
    }

    /// Adds a product under the next unused id and returns that id.
    ///
    /// Duplicate names are accepted.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        price: Decimal,
        stock: i64,
    ) -> Result<ProductId, InventoryError> {
        let params = ProductCreate {
            name: name.into(),
            price,
            stock,
        };
        Ok(self.store.create(params)?)
    }

    /// Removes the product and returns it.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, InventoryError> {
        Ok(self.store.delete(&id)?)
    }

    /// Replaces the supplied fields of a product and returns the result.
    ///
    /// Either every supplied field is applied or, on a validation error, none is.
    pub fn update(
        &mut self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, InventoryError> {
        Ok(self.store.update(&id, update)?)
    }

    /// Exports the current state in the legacy three-map shape.
    pub fn save(&self) -> LegacySnapshot {
        let mut snapshot = LegacySnapshot::default();
        for product in self.store.list() {
            let id = product.id().0;
            snapshot.names.insert(id, product.name().to_string());
            snapshot.prices.insert(id, product.price());
            snapshot.stock.insert(id, product.stock());
        }
        debug!(size = snapshot.len(), "Registry saved");
        snapshot
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
