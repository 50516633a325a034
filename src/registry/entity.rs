//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`Entity`] trait implementation
//! that enables [`Product`] to be managed by the generic [`crate::framework::ResourceStore`].
//!
//! See the trait implementation on [`Product`] for method documentation.

use crate::framework::{Entity, SequentialId};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};

impl SequentialId for ProductId {
    fn first() -> Self {
        ProductId(1)
    }

    fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(ProductId)
    }
}

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        Product::new(id, &params.name, params.price, params.stock).map_err(|e| e.to_string())
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `name`: trimmed product name
    /// - `price`: unit price
    /// - `stock`: available quantity
    ///
    /// All supplied fields are validated before any of them is written.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), String> {
        self.apply(update).map_err(|e| e.to_string())
    }
}
