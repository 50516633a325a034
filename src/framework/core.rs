//! # Core Resource Framework
//!
//! This module defines the generic building blocks for the in-memory registry.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all resource types must implement.
//! - [`SequentialId`]: Identifiers the store can allocate on its own.
//! - [`ResourceStore`]: The generic store that owns entities and runs CRUD on them.
//! - [`StoreError`]: Common errors (e.g., NotFound, Rejected).

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use tracing::{debug, info, warn};


// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Identifier type that can be allocated in increasing order.
///
/// The store never reuses an identifier: it remembers the highest one it has
/// seen and always hands out the successor of that value.
pub trait SequentialId: Ord + Copy + Display + Debug {
    /// The identifier handed out by an empty store.
    fn first() -> Self;

    /// The identifier following `self`, or `None` once the id space is exhausted.
    fn next(&self) -> Option<Self>;
}

/// Trait that any resource entity must implement to be managed by [`ResourceStore`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that resource types must satisfy, the CRUD
/// bookkeeping (id allocation, ordering, not-found handling, logging) is written
/// *once* in [`ResourceStore`], and the entity only supplies its own rules.
///
/// Associated types keep payloads apart: a `Product` store only accepts
/// `ProductCreate` and `ProductUpdate` payloads.
///
/// # Provided Methods (Hooks)
/// - [`Entity::on_delete`] defaults to `Ok(())`.
pub trait Entity: Clone + Debug {
    /// The unique identifier for this entity.
    type Id: SequentialId;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Debug;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Called when an update request is received.
    ///
    /// Implementations must leave `self` untouched when they return an error.
    fn on_update(&mut self, update: Self::UpdateParams) -> Result<(), String>;

    /// Called immediately before the entity is removed from the store.
    fn on_delete(&self) -> Result<(), String> { Ok(()) }
}

// =============================================================================
// 2. THE GENERIC ERRORS
// =============================================================================

/// Errors produced by the store itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Duplicate id: {0}")]
    Duplicate(String),
    #[error("Id space exhausted")]
    Exhausted,
    /// An entity hook refused the request.
    #[error("{0}")]
    Rejected(String),
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// The generic store that owns a collection of entities.
///
/// Entities are kept in a `BTreeMap` keyed by id. Because ids are only ever
/// allocated upwards, key order is insertion order, so listing needs no
/// separate ordering index.
pub struct ResourceStore<T: Entity> {
    items: BTreeMap<T::Id, T>,
    high_water: Option<T::Id>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            high_water: None,
        }
    }

    fn entity_type() -> &'static str {
        // Extract just the type name (e.g., "Product" instead of "inventory_menu::model::product::Product")
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    fn allocate_id(&self) -> Result<T::Id, StoreError> {
        match self.high_water {
            None => Ok(T::Id::first()),
            Some(last) => last.next().ok_or(StoreError::Exhausted),
        }
    }

    fn bump_high_water(&mut self, id: T::Id) {
        if self.high_water.map_or(true, |last| id > last) {
            self.high_water = Some(id);
        }
    }

    /// Creates a new entity under a freshly allocated id.
    pub fn create(&mut self, params: T::CreateParams) -> Result<T::Id, StoreError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");

        let id = self.allocate_id()?;
        self.insert_new(entity_type, id, params)?;
        Ok(id)
    }

    /// Inserts an entity under a caller-chosen id, e.g. when importing data.
    pub fn import(&mut self, id: T::Id, params: T::CreateParams) -> Result<(), StoreError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?params, "Import");

        if self.items.contains_key(&id) {
            warn!(entity_type, %id, "Duplicate id");
            return Err(StoreError::Duplicate(id.to_string()));
        }
        self.insert_new(entity_type, id, params)
    }

    fn insert_new(
        &mut self,
        entity_type: &'static str,
        id: T::Id,
        params: T::CreateParams,
    ) -> Result<(), StoreError> {
        let item = T::from_create_params(id, params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            StoreError::Rejected(e)
        })?;
        self.items.insert(id, item);
        self.bump_high_water(id);
        info!(entity_type, %id, size = self.items.len(), "Created");
        Ok(())
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.items.get(id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    /// All entities in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn update(&mut self, id: &T::Id, update: T::UpdateParams) -> Result<T, StoreError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");

        let Some(item) = self.items.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(StoreError::Rejected(e));
        }
        info!(entity_type, %id, "Updated");
        Ok(item.clone())
    }

    pub fn delete(&mut self, id: &T::Id) -> Result<T, StoreError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Delete");

        let Some(item) = self.items.get(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete() {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(StoreError::Rejected(e));
        }
        let removed = self.items.remove(id).ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!(entity_type, %id, size = self.items.len(), "Deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
