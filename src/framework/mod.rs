//! Generic framework for in-memory resource management.
//!
//! This module provides the building blocks for type-safe registries that
//! manage resource entities with CRUD operations.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Generic ordered store that owns the entities
//! - [`StoreError`] - Common error types

pub mod core;

// Re-export core types for convenience
pub use core::*;
