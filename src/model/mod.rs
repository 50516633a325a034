//! Pure data structures (DTOs) implementing the [`Entity`](crate::framework::Entity) trait.

pub mod product;

pub use product::*;
