//! # Inventory Menu
//!
//! > **A single-user, in-memory inventory tracker driven by a text menu.**
//!
//! An operator lists, adds, deletes and updates product records (name, price,
//! stock) during one interactive session. Nothing is persisted between runs.
//!
//! ## 🏗️ Design
//!
//! ### One ordered map instead of parallel maps
//! Products live in a single ordered map from id to [`Product`](model::Product).
//! Uniqueness and consistency of a record are checked in one place, and the
//! legacy three-map layout is only produced on demand by
//! [`ProductRegistry::save`](registry::ProductRegistry::save).
//!
//! ### Generic store, domain facade
//! [`ResourceStore<T>`](framework::ResourceStore) handles id allocation,
//! ordering, not-found errors and logging for any [`Entity`](framework::Entity).
//! [`ProductRegistry`](registry::ProductRegistry) wraps it with product
//! vocabulary and maps its errors to [`InventoryError`](registry::InventoryError).
//!
//! ### The menu is a state machine
//! [`MenuState`](controller::MenuState) has a pure transition function; the
//! [`Controller`](controller::Controller) performs the I/O for each state.
//! Every non-fatal error is reported and the loop resumes at the menu.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - the generic store and the `Entity` trait
//! - [`model`] - the `Product` record and its validation rules
//! - [`registry`] - the product registry, its errors and the legacy format
//! - [`controller`] - the interactive menu
//! - [`runtime`] - configuration and tracing setup for the binary
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the menu
//! cargo run
//!
//! # Show registry activity on stderr
//! RUST_LOG=info cargo run -- --separator-length 40
//! ```

pub mod controller;
pub mod framework;
pub mod model;
pub mod registry;
pub mod runtime;
