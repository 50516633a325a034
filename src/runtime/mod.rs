//! Runtime setup for the binary.
//!
//! This module contains the infrastructure around the menu itself:
//!
//! - **Configuration**: [`Config`] and the [`Cli`] flags it is built from
//! - **Observability setup**: [`setup_tracing`]

pub mod config;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::setup_tracing;
