//! # Interactive Controller
//!
//! The menu loop that mediates between the operator and the
//! [`ProductRegistry`].
//!
//! ## Structure
//!
//! - [`state`] - [`MenuState`] and its pure transition function
//! - [`input`] - prompting and number parsing
//! - [`render`] - product table and menu text
//!
//! ## Failure Semantics
//!
//! Validation, lookup and parse errors are reported as a single
//! `Error: ...` line and the loop returns to the menu. Only
//! [fatal](InventoryError::is_fatal) errors (closed input, I/O failure)
//! end [`Controller::run`] with an `Err`.
//!
//! The controller is generic over its input and output so tests can drive a
//! whole session from a `Cursor` and inspect everything that was printed.

pub mod input;
pub mod render;
pub mod state;

pub use state::*;

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument, warn};

use crate::model::{Product, ProductId, ProductUpdate};
use crate::registry::{InventoryError, ProductRegistry};
use crate::runtime::Config;
use input::{optional, parse_id, parse_price, parse_stock, prompt_line};

pub const MSG_ADDED: &str = "Producto agregado exitosamente.";
pub const MSG_DELETED: &str = "Producto eliminado exitosamente.";
pub const MSG_UPDATED: &str = "Producto actualizado exitosamente.";
pub const MSG_FAREWELL: &str = "Saliendo del programa...";

/// Drives the menu state machine over a registry it owns.
pub struct Controller<R, W> {
    registry: ProductRegistry,
    input: R,
    output: W,
    config: Config,
    state: MenuState,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    pub fn new(registry: ProductRegistry, input: R, output: W, config: Config) -> Self {
        Self {
            registry,
            input,
            output,
            config,
            state: MenuState::Menu,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn registry(&self) -> &ProductRegistry {
        &self.registry
    }

    /// Hands back the registry and output, e.g. to inspect a finished session.
    pub fn into_parts(self) -> (ProductRegistry, W) {
        (self.registry, self.output)
    }

    /// Runs the menu until the operator exits.
    ///
    /// # Errors
    /// Returns only fatal errors; everything else is reported inline.
    pub fn run(&mut self) -> Result<(), InventoryError> {
        info!(size = self.registry.len(), "Menu started");
        while !self.state.is_terminal() {
            let event = self.step()?;
            let next = self.state.next(event);
            debug!(from = ?self.state, ?event, to = ?next, "Transition");
            self.state = next;
        }
        info!(size = self.registry.len(), "Menu finished");
        Ok(())
    }

    /// Handles the current state once and reports what happened.
    pub fn step(&mut self) -> Result<MenuEvent, InventoryError> {
        match self.state {
            MenuState::Menu => self.show_menu(),
            MenuState::CollectAdd => {
                let result = self.collect_add();
                self.report(result.map(|_| ()), "agregar", MSG_ADDED)
            }
            MenuState::CollectDelete => {
                let result = self.collect_delete();
                self.report(result.map(|_| ()), "eliminar", MSG_DELETED)
            }
            MenuState::CollectUpdate => {
                let result = self.collect_update();
                self.report(result.map(|_| ()), "actualizar", MSG_UPDATED)
            }
            MenuState::Exit => Ok(MenuEvent::Done),
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, InventoryError> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }

    fn show_menu(&mut self) -> Result<MenuEvent, InventoryError> {
        render::write_table(&mut self.output, self.registry.list(), self.config.separator_length)?;
        render::write_menu(&mut self.output)?;
        let raw = self.prompt("Seleccione una opción: ")?;

        match MenuOption::parse(&raw) {
            Ok(MenuOption::Exit) => {
                writeln!(self.output, "{MSG_FAREWELL}")?;
                Ok(MenuEvent::Selected(MenuOption::Exit))
            }
            Ok(option) => Ok(MenuEvent::Selected(option)),
            Err(e) => {
                warn!(input = %raw, error = %e, "Rejected menu choice");
                writeln!(self.output, "Error: {e}")?;
                Ok(MenuEvent::Rejected)
            }
        }
    }

    #[instrument(skip(self))]
    fn collect_add(&mut self) -> Result<ProductId, InventoryError> {
        let name = self.prompt("Ingrese nombre del producto: ")?;
        let price = parse_price(&self.prompt("Ingrese precio del producto: ")?)?;
        let stock = parse_stock(&self.prompt("Ingrese cantidad en stock: ")?)?;
        self.registry.add(name, price, stock)
    }

    #[instrument(skip(self))]
    fn collect_delete(&mut self) -> Result<Product, InventoryError> {
        let id = parse_id(&self.prompt("Ingrese ID del producto a eliminar: ")?)?;
        self.registry.delete(id)
    }

    #[instrument(skip(self))]
    fn collect_update(&mut self) -> Result<Product, InventoryError> {
        let id = parse_id(&self.prompt("Ingrese ID del producto a actualizar: ")?)?;
        let current = self
            .registry
            .get(id)
            .map(render::format_current)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        writeln!(self.output, "{current}")?;

        let name = self.prompt("Nuevo nombre (Enter para mantener actual): ")?;
        let price = self.prompt("Nuevo precio (Enter para mantener actual): ")?;
        let stock = self.prompt("Nueva cantidad (Enter para mantener actual): ")?;

        let update = ProductUpdate {
            name: (!name.trim().is_empty()).then_some(name),
            price: optional(&price, parse_price)?,
            stock: optional(&stock, parse_stock)?,
        };
        self.registry.update(id, update)
    }

    /// Prints the outcome of a collect state; only fatal errors escape.
    fn report(
        &mut self,
        result: Result<(), InventoryError>,
        operation: &str,
        success: &str,
    ) -> Result<MenuEvent, InventoryError> {
        match result {
            Ok(()) => writeln!(self.output, "{success}")?,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(operation, error = %e, "Operation failed");
                writeln!(self.output, "Error: Error al {operation} producto: {e}")?;
            }
        }
        Ok(MenuEvent::Done)
    }
}
