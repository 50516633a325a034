//! Error types for the product registry and the menu built on it.

use thiserror::Error;

use crate::framework::StoreError;

/// Errors that can occur during inventory operations.
///
/// The `Display` text is the user-facing message printed by the menu.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product field is out of bounds.
    #[error("{0}")]
    Validation(String),

    /// No product carries the requested id.
    #[error("ID de producto no encontrado: {0}")]
    NotFound(String),

    /// Text was entered where a number was expected.
    #[error("{0}")]
    InputParse(String),

    /// The input stream reached its end.
    #[error("La entrada se cerró inesperadamente")]
    InputClosed,

    /// Reading input or writing output failed.
    #[error("Error de entrada/salida: {0}")]
    Io(#[from] std::io::Error),
}

impl InventoryError {
    /// Whether the menu loop must stop instead of reporting and resuming.
    pub fn is_fatal(&self) -> bool {
        matches!(self, InventoryError::InputClosed | InventoryError::Io(_))
    }
}

impl From<StoreError> for InventoryError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => InventoryError::NotFound(id),
            StoreError::Duplicate(id) => {
                InventoryError::Validation(format!("ID de producto duplicado: {id}"))
            }
            StoreError::Exhausted => {
                InventoryError::Validation("No quedan IDs de producto disponibles".to_string())
            }
            StoreError::Rejected(msg) => InventoryError::Validation(msg),
        }
    }
}
