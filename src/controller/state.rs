//! The menu as a finite-state machine.
//!
//! [`MenuState::next`] is a pure transition function; all I/O lives in
//! [`Controller`](super::Controller).

use crate::registry::InventoryError;

/// Where the menu loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Showing the product table and waiting for a choice.
    Menu,
    CollectAdd,
    CollectDelete,
    CollectUpdate,
    /// Terminal state.
    Exit,
}

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    Delete,
    Update,
    Exit,
}

impl MenuOption {
    /// Menu entries in display order.
    pub const ALL: [MenuOption; 4] = [
        MenuOption::Add,
        MenuOption::Delete,
        MenuOption::Update,
        MenuOption::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuOption::Add => 1,
            MenuOption::Delete => 2,
            MenuOption::Update => 3,
            MenuOption::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Add => "Agregar",
            MenuOption::Delete => "Eliminar",
            MenuOption::Update => "Actualizar",
            MenuOption::Exit => "Salir",
        }
    }

    /// Parses the operator's menu choice.
    pub fn parse(raw: &str) -> Result<Self, InventoryError> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(InventoryError::InputParse(
                "Debe ingresar un número válido".to_string(),
            ));
        }
        Self::ALL
            .into_iter()
            .find(|option| raw.parse::<u8>().is_ok_and(|n| n == option.number()))
            .ok_or_else(|| InventoryError::InputParse("Opción inválida".to_string()))
    }
}

/// What happened while the controller handled the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// A valid menu choice was read.
    Selected(MenuOption),
    /// The menu choice could not be used; stay in the menu.
    Rejected,
    /// A collect state finished, successfully or not.
    Done,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Exit, _) => MenuState::Exit,
            (MenuState::Menu, MenuEvent::Selected(option)) => match option {
                MenuOption::Add => MenuState::CollectAdd,
                MenuOption::Delete => MenuState::CollectDelete,
                MenuOption::Update => MenuState::CollectUpdate,
                MenuOption::Exit => MenuState::Exit,
            },
            // Rejected choices stay in the menu; finished collect states return to it.
            _ => MenuState::Menu,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == MenuState::Exit
    }
}
