//! Text rendering of the product table and menu.

use std::io::{self, Write};

use super::state::MenuOption;
use crate::model::Product;

pub const TABLE_TITLE: &str = "Lista de Productos:";
pub const TABLE_HEADER: &str = "ID  |  Nombre  |  Precio  |  Cantidad";

pub fn write_table<'a, W: Write>(
    out: &mut W,
    products: impl IntoIterator<Item = &'a Product>,
    separator_length: usize,
) -> io::Result<()> {
    let separator = "=".repeat(separator_length);
    writeln!(out, "{separator}")?;
    writeln!(out, "{TABLE_TITLE}")?;
    writeln!(out, "{TABLE_HEADER}")?;
    writeln!(out, "{separator}")?;
    for product in products {
        writeln!(out, "{}", format_row(product))?;
    }
    writeln!(out, "{separator}")
}

/// One table row; columns are padded the same way as the header.
pub fn format_row(product: &Product) -> String {
    // Padding is applied to pre-rendered strings; custom Display impls ignore width.
    let id = product.id().to_string();
    let price = format!("{:.2}", product.price());
    format!("{id:<4}|  {:<8}|  {price:<8}|  {}", product.name(), product.stock())
}

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    for option in MenuOption::ALL {
        writeln!(out, "[{}] {}", option.number(), option.label())?;
    }
    Ok(())
}

/// `Producto actual: <name> - <price> - Stock: <stock>`
pub fn format_current(product: &Product) -> String {
    format!(
        "Producto actual: {} - {:.2} - Stock: {}",
        product.name(),
        product.price(),
        product.stock()
    )
}
