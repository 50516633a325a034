//! Prompting and parsing of operator input.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::model::ProductId;
use crate::registry::InventoryError;

/// Writes `prompt`, then reads one line with the line ending removed.
///
/// End of input is reported as [`InventoryError::InputClosed`]. A line that
/// is not valid UTF-8 is consumed and reported as [`InventoryError::InputParse`],
/// so the stream stays usable for the next prompt.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, InventoryError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut bytes = Vec::new();
    if input.read_until(b'\n', &mut bytes)? == 0 {
        return Err(InventoryError::InputClosed);
    }
    let line = String::from_utf8(bytes).map_err(|_| {
        InventoryError::InputParse("Entrada no válida: el texto no es UTF-8".to_string())
    })?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn parse_id(raw: &str) -> Result<ProductId, InventoryError> {
    raw.trim()
        .parse::<u32>()
        .map(ProductId)
        .map_err(|_| InventoryError::InputParse(format!("Por favor ingrese un ID válido: '{}'", raw.trim())))
}

pub fn parse_price(raw: &str) -> Result<Decimal, InventoryError> {
    Decimal::from_str(raw.trim()).map_err(|_| {
        InventoryError::InputParse(format!("Por favor ingrese un precio válido: '{}'", raw.trim()))
    })
}

pub fn parse_stock(raw: &str) -> Result<i64, InventoryError> {
    raw.trim().parse::<i64>().map_err(|_| {
        InventoryError::InputParse(format!("Por favor ingrese una cantidad válida: '{}'", raw.trim()))
    })
}

/// Parses `raw` unless it is blank, in which case the field is left unchanged.
pub fn optional<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Result<T, InventoryError>,
) -> Result<Option<T>, InventoryError> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse(raw).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    #[test]
    fn test_prompt_line_strips_line_ending() {
        let mut input = Cursor::new("Zapatos\r\nnext\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Nombre: ").unwrap();
        assert_eq!(line, "Zapatos");
        assert_eq!(String::from_utf8(output).unwrap(), "Nombre: ");
    }

    #[test]
    fn test_prompt_line_reports_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = prompt_line(&mut input, &mut output, "> ").unwrap_err();
        assert!(matches!(err, InventoryError::InputClosed));
    }

    #[test]
    fn test_prompt_line_rejects_invalid_utf8_and_keeps_reading() {
        let mut input = Cursor::new(b"Camis\xf1a\nCamisa\n".to_vec());
        let mut output = Vec::new();

        let err = prompt_line(&mut input, &mut output, "> ").unwrap_err();
        assert!(matches!(err, InventoryError::InputParse(_)));
        assert!(!err.is_fatal());
        assert_eq!(prompt_line(&mut input, &mut output, "> ").unwrap(), "Camisa");
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_id(" 3 ").unwrap(), ProductId(3));
        assert_eq!(parse_price("250").unwrap(), dec!(250));
        assert_eq!(parse_price("19.99").unwrap(), dec!(19.99));
        assert_eq!(parse_stock("-4").unwrap(), -4);
    }

    #[test]
    fn test_parse_errors_name_the_input() {
        let err = parse_price("abc").unwrap_err();
        assert_eq!(err.to_string(), "Por favor ingrese un precio válido: 'abc'");
        assert!(matches!(parse_id("-1"), Err(InventoryError::InputParse(_))));
        assert!(matches!(parse_stock("2.5"), Err(InventoryError::InputParse(_))));
    }

    #[test]
    fn test_optional_skips_blank_input() {
        assert_eq!(optional("", parse_stock).unwrap(), None);
        assert_eq!(optional("  ", parse_stock).unwrap(), None);
        assert_eq!(optional("7", parse_stock).unwrap(), Some(7));
        assert!(optional("x", parse_stock).is_err());
    }
}
