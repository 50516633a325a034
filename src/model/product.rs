//! Product records and their validation rules.
//!
//! [`Product`] implements the [`Entity`](crate::framework::Entity) trait,
//! allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
//! See [`crate::registry::entity`] for the trait implementation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt::Display;

/// Shortest accepted product name, counted after trimming.
pub const NAME_MIN_LEN: usize = 1;
/// Longest accepted product name, counted after trimming.
pub const NAME_MAX_LEN: usize = 50;
/// Lowest accepted price (0.01).
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
/// Highest accepted price (999999.99).
pub const MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);
pub const MIN_STOCK: i64 = 0;
pub const MAX_STOCK: i64 = 99_999;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product field failed its bounds check.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("El nombre debe tener entre {} y {} caracteres", NAME_MIN_LEN, NAME_MAX_LEN)]
    Name,

    #[error("El precio debe estar entre {} y {}", MIN_PRICE, MAX_PRICE)]
    Price(Decimal),

    #[error("El stock debe estar entre {} y {}", MIN_STOCK, MAX_STOCK)]
    Stock(i64),
}

/// Trims `name` and checks its length in characters.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::Name);
    }
    Ok(trimmed.to_string())
}

pub fn validate_price(price: Decimal) -> Result<Decimal, ValidationError> {
    if price < MIN_PRICE || price > MAX_PRICE {
        return Err(ValidationError::Price(price));
    }
    Ok(price)
}

pub fn validate_stock(stock: i64) -> Result<u32, ValidationError> {
    if !(MIN_STOCK..=MAX_STOCK).contains(&stock) {
        return Err(ValidationError::Stock(stock));
    }
    u32::try_from(stock).map_err(|_| ValidationError::Stock(stock))
}

/// A validated inventory record.
///
/// Fields are private so every value that reaches the registry has passed
/// [`validate_name`], [`validate_price`] and [`validate_stock`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Decimal,
    stock: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (allocated by the store)
    /// * `name` - Product name, trimmed before validation
    /// * `price` - Unit price
    /// * `stock` - Available quantity; signed so negative input can be rejected
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] hit, checking name, price, then stock.
    pub fn new(
        id: ProductId,
        name: &str,
        price: Decimal,
        stock: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: validate_name(name)?,
            price: validate_price(price)?,
            stock: validate_stock(stock)?,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Applies an update after validating every supplied field.
    ///
    /// Nothing is changed unless all supplied fields are valid.
    pub fn apply(&mut self, update: ProductUpdate) -> Result<(), ValidationError> {
        let name = update.name.as_deref().map(validate_name).transpose()?;
        let price = update.price.map(validate_price).transpose()?;
        let stock = update.stock.map(validate_stock).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(stock) = stock {
            self.stock = stock;
        }
        Ok(())
    }
}

/// DTO for Product creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
}

/// DTO for Product updates. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bounds_render_as_expected() {
        assert_eq!(MIN_PRICE.to_string(), "0.01");
        assert_eq!(MAX_PRICE.to_string(), "999999.99");
    }

    #[test]
    fn test_new_trims_name() {
        let product = Product::new(ProductId(1), "  Zapatos ", dec!(250), 20).unwrap();
        assert_eq!(product.name(), "Zapatos");
        assert_eq!(product.price(), dec!(250));
        assert_eq!(product.stock(), 20);
    }

    #[test]
    fn test_rejects_invalid_fields() {
        assert_eq!(Product::new(ProductId(1), "", dec!(1), 1), Err(ValidationError::Name));
        assert_eq!(Product::new(ProductId(1), "   ", dec!(1), 1), Err(ValidationError::Name));
        assert_eq!(
            Product::new(ProductId(1), &"x".repeat(NAME_MAX_LEN + 1), dec!(1), 1),
            Err(ValidationError::Name)
        );
        assert_eq!(
            Product::new(ProductId(1), "Gorra", dec!(0), 1),
            Err(ValidationError::Price(dec!(0)))
        );
        assert_eq!(
            Product::new(ProductId(1), "Gorra", dec!(-5), 1),
            Err(ValidationError::Price(dec!(-5)))
        );
        assert_eq!(
            Product::new(ProductId(1), "Gorra", dec!(1000000), 1),
            Err(ValidationError::Price(dec!(1000000)))
        );
        assert_eq!(
            Product::new(ProductId(1), "Gorra", dec!(10), -1),
            Err(ValidationError::Stock(-1))
        );
        assert_eq!(
            Product::new(ProductId(1), "Gorra", dec!(10), MAX_STOCK + 1),
            Err(ValidationError::Stock(MAX_STOCK + 1))
        );
    }

    #[test]
    fn test_name_length_counts_characters() {
        let accented = "ñ".repeat(NAME_MAX_LEN);
        assert!(validate_name(&accented).is_ok());
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut product = Product::new(ProductId(2), "Camisas", dec!(120.00), 45).unwrap();
        let before = product.clone();

        let update = ProductUpdate {
            name: Some("Polos".into()),
            price: Some(dec!(130)),
            stock: Some(-3),
        };
        assert_eq!(product.apply(update), Err(ValidationError::Stock(-3)));
        assert_eq!(product, before);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut product = Product::new(ProductId(2), "Camisas", dec!(120.00), 45).unwrap();
        product
            .apply(ProductUpdate { price: Some(dec!(130)), ..Default::default() })
            .unwrap();
        assert_eq!(product.name(), "Camisas");
        assert_eq!(product.price(), dec!(130));
        assert_eq!(product.stock(), 45);
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Name.to_string(),
            "El nombre debe tener entre 1 y 50 caracteres"
        );
        assert_eq!(
            ValidationError::Price(dec!(0)).to_string(),
            "El precio debe estar entre 0.01 y 999999.99"
        );
        assert_eq!(
            ValidationError::Stock(-1).to_string(),
            "El stock debe estar entre 0 y 99999"
        );
    }

    proptest! {
        #[test]
        fn valid_fields_always_construct(
            name in "[A-Za-z][A-Za-z0-9 ]{0,49}",
            cents in 1i64..=99_999_999,
            stock in MIN_STOCK..=MAX_STOCK,
        ) {
            let price = Decimal::new(cents, 2);
            let product = Product::new(ProductId(1), &name, price, stock).unwrap();
            prop_assert_eq!(product.name(), name.trim());
            prop_assert_eq!(product.price(), price);
            prop_assert_eq!(i64::from(product.stock()), stock);
        }

        #[test]
        fn negative_stock_is_rejected(stock in i64::MIN..0) {
            prop_assert_eq!(validate_stock(stock), Err(ValidationError::Stock(stock)));
        }

        #[test]
        fn non_positive_price_is_rejected(cents in -1_000_000i64..=0) {
            let price = Decimal::new(cents, 2);
            prop_assert_eq!(validate_price(price), Err(ValidationError::Price(price)));
        }
    }
}
