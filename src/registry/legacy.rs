//! The legacy three-map inventory shape.
//!
//! Older consumers expect product data split across parallel maps keyed by
//! id (`Productos`, `Precios`, `Stock`). The registry keeps a single ordered
//! map internally and only produces or reads this shape at the boundary.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inventory state as three parallel maps keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacySnapshot {
    #[serde(rename = "Productos")]
    pub names: BTreeMap<u32, String>,
    #[serde(rename = "Precios")]
    pub prices: BTreeMap<u32, Decimal>,
    #[serde(rename = "Stock")]
    pub stock: BTreeMap<u32, u32>,
}

impl LegacySnapshot {
    /// The catalogue every session starts with.
    pub fn seed() -> Self {
        let rows = [
            (1, "Pantalones", Decimal::new(20000, 2), 50),
            (2, "Camisas", Decimal::new(12000, 2), 45),
            (3, "Corbatas", Decimal::new(5000, 2), 30),
            (4, "Casacas", Decimal::new(35000, 2), 15),
        ];

        let mut snapshot = Self::default();
        for (id, name, price, stock) in rows {
            snapshot.names.insert(id, name.to_string());
            snapshot.prices.insert(id, price);
            snapshot.stock.insert(id, stock);
        }
        snapshot
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_maps_share_keys() {
        let seed = LegacySnapshot::seed();
        assert_eq!(seed.len(), 4);
        assert!(seed.names.keys().eq(seed.prices.keys()));
        assert!(seed.names.keys().eq(seed.stock.keys()));
        assert_eq!(seed.names[&3], "Corbatas");
        assert_eq!(seed.prices[&4].to_string(), "350.00");
    }
}
