use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum InventoryCategory {
    Feed,
    Medicine,
    Trays,
    Packaging,
    Diesel,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InventoryUnit {
    Kg,
    Liters,
    Units,
    Bottles,
}

/// Farm-wide stock item with its reorder threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub category: InventoryCategory,
    pub unit: InventoryUnit,
    pub stock: f64,
    pub low_stock_threshold: f64,
    pub supplier: String,
}

impl InventoryItem {
    /// Threshold is inclusive: an item sitting exactly at its threshold is
    /// already low.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInventoryItem {
    #[validate(length(min = 1))]
    pub name: String,
    pub category: InventoryCategory,
    pub unit: InventoryUnit,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub stock: f64,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub low_stock_threshold: f64,
    #[serde(default)]
    pub supplier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: f64, threshold: f64) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            name: "Calcium Vita".into(),
            category: InventoryCategory::Medicine,
            unit: InventoryUnit::Bottles,
            stock,
            low_stock_threshold: threshold,
            supplier: "Pharma Solutions".into(),
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(!item(50.0, 10.0).is_low_stock());
        assert!(item(10.0, 10.0).is_low_stock());
        assert!(item(9.0, 10.0).is_low_stock());
    }
}
