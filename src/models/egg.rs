use serde::{Deserialize, Serialize};

/// Eggs per large case ("petti").
pub const EGGS_PER_PETTI: i64 = 360;
/// Eggs per tray.
pub const EGGS_PER_TRAY: i64 = 30;

/// A quantity of eggs expressed in nested denominations: cases, trays and
/// loose eggs. Pure value type with no identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggStock {
    #[serde(default)]
    pub petti: i64,
    #[serde(default)]
    pub tray: i64,
    #[serde(default)]
    pub eggs: i64,
}

impl EggStock {
    pub fn new(petti: i64, tray: i64, eggs: i64) -> Self {
        Self { petti, tray, eggs }
    }

    /// Total egg count. Negative components propagate unchecked.
    pub fn total(&self) -> i64 {
        self.petti * EGGS_PER_PETTI + self.tray * EGGS_PER_TRAY + self.eggs
    }

    /// Greedy base-360/30 decomposition of a total count. Negative totals
    /// decompose by magnitude with negated denominations, so
    /// `from_total(t).total() == t` holds for every integer `t` and a
    /// negative closing stock stays visibly negative.
    pub fn from_total(total: i64) -> Self {
        let sign = if total < 0 { -1 } else { 1 };
        let magnitude = total.abs();
        Self {
            petti: sign * (magnitude / EGGS_PER_PETTI),
            tray: sign * (magnitude % EGGS_PER_PETTI / EGGS_PER_TRAY),
            eggs: sign * (magnitude % EGGS_PER_TRAY),
        }
    }
}

/// Opening stock, today's production and today's sales for one egg-size
/// category. Closing stock is always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EggCategoryProduction {
    #[serde(default)]
    pub opening: EggStock,
    #[serde(default)]
    pub today: EggStock,
    #[serde(default)]
    pub sale: EggStock,
}

impl EggCategoryProduction {
    /// Closing count: opening + today's production - today's sales. May be
    /// negative when sales exceed supply, which signals a data-entry error.
    pub fn closing_total(&self) -> i64 {
        self.opening.total() + self.today.total() - self.sale.total()
    }

    pub fn closing_stock(&self) -> EggStock {
        EggStock::from_total(self.closing_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_weights_denominations() {
        let stock = EggStock::new(2, 20, 5);
        assert_eq!(stock.total(), 2 * 360 + 20 * 30 + 5);
    }

    #[test]
    fn from_total_is_greedy() {
        let stock = EggStock::from_total(755);
        assert_eq!(stock, EggStock::new(2, 1, 5));
    }

    #[test]
    fn from_total_preserves_sign() {
        let stock = EggStock::from_total(-755);
        assert_eq!(stock, EggStock::new(-2, -1, -5));
        assert_eq!(stock.total(), -755);
    }

    #[test]
    fn closing_subtracts_sales() {
        let category = EggCategoryProduction {
            opening: EggStock::new(1, 0, 0),
            today: EggStock::new(0, 2, 10),
            sale: EggStock::new(0, 12, 0),
        };
        assert_eq!(category.closing_total(), 360 + 70 - 360);
        assert_eq!(category.closing_stock(), EggStock::new(0, 2, 10));
    }

    #[test]
    fn closing_may_go_negative() {
        let category = EggCategoryProduction {
            sale: EggStock::new(0, 1, 5),
            ..Default::default()
        };
        assert_eq!(category.closing_total(), -35);
        assert_eq!(category.closing_stock(), EggStock::new(0, -1, -5));
    }
}
