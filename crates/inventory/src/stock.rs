//! Stock classifier: maps stock + reorder level to a tier.

use serde::{Deserialize, Serialize};

/// Stock classification outcome, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockTier {
    OutOfStock,
    Critical,
    Low,
    WellStocked,
}

impl StockTier {
    /// Badge label shown next to a product.
    pub fn label(self) -> &'static str {
        match self {
            StockTier::OutOfStock => "OUT OF STOCK",
            StockTier::Critical => "CRITICAL",
            StockTier::Low => "LOW STOCK",
            StockTier::WellStocked => "IN STOCK",
        }
    }

    /// True for every tier at or below the reorder level.
    pub fn needs_reorder(self) -> bool {
        !matches!(self, StockTier::WellStocked)
    }
}

impl core::fmt::Display for StockTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// `ceil(reorder_level * 0.5)`, computed exactly in integers.
pub fn critical_threshold(reorder_level: u32) -> u32 {
    reorder_level.div_ceil(2)
}

/// Classify a stock level. Rules are checked in order:
///
/// 1. `stock == 0` → [`StockTier::OutOfStock`]
/// 2. `stock <= ceil(reorder_level / 2)` → [`StockTier::Critical`]
/// 3. `stock <= reorder_level` → [`StockTier::Low`]
/// 4. otherwise → [`StockTier::WellStocked`]
pub fn classify(stock: u32, reorder_level: u32) -> StockTier {
    if stock == 0 {
        StockTier::OutOfStock
    } else if stock <= critical_threshold(reorder_level) {
        StockTier::Critical
    } else if stock <= reorder_level {
        StockTier::Low
    } else {
        StockTier::WellStocked
    }
}
