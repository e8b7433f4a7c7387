//! Retained price-grid points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price combination whose conservation NPV cleared the competitiveness
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceGridPoint {
    /// One-time stock credit price per tCO2.
    pub stock_price: Decimal,
    /// Annual flow credit price per tCO2.
    pub flow_price: Decimal,
    /// Conservation NPV at this price combination.
    pub conservation_npv: Decimal,
}

impl PriceGridPoint {
    /// Creates a new grid point.
    #[must_use]
    pub fn new(stock_price: Decimal, flow_price: Decimal, conservation_npv: Decimal) -> Self {
        Self {
            stock_price,
            flow_price,
            conservation_npv,
        }
    }
}

/// All retained grid points of one search.
///
/// May legitimately be empty when no combination within the searched range
/// clears the threshold; downstream summarization must not assume otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumSet {
    /// Retained points, in candidate enumeration order.
    pub points: Vec<PriceGridPoint>,
}

impl EquilibriumSet {
    /// Wraps a vector of retained points.
    #[must_use]
    pub fn new(points: Vec<PriceGridPoint>) -> Self {
        Self { points }
    }

    /// Number of retained points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no point cleared the threshold.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the retained points.
    pub fn iter(&self) -> impl Iterator<Item = &PriceGridPoint> {
        self.points.iter()
    }
}
