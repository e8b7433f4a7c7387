use serde::{Deserialize, Serialize};

/// A candidate (stock price, flow price) combination to evaluate.
///
/// Stock price is the one-time payment per tCO2 of standing biomass; flow
/// price is the recurring annual payment per tCO2 absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    /// One-time stock credit price per tCO2.
    pub stock_price: f64,
    /// Annual flow credit price per tCO2.
    pub flow_price: f64,
}

impl PricePair {
    /// Creates a new price pair.
    #[must_use]
    pub fn new(stock_price: f64, flow_price: f64) -> Self {
        Self {
            stock_price,
            flow_price,
        }
    }
}
