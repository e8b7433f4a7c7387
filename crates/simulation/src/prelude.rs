//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use carbon_eq_simulation::prelude::*;
//! ```

// Cash-flow construction
pub use crate::cash_flow::{conservation_cash_flows, conventional_cash_flows};

// Monte Carlo
pub use crate::monte_carlo::MonteCarloRunner;

// Revenue models
pub use crate::revenue::{FixedRevenue, NormalRevenue, RevenueModel};
