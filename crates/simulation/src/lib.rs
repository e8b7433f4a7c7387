//! Monte Carlo valuation of conventional land use.
//!
//! This crate draws revenue samples, builds per-trial cash-flow vectors and
//! reduces them to an empirical NPV distribution. The price-grid search that
//! consumes the distribution lives in the optimization crate.

pub mod cash_flow;
pub mod monte_carlo;
pub mod prelude;
pub mod revenue;
