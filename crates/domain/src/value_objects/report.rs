//! Scalar recommendation records returned to the presentation layer.

use crate::value_objects::{EquilibriumSet, NpvDistribution};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Recommended carbon credit prices, or the explicit absence of any viable
/// combination.
///
/// Replaces an unguarded min/median reduction over a possibly empty set: the
/// empty case is a normal outcome, surfaced as [`PriceRecommendation::NotFound`]
/// so callers can react by widening the price range or resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PriceRecommendation {
    /// At least one price combination makes conservation competitive.
    Found {
        /// Smallest retained stock credit price.
        min_stock_price: Decimal,
        /// Smallest retained flow credit price.
        min_flow_price: Decimal,
        /// Median retained stock credit price.
        recommended_stock_price: Decimal,
        /// Median retained flow credit price.
        recommended_flow_price: Decimal,
    },
    /// No combination within the searched range cleared the threshold.
    NotFound,
}

impl PriceRecommendation {
    /// True when a viable price combination was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Mean NPV of the conventional land use distribution.
    pub conventional_npv_mean: Decimal,
    /// Competitiveness threshold taken from the conventional distribution.
    pub conventional_npv_percentile: Decimal,
    /// Recommended carbon credit prices, if any combination is viable.
    pub recommendation: PriceRecommendation,
}

/// Everything a run returns to its caller.
///
/// The report carries the scalar metrics; the raw distribution and retained
/// grid are included so the presentation layer can chart or export them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunArtifacts {
    /// Scalar summary record.
    pub report: SimulationReport,
    /// Full conventional NPV distribution, one entry per trial.
    pub distribution: NpvDistribution,
    /// Full set of retained price combinations.
    pub equilibrium: EquilibriumSet,
}
