//! Reduction of a completed run into scalar recommendation metrics.

use crate::equilibrium::to_decimal;
use carbon_eq_domain::DomainError;
use carbon_eq_domain::value_objects::{
    EquilibriumSet, NpvDistribution, PriceRecommendation, SimulationReport,
};
use rust_decimal::Decimal;

/// Reduces the distribution and the retained grid points into a report.
///
/// `percentile` is the competitiveness percentile the threshold was taken
/// at. An empty equilibrium set produces
/// [`PriceRecommendation::NotFound`]; no reduction ever runs over an empty
/// collection.
pub fn summarize(
    distribution: &NpvDistribution,
    equilibrium: &EquilibriumSet,
    percentile: f64,
) -> Result<SimulationReport, DomainError> {
    let conventional_npv_mean = to_decimal(distribution.mean())?;
    let conventional_npv_percentile = to_decimal(distribution.percentile(percentile))?;

    let recommendation = if equilibrium.is_empty() {
        PriceRecommendation::NotFound
    } else {
        let stock_prices: Vec<Decimal> = equilibrium.iter().map(|p| p.stock_price).collect();
        let flow_prices: Vec<Decimal> = equilibrium.iter().map(|p| p.flow_price).collect();

        PriceRecommendation::Found {
            min_stock_price: *stock_prices.iter().min().unwrap_or(&Decimal::ZERO),
            min_flow_price: *flow_prices.iter().min().unwrap_or(&Decimal::ZERO),
            recommended_stock_price: median(stock_prices),
            recommended_flow_price: median(flow_prices),
        }
    };

    Ok(SimulationReport {
        conventional_npv_mean,
        conventional_npv_percentile,
        recommendation,
    })
}

/// Nearest-rank median. Callers guarantee a non-empty input.
fn median(mut values: Vec<Decimal>) -> Decimal {
    values.sort();
    values[values.len() / 2]
}
