//! Deterministic valuation of candidate price pairs.

use crate::strategy::SearchStrategy;
use carbon_eq_domain::DomainError;
use carbon_eq_domain::config::SimulationConfig;
use carbon_eq_domain::metrics::npv::present_value;
use carbon_eq_domain::value_objects::{EquilibriumSet, PriceGridPoint};
use carbon_eq_simulation::cash_flow::conservation_cash_flows;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Finds the price combinations that make conservation competitive.
///
/// Every candidate from the strategy is valued independently: build the
/// conservation cash-flow vector, discount it, and retain the candidate iff
/// its NPV meets the threshold. The threshold is an opaque scalar here; the
/// caller derives it from the conventional NPV distribution. Candidates are
/// evaluated in parallel and gathered back in enumeration order, so the
/// retained set is deterministic.
///
/// An empty result is a normal outcome: no combination within the searched
/// range clears the threshold.
pub fn search_equilibrium_prices<S: SearchStrategy>(
    config: &SimulationConfig,
    competitiveness_threshold: f64,
    strategy: &S,
) -> Result<EquilibriumSet, DomainError> {
    config.validate()?;
    let candidates = strategy.candidates()?;

    let evaluated = candidates
        .par_iter()
        .map(|pair| {
            let flows = conservation_cash_flows(
                config.carbon_stock,
                pair.stock_price,
                config.annual_absorption,
                pair.flow_price,
                config.time_horizon,
            );
            let npv = present_value(&flows, config.discount_rate)?;

            if npv >= competitiveness_threshold {
                Ok(Some(PriceGridPoint::new(
                    to_decimal(pair.stock_price)?,
                    to_decimal(pair.flow_price)?,
                    to_decimal(npv)?,
                )))
            } else {
                Ok(None)
            }
        })
        .collect::<Result<Vec<Option<PriceGridPoint>>, DomainError>>()?;

    let retained: Vec<PriceGridPoint> = evaluated.into_iter().flatten().collect();

    tracing::debug!(
        strategy = strategy.name(),
        candidates = candidates.len(),
        retained = retained.len(),
        "equilibrium search complete"
    );

    Ok(EquilibriumSet::new(retained))
}

pub(crate) fn to_decimal(value: f64) -> Result<Decimal, DomainError> {
    Decimal::from_f64(value).ok_or(DomainError::NonFiniteComputation {
        context: "decimal conversion",
    })
}
