//! Full engine run: valuation, search, summary.

use crate::equilibrium::search_equilibrium_prices;
use crate::strategy::SearchStrategy;
use crate::summary::summarize;
use carbon_eq_domain::DomainError;
use carbon_eq_domain::config::{LandUseParams, SimulationConfig};
use carbon_eq_domain::value_objects::RunArtifacts;
use carbon_eq_simulation::monte_carlo::MonteCarloRunner;

/// Runs the complete simulation and returns the report plus the raw arrays.
///
/// The competitiveness threshold is the configured percentile of the
/// conventional NPV distribution; the search itself only ever sees the
/// scalar. Everything returned is created fresh for this run.
pub fn run_full_simulation<S: SearchStrategy>(
    config: &SimulationConfig,
    land_use: &LandUseParams,
    seed: u64,
    strategy: &S,
) -> Result<RunArtifacts, DomainError> {
    let distribution = MonteCarloRunner::new(config.clone(), land_use.clone(), seed).run()?;

    let threshold = distribution.percentile(config.competitiveness_percentile);
    tracing::info!(
        trials = distribution.len(),
        threshold,
        "conventional valuation complete"
    );

    let equilibrium = search_equilibrium_prices(config, threshold, strategy)?;
    let report = summarize(&distribution, &equilibrium, config.competitiveness_percentile)?;

    Ok(RunArtifacts {
        report,
        distribution,
        equilibrium,
    })
}
