//! Monte Carlo valuation of the conventional land use alternative.

use crate::cash_flow::conventional_cash_flows;
use crate::revenue::{NormalRevenue, RevenueModel};
use carbon_eq_domain::DomainError;
use carbon_eq_domain::config::{LandUseParams, SimulationConfig};
use carbon_eq_domain::metrics::npv::present_value;
use carbon_eq_domain::value_objects::NpvDistribution;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Runs the conventional land use valuation across all trials.
pub struct MonteCarloRunner {
    /// Run configuration.
    pub config: SimulationConfig,
    /// Conventional land use parameters.
    pub land_use: LandUseParams,
    /// Base seed; per-stream sub-seeds are derived from it.
    pub seed: u64,
}

impl MonteCarloRunner {
    /// Creates a runner for one valuation.
    #[must_use]
    pub fn new(config: SimulationConfig, land_use: LandUseParams, seed: u64) -> Self {
        Self {
            config,
            land_use,
            seed,
        }
    }

    /// Produces the empirical NPV distribution, one entry per trial.
    ///
    /// Both revenue streams are sampled up front as full per-trial vectors;
    /// each trial then reads only its own slot, so trials are evaluated in
    /// parallel and gathered back in trial-index order. Identical seed and
    /// configuration reproduce the distribution exactly.
    pub fn run(&self) -> Result<NpvDistribution, DomainError> {
        self.config.validate()?;
        self.land_use.validate()?;

        // Independent sub-seed per revenue stream.
        let mut seeder = SmallRng::seed_from_u64(self.seed);
        let cattle_seed = seeder.next_u64();
        let soy_seed = seeder.next_u64();

        let cattle_revenues =
            NormalRevenue::new(self.land_use.cattle, cattle_seed)?.sample(self.config.trials);
        let soy_revenues =
            NormalRevenue::new(self.land_use.soy, soy_seed)?.sample(self.config.trials);

        let timber_value = self.land_use.timber_value;
        let discount_rate = self.config.discount_rate;
        let time_horizon = self.config.time_horizon;

        let npvs = (0..self.config.trials)
            .into_par_iter()
            .map(|trial| {
                let flows = conventional_cash_flows(
                    timber_value,
                    cattle_revenues[trial],
                    soy_revenues[trial],
                    time_horizon,
                );
                present_value(&flows, discount_rate)
            })
            .collect::<Result<Vec<f64>, DomainError>>()?;

        Ok(NpvDistribution::new(npvs))
    }
}
