//! Run configuration for the pricing engine.
//!
//! A [`SimulationConfig`] plus [`LandUseParams`] fully describe one engine
//! invocation. Both are validated up front so that invalid input is rejected
//! before any sampling occurs.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Percentile of the conventional NPV distribution that conservation must
/// meet or beat to be considered competitive.
pub const COMPETITIVENESS_PERCENTILE: f64 = 0.75;

/// Default number of Monte Carlo trials.
pub const DEFAULT_TRIALS: usize = 100_000;

/// Default annual discount rate.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.08;

/// Default valuation horizon in years.
pub const DEFAULT_TIME_HORIZON: usize = 30;

/// Default standing carbon stock in tCO2 per hectare.
pub const DEFAULT_CARBON_STOCK: f64 = 569.0;

/// Default annual carbon absorption in tCO2 per hectare per year.
pub const DEFAULT_ANNUAL_ABSORPTION: f64 = 9.5;

/// Configuration for a simulation run.
///
/// Immutable for the duration of a run; every run owns its own copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of Monte Carlo trials.
    pub trials: usize,
    /// Annual discount rate as a decimal fraction (0.08 = 8%).
    pub discount_rate: f64,
    /// Valuation horizon in years.
    pub time_horizon: usize,
    /// Standing carbon stock in tCO2 per hectare.
    pub carbon_stock: f64,
    /// Annual carbon absorption in tCO2 per hectare per year.
    pub annual_absorption: f64,
    /// Percentile of the conventional NPV distribution used as the
    /// competitiveness threshold.
    pub competitiveness_percentile: f64,
}

impl SimulationConfig {
    /// Creates a new config with the default carbon constants.
    #[must_use]
    pub fn new(trials: usize, discount_rate: f64, time_horizon: usize) -> Self {
        Self {
            trials,
            discount_rate,
            time_horizon,
            carbon_stock: DEFAULT_CARBON_STOCK,
            annual_absorption: DEFAULT_ANNUAL_ABSORPTION,
            competitiveness_percentile: COMPETITIVENESS_PERCENTILE,
        }
    }

    /// Sets the standing carbon stock.
    #[must_use]
    pub fn with_carbon_stock(mut self, carbon_stock: f64) -> Self {
        self.carbon_stock = carbon_stock;
        self
    }

    /// Sets the annual carbon absorption.
    #[must_use]
    pub fn with_annual_absorption(mut self, annual_absorption: f64) -> Self {
        self.annual_absorption = annual_absorption;
        self
    }

    /// Sets the competitiveness percentile.
    #[must_use]
    pub fn with_competitiveness_percentile(mut self, percentile: f64) -> Self {
        self.competitiveness_percentile = percentile;
        self
    }

    /// Validates the configuration, naming the offending field on failure.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.trials == 0 {
            return Err(DomainError::invalid("trials", "must be positive"));
        }
        if self.time_horizon == 0 {
            return Err(DomainError::invalid("time_horizon", "must be positive"));
        }
        if !self.discount_rate.is_finite() || self.discount_rate < 0.0 || self.discount_rate >= 1.0
        {
            return Err(DomainError::invalid(
                "discount_rate",
                format!("must be within [0, 1), got {}", self.discount_rate),
            ));
        }
        if !self.carbon_stock.is_finite() || self.carbon_stock < 0.0 {
            return Err(DomainError::invalid(
                "carbon_stock",
                "must be finite and non-negative",
            ));
        }
        if !self.annual_absorption.is_finite() || self.annual_absorption < 0.0 {
            return Err(DomainError::invalid(
                "annual_absorption",
                "must be finite and non-negative",
            ));
        }
        if !self.competitiveness_percentile.is_finite()
            || self.competitiveness_percentile <= 0.0
            || self.competitiveness_percentile >= 1.0
        {
            return Err(DomainError::invalid(
                "competitiveness_percentile",
                "must be within (0, 1)",
            ));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TRIALS, DEFAULT_DISCOUNT_RATE, DEFAULT_TIME_HORIZON)
    }
}

/// Mean and standard deviation of one annual revenue stream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RevenueProfile {
    /// Mean annual revenue per hectare.
    pub mean: f64,
    /// Standard deviation of annual revenue per hectare.
    pub std_dev: f64,
}

impl RevenueProfile {
    /// Creates a new revenue profile.
    #[must_use]
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    /// Validates the profile under the given field name.
    ///
    /// A zero standard deviation is valid and degenerates to a constant
    /// revenue stream.
    pub fn validate(&self, field: &'static str) -> Result<(), DomainError> {
        if !self.mean.is_finite() || self.mean <= 0.0 {
            return Err(DomainError::invalid(field, "mean must be positive"));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(DomainError::invalid(
                field,
                "standard deviation must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Parameters of the conventional land use alternative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandUseParams {
    /// One-time timber extraction revenue at year zero. Zero disables timber.
    pub timber_value: f64,
    /// Cattle ranching revenue stream (even years).
    pub cattle: RevenueProfile,
    /// Soybean farming revenue stream (odd years).
    pub soy: RevenueProfile,
}

impl LandUseParams {
    /// Creates land use parameters.
    #[must_use]
    pub fn new(timber_value: f64, cattle: RevenueProfile, soy: RevenueProfile) -> Self {
        Self {
            timber_value,
            cattle,
            soy,
        }
    }

    /// Validates all conventional use inputs.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.timber_value.is_finite() || self.timber_value < 0.0 {
            return Err(DomainError::invalid(
                "timber_value",
                "must be finite and non-negative",
            ));
        }
        self.cattle.validate("cattle")?;
        self.soy.validate("soy")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.trials, 100_000);
        assert_eq!(config.time_horizon, 30);
        assert_eq!(config.competitiveness_percentile, COMPETITIVENESS_PERCENTILE);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SimulationConfig::new(1000, 0.05, 20)
            .with_carbon_stock(400.0)
            .with_annual_absorption(7.0)
            .with_competitiveness_percentile(0.9);

        assert_eq!(config.carbon_stock, 400.0);
        assert_eq!(config.annual_absorption, 7.0);
        assert_eq!(config.competitiveness_percentile, 0.9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_names_offending_field() {
        let cases = [
            (SimulationConfig::new(0, 0.08, 30), "trials"),
            (SimulationConfig::new(100, 0.08, 0), "time_horizon"),
            (SimulationConfig::new(100, 1.5, 30), "discount_rate"),
            (SimulationConfig::new(100, -0.01, 30), "discount_rate"),
            (
                SimulationConfig::new(100, 0.08, 30).with_carbon_stock(-1.0),
                "carbon_stock",
            ),
            (
                SimulationConfig::new(100, 0.08, 30).with_competitiveness_percentile(1.0),
                "competitiveness_percentile",
            ),
        ];

        for (config, expected_field) in cases {
            match config.validate() {
                Err(DomainError::InvalidConfiguration { field, .. }) => {
                    assert_eq!(field, expected_field);
                }
                other => panic!("expected InvalidConfiguration, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_zero_discount_rate_is_valid() {
        // Zero means "no discounting", not an error.
        let config = SimulationConfig::new(100, 0.0, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_std_dev_is_valid() {
        let profile = RevenueProfile::new(800.0, 0.0);
        assert!(profile.validate("cattle").is_ok());
    }

    #[test]
    fn test_land_use_rejects_negative_timber() {
        let params = LandUseParams::new(
            -5.0,
            RevenueProfile::new(800.0, 200.0),
            RevenueProfile::new(6100.0, 300.0),
        );
        assert!(matches!(
            params.validate(),
            Err(DomainError::InvalidConfiguration {
                field: "timber_value",
                ..
            })
        ));
    }

    #[test]
    fn test_land_use_rejects_negative_std_dev() {
        let params = LandUseParams::new(
            0.0,
            RevenueProfile::new(800.0, -1.0),
            RevenueProfile::new(6100.0, 300.0),
        );
        assert!(matches!(
            params.validate(),
            Err(DomainError::InvalidConfiguration { field: "cattle", .. })
        ));
    }
}
