//! Revenue sampling models.
//!
//! Each conventional revenue stream (cattle, soy) is sampled once per run as
//! a full vector indexed by trial. Generators own an explicitly seeded
//! source, so runs are reproducible and parallel streams stay independent.

use carbon_eq_domain::DomainError;
use carbon_eq_domain::config::RevenueProfile;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};

/// Trait for drawing per-trial revenue samples.
pub trait RevenueModel {
    /// Draws `count` independent revenue values, one per trial.
    fn sample(&mut self, count: usize) -> Vec<f64>;
}

/// Normally distributed annual revenue.
pub struct NormalRevenue {
    normal: Normal<f64>,
    rng: SmallRng,
}

impl NormalRevenue {
    /// Creates a generator for `N(mean, std_dev)` draws.
    ///
    /// A zero standard deviation degenerates to a constant sequence. The
    /// seed fixes the sample stream; two generators with distinct seeds are
    /// statistically independent.
    pub fn new(profile: RevenueProfile, seed: u64) -> Result<Self, DomainError> {
        let normal = Normal::new(profile.mean, profile.std_dev).map_err(|e| {
            DomainError::invalid("std_dev", format!("invalid normal distribution: {e}"))
        })?;

        Ok(Self {
            normal,
            rng: SmallRng::seed_from_u64(seed),
        })
    }
}

impl RevenueModel for NormalRevenue {
    fn sample(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.normal.sample(&mut self.rng)).collect()
    }
}

/// Replays a fixed revenue value.
///
/// Useful for tests and fully deterministic valuations.
#[derive(Debug, Clone)]
pub struct FixedRevenue {
    /// The constant revenue value.
    pub value: f64,
}

impl FixedRevenue {
    /// Creates a fixed revenue model.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl RevenueModel for FixedRevenue {
    fn sample(&mut self, count: usize) -> Vec<f64> {
        vec![self.value; count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_length() {
        let mut model = NormalRevenue::new(RevenueProfile::new(800.0, 200.0), 7).unwrap();
        assert_eq!(model.sample(1000).len(), 1000);
    }

    #[test]
    fn test_zero_std_dev_is_constant() {
        let mut model = NormalRevenue::new(RevenueProfile::new(800.0, 0.0), 7).unwrap();
        let samples = model.sample(100);
        assert!(samples.iter().all(|&v| v == 800.0));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let profile = RevenueProfile::new(6100.0, 300.0);
        let mut a = NormalRevenue::new(profile, 42).unwrap();
        let mut b = NormalRevenue::new(profile, 42).unwrap();
        assert_eq!(a.sample(50), b.sample(50));
    }

    #[test]
    fn test_distinct_seeds_distinct_streams() {
        let profile = RevenueProfile::new(6100.0, 300.0);
        let mut a = NormalRevenue::new(profile, 1).unwrap();
        let mut b = NormalRevenue::new(profile, 2).unwrap();
        assert_ne!(a.sample(50), b.sample(50));
    }

    #[test]
    fn test_negative_std_dev_is_rejected() {
        let result = NormalRevenue::new(RevenueProfile::new(800.0, -1.0), 7);
        assert!(result.is_err());
    }

    #[test]
    fn test_samples_track_the_mean() {
        let mut model = NormalRevenue::new(RevenueProfile::new(800.0, 200.0), 99).unwrap();
        let samples = model.sample(20_000);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        // 200 / sqrt(20000) ≈ 1.4, so 10 is a comfortable band.
        assert!((mean - 800.0).abs() < 10.0);
    }

    #[test]
    fn test_fixed_revenue() {
        let mut model = FixedRevenue::new(123.0);
        assert_eq!(model.sample(3), vec![123.0, 123.0, 123.0]);
    }
}
