//! Empirical NPV distribution produced by the Monte Carlo valuation.

use serde::{Deserialize, Serialize};

/// Ordered collection of per-trial NPV values.
///
/// Created once per run and never mutated afterwards. The order matches the
/// trial index assignment, so identical seeds reproduce identical
/// distributions regardless of scheduling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpvDistribution {
    values: Vec<f64>,
}

impl NpvDistribution {
    /// Wraps a vector of per-trial NPVs.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of trials in the distribution.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the distribution holds no trials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw per-trial values, in trial order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Arithmetic mean of the distribution.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Nearest-rank percentile, `p` in (0, 1).
    ///
    /// Sorts a copy; the distribution itself stays untouched.
    #[must_use]
    pub fn percentile(&self, p: f64) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let idx = (sorted.len() as f64 * p).floor() as usize;
        sorted[idx.min(sorted.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let dist = NpvDistribution::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(dist.mean(), 2.5);
    }

    #[test]
    fn test_percentile_is_order_independent() {
        let dist = NpvDistribution::new(vec![40.0, 10.0, 30.0, 20.0]);
        assert_eq!(dist.percentile(0.75), 40.0);
        // Original ordering is preserved.
        assert_eq!(dist.values(), &[40.0, 10.0, 30.0, 20.0]);
    }

    #[test]
    fn test_percentile_single_value() {
        let dist = NpvDistribution::new(vec![6900.0]);
        assert_eq!(dist.percentile(0.75), 6900.0);
        assert_eq!(dist.mean(), 6900.0);
    }

    #[test]
    fn test_empty_distribution_degenerates_to_zero() {
        let dist = NpvDistribution::new(Vec::new());
        assert!(dist.is_empty());
        assert_eq!(dist.mean(), 0.0);
        assert_eq!(dist.percentile(0.5), 0.0);
    }
}
