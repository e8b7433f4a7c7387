//! Candidate enumeration strategies.
//!
//! The valuation of a single candidate is fixed; only how candidates are
//! produced varies. Alternative strategies (coarse-to-fine, bisection along
//! one axis) can be substituted without touching the valuation logic.

use carbon_eq_domain::DomainError;
use carbon_eq_domain::value_objects::PricePair;

/// Trait for producing the candidate price pairs to evaluate.
pub trait SearchStrategy {
    /// Returns the candidates in a deterministic order.
    fn candidates(&self) -> Result<Vec<PricePair>, DomainError>;

    /// Human-readable strategy name.
    fn name(&self) -> &'static str;
}

/// Exhaustive enumeration over an evenly spaced two-dimensional price grid.
///
/// Both axes span the same price range with `resolution` points each,
/// endpoints included; candidates are emitted row-major with the stock price
/// as the outer axis.
#[derive(Debug, Clone)]
pub struct GridSearch {
    /// Inclusive (min, max) price range shared by both axes.
    pub price_range: (f64, f64),
    /// Number of points per axis.
    pub resolution: usize,
}

impl GridSearch {
    /// Default price range tested per axis.
    pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 1000.0);

    /// Default number of points per axis.
    pub const DEFAULT_RESOLUTION: usize = 100;

    /// Creates a grid search with the default range and resolution.
    #[must_use]
    pub fn new() -> Self {
        Self {
            price_range: Self::DEFAULT_PRICE_RANGE,
            resolution: Self::DEFAULT_RESOLUTION,
        }
    }

    /// Sets the price range.
    #[must_use]
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = (min, max);
        self
    }

    /// Sets the per-axis resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    fn validate(&self) -> Result<(), DomainError> {
        let (min, max) = self.price_range;
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min >= max {
            return Err(DomainError::invalid(
                "price_range",
                format!("must satisfy 0 <= min < max, got ({min}, {max})"),
            ));
        }
        if self.resolution < 2 {
            return Err(DomainError::invalid(
                "resolution",
                "must be at least 2 points per axis",
            ));
        }
        Ok(())
    }

    /// Evenly spaced axis points, endpoints included.
    fn axis(&self) -> Vec<f64> {
        let (min, max) = self.price_range;
        let step = (max - min) / (self.resolution - 1) as f64;
        (0..self.resolution).map(|i| min + step * i as f64).collect()
    }
}

impl Default for GridSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStrategy for GridSearch {
    fn candidates(&self) -> Result<Vec<PricePair>, DomainError> {
        self.validate()?;

        let axis = self.axis();
        let mut candidates = Vec::with_capacity(axis.len() * axis.len());
        for &stock_price in &axis {
            for &flow_price in &axis {
                candidates.push(PricePair::new(stock_price, flow_price));
            }
        }
        Ok(candidates)
    }

    fn name(&self) -> &'static str {
        "Grid Search"
    }
}
