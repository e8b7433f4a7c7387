use thiserror::Error;

/// Errors produced by the engine crates.
///
/// An empty equilibrium set is deliberately not represented here: finding no
/// viable price combination is a normal outcome and flows through
/// [`crate::value_objects::PriceRecommendation::NotFound`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A configuration field failed validation before any sampling ran.
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A computation produced a non-finite value that must not reach
    /// summary statistics.
    #[error("non-finite value produced while computing {context}")]
    NonFiniteComputation {
        /// What was being computed.
        context: &'static str,
    },
}

impl DomainError {
    /// Shorthand for an [`DomainError::InvalidConfiguration`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
