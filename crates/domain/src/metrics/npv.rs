//! Discounted cash flow metrics.

use crate::error::DomainError;

/// Discounts a cash-flow vector to present value.
///
/// Computes `sum(cash_flows[t] / (1 + discount_rate)^t)` with year zero
/// undiscounted. A zero discount rate simply sums the raw cash flows.
///
/// # Arguments
///
/// * `cash_flows` - Annual cash flows indexed by year, starting at year 0
/// * `discount_rate` - Annual discount rate as a decimal fraction
///
/// # Errors
///
/// Returns [`DomainError::NonFiniteComputation`] if a discount factor or the
/// accumulated value stops being finite, so that overflow never leaks into
/// summary statistics.
pub fn present_value(cash_flows: &[f64], discount_rate: f64) -> Result<f64, DomainError> {
    let growth = 1.0 + discount_rate;
    let mut discount: f64 = 1.0;
    let mut total = 0.0;

    for &flow in cash_flows {
        if !discount.is_finite() || discount == 0.0 {
            return Err(DomainError::NonFiniteComputation {
                context: "discount factor",
            });
        }
        total += flow / discount;
        discount *= growth;
    }

    if !total.is_finite() {
        return Err(DomainError::NonFiniteComputation {
            context: "net present value",
        });
    }

    Ok(total)
}

/// Capital recovery factor `r(1+r)^n / ((1+r)^n - 1)`.
///
/// Converts a present value into the equivalent constant annual payment over
/// `periods` years. With a zero rate this degenerates to `1 / periods`.
///
/// # Errors
///
/// Returns [`DomainError::NonFiniteComputation`] when `periods` is zero or
/// the compounding term is not finite.
pub fn annuity_factor(rate: f64, periods: usize) -> Result<f64, DomainError> {
    if periods == 0 {
        return Err(DomainError::NonFiniteComputation {
            context: "annuity factor",
        });
    }
    if rate == 0.0 {
        return Ok(1.0 / periods as f64);
    }

    let compound = (1.0 + rate).powi(periods as i32);
    let factor = rate * compound / (compound - 1.0);
    if !factor.is_finite() {
        return Err(DomainError::NonFiniteComputation {
            context: "annuity factor",
        });
    }
    Ok(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_sums_raw_flows() {
        let flows = [100.0, 200.0, 300.0];
        let npv = present_value(&flows, 0.0).unwrap();
        assert_eq!(npv, 600.0);
    }

    #[test]
    fn test_year_zero_is_undiscounted() {
        // Only year 0 is non-zero, so the NPV equals that flow exactly.
        let flows = [5000.0, 0.0, 0.0, 0.0];
        let npv = present_value(&flows, 0.25).unwrap();
        assert_eq!(npv, 5000.0);
    }

    #[test]
    fn test_two_year_discounting() {
        // 5690 + 95 / 1.08
        let flows = [5690.0, 95.0];
        let npv = present_value(&flows, 0.08).unwrap();
        assert!((npv - 5777.962962962963).abs() < 1e-9);
    }

    #[test]
    fn test_empty_vector_is_zero() {
        assert_eq!(present_value(&[], 0.08).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_flow_is_rejected() {
        let flows = [f64::INFINITY, 1.0];
        assert!(matches!(
            present_value(&flows, 0.08),
            Err(DomainError::NonFiniteComputation { .. })
        ));
    }

    #[test]
    fn test_annuity_factor_zero_rate() {
        assert_eq!(annuity_factor(0.0, 30).unwrap(), 1.0 / 30.0);
    }

    #[test]
    fn test_annuity_factor_recovers_present_value() {
        // Paying `pv * factor` every year for n years discounts back to pv.
        let rate = 0.08;
        let periods = 30;
        let factor = annuity_factor(rate, periods).unwrap();

        let payment = 1000.0 * factor;
        // Annuity payments run years 1..=n.
        let mut flows = vec![0.0; periods + 1];
        for flow in flows.iter_mut().skip(1) {
            *flow = payment;
        }
        let pv = present_value(&flows, rate).unwrap();
        assert!((pv - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_annuity_factor_zero_periods() {
        assert!(annuity_factor(0.08, 0).is_err());
    }
}
