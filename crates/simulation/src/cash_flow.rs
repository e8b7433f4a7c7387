//! Annual cash-flow construction for both land use alternatives.

/// Builds the conventional land use cash flows for a single trial.
///
/// Even years earn the trial's cattle revenue and odd years its soy revenue,
/// a simplified biennial rotation. The one-time timber payment is added on
/// top of year zero's cattle revenue, never replacing it. The trial's
/// revenue pair stays fixed over the whole horizon.
///
/// Output length always equals `time_horizon`.
#[must_use]
pub fn conventional_cash_flows(
    timber_value: f64,
    cattle_revenue: f64,
    soy_revenue: f64,
    time_horizon: usize,
) -> Vec<f64> {
    let mut flows = Vec::with_capacity(time_horizon);
    for year in 0..time_horizon {
        if year % 2 == 0 {
            flows.push(cattle_revenue);
        } else {
            flows.push(soy_revenue);
        }
    }

    if let Some(first) = flows.first_mut() {
        *first += timber_value;
    }

    flows
}

/// Builds the conservation cash flows for one candidate price pair.
///
/// Year zero is the one-time payment for the standing carbon stock; every
/// later year earns the recurring flow payment for newly absorbed carbon.
/// Year zero never receives the flow payment.
///
/// Output length always equals `time_horizon`.
#[must_use]
pub fn conservation_cash_flows(
    carbon_stock: f64,
    stock_price: f64,
    annual_absorption: f64,
    flow_price: f64,
    time_horizon: usize,
) -> Vec<f64> {
    let mut flows = vec![annual_absorption * flow_price; time_horizon];
    if let Some(first) = flows.first_mut() {
        *first = carbon_stock * stock_price;
    }
    flows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_length_matches_horizon() {
        for horizon in [1, 2, 7, 30, 50] {
            let flows = conventional_cash_flows(5000.0, 800.0, 6100.0, horizon);
            assert_eq!(flows.len(), horizon);
        }
    }

    #[test]
    fn test_year_zero_is_timber_plus_cattle() {
        let flows = conventional_cash_flows(5000.0, 800.0, 6100.0, 30);
        assert_eq!(flows[0], 5800.0);
    }

    #[test]
    fn test_rotation_parity() {
        let flows = conventional_cash_flows(0.0, 800.0, 6100.0, 6);
        assert_eq!(flows, vec![800.0, 6100.0, 800.0, 6100.0, 800.0, 6100.0]);
    }

    #[test]
    fn test_zero_timber_leaves_rotation_untouched() {
        let flows = conventional_cash_flows(0.0, 800.0, 6100.0, 4);
        assert_eq!(flows[0], 800.0);
    }

    #[test]
    fn test_conventional_empty_horizon() {
        assert!(conventional_cash_flows(5000.0, 800.0, 6100.0, 0).is_empty());
    }

    #[test]
    fn test_conservation_year_zero_is_stock_payment_only() {
        let flows = conservation_cash_flows(569.0, 10.0, 9.5, 10.0, 2);
        assert_eq!(flows, vec![5690.0, 95.0]);
    }

    #[test]
    fn test_conservation_flow_payment_recurs() {
        let flows = conservation_cash_flows(569.0, 10.0, 9.5, 20.0, 5);
        assert_eq!(flows[0], 5690.0);
        for &flow in &flows[1..] {
            assert_eq!(flow, 190.0);
        }
    }

    #[test]
    fn test_conservation_zero_coefficients() {
        let flows = conservation_cash_flows(0.0, 500.0, 0.0, 500.0, 10);
        assert!(flows.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_conservation_length_matches_horizon() {
        assert_eq!(conservation_cash_flows(569.0, 1.0, 9.5, 1.0, 30).len(), 30);
        assert!(conservation_cash_flows(569.0, 1.0, 9.5, 1.0, 0).is_empty());
    }
}
