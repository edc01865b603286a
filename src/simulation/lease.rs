//! Lease payment calculator
//!
//! Standard closed-end lease math: depreciation of the capitalized cost
//! down to a residual value, plus a finance charge on the sum of both,
//! taxed on every payment. The remaining obligation is a linear drawdown
//! of scheduled payments, not an amortizing principal.

use crate::assumptions::SimulationAssumptions;
use crate::plan::{Plan, PlanMode};
use super::schedule::{PaymentPoint, SimulationResult};

/// Project a lease plan into a payment and remaining-obligation curve
pub fn project(plan: &Plan, assumptions: &SimulationAssumptions) -> SimulationResult {
    if plan.term == 0 || plan.price <= 0.0 {
        return SimulationResult::empty(plan.id, PlanMode::Lease);
    }

    let capitalized_cost = (plan.price - plan.down_payment - plan.trade_in).max(0.0);
    let residual_rate = assumptions.residual.rate_for_term(plan.term);
    let residual_value = capitalized_cost * residual_rate;
    let money_factor = assumptions.money_factor(plan.apr);

    let term = plan.term as f64;
    let base_monthly =
        (capitalized_cost - residual_value) / term + (capitalized_cost + residual_value) * money_factor;

    let tax_rate = assumptions.tax_rate_for(plan);
    let monthly_payment = base_monthly * (1.0 + tax_rate / 100.0);

    // Level payments, so remaining obligation at month i is just the
    // payments left on the schedule. Month `term` lands on exactly zero.
    let points = (0..=plan.term)
        .map(|month| PaymentPoint {
            month,
            remaining: monthly_payment * (plan.term - month) as f64,
        })
        .collect();

    SimulationResult {
        plan_id: plan.id,
        mode: PlanMode::Lease,
        monthly_payment,
        financed_amount: capitalized_cost,
        sales_tax: (monthly_payment - base_monthly) * term,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn assumptions() -> SimulationAssumptions {
        SimulationAssumptions::default_retail()
    }

    fn lease_plan(id: u32, price: f64, term: u32, apr: f64, down: f64) -> Plan {
        Plan::new(id, "Lease", price, term, apr, down).with_mode(PlanMode::Lease)
    }

    #[test]
    fn test_standard_lease() {
        // 28400 over 36 months at 3.8%, 2500 down, 8.25% tax:
        // cap cost 25900, residual 60% = 15540, money factor 3.8/2400
        let plan = lease_plan(1, 28_400.0, 36, 3.8, 2500.0);
        let result = project(&plan, &assumptions());

        assert_relative_eq!(result.financed_amount, 25_900.0, epsilon = 1e-9);

        let money_factor = 3.8 / 2400.0;
        assert_abs_diff_eq!(money_factor, 0.0015833, epsilon = 1e-6);

        let base = (25_900.0 - 15_540.0) / 36.0 + (25_900.0 + 15_540.0) * money_factor;
        let expected = base * 1.0825;
        assert_relative_eq!(result.monthly_payment, expected, epsilon = 1e-9);
        assert_abs_diff_eq!(result.monthly_payment, 382.55, epsilon = 0.05);

        assert_eq!(result.points.len(), 37);
        assert_eq!(result.points[36].remaining, 0.0);
        assert_relative_eq!(
            result.points[0].remaining,
            result.monthly_payment * 36.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_obligation_drawdown_is_linear() {
        let plan = lease_plan(2, 32_000.0, 48, 4.5, 3000.0);
        let result = project(&plan, &assumptions());

        for pair in result.points.windows(2) {
            assert_relative_eq!(
                pair[0].remaining - pair[1].remaining,
                result.monthly_payment,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_residual_schedule_by_term() {
        // Shorter terms keep more residual value, so the depreciation
        // portion of the payment shrinks.
        let a = assumptions();
        let short = project(&lease_plan(3, 30_000.0, 24, 0.0, 0.0), &a);
        let long = project(&lease_plan(4, 30_000.0, 72, 0.0, 0.0), &a);

        // 24 mo: (30000 * 0.30) / 24; 72 mo: (30000 * 0.55) / 72, both taxed
        assert_relative_eq!(short.monthly_payment, 30_000.0 * 0.30 / 24.0 * 1.0825, epsilon = 1e-9);
        assert_relative_eq!(long.monthly_payment, 30_000.0 * 0.55 / 72.0 * 1.0825, epsilon = 1e-9);
    }

    #[test]
    fn test_overcollateralized_lease_is_flat_zero() {
        let plan = lease_plan(5, 20_000.0, 36, 3.8, 25_000.0);
        let result = project(&plan, &assumptions());

        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.financed_amount, 0.0);
        assert_eq!(result.points.len(), 37);
        assert!(result.points.iter().all(|p| p.remaining == 0.0));
    }

    #[test]
    fn test_degenerate_inputs_empty() {
        let zero_term = lease_plan(6, 28_400.0, 0, 3.8, 2500.0);
        assert!(!project(&zero_term, &assumptions()).has_curve());

        let zero_price = lease_plan(7, 0.0, 36, 3.8, 0.0);
        assert!(!project(&zero_price, &assumptions()).has_curve());
    }
}
