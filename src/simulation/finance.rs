//! Amortizing-loan payment calculator

use crate::assumptions::SimulationAssumptions;
use crate::plan::{Plan, PlanMode};
use super::schedule::{PaymentPoint, SimulationResult};

/// Level monthly payment for an amortizing loan via the standard annuity
/// formula. Zero rate falls back to straight-line division so the formula
/// never divides by zero.
pub fn monthly_payment(principal: f64, monthly_rate: f64, term: u32) -> f64 {
    if term == 0 || principal <= 0.0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return principal / term as f64;
    }

    let growth = (1.0 + monthly_rate).powi(term as i32);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Project a finance plan into a payment and remaining-balance curve
///
/// The curve holds `term + 1` points: the starting principal at month 0,
/// then interest-first amortization each month. The final point is pinned
/// to exactly zero, absorbing floating-point tail drift without touching
/// the payment figure.
pub fn project(plan: &Plan, assumptions: &SimulationAssumptions) -> SimulationResult {
    if plan.term == 0 || plan.price <= 0.0 {
        return SimulationResult::empty(plan.id, PlanMode::Finance);
    }

    let tax_rate = assumptions.tax_rate_for(plan);
    let sales_tax = plan.price * tax_rate / 100.0;

    // Negative principal (down payment + trade-in exceed the taxed price)
    // clamps to zero: zero payment, flat zero curve.
    let principal = (plan.price + sales_tax - plan.down_payment - plan.trade_in).max(0.0);

    let monthly_rate = plan.apr / 100.0 / 12.0;
    let payment = monthly_payment(principal, monthly_rate, plan.term);

    let mut points = Vec::with_capacity(plan.term as usize + 1);
    let mut balance = principal;
    for month in 0..plan.term {
        points.push(PaymentPoint { month, remaining: balance });
        let interest = balance * monthly_rate;
        balance -= payment - interest;
    }
    points.push(PaymentPoint { month: plan.term, remaining: 0.0 });

    SimulationResult {
        plan_id: plan.id,
        mode: PlanMode::Finance,
        monthly_payment: payment,
        financed_amount: principal,
        sales_tax,
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

    #[test]
    fn test_standard_loan() {
        // 28400 at 5.5% over 60 months, 4000 down, 8.25% tax
        let plan = Plan::new(1, "Best Value", 28_400.0, 60, 5.5, 4000.0);
        let result = project(&plan, &assumptions());

        assert_relative_eq!(result.sales_tax, 2343.0, epsilon = 1e-9);
        assert_relative_eq!(result.financed_amount, 26_743.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.monthly_payment, 510.8, epsilon = 0.5);
        assert_eq!(result.points.len(), 61);
        assert_relative_eq!(result.points[0].remaining, 26_743.0, epsilon = 1e-9);
        assert_eq!(result.points[60].remaining, 0.0);
    }

    #[test]
    fn test_zero_apr_is_straight_line() {
        // (28400 - 2500) / 72 = 359.7222...
        let plan = Plan::new(2, "Zero APR", 28_400.0, 72, 0.0, 2500.0).with_tax_rate(0.0);
        let result = project(&plan, &assumptions());

        assert_relative_eq!(result.monthly_payment, 25_900.0 / 72.0, epsilon = 1e-9);
        assert_relative_eq!(
            result.monthly_payment * 72.0,
            result.financed_amount,
            epsilon = 1e-6
        );

        // Curve decreases linearly by exactly one payment per month
        for pair in result.points.windows(2) {
            assert_abs_diff_eq!(
                pair[0].remaining - pair[1].remaining,
                result.monthly_payment,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_overcollateralized_plan_is_flat_zero() {
        let plan = Plan::new(3, "Paid Cash", 20_000.0, 48, 5.0, 25_000.0);
        let result = project(&plan, &assumptions());

        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.financed_amount, 0.0);
        assert_eq!(result.points.len(), 49);
        assert!(result.points.iter().all(|p| p.remaining == 0.0));
    }

    #[test]
    fn test_trade_in_reduces_principal() {
        let base = Plan::new(4, "No Trade", 28_400.0, 60, 5.5, 4000.0);
        let traded = base.clone().with_trade_in(3000.0);

        let without = project(&base, &assumptions());
        let with = project(&traded, &assumptions());

        assert_relative_eq!(
            without.financed_amount - with.financed_amount,
            3000.0,
            epsilon = 1e-9
        );
        assert!(with.monthly_payment < without.monthly_payment);
    }

    #[test]
    fn test_degenerate_inputs_empty() {
        let zero_term = Plan::new(5, "Zero Term", 28_400.0, 0, 5.5, 4000.0);
        assert!(!project(&zero_term, &assumptions()).has_curve());

        let zero_price = Plan::new(6, "Zero Price", 0.0, 60, 5.5, 0.0);
        assert!(!project(&zero_price, &assumptions()).has_curve());
    }

    #[test]
    fn test_balance_strictly_decreases() {
        let plan = Plan::new(7, "Decreasing", 35_000.0, 48, 7.9, 2000.0);
        let result = project(&plan, &assumptions());

        for pair in result.points.windows(2) {
            assert!(pair[1].remaining < pair[0].remaining);
        }
    }

    #[test]
    fn test_payment_not_affected_by_tail_clamp() {
        // The pinned final point is display-only; the annuity payment must
        // still amortize the raw balance to ~0 at the end of the term.
        let plan = Plan::new(8, "Drift", 28_400.0, 60, 5.5, 4000.0);
        let result = project(&plan, &assumptions());

        let rate = plan.apr / 100.0 / 12.0;
        let mut balance = result.financed_amount;
        for _ in 0..plan.term {
            balance -= result.monthly_payment - balance * rate;
        }
        assert_abs_diff_eq!(balance, 0.0, epsilon = 1e-6);
    }
}
