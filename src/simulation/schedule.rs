//! Schedule output structures for payment simulations

use serde::{Deserialize, Serialize};

use crate::plan::{Plan, PlanMode};

/// One point of a remaining-balance (Finance) or remaining-obligation
/// (Lease) curve. A full curve holds `term + 1` points including month 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentPoint {
    pub month: u32,
    pub remaining: f64,
}

/// Complete result of projecting one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Plan identifier
    pub plan_id: u32,

    /// Which calculator produced this result
    pub mode: PlanMode,

    /// Level monthly payment; 0 for degenerate plans
    pub monthly_payment: f64,

    /// Amount the payment is computed against: loan principal for Finance,
    /// capitalized cost for Lease. Clamped to zero, never negative.
    pub financed_amount: f64,

    /// Sales tax: the upfront tax on the price for Finance, or the total
    /// tax collected across scheduled payments for Lease
    pub sales_tax: f64,

    /// Remaining balance/obligation curve, `term + 1` points.
    /// Empty when the plan has no valid term or principal.
    pub points: Vec<PaymentPoint>,
}

impl SimulationResult {
    /// Degenerate result for plans that cannot be projected
    pub fn empty(plan_id: u32, mode: PlanMode) -> Self {
        Self {
            plan_id,
            mode,
            monthly_payment: 0.0,
            financed_amount: 0.0,
            sales_tax: 0.0,
            points: Vec::new(),
        }
    }

    /// Whether the plan produced a usable curve
    pub fn has_curve(&self) -> bool {
        !self.points.is_empty()
    }

    /// Starting balance/obligation (the month-0 value), 0 if no curve
    pub fn starting_value(&self) -> f64 {
        self.points.first().map(|p| p.remaining).unwrap_or(0.0)
    }

    /// Term in months implied by the curve length
    pub fn term(&self) -> u32 {
        self.points.len().saturating_sub(1) as u32
    }

    /// Derived totals for display alongside the monthly figure
    pub fn summary(&self, plan: &Plan) -> PaymentSummary {
        let total_paid = self.monthly_payment * self.term() as f64 + plan.down_payment;
        let total_interest = (total_paid - plan.price - self.sales_tax).max(0.0);

        PaymentSummary {
            monthly_payment: self.monthly_payment,
            financed_amount: self.financed_amount,
            sales_tax: self.sales_tax,
            total_paid,
            total_interest,
        }
    }
}

/// Headline numbers for one plan: payment, financed amount, taxes, and
/// lifetime totals including the down payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub monthly_payment: f64,
    pub financed_amount: f64,
    pub sales_tax: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}
