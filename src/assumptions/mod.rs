//! Simulation assumptions: tax defaults, residual schedule, money-factor policy

mod residual;

pub use residual::ResidualSchedule;

use crate::plan::Plan;

/// Container for all simulation assumptions
///
/// Modeled as an explicit struct rather than module constants so that
/// concurrent comparison sessions can each carry their own policy.
#[derive(Debug, Clone)]
pub struct SimulationAssumptions {
    /// Sales-tax percentage applied when a plan carries no override
    pub default_tax_rate: f64,

    /// Divisor converting an APR percentage to a lease money factor
    pub money_factor_divisor: f64,

    /// Residual-value schedule for lease terms
    pub residual: ResidualSchedule,
}

impl SimulationAssumptions {
    /// Create assumptions with default retail values
    pub fn default_retail() -> Self {
        Self {
            default_tax_rate: 8.25,
            money_factor_divisor: 2400.0,
            residual: ResidualSchedule::default_schedule(),
        }
    }

    /// Resolve the effective tax rate for a plan
    pub fn tax_rate_for(&self, plan: &Plan) -> f64 {
        plan.tax_rate.unwrap_or(self.default_tax_rate)
    }

    /// Convert an APR percentage to a lease money factor
    ///
    /// The conventional divisor of 2400 maps 3.8% to roughly 0.00158.
    pub fn money_factor(&self, apr: f64) -> f64 {
        if self.money_factor_divisor > 0.0 {
            apr / self.money_factor_divisor
        } else {
            0.0
        }
    }
}

impl Default for SimulationAssumptions {
    fn default() -> Self {
        Self::default_retail()
    }
}
