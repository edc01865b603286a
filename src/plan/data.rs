//! Plan data structures describing one financing or lease candidate

use serde::{Deserialize, Serialize};

/// Which payment calculator applies to a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlanMode {
    /// Amortizing loan
    #[default]
    Finance,
    /// Closed-end lease
    Lease,
}

impl PlanMode {
    /// String representation matching the catalog CSV format
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanMode::Finance => "Finance",
            PlanMode::Lease => "Lease",
        }
    }
}

/// A single plan candidate within a comparison set
///
/// Plans are value objects: callers build them from preset catalogs or
/// interactive slider state and pass them into the calculators on every
/// recompute. They carry no identity beyond the comparison session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier within a compared set
    pub id: u32,

    /// Display label, not semantically load-bearing
    pub name: String,

    /// Vehicle price, non-negative
    pub price: f64,

    /// Contract length in months
    pub term: u32,

    /// Nominal annual percentage rate in percent (5.5 means 5.5%)
    pub apr: f64,

    /// Cash down payment, non-negative; may exceed the price
    pub down_payment: f64,

    /// Trade-in allowance, non-negative
    pub trade_in: f64,

    /// Sales-tax percentage override; None uses the assumptions default
    pub tax_rate: Option<f64>,

    /// Finance or Lease
    pub mode: PlanMode,
}

impl Plan {
    /// Create a finance plan with no trade-in and the default tax rate
    pub fn new(id: u32, name: &str, price: f64, term: u32, apr: f64, down_payment: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            term,
            apr,
            down_payment,
            trade_in: 0.0,
            tax_rate: None,
            mode: PlanMode::Finance,
        }
    }

    pub fn with_mode(mut self, mode: PlanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_trade_in(mut self, trade_in: f64) -> Self {
        self.trade_in = trade_in;
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = Some(tax_rate);
        self
    }
}

/// Default preset catalog for a given MSRP
///
/// The three presets mirror the dashboard's stock offers: a balanced term,
/// a lowest-monthly stretch term, and an accelerated payoff.
pub fn default_catalog(msrp: f64) -> Vec<Plan> {
    vec![
        Plan::new(1, "Best Value", msrp, 60, 5.5, 4000.0),
        Plan::new(2, "Low Payment", msrp, 72, 6.5, 2500.0),
        Plan::new(3, "Own It Faster", msrp, 48, 4.9, 5000.0),
    ]
}
