//! Comparison session for recomputing whole plan sets
//!
//! Holds one engine so a host can rerun every plan on each input change
//! without rebuilding policy state. Sessions are independent: two sessions
//! with different tax rates or residual schedules never share mutable
//! state.

use rayon::prelude::*;

use crate::assumptions::SimulationAssumptions;
use crate::compare::Comparison;
use crate::plan::Plan;
use crate::simulation::{SimulationEngine, SimulationResult};

/// Everything the presentation layer needs after one recompute: per-plan
/// payments and curves, plus the normalized comparison with point queries
#[derive(Debug, Clone)]
pub struct SessionOutput {
    pub results: Vec<SimulationResult>,
    pub comparison: Comparison,
}

/// Pre-configured runner for a comparison session
///
/// # Example
/// ```
/// use payment_sim::{ComparisonSession, plan::default_catalog};
///
/// let session = ComparisonSession::new();
/// let plans = default_catalog(28_400.0);
/// let output = session.recompute(&plans, Some(1));
/// assert_eq!(output.results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonSession {
    engine: SimulationEngine,
}

impl ComparisonSession {
    /// Create a session with default retail assumptions
    pub fn new() -> Self {
        Self::with_assumptions(SimulationAssumptions::default_retail())
    }

    /// Create a session with custom assumptions
    pub fn with_assumptions(assumptions: SimulationAssumptions) -> Self {
        Self {
            engine: SimulationEngine::new(assumptions),
        }
    }

    /// Project a single plan
    pub fn run(&self, plan: &Plan) -> SimulationResult {
        self.engine.project_plan(plan)
    }

    /// Project every plan in a set with the same assumptions
    ///
    /// Runs in parallel; the ordered collect keeps results aligned with
    /// the input plans.
    pub fn run_batch(&self, plans: &[Plan]) -> Vec<SimulationResult> {
        plans
            .par_iter()
            .map(|p| self.engine.project_plan(p))
            .collect()
    }

    /// Full recompute of a plan set: projections plus normalized comparison
    ///
    /// The host calls this whenever any plan input changes; output depends
    /// only on the arguments and the session's assumptions.
    pub fn recompute(&self, plans: &[Plan], selected_id: Option<u32>) -> SessionOutput {
        let results = self.run_batch(plans);
        let comparison = Comparison::new(&results, selected_id);

        SessionOutput { results, comparison }
    }

    /// Get reference to the session's assumptions
    pub fn assumptions(&self) -> &SimulationAssumptions {
        self.engine.assumptions()
    }

    /// Get mutable reference to the session's assumptions
    pub fn assumptions_mut(&mut self) -> &mut SimulationAssumptions {
        self.engine.assumptions_mut()
    }
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self::new()
    }
}
