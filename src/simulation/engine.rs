//! Simulation engine dispatching plans to the mode-specific calculators

use crate::assumptions::SimulationAssumptions;
use crate::plan::{Plan, PlanMode};
use super::schedule::SimulationResult;
use super::{finance, lease};

/// Main simulation engine
///
/// Pure and synchronous: projecting the same plan against the same
/// assumptions always yields bit-identical output. Cheap enough (O(term)
/// per plan) to rerun on every slider move.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    assumptions: SimulationAssumptions,
}

impl SimulationEngine {
    /// Create a new engine with the given assumptions
    pub fn new(assumptions: SimulationAssumptions) -> Self {
        Self { assumptions }
    }

    /// Project a single plan through its mode's calculator
    pub fn project_plan(&self, plan: &Plan) -> SimulationResult {
        match plan.mode {
            PlanMode::Finance => finance::project(plan, &self.assumptions),
            PlanMode::Lease => lease::project(plan, &self.assumptions),
        }
    }

    /// Get reference to the engine's assumptions
    pub fn assumptions(&self) -> &SimulationAssumptions {
        &self.assumptions
    }

    /// Get mutable reference to the engine's assumptions
    pub fn assumptions_mut(&mut self) -> &mut SimulationAssumptions {
        &mut self.assumptions
    }
}
