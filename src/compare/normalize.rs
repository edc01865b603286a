//! Normalization of payment curves onto a shared [0,1] progress axis
//!
//! Plans with different terms and price scales become directly comparable:
//! X is fraction of the contract elapsed, Y is fraction of the starting
//! balance/obligation still owed. A shared progress value (e.g. a hover
//! position over the widest chart) can then be queried against every plan
//! without recomputing any curve.

use serde::{Deserialize, Serialize};

use crate::simulation::SimulationResult;

/// One normalized point: progress through the term and the remaining
/// fraction of the starting value, both in [0,1]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub progress: f64,
    pub remaining_ratio: f64,
}

/// A plan's curve reprojected onto the shared axis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedCurve {
    pub plan_id: u32,

    /// Presentation hint only; does not affect any numbers
    pub selected: bool,

    pub points: Vec<NormalizedPoint>,
}

impl NormalizedCurve {
    /// Normalize a simulation result against its starting value
    ///
    /// A zero starting value (flat zero curve) normalizes to all-zero
    /// ratios rather than dividing by zero.
    pub fn from_result(result: &SimulationResult, selected: bool) -> Self {
        let start = result.starting_value();
        let term = result.term().max(1) as f64;

        let points = result
            .points
            .iter()
            .map(|p| NormalizedPoint {
                progress: p.month as f64 / term,
                remaining_ratio: if start > 0.0 {
                    (p.remaining / start).clamp(0.0, 1.0)
                } else {
                    0.0
                },
            })
            .collect();

        Self {
            plan_id: result.plan_id,
            selected,
            points,
        }
    }

    /// Remaining ratio at an arbitrary progress value
    ///
    /// Snaps to the nearest sampled month: `round(progress * (len - 1))`,
    /// with progress clamped to [0,1]. Returns None for empty curves.
    pub fn ratio_at(&self, progress: f64) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }

        let last = self.points.len() - 1;
        let index = (progress.clamp(0.0, 1.0) * last as f64).round() as usize;
        Some(self.points[index.min(last)].remaining_ratio)
    }
}

/// One plan's value at a queried progress point
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProgressSample {
    pub plan_id: u32,
    pub selected: bool,
    pub remaining_ratio: f64,
}

/// A set of normalized curves ready for overlaid rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub curves: Vec<NormalizedCurve>,
}

impl Comparison {
    /// Build a comparison from projected results, flagging the selected plan
    pub fn new(results: &[SimulationResult], selected_id: Option<u32>) -> Self {
        let curves = results
            .iter()
            .map(|r| NormalizedCurve::from_result(r, Some(r.plan_id) == selected_id))
            .collect();

        Self { curves }
    }

    /// Query every plan at a shared progress value, skipping empty curves
    pub fn sample_at(&self, progress: f64) -> Vec<ProgressSample> {
        self.curves
            .iter()
            .filter_map(|curve| {
                curve.ratio_at(progress).map(|remaining_ratio| ProgressSample {
                    plan_id: curve.plan_id,
                    selected: curve.selected,
                    remaining_ratio,
                })
            })
            .collect()
    }

    /// The curve flagged as selected, if any
    pub fn selected(&self) -> Option<&NormalizedCurve> {
        self.curves.iter().find(|c| c.selected)
    }
}
