//! Payment Simulation Engine - finance and lease projections for vehicle purchases
//!
//! This library provides:
//! - A plan model describing one financing or lease candidate
//! - Amortizing-loan and lease payment calculators with full remaining-balance curves
//! - A comparison normalizer projecting plans of differing terms onto a shared axis
//! - A session runner for recomputing whole plan sets on every input change

pub mod plan;
pub mod assumptions;
pub mod simulation;
pub mod compare;
pub mod session;

// Re-export commonly used types
pub use plan::{Plan, PlanMode};
pub use assumptions::{SimulationAssumptions, ResidualSchedule};
pub use simulation::{SimulationEngine, SimulationResult, PaymentPoint, PaymentSummary};
pub use compare::{Comparison, NormalizedCurve, NormalizedPoint};
pub use session::{ComparisonSession, SessionOutput};
