//! Payment calculators and the simulation engine

pub mod finance;
pub mod lease;
mod engine;
mod schedule;

pub use engine::SimulationEngine;
pub use schedule::{PaymentPoint, PaymentSummary, SimulationResult};
