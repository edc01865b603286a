//! Plan model and preset catalog loading

mod data;
pub mod loader;

pub use data::{Plan, PlanMode, default_catalog};
pub use loader::{CatalogError, load_plans, load_default_catalog};
