//! Load plan preset catalogs from CSV

use super::{Plan, PlanMode};
use csv::Reader;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Default path to the preset catalog
pub const DEFAULT_CATALOG_PATH: &str = "data/plans.csv";

/// Errors raised while loading a plan catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read plan catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse plan catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown plan mode '{0}' (expected Finance or Lease)")]
    UnknownMode(String),
}

/// Raw CSV row matching the plans.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: u32,
    name: String,
    price: f64,
    term: u32,
    apr: f64,
    down_payment: f64,
    trade_in: Option<f64>,
    tax_rate: Option<f64>,
    mode: String,
}

impl CsvRow {
    fn into_plan(self) -> Result<Plan, CatalogError> {
        let mode = match self.mode.as_str() {
            "Finance" => PlanMode::Finance,
            "Lease" => PlanMode::Lease,
            other => return Err(CatalogError::UnknownMode(other.to_string())),
        };

        Ok(Plan {
            id: self.id,
            name: self.name,
            price: self.price,
            term: self.term,
            apr: self.apr,
            down_payment: self.down_payment,
            trade_in: self.trade_in.unwrap_or(0.0),
            tax_rate: self.tax_rate,
            mode,
        })
    }
}

/// Load plans from any CSV source
pub fn load_plans_from_reader<R: Read>(reader: R) -> Result<Vec<Plan>, CatalogError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.into_plan()?);
    }

    log::debug!("loaded {} plans from catalog", plans.len());
    Ok(plans)
}

/// Load plans from a CSV file
pub fn load_plans(path: &Path) -> Result<Vec<Plan>, CatalogError> {
    let file = std::fs::File::open(path)?;
    load_plans_from_reader(file)
}

/// Load plans from the default catalog location (data/plans.csv)
pub fn load_default_catalog() -> Result<Vec<Plan>, CatalogError> {
    load_plans(Path::new(DEFAULT_CATALOG_PATH))
}
