use std::str::FromStr;

use crate::domain::{FuelRecord, MaintenanceRecord};
use crate::report::ExpenseReport;

pub use crate::error::{Error, Result};

/// The two record categories, each backed by its own worksheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Fuel,
    Maintenance,
}

impl Category {
    /// Worksheet name in the backing store, as named by the original sheet.
    pub fn worksheet_name(self) -> &'static str {
        match self {
            Category::Fuel => "Consumo",
            Category::Maintenance => "Manutenção",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "consumo" | "combustivel" | "fuel" => Ok(Category::Fuel),
            "manutencao" | "manutenção" | "maintenance" => Ok(Category::Maintenance),
            other => Err(Error::Validation(format!(
                "unknown category '{other}' (expected 'consumo' or 'manutencao')"
            ))),
        }
    }
}

/// The append-only record store the application persists to.
///
/// Reads return the full ordered sequence for a category; a worksheet with
/// no data reads as an empty sequence. The store is the source of truth:
/// callers re-read rather than caching across interactions.
pub trait RecordStore: Send + Sync {
    fn read_fuel(&self) -> Result<Vec<FuelRecord>>;
    fn append_fuel(&self, record: &FuelRecord) -> Result<()>;

    fn read_maintenance(&self) -> Result<Vec<MaintenanceRecord>>;
    fn append_maintenance(&self, record: &MaintenanceRecord) -> Result<()>;
}

/// Trait for rendering the aggregate report.
/// This is a port (interface) that defines how the core communicates with
/// presentation adapters.
pub trait ReportWriter: Send + Sync {
    fn write(&self, report: &ExpenseReport) -> Result<()>;
}
