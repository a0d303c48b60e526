pub mod application;
pub mod domain;
pub mod efficiency;
pub mod error;
pub mod ports;
pub mod report;
pub mod utils;

pub use domain::{EfficiencySample, FuelRecord, MaintenanceRecord, Vehicle};
pub use error::{Error, Result};
pub use ports::{Category, RecordStore, ReportWriter};
pub use report::ExpenseReport;
