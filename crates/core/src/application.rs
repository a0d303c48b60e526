use chrono::NaiveDate;

use crate::domain::{FuelRecord, MaintenanceRecord, Vehicle};
use crate::efficiency::efficiency_samples;
use crate::ports::{RecordStore, ReportWriter, Result};
use crate::report::{fuel_overview, maintenance_overview, ExpenseReport};
use crate::Error;

/// Application service for recording vehicle expenses and building reports.
///
/// Every operation is a stateless request/response over the injected store:
/// validate, append, re-read. There is no retry logic and no state carried
/// between submissions.
pub struct TrackerService {
    store: Box<dyn RecordStore>,
}

impl TrackerService {
    /// Creates a new TrackerService with the given store.
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validates and persists a fuel purchase, deriving the total cost.
    ///
    /// Returns the stored record, or a validation error without touching
    /// the store.
    pub fn submit_fuel(
        &self,
        date: NaiveDate,
        vehicle: Vehicle,
        odometer_km: f64,
        liters: f64,
        price_per_liter: f64,
    ) -> Result<FuelRecord> {
        if odometer_km <= 0.0 {
            return Err(Error::Validation(
                "odometer reading must be greater than zero".to_string(),
            ));
        }
        if liters <= 0.0 {
            return Err(Error::Validation(
                "liters must be greater than zero".to_string(),
            ));
        }
        if price_per_liter <= 0.0 {
            return Err(Error::Validation(
                "price per liter must be greater than zero".to_string(),
            ));
        }

        let record = FuelRecord::new(date, vehicle, odometer_km, liters, price_per_liter);
        self.store.append_fuel(&record)?;
        Ok(record)
    }

    /// Validates and persists a maintenance event.
    pub fn submit_maintenance(
        &self,
        date: NaiveDate,
        vehicle: Vehicle,
        description: &str,
        cost: f64,
    ) -> Result<MaintenanceRecord> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if cost <= 0.0 {
            return Err(Error::Validation(
                "cost must be greater than zero".to_string(),
            ));
        }

        let record = MaintenanceRecord {
            date,
            vehicle,
            description: description.to_string(),
            cost,
        };
        self.store.append_maintenance(&record)?;
        Ok(record)
    }

    /// Fuel records for display, newest first.
    ///
    /// A store-read failure is surfaced as a warning and degrades to an
    /// empty list so rendering can continue.
    pub fn fuel_records(&self) -> Vec<FuelRecord> {
        let mut records = self.store.read_fuel().unwrap_or_else(|e| {
            log::warn!("{e}; showing no fuel records");
            Vec::new()
        });
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// Maintenance records for display, newest first.
    pub fn maintenance_records(&self) -> Vec<MaintenanceRecord> {
        let mut records = self.store.read_maintenance().unwrap_or_else(|e| {
            log::warn!("{e}; showing no maintenance records");
            Vec::new()
        });
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// Reads both categories and assembles the aggregate report.
    ///
    /// Unreadable worksheets degrade to empty datasets, so the report is
    /// always produced.
    pub fn build_report(&self) -> ExpenseReport {
        let mut fuel_records = self.store.read_fuel().unwrap_or_else(|e| {
            log::warn!("{e}; reporting on an empty fuel dataset");
            Vec::new()
        });
        fuel_records.sort_by(|a, b| a.date.cmp(&b.date));

        let mut maintenance_records = self.store.read_maintenance().unwrap_or_else(|e| {
            log::warn!("{e}; reporting on an empty maintenance dataset");
            Vec::new()
        });
        maintenance_records.sort_by(|a, b| a.date.cmp(&b.date));

        let efficiency = efficiency_samples(&fuel_records);
        let fuel = fuel_overview(&efficiency);
        let maintenance = maintenance_overview(&maintenance_records);

        ExpenseReport {
            fuel_records,
            efficiency,
            fuel,
            maintenance_records,
            maintenance,
        }
    }

    /// Builds the report and renders it through the given writer.
    pub fn write_report(&self, writer: &dyn ReportWriter) -> Result<ExpenseReport> {
        let report = self.build_report();
        writer.write(&report)?;
        Ok(report)
    }
}
