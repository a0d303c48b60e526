use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracker_core::domain::{FuelRecord, MaintenanceRecord};
use tracker_core::ports::{Category, RecordStore, Result};
use tracker_core::Error;

/// How long a read result stays fresh before the next read goes back to
/// disk. Matches the short freshness window of the original sheet store.
const DEFAULT_FRESHNESS: Duration = Duration::from_secs(5);

struct Cached<T> {
    fetched_at: Instant,
    rows: Vec<T>,
}

/// CSV-file implementation of the RecordStore trait.
///
/// Each category is one worksheet file under the data directory, named
/// after the original sheet ("Consumo.csv", "Manutenção.csv"). A missing
/// worksheet reads as empty. Appends open the file in append mode and
/// write a single row, so a submission never rewrites the whole sheet;
/// the header row is written when the file is first created.
pub struct CsvSheetStore {
    data_dir: PathBuf,
    freshness: Duration,
    fuel_cache: Mutex<Option<Cached<FuelRecord>>>,
    maintenance_cache: Mutex<Option<Cached<MaintenanceRecord>>>,
}

impl CsvSheetStore {
    /// Creates a store over the given data directory with the default
    /// freshness window.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_freshness(data_dir, DEFAULT_FRESHNESS)
    }

    /// Creates a store with an explicit freshness window. A zero window
    /// makes every read go back to disk.
    pub fn with_freshness(data_dir: impl Into<PathBuf>, freshness: Duration) -> Self {
        Self {
            data_dir: data_dir.into(),
            freshness,
            fuel_cache: Mutex::new(None),
            maintenance_cache: Mutex::new(None),
        }
    }

    fn worksheet_path(&self, category: Category) -> PathBuf {
        self.data_dir
            .join(format!("{}.csv", category.worksheet_name()))
    }

    fn load<T: DeserializeOwned>(&self, category: Category) -> Result<Vec<T>> {
        let path = self.worksheet_path(category);
        if !path.exists() {
            log::debug!("worksheet '{}' has no data yet", category.worksheet_name());
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&path).map_err(|e| read_error(category, e))?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row.map_err(|e| read_error(category, e))?);
        }
        Ok(rows)
    }

    fn read_cached<T>(
        &self,
        category: Category,
        cache: &Mutex<Option<Cached<T>>>,
    ) -> Result<Vec<T>>
    where
        T: Clone + DeserializeOwned,
    {
        let mut slot = cache
            .lock()
            .map_err(|_| read_error(category, "worksheet cache lock poisoned"))?;

        if let Some(cached) = slot.as_ref() {
            if cached.fetched_at.elapsed() < self.freshness {
                return Ok(cached.rows.clone());
            }
        }

        let rows: Vec<T> = self.load(category)?;
        *slot = Some(Cached {
            fetched_at: Instant::now(),
            rows: rows.clone(),
        });
        Ok(rows)
    }

    fn append_row<T: Serialize>(&self, category: Category, record: &T) -> Result<()> {
        fs::create_dir_all(&self.data_dir).map_err(|e| write_error(category, e))?;

        let path = self.worksheet_path(category);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| write_error(category, e))?;
        let is_new_worksheet = file
            .metadata()
            .map_err(|e| write_error(category, e))?
            .len()
            == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new_worksheet)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|e| write_error(category, e))?;
        writer.flush().map_err(|e| write_error(category, e))?;
        Ok(())
    }

    fn invalidate<T>(&self, category: Category, cache: &Mutex<Option<Cached<T>>>) -> Result<()> {
        let mut slot = cache
            .lock()
            .map_err(|_| write_error(category, "worksheet cache lock poisoned"))?;
        *slot = None;
        Ok(())
    }
}

impl RecordStore for CsvSheetStore {
    fn read_fuel(&self) -> Result<Vec<FuelRecord>> {
        self.read_cached(Category::Fuel, &self.fuel_cache)
    }

    fn append_fuel(&self, record: &FuelRecord) -> Result<()> {
        self.append_row(Category::Fuel, record)?;
        self.invalidate(Category::Fuel, &self.fuel_cache)
    }

    fn read_maintenance(&self) -> Result<Vec<MaintenanceRecord>> {
        self.read_cached(Category::Maintenance, &self.maintenance_cache)
    }

    fn append_maintenance(&self, record: &MaintenanceRecord) -> Result<()> {
        self.append_row(Category::Maintenance, record)?;
        self.invalidate(Category::Maintenance, &self.maintenance_cache)
    }
}

fn read_error(
    category: Category,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> Error {
    Error::StoreRead {
        worksheet: category.worksheet_name(),
        source: source.into(),
    }
}

fn write_error(
    category: Category,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> Error {
    Error::StoreWrite {
        worksheet: category.worksheet_name(),
        source: source.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;
    use tracker_core::domain::Vehicle;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, d).unwrap()
    }

    fn fuel(d: u32, odometer_km: f64) -> FuelRecord {
        FuelRecord::new(day(d), Vehicle::Car, odometer_km, 40.0, 5.50)
    }

    fn maintenance(d: u32, cost: f64) -> MaintenanceRecord {
        MaintenanceRecord {
            date: day(d),
            vehicle: Vehicle::Motorcycle,
            description: "Troca de óleo".to_string(),
            cost,
        }
    }

    #[test]
    fn test_missing_worksheet_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());

        assert!(store.read_fuel().unwrap().is_empty());
        assert!(store.read_maintenance().unwrap().is_empty());
    }

    #[test]
    fn test_fuel_rows_round_trip_in_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::with_freshness(dir.path(), Duration::ZERO);

        for i in 1..=4 {
            store.append_fuel(&fuel(i, 1000.0 * i as f64)).unwrap();
        }

        let rows = store.read_fuel().unwrap();
        assert_eq!(rows.len(), 4);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.odometer_km, 1000.0 * (i + 1) as f64);
            assert_eq!(row.date, day(i as u32 + 1));
            assert_eq!(row.total_cost, 220.0);
        }
    }

    #[test]
    fn test_maintenance_rows_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::with_freshness(dir.path(), Duration::ZERO);

        store.append_maintenance(&maintenance(3, 150.0)).unwrap();
        let rows = store.read_maintenance().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Troca de óleo");
        assert_eq!(rows[0].cost, 150.0);
        assert_eq!(rows[0].vehicle, Vehicle::Motorcycle);
    }

    #[test]
    fn test_worksheet_files_use_original_sheet_names() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());

        store.append_fuel(&fuel(1, 1000.0)).unwrap();
        store.append_maintenance(&maintenance(1, 80.0)).unwrap();

        assert!(dir.path().join("Consumo.csv").exists());
        assert!(dir.path().join("Manutenção.csv").exists());
    }

    #[test]
    fn test_header_row_written_once() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());

        store.append_fuel(&fuel(1, 1000.0)).unwrap();
        store.append_fuel(&fuel(2, 1400.0)).unwrap();

        let content = fs::read_to_string(dir.path().join("Consumo.csv")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Data,Veículo,Quilometragem,Litros,Preço/L,Valor Total"
        );
    }

    #[test]
    fn test_own_appends_are_visible_despite_freshness_window() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());

        store.append_fuel(&fuel(1, 1000.0)).unwrap();
        assert_eq!(store.read_fuel().unwrap().len(), 1);
        // the append invalidates the cached read
        store.append_fuel(&fuel(2, 1400.0)).unwrap();
        assert_eq!(store.read_fuel().unwrap().len(), 2);
    }

    #[test]
    fn test_fresh_reads_do_not_see_concurrent_writers() {
        let dir = TempDir::new().unwrap();
        let store = CsvSheetStore::new(dir.path());
        let other_writer = CsvSheetStore::new(dir.path());

        store.append_fuel(&fuel(1, 1000.0)).unwrap();
        assert_eq!(store.read_fuel().unwrap().len(), 1);

        other_writer.append_fuel(&fuel(2, 1400.0)).unwrap();

        // still inside the freshness window, so the stale result is served
        assert_eq!(store.read_fuel().unwrap().len(), 1);
        // a store without a window re-reads and sees both rows
        let fresh = CsvSheetStore::with_freshness(dir.path(), Duration::ZERO);
        assert_eq!(fresh.read_fuel().unwrap().len(), 2);
    }

    #[test]
    fn test_unreadable_worksheet_is_a_store_read_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Consumo.csv"), "a,b\n1,2\n").unwrap();
        let store = CsvSheetStore::new(dir.path());

        let err = store.read_fuel().unwrap_err();
        assert!(matches!(err, Error::StoreRead { worksheet, .. } if worksheet == "Consumo"));
    }
}
