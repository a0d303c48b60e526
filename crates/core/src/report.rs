//! Aggregate summaries over record sets.
//!
//! Pure functions only: no store access, no rendering. All of them return
//! zeroed/empty results on empty input instead of failing.

use crate::domain::{EfficiencySample, FuelRecord, MaintenanceRecord, Vehicle};

/// Fuel totals for a single vehicle, computed over the efficiency-processed
/// set (the first fill-up of each vehicle is not counted).
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleFuelStats {
    pub vehicle: Vehicle,
    pub total_cost: f64,
    pub total_distance_km: f64,
    pub mean_km_per_liter: f64,
}

/// Fuel totals across all vehicles, plus the per-vehicle breakdown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FuelOverview {
    pub per_vehicle: Vec<VehicleFuelStats>,
    pub total_cost: f64,
    pub total_distance_km: f64,
}

/// Maintenance totals for a single vehicle, with its share of the overall
/// spend (the pie-chart breakdown of the reports page).
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleMaintenanceStats {
    pub vehicle: Vehicle,
    pub total_cost: f64,
    pub share_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaintenanceOverview {
    pub per_vehicle: Vec<VehicleMaintenanceStats>,
    pub total_cost: f64,
}

/// Everything the reports page renders, assembled by the application service.
#[derive(Clone, Debug, Default)]
pub struct ExpenseReport {
    /// Raw fuel records, sorted by date ascending.
    pub fuel_records: Vec<FuelRecord>,
    /// Efficiency samples derived from the fuel records.
    pub efficiency: Vec<EfficiencySample>,
    pub fuel: FuelOverview,
    /// Raw maintenance records, sorted by date ascending.
    pub maintenance_records: Vec<MaintenanceRecord>,
    pub maintenance: MaintenanceOverview,
}

/// Sums cost and distance and averages efficiency, per vehicle and overall.
///
/// Only vehicles present in the samples appear in the breakdown.
pub fn fuel_overview(samples: &[EfficiencySample]) -> FuelOverview {
    let mut overview = FuelOverview::default();

    for vehicle in Vehicle::ALL {
        let group: Vec<&EfficiencySample> =
            samples.iter().filter(|s| s.vehicle == vehicle).collect();
        if group.is_empty() {
            continue;
        }

        let total_cost: f64 = group.iter().map(|s| s.total_cost).sum();
        let total_distance_km: f64 = group.iter().map(|s| s.distance_km).sum();
        let efficiency_sum: f64 = group.iter().map(|s| s.km_per_liter).sum();

        overview.per_vehicle.push(VehicleFuelStats {
            vehicle,
            total_cost,
            total_distance_km,
            mean_km_per_liter: efficiency_sum / group.len() as f64,
        });
        overview.total_cost += total_cost;
        overview.total_distance_km += total_distance_km;
    }

    overview
}

/// Sums maintenance cost per vehicle and overall.
pub fn maintenance_overview(records: &[MaintenanceRecord]) -> MaintenanceOverview {
    let total_cost: f64 = records.iter().map(|r| r.cost).sum();
    let mut overview = MaintenanceOverview {
        per_vehicle: Vec::new(),
        total_cost,
    };

    for vehicle in Vehicle::ALL {
        let vehicle_cost: f64 = records
            .iter()
            .filter(|r| r.vehicle == vehicle)
            .map(|r| r.cost)
            .sum();
        if vehicle_cost == 0.0 {
            continue;
        }
        let share_percent = if total_cost > 0.0 {
            vehicle_cost / total_cost * 100.0
        } else {
            0.0
        };
        overview.per_vehicle.push(VehicleMaintenanceStats {
            vehicle,
            total_cost: vehicle_cost,
            share_percent,
        });
    }

    overview
}
