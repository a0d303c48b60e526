use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The two vehicles tracked by the application.
///
/// Serialized with the worksheet spellings ("Carro"/"Moto") so rows written
/// by the original sheet remain readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vehicle {
    #[serde(rename = "Carro")]
    Car,
    #[serde(rename = "Moto")]
    Motorcycle,
}

impl Vehicle {
    pub const ALL: [Vehicle; 2] = [Vehicle::Car, Vehicle::Motorcycle];

    pub fn label(self) -> &'static str {
        match self {
            Vehicle::Car => "Carro",
            Vehicle::Motorcycle => "Moto",
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Vehicle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "carro" | "car" => Ok(Vehicle::Car),
            "moto" | "motorcycle" | "motorbike" => Ok(Vehicle::Motorcycle),
            other => Err(Error::Validation(format!(
                "unknown vehicle '{other}' (expected 'carro' or 'moto')"
            ))),
        }
    }
}

/// One fuel purchase, one worksheet row in the "Consumo" category.
///
/// Field renames match the original worksheet columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    #[serde(rename = "Data")]
    pub date: NaiveDate,
    #[serde(rename = "Veículo")]
    pub vehicle: Vehicle,
    #[serde(rename = "Quilometragem")]
    pub odometer_km: f64,
    #[serde(rename = "Litros")]
    pub liters: f64,
    #[serde(rename = "Preço/L")]
    pub price_per_liter: f64,
    #[serde(rename = "Valor Total")]
    pub total_cost: f64,
}

impl FuelRecord {
    /// Builds a record from form input, deriving the total cost.
    pub fn new(
        date: NaiveDate,
        vehicle: Vehicle,
        odometer_km: f64,
        liters: f64,
        price_per_liter: f64,
    ) -> Self {
        Self {
            date,
            vehicle,
            odometer_km,
            liters,
            price_per_liter,
            total_cost: liters * price_per_liter,
        }
    }
}

/// One maintenance event, one worksheet row in the "Manutenção" category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    #[serde(rename = "Data")]
    pub date: NaiveDate,
    #[serde(rename = "Veículo")]
    pub vehicle: Vehicle,
    #[serde(rename = "Descrição")]
    pub description: String,
    #[serde(rename = "Valor")]
    pub cost: f64,
}

/// A fuel record augmented with the distance covered since the previous
/// same-vehicle fill-up and the derived efficiency.
///
/// The first record of each vehicle has no previous odometer reading and
/// produces no sample. A decreasing odometer (e.g. a reset) is not
/// validated and yields a negative efficiency.
#[derive(Clone, Debug, PartialEq)]
pub struct EfficiencySample {
    pub date: NaiveDate,
    pub vehicle: Vehicle,
    pub odometer_km: f64,
    pub liters: f64,
    pub price_per_liter: f64,
    pub total_cost: f64,
    pub distance_km: f64,
    pub km_per_liter: f64,
}
