use crate::domain::{EfficiencySample, FuelRecord, Vehicle};

/// Derives fuel-efficiency samples from raw fuel records.
///
/// Records are grouped by vehicle and stable-sorted by date ascending, so
/// records sharing a date keep their insertion order. Each record after the
/// first of a vehicle yields one sample: the odometer delta to the previous
/// record divided by the liters of the later record. The first record of
/// each vehicle has nothing to diff against and is dropped, so a vehicle
/// with a single record contributes no samples.
///
/// Zero-liter records must be excluded by the validation gate before this
/// stage; they would divide by zero here.
pub fn efficiency_samples(records: &[FuelRecord]) -> Vec<EfficiencySample> {
    let mut samples = Vec::new();

    for vehicle in Vehicle::ALL {
        let mut group: Vec<&FuelRecord> =
            records.iter().filter(|r| r.vehicle == vehicle).collect();
        group.sort_by(|a, b| a.date.cmp(&b.date));

        for pair in group.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            let distance_km = current.odometer_km - previous.odometer_km;
            samples.push(EfficiencySample {
                date: current.date,
                vehicle,
                odometer_km: current.odometer_km,
                liters: current.liters,
                price_per_liter: current.price_per_liter,
                total_cost: current.total_cost,
                distance_km,
                km_per_liter: distance_km / current.liters,
            });
        }
    }

    samples
}
