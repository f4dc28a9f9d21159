//! Flat, serializable summary of a cycle result in display units.
//!
//! [`CycleReport`] is what an output form or a charting tool consumes: every
//! number is a plain `f64` in a fixed unit, named by its field suffix.

use std::fmt;

use serde::Serialize;
use uom::si::{
    available_energy::kilojoule_per_kilogram,
    force::newton,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    power::kilowatt,
    pressure::kilopascal,
    ratio::percent,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{Condition, CycleResult, Station};

/// One station row of a [`CycleReport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StationReport {
    pub station: Station,
    pub condition: Condition,
    pub temperature_k: f64,
    pub pressure_kpa: f64,
}

/// A cycle result in display units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleReport {
    pub stations: Vec<StationReport>,
    /// Station temperatures in flow order, for charting.
    pub temperatures_k: [f64; 7],
    /// Station pressures in flow order, for charting.
    pub pressures_kpa: [f64; 7],
    pub exhaust_velocity_m_per_s: f64,
    pub thrust_n: f64,
    pub air_mass_rate_kg_per_s: f64,
    pub fuel_mass_rate_kg_per_s: f64,
    pub specific_fuel_consumption_g_per_s_per_kn: f64,
    pub thermal_efficiency_percent: f64,
    pub propulsive_efficiency_percent: f64,
    pub overall_efficiency_percent: f64,
    pub ambient_density_kg_per_m3: f64,
    pub compressor_work_kj_per_kg: f64,
    pub turbine_work_kj_per_kg: f64,
    pub compressor_power_kw: f64,
    pub turbine_power_kw: f64,
}

impl From<&CycleResult> for CycleReport {
    fn from(result: &CycleResult) -> Self {
        let stages = &result.stages;
        let metrics = &result.metrics;
        let diagnostics = &result.diagnostics;

        Self {
            stations: stages
                .sequence()
                .iter()
                .map(|stage| StationReport {
                    station: stage.station,
                    condition: stage.condition,
                    temperature_k: stage.temperature.get::<kelvin>(),
                    pressure_kpa: stage.pressure.get::<kilopascal>(),
                })
                .collect(),
            temperatures_k: stages.temperatures().map(|t| t.get::<kelvin>()),
            pressures_kpa: stages.pressures().map(|p| p.get::<kilopascal>()),
            exhaust_velocity_m_per_s: metrics.exhaust_velocity.get::<meter_per_second>(),
            thrust_n: metrics.thrust.get::<newton>(),
            air_mass_rate_kg_per_s: diagnostics.air_mass_rate.get::<kilogram_per_second>(),
            fuel_mass_rate_kg_per_s: metrics.fuel_mass_rate.get::<kilogram_per_second>(),
            specific_fuel_consumption_g_per_s_per_kn: metrics.sfc_grams_per_second_per_kilonewton(),
            thermal_efficiency_percent: metrics.thermal_efficiency.get::<percent>(),
            propulsive_efficiency_percent: metrics.propulsive_efficiency.get::<percent>(),
            overall_efficiency_percent: metrics.overall_efficiency.get::<percent>(),
            ambient_density_kg_per_m3: diagnostics
                .ambient_density
                .get::<kilogram_per_cubic_meter>(),
            compressor_work_kj_per_kg: diagnostics
                .compressor_work
                .quantity()
                .get::<kilojoule_per_kilogram>(),
            turbine_work_kj_per_kg: diagnostics
                .turbine_work
                .quantity()
                .get::<kilojoule_per_kilogram>(),
            compressor_power_kw: diagnostics
                .compressor_work
                .power(diagnostics.air_mass_rate)
                .get::<kilowatt>(),
            turbine_power_kw: diagnostics
                .turbine_work
                .power(diagnostics.air_mass_rate)
                .get::<kilowatt>(),
        }
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:<11} {:>10} {:>12}", "station", "condition", "T [K]", "P [kPa]")?;
        for row in &self.stations {
            let condition = match row.condition {
                Condition::Static => "static",
                Condition::Stagnation => "stagnation",
            };
            writeln!(
                f,
                "{:<12} {:<11} {:>10.2} {:>12.3}",
                row.station.name(),
                condition,
                row.temperature_k,
                row.pressure_kpa
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Exhaust Velocity: {:.2} m/s", self.exhaust_velocity_m_per_s)?;
        writeln!(f, "Thrust: {:.2} N", self.thrust_n)?;
        writeln!(f, "Air Mass Flow Rate: {:.2} kg/s", self.air_mass_rate_kg_per_s)?;
        writeln!(f, "Compressor Power: {:.1} kW", self.compressor_power_kw)?;
        writeln!(f, "Turbine Power: {:.1} kW", self.turbine_power_kw)?;
        writeln!(f, "Fuel Mass Flow Rate: {:.4} kg/s", self.fuel_mass_rate_kg_per_s)?;
        writeln!(
            f,
            "Specific Fuel Consumption: {:.2} g/kN/s",
            self.specific_fuel_consumption_g_per_s_per_kn
        )?;
        writeln!(f, "Thermal Efficiency: {:.2} %", self.thermal_efficiency_percent)?;
        writeln!(f, "Propulsive Efficiency: {:.2} %", self.propulsive_efficiency_percent)?;
        write!(f, "Overall Efficiency: {:.2} %", self.overall_efficiency_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use turbojet_thermo::Fuel;
    use uom::si::{
        area::square_meter,
        f64::{Area, Length, Ratio, ThermodynamicTemperature, Velocity},
        length::meter,
        ratio::ratio,
        velocity::kilometer_per_hour,
    };

    use crate::{EngineInputs, evaluate};

    fn report() -> (CycleResult, CycleReport) {
        let inputs = EngineInputs {
            airspeed: Velocity::new::<kilometer_per_hour>(800.0),
            altitude: Length::new::<meter>(10_000.0),
            inlet_area: Area::new::<square_meter>(0.3),
            compressor_pressure_ratio: 12.0,
            turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(1400.0),
            compressor_efficiency: Ratio::new::<ratio>(0.85),
            turbine_efficiency: Ratio::new::<ratio>(0.9),
            combustion_efficiency: Ratio::new::<ratio>(0.98),
            fuel: Fuel::Jp8,
        };
        let result = evaluate(&inputs).unwrap();
        let report = CycleReport::from(&result);
        (result, report)
    }

    #[test]
    fn values_are_in_display_units() {
        let (result, report) = report();

        assert_eq!(report.stations.len(), 7);
        assert_eq!(report.stations[0].station, Station::Ambient);
        assert_eq!(report.stations[6].condition, Condition::Static);
        assert_eq!(report.temperatures_k[4], 1400.0);
        assert_relative_eq!(
            report.pressures_kpa[0] * 1000.0,
            result.stages.ambient.pressure.value,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            report.overall_efficiency_percent,
            report.thermal_efficiency_percent * report.propulsive_efficiency_percent / 100.0,
            max_relative = 1e-9
        );

        // The turbine drives the compressor, so its actual work is the
        // compressor work divided by turbine efficiency.
        assert_relative_eq!(
            report.turbine_work_kj_per_kg * 0.9,
            report.compressor_work_kj_per_kg,
            max_relative = 1e-9
        );
    }

    #[test]
    fn serializes_to_json() {
        let (_, report) = report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["stations"][0]["station"], "ambient");
        assert_eq!(json["stations"][2]["condition"], "stagnation");
        assert_eq!(json["stations"][6]["station"], "nozzle");
        assert_eq!(json["temperatures_k"].as_array().map(Vec::len), Some(7));
        assert!(json["thrust_n"].as_f64().is_some_and(|f| f > 0.0));
    }

    #[test]
    fn text_lists_every_station_and_metric() {
        let (_, report) = report();
        let text = report.to_string();

        for station in Station::ALL {
            assert!(text.contains(station.name()), "missing {station}");
        }
        assert!(text.contains("Thrust: "));
        assert!(text.contains("Specific Fuel Consumption: "));
        assert!(text.ends_with('%'));
    }
}
