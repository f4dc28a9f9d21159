//! # Pressure Ratio Sweep
//!
//! Evaluates a cruise case over a range of compressor pressure ratios and
//! prints thrust, specific fuel consumption, and efficiencies for each.
//!
//! Points the model rejects are listed with the reason instead of values.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example pressure_ratio_sweep
//! ```

use turbojet_cycle::{CycleEvaluator, EngineInputs};
use turbojet_thermo::Fuel;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio, ThermodynamicTemperature, Velocity},
    force::kilonewton,
    length::meter,
    ratio::percent,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_hour,
};

const PRESSURE_RATIOS: [f64; 10] = [2.0, 4.0, 6.0, 8.0, 10.0, 15.0, 20.0, 30.0, 40.0, 60.0];

fn main() {
    let evaluator = CycleEvaluator::default();
    let base = EngineInputs {
        airspeed: Velocity::new::<kilometer_per_hour>(800.0),
        altitude: Length::new::<meter>(10_000.0),
        inlet_area: Area::new::<square_meter>(0.3),
        compressor_pressure_ratio: 2.0,
        turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(1400.0),
        compressor_efficiency: Ratio::new::<percent>(85.0),
        turbine_efficiency: Ratio::new::<percent>(90.0),
        combustion_efficiency: Ratio::new::<percent>(98.0),
        fuel: Fuel::Jp8,
    };

    println!(
        "{:>6} {:>12} {:>14} {:>10} {:>10} {:>10}",
        "PRc", "F [kN]", "SFC [g/kN/s]", "eta_th %", "eta_p %", "eta_o %"
    );

    for prc in PRESSURE_RATIOS {
        let inputs = EngineInputs {
            compressor_pressure_ratio: prc,
            ..base
        };

        match evaluator.evaluate(&inputs) {
            Ok(result) => {
                let m = result.metrics;
                println!(
                    "{:>6.1} {:>12.3} {:>14.2} {:>10.2} {:>10.2} {:>10.2}",
                    prc,
                    m.thrust.get::<kilonewton>(),
                    m.sfc_grams_per_second_per_kilonewton(),
                    m.thermal_efficiency.get::<percent>(),
                    m.propulsive_efficiency.get::<percent>(),
                    m.overall_efficiency.get::<percent>(),
                );
            }
            Err(err) => println!("{prc:>6.1} {err}"),
        }
    }
}
