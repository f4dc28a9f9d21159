//! # Design Point
//!
//! Evaluates one engine case and prints the station table, the performance
//! metrics, and the same report as JSON.
//!
//! The case is read from a TOML file when a path is given; otherwise a
//! cruise case at 10 km is used.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example design_point
//! cargo run --example design_point -- demos/cruise.toml
//! ```

use std::{env, fs, process::ExitCode};

use turbojet_cycle::{EngineInputs, config::EngineCase, evaluate, report::CycleReport};
use turbojet_thermo::Fuel;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio, ThermodynamicTemperature, Velocity},
    length::meter,
    ratio::percent,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_hour,
};

fn cruise() -> EngineInputs {
    EngineInputs {
        airspeed: Velocity::new::<kilometer_per_hour>(800.0),
        altitude: Length::new::<meter>(10_000.0),
        inlet_area: Area::new::<square_meter>(0.3),
        compressor_pressure_ratio: 12.0,
        turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(1400.0),
        compressor_efficiency: Ratio::new::<percent>(85.0),
        turbine_efficiency: Ratio::new::<percent>(90.0),
        combustion_efficiency: Ratio::new::<percent>(98.0),
        fuel: Fuel::JetA,
    }
}

fn load_inputs() -> Result<EngineInputs, Box<dyn std::error::Error>> {
    match env::args().nth(1) {
        Some(path) => {
            let source = fs::read_to_string(&path)?;
            let case = EngineCase::from_toml_str(&source)?;
            Ok(EngineInputs::from(case))
        }
        None => Ok(cruise()),
    }
}

fn main() -> ExitCode {
    let inputs = match load_inputs() {
        Ok(inputs) => inputs,
        Err(err) => {
            eprintln!("Input Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = match evaluate(&inputs) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Calculation Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = CycleReport::from(&result);
    println!("{report}");
    println!();

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to serialize report: {err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
