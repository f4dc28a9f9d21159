//! Diffuser model.
//!
//! The diffuser decelerates the incoming air and converts its kinetic energy
//! into stagnation enthalpy without losses:
//!
//! ```text
//! Tt2 = T1 + ½·u² / cp
//! Pt2 = P1·(Tt2/T1)^(γ/(γ−1))
//! ```

use turbojet_thermo::{PerfectGas, units::TemperatureOps};
use uom::si::f64::{TemperatureInterval, Velocity};

use crate::{StagnationState, StaticState};

/// Result of a diffuser calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffuserResult {
    /// Stagnation state at the diffuser exit.
    pub outlet: StagnationState,

    /// Temperature rise from recovering the flight kinetic energy.
    pub ram_rise: TemperatureInterval,
}

/// Computes the diffuser exit stagnation state for a flow entering at `airspeed`.
#[must_use]
pub fn diffuser(inlet: StaticState, airspeed: Velocity, gas: &PerfectGas) -> DiffuserResult {
    let ram_rise = gas.ram_temperature_rise(airspeed);
    let temperature = inlet.temperature.plus(ram_rise);

    let temperature_ratio = temperature.ratio_to(inlet.temperature);
    let pressure = inlet.pressure * gas.isentropic_pressure_ratio(temperature_ratio);

    DiffuserResult {
        outlet: StagnationState {
            temperature,
            pressure,
        },
        ram_rise,
    }
}
