//! Combustor model.
//!
//! The combustor heats the flow to the turbine inlet temperature at constant
//! stagnation pressure. Fuel flow is not an input: it is whatever is needed
//! to reach the target temperature, given the fuel's heating value and the
//! combustion efficiency.

use turbojet_thermo::{
    Fuel, PerfectGas,
    units::{SpecificEnthalpy, TemperatureOps},
};
use uom::si::{
    f64::{MassRate, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::{Efficiency, StagnationState};

/// Result of a combustor calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionResult {
    /// Stagnation state at the combustor exit (turbine inlet).
    pub outlet: StagnationState,

    /// Heat added per unit mass of air, `cp·(Tt4 − Tt3)`.
    pub heat_addition: SpecificEnthalpy,
}

/// Heats the flow to `exit_temperature` with no pressure loss.
#[must_use]
pub fn combustor(
    inlet: StagnationState,
    exit_temperature: ThermodynamicTemperature,
    gas: &PerfectGas,
) -> CombustionResult {
    let heat_addition = gas.enthalpy_change(exit_temperature.minus(inlet.temperature));

    CombustionResult {
        outlet: StagnationState {
            temperature: exit_temperature,
            pressure: inlet.pressure,
        },
        heat_addition,
    }
}

/// Returns the fuel mass flow needed to supply `heat_addition` to `air_mass_rate`.
///
/// ```text
/// ṁ_f = ṁ·q / (η_comb·LHV)
/// ```
#[must_use]
pub fn fuel_mass_rate(
    air_mass_rate: MassRate,
    heat_addition: SpecificEnthalpy,
    fuel: Fuel,
    eta: Efficiency,
) -> MassRate {
    let eta = eta.into_inner().get::<ratio>();
    air_mass_rate * heat_addition / (eta * fuel.lower_heating_value())
}
