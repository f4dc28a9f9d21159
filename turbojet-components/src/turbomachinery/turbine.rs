//! Work-matched turbine model.
//!
//! The turbine drives the compressor through a shared shaft with no
//! mechanical losses. Its ideal (isentropic) temperature drop is set equal to
//! the compressor's actual temperature rise:
//!
//! ```text
//! Tt5s = Tt4 − (Tt3 − Tt2)
//! Tt5  = Tt4 − (Tt4 − Tt5s)/η
//! Pt5  = Pt4·(Tt5s/Tt4)^(γ/(γ−1))
//! ```
//!
//! The exit pressure follows the ideal expansion, while the exit temperature
//! reflects the efficiency-scaled drop.

use thiserror::Error;
use turbojet_thermo::{
    PerfectGas,
    units::{SpecificEnthalpy, TemperatureOps},
};
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::{Efficiency, StagnationState, turbomachinery::ExpansionWork};

/// Result of a turbine calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionResult {
    /// Actual stagnation state at the turbine exit.
    pub outlet: StagnationState,

    /// Exit temperature of the ideal expansion.
    pub ideal_outlet_temperature: ThermodynamicTemperature,

    /// Produced specific shaft work.
    pub work: ExpansionWork,
}

/// Errors that may occur when calling the turbine model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum TurbineError {
    /// Matching the compressor would cool the gas to or below absolute zero.
    ///
    /// Happens when the turbine inlet temperature is too low for the
    /// temperature rise the compressor demands.
    #[error("turbine exit temperature is non-physical ({temperature_kelvin} K)")]
    NonPositiveExitTemperature { temperature_kelvin: f64 },

    /// The computed work is negative or not a number.
    #[error("computed expansion work is non-physical (raw_work={raw_work:?})")]
    NonPhysicalWork { raw_work: SpecificEnthalpy },
}

/// Computes the turbine exit state for a turbine that supplies a compressor
/// with the given actual stagnation temperature rise.
///
/// # Errors
///
/// Returns [`TurbineError::NonPositiveExitTemperature`] if the ideal or actual
/// exit temperature is not above absolute zero, and
/// [`TurbineError::NonPhysicalWork`] if the produced work would be negative.
pub fn work_matched(
    inlet: StagnationState,
    compressor_rise: TemperatureInterval,
    eta: Efficiency,
    gas: &PerfectGas,
) -> Result<ExpansionResult, TurbineError> {
    let eta = eta.into_inner().get::<ratio>();

    let ideal_outlet_temperature = inlet.temperature.plus(-compressor_rise);
    ensure_positive(ideal_outlet_temperature)?;

    let ideal_drop = inlet.temperature.minus(ideal_outlet_temperature);

    // Tt4 − ΔTs/η, written relative to Tt5s so that η = 1 is exact.
    let loss = ideal_drop * (1.0 / eta - 1.0);
    let temperature = ideal_outlet_temperature.plus(-loss);
    ensure_positive(temperature)?;
    let actual_drop = inlet.temperature.minus(temperature);

    let temperature_ratio = ideal_outlet_temperature.ratio_to(inlet.temperature);
    let pressure = inlet.pressure * gas.isentropic_pressure_ratio(temperature_ratio);

    let raw_work = gas.enthalpy_change(actual_drop);
    let work =
        ExpansionWork::new(raw_work).map_err(|_| TurbineError::NonPhysicalWork { raw_work })?;

    Ok(ExpansionResult {
        outlet: StagnationState {
            temperature,
            pressure,
        },
        ideal_outlet_temperature,
        work,
    })
}

fn ensure_positive(temperature: ThermodynamicTemperature) -> Result<(), TurbineError> {
    let temperature_kelvin = temperature.get::<kelvin>();
    if temperature_kelvin > 0.0 {
        Ok(())
    } else {
        Err(TurbineError::NonPositiveExitTemperature { temperature_kelvin })
    }
}
