//! Isentropic-efficiency compressor model.
//!
//! Given the inlet stagnation state and a pressure ratio, the model:
//! 1. raises the stagnation pressure by the pressure ratio,
//! 2. computes the ideal (isentropic) exit temperature `Tt3s = Tt2·PR^((γ−1)/γ)`,
//! 3. inflates the ideal temperature rise by the efficiency,
//!    `Tt3 = Tt2 + (Tt3s − Tt2)/η`, so an imperfect compressor needs more
//!    work for the same pressure rise.

use thiserror::Error;
use turbojet_core::constraint::{AboveOne, Constrained};
use turbojet_thermo::{
    PerfectGas,
    units::{SpecificEnthalpy, TemperatureOps},
};
use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::{Efficiency, StagnationState, turbomachinery::CompressionWork};

/// A compression pressure ratio, strictly greater than one.
pub type PressureRatio = Constrained<f64, AboveOne>;

/// Result of a compressor calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionResult {
    /// Actual stagnation state at the compressor exit.
    pub outlet: StagnationState,

    /// Exit temperature an isentropic compressor would reach.
    pub ideal_outlet_temperature: ThermodynamicTemperature,

    /// Actual stagnation temperature rise across the compressor.
    pub temperature_rise: TemperatureInterval,

    /// Required specific shaft work.
    pub work: CompressionWork,
}

/// Errors that may occur when calling the compressor model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum CompressionError {
    /// The computed work is negative or not a number.
    ///
    /// Only reachable with a non-physical inlet temperature.
    #[error("computed compression work is non-physical (raw_work={raw_work:?})")]
    NonPhysicalWork { raw_work: SpecificEnthalpy },
}

/// Computes the compressor exit state and required work.
///
/// # Errors
///
/// Returns [`CompressionError::NonPhysicalWork`] if the resulting work is
/// negative or NaN.
pub fn isentropic(
    inlet: StagnationState,
    pressure_ratio: PressureRatio,
    eta: Efficiency,
    gas: &PerfectGas,
) -> Result<CompressionResult, CompressionError> {
    let pr = pressure_ratio.into_inner();
    let eta = eta.into_inner().get::<ratio>();

    let pressure = inlet.pressure * pr;

    let ideal_outlet_temperature = inlet
        .temperature
        .scaled(gas.isentropic_temperature_ratio(pr));
    let ideal_rise = ideal_outlet_temperature.minus(inlet.temperature);

    // Tt2 + ΔTs/η, written as Tt3s plus the irreversibility so that η = 1
    // returns the ideal temperature bit for bit.
    let loss = ideal_rise * (1.0 / eta - 1.0);
    let temperature = ideal_outlet_temperature.plus(loss);
    let temperature_rise = temperature.minus(inlet.temperature);

    let raw_work = gas.enthalpy_change(temperature_rise);
    let work = CompressionWork::new(raw_work)
        .map_err(|_| CompressionError::NonPhysicalWork { raw_work })?;

    Ok(CompressionResult {
        outlet: StagnationState {
            temperature,
            pressure,
        },
        ideal_outlet_temperature,
        temperature_rise,
        work,
    })
}
