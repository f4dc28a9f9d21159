//! Nozzle model.
//!
//! The nozzle expands the turbine exit flow isentropically to ambient static
//! pressure and converts the enthalpy drop into exhaust velocity:
//!
//! ```text
//! Te = Tt5·(P0/Pt5)^((γ−1)/γ)
//! v  = sqrt(2·cp·(Tt5 − Te))
//! ```

use thiserror::Error;
use turbojet_thermo::{PerfectGas, units::TemperatureOps};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Velocity},
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::{StagnationState, StaticState};

/// Result of a nozzle calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleResult {
    /// Static state of the exhaust, at ambient pressure.
    pub exit: StaticState,

    /// Exhaust velocity.
    pub exhaust_velocity: Velocity,
}

/// Errors that may occur when calling the nozzle model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NozzleError {
    /// Expanding to ambient pressure would raise the temperature.
    ///
    /// The stagnation pressure reaching the nozzle is below ambient, so there
    /// is no enthalpy left to accelerate the exhaust.
    #[error("negative enthalpy drop across nozzle (Tt={stagnation:?}, Te={exit:?})")]
    NegativeEnthalpyDrop {
        stagnation: ThermodynamicTemperature,
        exit: ThermodynamicTemperature,
    },
}

/// Expands the flow to `ambient_pressure`.
///
/// # Errors
///
/// Returns [`NozzleError::NegativeEnthalpyDrop`] if the exit static
/// temperature would exceed the inlet stagnation temperature.
pub fn nozzle(
    inlet: StagnationState,
    ambient_pressure: Pressure,
    gas: &PerfectGas,
) -> Result<NozzleResult, NozzleError> {
    let pressure_ratio = ambient_pressure.get::<pascal>() / inlet.pressure.get::<pascal>();
    let exit_temperature = inlet
        .temperature
        .scaled(gas.isentropic_temperature_ratio(pressure_ratio));

    if exit_temperature > inlet.temperature {
        return Err(NozzleError::NegativeEnthalpyDrop {
            stagnation: inlet.temperature,
            exit: exit_temperature,
        });
    }

    let enthalpy_drop = gas.enthalpy_change(inlet.temperature.minus(exit_temperature));
    let exhaust_velocity = Velocity::new::<meter_per_second>((2.0 * enthalpy_drop.value).sqrt());

    Ok(NozzleResult {
        exit: StaticState {
            temperature: exit_temperature,
            pressure: ambient_pressure,
        },
        exhaust_velocity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::kilopascal, thermodynamic_temperature::kelvin};

    fn turbine_exit(kelvin_value: f64, kpa: f64) -> StagnationState {
        StagnationState {
            temperature: ThermodynamicTemperature::new::<kelvin>(kelvin_value),
            pressure: Pressure::new::<kilopascal>(kpa),
        }
    }

    #[test]
    fn expansion_to_ambient() {
        // Pt5/P0 = 128 gives Te = Tt5/4:
        //   Te = 1000 / 4 = 250 K
        //   v = sqrt(2 · 1005 · 750) = sqrt(1_507_500) ≈ 1227.8 m/s
        let result = nozzle(
            turbine_exit(1000.0, 12.8),
            Pressure::new::<kilopascal>(0.1),
            &PerfectGas::air(),
        )
        .unwrap();

        assert_relative_eq!(
            result.exit.temperature.get::<kelvin>(),
            250.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.exit.pressure.get::<kilopascal>(), 0.1);
        assert_relative_eq!(
            result.exhaust_velocity.get::<meter_per_second>(),
            1_507_500.0_f64.sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn matched_pressure_gives_zero_velocity() {
        let result = nozzle(
            turbine_exit(700.0, 50.0),
            Pressure::new::<kilopascal>(50.0),
            &PerfectGas::air(),
        )
        .unwrap();

        assert_relative_eq!(result.exhaust_velocity.get::<meter_per_second>(), 0.0);
    }

    #[test]
    fn sub_ambient_stagnation_pressure_is_an_error() {
        let err = nozzle(
            turbine_exit(700.0, 90.0),
            Pressure::new::<kilopascal>(100.0),
            &PerfectGas::air(),
        )
        .unwrap_err();

        match err {
            NozzleError::NegativeEnthalpyDrop { stagnation, exit } => {
                assert_relative_eq!(stagnation.get::<kelvin>(), 700.0);
                assert!(exit > stagnation);
            }
        }
    }
}
