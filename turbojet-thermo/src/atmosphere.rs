//! Standard atmosphere model for the troposphere.
//!
//! Static temperature falls linearly with altitude,
//!
//! ```text
//! T = T_sl − L·z
//! ```
//!
//! and static pressure follows the matching polytropic relation
//!
//! ```text
//! P = P_sl·(T/T_sl)^n
//! ```
//!
//! with `n = g/(L·R) ≈ 5.256` for the International Standard Atmosphere.
//! The model is only meaningful below the tropopause (about 11 km), but it is
//! evaluated at any altitude that keeps the temperature above absolute zero.

use thiserror::Error;
use uom::si::{
    f64::{Length, MassDensity, Pressure, ThermodynamicTemperature},
    length::meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{gas::PerfectGas, units::TemperatureOps};

/// Static conditions of the undisturbed air at some altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientConditions {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
}

/// Errors that may occur when evaluating the atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AtmosphereError {
    /// The lapse-rate model drives the temperature to or below absolute zero.
    #[error("ambient temperature is non-physical at altitude {altitude:?} (T = {temperature_kelvin} K)")]
    NonPositiveTemperature {
        altitude: Length,
        temperature_kelvin: f64,
    },
}

/// Linear-lapse troposphere.
///
/// The default instance uses the International Standard Atmosphere sea-level
/// values: 288.15 K, 101.325 kPa, a lapse rate of 0.0065 K/m, and a pressure
/// exponent of 5.256.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Troposphere {
    pub sea_level_temperature: ThermodynamicTemperature,
    pub sea_level_pressure: Pressure,
    /// Temperature drop per meter of altitude, K/m.
    pub lapse_rate: f64,
    pub pressure_exponent: f64,
}

impl Default for Troposphere {
    fn default() -> Self {
        Self {
            sea_level_temperature: ThermodynamicTemperature::new::<kelvin>(288.15),
            sea_level_pressure: Pressure::new::<pascal>(101_325.0),
            lapse_rate: 0.0065,
            pressure_exponent: 5.256,
        }
    }
}

impl Troposphere {
    /// Evaluates static temperature, pressure, and density at `altitude`.
    ///
    /// Density comes from the ideal gas law with the gas constant of `gas`.
    ///
    /// # Errors
    ///
    /// Returns [`AtmosphereError::NonPositiveTemperature`] if the altitude is
    /// high enough that the linear temperature profile reaches absolute zero,
    /// or if the altitude is not a number.
    pub fn at_altitude(
        &self,
        altitude: Length,
        gas: &PerfectGas,
    ) -> Result<AmbientConditions, AtmosphereError> {
        let t_sl = self.sea_level_temperature.get::<kelvin>();
        let t = t_sl - self.lapse_rate * altitude.get::<meter>();

        // Also rejects NaN.
        if !(t > 0.0) {
            return Err(AtmosphereError::NonPositiveTemperature {
                altitude,
                temperature_kelvin: t,
            });
        }

        let temperature = ThermodynamicTemperature::new::<kelvin>(t);
        let theta = temperature.ratio_to(self.sea_level_temperature);
        let pressure = self.sea_level_pressure * theta.powf(self.pressure_exponent);
        let density = gas.density(temperature, pressure);

        Ok(AmbientConditions {
            temperature,
            pressure,
            density,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::kilometer, mass_density::kilogram_per_cubic_meter, pressure::kilopascal,
    };

    fn ambient_at(meters: f64) -> Result<AmbientConditions, AtmosphereError> {
        Troposphere::default().at_altitude(Length::new::<meter>(meters), &PerfectGas::air())
    }

    #[test]
    fn sea_level_matches_reference_values_exactly() {
        let ambient = ambient_at(0.0).unwrap();
        assert_eq!(
            ambient.temperature,
            ThermodynamicTemperature::new::<kelvin>(288.15)
        );
        assert_eq!(ambient.pressure, Pressure::new::<pascal>(101_325.0));
        assert_relative_eq!(
            ambient.density.get::<kilogram_per_cubic_meter>(),
            1.2252,
            epsilon = 1e-4
        );
    }

    #[test]
    fn cruise_altitude() {
        // Hand calculation at 10 km:
        //   T = 288.15 − 65 = 223.15 K
        //   P = 101.325 · (223.15 / 288.15)^5.256 ≈ 26.44 kPa
        let ambient = Troposphere::default()
            .at_altitude(Length::new::<kilometer>(10.0), &PerfectGas::air())
            .unwrap();

        assert_relative_eq!(ambient.temperature.get::<kelvin>(), 223.15, epsilon = 1e-9);
        assert_relative_eq!(
            ambient.pressure.get::<kilopascal>(),
            101.325 * (223.15_f64 / 288.15).powf(5.256),
            max_relative = 1e-12
        );
        assert_relative_eq!(ambient.pressure.get::<kilopascal>(), 26.44, epsilon = 0.01);
    }

    #[test]
    fn below_sea_level_is_warmer_and_denser() {
        let sea_level = ambient_at(0.0).unwrap();
        let below = ambient_at(-400.0).unwrap();

        assert!(below.temperature > sea_level.temperature);
        assert!(below.pressure > sea_level.pressure);
        assert!(below.density > sea_level.density);
    }

    #[test]
    fn absolute_zero_is_an_error() {
        // 288.15 / 0.0065 ≈ 44_331 m
        assert!(matches!(
            ambient_at(50_000.0),
            Err(AtmosphereError::NonPositiveTemperature { .. })
        ));
        assert!(ambient_at(f64::NAN).is_err());
    }
}
