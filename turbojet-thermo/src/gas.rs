//! Calorically perfect gas model.
//!
//! The working fluid of the cycle is modeled with constant specific heats.
//! Isentropic processes then reduce to the power-law relation
//!
//! ```text
//! P2/P1 = (T2/T1)^(γ/(γ−1))
//! ```
//!
//! and enthalpy changes to `Δh = cp·ΔT`.

use thiserror::Error;
use turbojet_core::constraint::{Constrained, ConstraintError, StrictlyPositive};
use uom::si::{
    f64::{
        MassDensity, Pressure, SpecificHeatCapacity, TemperatureInterval,
        ThermodynamicTemperature, Velocity,
    },
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::units::{SpecificEnthalpy, SpecificGasConstant};

/// A calorically perfect gas.
///
/// `gamma` is carried explicitly rather than derived from `cp / (cp − R)`.
/// Cycle analyses conventionally use round values for all three constants
/// (`γ = 1.4`, `cp = 1005`, `R = 287`) even though they are not mutually
/// consistent to the last digit, and results are expected to match hand
/// calculations made with those values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    gas_constant: SpecificGasConstant,
    cp: SpecificHeatCapacity,
    gamma: f64,
}

/// Errors that may occur when constructing a [`PerfectGas`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GasModelError {
    /// The specific gas constant is not strictly positive.
    #[error("gas constant is invalid: {0}")]
    GasConstant(#[source] ConstraintError),

    /// The specific heat capacity is not strictly positive.
    #[error("specific heat capacity is invalid: {0}")]
    SpecificHeat(#[source] ConstraintError),

    /// The ratio of specific heats is not greater than one.
    #[error("ratio of specific heats must be greater than one, got {0}")]
    Gamma(f64),
}

impl PerfectGas {
    /// Creates a perfect gas from its specific gas constant, `cp`, and `γ`.
    ///
    /// # Errors
    ///
    /// Returns a [`GasModelError`] if `R` or `cp` is not strictly positive,
    /// or if `γ` is not greater than one.
    pub fn new(
        gas_constant: SpecificGasConstant,
        cp: SpecificHeatCapacity,
        gamma: f64,
    ) -> Result<Self, GasModelError> {
        let gas_constant: Constrained<_, StrictlyPositive> =
            Constrained::new(gas_constant).map_err(GasModelError::GasConstant)?;
        let cp: Constrained<_, StrictlyPositive> =
            Constrained::new(cp).map_err(GasModelError::SpecificHeat)?;

        // Also rejects NaN.
        if !(gamma > 1.0 && gamma.is_finite()) {
            return Err(GasModelError::Gamma(gamma));
        }

        Ok(Self {
            gas_constant: gas_constant.into_inner(),
            cp: cp.into_inner(),
            gamma,
        })
    }

    /// Air with `R = 287.0 J/kg·K`, `cp = 1005 J/kg·K`, and `γ = 1.4`.
    #[must_use]
    pub fn air() -> Self {
        Self {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0),
            cp: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0),
            gamma: 1.4,
        }
    }

    /// Returns the specific gas constant `R`.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.gas_constant
    }

    /// Returns the specific heat capacity at constant pressure `cp`.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    /// Returns the ratio of specific heats `γ`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Computes density using the ideal gas law, `ρ = P / (R·T)`.
    #[must_use]
    pub fn density(&self, temperature: ThermodynamicTemperature, pressure: Pressure) -> MassDensity {
        pressure / (self.gas_constant * temperature)
    }

    /// Computes the enthalpy change `cp·ΔT`.
    #[must_use]
    pub fn enthalpy_change(&self, delta: TemperatureInterval) -> SpecificEnthalpy {
        self.cp * delta
    }

    /// Computes the temperature change `Δh / cp`.
    #[must_use]
    pub fn temperature_change(&self, delta: SpecificEnthalpy) -> TemperatureInterval {
        delta / self.cp
    }

    /// Computes the temperature rise from bringing a flow at `velocity` to rest,
    /// `ΔT = ½·V² / cp`.
    #[must_use]
    pub fn ram_temperature_rise(&self, velocity: Velocity) -> TemperatureInterval {
        let kinetic_energy: SpecificEnthalpy = 0.5 * velocity * velocity;
        self.temperature_change(kinetic_energy)
    }

    /// Returns the pressure ratio of an isentropic process with the given
    /// temperature ratio, `(T2/T1)^(γ/(γ−1))`.
    #[must_use]
    pub fn isentropic_pressure_ratio(&self, temperature_ratio: f64) -> f64 {
        temperature_ratio.powf(self.gamma / (self.gamma - 1.0))
    }

    /// Returns the temperature ratio of an isentropic process with the given
    /// pressure ratio, `(P2/P1)^((γ−1)/γ)`.
    #[must_use]
    pub fn isentropic_temperature_ratio(&self, pressure_ratio: f64) -> f64 {
        pressure_ratio.powf((self.gamma - 1.0) / self.gamma)
    }
}

impl Default for PerfectGas {
    fn default() -> Self {
        Self::air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_density::kilogram_per_cubic_meter, pressure::pascal,
        temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    };

    #[test]
    fn air_constants() {
        let air = PerfectGas::air();
        assert_relative_eq!(air.gamma(), 1.4);
        assert_relative_eq!(air.cp().get::<joule_per_kilogram_kelvin>(), 1005.0);
        assert_relative_eq!(
            air.gas_constant().get::<joule_per_kilogram_kelvin>(),
            287.0
        );
        assert_eq!(PerfectGas::default(), air);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0);
        let cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1005.0);
        let zero_r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(0.0);
        let negative_cp = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(-1.0);

        assert!(PerfectGas::new(r, cp, 1.4).is_ok());
        assert_eq!(
            PerfectGas::new(zero_r, cp, 1.4),
            Err(GasModelError::GasConstant(ConstraintError::Zero))
        );
        assert_eq!(
            PerfectGas::new(r, negative_cp, 1.4),
            Err(GasModelError::SpecificHeat(ConstraintError::Negative))
        );
        assert!(matches!(
            PerfectGas::new(r, cp, 1.0),
            Err(GasModelError::Gamma(_))
        ));
        assert!(matches!(
            PerfectGas::new(r, cp, f64::NAN),
            Err(GasModelError::Gamma(_))
        ));
    }

    #[test]
    fn density_from_ideal_gas_law() {
        // ρ = 101_325 / (287 · 288.15) ≈ 1.2252 kg/m³
        let rho = PerfectGas::air().density(
            ThermodynamicTemperature::new::<kelvin>(288.15),
            Pressure::new::<pascal>(101_325.0),
        );
        assert_relative_eq!(
            rho.get::<kilogram_per_cubic_meter>(),
            101_325.0 / (287.0 * 288.15),
            max_relative = 1e-12
        );
    }

    #[test]
    fn ram_rise_matches_kinetic_energy() {
        // ½·(201 m/s)² / 1005 = 20.1 K
        let rise = PerfectGas::air().ram_temperature_rise(Velocity::new::<meter_per_second>(201.0));
        assert_relative_eq!(rise.get::<delta_kelvin>(), 20.1, epsilon = 1e-12);
    }

    #[test]
    fn enthalpy_and_temperature_changes_are_inverse() {
        let air = PerfectGas::air();
        let dt = TemperatureInterval::new::<delta_kelvin>(100.0);
        let dh = air.enthalpy_change(dt);
        assert_relative_eq!(dh.value, 100_500.0);
        assert_relative_eq!(air.temperature_change(dh).get::<delta_kelvin>(), 100.0);
    }

    #[test]
    fn isentropic_relations_are_inverse() {
        let air = PerfectGas::air();

        // With γ = 1.4 the exponent is 3.5 up to rounding, so a temperature
        // ratio of 2 gives 2^3.5.
        assert_relative_eq!(
            air.isentropic_pressure_ratio(2.0),
            2f64.powf(3.5),
            max_relative = 1e-12
        );

        let tr = air.isentropic_temperature_ratio(12.0);
        assert_relative_eq!(air.isentropic_pressure_ratio(tr), 12.0, max_relative = 1e-12);
    }
}
