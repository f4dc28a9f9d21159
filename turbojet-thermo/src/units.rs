//! Quantity aliases and temperature helpers.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific enthalpy, J/kg in SI.
///
/// Also used for specific shaft work and specific heat addition.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thrust specific fuel consumption, kg/(s·N) in SI.
///
/// Turbojet performance is usually quoted in g/(s·kN); see
/// [`sfc_grams_per_second_per_kilonewton`].
pub type SpecificFuelConsumption = Quantity<ISQ<N1, Z0, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Returns a specific fuel consumption in g/(s·kN).
///
/// One kg/(s·N) is 10⁶ g/(s·kN).
#[inline]
#[must_use]
pub fn sfc_grams_per_second_per_kilonewton(sfc: SpecificFuelConsumption) -> f64 {
    sfc.value * 1.0e6
}

/// Extension methods for `ThermodynamicTemperature`.
///
/// A `TemperatureInterval` (a temperature change) is distinct from a
/// `ThermodynamicTemperature` (a specific temperature value), and `uom`
/// deliberately restricts arithmetic between them.
///
/// For more background on this distinction and unit handling in `uom`, see:
/// - [uom#380](https://github.com/iliekturtles/uom/issues/380)
/// - [uom#289](https://github.com/iliekturtles/uom/issues/289)
///
/// These methods go through kelvin so that absolute temperatures can be
/// offset, compared, and scaled by the ratios that appear in isentropic
/// relations.
pub trait TemperatureOps: Sized {
    /// Returns the difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns `self` raised by `delta` (lowered if `delta` is negative).
    fn plus(self, delta: TemperatureInterval) -> Self;

    /// Returns `self` multiplied by a dimensionless ratio.
    fn scaled(self, ratio: f64) -> Self;

    /// Returns the dimensionless ratio `self / other` of absolute temperatures.
    fn ratio_to(self, other: Self) -> f64;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn plus(self, delta: TemperatureInterval) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(
            self.get::<abs_kelvin>() + delta.get::<delta_kelvin>(),
        )
    }

    fn scaled(self, ratio: f64) -> Self {
        ThermodynamicTemperature::new::<abs_kelvin>(self.get::<abs_kelvin>() * ratio)
    }

    fn ratio_to(self, other: Self) -> f64 {
        self.get::<abs_kelvin>() / other.get::<abs_kelvin>()
    }
}
