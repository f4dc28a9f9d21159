use turbojet_thermo::units::{SpecificFuelConsumption, sfc_grams_per_second_per_kilonewton};
use uom::si::f64::{Force, MassRate, Ratio, Velocity};

/// Performance derived from a complete set of station states.
///
/// Efficiencies are dimensionless [`Ratio`]s; read them with
/// `uom::si::ratio::percent` for display or `ratio` for fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceMetrics {
    pub exhaust_velocity: Velocity,
    /// Net thrust, `ṁ·(v − u)`.
    pub thrust: Force,
    pub fuel_mass_rate: MassRate,
    pub specific_fuel_consumption: SpecificFuelConsumption,
    /// `1 − T0/Tt3`
    pub thermal_efficiency: Ratio,
    /// `2 / (1 + v/u)`
    pub propulsive_efficiency: Ratio,
    /// Thermal times propulsive efficiency.
    pub overall_efficiency: Ratio,
}

impl PerformanceMetrics {
    /// Returns the specific fuel consumption in g/(s·kN).
    #[must_use]
    pub fn sfc_grams_per_second_per_kilonewton(&self) -> f64 {
        sfc_grams_per_second_per_kilonewton(self.specific_fuel_consumption)
    }
}
