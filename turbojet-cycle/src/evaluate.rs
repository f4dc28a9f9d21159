//! The cycle evaluator.
//!
//! Stations are computed strictly in flow order, each from the one before it:
//!
//! ```text
//! ambient ─► inlet ─► diffuser ─► compressor ─► combustor ─► turbine ─► nozzle
//!    0         1         2            3             4            5          e
//! ```
//!
//! Performance metrics are derived once every station exists.

use turbojet_components::{
    StaticState, combustor, diffuser, inlet, nozzle,
    turbomachinery::{CompressionWork, ExpansionWork, compressor, turbine},
};
use turbojet_core::constraint::ConstraintError;
use turbojet_thermo::{
    PerfectGas, Troposphere,
    units::{SpecificEnthalpy, SpecificFuelConsumption, TemperatureOps},
};
use uom::si::{
    f64::{
        Force, MassDensity, MassRate, Ratio, TemperatureInterval, ThermodynamicTemperature,
    },
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::{
    CycleError, CycleStages, DomainError, EngineInputs, PerformanceMetrics, StageState, Station,
    inputs::invalid,
};

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleResult {
    pub stages: CycleStages,
    pub metrics: PerformanceMetrics,
    pub diagnostics: CycleDiagnostics,
}

/// Intermediate quantities that are useful for checking a result by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleDiagnostics {
    pub ambient_density: MassDensity,
    pub air_mass_rate: MassRate,
    pub ram_temperature_rise: TemperatureInterval,
    /// Compressor exit temperature of an isentropic compressor, `Tt3s`.
    pub ideal_compressor_exit_temperature: ThermodynamicTemperature,
    /// Turbine exit temperature of the ideal expansion, `Tt5s`.
    pub ideal_turbine_exit_temperature: ThermodynamicTemperature,
    pub compressor_work: CompressionWork,
    pub turbine_work: ExpansionWork,
    pub heat_addition: SpecificEnthalpy,
}

/// Evaluates the turbojet cycle for a working gas and an atmosphere.
///
/// The default evaluator uses air with `γ = 1.4`, `cp = 1005 J/kg·K`,
/// `R = 287 J/kg·K`, and the standard troposphere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CycleEvaluator {
    gas: PerfectGas,
    atmosphere: Troposphere,
}

impl CycleEvaluator {
    #[must_use]
    pub fn new(gas: PerfectGas, atmosphere: Troposphere) -> Self {
        Self { gas, atmosphere }
    }

    #[must_use]
    pub fn gas(&self) -> &PerfectGas {
        &self.gas
    }

    #[must_use]
    pub fn atmosphere(&self) -> &Troposphere {
        &self.atmosphere
    }

    /// Computes every station state and the resulting performance metrics.
    ///
    /// # Errors
    ///
    /// - [`CycleError::InvalidInput`] if an input is outside its allowed range.
    /// - [`CycleError::Domain`] if an intermediate result is physically
    ///   invalid. Zero airspeed is reported as [`DomainError::ZeroAirspeed`].
    pub fn evaluate(&self, inputs: &EngineInputs) -> Result<CycleResult, CycleError> {
        let valid = inputs.validate()?;
        let gas = &self.gas;
        let u = valid.airspeed.into_inner();

        // Ambient (0)
        let ambient = self
            .atmosphere
            .at_altitude(inputs.altitude, gas)
            .map_err(DomainError::NonPhysicalAmbient)?;
        if !(inputs.turbine_inlet_temperature > ambient.temperature) {
            return Err(invalid("turbine_inlet_temperature")(
                ConstraintError::BelowMinimum,
            ));
        }
        let freestream = StaticState {
            temperature: ambient.temperature,
            pressure: ambient.pressure,
        };
        let air_mass_rate: MassRate = ambient.density * u * valid.inlet_area.into_inner();

        // Inlet (0 → 1)
        let inlet = inlet::inlet(freestream);

        // Diffuser (1 → 2)
        let diffuser = diffuser::diffuser(inlet, u, gas);

        // Compressor (2 → 3)
        let compressor = compressor::isentropic(
            diffuser.outlet,
            valid.pressure_ratio,
            valid.compressor_efficiency,
            gas,
        )
        .map_err(DomainError::Compressor)?;

        // Combustor (3 → 4)
        let combustor =
            combustor::combustor(compressor.outlet, inputs.turbine_inlet_temperature, gas);

        // Turbine (4 → 5)
        let turbine = turbine::work_matched(
            combustor.outlet,
            compressor.temperature_rise,
            valid.turbine_efficiency,
            gas,
        )
        .map_err(DomainError::Turbine)?;

        // Nozzle (5 → e)
        let nozzle =
            nozzle::nozzle(turbine.outlet, ambient.pressure, gas).map_err(DomainError::from)?;

        // Performance
        let v = nozzle.exhaust_velocity;
        let thrust: Force = air_mass_rate * (v - u);
        if !(thrust.value > 0.0) {
            return Err(DomainError::NonPositiveThrust { thrust }.into());
        }

        let fuel_mass_rate = combustor::fuel_mass_rate(
            air_mass_rate,
            combustor.heat_addition,
            inputs.fuel,
            valid.combustion_efficiency,
        );
        let specific_fuel_consumption: SpecificFuelConsumption = fuel_mass_rate / thrust;

        let thermal = 1.0 - ambient.temperature.ratio_to(compressor.outlet.temperature);
        let velocity_ratio = v.get::<meter_per_second>() / u.get::<meter_per_second>();
        let propulsive = 2.0 / (1.0 + velocity_ratio);
        let overall = thermal * propulsive;

        let stages = CycleStages {
            ambient: StageState::from_static(Station::Ambient, freestream),
            inlet: StageState::from_static(Station::Inlet, inlet),
            diffuser: StageState::from_stagnation(Station::Diffuser, diffuser.outlet),
            compressor: StageState::from_stagnation(Station::Compressor, compressor.outlet),
            combustor: StageState::from_stagnation(Station::Combustor, combustor.outlet),
            turbine: StageState::from_stagnation(Station::Turbine, turbine.outlet),
            nozzle: StageState::from_static(Station::Nozzle, nozzle.exit),
        };

        let metrics = PerformanceMetrics {
            exhaust_velocity: v,
            thrust,
            fuel_mass_rate,
            specific_fuel_consumption,
            thermal_efficiency: Ratio::new::<ratio>(thermal),
            propulsive_efficiency: Ratio::new::<ratio>(propulsive),
            overall_efficiency: Ratio::new::<ratio>(overall),
        };

        let diagnostics = CycleDiagnostics {
            ambient_density: ambient.density,
            air_mass_rate,
            ram_temperature_rise: diffuser.ram_rise,
            ideal_compressor_exit_temperature: compressor.ideal_outlet_temperature,
            ideal_turbine_exit_temperature: turbine.ideal_outlet_temperature,
            compressor_work: compressor.work,
            turbine_work: turbine.work,
            heat_addition: combustor.heat_addition,
        };

        Ok(CycleResult {
            stages,
            metrics,
            diagnostics,
        })
    }
}

/// Evaluates the cycle with the default gas and atmosphere.
///
/// # Errors
///
/// See [`CycleEvaluator::evaluate`].
pub fn evaluate(inputs: &EngineInputs) -> Result<CycleResult, CycleError> {
    CycleEvaluator::default().evaluate(inputs)
}
