use turbojet_components::{Efficiency, turbomachinery::compressor::PressureRatio};
use turbojet_core::constraint::{
    AboveOne, Constrained, ConstraintError, StrictlyPositive, UnitIntervalLowerOpen,
};
use turbojet_thermo::Fuel;
use uom::si::f64::{Area, Length, Ratio, ThermodynamicTemperature, Velocity};

use crate::{CycleError, DomainError};

/// Operating and design inputs for one cycle evaluation.
///
/// Values are plain quantities, as supplied by an input form or a case file.
/// They are checked when the cycle is evaluated:
///
/// | field | constraint |
/// |---|---|
/// | `airspeed` | > 0 |
/// | `altitude` | keeps the standard atmosphere above absolute zero |
/// | `inlet_area` | > 0 |
/// | `compressor_pressure_ratio` | > 1 |
/// | `turbine_inlet_temperature` | > ambient static temperature |
/// | efficiencies | in `(0, 1]` |
///
/// Airspeed, altitude, inlet area, pressure ratio, and turbine inlet
/// temperature must also be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineInputs {
    pub airspeed: Velocity,
    pub altitude: Length,
    pub inlet_area: Area,
    pub compressor_pressure_ratio: f64,
    pub turbine_inlet_temperature: ThermodynamicTemperature,
    pub compressor_efficiency: Ratio,
    pub turbine_efficiency: Ratio,
    pub combustion_efficiency: Ratio,
    pub fuel: Fuel,
}

/// Inputs whose range constraints have been checked.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValidatedInputs {
    pub(crate) airspeed: Constrained<Velocity, StrictlyPositive>,
    pub(crate) inlet_area: Constrained<Area, StrictlyPositive>,
    pub(crate) pressure_ratio: PressureRatio,
    pub(crate) compressor_efficiency: Efficiency,
    pub(crate) turbine_efficiency: Efficiency,
    pub(crate) combustion_efficiency: Efficiency,
}

impl EngineInputs {
    /// Checks every constraint that does not depend on the atmosphere.
    ///
    /// A zero airspeed is reported as [`DomainError::ZeroAirspeed`] because the
    /// model itself, not the input form, is what breaks down in the static case.
    pub(crate) fn validate(&self) -> Result<ValidatedInputs, CycleError> {
        if self.airspeed.value == 0.0 {
            return Err(DomainError::ZeroAirspeed.into());
        }

        ensure_finite("airspeed", self.airspeed.value)?;
        ensure_finite("altitude", self.altitude.value)?;
        ensure_finite("inlet_area", self.inlet_area.value)?;
        ensure_finite("compressor_pressure_ratio", self.compressor_pressure_ratio)?;
        ensure_finite(
            "turbine_inlet_temperature",
            self.turbine_inlet_temperature.value,
        )?;

        Ok(ValidatedInputs {
            airspeed: StrictlyPositive::new(self.airspeed).map_err(invalid("airspeed"))?,
            inlet_area: StrictlyPositive::new(self.inlet_area).map_err(invalid("inlet_area"))?,
            pressure_ratio: AboveOne::new(self.compressor_pressure_ratio)
                .map_err(invalid("compressor_pressure_ratio"))?,
            compressor_efficiency: UnitIntervalLowerOpen::new(self.compressor_efficiency)
                .map_err(invalid("compressor_efficiency"))?,
            turbine_efficiency: UnitIntervalLowerOpen::new(self.turbine_efficiency)
                .map_err(invalid("turbine_efficiency"))?,
            combustion_efficiency: UnitIntervalLowerOpen::new(self.combustion_efficiency)
                .map_err(invalid("combustion_efficiency"))?,
        })
    }
}

/// Rejects NaN and infinite raw SI values.
fn ensure_finite(field: &'static str, value: f64) -> Result<(), CycleError> {
    if value.is_nan() {
        Err(invalid(field)(ConstraintError::NotANumber))
    } else if value.is_infinite() {
        Err(invalid(field)(ConstraintError::NotFinite))
    } else {
        Ok(())
    }
}

/// Returns a closure that tags a constraint violation with the input it came from.
pub(crate) fn invalid(field: &'static str) -> impl FnOnce(ConstraintError) -> CycleError {
    move |source| CycleError::InvalidInput { field, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::square_meter, length::meter, ratio::ratio, thermodynamic_temperature::kelvin,
        velocity::kilometer_per_hour,
    };

    fn inputs() -> EngineInputs {
        EngineInputs {
            airspeed: Velocity::new::<kilometer_per_hour>(800.0),
            altitude: Length::new::<meter>(10_000.0),
            inlet_area: Area::new::<square_meter>(0.3),
            compressor_pressure_ratio: 12.0,
            turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(1400.0),
            compressor_efficiency: Ratio::new::<ratio>(0.85),
            turbine_efficiency: Ratio::new::<ratio>(0.9),
            combustion_efficiency: Ratio::new::<ratio>(0.98),
            fuel: Fuel::JetA,
        }
    }

    fn rejected_field(inputs: &EngineInputs) -> (&'static str, ConstraintError) {
        match inputs.validate() {
            Err(CycleError::InvalidInput { field, source }) => (field, source),
            other => panic!("expected an input error, got {other:?}"),
        }
    }

    #[test]
    fn valid_inputs_pass() {
        assert!(inputs().validate().is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let cases = [
            (
                "airspeed",
                EngineInputs {
                    airspeed: Velocity::new::<kilometer_per_hour>(f64::INFINITY),
                    ..inputs()
                },
            ),
            (
                "altitude",
                EngineInputs {
                    altitude: Length::new::<meter>(f64::NEG_INFINITY),
                    ..inputs()
                },
            ),
            (
                "compressor_pressure_ratio",
                EngineInputs {
                    compressor_pressure_ratio: f64::INFINITY,
                    ..inputs()
                },
            ),
            (
                "turbine_inlet_temperature",
                EngineInputs {
                    turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(
                        f64::INFINITY,
                    ),
                    ..inputs()
                },
            ),
        ];

        for (field, inputs) in cases {
            assert_eq!(rejected_field(&inputs), (field, ConstraintError::NotFinite));
        }

        let nan_altitude = EngineInputs {
            altitude: Length::new::<meter>(f64::NAN),
            ..inputs()
        };
        assert_eq!(
            rejected_field(&nan_altitude),
            ("altitude", ConstraintError::NotANumber)
        );
    }

    #[test]
    fn zero_airspeed_is_a_domain_error() {
        let inputs = EngineInputs {
            airspeed: Velocity::new::<kilometer_per_hour>(0.0),
            ..inputs()
        };
        assert!(matches!(
            inputs.validate(),
            Err(CycleError::Domain(DomainError::ZeroAirspeed))
        ));
    }

    #[test]
    fn out_of_range_values_name_their_field() {
        let negative_speed = EngineInputs {
            airspeed: Velocity::new::<kilometer_per_hour>(-10.0),
            ..inputs()
        };
        assert_eq!(
            rejected_field(&negative_speed),
            ("airspeed", ConstraintError::Negative)
        );

        let no_area = EngineInputs {
            inlet_area: Area::new::<square_meter>(0.0),
            ..inputs()
        };
        assert_eq!(rejected_field(&no_area), ("inlet_area", ConstraintError::Zero));

        let no_compression = EngineInputs {
            compressor_pressure_ratio: 1.0,
            ..inputs()
        };
        assert_eq!(
            rejected_field(&no_compression),
            ("compressor_pressure_ratio", ConstraintError::BelowMinimum)
        );

        // Efficiencies are fractions, so 85 (percent) is out of range.
        let percent_not_fraction = EngineInputs {
            compressor_efficiency: Ratio::new::<ratio>(85.0),
            ..inputs()
        };
        assert_eq!(
            rejected_field(&percent_not_fraction),
            ("compressor_efficiency", ConstraintError::AboveMaximum)
        );

        let zero_turbine = EngineInputs {
            turbine_efficiency: Ratio::new::<ratio>(0.0),
            ..inputs()
        };
        assert_eq!(
            rejected_field(&zero_turbine),
            ("turbine_efficiency", ConstraintError::BelowMinimum)
        );

        let endless_area = EngineInputs {
            inlet_area: Area::new::<square_meter>(f64::INFINITY),
            ..inputs()
        };
        assert_eq!(
            rejected_field(&endless_area),
            ("inlet_area", ConstraintError::NotFinite)
        );

        let nan_burner = EngineInputs {
            combustion_efficiency: Ratio::new::<ratio>(f64::NAN),
            ..inputs()
        };
        assert_eq!(
            rejected_field(&nan_burner),
            ("combustion_efficiency", ConstraintError::NotANumber)
        );
    }
}
