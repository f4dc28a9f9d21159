use thiserror::Error;
use turbojet_components::{
    nozzle::NozzleError,
    turbomachinery::{compressor::CompressionError, turbine::TurbineError},
};
use turbojet_core::constraint::ConstraintError;
use turbojet_thermo::AtmosphereError;
use uom::si::f64::{Force, ThermodynamicTemperature};

/// Errors that may occur when evaluating the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CycleError {
    /// An input is outside its allowed range.
    #[error("invalid input `{field}`: {source}")]
    InvalidInput {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The cycle produced a physically invalid intermediate result.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A physically invalid intermediate result.
///
/// Any of these aborts the evaluation; no partial result is returned.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The airspeed is zero, so propulsive efficiency is undefined.
    #[error("zero airspeed: propulsive efficiency is undefined for a static engine")]
    ZeroAirspeed,

    /// The nozzle would have to heat the flow to expand it to ambient pressure.
    #[error("negative enthalpy drop across nozzle (Tt5={stagnation:?}, Te={exit:?})")]
    NegativeEnthalpyDrop {
        stagnation: ThermodynamicTemperature,
        exit: ThermodynamicTemperature,
    },

    /// The exhaust is not faster than the freestream.
    #[error("non-positive thrust ({thrust:?})")]
    NonPositiveThrust { thrust: Force },

    /// The atmosphere model has no valid state at the requested altitude.
    #[error("non-physical ambient conditions: {0}")]
    NonPhysicalAmbient(#[source] AtmosphereError),

    /// The compressor model produced a non-physical result.
    #[error("compressor: {0}")]
    Compressor(#[source] CompressionError),

    /// The turbine cannot supply the compressor work.
    #[error("turbine: {0}")]
    Turbine(#[source] TurbineError),
}

impl From<NozzleError> for DomainError {
    fn from(err: NozzleError) -> Self {
        match err {
            NozzleError::NegativeEnthalpyDrop { stagnation, exit } => {
                DomainError::NegativeEnthalpyDrop { stagnation, exit }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    use uom::si::{f64::Length, length::meter, thermodynamic_temperature::kelvin};

    #[test]
    fn messages_name_the_violated_condition() {
        assert!(DomainError::ZeroAirspeed.to_string().contains("zero airspeed"));

        let err: CycleError = DomainError::from(NozzleError::NegativeEnthalpyDrop {
            stagnation: ThermodynamicTemperature::new::<kelvin>(300.0),
            exit: ThermodynamicTemperature::new::<kelvin>(301.0),
        })
        .into();
        assert!(err.to_string().contains("negative enthalpy drop"));
    }

    #[test]
    fn wrapped_component_errors_show_their_cause() {
        let turbine: CycleError =
            DomainError::Turbine(TurbineError::NonPositiveExitTemperature {
                temperature_kelvin: -12.0,
            })
            .into();
        let message = turbine.to_string();
        assert!(message.starts_with("turbine: "));
        assert!(message.contains("-12"), "{message}");

        let ambient = DomainError::NonPhysicalAmbient(AtmosphereError::NonPositiveTemperature {
            altitude: Length::new::<meter>(60_000.0),
            temperature_kelvin: -101.85,
        });
        assert!(ambient.to_string().contains("-101.85"));
    }

    #[test]
    fn input_errors_chain_their_constraint() {
        let err = CycleError::InvalidInput {
            field: "inlet_area",
            source: ConstraintError::Zero,
        };
        assert!(err.to_string().contains("inlet_area"));
        assert_eq!(
            err.source().map(ToString::to_string),
            Some(ConstraintError::Zero.to_string())
        );
    }
}
