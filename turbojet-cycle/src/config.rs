//! Engine cases in user units, loadable from TOML.
//!
//! An [`EngineCase`] mirrors an input form: airspeed in km/h, altitude in
//! meters, temperatures in kelvin, efficiencies in percent, and the fuel by
//! name. Converting it into [`EngineInputs`] is the only place where percent
//! becomes a fraction.
//!
//! ```
//! use turbojet_cycle::{EngineInputs, config::EngineCase};
//!
//! let case = EngineCase::from_toml_str(
//!     r#"
//!     airspeed_kmh = 800.0
//!     altitude_m = 10000.0
//!     inlet_area_m2 = 0.3
//!     compressor_pressure_ratio = 12.0
//!     turbine_inlet_temperature_k = 1400.0
//!     compressor_efficiency_percent = 85.0
//!     turbine_efficiency_percent = 90.0
//!     combustion_efficiency_percent = 98.0
//!     fuel = "Jet-A"
//!     "#,
//! )
//! .unwrap();
//!
//! let inputs = EngineInputs::from(case);
//! assert_eq!(inputs.compressor_pressure_ratio, 12.0);
//! ```

use serde::Deserialize;
use thiserror::Error;
use turbojet_thermo::Fuel;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio, ThermodynamicTemperature, Velocity},
    length::meter,
    ratio::percent,
    thermodynamic_temperature::kelvin,
    velocity::kilometer_per_hour,
};

use crate::EngineInputs;

/// Errors that may occur when loading an engine case.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is malformed, is missing a field, has an unknown key,
    /// or names a fuel outside the catalog.
    #[error("failed to parse engine case: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One engine case, as entered on an input form.
///
/// Every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineCase {
    pub airspeed_kmh: f64,
    pub altitude_m: f64,
    pub inlet_area_m2: f64,
    pub compressor_pressure_ratio: f64,
    pub turbine_inlet_temperature_k: f64,
    pub compressor_efficiency_percent: f64,
    pub turbine_efficiency_percent: f64,
    pub combustion_efficiency_percent: f64,
    /// Fuel name or form label, e.g. `"JP-8"` or `"Jet-A (civilian standard)"`.
    pub fuel: Fuel,
}

impl EngineCase {
    /// Parses a case from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed, is missing
    /// a field, has a key that is not a case field, or names an unknown fuel.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Converts user units into typed quantities.
///
/// Range checks are left to the evaluator so that every input error is
/// reported the same way regardless of where the inputs came from.
impl From<EngineCase> for EngineInputs {
    fn from(case: EngineCase) -> Self {
        EngineInputs {
            airspeed: Velocity::new::<kilometer_per_hour>(case.airspeed_kmh),
            altitude: Length::new::<meter>(case.altitude_m),
            inlet_area: Area::new::<square_meter>(case.inlet_area_m2),
            compressor_pressure_ratio: case.compressor_pressure_ratio,
            turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(
                case.turbine_inlet_temperature_k,
            ),
            compressor_efficiency: Ratio::new::<percent>(case.compressor_efficiency_percent),
            turbine_efficiency: Ratio::new::<percent>(case.turbine_efficiency_percent),
            combustion_efficiency: Ratio::new::<percent>(case.combustion_efficiency_percent),
            fuel: case.fuel,
        }
    }
}
