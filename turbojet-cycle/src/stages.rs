use std::fmt;

use serde::Serialize;
use turbojet_components::{StagnationState, StaticState};
use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// An engine station, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    /// Undisturbed freestream (0).
    Ambient,
    /// Inlet duct exit (1).
    Inlet,
    /// Diffuser exit, compressor face (2).
    Diffuser,
    /// Compressor exit, combustor entry (3).
    Compressor,
    /// Combustor exit, turbine inlet (4).
    Combustor,
    /// Turbine exit, nozzle entry (5).
    Turbine,
    /// Nozzle exit (e).
    Nozzle,
}

impl Station {
    /// Every station, in flow order.
    pub const ALL: [Station; 7] = [
        Station::Ambient,
        Station::Inlet,
        Station::Diffuser,
        Station::Compressor,
        Station::Combustor,
        Station::Turbine,
        Station::Nozzle,
    ];

    /// Returns a short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Station::Ambient => "ambient",
            Station::Inlet => "inlet",
            Station::Diffuser => "diffuser",
            Station::Compressor => "compressor",
            Station::Combustor => "combustor",
            Station::Turbine => "turbine",
            Station::Nozzle => "nozzle exit",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a station's values are static or stagnation quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Static,
    Stagnation,
}

/// Temperature and pressure at one engine station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageState {
    pub station: Station,
    pub condition: Condition,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

impl StageState {
    pub(crate) fn from_static(station: Station, state: StaticState) -> Self {
        Self {
            station,
            condition: Condition::Static,
            temperature: state.temperature,
            pressure: state.pressure,
        }
    }

    pub(crate) fn from_stagnation(station: Station, state: StagnationState) -> Self {
        Self {
            station,
            condition: Condition::Stagnation,
            temperature: state.temperature,
            pressure: state.pressure,
        }
    }
}

/// The state at every engine station of one evaluation.
///
/// Ambient, inlet, and nozzle exit hold static values; the stations between
/// the diffuser and the turbine hold stagnation values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleStages {
    pub ambient: StageState,
    pub inlet: StageState,
    pub diffuser: StageState,
    pub compressor: StageState,
    pub combustor: StageState,
    pub turbine: StageState,
    pub nozzle: StageState,
}

impl CycleStages {
    /// Returns the stations in flow order.
    #[must_use]
    pub fn sequence(&self) -> [StageState; 7] {
        [
            self.ambient,
            self.inlet,
            self.diffuser,
            self.compressor,
            self.combustor,
            self.turbine,
            self.nozzle,
        ]
    }

    /// Returns the temperature at each station, in flow order.
    #[must_use]
    pub fn temperatures(&self) -> [ThermodynamicTemperature; 7] {
        self.sequence().map(|stage| stage.temperature)
    }

    /// Returns the pressure at each station, in flow order.
    #[must_use]
    pub fn pressures(&self) -> [Pressure; 7] {
        self.sequence().map(|stage| stage.pressure)
    }
}
