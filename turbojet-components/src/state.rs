use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Static (in-flow) temperature and pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}

/// Stagnation (total) temperature and pressure.
///
/// These are the values the flow would reach if brought to rest
/// isentropically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationState {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
}
