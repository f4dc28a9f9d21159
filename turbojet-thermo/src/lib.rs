//! Thermodynamic property models for turbojet cycle analysis.
//!
//! - [`gas`]: calorically perfect gas with isentropic relations
//! - [`atmosphere`]: linear-lapse troposphere for ambient conditions
//! - [`fuel`]: the closed catalog of jet fuels and their heating values
//! - [`units`]: quantity aliases and temperature helpers missing from `uom`

pub mod atmosphere;
pub mod fuel;
pub mod gas;
pub mod units;

pub use atmosphere::{AmbientConditions, AtmosphereError, Troposphere};
pub use fuel::{Fuel, ParseFuelError};
pub use gas::{GasModelError, PerfectGas};
