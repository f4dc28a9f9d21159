//! Steady-state cycle evaluation of an ideal single-spool turbojet.
//!
//! [`evaluate`] takes a flat [`EngineInputs`] record, propagates stagnation
//! and static temperature and pressure through the engine stations, and
//! derives thrust, fuel consumption, and efficiencies:
//!
//! ```
//! use turbojet_cycle::{EngineInputs, evaluate};
//! use turbojet_thermo::Fuel;
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Length, Ratio, ThermodynamicTemperature, Velocity},
//!     force::newton,
//!     length::meter,
//!     ratio::{percent, ratio},
//!     thermodynamic_temperature::kelvin,
//!     velocity::kilometer_per_hour,
//! };
//!
//! let inputs = EngineInputs {
//!     airspeed: Velocity::new::<kilometer_per_hour>(800.0),
//!     altitude: Length::new::<meter>(10_000.0),
//!     inlet_area: Area::new::<square_meter>(0.3),
//!     compressor_pressure_ratio: 12.0,
//!     turbine_inlet_temperature: ThermodynamicTemperature::new::<kelvin>(1400.0),
//!     compressor_efficiency: Ratio::new::<ratio>(0.85),
//!     turbine_efficiency: Ratio::new::<ratio>(0.9),
//!     combustion_efficiency: Ratio::new::<ratio>(0.98),
//!     fuel: Fuel::JetA,
//! };
//!
//! let result = evaluate(&inputs).unwrap();
//! assert!(result.metrics.thrust.get::<newton>() > 0.0);
//! assert!(result.metrics.overall_efficiency.get::<percent>() < 100.0);
//! assert_eq!(result.stages.sequence().len(), 7);
//! ```
//!
//! Every evaluation is independent: nothing is cached between calls, and the
//! same inputs always produce the same result.

pub mod config;
mod error;
mod evaluate;
mod inputs;
mod metrics;
pub mod report;
mod stages;

pub use error::{CycleError, DomainError};
pub use evaluate::{CycleDiagnostics, CycleEvaluator, CycleResult, evaluate};
pub use inputs::EngineInputs;
pub use metrics::PerformanceMetrics;
pub use stages::{Condition, CycleStages, StageState, Station};
