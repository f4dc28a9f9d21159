//! Component models for a single-spool turbojet.
//!
//! Each engine stage is a pure function from the state entering the stage to
//! the state leaving it. Stages are evaluated in flow order:
//!
//! | stage | station change | module |
//! |---|---|---|
//! | inlet | 0 → 1 | [`inlet`] |
//! | diffuser | 1 → 2 | [`diffuser`] |
//! | compressor | 2 → 3 | [`turbomachinery::compressor`] |
//! | combustor | 3 → 4 | [`combustor`] |
//! | turbine | 4 → 5 | [`turbomachinery::turbine`] |
//! | nozzle | 5 → e | [`nozzle`] |
//!
//! Static and stagnation conditions are distinct types, so a stage cannot be
//! handed the wrong kind of state.

pub mod combustor;
pub mod diffuser;
pub mod inlet;
pub mod nozzle;
mod state;
pub mod turbomachinery;

pub use state::{StagnationState, StaticState};

use turbojet_core::constraint::{Constrained, UnitIntervalLowerOpen};
use uom::si::f64::Ratio;

/// A component efficiency in `(0, 1]`.
pub type Efficiency = Constrained<Ratio, UnitIntervalLowerOpen>;
