//! Inlet duct model.

use crate::StaticState;

/// Passes the freestream through a lossless inlet duct.
///
/// The static temperature and pressure leaving the inlet equal those of the
/// undisturbed air.
#[must_use]
pub fn inlet(freestream: StaticState) -> StaticState {
    freestream
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Pressure, ThermodynamicTemperature},
        pressure::kilopascal,
        thermodynamic_temperature::kelvin,
    };

    #[test]
    fn lossless_duct_is_identity() {
        let freestream = StaticState {
            temperature: ThermodynamicTemperature::new::<kelvin>(223.15),
            pressure: Pressure::new::<kilopascal>(26.4),
        };
        assert_eq!(inlet(freestream), freestream);
    }
}
