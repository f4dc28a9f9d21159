//! Specific shaft work exchanged by the compressor and the turbine.
//!
//! Both are stored as non-negative magnitudes; the direction of energy flow
//! is carried by the type rather than by a sign.

use turbojet_core::constraint::{ConstraintError, NonNegative};
use turbojet_thermo::units::SpecificEnthalpy;
use uom::si::f64::{MassRate, Power};

macro_rules! shaft_work {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(SpecificEnthalpy);

        impl $name {
            /// Wraps a specific work magnitude.
            ///
            /// # Errors
            ///
            /// Returns a [`ConstraintError`] if `work` is negative or NaN.
            pub fn new(work: SpecificEnthalpy) -> Result<Self, ConstraintError> {
                NonNegative::new(work).map(|work| Self(work.into_inner()))
            }

            /// Returns the work per unit mass of air.
            #[must_use]
            pub fn quantity(&self) -> SpecificEnthalpy {
                self.0
            }

            /// Returns the shaft power for a given air mass flow.
            #[must_use]
            pub fn power(&self, air_mass_rate: MassRate) -> Power {
                air_mass_rate * self.0
            }
        }
    };
}

shaft_work! {
    /// Specific work absorbed by a compressor, `c_p·(Tt3 − Tt2)`.
    CompressionWork
}

shaft_work! {
    /// Specific work delivered by a turbine, `c_p·(Tt4 − Tt5)`.
    ExpansionWork
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, mass_rate::kilogram_per_second,
        power::kilowatt,
    };

    fn kj_per_kg(value: f64) -> SpecificEnthalpy {
        SpecificEnthalpy::new::<kilojoule_per_kilogram>(value)
    }

    #[test]
    fn work_must_be_a_non_negative_number() {
        assert_eq!(
            CompressionWork::new(kj_per_kg(-1.0)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            ExpansionWork::new(kj_per_kg(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
        assert!(ExpansionWork::new(kj_per_kg(0.0)).is_ok());
    }

    #[test]
    fn power_scales_with_mass_flow() {
        let work = CompressionWork::new(kj_per_kg(250.0)).unwrap();
        let power = work.power(MassRate::new::<kilogram_per_second>(20.0));
        assert_relative_eq!(power.get::<kilowatt>(), 5000.0, max_relative = 1e-12);
    }

    #[test]
    fn works_compare_by_magnitude() {
        let small = ExpansionWork::new(kj_per_kg(100.0)).unwrap();
        let large = ExpansionWork::new(kj_per_kg(300.0)).unwrap();
        assert!(small < large);
    }
}
