use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for `x ≥ 0`.
///
/// Used for quantities that are magnitudes by construction, such as the
/// specific work of a compressor or a turbine.
///
/// ```
/// use turbojet_core::constraint::NonNegative;
/// use uom::si::{available_energy::kilojoule_per_kilogram, f64::AvailableEnergy};
///
/// let work = NonNegative::new(AvailableEnergy::new::<kilojoule_per_kilogram>(250.0)).unwrap();
/// assert_eq!(work.as_ref().get::<kilojoule_per_kilogram>(), 250.0);
///
/// assert!(NonNegative::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if `value ≥ 0`.
    ///
    /// # Errors
    ///
    /// Fails with [`ConstraintError::Negative`] or [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Velocity, velocity::meter_per_second};

    #[test]
    fn zero_is_allowed() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(Velocity::new::<meter_per_second>(0.0)).is_ok());
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        assert_eq!(NonNegative::new(-0.1), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert_eq!(
            NonNegative::new(Velocity::new::<meter_per_second>(-12.0)),
            Err(ConstraintError::Negative)
        );
    }
}
