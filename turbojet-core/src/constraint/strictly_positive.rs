use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Examples
///
/// ```
/// use turbojet_core::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{area::square_meter, f64::Area};
///
/// let area = StrictlyPositive::new(Area::new::<square_meter>(0.3)).unwrap();
/// assert_eq!(area.as_ref().get::<square_meter>(), 0.3);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Zero`] if the value is zero.
    /// - [`ConstraintError::Negative`] if the value is below zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
