use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value is strictly greater than one.
///
/// A compressor pressure ratio must satisfy this: a ratio of exactly one
/// does no compression, and below one the device would be an expander.
///
/// # Examples
///
/// ```
/// use turbojet_core::constraint::AboveOne;
///
/// let pr = AboveOne::new(12.0).unwrap();
/// assert_eq!(pr.into_inner(), 12.0);
///
/// assert!(AboveOne::new(1.0).is_err());
/// assert!(AboveOne::new(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveOne;

impl AboveOne {
    /// Constructs `Constrained<T, AboveOne>` if `value > 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, AboveOne>, ConstraintError> {
        Constrained::<T, AboveOne>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for AboveOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
