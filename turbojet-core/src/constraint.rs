//! Numeric constraints checked once, at construction.
//!
//! A [`Constrained<T, C>`] holds a value of `T` that has passed the check of
//! the marker type `C`. Engine inputs are converted into constrained values
//! before any stage runs, so a pressure ratio, an efficiency, or an inlet
//! area can be trusted by every function that receives it.
//!
//! | marker | accepts |
//! |---|---|
//! | [`NonNegative`] | `x ≥ 0` |
//! | [`StrictlyPositive`] | `x > 0` |
//! | [`UnitIntervalLowerOpen`] | `0 < x ≤ 1`, the domain of an efficiency |
//! | [`AboveOne`] | `x > 1`, the domain of a compression pressure ratio |
//!
//! NaN fails every check with [`ConstraintError::NotANumber`]. The markers
//! accept infinities; callers that need finite values report
//! [`ConstraintError::NotFinite`] themselves.

mod above_one;
mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use above_one::AboveOne;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalLowerOpen};

/// A check applied by [`Constrained::new`].
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns the reason `value` is rejected.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value of `T` known to satisfy `C`.
///
/// # Example
///
/// ```
/// use turbojet_core::constraint::{Constrained, StrictlyPositive};
///
/// let area = Constrained::<_, StrictlyPositive>::new(0.3).unwrap();
/// assert_eq!(area.into_inner(), 0.3);
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A custom constraint accepting only even integers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Even;

    impl Constraint<i32> for Even {
        fn check(value: &i32) -> Result<(), ConstraintError> {
            if value % 2 == 0 {
                Ok(())
            } else {
                Err(ConstraintError::AboveMaximum)
            }
        }
    }

    #[test]
    fn custom_constraints_plug_into_constrained() {
        let four = Constrained::<i32, Even>::new(4).unwrap();
        assert_eq!(four.into_inner(), 4);
        assert_eq!(
            Constrained::<i32, Even>::new(3),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn as_ref_exposes_inner_value() {
        let n = StrictlyPositive::new(2.5).unwrap();
        assert_eq!(n.as_ref(), &2.5);
    }
}
