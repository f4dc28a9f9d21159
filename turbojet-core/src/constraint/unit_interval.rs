use std::{cmp::Ordering, marker::PhantomData};

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Values with a zero and a one to bound an interval.
///
/// Implemented for `f64` and `uom::si::f64::Ratio`.
pub trait UnitBounds: PartialOrd + Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }

    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker for `0 < x ≤ 1`.
///
/// This is the domain of a component efficiency: one is a perfect component,
/// and zero would leave efficiency-scaled temperature changes undefined.
///
/// ```
/// use turbojet_core::constraint::UnitIntervalLowerOpen;
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let eta = UnitIntervalLowerOpen::new(Ratio::new::<percent>(90.0)).unwrap();
/// assert!((eta.into_inner().get::<ratio>() - 0.9).abs() < 1e-15);
///
/// assert!(UnitIntervalLowerOpen::new(0.0).is_err());
/// assert!(UnitIntervalLowerOpen::new(85.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs `Constrained<T, UnitIntervalLowerOpen>` if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if `value ≤ 0`.
    /// - [`ConstraintError::AboveMaximum`] if `value > 1`.
    /// - [`ConstraintError::NotANumber`] if `value` is NaN.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::new(value)
    }

    /// Returns one, the efficiency of an ideal component.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitIntervalLowerOpen> {
        Constrained {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
