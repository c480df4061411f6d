use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a percentage lies in `0 ≤ x ≤ 100`.
///
/// Recovery and capacity factors are entered as percentages, so this is the
/// percent-scaled sibling of [`UnitInterval`](super::UnitInterval).
///
/// # Examples
///
/// ```
/// use twine_geothermal::support::constraint::{Constraint, ConstraintError, Percentage};
///
/// assert!(Percentage::new(92.7).is_ok());
/// assert_eq!(Percentage::check(&100.5), Err(ConstraintError::AboveMaximum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percentage;

impl Percentage {
    const MAX: f64 = 100.0;

    /// Constructs `Constrained<f64, Percentage>` if 0 ≤ value ≤ 100.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one hundred.
    /// - [`ConstraintError::NotANumber`] if the value is NaN.
    pub fn new(value: f64) -> Result<Constrained<f64, Percentage>, ConstraintError> {
        Constrained::<f64, Percentage>::new(value)
    }
}

impl Constraint<f64> for Percentage {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&Self::MAX)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_valid() {
        assert!(Percentage::new(0.0).is_ok());
        assert!(Percentage::new(100.0).is_ok());
        assert!(Percentage::new(11.0).is_ok());
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Percentage::check(&-1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(
            Percentage::check(&100.000_1),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            Percentage::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
