use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// # Examples
///
/// ```
/// use twine_geothermal::support::constraint::{Constraint, NonNegative};
///
/// assert!(NonNegative::new(2.5).is_ok());
/// assert!(NonNegative::new(0.0).is_ok());
///
/// // Classify without wrapping:
/// assert!(NonNegative::check(&-225.0).is_err());
/// assert!(NonNegative::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
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

    use uom::si::{f64::Length, length::kilometer};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(2700.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::check(&-0.5), Err(ConstraintError::Negative));
        assert_eq!(
            NonNegative::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn lengths() {
        let thickness = Length::new::<kilometer>(2.5);
        assert!(NonNegative::new(thickness).is_ok());

        let thickness = Length::new::<kilometer>(-1.0);
        assert!(NonNegative::new(thickness).is_err());
    }
}
