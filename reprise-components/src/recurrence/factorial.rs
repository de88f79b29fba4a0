use thiserror::Error;

use reprise_core::{Cache, EvalError, Memoizer, Recurrence, Recurse};

/// The factorial recurrence: `f(n) = n * f(n-1)`.
///
/// Base cases are not built in; evaluation must be given a cache populating
/// index 0, which [`Factorial::memoized`] does. Multiplication is checked,
/// so an index whose factorial exceeds `u64::MAX` fails instead of wrapping.
///
/// # Example
///
/// ```
/// use reprise_components::Factorial;
///
/// let mut factorial = Factorial::memoized();
/// assert_eq!(factorial.eval(4).unwrap(), 24);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Factorial;

/// Error returned when a factorial does not fit in a `u64`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("factorial of {index} does not fit in a u64")]
pub struct FactorialOverflowError {
    /// The smallest index whose factorial overflowed.
    pub index: u64,
}

impl Factorial {
    /// Returns a memoizer seeded with the base case `{0: 1}`.
    #[must_use]
    pub fn memoized() -> Memoizer<Self> {
        Memoizer::new(Cache::seeded([1]), Self)
    }
}

impl Recurrence for Factorial {
    type Value = u64;
    type Error = FactorialOverflowError;

    fn apply(
        &self,
        recurse: &mut Recurse<'_, u64, FactorialOverflowError>,
        n: u64,
    ) -> Result<u64, EvalError<FactorialOverflowError>> {
        let previous = recurse.at(n - 1)?;
        n.checked_mul(previous)
            .ok_or(EvalError::Formula(FactorialOverflowError { index: n }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_factorial_is_twenty_four() {
        let mut factorial = Factorial::memoized();

        assert_eq!(factorial.eval(4).unwrap(), 24);
    }

    #[test]
    fn twenty_factorial_fits_in_a_u64() {
        let mut factorial = Factorial::memoized();

        assert_eq!(factorial.eval(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn twenty_one_factorial_overflows() {
        let mut factorial = Factorial::memoized();

        let result = factorial.eval(21);

        assert!(matches!(
            result,
            Err(EvalError::Formula(FactorialOverflowError { index: 21 }))
        ));
        // The failed index is not stored, but everything below it is.
        assert!(!factorial.cache().contains(21));
        assert!(factorial.cache().contains(20));
    }
}
