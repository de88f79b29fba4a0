use std::convert::Infallible;

use reprise_core::{Cache, EvalError, Memoizer, Recurrence, Recurse};

/// The Fibonacci recurrence: `f(n) = f(n-1) + f(n-2)`.
///
/// Base cases are not built in; evaluation must be given a cache populating
/// indices 0 and 1, which [`Fibonacci::memoized`] does.
///
/// # Example
///
/// ```
/// use reprise_components::Fibonacci;
///
/// let mut fibonacci = Fibonacci::memoized();
/// assert_eq!(fibonacci.eval(10).unwrap(), 55);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fibonacci;

impl Fibonacci {
    /// Returns a memoizer seeded with the base cases `{0: 0, 1: 1}`.
    #[must_use]
    pub fn memoized() -> Memoizer<Self> {
        Memoizer::new(Cache::seeded([0, 1]), Self)
    }
}

impl Recurrence for Fibonacci {
    type Value = u64;
    type Error = Infallible;

    fn apply(
        &self,
        recurse: &mut Recurse<'_, u64, Infallible>,
        n: u64,
    ) -> Result<u64, EvalError<Infallible>> {
        Ok(recurse.at(n - 1)? + recurse.at(n - 2)?)
    }
}
