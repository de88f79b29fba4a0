use crate::error::EvalError;

/// A rule defining the value at an index in terms of values at smaller indices.
///
/// Implementations must be deterministic and must not cache their own
/// results; caching is the sole responsibility of the evaluator applying the
/// recurrence (see [`Memoizer`](crate::Memoizer)). Nested lookups go through
/// the [`Recurse`] handle, which routes every call back into the evaluation
/// that invoked the formula.
///
/// Use [`std::convert::Infallible`] as the `Error` type for formulas that
/// always succeed.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use reprise_core::{Cache, EvalError, Memoizer, Recurrence, Recurse};
///
/// /// t(n) = n + t(n-1), the triangular numbers.
/// struct Triangular;
///
/// impl Recurrence for Triangular {
///     type Value = u64;
///     type Error = Infallible;
///
///     fn apply(
///         &self,
///         recurse: &mut Recurse<'_, u64, Infallible>,
///         n: u64,
///     ) -> Result<u64, EvalError<Infallible>> {
///         Ok(n + recurse.at(n - 1)?)
///     }
/// }
///
/// let mut memoizer = Memoizer::new(Cache::seeded([0]), Triangular);
/// assert_eq!(memoizer.eval(4).unwrap(), 10);
/// ```
pub trait Recurrence {
    /// The value type produced at each index.
    type Value: Clone;

    /// The error type for formulas that can fail on their own.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the value at `n`, looking up smaller indices via `recurse`.
    ///
    /// # Errors
    ///
    /// Each recurrence defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain. Errors from nested
    /// lookups propagate unchanged through `?`.
    fn apply(
        &self,
        recurse: &mut Recurse<'_, Self::Value, Self::Error>,
        n: u64,
    ) -> Result<Self::Value, EvalError<Self::Error>>;
}

/// Re-enters the active evaluation at another index.
///
/// A `Recurse` handle is only ever constructed by an evaluator and handed to
/// [`Recurrence::apply`]; all lookups made through it share the evaluation
/// that produced it, so a memoized evaluation resolves overlapping
/// subproblems exactly once.
pub struct Recurse<'a, V, E> {
    evaluator: &'a mut dyn Evaluate<V, E>,
}

impl<'a, V, E> Recurse<'a, V, E> {
    pub(crate) fn new(evaluator: &'a mut dyn Evaluate<V, E>) -> Self {
        Self { evaluator }
    }

    /// Evaluates the recurrence at `n` within the current evaluation.
    ///
    /// # Errors
    ///
    /// Propagates any [`EvalError`] produced by the nested evaluation.
    pub fn at(&mut self, n: u64) -> Result<V, EvalError<E>> {
        self.evaluator.evaluate(n)
    }
}

/// An evaluation strategy a [`Recurse`] handle can re-enter.
pub(crate) trait Evaluate<V, E> {
    fn evaluate(&mut self, n: u64) -> Result<V, EvalError<E>>;
}
