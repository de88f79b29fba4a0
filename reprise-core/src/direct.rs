//! Direct, uncached recurrence evaluation.
//!
//! Recomputes every non-base index on every visit, so overlapping
//! subproblems make it exponential for Fibonacci-style recurrences. It
//! exists to cross-check memoized results, not to be fast.

use crate::{
    cache::Cache,
    error::EvalResult,
    recurrence::{Evaluate, Recurrence, Recurse},
};

/// Evaluates `formula` at `n` without memoization.
///
/// Base-case lookups are served from `base_cases`; every other index is
/// recomputed on every visit and nothing is stored.
///
/// # Errors
///
/// Returns [`EvalError::Formula`](crate::EvalError::Formula) if the formula
/// fails.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use reprise_core::{direct, Cache, EvalError, Recurrence, Recurse};
///
/// struct Doubling;
///
/// impl Recurrence for Doubling {
///     type Value = u64;
///     type Error = Infallible;
///
///     fn apply(
///         &self,
///         recurse: &mut Recurse<'_, u64, Infallible>,
///         n: u64,
///     ) -> Result<u64, EvalError<Infallible>> {
///         Ok(2 * recurse.at(n - 1)?)
///     }
/// }
///
/// let base = Cache::seeded([1]);
/// assert_eq!(direct::evaluate(&Doubling, &base, 6).unwrap(), 64);
/// ```
pub fn evaluate<F>(formula: &F, base_cases: &Cache<F::Value>, n: u64) -> EvalResult<F>
where
    F: Recurrence,
{
    let mut evaluation = DirectEvaluation {
        formula,
        base_cases,
    };
    evaluation.evaluate(n)
}

struct DirectEvaluation<'a, F: Recurrence> {
    formula: &'a F,
    base_cases: &'a Cache<F::Value>,
}

impl<F: Recurrence> Evaluate<F::Value, F::Error> for DirectEvaluation<'_, F> {
    fn evaluate(&mut self, n: u64) -> EvalResult<F> {
        if let Some(value) = self.base_cases.get(n) {
            return Ok(value.clone());
        }

        let formula = self.formula;
        formula.apply(&mut Recurse::new(self), n)
    }
}
