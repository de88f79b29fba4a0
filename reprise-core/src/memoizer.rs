use crate::{
    cache::Cache,
    error::{EvalError, EvalResult},
    recurrence::{Evaluate, Recurrence, Recurse},
};

/// Binds a [`Cache`] to a [`Recurrence`], evaluating indices on demand.
///
/// Evaluation is transparent to callers: a populated index is returned
/// immediately, anything else is computed by applying the formula and stored
/// before being returned. The cache is shared across all recursive descents
/// triggered by one top-level call, so overlapping subproblems are computed
/// at most once per memoizer.
///
/// A memoizer owns its cache exclusively; independent memoizers never share
/// entries.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
///
/// use reprise_core::{Cache, EvalError, Memoizer, Recurrence, Recurse};
///
/// struct Fibonacci;
///
/// impl Recurrence for Fibonacci {
///     type Value = u64;
///     type Error = Infallible;
///
///     fn apply(
///         &self,
///         recurse: &mut Recurse<'_, u64, Infallible>,
///         n: u64,
///     ) -> Result<u64, EvalError<Infallible>> {
///         Ok(recurse.at(n - 1)? + recurse.at(n - 2)?)
///     }
/// }
///
/// let mut fibonacci = Memoizer::new(Cache::seeded([0, 1]), Fibonacci);
///
/// assert_eq!(fibonacci.eval(10).unwrap(), 55);
/// assert_eq!(fibonacci.cache().len(), 11);
/// ```
pub struct Memoizer<F: Recurrence> {
    cache: Cache<F::Value>,
    formula: F,
    depth_limit: Option<usize>,
}

impl<F: Recurrence> Memoizer<F> {
    /// Binds `cache` to `formula`.
    ///
    /// Seed the cache with every base case the formula relies on before
    /// evaluating. A formula that cannot reach a populated index recurses
    /// until the stack is exhausted; see
    /// [`with_depth_limit`](Self::with_depth_limit) for a bounded
    /// alternative.
    pub fn new(cache: Cache<F::Value>, formula: F) -> Self {
        Self {
            cache,
            formula,
            depth_limit: None,
        }
    }

    /// Bounds recursion depth, trading stack exhaustion for a typed error.
    ///
    /// An evaluation that would descend more than `limit` uncached levels
    /// returns [`EvalError::DepthLimit`] instead of overflowing the stack.
    /// Cache hits still resolve at the limit boundary, so seeded base cases
    /// keep their precedence.
    #[must_use]
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    /// Evaluates the recurrence at `n`, filling the cache as it goes.
    ///
    /// Repeat and nested visits to an index apply the formula at most once
    /// per memoizer; a second call for the same index is a pure lookup.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Formula`] if the formula fails, or
    /// [`EvalError::DepthLimit`] if a limit set via
    /// [`with_depth_limit`](Self::with_depth_limit) is reached. A failed
    /// evaluation stores nothing.
    pub fn eval(&mut self, n: u64) -> EvalResult<F> {
        let mut evaluation = Evaluation {
            cache: &mut self.cache,
            formula: &self.formula,
            depth: 0,
            limit: self.depth_limit,
        };
        evaluation.evaluate(n)
    }

    /// Returns the cache, including every entry filled so far.
    #[must_use]
    pub fn cache(&self) -> &Cache<F::Value> {
        &self.cache
    }

    /// Returns the formula this memoizer applies.
    #[must_use]
    pub fn formula(&self) -> &F {
        &self.formula
    }

    /// Releases the cache, consuming the memoizer.
    #[must_use]
    pub fn into_cache(self) -> Cache<F::Value> {
        self.cache
    }
}

/// One top-level evaluation in progress.
///
/// Holds disjoint borrows of the memoizer's cache and formula so the formula
/// can re-enter the evaluation through a [`Recurse`] handle while the cache
/// is being filled.
struct Evaluation<'a, F: Recurrence> {
    cache: &'a mut Cache<F::Value>,
    formula: &'a F,
    depth: usize,
    limit: Option<usize>,
}

impl<F: Recurrence> Evaluate<F::Value, F::Error> for Evaluation<'_, F> {
    fn evaluate(&mut self, n: u64) -> EvalResult<F> {
        if let Some(value) = self.cache.get(n) {
            return Ok(value.clone());
        }

        if let Some(limit) = self.limit {
            if self.depth >= limit {
                return Err(EvalError::DepthLimit { limit });
            }
        }

        self.depth += 1;
        let formula = self.formula;
        let result = formula.apply(&mut Recurse::new(self), n);
        self.depth -= 1;

        let value = result?;
        self.cache.insert(n, value.clone());
        Ok(value)
    }
}
