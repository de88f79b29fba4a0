use thiserror::Error;

use crate::recurrence::Recurrence;

/// Errors that can occur while evaluating a recurrence.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The formula itself failed.
    #[error("formula failed")]
    Formula(#[source] E),

    /// The recursion depth limit was reached before a cached base case.
    ///
    /// Only returned by evaluations bounded via
    /// [`Memoizer::with_depth_limit`](crate::Memoizer::with_depth_limit).
    #[error("recursion depth limit of {limit} reached")]
    DepthLimit {
        /// The configured limit.
        limit: usize,
    },
}

/// Type alias for the result of evaluating a recurrence.
pub type EvalResult<F> =
    Result<<F as Recurrence>::Value, EvalError<<F as Recurrence>::Error>>;
