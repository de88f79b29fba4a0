mod cache;
mod error;
mod memoizer;
mod recurrence;

pub mod direct;

pub use cache::{Cache, DuplicateIndexError};
pub use error::{EvalError, EvalResult};
pub use memoizer::Memoizer;
pub use recurrence::{Recurrence, Recurse};
