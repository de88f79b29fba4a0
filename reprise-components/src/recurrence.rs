//! Recurrences with known base cases, ready to memoize.

mod factorial;
mod fibonacci;

pub use factorial::{Factorial, FactorialOverflowError};
pub use fibonacci::Fibonacci;
