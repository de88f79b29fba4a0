//! Ready-made components built on `reprise-core`.

pub mod event;
pub mod recurrence;
pub mod sequence;

pub use event::EventRegistry;
pub use recurrence::{Factorial, FactorialOverflowError, Fibonacci};
pub use sequence::SerialNumbers;
