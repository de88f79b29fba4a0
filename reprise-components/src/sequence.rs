//! Serial-number generation.

use serde::{Deserialize, Serialize};

/// Produces unique identifiers by appending a counter to a prefix.
///
/// The counter advances by one per identifier and never repeats a value
/// within a generator's lifetime unless [`set_next`](Self::set_next) rewinds
/// it. State is plain data and can be serialized to resume a sequence later.
///
/// # Example
///
/// ```
/// use reprise_components::SerialNumbers;
///
/// let mut seqer = SerialNumbers::with_prefix("Q");
/// seqer.set_next(1000);
///
/// assert_eq!(seqer.generate(), "Q1000");
/// assert_eq!(seqer.generate(), "Q1001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SerialNumbers {
    prefix: String,
    next: u64,
}

impl SerialNumbers {
    /// Creates a generator with an empty prefix, counting from 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given prefix, counting from 0.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Replaces the prefix used for subsequent identifiers.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Sets the counter value used for the next identifier.
    pub fn set_next(&mut self, next: u64) {
        self.next = next;
    }

    /// Returns the next identifier and advances the counter.
    pub fn generate(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Iterating yields the same stream as repeated
/// [`generate`](SerialNumbers::generate) calls. The iterator never ends.
impl Iterator for SerialNumbers {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_prefixed_consecutive_identifiers() {
        let mut seqer = SerialNumbers::with_prefix("Q");
        seqer.set_next(1000);

        assert_eq!(seqer.generate(), "Q1000");
        assert_eq!(seqer.generate(), "Q1001");
        assert_eq!(seqer.generate(), "Q1002");
    }

    #[test]
    fn defaults_to_an_empty_prefix_counting_from_zero() {
        let mut seqer = SerialNumbers::new();

        assert_eq!(seqer.generate(), "0");
        assert_eq!(seqer.generate(), "1");
    }

    #[test]
    fn prefix_changes_apply_to_subsequent_identifiers() {
        let mut seqer = SerialNumbers::with_prefix("A");

        assert_eq!(seqer.generate(), "A0");

        seqer.set_prefix("B");
        assert_eq!(seqer.generate(), "B1");
    }

    #[test]
    fn iterates_the_same_stream_as_generate() {
        let seqer = SerialNumbers::with_prefix("N");

        let ids: Vec<_> = seqer.take(3).collect();

        assert_eq!(ids, ["N0", "N1", "N2"]);
    }
}
