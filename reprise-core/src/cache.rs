use std::collections::BTreeMap;

use thiserror::Error;

/// A store of previously computed recurrence values, keyed by index.
///
/// A `Cache` grows monotonically: once an index is populated it is never
/// invalidated or overwritten for the lifetime of the instance.
/// Presence is an explicit query ([`get`](Cache::get) /
/// [`contains`](Cache::contains)); an absent index is `None`, never a
/// sentinel value.
///
/// Seed base cases before evaluation; a seeded entry is always returned
/// verbatim and terminates recursion without further formula work.
///
/// # Examples
///
/// ```
/// use reprise_core::Cache;
///
/// // Consecutive seeding from index 0, as in `Cache::seeded([0, 1])`:
/// let mut cache = Cache::seeded([0, 1]);
/// assert_eq!(cache.get(0), Some(&0));
/// assert_eq!(cache.get(1), Some(&1));
/// assert_eq!(cache.get(2), None);
///
/// cache.insert(2, 1);
/// assert!(cache.contains(2));
///
/// // A populated index is never overwritten.
/// cache.insert(2, 999);
/// assert_eq!(cache.get(2), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Cache<V> {
    entries: BTreeMap<u64, V>,
}

/// Error returned when constructing a [`Cache`] from pairs that repeat an index.
///
/// It contains the first index that appeared more than once.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cache already contains an entry for index {index}")]
pub struct DuplicateIndexError {
    /// The repeated index.
    pub index: u64,
}

impl<V> Cache<V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a cache seeded with consecutive indices starting at 0.
    ///
    /// `Cache::seeded([0, 1])` populates index 0 with value 0 and index 1
    /// with value 1, the usual Fibonacci base cases.
    pub fn seeded<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            entries: (0u64..).zip(values).collect(),
        }
    }

    /// Creates a cache from explicit `(index, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`DuplicateIndexError`] if any index appears more than once.
    pub fn with_entries<I>(pairs: I) -> Result<Self, DuplicateIndexError>
    where
        I: IntoIterator<Item = (u64, V)>,
    {
        let mut entries = BTreeMap::new();
        for (index, value) in pairs {
            if entries.contains_key(&index) {
                return Err(DuplicateIndexError { index });
            }
            entries.insert(index, value);
        }
        Ok(Self { entries })
    }

    /// Returns the value stored at `index`, if any.
    pub fn get(&self, index: u64) -> Option<&V> {
        self.entries.get(&index)
    }

    /// Returns `true` if `index` is populated.
    pub fn contains(&self, index: u64) -> bool {
        self.entries.contains_key(&index)
    }

    /// Stores `value` at `index` if the index is not yet populated.
    ///
    /// The first value stored at an index wins; later inserts at the same
    /// index are ignored, preserving monotonic growth.
    pub fn insert(&mut self, index: u64, value: V) {
        self.entries.entry(index).or_insert(value);
    }

    /// Returns the number of populated indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no index is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over populated `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &V)> {
        self.entries.iter().map(|(&index, value)| (index, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_assigns_consecutive_indices_from_zero() {
        let cache = Cache::seeded([10, 20, 30]);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(0), Some(&10));
        assert_eq!(cache.get(1), Some(&20));
        assert_eq!(cache.get(2), Some(&30));
        assert_eq!(cache.get(3), None);
    }

    #[test]
    fn with_entries_accepts_distinct_indices() {
        let cache = Cache::with_entries([(0, 1), (5, 120)]).unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(5));
        assert!(!cache.contains(1));
    }

    #[test]
    fn with_entries_rejects_a_repeated_index() {
        let result = Cache::with_entries([(0, 1), (3, 6), (3, 7)]);

        assert_eq!(result.unwrap_err(), DuplicateIndexError { index: 3 });
    }

    #[test]
    fn insert_never_overwrites() {
        let mut cache = Cache::new();

        cache.insert(4, "first");
        cache.insert(4, "second");

        assert_eq!(cache.get(4), Some(&"first"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn iter_yields_pairs_in_index_order() {
        let cache = Cache::with_entries([(7, 'c'), (0, 'a'), (3, 'b')]).unwrap();

        let pairs: Vec<_> = cache.iter().collect();
        assert_eq!(pairs, [(0, &'a'), (3, &'b'), (7, &'c')]);
    }

    #[test]
    fn empty_cache_reports_empty() {
        let cache: Cache<u64> = Cache::new();

        assert!(cache.is_empty());
        assert_eq!(cache.get(0), None);
    }
}
