use super::NavMap;
use crate::compare::Natural;
use crate::raw::RawNavTree;

impl<K, V> NavMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map: NavMap<i32, i32> = NavMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<K, V, C> NavMap<K, V, C> {
    /// Creates an empty map ordered by `comparator` with room for at least
    /// `capacity` entries.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            raw: RawNavTree::with_capacity(capacity, comparator),
        }
    }

    /// Returns how many entries the map can hold before its value storage grows.
    ///
    /// Removed entries leave slots that later insertions reuse.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
