use super::NavSet;
use crate::nav_map::NavMap;

impl<T> NavSet<T> {
    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavSet;
    ///
    /// let set: NavSet<u64> = NavSet::with_capacity(100);
    /// assert!(set.capacity() >= 100);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: NavMap::with_capacity(capacity),
        }
    }
}

impl<T, C> NavSet<T, C> {
    /// Creates an empty set ordered by `comparator` with room for at least
    /// `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            map: NavMap::with_capacity_and_comparator(capacity, comparator),
        }
    }

    /// Returns how many elements the set can hold before it reallocates.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }
}
