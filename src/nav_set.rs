use core::borrow::Borrow;
use core::fmt;
use core::iter::{FusedIterator, Rev};

use crate::compare::{Comparator, Natural};
use crate::error::Result;
use crate::nav_map::{self, Direction, NavMap};

mod capacity;
mod navigation;

/// An ordered set based on a [B+Tree] with nearest-element navigation.
///
/// A `NavSet<T, C>` is a [`NavMap<T, (), C>`](NavMap): elements are ordered by
/// the set's [`Comparator`], fixed at construction, and every view borrows the
/// set so it cannot change underneath an iterator.
///
/// # Examples
///
/// ```
/// use navigable::NavSet;
///
/// let mut numbers = NavSet::new();
/// for n in [50, 20, 80, 10, 30] {
///     numbers.insert(n);
/// }
/// assert!(!numbers.insert(20));
/// assert_eq!(numbers.len(), 5);
///
/// assert_eq!(numbers.first(), Ok(&10));
/// assert_eq!(numbers.floor(&25), Some(&20));
/// assert_eq!(numbers.higher(&30), Some(&50));
///
/// let small: Vec<_> = numbers.head_view(&30, false).copied().collect();
/// assert_eq!(small, [10, 20]);
/// ```
///
/// Ordering strings by length, then alphabetically:
///
/// ```
/// use navigable::{NavSet, compare};
///
/// let mut words = NavSet::with_comparator(compare::from_fn(|a: &&str, b: &&str| {
///     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
/// }));
/// words.extend(["pear", "fig", "banana", "kiwi"]);
/// assert_eq!(words.iter().copied().collect::<Vec<_>>(), ["fig", "kiwi", "pear", "banana"]);
/// ```
///
/// [B+Tree]: https://en.wikipedia.org/wiki/B%2B_tree
pub struct NavSet<T, C = Natural> {
    map: NavMap<T, (), C>,
}

/// An iterator over the elements of a `NavSet`, in comparator order.
///
/// This `struct` is created by the [`iter`] method on [`NavSet`].
///
/// [`iter`]: NavSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: nav_map::Keys<'a, T, ()>,
}

/// An iterator over the elements of a `NavSet` in a chosen [`Direction`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Directed<'a, T> {
    inner: nav_map::Directed<'a, T, ()>,
}

/// An iterator over a contiguous run of elements of a `NavSet`.
///
/// This `struct` is created by the view methods on [`NavSet`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, T> {
    inner: nav_map::Range<'a, T, ()>,
}

/// An owning iterator over the elements of a `NavSet`, in comparator order.
pub struct IntoIter<T> {
    inner: nav_map::IntoIter<T, ()>,
}

impl<T> NavSet<T> {
    /// Makes a new, empty `NavSet` ordered by the elements' [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavSet;
    ///
    /// let set: NavSet<i32> = NavSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self { map: NavMap::new() }
    }
}

impl<T, C> NavSet<T, C> {
    /// Makes a new, empty `NavSet` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::{NavSet, compare::Reverse};
    ///
    /// let mut set = NavSet::with_comparator(Reverse::natural());
    /// set.extend([1, 3, 2]);
    /// assert_eq!(set.first(), Ok(&3));
    /// ```
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            map: NavMap::with_comparator(comparator),
        }
    }

    /// Returns the comparator that orders this set.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.map.comparator()
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Adds `value` to the set.
    ///
    /// Returns whether the value was newly inserted. An equal element already in
    /// the set is left in place.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Clone,
        C: Comparator<T>,
    {
        self.map.insert(value, ()).is_none()
    }

    /// Returns `true` if the set contains an element equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the stored element equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.get_key_value(value).map(|(stored, ())| stored)
    }

    /// Removes `value` from the set. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavSet;
    ///
    /// let mut set = NavSet::from([10, 20, 30]);
    /// assert!(set.remove(&20));
    /// assert!(!set.remove(&20));
    /// assert!(!set.contains(&20));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q> + Clone,
        Q: ?Sized,
        C: Comparator<Q> + Comparator<T>,
    {
        self.map.remove(value).is_some()
    }

    /// Removes and returns the stored element equal to `value`.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q> + Clone,
        Q: ?Sized,
        C: Comparator<Q> + Comparator<T>,
    {
        self.map.remove_entry(value).map(|(stored, ())| stored)
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the set is empty.
    pub fn first(&self) -> Result<&T> {
        self.map.first().map(|(first, ())| first)
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`](crate::Error::EmptyContainer) if the set is empty.
    pub fn last(&self) -> Result<&T> {
        self.map.last().map(|(last, ())| last)
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T>
    where
        T: Clone,
        C: Comparator<T>,
    {
        self.map.pop_first().map(|(first, ())| first)
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<T>
    where
        T: Clone,
        C: Comparator<T>,
    {
        self.map.pop_last().map(|(last, ())| last)
    }

    /// Gets an iterator over the elements, in comparator order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }

    /// Gets an iterator over the elements in the given direction.
    pub fn iter_in(&self, direction: Direction) -> Directed<'_, T> {
        Directed {
            inner: self.map.iter_in(direction),
        }
    }

    /// Gets an iterator over the elements from the largest down.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavSet;
    ///
    /// let set = NavSet::from([3, 1, 2]);
    /// assert_eq!(set.descending().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn descending(&self) -> Rev<Iter<'_, T>> {
        self.iter().rev()
    }
}

impl<T: Clone, C: Clone> Clone for NavSet<T, C> {
    fn clone(&self) -> Self {
        Self { map: self.map.clone() }
    }
}

impl<T: PartialEq, C> PartialEq for NavSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq, C> Eq for NavSet<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for NavSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Default> Default for NavSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Comparator<T> + Default> FromIterator<T> for NavSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Clone, C: Comparator<T>> Extend<T> for NavSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Copy, C: Comparator<T>> Extend<&'a T> for NavSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Clone + Ord, const N: usize> From<[T; N]> for NavSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, T, C> IntoIterator for &'a NavSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for NavSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Directed<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(value, ())| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Directed<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(value, ())| value)
    }
}

impl<T> ExactSizeIterator for Directed<'_, T> {}

impl<T> FusedIterator for Directed<'_, T> {}

impl<T> Clone for Directed<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Directed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Range<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(value, ())| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Range<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(value, ())| value)
    }
}

impl<T> FusedIterator for Range<'_, T> {}

impl<T> Clone for Range<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Range<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|(value, ())| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back().map(|(value, ())| value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}
