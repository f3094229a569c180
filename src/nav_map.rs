use core::borrow::Borrow;
use core::fmt;
use core::iter::{FusedIterator, Rev};
use core::ops::Index;

use tracing::debug;

use crate::compare::{Comparator, Natural};
use crate::error::{Error, Result};
use crate::raw::{Cursor, RawNavTree};

mod capacity;
mod navigation;

/// The order in which [`NavMap::iter_in`] and [`NavSet::iter_in`](crate::NavSet::iter_in)
/// visit their entries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Smallest key first, as defined by the collection's comparator.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

/// An ordered map based on a [B+Tree] with nearest-key navigation.
///
/// Keys are kept in the order defined by the map's [`Comparator`], which is fixed
/// when the map is created. The default comparator, [`Natural`], uses the key's
/// [`Ord`] implementation; [`NavMap::with_comparator`] accepts any other total
/// order, so a map can be kept in descending order or ordered by a field of the key
/// without wrapping the key type.
///
/// Besides the usual lookup operations the map answers nearest-key queries
/// ([`floor`](NavMap::floor), [`ceiling`](NavMap::ceiling), [`lower`](NavMap::lower),
/// [`higher`](NavMap::higher)) and produces range views
/// ([`head_view`](NavMap::head_view), [`tail_view`](NavMap::tail_view),
/// [`range_view`](NavMap::range_view), [`range`](NavMap::range)).
///
/// # Views
///
/// Every view and iterator borrows the map immutably, so the map cannot be
/// modified while one is alive and a view always reflects the map as it was when
/// the view was created. Collect a view to keep an owned snapshot past later
/// mutations:
///
/// ```
/// use navigable::NavMap;
///
/// let mut map = NavMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// let snapshot: Vec<_> = map.head_view(&3, false).map(|(k, v)| (*k, *v)).collect();
/// map.remove(&1);
/// assert_eq!(snapshot, [(1, "a"), (2, "b")]);
/// ```
///
/// Mutating the map while a view is still in use does not compile:
///
/// ```compile_fail
/// use navigable::NavMap;
///
/// let mut map = NavMap::from([(1, "a"), (2, "b")]);
/// let view = map.tail_view(&1, true);
/// map.insert(3, "c");
/// assert_eq!(view.count(), 2);
/// ```
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key, as determined by the comparator, changes while it
/// is in the map. The behavior resulting from such a logic error is not
/// specified, but will be encapsulated to the `NavMap` that observed it and not
/// result in undefined behavior.
///
/// # Examples
///
/// ```
/// use navigable::NavMap;
///
/// let mut grades = NavMap::new();
/// grades.insert("Math", 8.5);
/// grades.insert("Biology", 9.0);
/// grades.insert("History", 7.8);
/// grades.insert("Physics", 8.0);
///
/// assert_eq!(grades.first(), Ok((&"Biology", &9.0)));
/// assert_eq!(grades.last(), Ok((&"Physics", &8.0)));
///
/// let before_history: Vec<_> = grades.head_view(&"History", false).map(|(k, _)| *k).collect();
/// assert_eq!(before_history, ["Biology"]);
///
/// let descending: Vec<_> = grades.descending().map(|(k, _)| *k).collect();
/// assert_eq!(descending, ["Physics", "Math", "History", "Biology"]);
/// ```
///
/// [B+Tree]: https://en.wikipedia.org/wiki/B%2B_tree
pub struct NavMap<K, V, C = Natural> {
    raw: RawNavTree<K, V, C>,
}

/// An iterator over the entries of a `NavMap`, in comparator order.
///
/// This `struct` is created by the [`iter`] method on [`NavMap`].
///
/// [`iter`]: NavMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    cursor: Cursor<'a, K, V>,
    remaining: usize,
}

/// An iterator over the entries of a `NavMap` in a chosen [`Direction`].
///
/// This `struct` is created by the [`iter_in`] method on [`NavMap`].
///
/// [`iter_in`]: NavMap::iter_in
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Directed<'a, K, V> {
    iter: Iter<'a, K, V>,
    direction: Direction,
}

/// An iterator over the keys of a `NavMap`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of a `NavMap`.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over a contiguous run of entries of a `NavMap`.
///
/// This `struct` is created by the view methods on [`NavMap`]:
/// [`head_view`](NavMap::head_view), [`tail_view`](NavMap::tail_view),
/// [`range_view`](NavMap::range_view) and [`range`](NavMap::range).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K, V> {
    cursor: Cursor<'a, K, V>,
}

/// An owning iterator over the entries of a `NavMap`, in comparator order.
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V> NavMap<K, V> {
    /// Makes a new, empty `NavMap` ordered by the keys' [`Ord`] implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut map = NavMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, V, C> NavMap<K, V, C> {
    /// Makes a new, empty `NavMap` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::{NavMap, compare::Reverse};
    ///
    /// let mut map = NavMap::with_comparator(Reverse::natural());
    /// map.extend([(1, 'a'), (3, 'c'), (2, 'b')]);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            raw: RawNavTree::new(comparator),
        }
    }

    /// Returns the comparator that orders this map.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut a = NavMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all entries.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::{Error, NavMap};
    ///
    /// let mut map = NavMap::new();
    /// assert_eq!(map.first(), Err(Error::EmptyContainer));
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.first(), Ok((&1, &"a")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn first(&self) -> Result<(&K, &V)> {
        self.first_key_value().ok_or_else(|| {
            debug!("first() on an empty NavMap");
            Error::EmptyContainer
        })
    }

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn last(&self) -> Result<(&K, &V)> {
        self.last_key_value().ok_or_else(|| {
            debug!("last() on an empty NavMap");
            Error::EmptyContainer
        })
    }

    /// Returns the entry with the smallest key, or `None` if the map is empty.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_position().map(|position| self.raw.entry(position))
    }

    /// Returns the entry with the largest key, or `None` if the map is empty.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_position().map(|position| self.raw.entry(position))
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// The key may be any borrowed form of the map's key type, as long as the
    /// comparator orders the borrowed form the same way it orders the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut map = NavMap::new();
    /// map.insert(String::from("apple"), 3);
    /// assert_eq!(map.get("apple"), Some(&3));
    /// assert_eq!(map.get("pear"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.get(key)
    }

    /// Returns the stored key and its value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.search(key).map(|position| self.raw.entry(position))
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut stock = NavMap::from([("laptop", 15), ("mouse", 50)]);
    /// if let Some(count) = stock.get_mut(&"laptop") {
    ///     *count -= 3;
    /// }
    /// assert_eq!(stock[&"laptop"], 12);
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map holds an entry for `key`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.search(key).is_some()
    }

    /// Inserts a key-value pair.
    ///
    /// If the map already held an entry for `key`, its value is replaced and the
    /// old value returned; the stored key and the length are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut map = NavMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map[&37], "b");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
        C: Comparator<K>,
    {
        self.raw.insert(key, value).1
    }

    /// Returns the value for `key`, inserting `default()` first if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut counts = NavMap::new();
    /// for word in "the cat and the hat".split(' ') {
    ///     *counts.get_or_insert_with(word, || 0) += 1;
    /// }
    /// assert_eq!(counts[&"the"], 2);
    /// assert_eq!(counts.first(), Ok((&"and", &1)));
    /// ```
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        K: Clone,
        C: Comparator<K>,
        F: FnOnce() -> V,
    {
        if let Some(position) = self.raw.search(&key) {
            return self.raw.entry_mut(position).1;
        }
        let (handle, _) = self.raw.insert(key, default());
        self.raw.value_mut(handle)
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut map = NavMap::from([(1, "a")]);
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized,
        C: Comparator<Q> + Comparator<K>,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the map, returning the stored key and its value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized,
        C: Comparator<Q> + Comparator<K>,
    {
        self.raw.remove_entry(key)
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let mut agenda = NavMap::from([("2024-03-01", "exam"), ("2024-01-15", "start")]);
    /// assert_eq!(agenda.pop_first(), Some(("2024-01-15", "start")));
    /// assert_eq!(agenda.len(), 1);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)>
    where
        K: Clone,
        C: Comparator<K>,
    {
        self.raw.pop_first()
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)>
    where
        K: Clone,
        C: Comparator<K>,
    {
        self.raw.pop_last()
    }

    /// Gets an iterator over the entries of the map, in comparator order.
    ///
    /// Each call starts a fresh traversal. The iterator is double-ended, so
    /// `iter().rev()` walks the map from its largest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map = NavMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            cursor: self.raw.cursor(self.raw.first_position(), self.raw.last_position()),
            remaining: self.len(),
        }
    }

    /// Gets an iterator over the entries of the map in the given direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::{Direction, NavMap};
    ///
    /// let map = NavMap::from([(1, ()), (2, ()), (3, ())]);
    /// let down: Vec<_> = map.iter_in(Direction::Descending).map(|(k, _)| *k).collect();
    /// assert_eq!(down, [3, 2, 1]);
    /// ```
    pub fn iter_in(&self, direction: Direction) -> Directed<'_, K, V> {
        Directed {
            iter: self.iter(),
            direction,
        }
    }

    /// Gets an iterator over the entries of the map from the largest key down.
    pub fn descending(&self) -> Rev<Iter<'_, K, V>> {
        self.iter().rev()
    }

    /// Gets an iterator over the keys of the map, in comparator order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for NavMap<K, V, C> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for NavMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for NavMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for NavMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for NavMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V, C: Comparator<K> + Default> FromIterator<(K, V)> for NavMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K: Clone, V, C: Comparator<K>> Extend<(K, V)> for NavMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K: Copy, V: Copy, C: Comparator<K>> Extend<(&'a K, &'a V)> for NavMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K: Clone + Ord, V, const N: usize> From<[(K, V); N]> for NavMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, Q, V, C> Index<&Q> for NavMap<K, V, C>
where
    K: Borrow<Q>,
    Q: ?Sized,
    C: Comparator<Q>,
{
    type Output = V;

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V, C> IntoIterator for &'a NavMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for NavMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.cursor.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Directed<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Ascending => self.iter.next(),
            Direction::Descending => self.iter.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Directed<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Ascending => self.iter.next_back(),
            Direction::Descending => self.iter.next(),
        }
    }
}

impl<K, V> ExactSizeIterator for Directed<'_, K, V> {}

impl<K, V> FusedIterator for Directed<'_, K, V> {}

impl<K, V> Clone for Directed<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            direction: self.direction,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Directed<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.is_exhausted() { (0, Some(0)) } else { (1, None) }
    }
}

impl<K, V> DoubleEndedIterator for Range<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cursor.next_back()
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> {}

impl<K, V> Clone for Range<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Range<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
