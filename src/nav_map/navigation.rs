use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ops::{Bound, RangeBounds};

use tracing::debug;

use super::{NavMap, Range};
use crate::compare::Comparator;
use crate::error::{Error, Result};

impl<K, V, C> NavMap<K, V, C> {
    /// Returns the greatest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map = NavMap::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(map.floor(&25), Some(&20));
    /// assert_eq!(map.floor(&20), Some(&20));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.floor_key_value(key).map(|(k, _)| k)
    }

    /// Returns the least key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map = NavMap::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(map.ceiling(&25), Some(&30));
    /// assert_eq!(map.ceiling(&30), Some(&30));
    /// assert_eq!(map.ceiling(&35), None);
    /// ```
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.ceiling_key_value(key).map(|(k, _)| k)
    }

    /// Returns the greatest key strictly less than `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map = NavMap::from([(10, 'a'), (20, 'b')]);
    /// assert_eq!(map.lower(&20), Some(&10));
    /// assert_eq!(map.lower(&10), None);
    /// ```
    pub fn lower<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.lower_key_value(key).map(|(k, _)| k)
    }

    /// Returns the least key strictly greater than `key`.
    pub fn higher<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.higher_key_value(key).map(|(k, _)| k)
    }

    /// Like [`floor`](NavMap::floor), returning the whole entry.
    pub fn floor_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.floor_position(key, false).map(|position| self.raw.entry(position))
    }

    /// Like [`ceiling`](NavMap::ceiling), returning the whole entry.
    pub fn ceiling_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.ceiling_position(key, false).map(|position| self.raw.entry(position))
    }

    /// Like [`lower`](NavMap::lower), returning the whole entry.
    pub fn lower_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.floor_position(key, true).map(|position| self.raw.entry(position))
    }

    /// Like [`higher`](NavMap::higher), returning the whole entry.
    pub fn higher_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.raw.ceiling_position(key, true).map(|position| self.raw.entry(position))
    }

    /// Returns a view of the entries whose keys come before `bound`, including
    /// `bound` itself when `inclusive` is set.
    ///
    /// `bound` does not have to be present in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map = NavMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let head: Vec<_> = map.head_view(&2, false).map(|(k, _)| *k).collect();
    /// assert_eq!(head, [1]);
    /// let head: Vec<_> = map.head_view(&2, true).map(|(k, _)| *k).collect();
    /// assert_eq!(head, [1, 2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the view, then O(1) amortized per entry.
    pub fn head_view<Q>(&self, bound: &Q, inclusive: bool) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.view(Bound::Unbounded, if inclusive { Bound::Included(bound) } else { Bound::Excluded(bound) })
    }

    /// Returns a view of the entries whose keys come after `bound`, including
    /// `bound` itself when `inclusive` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map = NavMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// let tail: Vec<_> = map.tail_view(&2, true).map(|(k, _)| *k).collect();
    /// assert_eq!(tail, [2, 3]);
    /// ```
    pub fn tail_view<Q>(&self, bound: &Q, inclusive: bool) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.view(if inclusive { Bound::Included(bound) } else { Bound::Excluded(bound) }, Bound::Unbounded)
    }

    /// Returns a view of the entries with keys in `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `low` comes after `high`. Equal bounds
    /// give an empty view.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::{Error, NavMap};
    ///
    /// let map = NavMap::from([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);
    /// let middle: Vec<_> = map.range_view(&2, &4)?.map(|(k, _)| *k).collect();
    /// assert_eq!(middle, [2, 3]);
    /// assert_eq!(map.range_view(&3, &3)?.count(), 0);
    /// assert!(matches!(map.range_view(&4, &2), Err(Error::InvalidRange)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn range_view<Q>(&self, low: &Q, high: &Q) -> Result<Range<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.range::<Q, _>((Bound::Included(low), Bound::Excluded(high)))
    }

    /// Returns a view of the entries whose keys fall within `range`.
    ///
    /// Accepts anything implementing [`RangeBounds`], so `map.range(2..=5)` and
    /// `map.range((Bound::Excluded(&2), Bound::Unbounded))` both work.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if the start bound comes after the end
    /// bound, or if both bounds are excluded and equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavMap;
    ///
    /// let map: NavMap<i32, i32> = (0..10).map(|k| (k, k * k)).collect();
    /// let squares: Vec<_> = map.range(3..=5)?.map(|(_, v)| *v).collect();
    /// assert_eq!(squares, [9, 16, 25]);
    /// # Ok::<(), navigable::Error>(())
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to create the view, then O(1) amortized per entry.
    pub fn range<Q, R>(&self, range: R) -> Result<Range<'_, K, V>>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
        R: RangeBounds<Q>,
    {
        let start = range.start_bound();
        let end = range.end_bound();
        if let (Bound::Included(s) | Bound::Excluded(s), Bound::Included(e) | Bound::Excluded(e)) = (start, end) {
            let order = self.raw.comparator().compare(s, e);
            let both_excluded = matches!((start, end), (Bound::Excluded(_), Bound::Excluded(_)));
            if order == Ordering::Greater || (order == Ordering::Equal && both_excluded) {
                debug!(?order, both_excluded, "rejected range bounds");
                return Err(Error::InvalidRange);
            }
        }
        Ok(self.view(start, end))
    }

    /// Builds a view without validating the bounds against each other.
    fn view<Q>(&self, start: Bound<&Q>, end: Bound<&Q>) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let front = match start {
            Bound::Unbounded => self.raw.first_position(),
            Bound::Included(key) => self.raw.ceiling_position(key, false),
            Bound::Excluded(key) => self.raw.ceiling_position(key, true),
        };
        let back = match end {
            Bound::Unbounded => self.raw.last_position(),
            Bound::Included(key) => self.raw.floor_position(key, false),
            Bound::Excluded(key) => self.raw.floor_position(key, true),
        };
        let (front, back) = match (front, back) {
            (Some(f), Some(b)) if self.raw.compare_positions::<Q>(f, b) != Ordering::Greater => (Some(f), Some(b)),
            _ => (None, None),
        };
        Range {
            cursor: self.raw.cursor(front, back),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::compare::{Natural, Reverse};
    use alloc::string::String;
    use alloc::vec::Vec;

    fn keys(view: Range<'_, i32, i32>) -> Vec<i32> {
        view.map(|(k, _)| *k).collect()
    }

    #[test]
    fn navigation_on_empty_map_finds_nothing() {
        let map: NavMap<i32, i32> = NavMap::new();
        assert_eq!(map.floor(&1), None);
        assert_eq!(map.ceiling(&1), None);
        assert_eq!(map.lower(&1), None);
        assert_eq!(map.higher(&1), None);
        assert_eq!(map.head_view(&1, true).count(), 0);
        assert_eq!(map.range::<i32, _>(..).map(Iterator::count), Ok(0));
    }

    #[test]
    fn views_between_stored_keys_are_empty() {
        let map: NavMap<i32, i32> = (0..100).map(|k| (k * 10, k)).collect();
        assert_eq!(map.range(11..19).map(keys), Ok(Vec::new()));
        assert_eq!(map.range(11..=20).map(keys), Ok(alloc::vec![20]));
        assert_eq!(map.range((Bound::Excluded(10), Bound::Included(10))).map(keys), Ok(Vec::new()));
    }

    #[test]
    fn rejects_inverted_or_doubly_excluded_bounds() {
        let map: NavMap<i32, i32> = (0..10).map(|k| (k, k)).collect();
        assert_eq!(map.range(5..2).err(), Some(Error::InvalidRange));
        assert_eq!(map.range((Bound::Excluded(3), Bound::Excluded(3))).err(), Some(Error::InvalidRange));
        assert_eq!(map.range(3..3).map(keys), Ok(Vec::new()));
    }

    #[test]
    fn bounds_follow_the_comparator() {
        let map: NavMap<i32, i32, Reverse<Natural>> = (0..10).map(|k| (k, k)).collect();
        assert_eq!(map.floor(&5), Some(&5));
        assert_eq!(map.lower(&5), Some(&6));
        assert_eq!(map.higher(&5), Some(&4));
        assert_eq!(map.head_view(&7, false).map(|(k, _)| *k).collect::<Vec<_>>(), [9, 8]);
        assert_eq!(map.range(2..5).err(), Some(Error::InvalidRange));
        assert_eq!(map.range(5..2).map(|r| r.map(|(k, _)| *k).collect::<Vec<_>>()), Ok(alloc::vec![5, 4, 3]));
    }

    #[test]
    fn borrowed_bounds_on_string_keys() {
        let map: NavMap<String, usize> =
            ["apple", "banana", "cherry", "date"].iter().enumerate().map(|(i, s)| (String::from(*s), i)).collect();
        let middle: Vec<&str> =
            map.range_view("b", "d").map(|view| view.map(|(k, _)| k.as_str()).collect()).unwrap_or_default();
        assert_eq!(middle, ["banana", "cherry"]);
        assert_eq!(map.ceiling("c").map(String::as_str), Some("cherry"));
    }

    #[test]
    fn range_walks_back_from_the_end() {
        let map: NavMap<i32, i32> = (0..200).map(|k| (k, k)).collect();
        let tail: Vec<i32> = map.tail_view(&150, false).rev().take(3).map(|(k, _)| *k).collect();
        assert_eq!(tail, [199, 198, 197]);
        let mut both = map.range(40..60).expect("40..60 is ordered");
        assert_eq!(both.next().map(|(k, _)| *k), Some(40));
        assert_eq!(both.next_back().map(|(k, _)| *k), Some(59));
        assert_eq!(both.count(), 18);
    }
}
