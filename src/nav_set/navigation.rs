use core::borrow::Borrow;
use core::ops::RangeBounds;

use super::{NavSet, Range};
use crate::compare::Comparator;
use crate::error::Result;

impl<T, C> NavSet<T, C> {
    /// Returns the greatest element less than or equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn floor<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.floor(value)
    }

    /// Returns the least element greater than or equal to `value`.
    pub fn ceiling<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.ceiling(value)
    }

    /// Returns the greatest element strictly less than `value`.
    pub fn lower<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.lower(value)
    }

    /// Returns the least element strictly greater than `value`.
    pub fn higher<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.higher(value)
    }

    /// Returns a view of the elements before `bound`, including `bound` itself
    /// when `inclusive` is set.
    pub fn head_view<Q>(&self, bound: &Q, inclusive: bool) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        Range {
            inner: self.map.head_view(bound, inclusive),
        }
    }

    /// Returns a view of the elements after `bound`, including `bound` itself
    /// when `inclusive` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavSet;
    ///
    /// let set = NavSet::from([10, 20, 30, 50, 80]);
    /// assert_eq!(set.tail_view(&30, false).copied().collect::<Vec<_>>(), [50, 80]);
    /// assert_eq!(set.tail_view(&30, true).copied().collect::<Vec<_>>(), [30, 50, 80]);
    /// ```
    pub fn tail_view<Q>(&self, bound: &Q, inclusive: bool) -> Range<'_, T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        Range {
            inner: self.map.tail_view(bound, inclusive),
        }
    }

    /// Returns a view of the elements in `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if `low`
    /// comes after `high`.
    pub fn range_view<Q>(&self, low: &Q, high: &Q) -> Result<Range<'_, T>>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.map.range_view(low, high).map(|inner| Range { inner })
    }

    /// Returns a view of the elements that fall within `range`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if the start
    /// bound comes after the end bound, or if both bounds are excluded and equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::NavSet;
    ///
    /// let set: NavSet<u32> = (1..=10).collect();
    /// let evens: Vec<_> = set.range(4..=8)?.filter(|n| *n % 2 == 0).copied().collect();
    /// assert_eq!(evens, [4, 6, 8]);
    /// # Ok::<(), navigable::Error>(())
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Result<Range<'_, T>>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
        R: RangeBounds<Q>,
    {
        self.map.range::<Q, R>(range).map(|inner| Range { inner })
    }
}
