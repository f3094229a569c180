//! Orderings used by the navigable collections.
//!
//! Every collection in this crate is parameterized by a [`Comparator`] chosen at
//! construction time. The default, [`Natural`], delegates to [`Ord`]; the other
//! comparators let a caller reverse an order, order by a derived key, or supply
//! an arbitrary closure without wrapping the element type.
//!
//! # Examples
//!
//! ```
//! use navigable::compare::{self, Comparator, Natural, Reverse};
//! use core::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse::natural().compare(&1, &2), Ordering::Greater);
//!
//! let by_len = compare::by_key(|s: &&str| s.len());
//! assert_eq!(by_len.compare(&"abc", &"z"), Ordering::Greater);
//! ```

use core::cmp::Ordering;
use core::fmt;

/// A total order over `T`.
///
/// Implementations must be consistent: `compare(a, b)` is `Equal` exactly when
/// the collection should treat `a` and `b` as the same key, and the relation
/// must be transitive and antisymmetric. It is a logic error for the result of
/// `compare` to change for a pair of values while both are stored in a
/// collection. The behavior resulting from such a logic error is not specified,
/// but will not result in undefined behavior.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

/// The natural order of `T`, as given by its [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl Natural {
    /// Returns the opposite order.
    ///
    /// ```
    /// use navigable::compare::{Comparator, Natural};
    /// use core::cmp::Ordering;
    ///
    /// let desc = Natural.reversed();
    /// assert_eq!(desc.compare(&3, &7), Ordering::Greater);
    /// ```
    #[must_use]
    pub const fn reversed(self) -> Reverse<Self> {
        Reverse(self)
    }
}

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The inverse of another comparator.
///
/// `Reverse(Natural)` yields maximum-first extraction from a
/// [`PriorityQueue`](crate::PriorityQueue) and descending iteration from a
/// [`NavMap`](crate::NavMap).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse<C>(pub C);

impl Reverse<Natural> {
    /// The reverse of the natural order.
    #[must_use]
    pub const fn natural() -> Self {
        Reverse(Natural)
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Orders values by a key extracted from each of them.
///
/// Created by [`by_key`].
#[derive(Clone, Copy)]
pub struct ByKey<F>(F);

impl<F> ByKey<F> {
    /// Returns the same key order, largest key first.
    #[must_use]
    pub const fn reversed(self) -> Reverse<Self> {
        Reverse(self)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey").finish_non_exhaustive()
    }
}

impl<T: ?Sized, U: Ord, F: Fn(&T) -> U> Comparator<T> for ByKey<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Orders values with an arbitrary comparison closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnComparator<F>(F);

impl<F> FnComparator<F> {
    /// Returns the opposite of the closure's order.
    #[must_use]
    pub const fn reversed(self) -> Reverse<Self> {
        Reverse(self)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComparator").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for FnComparator<F> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// Creates a comparator that orders values by `f(value)`.
///
/// ```
/// use navigable::{PriorityQueue, compare};
///
/// struct Task {
///     name: &'static str,
///     priority: u8,
/// }
///
/// let mut tasks = PriorityQueue::with_comparator(compare::by_key(|t: &Task| t.priority));
/// tasks.push(Task { name: "pay bills", priority: 4 });
/// tasks.push(Task { name: "groceries", priority: 2 });
/// assert_eq!(tasks.pop().map(|t| t.name), Some("groceries"));
/// ```
pub const fn by_key<F>(f: F) -> ByKey<F> {
    ByKey(f)
}

/// Creates a comparator from a comparison closure.
///
/// ```
/// use navigable::{NavSet, compare};
///
/// let mut words = NavSet::with_comparator(compare::from_fn(|a: &&str, b: &&str| {
///     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
/// }));
/// words.extend(["pear", "fig", "banana"]);
/// assert_eq!(words.iter().copied().collect::<Vec<_>>(), ["fig", "pear", "banana"]);
/// ```
pub const fn from_fn<F>(f: F) -> FnComparator<F> {
    FnComparator(f)
}
