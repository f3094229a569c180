//! A binary-heap priority queue ordered by a [`Comparator`].
//!
//! The element that compares *least* under the queue's comparator is at the
//! top. With [`Natural`] that is the minimum; wrap it in
//! [`Reverse`](crate::compare::Reverse) for a max-queue or use
//! [`by_key`](crate::compare::by_key) to schedule by a priority field.

use alloc::vec::{self, Vec};
use core::fmt;
use core::slice;

use tracing::{debug, trace};

use crate::compare::{Comparator, Natural};
use crate::error::{Error, Result};

/// A priority queue implemented with a binary heap stored in a `Vec`.
///
/// # Examples
///
/// ```
/// use navigable::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// for n in [30, 10, 50, 20, 40] {
///     queue.push(n);
/// }
/// assert_eq!(queue.peek(), Ok(&10));
///
/// let mut order = Vec::new();
/// while let Some(n) = queue.pop() {
///     order.push(n);
/// }
/// assert_eq!(order, [10, 20, 30, 40, 50]);
/// ```
///
/// A max-queue:
///
/// ```
/// use navigable::{PriorityQueue, compare::Reverse};
///
/// let mut queue = PriorityQueue::with_comparator(Reverse::natural());
/// queue.extend([30, 10, 50, 20, 40]);
/// assert_eq!(queue.into_sorted_vec(), [50, 40, 30, 20, 10]);
/// ```
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element changes while it is in the queue.
pub struct PriorityQueue<T, C = Natural> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty min-queue ordered by [`Ord`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty min-queue with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::{PriorityQueue, compare};
    ///
    /// #[derive(Debug)]
    /// struct Task {
    ///     name: &'static str,
    ///     priority: u8,
    /// }
    ///
    /// let mut tasks = PriorityQueue::with_comparator(compare::by_key(|t: &Task| t.priority));
    /// tasks.push(Task { name: "write report", priority: 3 });
    /// tasks.push(Task { name: "fix bug", priority: 1 });
    /// tasks.push(Task { name: "review", priority: 2 });
    ///
    /// assert_eq!(tasks.pop().map(|t| t.name), Some("fix bug"));
    /// assert_eq!(tasks.pop().map(|t| t.name), Some("review"));
    /// ```
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            cmp: comparator,
        }
    }

    /// Creates an empty queue ordered by `comparator` with room for at least
    /// `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp: comparator,
        }
    }

    /// Builds a queue from `data` in O(n).
    pub fn from_vec_with_comparator(data: Vec<T>, comparator: C) -> Self {
        let mut queue = Self { data, cmp: comparator };
        queue.rebuild();
        queue
    }

    /// Returns the comparator that orders this queue.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the queue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the queue can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Adds `value` to the queue.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or_else(|| {
            debug!("peek() on an empty PriorityQueue");
            Error::EmptyContainer
        })
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use navigable::{Error, PriorityQueue};
    ///
    /// let mut queue = PriorityQueue::from(vec![2, 1]);
    /// assert_eq!(queue.extract_top(), Ok(1));
    /// assert_eq!(queue.extract_top(), Ok(2));
    /// assert_eq!(queue.extract_top(), Err(Error::EmptyContainer));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn extract_top(&mut self) -> Result<T> {
        self.pop().ok_or_else(|| {
            debug!("extract_top() on an empty PriorityQueue");
            Error::EmptyContainer
        })
    }

    /// Removes and returns the top element, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let top = self.data.pop();
        self.sift_down(0, self.data.len());
        top
    }

    /// Returns an iterator over the elements in heap order, which is arbitrary
    /// apart from the first element being the top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes every element, yielding them in heap order.
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        self.data.drain(..)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue and returns its elements in heap order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the queue and returns its elements in the order `pop` would
    /// have produced them.
    ///
    /// # Complexity
    ///
    /// O(n log n), in place.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down(0, end);
        }
        // The in-place sort leaves the top element last.
        self.data.reverse();
        self.data
    }

    /// Restores the heap property over the whole buffer.
    fn rebuild(&mut self) {
        let len = self.data.len();
        trace!(len, "heapify");
        for pos in (0..len / 2).rev() {
            self.sift_down(pos, len);
        }
    }

    fn sift_up(&mut self, mut hole: usize) {
        while hole > 0 {
            let parent = (hole - 1) / 2;
            if self.cmp.compare(&self.data[hole], &self.data[parent]).is_lt() {
                self.data.swap(hole, parent);
                hole = parent;
            } else {
                break;
            }
        }
    }

    /// Sifts the element at `hole` down within `data[..end]`.
    fn sift_down(&mut self, mut hole: usize, end: usize) {
        loop {
            let left = 2 * hole + 1;
            if left >= end {
                break;
            }
            let right = left + 1;
            let smaller = if right < end && self.cmp.compare(&self.data[right], &self.data[left]).is_lt() {
                right
            } else {
                left
            };
            if self.cmp.compare(&self.data[smaller], &self.data[hole]).is_lt() {
                self.data.swap(hole, smaller);
                hole = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> From<Vec<T>> for PriorityQueue<T> {
    /// Heapifies `data` in O(n).
    fn from(data: Vec<T>) -> Self {
        Self::from_vec_with_comparator(data, Natural)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for PriorityQueue<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with_comparator(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a, C: Comparator<T>> Extend<&'a T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Yields the elements in heap order.
    fn into_iter(self) -> vec::IntoIter<T> {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.data.iter()
    }
}
