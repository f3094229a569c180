use core::borrow::Borrow;

use smallvec::SmallVec;

use super::handle::Handle;
use crate::compare::Comparator;

#[cfg(test)]
pub(crate) const ORDER: usize = 16;
#[cfg(not(test))]
pub(crate) const ORDER: usize = 128;

pub(crate) const MAX_CHILDREN: usize = ORDER;
pub(crate) const MIN_CHILDREN: usize = ORDER.div_ceil(2);
pub(crate) const MAX_KEYS: usize = MAX_CHILDREN - 1;
pub(crate) const MIN_INTERNAL_KEYS: usize = MIN_CHILDREN - 1;
pub(crate) const MIN_LEAF_KEYS: usize = MAX_KEYS.div_ceil(2);

// +1 on every buffer leaves room for the overflowing entry that triggers a split.
type Keys<K> = SmallVec<[K; MAX_KEYS + 1]>;
type Children = SmallVec<[Handle; MAX_CHILDREN + 1]>;
type ValueHandles = SmallVec<[Handle; MAX_KEYS + 1]>;

#[allow(clippy::large_enum_variant)]
#[derive(Clone)]
pub(crate) enum Node<K> {
    Internal(InternalNode<K>),
    Leaf(LeafNode<K>),
}

/// Separator keys and child handles. `keys[i]` is an upper bound for every key
/// under `children[i]` and a strict lower bound for every key under `children[i + 1]`.
#[derive(Clone)]
pub(crate) struct InternalNode<K> {
    keys: Keys<K>,
    children: Children,
}

/// Keys and value handles, chained to their neighbours in key order.
#[derive(Clone)]
pub(crate) struct LeafNode<K> {
    prev: Option<Handle>,
    next: Option<Handle>,
    keys: Keys<K>,
    values: ValueHandles,
}

/// Outcome of a binary search inside a leaf.
pub(crate) enum SearchResult {
    Found(usize),
    /// Not present; the index is where the key would be inserted.
    NotFound(usize),
}

#[inline]
fn probe<K, Q, C>(keys: &[K], key: &Q, cmp: &C) -> Result<usize, usize>
where
    K: Borrow<Q>,
    Q: ?Sized,
    C: Comparator<Q>,
{
    keys.binary_search_by(|probe| cmp.compare(probe.borrow(), key))
}

impl<K> Node<K> {
    pub(crate) fn as_leaf(&self) -> &LeafNode<K> {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("expected leaf node"),
        }
    }

    pub(crate) fn as_leaf_mut(&mut self) -> &mut LeafNode<K> {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("expected leaf node"),
        }
    }

    pub(crate) fn as_internal(&self) -> &InternalNode<K> {
        match self {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("expected internal node"),
        }
    }

    pub(crate) fn as_internal_mut(&mut self) -> &mut InternalNode<K> {
        match self {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("expected internal node"),
        }
    }

    pub(crate) fn into_leaf(self) -> LeafNode<K> {
        match self {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("expected leaf node"),
        }
    }

    pub(crate) fn into_internal(self) -> InternalNode<K> {
        match self {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("expected internal node"),
        }
    }
}

impl<K> InternalNode<K> {
    pub(crate) fn new() -> Self {
        Self {
            keys: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// A fresh root above a node that just split into `left` and `right`.
    pub(crate) fn with_two_children(left: Handle, separator: K, right: Handle) -> Self {
        let mut node = Self::new();
        node.children.push(left);
        node.push_child(separator, right);
        node
    }

    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn is_at_minimum(&self) -> bool {
        self.keys.len() < MIN_INTERNAL_KEYS
    }

    pub(crate) fn can_lend(&self) -> bool {
        self.keys.len() > MIN_INTERNAL_KEYS
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    #[inline]
    pub(crate) fn child(&self, index: usize) -> Handle {
        self.children[index]
    }

    /// Index of the only child that can hold `key`.
    #[inline]
    pub(crate) fn search_child<Q, C>(&self, key: &Q, cmp: &C) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        match probe(&self.keys, key, cmp) {
            Ok(index) | Err(index) => index,
        }
    }

    /// Inserts `right` immediately after the child at `index`, separated by `separator`.
    pub(crate) fn insert_child(&mut self, index: usize, separator: K, right: Handle) {
        self.keys.insert(index, separator);
        self.children.insert(index + 1, right);
    }

    /// Removes the separator at `index` together with the child to its right.
    pub(crate) fn remove_child(&mut self, index: usize) -> (K, Handle) {
        (self.keys.remove(index), self.children.remove(index + 1))
    }

    pub(crate) fn push_child(&mut self, separator: K, child: Handle) {
        self.keys.push(separator);
        self.children.push(child);
    }

    /// Prepends `child` as the new leftmost child, bounded above by `separator`.
    pub(crate) fn push_child_front(&mut self, child: Handle, separator: K) {
        self.keys.insert(0, separator);
        self.children.insert(0, child);
    }

    /// Removes the rightmost child and the separator to its left.
    pub(crate) fn pop_child(&mut self) -> Option<(K, Handle)> {
        let key = self.keys.pop()?;
        let child = self.children.pop()?;
        Some((key, child))
    }

    /// Removes the leftmost child and the separator to its right.
    pub(crate) fn pop_child_front(&mut self) -> Option<(K, Handle)> {
        if self.keys.is_empty() {
            return None;
        }
        Some((self.keys.remove(0), self.children.remove(0)))
    }

    pub(crate) fn set_key(&mut self, index: usize, key: K) {
        self.keys[index] = key;
    }

    /// Splits off the upper half. Returns the median separator and the new right sibling.
    pub(crate) fn split(&mut self) -> (K, InternalNode<K>) {
        let mid = self.keys.len() / 2;
        let right = InternalNode {
            keys: self.keys.drain(mid + 1..).collect(),
            children: self.children.drain(mid + 1..).collect(),
        };
        let median = self.keys.pop().expect("`InternalNode::split()` - node has no median key!");
        (median, right)
    }

    pub(crate) fn merge_with_right(&mut self, separator: K, mut right: InternalNode<K>) {
        self.keys.push(separator);
        self.keys.append(&mut right.keys);
        self.children.append(&mut right.children);
    }
}

impl<K> LeafNode<K> {
    pub(crate) fn new() -> Self {
        Self {
            prev: None,
            next: None,
            keys: SmallVec::new(),
            values: SmallVec::new(),
        }
    }

    pub(crate) fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_at_minimum(&self) -> bool {
        self.keys.len() < MIN_LEAF_KEYS
    }

    pub(crate) fn can_lend(&self) -> bool {
        self.keys.len() > MIN_LEAF_KEYS
    }

    pub(crate) fn prev(&self) -> Option<Handle> {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, prev: Option<Handle>) {
        self.prev = prev;
    }

    pub(crate) fn next(&self) -> Option<Handle> {
        self.next
    }

    pub(crate) fn set_next(&mut self, next: Option<Handle>) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn key(&self, index: usize) -> &K {
        &self.keys[index]
    }

    #[inline]
    pub(crate) fn value(&self, index: usize) -> Handle {
        self.values[index]
    }

    pub(crate) fn last_key(&self) -> Option<&K> {
        self.keys.last()
    }

    #[inline]
    pub(crate) fn search<Q, C>(&self, key: &Q, cmp: &C) -> SearchResult
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        match probe(&self.keys, key, cmp) {
            Ok(index) => SearchResult::Found(index),
            Err(index) => SearchResult::NotFound(index),
        }
    }

    pub(crate) fn insert(&mut self, index: usize, key: K, value: Handle) {
        self.keys.insert(index, key);
        self.values.insert(index, value);
    }

    pub(crate) fn remove(&mut self, index: usize) -> (K, Handle) {
        (self.keys.remove(index), self.values.remove(index))
    }

    pub(crate) fn push(&mut self, key: K, value: Handle) {
        self.keys.push(key);
        self.values.push(value);
    }

    pub(crate) fn push_front(&mut self, key: K, value: Handle) {
        self.keys.insert(0, key);
        self.values.insert(0, value);
    }

    pub(crate) fn pop(&mut self) -> Option<(K, Handle)> {
        let key = self.keys.pop()?;
        let value = self.values.pop()?;
        Some((key, value))
    }

    pub(crate) fn pop_front(&mut self) -> Option<(K, Handle)> {
        if self.keys.is_empty() {
            return None;
        }
        Some((self.keys.remove(0), self.values.remove(0)))
    }

    /// Empties the leaf, handing back its keys and value handles in order.
    pub(crate) fn take_all(&mut self) -> (Keys<K>, ValueHandles) {
        (core::mem::take(&mut self.keys), core::mem::take(&mut self.values))
    }

    /// Splits off the upper half. Returns the new separator (the left half's
    /// largest key) and the new right sibling, whose chain links are unset.
    pub(crate) fn split(&mut self) -> (K, LeafNode<K>)
    where
        K: Clone,
    {
        let mid = self.keys.len() / 2;
        let right = LeafNode {
            prev: None,
            next: None,
            keys: self.keys.drain(mid..).collect(),
            values: self.values.drain(mid..).collect(),
        };
        let separator = self.keys.last().cloned().expect("`LeafNode::split()` - left half is empty!");
        (separator, right)
    }

    pub(crate) fn merge_with_right(&mut self, mut right: LeafNode<K>) {
        self.keys.append(&mut right.keys);
        self.values.append(&mut right.values);
        self.next = right.next;
    }

    /// Returns true if `keys` is strictly increasing under `cmp`.
    #[cfg(test)]
    pub(crate) fn is_sorted_by<C: Comparator<K>>(&self, cmp: &C) -> bool {
        self.keys.windows(2).all(|pair| cmp.compare(&pair[0], &pair[1]).is_lt())
    }
}
