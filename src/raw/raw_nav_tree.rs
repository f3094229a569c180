use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;

use smallvec::SmallVec;
use tracing::trace;

use super::arena::Arena;
use super::cursor::Cursor;
use super::handle::Handle;
use super::node::{InternalNode, LeafNode, MAX_KEYS, Node, SearchResult};
use crate::compare::Comparator;

/// A slot inside a leaf: the leaf's handle and the entry's index within it.
pub(crate) type Position = (Handle, usize);

/// The B+tree behind `NavMap` and `NavSet`.
#[derive(Clone)]
pub(crate) struct RawNavTree<K, V, C> {
    nodes: Arena<Node<K>>,
    /// Values live apart from nodes so splits and merges only move handles.
    values: Arena<V>,
    root: Option<Handle>,
    len: usize,
    first_leaf: Option<Handle>,
    last_leaf: Option<Handle>,
    cmp: C,
}

struct PathElement {
    node: Handle,
    child_index: usize,
}

type Path = SmallVec<[PathElement; 16]>;

impl<K, V, C> RawNavTree<K, V, C> {
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            values: Arena::new(),
            root: None,
            len: 0,
            first_leaf: None,
            last_leaf: None,
            cmp,
        }
    }

    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity.div_ceil(MAX_KEYS)),
            values: Arena::with_capacity(capacity),
            ..Self::new(cmp)
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    pub(crate) const fn comparator(&self) -> &C {
        &self.cmp
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.values.clear();
        self.reset();
    }

    fn reset(&mut self) {
        self.root = None;
        self.len = 0;
        self.first_leaf = None;
        self.last_leaf = None;
    }

    /// Moves every entry out in key order by walking the leaf chain, skipping rebalancing.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut entries = Vec::with_capacity(self.len);
        let mut current = self.first_leaf;
        while let Some(handle) = current {
            let leaf = self.nodes.get_mut(handle).as_leaf_mut();
            current = leaf.next();
            let (keys, value_handles) = leaf.take_all();
            for (key, value) in keys.into_iter().zip(value_handles) {
                entries.push((key, self.values.take(value)));
            }
        }
        self.clear();
        entries
    }

    pub(crate) fn first_position(&self) -> Option<Position> {
        self.first_leaf.map(|leaf| (leaf, 0))
    }

    pub(crate) fn last_position(&self) -> Option<Position> {
        let leaf = self.last_leaf?;
        let count = self.nodes.get(leaf).as_leaf().key_count();
        count.checked_sub(1).map(|index| (leaf, index))
    }

    /// The entry stored at `position`.
    pub(crate) fn entry(&self, (leaf, index): Position) -> (&K, &V) {
        let leaf = self.nodes.get(leaf).as_leaf();
        (leaf.key(index), self.values.get(leaf.value(index)))
    }

    /// The entry stored at `position`, with its value borrowed mutably.
    pub(crate) fn entry_mut(&mut self, (leaf, index): Position) -> (&K, &mut V) {
        let leaf = self.nodes.get(leaf).as_leaf();
        (leaf.key(index), self.values.get_mut(leaf.value(index)))
    }

    /// A double-ended walk from `front` to `back`, both inclusive.
    ///
    /// `front` must not come after `back`; an empty walk results if either is `None`.
    pub(crate) fn cursor(&self, front: Option<Position>, back: Option<Position>) -> Cursor<'_, K, V> {
        Cursor::new(&self.nodes, &self.values, front, back)
    }
}

impl<K, V, C> RawNavTree<K, V, C> {
    /// Walks from the root to the leaf that owns `key`.
    fn leaf_for<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut current = self.root?;
        while let Node::Internal(internal) = self.nodes.get(current) {
            current = internal.child(internal.search_child(key, &self.cmp));
        }
        Some(current)
    }

    /// Like [`Self::leaf_for`], but records the route for rebalancing.
    fn path_to_leaf<Q>(&self, root: Handle, key: &Q, path: &mut Path) -> Handle
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let mut current = root;
        while let Node::Internal(internal) = self.nodes.get(current) {
            let child_index = internal.search_child(key, &self.cmp);
            path.push(PathElement {
                node: current,
                child_index,
            });
            current = internal.child(child_index);
        }
        current
    }

    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let leaf = self.leaf_for(key)?;
        match self.nodes.get(leaf).as_leaf().search(key, &self.cmp) {
            SearchResult::Found(index) => Some((leaf, index)),
            SearchResult::NotFound(_) => None,
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.search(key).map(|position| self.entry(position).1)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let position = self.search(key)?;
        Some(self.entry_mut(position).1)
    }

    /// First position whose key is `>= key` (`> key` when `strict`).
    pub(crate) fn ceiling_position<Q>(&self, key: &Q, strict: bool) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let leaf = self.leaf_for(key)?;
        let node = self.nodes.get(leaf).as_leaf();
        let index = match node.search(key, &self.cmp) {
            SearchResult::Found(index) if strict => index + 1,
            SearchResult::Found(index) | SearchResult::NotFound(index) => index,
        };
        if index < node.key_count() {
            Some((leaf, index))
        } else {
            // Everything here precedes `key`; the next leaf starts past its separator.
            node.next().map(|next| (next, 0))
        }
    }

    /// Last position whose key is `<= key` (`< key` when `strict`).
    pub(crate) fn floor_position<Q>(&self, key: &Q, strict: bool) -> Option<Position>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let leaf = self.leaf_for(key)?;
        let node = self.nodes.get(leaf).as_leaf();
        match node.search(key, &self.cmp) {
            SearchResult::Found(index) if !strict => Some((leaf, index)),
            SearchResult::Found(index) | SearchResult::NotFound(index) if index > 0 => Some((leaf, index - 1)),
            _ => {
                let prev = node.prev()?;
                let count = self.nodes.get(prev).as_leaf().key_count();
                Some((prev, count - 1))
            }
        }
    }

    /// Orders two stored positions by their keys.
    pub(crate) fn compare_positions<Q>(&self, a: Position, b: Position) -> Ordering
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.cmp.compare(self.entry(a).0.borrow(), self.entry(b).0.borrow())
    }
}

impl<K: Clone, V, C: Comparator<K>> RawNavTree<K, V, C> {
    /// Inserts or replaces. Returns the handle of the value slot and the
    /// replaced value, if any. The handle stays valid across later splits.
    pub(crate) fn insert(&mut self, key: K, value: V) -> (Handle, Option<V>) {
        let Some(root) = self.root else {
            let value_handle = self.values.alloc(value);
            let mut leaf = LeafNode::new();
            leaf.push(key, value_handle);
            let leaf_handle = self.nodes.alloc(Node::Leaf(leaf));
            self.root = Some(leaf_handle);
            self.first_leaf = Some(leaf_handle);
            self.last_leaf = Some(leaf_handle);
            self.len = 1;
            return (value_handle, None);
        };

        let mut path = Path::new();
        let leaf_handle = self.path_to_leaf(root, &key, &mut path);
        let leaf = self.nodes.get_mut(leaf_handle).as_leaf_mut();
        match leaf.search(&key, &self.cmp) {
            SearchResult::Found(index) => {
                // Keep the stored key; only the value changes.
                let value_handle = leaf.value(index);
                let old = core::mem::replace(self.values.get_mut(value_handle), value);
                (value_handle, Some(old))
            }
            SearchResult::NotFound(index) => {
                let value_handle = self.values.alloc(value);
                leaf.insert(index, key, value_handle);
                self.len += 1;
                if leaf.key_count() > MAX_KEYS {
                    self.split_leaf(leaf_handle, &mut path);
                }
                (value_handle, None)
            }
        }
    }

    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut V {
        self.values.get_mut(handle)
    }

    fn split_leaf(&mut self, leaf_handle: Handle, path: &mut Path) {
        let leaf = self.nodes.get_mut(leaf_handle).as_leaf_mut();
        let (separator, mut right) = leaf.split();
        let old_next = leaf.next();
        right.set_prev(Some(leaf_handle));
        right.set_next(old_next);

        let right_handle = self.nodes.alloc(Node::Leaf(right));
        self.nodes.get_mut(leaf_handle).as_leaf_mut().set_next(Some(right_handle));
        match old_next {
            Some(next) => self.nodes.get_mut(next).as_leaf_mut().set_prev(Some(right_handle)),
            None => self.last_leaf = Some(right_handle),
        }
        trace!(len = self.len, "split leaf");

        self.propagate_split(path, separator, right_handle);
    }

    fn propagate_split(&mut self, path: &mut Path, mut separator: K, mut new_child: Handle) {
        while let Some(elem) = path.pop() {
            let parent = self.nodes.get_mut(elem.node).as_internal_mut();
            parent.insert_child(elem.child_index, separator, new_child);
            if parent.key_count() <= MAX_KEYS {
                return;
            }

            let (median, right) = parent.split();
            separator = median;
            new_child = self.nodes.alloc(Node::Internal(right));
            trace!(depth = path.len(), "split internal node");
        }

        let old_root = self.root.expect("`RawNavTree::propagate_split()` - tree has no root!");
        let new_root = InternalNode::with_two_children(old_root, separator, new_child);
        self.root = Some(self.nodes.alloc(Node::Internal(new_root)));
        trace!(len = self.len, "grew new root");
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let root = self.root?;
        let mut path = Path::new();
        let leaf = self.path_to_leaf(root, key, &mut path);
        match self.nodes.get(leaf).as_leaf().search(key, &self.cmp) {
            SearchResult::Found(index) => Some(self.remove_at(leaf, index, &mut path)),
            SearchResult::NotFound(_) => None,
        }
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let mut path = Path::new();
        let leaf = self.edge_path(|_| 0, &mut path)?;
        Some(self.remove_at(leaf, 0, &mut path))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let mut path = Path::new();
        let leaf = self.edge_path(|internal| internal.child_count() - 1, &mut path)?;
        let index = self.nodes.get(leaf).as_leaf().key_count() - 1;
        Some(self.remove_at(leaf, index, &mut path))
    }

    /// Descends along the child chosen by `pick` at every level.
    fn edge_path(&self, pick: impl Fn(&InternalNode<K>) -> usize, path: &mut Path) -> Option<Handle> {
        let mut current = self.root?;
        while let Node::Internal(internal) = self.nodes.get(current) {
            let child_index = pick(internal);
            path.push(PathElement {
                node: current,
                child_index,
            });
            current = internal.child(child_index);
        }
        Some(current)
    }

    fn remove_at(&mut self, leaf_handle: Handle, index: usize, path: &mut Path) -> (K, V) {
        let leaf = self.nodes.get_mut(leaf_handle).as_leaf_mut();
        let (key, value_handle) = leaf.remove(index);
        let value = self.values.take(value_handle);
        self.len -= 1;

        if self.len == 0 {
            self.nodes.clear();
            self.reset();
            return (key, value);
        }

        let leaf = self.nodes.get(leaf_handle).as_leaf();
        if path.is_empty() || !leaf.is_at_minimum() {
            self.refresh_separator(leaf_handle, path);
        } else {
            self.rebalance_leaf(leaf_handle, path);
        }
        (key, value)
    }

    /// Tightens the separator that bounds `leaf` after its last key may have left.
    fn refresh_separator(&mut self, leaf_handle: Handle, path: &Path) {
        let Some(last_key) = self.nodes.get(leaf_handle).as_leaf().last_key().cloned() else {
            return;
        };
        for elem in path.iter().rev() {
            let parent = self.nodes.get_mut(elem.node).as_internal_mut();
            if elem.child_index < parent.key_count() {
                parent.set_key(elem.child_index, last_key);
                return;
            }
        }
    }

    fn rebalance_leaf(&mut self, leaf_handle: Handle, path: &mut Path) {
        let Some(&PathElement {
            node: parent_handle,
            child_index,
        }) = path.last()
        else {
            return;
        };
        let parent = self.nodes.get(parent_handle).as_internal();

        if child_index > 0 {
            let left = parent.child(child_index - 1);
            if self.nodes.get(left).as_leaf().can_lend() {
                self.borrow_from_left_leaf(leaf_handle, left, parent_handle, child_index);
                return;
            }
        }
        if child_index + 1 < parent.child_count() {
            let right = parent.child(child_index + 1);
            if self.nodes.get(right).as_leaf().can_lend() {
                self.borrow_from_right_leaf(leaf_handle, right, parent_handle, child_index);
                return;
            }
        }

        if child_index > 0 {
            let left = parent.child(child_index - 1);
            self.merge_leaves(left, leaf_handle, path, child_index - 1);
        } else {
            let right = parent.child(child_index + 1);
            self.merge_leaves(leaf_handle, right, path, child_index);
        }
    }

    fn borrow_from_left_leaf(&mut self, leaf_handle: Handle, left: Handle, parent: Handle, child_index: usize) {
        let left = self.nodes.get_mut(left).as_leaf_mut();
        let (key, value) = left.pop().expect("`borrow_from_left_leaf()` - lender is empty!");
        let left_max = left.last_key().cloned().expect("`borrow_from_left_leaf()` - lender drained!");

        self.nodes.get_mut(leaf_handle).as_leaf_mut().push_front(key, value);
        self.nodes.get_mut(parent).as_internal_mut().set_key(child_index - 1, left_max);
    }

    fn borrow_from_right_leaf(&mut self, leaf_handle: Handle, right: Handle, parent: Handle, child_index: usize) {
        let right = self.nodes.get_mut(right).as_leaf_mut();
        let (key, value) = right.pop_front().expect("`borrow_from_right_leaf()` - lender is empty!");

        // The borrowed key is now the largest under `leaf`, so it is its exact separator.
        self.nodes.get_mut(leaf_handle).as_leaf_mut().push(key.clone(), value);
        self.nodes.get_mut(parent).as_internal_mut().set_key(child_index, key);
    }

    fn merge_leaves(&mut self, left_handle: Handle, right_handle: Handle, path: &mut Path, separator_index: usize) {
        let right = self.nodes.take(right_handle).into_leaf();
        let left = self.nodes.get_mut(left_handle).as_leaf_mut();
        left.merge_with_right(right);

        match left.next() {
            Some(next) => self.nodes.get_mut(next).as_leaf_mut().set_prev(Some(left_handle)),
            None => self.last_leaf = Some(left_handle),
        }
        trace!(len = self.len, "merged leaves");

        self.remove_from_parent(path, separator_index);
    }

    /// Drops the separator at `separator_index` (and the child to its right,
    /// already merged away) from the deepest node on `path`, then repairs that node.
    fn remove_from_parent(&mut self, path: &mut Path, separator_index: usize) {
        let parent_handle = path.pop().expect("`RawNavTree::remove_from_parent()` - empty path!").node;
        let parent = self.nodes.get_mut(parent_handle).as_internal_mut();
        let _ = parent.remove_child(separator_index);

        if path.is_empty() {
            if parent.child_count() == 1 {
                let only_child = parent.child(0);
                self.nodes.free(parent_handle);
                self.root = Some(only_child);
                trace!(len = self.len, "collapsed root");
            }
            return;
        }

        if parent.is_at_minimum() {
            self.rebalance_internal(parent_handle, path);
        }
    }

    fn rebalance_internal(&mut self, node_handle: Handle, path: &mut Path) {
        let Some(&PathElement {
            node: parent_handle,
            child_index,
        }) = path.last()
        else {
            return;
        };
        let parent = self.nodes.get(parent_handle).as_internal();

        if child_index > 0 {
            let left = parent.child(child_index - 1);
            if self.nodes.get(left).as_internal().can_lend() {
                self.borrow_from_left_internal(node_handle, left, parent_handle, child_index);
                return;
            }
        }
        if child_index + 1 < parent.child_count() {
            let right = parent.child(child_index + 1);
            if self.nodes.get(right).as_internal().can_lend() {
                self.borrow_from_right_internal(node_handle, right, parent_handle, child_index);
                return;
            }
        }

        if child_index > 0 {
            let left = parent.child(child_index - 1);
            self.merge_internals(left, node_handle, path, child_index - 1);
        } else {
            let right = parent.child(child_index + 1);
            self.merge_internals(node_handle, right, path, child_index);
        }
    }

    fn borrow_from_left_internal(&mut self, node: Handle, left: Handle, parent: Handle, child_index: usize) {
        let parent_separator = self.nodes.get(parent).as_internal().key(child_index - 1).clone();
        let (left_max, moved) = self
            .nodes
            .get_mut(left)
            .as_internal_mut()
            .pop_child()
            .expect("`borrow_from_left_internal()` - lender is empty!");

        self.nodes.get_mut(node).as_internal_mut().push_child_front(moved, parent_separator);
        self.nodes.get_mut(parent).as_internal_mut().set_key(child_index - 1, left_max);
    }

    fn borrow_from_right_internal(&mut self, node: Handle, right: Handle, parent: Handle, child_index: usize) {
        let parent_separator = self.nodes.get(parent).as_internal().key(child_index).clone();
        let (right_min, moved) = self
            .nodes
            .get_mut(right)
            .as_internal_mut()
            .pop_child_front()
            .expect("`borrow_from_right_internal()` - lender is empty!");

        self.nodes.get_mut(node).as_internal_mut().push_child(parent_separator, moved);
        self.nodes.get_mut(parent).as_internal_mut().set_key(child_index, right_min);
    }

    fn merge_internals(&mut self, left_handle: Handle, right_handle: Handle, path: &mut Path, separator_index: usize) {
        let parent = path.last().expect("`RawNavTree::merge_internals()` - empty path!").node;
        let separator = self.nodes.get(parent).as_internal().key(separator_index).clone();
        let right = self.nodes.take(right_handle).into_internal();
        self.nodes.get_mut(left_handle).as_internal_mut().merge_with_right(separator, right);
        trace!(depth = path.len(), "merged internal nodes");

        self.remove_from_parent(path, separator_index);
    }
}
