use super::arena::Arena;
use super::node::Node;
use super::raw_nav_tree::Position;

/// Walks the leaf chain between two inclusive positions from either end.
///
/// Holds shared borrows of both arenas, so the tree cannot change while a
/// cursor is alive.
pub(crate) struct Cursor<'a, K, V> {
    nodes: &'a Arena<Node<K>>,
    values: &'a Arena<V>,
    front: Option<Position>,
    back: Option<Position>,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            values: self.values,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(
        nodes: &'a Arena<Node<K>>,
        values: &'a Arena<V>,
        front: Option<Position>,
        back: Option<Position>,
    ) -> Self {
        let (front, back) = match (front, back) {
            (Some(front), Some(back)) => (Some(front), Some(back)),
            _ => (None, None),
        };
        Self {
            nodes,
            values,
            front,
            back,
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.front.is_none()
    }

    fn entry(&self, (leaf, index): Position) -> (&'a K, &'a V) {
        let leaf = self.nodes.get(leaf).as_leaf();
        (leaf.key(index), self.values.get(leaf.value(index)))
    }

    /// Marks the walk finished if `taken` was the last position left.
    fn finish_if_met(&mut self, taken: Position) -> bool {
        if self.front == Some(taken) && self.back == Some(taken) {
            self.front = None;
            self.back = None;
            return true;
        }
        false
    }
}

impl<'a, K, V> Iterator for Cursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let position @ (leaf, index) = self.front?;
        let item = self.entry(position);
        if !self.finish_if_met(position) {
            let node = self.nodes.get(leaf).as_leaf();
            self.front = if index + 1 < node.key_count() {
                Some((leaf, index + 1))
            } else {
                node.next().map(|next| (next, 0))
            };
        }
        Some(item)
    }
}

impl<K, V> DoubleEndedIterator for Cursor<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let position @ (leaf, index) = self.back?;
        let item = self.entry(position);
        if !self.finish_if_met(position) {
            self.back = if index > 0 {
                Some((leaf, index - 1))
            } else {
                let prev = self.nodes.get(leaf).as_leaf().prev();
                prev.map(|prev| (prev, self.nodes.get(prev).as_leaf().key_count() - 1))
            };
        }
        Some(item)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::compare::Natural;
    use crate::raw::RawNavTree;
    use alloc::vec::Vec;

    fn tree_of(count: i32) -> RawNavTree<i32, i32, Natural> {
        let mut tree = RawNavTree::new(Natural);
        for key in 0..count {
            tree.insert(key, -key);
        }
        tree
    }

    #[test]
    fn walks_across_leaves_both_ways() {
        let tree = tree_of(100);
        let forward: Vec<i32> = tree.cursor(tree.first_position(), tree.last_position()).map(|(k, _)| *k).collect();
        let backward: Vec<i32> =
            tree.cursor(tree.first_position(), tree.last_position()).rev().map(|(k, _)| *k).collect();
        assert_eq!(forward, (0..100).collect::<Vec<_>>());
        assert_eq!(backward, (0..100).rev().collect::<Vec<_>>());
    }

    #[test]
    fn ends_meet_exactly_once() {
        let tree = tree_of(40);
        let mut cursor = tree.cursor(tree.ceiling_position(&10, false), tree.floor_position(&29, false));
        let mut seen = Vec::new();
        loop {
            let Some((front, _)) = cursor.next() else { break };
            seen.push(*front);
            let Some((back, _)) = cursor.next_back() else { break };
            seen.push(*back);
        }
        seen.sort_unstable();
        assert_eq!(seen, (10..30).collect::<Vec<_>>());
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next_back(), None);
    }

    #[test]
    fn missing_end_gives_empty_walk() {
        let tree = tree_of(5);
        let mut cursor = tree.cursor(tree.first_position(), None);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.next(), None);
    }
}
