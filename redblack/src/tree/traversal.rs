//! Ordered iteration and pruned range scans.
//!
//! Every walk keeps its own explicit stack of pending nodes rather than
//! recursing, so a walk costs O(height) memory and two walks never share
//! state. Bounded walks skip whole subtrees that fall outside the interval,
//! which makes a range scan O(height + matches).

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::NodeId;
use super::RedBlackTree;
use crate::order::KeyOrder;

/// Pending nodes of a walk, at most one per level. A tree holding
/// [`MAX_NODES`](super::MAX_NODES) entries is under 64 levels deep, so the
/// stack never leaves its inline buffer.
type NodeStack = SmallVec<[NodeId; 64]>;

/// Closed key interval with optional ends, walked in one direction.
pub(crate) struct Walk<'a, K> {
    stack: NodeStack,
    low: Option<&'a K>,
    high: Option<&'a K>,
    descending: bool,
}

impl<'a, K> Walk<'a, K> {
    pub(crate) fn new<V, O: KeyOrder<K>>(
        tree: &RedBlackTree<K, V, O>,
        low: Option<&'a K>,
        high: Option<&'a K>,
        descending: bool,
    ) -> Self {
        let mut walk = Walk {
            stack: NodeStack::new(),
            low,
            high,
            descending,
        };
        walk.descend(tree, tree.root);
        walk
    }

    fn below_low<V, O: KeyOrder<K>>(&self, tree: &RedBlackTree<K, V, O>, key: &K) -> bool {
        self.low.is_some_and(|low| tree.is_less(key, low))
    }

    fn above_high<V, O: KeyOrder<K>>(&self, tree: &RedBlackTree<K, V, O>, key: &K) -> bool {
        self.high.is_some_and(|high| tree.is_less(high, key))
    }

    /// Pushes the path toward the first node of `node`'s subtree in walk
    /// order, stepping past nodes on the wrong side of the near bound.
    fn descend<V, O: KeyOrder<K>>(&mut self, tree: &RedBlackTree<K, V, O>, mut node: NodeId) {
        while !node.is_nil() {
            let key = tree.nodes.key(node);
            if self.descending {
                if self.above_high(tree, key) {
                    node = tree.nodes[node].left;
                } else {
                    self.stack.push(node);
                    node = tree.nodes[node].right;
                }
            } else if self.below_low(tree, key) {
                node = tree.nodes[node].right;
            } else {
                self.stack.push(node);
                node = tree.nodes[node].left;
            }
        }
    }

    /// Next node in walk order, or `None` once the far bound is crossed.
    pub(crate) fn next_node<V, O: KeyOrder<K>>(
        &mut self,
        tree: &RedBlackTree<K, V, O>,
    ) -> Option<NodeId> {
        let node = self.stack.pop()?;
        let key = tree.nodes.key(node);
        let past_end = if self.descending {
            self.below_low(tree, key)
        } else {
            self.above_high(tree, key)
        };
        if past_end {
            self.stack.clear();
            return None;
        }
        let next = if self.descending {
            tree.nodes[node].left
        } else {
            tree.nodes[node].right
        };
        self.descend(tree, next);
        Some(node)
    }
}

/// Iterator over the pairs of a [`RedBlackTree`], in ascending or descending
/// key order, optionally limited to a closed key interval.
pub struct Iter<'a, K, V, O> {
    tree: &'a RedBlackTree<K, V, O>,
    walk: Walk<'a, K>,
}

impl<'a, K, V, O: KeyOrder<K>> Iterator for Iter<'a, K, V, O> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = self.walk.next_node(tree)?;
        tree.nodes.entry(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.tree.len()))
    }
}

impl<K, V, O: KeyOrder<K>> FusedIterator for Iter<'_, K, V, O> {}

impl<K, V, O: KeyOrder<K>> RedBlackTree<K, V, O> {
    /// Iterates over all pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V, O> {
        self.walk(None, None, false)
    }

    /// Iterates over all pairs in descending key order.
    pub fn iter_rev(&self) -> Iter<'_, K, V, O> {
        self.walk(None, None, true)
    }

    /// Iterates in ascending order over the pairs with `low <= key <= high`.
    /// A `None` bound leaves that end open. An inverted interval yields nothing.
    pub fn range<'a>(&'a self, low: Option<&'a K>, high: Option<&'a K>) -> Iter<'a, K, V, O> {
        self.walk(low, high, false)
    }

    /// Same interval as [`range`](Self::range), in descending order.
    pub fn range_rev<'a>(
        &'a self,
        low: Option<&'a K>,
        high: Option<&'a K>,
    ) -> Iter<'a, K, V, O> {
        self.walk(low, high, true)
    }

    fn walk<'a>(
        &'a self,
        low: Option<&'a K>,
        high: Option<&'a K>,
        descending: bool,
    ) -> Iter<'a, K, V, O> {
        Iter {
            tree: self,
            walk: Walk::new(self, low, high, descending),
        }
    }

    /// Calls `f` on every pair in ascending key order.
    pub fn traverse<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.iter().for_each(|(key, value)| f(key, value));
    }

    /// Calls `f` on every pair in descending key order.
    pub fn traverse_rev<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.iter_rev().for_each(|(key, value)| f(key, value));
    }

    /// Calls `f` once for every pair with `low <= key <= high`, in ascending
    /// key order.
    ///
    /// ```rust
    /// use redblack::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, char> =
    ///     [(1, 'a'), (5, 'e'), (3, 'c'), (9, 'i')].into_iter().collect();
    /// let mut seen = String::new();
    /// tree.range_query(|_, v| seen.push(*v), &2, &5);
    /// assert_eq!(seen, "ce");
    /// ```
    pub fn range_query<F: FnMut(&K, &V)>(&self, mut f: F, low: &K, high: &K) {
        self.range(Some(low), Some(high))
            .for_each(|(key, value)| f(key, value));
    }

    /// Collects the pairs with `low <= key <= high` in ascending order. A
    /// missing bound defaults to the tree's minimum or maximum key.
    pub fn list<'a>(&'a self, low: Option<&'a K>, high: Option<&'a K>) -> Vec<(&'a K, &'a V)> {
        self.range(low, high).collect()
    }

    /// Keys of [`list`](Self::list).
    pub fn list_keys<'a>(&'a self, low: Option<&'a K>, high: Option<&'a K>) -> Vec<&'a K> {
        self.range(low, high).map(|(key, _)| key).collect()
    }
}
