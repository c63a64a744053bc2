//! Point lookup and positional navigation.

use super::node::NodeId;
use super::RedBlackTree;
use crate::order::KeyOrder;

impl<K, V, O: KeyOrder<K>> RedBlackTree<K, V, O> {
    /// Finds a node whose key equals `key`.
    ///
    /// The descent stops at the first equal key it meets. With duplicates
    /// that is the equal node closest to the root on the search path, which
    /// is not necessarily the earliest inserted one; use
    /// [`first_at_least`](Self::first_at_least) for the leftmost equal key.
    pub fn search_node(&self, key: &K) -> Option<NodeId> {
        let mut cursor = self.root;
        while !cursor.is_nil() {
            let current = self.nodes.key(cursor);
            if self.order.equals(key, current) {
                return Some(cursor);
            }
            cursor = if self.is_less(key, current) {
                self.nodes[cursor].left
            } else {
                self.nodes[cursor].right
            };
        }
        None
    }

    /// Looks up `key` and returns the stored pair.
    pub fn search(&self, key: &K) -> Option<(&K, &V)> {
        self.search_node(key).and_then(|id| self.nodes.entry(id))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.search(key).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.search_node(key)?;
        self.nodes.value_mut(id)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search_node(key).is_some()
    }

    /// Resolves a handle to its pair. Returns `None` for a handle whose
    /// entry has been removed.
    pub fn entry(&self, node: NodeId) -> Option<(&K, &V)> {
        self.nodes.entry(node)
    }

    /// Node with the smallest key.
    pub fn first_node(&self) -> Option<NodeId> {
        (!self.root.is_nil()).then(|| self.subtree_minimum(self.root))
    }

    /// Node with the largest key.
    pub fn last_node(&self) -> Option<NodeId> {
        (!self.root.is_nil()).then(|| self.subtree_maximum(self.root))
    }

    pub fn minimum(&self) -> Option<(&K, &V)> {
        self.first_node().and_then(|id| self.nodes.entry(id))
    }

    pub fn maximum(&self) -> Option<(&K, &V)> {
        self.last_node().and_then(|id| self.nodes.entry(id))
    }

    /// Next node in ascending order, or `None` after the last node.
    ///
    /// `node` must be a live handle of this tree; a stale handle is a
    /// programming error, caught by an assertion in debug builds.
    pub fn successor(&self, node: NodeId) -> Option<NodeId> {
        if !self.is_live_handle(node) {
            return None;
        }
        let next = self.next_node(node);
        (!next.is_nil()).then_some(next)
    }

    /// Previous node in ascending order, or `None` before the first node.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        if !self.is_live_handle(node) {
            return None;
        }
        let prev = self.prev_node(node);
        (!prev.is_nil()).then_some(prev)
    }

    /// Smallest entry whose key is strictly greater than `key`, skipping
    /// every entry equal to it.
    pub fn first_greater(&self, key: &K) -> Option<(&K, &V)> {
        let found = self.lower_bound(key, true);
        self.nodes.entry(found)
    }

    /// Smallest entry whose key is not less than `key`. With duplicates this
    /// is the leftmost equal entry.
    pub fn first_at_least(&self, key: &K) -> Option<(&K, &V)> {
        let found = self.lower_bound(key, false);
        self.nodes.entry(found)
    }

    /// Largest entry whose key is strictly less than `key`.
    pub fn last_less(&self, key: &K) -> Option<(&K, &V)> {
        let found = self.upper_bound(key, true);
        self.nodes.entry(found)
    }

    /// Largest entry whose key is not greater than `key`. With duplicates
    /// this is the rightmost equal entry.
    pub fn last_at_most(&self, key: &K) -> Option<(&K, &V)> {
        let found = self.upper_bound(key, false);
        self.nodes.entry(found)
    }

    /// Leftmost node `n` with `key < n` (strict) or `!(n < key)`.
    fn lower_bound(&self, key: &K, strict: bool) -> NodeId {
        let mut best = NodeId::NIL;
        let mut cursor = self.root;
        while !cursor.is_nil() {
            let current = self.nodes.key(cursor);
            let qualifies = if strict {
                self.is_less(key, current)
            } else {
                !self.is_less(current, key)
            };
            if qualifies {
                best = cursor;
                cursor = self.nodes[cursor].left;
            } else {
                cursor = self.nodes[cursor].right;
            }
        }
        best
    }

    /// Rightmost node `n` with `n < key` (strict) or `!(key < n)`.
    fn upper_bound(&self, key: &K, strict: bool) -> NodeId {
        let mut best = NodeId::NIL;
        let mut cursor = self.root;
        while !cursor.is_nil() {
            let current = self.nodes.key(cursor);
            let qualifies = if strict {
                self.is_less(current, key)
            } else {
                !self.is_less(key, current)
            };
            if qualifies {
                best = cursor;
                cursor = self.nodes[cursor].right;
            } else {
                cursor = self.nodes[cursor].left;
            }
        }
        best
    }
}

impl<K, V, O> RedBlackTree<K, V, O> {
    fn is_live_handle(&self, node: NodeId) -> bool {
        let live = self.nodes.is_live(node);
        debug_assert!(live, "{node:?} is not a live node of this tree");
        live
    }

    pub(crate) fn subtree_minimum(&self, mut node: NodeId) -> NodeId {
        while !self.nodes[node].left.is_nil() {
            node = self.nodes[node].left;
        }
        node
    }

    pub(crate) fn subtree_maximum(&self, mut node: NodeId) -> NodeId {
        while !self.nodes[node].right.is_nil() {
            node = self.nodes[node].right;
        }
        node
    }

    /// In-order successor, or the sentinel.
    pub(crate) fn next_node(&self, mut node: NodeId) -> NodeId {
        if !self.nodes[node].right.is_nil() {
            return self.subtree_minimum(self.nodes[node].right);
        }
        let mut parent = self.nodes[node].parent;
        while !parent.is_nil() && node == self.nodes[parent].right {
            node = parent;
            parent = self.nodes[parent].parent;
        }
        parent
    }

    /// In-order predecessor, or the sentinel.
    pub(crate) fn prev_node(&self, mut node: NodeId) -> NodeId {
        if !self.nodes[node].left.is_nil() {
            return self.subtree_maximum(self.nodes[node].left);
        }
        let mut parent = self.nodes[node].parent;
        while !parent.is_nil() && node == self.nodes[parent].left {
            node = parent;
            parent = self.nodes[parent].parent;
        }
        parent
    }
}

#[cfg(test)]
mod tests {
    use crate::order::NaturalOrder;
    use crate::tree::RedBlackTree;

    fn sample() -> RedBlackTree<i32, String> {
        let mut tree = RedBlackTree::new(NaturalOrder);
        for key in [15, 6, 18, 3, 7, 17, 20, 2, 4, 13, 9] {
            tree.insert(key, format!("v{key}"));
        }
        tree
    }

    #[test]
    fn search_finds_present_keys() {
        let tree = sample();
        assert_eq!(tree.search(&13), Some((&13, &"v13".to_string())));
        assert_eq!(tree.get(&2).map(String::as_str), Some("v2"));
        assert!(tree.contains_key(&20));
    }

    #[test]
    fn search_misses_absent_keys() {
        let tree = sample();
        assert_eq!(tree.search(&5), None);
        assert_eq!(tree.search(&100), None);
        assert!(!tree.contains_key(&-1));

        let empty: RedBlackTree<i32, ()> = RedBlackTree::new(NaturalOrder);
        assert_eq!(empty.search(&1), None);
    }

    #[test]
    fn get_mut_updates_value() {
        let mut tree = sample();
        if let Some(value) = tree.get_mut(&9) {
            value.push('!');
        }
        assert_eq!(tree.get(&9).map(String::as_str), Some("v9!"));
        assert!(tree.get_mut(&10).is_none());
    }

    #[test]
    fn minimum_and_maximum() {
        let tree = sample();
        assert_eq!(tree.minimum().map(|(k, _)| *k), Some(2));
        assert_eq!(tree.maximum().map(|(k, _)| *k), Some(20));

        let empty: RedBlackTree<i32, ()> = RedBlackTree::new(NaturalOrder);
        assert!(empty.minimum().is_none());
        assert!(empty.maximum().is_none());
        assert!(empty.first_node().is_none());
        assert!(empty.last_node().is_none());
    }

    #[test]
    fn successor_and_predecessor() {
        let tree = sample();
        let nine = tree.search_node(&9).unwrap();
        let next = tree.successor(nine).unwrap();
        let prev = tree.predecessor(nine).unwrap();
        assert_eq!(tree.entry(next).map(|(k, _)| *k), Some(13));
        assert_eq!(tree.entry(prev).map(|(k, _)| *k), Some(7));

        // Boundaries
        let first = tree.first_node().unwrap();
        let last = tree.last_node().unwrap();
        assert!(tree.predecessor(first).is_none());
        assert!(tree.successor(last).is_none());
    }

    #[test]
    fn successor_chain_visits_every_key() {
        let tree = sample();
        let mut keys = Vec::new();
        let mut cursor = tree.first_node();
        while let Some(id) = cursor {
            keys.push(*tree.entry(id).unwrap().0);
            cursor = tree.successor(id);
        }
        assert_eq!(keys, vec![2, 3, 4, 6, 7, 9, 13, 15, 17, 18, 20]);
    }

    #[test]
    fn predecessor_chain_visits_every_key_backwards() {
        let tree = sample();
        let mut keys = Vec::new();
        let mut cursor = tree.last_node();
        while let Some(id) = cursor {
            keys.push(*tree.entry(id).unwrap().0);
            cursor = tree.predecessor(id);
        }
        assert_eq!(keys, vec![20, 18, 17, 15, 13, 9, 7, 6, 4, 3, 2]);
    }

    #[test]
    fn positional_queries() {
        let tree = sample();
        let key_of = |pair: Option<(&i32, &String)>| pair.map(|(k, _)| *k);

        assert_eq!(key_of(tree.first_greater(&9)), Some(13));
        assert_eq!(key_of(tree.first_greater(&10)), Some(13));
        assert_eq!(key_of(tree.first_greater(&20)), None);
        assert_eq!(key_of(tree.first_at_least(&9)), Some(9));
        assert_eq!(key_of(tree.first_at_least(&10)), Some(13));
        assert_eq!(key_of(tree.first_at_least(&1)), Some(2));

        assert_eq!(key_of(tree.last_less(&9)), Some(7));
        assert_eq!(key_of(tree.last_less(&2)), None);
        assert_eq!(key_of(tree.last_at_most(&9)), Some(9));
        assert_eq!(key_of(tree.last_at_most(&16)), Some(15));
        assert_eq!(key_of(tree.last_at_most(&100)), Some(20));
    }

    #[test]
    fn positional_queries_skip_duplicate_clusters() {
        let mut tree = RedBlackTree::new(NaturalOrder);
        for (i, key) in [5, 1, 5, 9, 5, 5, 3].into_iter().enumerate() {
            tree.insert(key, i);
        }
        assert_eq!(tree.first_greater(&5).map(|(k, _)| *k), Some(9));
        assert_eq!(tree.last_less(&5).map(|(k, _)| *k), Some(3));
        // Leftmost and rightmost of the cluster are the first and last inserted.
        assert_eq!(tree.first_at_least(&5), Some((&5, &0)));
        assert_eq!(tree.last_at_most(&5), Some((&5, &5)));
        assert!(tree.search(&5).is_some());
    }

    #[test]
    fn search_with_duplicates_stops_nearest_the_root() {
        let mut tree = RedBlackTree::new(NaturalOrder);
        for value in 0..3 {
            tree.insert(5, value);
        }
        // The third insert rotates the middle copy up to the root.
        let hit = tree.search_node(&5).unwrap();
        assert_eq!(hit, tree.root);
        assert_eq!(tree.search(&5), Some((&5, &1)));
        assert_eq!(tree.first_at_least(&5), Some((&5, &0)));
        assert_eq!(tree.last_at_most(&5), Some((&5, &2)));

        // delete removes the copy search finds.
        assert_eq!(tree.delete(&5), Some((5, 1)));
        assert_eq!(tree.list(None, None), vec![(&5, &0), (&5, &2)]);
    }

    #[test]
    fn entry_of_removed_node_is_none() {
        let mut tree = sample();
        let two = tree.search_node(&2).unwrap();
        tree.delete(&2);
        assert!(tree.entry(two).is_none());
    }
}
