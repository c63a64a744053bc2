//! Deletion and the deletion fixup.

use super::node::{Color, NodeId, Side};
use super::RedBlackTree;
use crate::order::KeyOrder;

impl<K, V, O: KeyOrder<K>> RedBlackTree<K, V, O> {
    /// Removes an entry whose key equals `key` and returns it.
    ///
    /// The entry removed is the one [`search`](Self::search) would return.
    /// Returns `None`, leaving the tree untouched, when no key matches.
    pub fn delete(&mut self, key: &K) -> Option<(K, V)> {
        let node = self.search_node(key)?;
        self.remove_node(node)
    }

    /// Removes the entry behind a handle and returns it.
    ///
    /// When the node has two children the in-order successor's entry moves
    /// into this node's slot, so the successor's old handle becomes stale
    /// while `node` stays valid and now names the successor's entry.
    pub fn remove_node(&mut self, node: NodeId) -> Option<(K, V)> {
        if !self.nodes.is_live(node) {
            debug_assert!(false, "{node:?} is not a live node of this tree");
            return None;
        }

        let spliced = if self.nodes[node].left.is_nil() || self.nodes[node].right.is_nil() {
            node
        } else {
            self.subtree_minimum(self.nodes[node].right)
        };
        let child = if self.nodes[spliced].left.is_nil() {
            self.nodes[spliced].right
        } else {
            self.nodes[spliced].left
        };

        // When child is the sentinel this parks the parent link on it for
        // the fixup below.
        let parent = self.nodes[spliced].parent;
        self.nodes[child].parent = parent;
        if parent.is_nil() {
            self.root = child;
        } else if self.nodes[parent].left == spliced {
            self.nodes[parent].left = child;
        } else {
            self.nodes[parent].right = child;
        }

        if spliced != node {
            self.nodes.swap_entries(spliced, node);
        }
        let removed_color = self.nodes[spliced].color;
        let removed = self.nodes.release(spliced);
        self.len -= 1;

        if removed_color == Color::Black {
            self.delete_fixup(child);
        }
        self.nodes[NodeId::NIL].parent = NodeId::NIL;

        self.verify_after("delete");
        removed
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first_node()?;
        self.remove_node(first)
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last_node()?;
        self.remove_node(last)
    }
}

impl<K, V, O> RedBlackTree<K, V, O> {
    /// Restores the black height after a black node was spliced out above
    /// `node`, which carries the extra black.
    fn delete_fixup(&mut self, mut node: NodeId) {
        while node != self.root && self.nodes[node].is_black() {
            let parent = self.nodes[node].parent;
            let side = if self.nodes[parent].left == node {
                Side::Left
            } else {
                Side::Right
            };
            let mut sibling = self.nodes[parent].child(side.opposite());

            if self.nodes[sibling].is_red() {
                log::trace!("delete fixup: red sibling {:?}", sibling);
                self.nodes[sibling].color = Color::Black;
                self.nodes[parent].color = Color::Red;
                self.rotate(parent, side);
                sibling = self.nodes[parent].child(side.opposite());
            }

            let near = self.nodes[sibling].child(side);
            let far = self.nodes[sibling].child(side.opposite());
            if self.nodes[near].is_black() && self.nodes[far].is_black() {
                log::trace!("delete fixup: black nephews under {:?}", sibling);
                self.nodes[sibling].color = Color::Red;
                node = parent;
                continue;
            }

            if self.nodes[far].is_black() {
                log::trace!("delete fixup: red near nephew {:?}", near);
                self.nodes[near].color = Color::Black;
                self.nodes[sibling].color = Color::Red;
                self.rotate(sibling, side.opposite());
                sibling = self.nodes[parent].child(side.opposite());
            }

            log::trace!("delete fixup: red far nephew under {:?}", sibling);
            self.nodes[sibling].color = self.nodes[parent].color;
            self.nodes[parent].color = Color::Black;
            let far = self.nodes[sibling].child(side.opposite());
            self.nodes[far].color = Color::Black;
            self.rotate(parent, side);
            node = self.root;
        }
        self.nodes[node].color = Color::Black;
    }
}
