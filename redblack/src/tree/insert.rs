//! Insertion and the insertion fixup.

use super::node::{Color, NodeId, Side};
use super::RedBlackTree;
use crate::order::KeyOrder;

impl<K, V, O: KeyOrder<K>> RedBlackTree<K, V, O> {
    /// Inserts `key` with `value` and returns the new node's handle.
    ///
    /// Equal keys are kept side by side: the new entry is placed after every
    /// entry already equal to it.
    pub fn insert(&mut self, key: K, value: V) -> NodeId {
        let mut parent = NodeId::NIL;
        let mut cursor = self.root;
        let mut goes_left = false;
        while !cursor.is_nil() {
            parent = cursor;
            goes_left = self.is_less(&key, self.nodes.key(cursor));
            cursor = if goes_left {
                self.nodes[cursor].left
            } else {
                self.nodes[cursor].right
            };
        }

        let node = self.nodes.allocate(key, value, parent);
        if parent.is_nil() {
            self.root = node;
        } else if goes_left {
            self.nodes[parent].left = node;
        } else {
            self.nodes[parent].right = node;
        }
        self.len += 1;

        self.insert_fixup(node);
        self.verify_after("insert");
        node
    }
}

impl<K, V, O> RedBlackTree<K, V, O> {
    /// Restores the red-black invariants after `node` was attached red.
    fn insert_fixup(&mut self, mut node: NodeId) {
        // The sentinel is black, so a red parent is never the root's parent.
        while self.nodes[self.nodes[node].parent].is_red() {
            let parent = self.nodes[node].parent;
            let grandparent = self.nodes[parent].parent;
            let side = if self.nodes[grandparent].left == parent {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.nodes[grandparent].child(side.opposite());

            if self.nodes[uncle].is_red() {
                log::trace!("insert fixup: red uncle at {:?}", grandparent);
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            if self.nodes[parent].child(side.opposite()) == node {
                log::trace!("insert fixup: inner child {:?}", node);
                node = parent;
                self.rotate(node, side);
            }

            log::trace!("insert fixup: outer child {:?}", node);
            let parent = self.nodes[node].parent;
            let grandparent = self.nodes[parent].parent;
            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
        }
        let root = self.root;
        self.nodes[root].color = Color::Black;
    }
}
