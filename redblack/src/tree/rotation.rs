//! Rotation primitives.
//!
//! A rotation re-roots a two-node subtree while preserving the in-order
//! sequence. Rotations never recolor; the fixups decide colors.
//!
//! ```text
//!        x                          y
//!       / \   rotate(x, Left)      / \
//!      a   y   -------------->    x   c
//!         / \  <--------------   / \
//!        b   c  rotate(y, Right) a   b
//! ```

use super::node::{NodeId, Side};
use super::RedBlackTree;

impl<K, V, O> RedBlackTree<K, V, O> {
    /// Rotates `x` down toward `side`; its child on the opposite side takes its
    /// place. `rotate(x, Side::Left)` is a left rotation.
    pub(crate) fn rotate(&mut self, x: NodeId, side: Side) {
        let up = self.nodes[x].child(side.opposite());
        debug_assert!(!up.is_nil(), "cannot rotate {x:?} without a child to promote");
        log::trace!("rotate {:?} {:?} around {:?}", side, x, up);

        // The promoted node's inner subtree moves across to x.
        let inner = self.nodes[up].child(side);
        *self.nodes[x].child_mut(side.opposite()) = inner;
        if !inner.is_nil() {
            self.nodes[inner].parent = x;
        }

        let parent = self.nodes[x].parent;
        self.nodes[up].parent = parent;
        if parent.is_nil() {
            self.root = up;
        } else if self.nodes[parent].left == x {
            self.nodes[parent].left = up;
        } else {
            self.nodes[parent].right = up;
        }

        *self.nodes[up].child_mut(side) = x;
        self.nodes[x].parent = up;
    }
}
