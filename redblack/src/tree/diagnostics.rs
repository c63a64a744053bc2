//! Size, depth and invariant verification.
//!
//! These walks are O(n) and meant for tests and debugging, not for the hot
//! path. Like the iterators they use explicit stacks, so they stay safe on a
//! tree whose height bound has been broken by a bug.

use super::node::NodeId;
use super::traversal::Walk;
use super::RedBlackTree;
use crate::errors::{TreeError, TreeResult};
use crate::order::KeyOrder;

/// Snapshot of a tree's shape and storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Live entries
    pub len: usize,
    /// Arena slots in use or on the free list, sentinel excluded
    pub slots: usize,
    /// Vacant slots waiting for reuse
    pub free_slots: usize,
    /// Nodes on the longest root-to-leaf path
    pub depth: usize,
    /// Black nodes on the path with the most of them
    pub black_depth: usize,
}

impl<K, V, O: KeyOrder<K>> RedBlackTree<K, V, O> {
    /// Counts entries by walking the whole tree. O(n); [`len`](Self::len)
    /// is the O(1) equivalent.
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Returns `(maximum node depth, maximum black depth)`.
    ///
    /// Both are measured from the root, which counts as depth 1; an empty
    /// tree reports `(0, 0)`.
    pub fn depth(&self) -> (usize, usize) {
        let mut max_depth = 0;
        let mut max_black = 0;
        let mut stack: Vec<(NodeId, usize, usize)> = Vec::new();
        if !self.root.is_nil() {
            stack.push((self.root, 1, 1));
        }
        while let Some((node, depth, black)) = stack.pop() {
            max_depth = max_depth.max(depth);
            max_black = max_black.max(black);
            for child in [self.nodes[node].left, self.nodes[node].right] {
                if !child.is_nil() {
                    let child_black = black + usize::from(self.nodes[child].is_black());
                    stack.push((child, depth + 1, child_black));
                }
            }
        }
        (max_depth, max_black)
    }

    /// Checks that every node sees the same number of black nodes on each
    /// path down to the sentinel, and returns that number for the root.
    ///
    /// Only the black-height rule is checked here; see
    /// [`check_invariants`](Self::check_invariants) for the full set.
    pub fn validate(&self) -> TreeResult<usize> {
        // Parents precede children in pre-order, so walking it backwards
        // settles both children before their parent.
        let order = self.preorder();
        let mut heights = vec![0usize; self.nodes.slot_count()];
        for node in order.into_iter().rev() {
            let left = heights[self.nodes[node].left.index()];
            let right = heights[self.nodes[node].right.index()];
            if left != right {
                log::error!(
                    "[{}] black height mismatch at {:?}: left {}, right {}",
                    self.config.name(),
                    node,
                    left,
                    right
                );
                return Err(TreeError::BlackHeightMismatch { node, left, right });
            }
            heights[node.index()] = left + usize::from(self.nodes[node].is_black());
        }
        Ok(heights[self.root.index()])
    }

    /// Checks every structural invariant: the sentinel and root are black,
    /// parent links agree with child links, no red node has a red child,
    /// keys are in order, black heights agree, and the cached length matches.
    pub fn check_invariants(&self) -> TreeResult<()> {
        if !self.nodes[NodeId::NIL].is_black() {
            return Err(TreeError::SentinelNotBlack);
        }
        if self.nodes[self.root].is_red() {
            return Err(TreeError::RedRoot);
        }
        if !self.root.is_nil() && !self.nodes[self.root].parent.is_nil() {
            return Err(TreeError::BrokenLink { node: self.root });
        }

        let order = self.preorder();
        for &node in &order {
            for child in [self.nodes[node].left, self.nodes[node].right] {
                if child.is_nil() {
                    continue;
                }
                if self.nodes[child].parent != node || !self.nodes.is_live(child) {
                    return Err(TreeError::BrokenLink { node: child });
                }
                if self.nodes[node].is_red() && self.nodes[child].is_red() {
                    return Err(TreeError::RedViolation { node });
                }
            }
        }
        if order.len() != self.len {
            return Err(TreeError::LengthMismatch {
                cached: self.len,
                counted: order.len(),
            });
        }

        let mut walk = Walk::new(self, None, None, false);
        let mut previous: Option<NodeId> = None;
        while let Some(node) = walk.next_node(self) {
            if let Some(prev) = previous {
                if self.order.less(self.nodes.key(node), self.nodes.key(prev)) {
                    return Err(TreeError::OrderViolation { node });
                }
            }
            previous = Some(node);
        }

        self.validate().map(|_| ())
    }

    /// Shape and storage statistics.
    pub fn stats(&self) -> TreeStats {
        let (depth, black_depth) = self.depth();
        TreeStats {
            len: self.len,
            slots: self.nodes.slot_count() - 1,
            free_slots: self.nodes.free_count(),
            depth,
            black_depth,
        }
    }

    /// Every node reachable from the root, parents before children.
    fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        if !self.root.is_nil() {
            stack.push(self.root);
        }
        while let Some(node) = stack.pop() {
            order.push(node);
            // A cycle would make the walk unbounded; stop once more nodes
            // were seen than there are slots.
            if order.len() > self.nodes.slot_count() {
                break;
            }
            let (left, right) = (self.nodes[node].left, self.nodes[node].right);
            if !right.is_nil() {
                stack.push(right);
            }
            if !left.is_nil() {
                stack.push(left);
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::NaturalOrder;
    use crate::tree::node::Color;

    fn sample() -> RedBlackTree<i32, ()> {
        let mut tree = RedBlackTree::new(NaturalOrder);
        for key in [15, 6, 18, 3, 7, 17, 20, 2, 4, 13, 9] {
            tree.insert(key, ());
        }
        tree
    }

    #[test]
    fn empty_tree_diagnostics() {
        let tree: RedBlackTree<i32, ()> = RedBlackTree::new(NaturalOrder);
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.depth(), (0, 0));
        assert_eq!(tree.validate(), Ok(0));
        assert!(tree.check_invariants().is_ok());
        assert_eq!(tree.stats(), TreeStats::default());
    }

    #[test]
    fn single_node_diagnostics() {
        let mut tree = RedBlackTree::new(NaturalOrder);
        tree.insert(1, ());
        assert_eq!(tree.size(), 1);
        assert_eq!(tree.depth(), (1, 1));
        assert_eq!(tree.validate(), Ok(1));
    }

    #[test]
    fn sample_tree_diagnostics() {
        let tree = sample();
        assert_eq!(tree.size(), 11);
        assert_eq!(tree.depth(), (4, 2));
        assert_eq!(tree.validate(), Ok(2));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn stats_track_free_slots() {
        let mut tree = sample();
        tree.delete(&2);
        tree.delete(&20);
        let stats = tree.stats();
        assert_eq!(stats.len, 9);
        assert_eq!(stats.slots, 11);
        assert_eq!(stats.free_slots, 2);
        assert_eq!(stats.depth, tree.depth().0);
    }

    #[test]
    fn validate_detects_black_height_mismatch() {
        let mut tree = sample();
        // 18 is black with two red children; painting it red drops the
        // right-hand black height of the root to zero.
        let eighteen = tree.search_node(&18).unwrap();
        tree.nodes[eighteen].color = Color::Red;
        let fifteen = tree.search_node(&15).unwrap();

        assert_eq!(
            tree.validate(),
            Err(TreeError::BlackHeightMismatch {
                node: fifteen,
                left: 1,
                right: 0
            })
        );
    }

    #[test]
    fn check_invariants_detects_red_root() {
        let mut tree = sample();
        let root = tree.root;
        tree.nodes[root].color = Color::Red;
        assert_eq!(tree.check_invariants(), Err(TreeError::RedRoot));
    }

    #[test]
    fn check_invariants_detects_red_sentinel() {
        let mut tree = sample();
        tree.nodes[NodeId::NIL].color = Color::Red;
        assert_eq!(tree.check_invariants(), Err(TreeError::SentinelNotBlack));
    }

    #[test]
    fn check_invariants_detects_red_red() {
        let mut tree = sample();
        let six = tree.search_node(&6).unwrap();
        let three = tree.search_node(&3).unwrap();
        tree.nodes[three].color = Color::Red;
        // Reported at the red parent of the red child.
        assert_eq!(
            tree.check_invariants(),
            Err(TreeError::RedViolation { node: six })
        );
    }

    #[test]
    fn check_invariants_detects_broken_parent_link() {
        let mut tree = sample();
        let four = tree.search_node(&4).unwrap();
        tree.nodes[four].parent = tree.root;
        assert_eq!(
            tree.check_invariants(),
            Err(TreeError::BrokenLink { node: four })
        );
    }

    #[test]
    fn check_invariants_detects_order_violation() {
        let mut tree = sample();
        let nine = tree.search_node(&9).unwrap();
        if let Some((key, _)) = tree.nodes[nine].entry.as_mut() {
            *key = 100;
        }
        assert!(matches!(
            tree.check_invariants(),
            Err(TreeError::OrderViolation { .. })
        ));
    }

    #[test]
    fn check_invariants_detects_length_mismatch() {
        let mut tree = sample();
        tree.len += 1;
        assert_eq!(
            tree.check_invariants(),
            Err(TreeError::LengthMismatch {
                cached: 12,
                counted: 11
            })
        );
    }
}
