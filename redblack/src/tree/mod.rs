//! The red-black tree engine.
//!
//! [`RedBlackTree`] keeps its nodes in an index-addressed arena (see
//! [`node`]), so parent back-links are plain indices rather than owning
//! pointers. The operations are split by concern:
//!
//! - [`search`] - point lookup and positional navigation
//! - [`insert`] - structural insert and the insertion fixup
//! - [`delete`] - splice, successor substitution and the deletion fixup
//! - [`rotation`] - left/right rotations shared by both fixups
//! - [`traversal`] - ordered iteration and pruned range scans
//! - [`diagnostics`] - size, depth and invariant verification

use std::fmt;

use crate::errors::TreeResult;
use crate::order::{KeyOrder, NaturalOrder};
use crate::tree_config::TreeConfig;

pub mod delete;
pub mod diagnostics;
pub mod insert;
pub mod node;
pub mod rotation;
pub mod search;
pub mod traversal;

pub use diagnostics::TreeStats;
pub use node::{NodeId, MAX_NODES};
pub use traversal::Iter;

use node::Arena;

/// An ordered key-value container balanced as a red-black tree.
///
/// Keys are ordered by the tree's [`KeyOrder`]. Duplicate keys are allowed;
/// a new duplicate is placed after every existing equal key in iteration order.
///
/// # Examples
///
/// ```rust
/// use redblack::{NaturalOrder, RedBlackTree};
///
/// let mut tree = RedBlackTree::new(NaturalOrder);
/// for key in [15, 6, 18, 3, 7] {
///     tree.insert(key, key * 10);
/// }
///
/// assert_eq!(tree.search(&7), Some((&7, &70)));
/// assert_eq!(tree.minimum(), Some((&3, &30)));
/// assert_eq!(tree.list_keys(Some(&6), Some(&15)), vec![&6, &7, &15]);
/// assert_eq!(tree.delete(&6), Some((6, 60)));
/// assert_eq!(tree.validate(), Ok(2));
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K, V, O = NaturalOrder> {
    pub(crate) nodes: Arena<K, V>,
    pub(crate) root: NodeId,
    pub(crate) len: usize,
    pub(crate) order: O,
    pub(crate) config: TreeConfig,
}

impl<K, V, O: KeyOrder<K>> RedBlackTree<K, V, O> {
    /// Creates an empty tree ordered by `order`.
    pub fn new(order: O) -> Self {
        Self::build(order, TreeConfig::default())
    }

    /// Creates an empty tree with explicit configuration.
    pub fn with_config(order: O, config: TreeConfig) -> TreeResult<Self> {
        config.validate()?;
        Ok(Self::build(order, config))
    }

    fn build(order: O, config: TreeConfig) -> Self {
        log::debug!(
            "[{}] creating tree with {} reserved slots",
            config.name(),
            config.initial_capacity()
        );
        RedBlackTree {
            nodes: Arena::with_capacity(config.initial_capacity()),
            root: NodeId::NIL,
            len: 0,
            order,
            config,
        }
    }

    /// Returns the configuration the tree was built with.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Returns the key order in use.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Number of entries, duplicates included. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_nil()
    }

    /// Removes every entry. Node slots are released but the arena keeps its
    /// allocation.
    pub fn clear(&mut self) {
        log::debug!("[{}] clearing {} entries", self.config.name(), self.len);
        self.nodes.clear();
        self.root = NodeId::NIL;
        self.len = 0;
    }

    /// Strict less-than through the tree's order.
    #[inline]
    pub(crate) fn is_less(&self, a: &K, b: &K) -> bool {
        let less = self.order.less(a, b);
        debug_assert!(
            !(less && self.order.equals(a, b)),
            "key order reports two keys as both equal and less-than"
        );
        less
    }

    /// Runs the full invariant check after a mutation when the configuration
    /// asks for it. Compiled out of release builds.
    pub(crate) fn verify_after(&self, operation: &str) {
        if cfg!(debug_assertions) && self.config.verify_after_mutation() {
            let result = self.check_invariants();
            if let Err(err) = &result {
                log::error!(
                    "[{}] invariant check failed after {}: {}",
                    self.config.name(),
                    operation,
                    err
                );
            }
            debug_assert!(
                result.is_ok(),
                "red-black invariants violated after {operation}: {result:?}"
            );
        }
    }
}

impl<K: Ord, V> Default for RedBlackTree<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O: KeyOrder<K>> fmt::Debug for RedBlackTree<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, O: KeyOrder<K>> Extend<(K, V)> for RedBlackTree<K, V, O> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new(NaturalOrder);
        tree.extend(iter);
        tree
    }
}

impl<'a, K, V, O: KeyOrder<K>> IntoIterator for &'a RedBlackTree<K, V, O> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
