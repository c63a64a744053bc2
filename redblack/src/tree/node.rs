//! Node storage.
//!
//! Nodes live in a single growable arena and refer to each other by index.
//! Slot 0 is the tree's sentinel: it is always black, never holds an entry,
//! and stands in for every absent child or parent link. Vacated slots go on a
//! free list and are handed out again by later inserts.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Largest number of live nodes a tree can hold.
pub const MAX_NODES: usize = (u32::MAX - 1) as usize;

/// Handle to a node inside a [`RedBlackTree`](crate::RedBlackTree).
///
/// A handle stays valid until its entry is removed. Removing a node that has
/// two children moves the in-order successor's entry into the removed node's
/// slot, so the successor's handle is invalidated too.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const NIL: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn is_nil(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            write!(f, "NodeId(NIL)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// `None` for the sentinel and for vacant slots.
    pub(crate) entry: Option<(K, V)>,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
    pub(crate) color: Color,
}

impl<K, V> Node<K, V> {
    fn vacant() -> Self {
        Node {
            entry: None,
            left: NodeId::NIL,
            right: NodeId::NIL,
            parent: NodeId::NIL,
            color: Color::Black,
        }
    }

    fn new(key: K, value: V, parent: NodeId) -> Self {
        Node {
            entry: Some((key, value)),
            left: NodeId::NIL,
            right: NodeId::NIL,
            parent,
            color: Color::Red,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut NodeId {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Node<K, V>>,
    free: Vec<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.saturating_add(1));
        slots.push(Node::vacant());
        Arena {
            slots,
            free: Vec::new(),
        }
    }

    /// Stores a new red node and returns its handle, reusing a vacant slot when
    /// one is available.
    pub(crate) fn allocate(&mut self, key: K, value: V, parent: NodeId) -> NodeId {
        let node = Node::new(key, value, parent);
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = node;
            return id;
        }
        let index = self.slots.len();
        assert!(index <= MAX_NODES, "tree cannot hold more than {MAX_NODES} nodes");
        self.slots.push(node);
        NodeId(index as u32)
    }

    /// Vacates a detached slot and returns the entry it held.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<(K, V)> {
        debug_assert!(!id.is_nil(), "the sentinel cannot be released");
        let node = std::mem::replace(&mut self.slots[id.index()], Node::vacant());
        self.free.push(id);
        node.entry
    }

    pub(crate) fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[0] = Node::vacant();
        self.free.clear();
    }

    /// Total slots, sentinel included.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Returns `true` when `id` names a slot that currently holds an entry.
    #[inline]
    pub(crate) fn is_live(&self, id: NodeId) -> bool {
        self.slots
            .get(id.index())
            .is_some_and(|node| node.entry.is_some())
    }

    #[inline]
    pub(crate) fn entry(&self, id: NodeId) -> Option<(&K, &V)> {
        self.slots
            .get(id.index())
            .and_then(|node| node.entry.as_ref())
            .map(|(key, value)| (key, value))
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.slots
            .get_mut(id.index())
            .and_then(|node| node.entry.as_mut())
            .map(|(_, value)| value)
    }

    /// Key stored at a live node.
    ///
    /// Every algorithm only asks for keys of nodes it reached through tree
    /// links, so a missing entry here means the structure itself is corrupt.
    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> &K {
        match &self.slots[id.index()].entry {
            Some((key, _)) => key,
            None => panic!("{id:?} holds no entry"),
        }
    }

    /// Moves the entry at `from` into `to`, leaving `to`'s old entry at `from`.
    pub(crate) fn swap_entries(&mut self, from: NodeId, to: NodeId) {
        let moved = self.slots[from.index()].entry.take();
        let displaced = std::mem::replace(&mut self.slots[to.index()].entry, moved);
        self.slots[from.index()].entry = displaced;
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.slots[id.index()]
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.slots[id.index()]
    }
}
