//! Tree configuration module.
//!
//! This module provides construction-time options for a [`RedBlackTree`](crate::RedBlackTree).

use crate::errors::{TreeError, TreeResult};
use crate::tree::MAX_NODES;

/// Default number of node slots reserved up front.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Default label used in log lines.
pub const DEFAULT_TREE_NAME: &str = "redblack";

/// Tree configuration.
///
/// # Example
///
/// ```rust
/// use redblack::{NaturalOrder, RedBlackTree, TreeConfig};
///
/// let config = TreeConfig::new()
///     .with_initial_capacity(1024)
///     .with_verify_after_mutation(true)
///     .with_name("sessions");
///
/// let tree: RedBlackTree<u64, String> =
///     RedBlackTree::with_config(NaturalOrder, config).unwrap();
/// assert_eq!(tree.config().name(), "sessions");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Node slots reserved when the tree is built.
    initial_capacity: usize,

    /// Run the full invariant check after every insert and delete (debug builds only).
    verify_after_mutation: bool,

    /// Label used in log lines.
    name: String,
}

impl TreeConfig {
    /// Creates a configuration with default values.
    ///
    /// Defaults:
    /// - Initial capacity: 16 slots
    /// - Verify after mutation: off
    /// - Name: "redblack"
    #[inline]
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            verify_after_mutation: false,
            name: DEFAULT_TREE_NAME.to_string(),
        }
    }

    /// Returns the number of node slots reserved up front.
    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Sets the number of node slots reserved up front.
    #[inline]
    pub fn set_initial_capacity(&mut self, capacity: usize) {
        self.initial_capacity = capacity;
    }

    /// Sets the number of node slots reserved up front.
    /// Builder-style method for chaining.
    #[inline]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.set_initial_capacity(capacity);
        self
    }

    /// Returns whether mutations re-check every invariant.
    ///
    /// The check is O(n) and is compiled out of release builds regardless of
    /// this flag.
    #[inline]
    pub fn verify_after_mutation(&self) -> bool {
        self.verify_after_mutation
    }

    /// Enables or disables the post-mutation invariant check.
    #[inline]
    pub fn set_verify_after_mutation(&mut self, verify: bool) {
        self.verify_after_mutation = verify;
    }

    /// Enables or disables the post-mutation invariant check.
    /// Builder-style method for chaining.
    #[inline]
    pub fn with_verify_after_mutation(mut self, verify: bool) -> Self {
        self.set_verify_after_mutation(verify);
        self
    }

    /// Returns the label used in log lines.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the label used in log lines.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the label used in log lines.
    /// Builder-style method for chaining.
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Checks that every setting is within range.
    pub fn validate(&self) -> TreeResult<()> {
        if self.initial_capacity > MAX_NODES {
            log::error!(
                "Initial capacity {} exceeds the maximum of {} nodes",
                self.initial_capacity,
                MAX_NODES
            );
            return Err(TreeError::InvalidConfig(format!(
                "initial capacity {} exceeds the maximum of {} nodes",
                self.initial_capacity, MAX_NODES
            )));
        }
        if self.name.trim().is_empty() {
            log::error!("Tree name must not be empty");
            return Err(TreeError::InvalidConfig(
                "tree name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}
