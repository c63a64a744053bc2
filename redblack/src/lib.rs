//! # Redblack - Arena-Backed Red-Black Tree
//!
//! Redblack is an ordered key-value container balanced as a red-black tree.
//! Nodes live in a single arena and link to each other by index, which keeps
//! parent back-links free of ownership cycles and lets every walk run on an
//! explicit stack.
//!
//! ## Key Features
//!
//! - **Pluggable ordering**: keys are compared through a [`KeyOrder`], either
//!   the natural [`Ord`] order, its reverse, a three-way comparator or a pair
//!   of `equals`/`less` closures
//! - **Duplicate keys**: equal keys coexist and iterate in insertion order
//! - **Range queries**: inclusive, optionally open-ended, in either direction
//! - **Positional lookups**: successor and predecessor handles, plus
//!   first-greater, first-at-least, last-less and last-at-most queries
//! - **Diagnostics**: black-height validation, a full invariant check and
//!   shape statistics, optionally run after every mutation in debug builds
//!
//! ## Quick Start
//!
//! ```rust
//! use redblack::{CompareWith, RedBlackTree};
//!
//! // Case-insensitive keys
//! let mut tree = RedBlackTree::new(CompareWith(|a: &String, b: &String| {
//!     a.to_lowercase().cmp(&b.to_lowercase())
//! }));
//! tree.insert("Banana".to_string(), 2);
//! tree.insert("apple".to_string(), 1);
//! tree.insert("cherry".to_string(), 3);
//!
//! assert_eq!(tree.get(&"APPLE".to_string()), Some(&1));
//! let keys: Vec<&str> = tree.iter().map(|(k, _)| k.as_str()).collect();
//! assert_eq!(keys, vec!["apple", "Banana", "cherry"]);
//! assert!(tree.check_invariants().is_ok());
//! ```
//!
//! ## Module Organization
//!
//! - [`errors`] - Error types and result definitions
//! - [`order`] - The [`KeyOrder`] trait and its implementations
//! - [`tree`] - The tree engine, split by operation
//! - [`tree_config`] - Construction-time configuration

pub mod errors;
pub mod order;
pub mod tree;
pub mod tree_config;

pub use errors::{ErrorKind, TreeError, TreeResult};
pub use order::{CompareWith, KeyOrder, NaturalOrder, ReverseOrder};
pub use tree::{Iter, NodeId, RedBlackTree, TreeStats, MAX_NODES};
pub use tree_config::TreeConfig;
