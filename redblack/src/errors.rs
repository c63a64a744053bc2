use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::tree::NodeId;

/// Error kinds for tree operations.
///
/// Lookups that find nothing are not errors; they return `None`. The kinds below
/// cover the two ways a tree can actually fail: a broken structural invariant
/// (reported by the diagnostics) or a rejected configuration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// One of the red-black or search-tree invariants does not hold
    InvariantViolation,
    /// A [`TreeConfig`](crate::TreeConfig) value is out of range
    InvalidConfig,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvariantViolation => write!(f, "Invariant violation"),
            ErrorKind::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}

/// Errors reported by the tree.
///
/// # Examples
///
/// ```rust
/// use redblack::{ErrorKind, RedBlackTree, NaturalOrder};
///
/// let mut tree = RedBlackTree::new(NaturalOrder);
/// tree.insert(1, "one");
/// assert!(tree.check_invariants().is_ok());
///
/// let err = redblack::TreeError::InvalidConfig("empty name".to_string());
/// assert_eq!(err.kind(), ErrorKind::InvalidConfig);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("sentinel is not black")]
    SentinelNotBlack,

    #[error("root is red")]
    RedRoot,

    #[error("red node {node:?} has a red child")]
    RedViolation { node: NodeId },

    #[error("black height mismatch at {node:?}: left {left}, right {right}")]
    BlackHeightMismatch {
        node: NodeId,
        left: usize,
        right: usize,
    },

    #[error("node {node:?} is out of order with its in-order predecessor")]
    OrderViolation { node: NodeId },

    #[error("parent link of {node:?} is inconsistent")]
    BrokenLink { node: NodeId },

    #[error("cached length {cached} does not match {counted} reachable nodes")]
    LengthMismatch { cached: usize, counted: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TreeError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            _ => ErrorKind::InvariantViolation,
        }
    }
}

/// Result type for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_errors_have_invariant_kind() {
        let errors = [
            TreeError::SentinelNotBlack,
            TreeError::RedRoot,
            TreeError::RedViolation { node: NodeId::NIL },
            TreeError::BlackHeightMismatch {
                node: NodeId::NIL,
                left: 1,
                right: 2,
            },
            TreeError::OrderViolation { node: NodeId::NIL },
            TreeError::BrokenLink { node: NodeId::NIL },
            TreeError::LengthMismatch {
                cached: 3,
                counted: 2,
            },
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        }
    }

    #[test]
    fn config_error_has_config_kind() {
        let err = TreeError::InvalidConfig("bad".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert_eq!(err.to_string(), "Invalid configuration: bad");
    }

    #[test]
    fn black_height_mismatch_message() {
        let err = TreeError::BlackHeightMismatch {
            node: NodeId::NIL,
            left: 1,
            right: 2,
        };
        assert_eq!(
            err.to_string(),
            "black height mismatch at NodeId(NIL): left 1, right 2"
        );
    }

    #[test]
    fn error_kind_display() {
        assert_eq!(ErrorKind::InvariantViolation.to_string(), "Invariant violation");
        assert_eq!(ErrorKind::InvalidConfig.to_string(), "Invalid configuration");
    }
}
