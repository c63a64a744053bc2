//! Key ordering strategies.
//!
//! A tree never compares keys on its own. Every comparison goes through the
//! [`KeyOrder`] it was built with, which supplies an equality predicate and a
//! strict less-than predicate. Together they must describe a consistent total
//! order over every key the tree ever holds; the tree does not check this beyond
//! a debug assertion on contradictory answers.

use std::cmp::Ordering;

/// An equality predicate paired with a strict less-than predicate.
pub trait KeyOrder<K: ?Sized> {
    /// Returns `true` when `a` and `b` are the same key.
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Returns `true` when `a` sorts strictly before `b`.
    fn less(&self, a: &K, b: &K) -> bool;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: Ord + ?Sized> KeyOrder<K> for ReverseOrder {
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

/// Adapts a three-way comparator into a [`KeyOrder`].
///
/// ```rust
/// use redblack::{RedBlackTree, CompareWith};
///
/// let mut tree = RedBlackTree::new(CompareWith(|a: &String, b: &String| {
///     a.len().cmp(&b.len())
/// }));
/// tree.insert("ccc".to_string(), 3);
/// tree.insert("a".to_string(), 1);
/// assert_eq!(tree.minimum().map(|(_, v)| *v), Some(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompareWith<F>(pub F);

impl<K: ?Sized, F> KeyOrder<K> for CompareWith<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b) == Ordering::Equal
    }

    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b) == Ordering::Less
    }
}

/// A pair of closures `(equals, less)` is itself a key order.
///
/// ```rust
/// use redblack::RedBlackTree;
///
/// let equals = |a: &f64, b: &f64| a == b;
/// let less = |a: &f64, b: &f64| a < b;
/// let mut tree = RedBlackTree::new((equals, less));
/// tree.insert(2.5, ());
/// tree.insert(-1.0, ());
/// assert_eq!(tree.list_keys(None, None), vec![&-1.0, &2.5]);
/// ```
impl<K: ?Sized, E, L> KeyOrder<K> for (E, L)
where
    E: Fn(&K, &K) -> bool,
    L: Fn(&K, &K) -> bool,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b)
    }

    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        (self.1)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_order_follows_ord() {
        assert!(KeyOrder::<i32>::less(&NaturalOrder, &1, &2));
        assert!(!KeyOrder::<i32>::less(&NaturalOrder, &2, &2));
        assert!(KeyOrder::<i32>::equals(&NaturalOrder, &2, &2));
        assert!(KeyOrder::<str>::less(&NaturalOrder, "abc", "abd"));
    }

    #[test]
    fn reverse_order_flips_less() {
        assert!(KeyOrder::<i32>::less(&ReverseOrder, &2, &1));
        assert!(!KeyOrder::<i32>::less(&ReverseOrder, &1, &2));
        assert!(KeyOrder::<i32>::equals(&ReverseOrder, &7, &7));
    }

    #[test]
    fn compare_with_maps_orderings() {
        let order = CompareWith(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        assert!(order.equals(&-3, &3));
        assert!(order.less(&-1, &2));
        assert!(!order.less(&-5, &2));
    }

    #[test]
    fn closure_pair_is_an_order() {
        let order = (
            |a: &(i32, i32), b: &(i32, i32)| a.0 == b.0,
            |a: &(i32, i32), b: &(i32, i32)| a.0 < b.0,
        );
        assert!(order.equals(&(1, 5), &(1, 9)));
        assert!(order.less(&(0, 9), &(1, 0)));
    }
}
