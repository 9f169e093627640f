//! Search operations over `(arena, root, comparator)`.
//!
//! These are free functions shared by both tree types; insertion is the
//! only operation where the trees differ.

use std::cmp::Ordering;

use crate::node::Node;

/// Walk from `root` comparing at each node, returning the index of the
/// node whose key compares `Equal`.
pub fn find<K, V, C>(arena: &[Node<K, V>], root: Option<u32>, compare: &C, key: &K) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let mut current = root;
    while let Some(i) = current {
        let node = &arena[i as usize];
        current = match compare(key, &node.key) {
            Ordering::Less => node.left,
            Ordering::Greater => node.right,
            Ordering::Equal => return Some(i),
        };
    }
    None
}

/// Leftmost node under `root`: the smallest key.
pub fn min<K, V>(arena: &[Node<K, V>], root: Option<u32>) -> Option<u32> {
    let mut i = root?;
    while let Some(left) = arena[i as usize].left {
        i = left;
    }
    Some(i)
}

/// Rightmost node under `root`: the largest key.
pub fn max<K, V>(arena: &[Node<K, V>], root: Option<u32>) -> Option<u32> {
    let mut i = root?;
    while let Some(right) = arena[i as usize].right {
        i = right;
    }
    Some(i)
}

/// Largest key no greater than `key`.
///
/// An exact match wins; otherwise a `Less` comparison can only be
/// answered from the left subtree, while a `Greater` comparison is
/// answered from the right subtree if anything there still qualifies,
/// falling back to the current node.
pub fn floor<K, V, C>(arena: &[Node<K, V>], root: Option<u32>, compare: &C, key: &K) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let i = root?;
    let node = &arena[i as usize];
    match compare(key, &node.key) {
        Ordering::Equal => Some(i),
        Ordering::Less => floor(arena, node.left, compare, key),
        Ordering::Greater => floor(arena, node.right, compare, key).or(Some(i)),
    }
}

/// Smallest key no less than `key`; mirror image of [`floor`].
pub fn ceiling<K, V, C>(
    arena: &[Node<K, V>],
    root: Option<u32>,
    compare: &C,
    key: &K,
) -> Option<u32>
where
    C: Fn(&K, &K) -> Ordering,
{
    let i = root?;
    let node = &arena[i as usize];
    match compare(key, &node.key) {
        Ordering::Equal => Some(i),
        Ordering::Greater => ceiling(arena, node.right, compare, key),
        Ordering::Less => ceiling(arena, node.left, compare, key).or(Some(i)),
    }
}
