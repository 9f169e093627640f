use std::cmp::Ordering;

use crate::node::Node;
use crate::search;

/// Plain binary search tree: recursive insertion, no rebalancing.
///
/// Worst-case depth is O(n) under adversarial insertion order (e.g.
/// already-sorted keys); pick [`crate::RedBlackBst`] when that matters.
///
/// # Examples
///
/// ```
/// use algo_symbol_table::Bst;
///
/// let mut st = Bst::with_comparator(|a: &&str, b: &&str| a.cmp(b));
/// st.put("b", 2);
/// st.put("a", 1);
/// st.put("b", 20); // replaces
/// assert_eq!(st.get(&"b"), Some(&20));
/// assert_eq!(st.len(), 2);
/// ```
pub struct Bst<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Vec<Node<K, V>>,
    root: Option<u32>,
    compare: C,
    len: usize,
}

impl<K, V, C> Bst<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(compare: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            compare,
            len: 0,
        }
    }

    /// Insert `key` with `val`, replacing the value if the key already
    /// compares `Equal` to a present one.
    pub fn put(&mut self, key: K, val: V) {
        self.root = Some(self.put_at(self.root, key, val));
    }

    fn put_at(&mut self, i: Option<u32>, key: K, val: V) -> u32 {
        let Some(i) = i else {
            self.arena.push(Node::new(key, val, true));
            self.len += 1;
            return (self.arena.len() - 1) as u32;
        };
        match (self.compare)(&key, &self.arena[i as usize].key) {
            Ordering::Less => {
                let left = self.arena[i as usize].left;
                let new_left = self.put_at(left, key, val);
                self.arena[i as usize].left = Some(new_left);
            }
            Ordering::Greater => {
                let right = self.arena[i as usize].right;
                let new_right = self.put_at(right, key, val);
                self.arena[i as usize].right = Some(new_right);
            }
            Ordering::Equal => self.arena[i as usize].val = val,
        }
        i
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let i = search::find(&self.arena, self.root, &self.compare, key)?;
        Some(&self.arena[i as usize].val)
    }

    pub fn contains(&self, key: &K) -> bool {
        search::find(&self.arena, self.root, &self.compare, key).is_some()
    }

    pub fn min(&self) -> Option<&K> {
        let i = search::min(&self.arena, self.root)?;
        Some(&self.arena[i as usize].key)
    }

    pub fn max(&self) -> Option<&K> {
        let i = search::max(&self.arena, self.root)?;
        Some(&self.arena[i as usize].key)
    }

    /// Largest present key no greater than `key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        let i = search::floor(&self.arena, self.root, &self.compare, key)?;
        Some(&self.arena[i as usize].key)
    }

    /// Smallest present key no less than `key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        let i = search::ceiling(&self.arena, self.root, &self.compare, key)?;
        Some(&self.arena[i as usize].key)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algo_ordering::natural;

    fn float_cmp(a: &f64, b: &f64) -> Ordering {
        a.partial_cmp(b).unwrap()
    }

    #[test]
    fn test_put_get_roundtrip() {
        let mut st = Bst::with_comparator(natural::<i32>());
        for (k, v) in [(5, "e"), (2, "b"), (7, "g"), (6, "f")] {
            st.put(k, v);
        }
        assert_eq!(st.get(&5), Some(&"e"));
        assert_eq!(st.get(&6), Some(&"f"));
        assert_eq!(st.get(&1), None);
        assert!(st.contains(&7));
        assert!(!st.contains(&3));
    }

    #[test]
    fn test_replace_keeps_len() {
        let mut st = Bst::with_comparator(natural::<i32>());
        st.put(1, "a");
        st.put(1, "b");
        assert_eq!(st.len(), 1);
        assert_eq!(st.get(&1), Some(&"b"));
    }

    #[test]
    fn test_empty_queries_are_absent() {
        let st: Bst<i32, (), _> = Bst::with_comparator(natural::<i32>());
        assert_eq!(st.get(&1), None);
        assert_eq!(st.min(), None);
        assert_eq!(st.max(), None);
        assert_eq!(st.floor(&1), None);
        assert_eq!(st.ceiling(&1), None);
        assert!(st.is_empty());
    }

    #[test]
    fn test_floor_ceiling_between_keys() {
        let mut st = Bst::with_comparator(float_cmp);
        for k in [5.0, 2.0, 7.0, 6.0, 8.0, 4.0] {
            st.put(k, ());
        }
        assert_eq!(st.floor(&6.5), Some(&6.0));
        assert_eq!(st.ceiling(&6.5), Some(&7.0));
        assert_eq!(st.min(), Some(&2.0));
        assert_eq!(st.max(), Some(&8.0));
    }

    #[test]
    fn test_degenerate_insertion_order_still_correct() {
        let mut st = Bst::with_comparator(natural::<i32>());
        for k in 0..200 {
            st.put(k, k * 10);
        }
        assert_eq!(st.get(&150), Some(&1500));
        assert_eq!(st.min(), Some(&0));
        assert_eq!(st.max(), Some(&199));
    }

    #[test]
    fn test_comparator_decides_equality() {
        // keys equal mod 10 collapse to one entry
        let mut st = Bst::with_comparator(|a: &i32, b: &i32| (a % 10).cmp(&(b % 10)));
        st.put(3, "three");
        st.put(13, "thirteen");
        assert_eq!(st.len(), 1);
        assert_eq!(st.get(&23), Some(&"thirteen"));
    }
}
