use std::cmp::Ordering;

use crate::node::Node;
use crate::search;

fn is_red<K, V>(arena: &[Node<K, V>], i: Option<u32>) -> bool {
    i.map(|i| arena[i as usize].red).unwrap_or(false)
}

/// Rotate a right-leaning red link onto the left: `h`'s red right child
/// `x` takes `h`'s place and color, `h` descends as `x`'s red left child.
fn rotate_left<K, V>(arena: &mut [Node<K, V>], h: u32) -> u32 {
    let x = arena[h as usize]
        .right
        .expect("rotate_left requires a right child");
    arena[h as usize].right = arena[x as usize].left;
    arena[x as usize].left = Some(h);
    arena[x as usize].red = arena[h as usize].red;
    arena[h as usize].red = true;
    x
}

/// Mirror of [`rotate_left`], used to straighten two consecutive left
/// red links into a temporary 4-node.
fn rotate_right<K, V>(arena: &mut [Node<K, V>], h: u32) -> u32 {
    let x = arena[h as usize]
        .left
        .expect("rotate_right requires a left child");
    arena[h as usize].left = arena[x as usize].right;
    arena[x as usize].right = Some(h);
    arena[x as usize].red = arena[h as usize].red;
    arena[h as usize].red = true;
    x
}

/// Split a 4-node: both red children turn black, the middle key's link
/// turns red and carries the split up to the parent.
fn flip_colors<K, V>(arena: &mut [Node<K, V>], h: u32) {
    arena[h as usize].red = true;
    if let Some(left) = arena[h as usize].left {
        arena[left as usize].red = false;
    }
    if let Some(right) = arena[h as usize].right {
        arena[right as usize].red = false;
    }
}

/// Left-leaning red-black tree.
///
/// Shares its searches with [`crate::Bst`] — get/min/max/floor/ceiling
/// are the same free functions over the arena — but `put` rebalances
/// bottom-up on the recursion's return path: rotate left if the right
/// link is red and the left is not, rotate right on two consecutive left
/// red links, flip colors if both children are red. Every path from the
/// root to a nil link crosses the same number of black links, and no red
/// link leans right or follows another red link.
///
/// # Examples
///
/// ```
/// use algo_symbol_table::RedBlackBst;
///
/// let mut st = RedBlackBst::with_comparator(|a: &i32, b: &i32| a.cmp(b));
/// for k in 0..1000 {
///     st.put(k, ()); // sorted insertion order, still balanced
/// }
/// assert_eq!(st.min(), Some(&0));
/// assert_eq!(st.max(), Some(&999));
/// ```
pub struct RedBlackBst<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Vec<Node<K, V>>,
    root: Option<u32>,
    compare: C,
    len: usize,
}

impl<K, V, C> RedBlackBst<K, V, C>
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

    /// Insert `key` with `val`, replacing on an `Equal` comparison and
    /// rebalancing on the way back up. The root is recolored black after
    /// every insertion.
    pub fn put(&mut self, key: K, val: V) {
        let root = self.put_at(self.root, key, val);
        self.arena[root as usize].red = false;
        self.root = Some(root);
    }

    fn put_at(&mut self, h: Option<u32>, key: K, val: V) -> u32 {
        let Some(mut h) = h else {
            // new links are red: insertion is always into a 3- or 4-node
            self.arena.push(Node::new(key, val, true));
            self.len += 1;
            return (self.arena.len() - 1) as u32;
        };

        match (self.compare)(&key, &self.arena[h as usize].key) {
            Ordering::Less => {
                let left = self.arena[h as usize].left;
                let new_left = self.put_at(left, key, val);
                self.arena[h as usize].left = Some(new_left);
            }
            Ordering::Greater => {
                let right = self.arena[h as usize].right;
                let new_right = self.put_at(right, key, val);
                self.arena[h as usize].right = Some(new_right);
            }
            Ordering::Equal => self.arena[h as usize].val = val,
        }

        // lean left
        if is_red(&self.arena, self.arena[h as usize].right)
            && !is_red(&self.arena, self.arena[h as usize].left)
        {
            h = rotate_left(&mut self.arena, h);
        }
        // straighten a temporary 4-node
        let left = self.arena[h as usize].left;
        if is_red(&self.arena, left)
            && is_red(&self.arena, left.and_then(|l| self.arena[l as usize].left))
        {
            h = rotate_right(&mut self.arena, h);
        }
        // split the 4-node
        if is_red(&self.arena, self.arena[h as usize].left)
            && is_red(&self.arena, self.arena[h as usize].right)
        {
            flip_colors(&mut self.arena, h);
        }

        h
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

    /// Structural self-check: the root is black, every root-to-nil path
    /// crosses the same number of black links, and no red link leans
    /// right or follows another red link. O(n); public so tests can
    /// assert balance after arbitrary insertion orders.
    pub fn invariants_hold(&self) -> bool {
        !is_red(&self.arena, self.root)
            && self.black_height(self.root).is_some()
            && self.no_red_violations(self.root)
    }

    /// Black links per root-to-nil path, or `None` if any two paths
    /// disagree.
    fn black_height(&self, i: Option<u32>) -> Option<usize> {
        let Some(i) = i else { return Some(0) };
        let node = &self.arena[i as usize];
        let left = self.black_height(node.left)?;
        let right = self.black_height(node.right)?;
        if left != right {
            return None;
        }
        Some(left + usize::from(!node.red))
    }

    fn no_red_violations(&self, i: Option<u32>) -> bool {
        let Some(i) = i else { return true };
        let node = &self.arena[i as usize];
        // red links never lean right
        if is_red(&self.arena, node.right) {
            return false;
        }
        // no two consecutive red links
        if node.red && is_red(&self.arena, node.left) {
            return false;
        }
        self.no_red_violations(node.left) && self.no_red_violations(node.right)
    }
}
