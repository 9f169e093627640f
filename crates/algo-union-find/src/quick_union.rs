use crate::{identity_parents, UnionFind};

/// Lazy union-find: each element stores a parent link, forming a forest.
///
/// `root` follows parent links to the fixed point `parents[x] == x`;
/// `union` attaches one root under the other without balancing, so a
/// chain of unions can degrade the trees to O(n) depth.
pub struct QuickUnion {
    parents: Vec<usize>,
}

impl QuickUnion {
    pub fn new(n: usize) -> Self {
        Self {
            parents: identity_parents(n),
        }
    }

    pub fn root(&self, mut x: usize) -> usize {
        while x != self.parents[x] {
            x = self.parents[x];
        }
        x
    }
}

impl UnionFind for QuickUnion {
    fn union(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.parents.len() && b < self.parents.len());
        let root_a = self.root(a);
        let root_b = self.root(b);
        if root_a == root_b {
            return;
        }
        self.parents[root_b] = root_a;
    }

    fn connected(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a < self.parents.len() && b < self.parents.len());
        self.root(a) == self.root(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitive_connectivity() {
        let mut uf = QuickUnion::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(3, 4);
        assert!(uf.connected(0, 2));
        assert!(uf.connected(4, 3));
        assert!(!uf.connected(2, 3));
    }

    #[test]
    fn test_union_attaches_roots_not_elements() {
        let mut uf = QuickUnion::new(4);
        uf.union(0, 1);
        uf.union(2, 1);
        // 1's whole component moved, not just 1 itself
        assert!(uf.connected(0, 2));
    }

    #[test]
    fn test_root_is_fixed_point() {
        let mut uf = QuickUnion::new(3);
        uf.union(0, 1);
        let r = uf.root(1);
        assert_eq!(uf.root(r), r);
    }

    #[test]
    fn test_repeated_union_is_noop() {
        let mut uf = QuickUnion::new(3);
        uf.union(0, 1);
        uf.union(0, 1);
        uf.union(1, 0);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(0, 2));
    }
}
