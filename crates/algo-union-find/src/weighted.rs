use crate::{identity_parents, UnionFind};

/// Quick-union with union-by-size: the smaller tree always goes under
/// the larger, keeping every tree's depth at most `⌊log₂ n⌋`.
pub struct WeightedQuickUnion {
    parents: Vec<usize>,
    sizes: Vec<usize>,
}

impl WeightedQuickUnion {
    pub fn new(n: usize) -> Self {
        Self {
            parents: identity_parents(n),
            sizes: vec![1; n],
        }
    }

    pub fn root(&self, mut x: usize) -> usize {
        while x != self.parents[x] {
            x = self.parents[x];
        }
        x
    }

    #[cfg(test)]
    pub(crate) fn depth(&self, mut x: usize) -> usize {
        let mut depth = 0;
        while x != self.parents[x] {
            x = self.parents[x];
            depth += 1;
        }
        depth
    }
}

impl UnionFind for WeightedQuickUnion {
    fn union(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.parents.len() && b < self.parents.len());
        let root_a = self.root(a);
        let root_b = self.root(b);
        if root_a == root_b {
            return;
        }
        if self.sizes[root_a] < self.sizes[root_b] {
            self.parents[root_a] = root_b;
            self.sizes[root_b] += self.sizes[root_a];
        } else {
            self.parents[root_b] = root_a;
            self.sizes[root_a] += self.sizes[root_b];
        }
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
    fn test_connectivity() {
        let mut uf = WeightedQuickUnion::new(8);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(0, 2);
        assert!(uf.connected(1, 3));
        assert!(!uf.connected(1, 4));
    }

    #[test]
    fn test_smaller_tree_goes_under_larger() {
        let mut uf = WeightedQuickUnion::new(5);
        uf.union(0, 1);
        uf.union(0, 2);
        // the singleton 3 must attach below the 3-element tree's root
        uf.union(3, 0);
        let r = uf.root(0);
        assert_eq!(uf.root(3), r);
        assert_eq!(uf.depth(3), 1);
    }

    #[test]
    fn test_depth_bound_holds() {
        // worst-case-ish merge pattern: repeatedly join equal-size trees
        let n = 128;
        let mut uf = WeightedQuickUnion::new(n);
        let mut span = 1;
        while span < n {
            let mut i = 0;
            while i + span < n {
                uf.union(i, i + span);
                i += 2 * span;
            }
            span *= 2;
        }
        let bound = (n as f64).log2().floor() as usize + 1;
        for x in 0..n {
            assert!(uf.depth(x) <= bound, "element {x} too deep");
        }
    }
}
