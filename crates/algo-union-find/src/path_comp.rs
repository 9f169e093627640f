use crate::{identity_parents, UnionFind};

/// Weighted quick-union plus path halving: while walking to the root,
/// every visited element's parent is rewritten to its grandparent, so the
/// path a lookup just paid for is half as long next time.
pub struct WeightedQuickUnionPathComp {
    parents: Vec<usize>,
    sizes: Vec<usize>,
}

impl WeightedQuickUnionPathComp {
    pub fn new(n: usize) -> Self {
        Self {
            parents: identity_parents(n),
            sizes: vec![1; n],
        }
    }

    pub fn root(&mut self, mut x: usize) -> usize {
        while x != self.parents[x] {
            self.parents[x] = self.parents[self.parents[x]];
            x = self.parents[x];
        }
        x
    }
}

impl UnionFind for WeightedQuickUnionPathComp {
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
