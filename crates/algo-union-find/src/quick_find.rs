use crate::{identity_parents, UnionFind};

/// Eager union-find: every element stores its component id directly.
///
/// `connected` is a single array lookup; `union` rewrites the id of every
/// element in b's component, a full O(n) scan.
pub struct QuickFind {
    ids: Vec<usize>,
}

impl QuickFind {
    pub fn new(n: usize) -> Self {
        Self {
            ids: identity_parents(n),
        }
    }
}

impl UnionFind for QuickFind {
    fn union(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.ids.len() && b < self.ids.len());
        let id_a = self.ids[a];
        let id_b = self.ids[b];
        if id_a == id_b {
            return;
        }
        for id in self.ids.iter_mut() {
            if *id == id_b {
                *id = id_a;
            }
        }
    }

    fn connected(&mut self, a: usize, b: usize) -> bool {
        debug_assert!(a < self.ids.len() && b < self.ids.len());
        self.ids[a] == self.ids[b]
    }
}
