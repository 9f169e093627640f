//! The same union sequences run against all four implementations, which
//! must agree with each other and with a naive component model.

use algo_union_find::{
    QuickFind, QuickUnion, UnionFind, WeightedQuickUnion, WeightedQuickUnionPathComp,
};
use proptest::prelude::*;

fn implementations(n: usize) -> Vec<(&'static str, Box<dyn UnionFind>)> {
    vec![
        ("quick_find", Box::new(QuickFind::new(n)) as Box<dyn UnionFind>),
        ("quick_union", Box::new(QuickUnion::new(n))),
        ("weighted", Box::new(WeightedQuickUnion::new(n))),
        ("weighted_path_comp", Box::new(WeightedQuickUnionPathComp::new(n))),
    ]
}

/// Model: component id per element, merged eagerly.
struct Model {
    ids: Vec<usize>,
}

impl Model {
    fn new(n: usize) -> Self {
        Self {
            ids: (0..n).collect(),
        }
    }

    fn union(&mut self, a: usize, b: usize) {
        let (id_a, id_b) = (self.ids[a], self.ids[b]);
        for id in self.ids.iter_mut() {
            if *id == id_b {
                *id = id_a;
            }
        }
    }

    fn connected(&self, a: usize, b: usize) -> bool {
        self.ids[a] == self.ids[b]
    }
}

#[test]
fn classic_ten_element_sequence() {
    let unions = [
        (4, 3),
        (3, 8),
        (6, 5),
        (9, 4),
        (2, 1),
        (8, 9),
        (5, 0),
        (7, 2),
        (6, 1),
        (1, 0),
        (6, 7),
    ];
    let mut model = Model::new(10);
    for &(a, b) in &unions {
        model.union(a, b);
    }

    for (name, mut uf) in implementations(10) {
        for &(a, b) in &unions {
            uf.union(a, b);
        }
        for a in 0..10 {
            for b in 0..10 {
                assert_eq!(
                    uf.connected(a, b),
                    model.connected(a, b),
                    "{name}: ({a}, {b})"
                );
            }
        }
    }
}

#[test]
fn union_then_connected_is_true() {
    for (name, mut uf) in implementations(6) {
        uf.union(1, 4);
        assert!(uf.connected(1, 4), "{name}");
        assert!(uf.connected(4, 1), "{name}");
        // repeating the union changes nothing
        uf.union(1, 4);
        uf.union(4, 1);
        assert!(uf.connected(1, 4), "{name}");
        assert!(!uf.connected(1, 5), "{name}");
    }
}

proptest! {
    #[test]
    fn implementations_agree_with_model(
        unions in prop::collection::vec((0..20usize, 0..20usize), 0..60),
    ) {
        let mut model = Model::new(20);
        for &(a, b) in &unions {
            model.union(a, b);
        }
        for (name, mut uf) in implementations(20) {
            for &(a, b) in &unions {
                uf.union(a, b);
            }
            for a in 0..20 {
                for b in 0..20 {
                    prop_assert_eq!(uf.connected(a, b), model.connected(a, b), "{}", name);
                }
            }
        }
    }
}
