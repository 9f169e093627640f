//! Depth-first search against an iterative breadth-first model.

use algo_graph::{DfsPaths, Graph};
use proptest::prelude::*;

const V: usize = 12;

fn build(edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::with_vertices(V);
    for &(a, b) in edges {
        g.add_edge(a, b).unwrap();
    }
    g
}

/// Reachable set computed by an explicit-queue traversal, independent of
/// the recursive search under test.
fn model_reachable(edges: &[(usize, usize)], source: usize) -> Vec<bool> {
    let mut adj = vec![Vec::new(); V];
    for &(a, b) in edges {
        adj[a].push(b);
        adj[b].push(a);
    }
    let mut reached = vec![false; V];
    let mut frontier = vec![source];
    reached[source] = true;
    while let Some(v) = frontier.pop() {
        for &w in &adj[v] {
            if !reached[w] {
                reached[w] = true;
                frontier.push(w);
            }
        }
    }
    reached
}

#[test]
fn test_textbook_tiny_graph() {
    let edges = [
        (0, 5),
        (4, 3),
        (0, 1),
        (9, 11),
        (6, 4),
        (5, 4),
        (0, 2),
        (11, 9),
        (0, 6),
        (7, 8),
        (9, 10),
        (5, 3),
    ];
    let g = build(&edges);
    let paths = DfsPaths::new(&g, 0).unwrap();
    for v in [1, 2, 3, 4, 5, 6] {
        assert!(paths.has_path_to(v), "vertex {v}");
    }
    for v in [7, 8, 9, 10, 11] {
        assert!(!paths.has_path_to(v), "vertex {v}");
    }
    assert_eq!(paths.count(), 7);
}

proptest! {
    #[test]
    fn prop_dfs_reaches_exactly_the_model_set(
        edges in prop::collection::vec((0..V, 0..V), 0..40),
        source in 0..V,
    ) {
        let g = build(&edges);
        let paths = DfsPaths::new(&g, source).unwrap();
        let reached = model_reachable(&edges, source);
        for v in 0..V {
            prop_assert_eq!(paths.has_path_to(v), reached[v], "vertex {}", v);
        }
        prop_assert_eq!(paths.count(), reached.iter().filter(|r| **r).count());
    }

    #[test]
    fn prop_paths_are_walks_from_source(
        edges in prop::collection::vec((0..V, 0..V), 0..40),
        source in 0..V,
        target in 0..V,
    ) {
        let g = build(&edges);
        let paths = DfsPaths::new(&g, source).unwrap();
        match paths.path_to(target) {
            None => prop_assert!(!paths.has_path_to(target)),
            Some(path) => {
                prop_assert_eq!(path.first(), Some(&source));
                prop_assert_eq!(path.last(), Some(&target));
                for pair in path.windows(2) {
                    let adjacent = g.adj(pair[0]).unwrap().any(|w| w == pair[1]);
                    prop_assert!(adjacent, "{} and {} must share an edge", pair[0], pair[1]);
                }
            }
        }
    }
}
