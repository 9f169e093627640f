use algo_collections::LinkedStack;

use crate::graph::{Graph, VertexOutOfBounds};

/// Single-source reachability via recursive depth-first search.
///
/// The search runs once at construction and records, for every reached
/// vertex, the edge it was discovered through; paths are rebuilt on
/// demand by walking those edges back to the source.
///
/// # Examples
///
/// ```
/// use algo_graph::{DfsPaths, Graph};
///
/// let mut g = Graph::with_vertices(5);
/// g.add_edge(0, 1)?;
/// g.add_edge(1, 2)?;
/// g.add_edge(3, 4)?;
///
/// let paths = DfsPaths::new(&g, 0)?;
/// assert!(paths.has_path_to(2));
/// assert!(!paths.has_path_to(4));
/// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
/// assert_eq!(paths.count(), 3);
/// # Ok::<(), algo_graph::VertexOutOfBounds>(())
/// ```
pub struct DfsPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    count: usize,
}

impl DfsPaths {
    /// Search `graph` from `source`, visiting every reachable vertex.
    pub fn new(graph: &Graph, source: usize) -> Result<Self, VertexOutOfBounds> {
        let mut paths = Self {
            source,
            marked: vec![false; graph.v()],
            edge_to: vec![None; graph.v()],
            count: 0,
        };
        graph.validate_vertex(source)?;
        paths.dfs(graph, source);
        Ok(paths)
    }

    fn dfs(&mut self, graph: &Graph, v: usize) {
        self.marked[v] = true;
        self.count += 1;
        let neighbors = graph
            .adj(v)
            .expect("dfs only visits vertices inside the graph");
        for w in neighbors {
            if !self.marked[w] {
                self.edge_to[w] = Some(v);
                self.dfs(graph, w);
            }
        }
    }

    pub fn has_path_to(&self, target: usize) -> bool {
        self.marked.get(target).copied().unwrap_or(false)
    }

    /// Vertices reachable from the source, the source included.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Path from the source to `target` in source-to-target order, or
    /// `None` if `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.has_path_to(target) {
            return None;
        }
        // discovery edges run target-to-source; a stack reverses them
        let mut stack = LinkedStack::new();
        let mut current = target;
        while current != self.source {
            stack.push(current);
            current = self.edge_to[current]
                .expect("marked non-source vertices have a discovery edge");
        }
        stack.push(self.source);
        let mut path = Vec::new();
        while let Some(v) = stack.pop() {
            path.push(v);
        }
        Some(path)
    }
}
