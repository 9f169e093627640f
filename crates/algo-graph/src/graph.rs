use algo_collections::Bag;
use thiserror::Error;

/// Edge endpoint outside the graph's vertex range.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("vertex {vertex} out of bounds for graph with {vertices} vertices")]
pub struct VertexOutOfBounds {
    pub vertex: usize,
    pub vertices: usize,
}

/// Undirected graph over vertices `0..v`, adjacency stored as one
/// [`Bag`] per vertex.
///
/// Parallel edges and self-loops are permitted; each `add_edge` records
/// the edge in both endpoint bags (a self-loop therefore appears twice
/// in its vertex's adjacency).
///
/// # Examples
///
/// ```
/// use algo_graph::Graph;
///
/// let mut g = Graph::with_vertices(4);
/// g.add_edge(0, 1)?;
/// g.add_edge(1, 2)?;
/// assert_eq!(g.e(), 2);
/// assert_eq!(g.degree(1), Ok(2));
/// assert!(g.add_edge(0, 9).is_err());
/// # Ok::<(), algo_graph::VertexOutOfBounds>(())
/// ```
pub struct Graph {
    adj: Vec<Bag<usize>>,
    e: usize,
}

impl Graph {
    pub fn with_vertices(v: usize) -> Self {
        let mut adj = Vec::with_capacity(v);
        adj.resize_with(v, Bag::new);
        Self { adj, e: 0 }
    }

    /// Number of vertices.
    pub fn v(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges.
    pub fn e(&self) -> usize {
        self.e
    }

    /// Confirm `vertex` lies in `0..v`.
    pub fn validate_vertex(&self, vertex: usize) -> Result<(), VertexOutOfBounds> {
        if vertex >= self.adj.len() {
            return Err(VertexOutOfBounds {
                vertex,
                vertices: self.adj.len(),
            });
        }
        Ok(())
    }

    /// Add the undirected edge `a`–`b`, rejecting endpoints outside
    /// `0..v` without mutating the graph.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), VertexOutOfBounds> {
        self.validate_vertex(a)?;
        self.validate_vertex(b)?;
        self.adj[a].add(b);
        self.adj[b].add(a);
        self.e += 1;
        Ok(())
    }

    /// Vertices adjacent to `vertex`.
    pub fn adj(&self, vertex: usize) -> Result<impl Iterator<Item = usize> + '_, VertexOutOfBounds> {
        self.validate_vertex(vertex)?;
        Ok(self.adj[vertex].iter().copied())
    }

    pub fn degree(&self, vertex: usize) -> Result<usize, VertexOutOfBounds> {
        self.validate_vertex(vertex)?;
        Ok(self.adj[vertex].len())
    }
}
