//! Undirected graphs and single-source depth-first search.
//!
//! [`Graph`] keeps one adjacency [`algo_collections::Bag`] per vertex;
//! vertices are dense `usize` indices in `0..v`. Edge insertion
//! validates both endpoints and reports a [`VertexOutOfBounds`] error
//! instead of panicking.
//!
//! [`DfsPaths`] searches from one source at construction time and then
//! answers reachability, reach counts, and source-to-target paths in
//! time proportional to the answer.
//!
//! # Examples
//!
//! ```
//! use algo_graph::{DfsPaths, Graph};
//!
//! let mut g = Graph::with_vertices(6);
//! for (a, b) in [(0, 5), (2, 4), (2, 3), (1, 2), (0, 1), (3, 4), (3, 5), (0, 2)] {
//!     g.add_edge(a, b)?;
//! }
//!
//! let paths = DfsPaths::new(&g, 0)?;
//! assert!(paths.has_path_to(4));
//! assert_eq!(paths.count(), 6);
//! # Ok::<(), algo_graph::VertexOutOfBounds>(())
//! ```

pub mod dfs;
pub mod graph;

pub use dfs::DfsPaths;
pub use graph::{Graph, VertexOutOfBounds};
