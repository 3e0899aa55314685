//! Adjacency-matrix graphs, both directed and undirected, weighted and unweighted,
//! of a vertex count fixed at compile time or resizable at runtime.
//!
//! The engine stores edges in a square matrix and derives from it, on demand,
//! the incidence, degree, reachability, distance and Kirchhoff (Laplacian) matrices.
//! Derived matrices are snapshots: they never alias the graph they come from.
//!
//! ```rust
//! use matrixgraph::{algorithm::table::*, graph::*};
//!
//! let mut g = ResizableAdjacencyMatrix::<i32>::with_vertex_size(GraphKind::DIRECTED_WEIGHTED, 3);
//! g.add_weighted_edge(VertexId(0), VertexId(1), 4).unwrap();
//! g.add_weighted_edge(VertexId(1), VertexId(2), 5).unwrap();
//!
//! let distances = g.distance_matrix();
//! assert_eq!(distances[(0, 2)], 9);
//! assert_eq!(distances[(2, 0)], i32::unreachable());
//!
//! let table = g.storage().table().title("Adjacency Matrix").to_string();
//! assert!(table.starts_with("=====Adjacency Matrix=====\n"));
//! ```
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
