//! Matrices derived from adjacency-matrix graphs, and the shortest-path engine behind some of them.
//!
//! Every derived matrix is computed on demand as an independent snapshot.
//! Square ones come in the shape of the graph's storage:
//! fixed-extent for fixed-size graphs, resizable for resizable graphs.
use crate::graph::SquareStorage;

mod incidence;
pub use self::incidence::*;
mod laplacian;
mod shortest_path;
pub mod table;

/// Diagonal matrix of aggregate degrees.
pub type DegreeMatrix<S> = <S as SquareStorage>::Rebind<<S as SquareStorage>::Value>;
/// Whether a path exists between each ordered pair of vertices.
pub type ReachabilityMatrix<S> = <S as SquareStorage>::Rebind<bool>;
/// Shortest-path weights between each ordered pair of vertices.
pub type DistanceMatrix<S> = <S as SquareStorage>::Rebind<<S as SquareStorage>::Value>;
/// Degree matrix minus adjacency matrix.
pub type KirchhoffMatrix<S> = <S as SquareStorage>::Rebind<<S as SquareStorage>::Value>;
