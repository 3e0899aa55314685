use crate::graph::{GraphKind, VertexId};

/// Errors reported by graph operations.
///
/// Every variant is a programmer error detected before any mutation happens,
/// so a graph is left untouched when an operation fails.
/// An unreachable target is not an error: it is reported through the sentinel weight.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex index {index} is out of range for a graph of {vertex_size} vertices")]
    IndexOutOfRange { index: usize, vertex_size: usize },

    #[error("size mismatch: expected {expected} vertices, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("kind mismatch: expected {expected:?}, got {actual:?}")]
    KindMismatch {
        expected: GraphKind,
        actual: GraphKind,
    },

    /// Weights must be positive and below the unreachable sentinel.
    #[error("invalid edge weight {0}")]
    InvalidWeight(String),

    #[error("cannot contract {0:?} into itself")]
    SelfContraction(VertexId),

    #[error("vertex name {0:?} is already taken")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
