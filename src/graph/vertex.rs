/// Index of a vertex, which is essentially `usize`.
///
/// Vertices of a graph with `n` vertices are always `VertexId(0)` up to `VertexId(n - 1)`.
/// Removing a vertex shifts every higher index down by one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn to_raw(&self) -> usize {
        self.0
    }

    /// Iterates over all vertices of a graph with `vertex_size` vertices.
    pub fn iter_all(vertex_size: usize) -> impl Iterator<Item = VertexId> {
        (0..vertex_size).map(VertexId)
    }
}
