use super::VertexId;

/// ID for edges, which are essentially `usize`.
///
/// Edge IDs are positions in the row-major enumeration of a graph's edges,
/// thus they are also column indices of its incidence matrix.
/// They are only meaningful for the graph state they were enumerated from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` in enumeration order.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

/// An edge found by enumerating a graph.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub sink: VertexId,
}

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub fn to_raw(&self) -> usize {
        self.0
    }
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.sink
    }

    /// Whether `v` is one of the endpoints.
    pub fn touches(&self, v: VertexId) -> bool {
        self.source == v || self.sink == v
    }
}
