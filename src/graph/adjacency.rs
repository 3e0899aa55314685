use crate::{graph::*, GraphError, Result};
use num_traits::{One, Zero};

/// A graph stored as an adjacency matrix.
///
/// `matrix[i][j] != 0` means an edge from `i` to `j` whose weight is the value.
/// The storage `S` decides whether the vertex count is fixed at compile time
/// ([FixedAdjacencyMatrix]) or resizable ([ResizableAdjacencyMatrix]).
/// All other behavior, including every derived matrix, is shared.
///
/// | Operation             | Complexity              |
/// | --------------------- | ----------------------- |
/// | `add_edge`            | `O(1)`                  |
/// | `remove_edge`         | `O(1)`                  |
/// | `clear_matrix`        | `O(V^2)`                |
/// | `edges`               | `O(V^2)`                |
/// | `shortest_distance`   | `O(V^2 log V)`          |
/// | `distance_matrix`     | `O(V^4 log V)` in the worst cases |
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<S> {
    kind: GraphKind,
    matrix: S,
    names: VertexNames,
}

/// Graphs whose vertex count `N` is a compile-time constant.
pub type FixedAdjacencyMatrix<W, const N: usize> = AdjacencyMatrix<FixedSquare<W, N>>;

/// Graphs whose vertex count is decided, and changed, at runtime.
///
/// Weights default to [DefaultWeight].
pub type ResizableAdjacencyMatrix<W = DefaultWeight> = AdjacencyMatrix<DynSquare<W>>;

impl<W: Weight, const N: usize> AdjacencyMatrix<FixedSquare<W, N>> {
    /// Creates a graph of `N` vertices without edges.
    pub fn new(kind: GraphKind) -> Self {
        Self::from_parts(kind, FixedSquare::new(), VertexNames::new())
    }
}

impl<W: Weight> AdjacencyMatrix<DynSquare<W>> {
    /// Creates a graph without vertices.
    pub fn new(kind: GraphKind) -> Self {
        Self::with_vertex_size(kind, 0)
    }

    /// Creates a graph of `vertex_size` vertices without edges.
    pub fn with_vertex_size(kind: GraphKind, vertex_size: usize) -> Self {
        Self::from_parts(
            kind,
            DynSquare::with_vertex_size(vertex_size),
            VertexNames::new(),
        )
    }
}

impl<S> std::fmt::Debug for AdjacencyMatrix<S>
where
    S: SquareStorage,
    S::Value: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyMatrix {:?} {{", self.kind)?;
        let n = self.vertex_size();
        for vid in VertexId::iter_all(n) {
            match self.names.name_of(vid) {
                Some(name) => writeln!(f, "{:?} {:?}:", vid, name)?,
                None => writeln!(f, "{:?}:", vid)?,
            }
            let src = vid.to_raw();
            for snk in 0..n {
                let w = self.matrix.get(src, snk);
                if !w.is_zero() {
                    writeln!(f, "  -> {:?} by {:?}", VertexId(snk), w)?;
                }
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl<S> AdjacencyMatrix<S>
where
    S: SquareStorage,
    S::Value: Weight,
{
    pub(crate) fn from_parts(kind: GraphKind, matrix: S, names: VertexNames) -> Self {
        Self {
            kind,
            matrix,
            names,
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_oriented(&self) -> bool {
        self.kind.oriented
    }

    pub fn is_weighted(&self) -> bool {
        self.kind.weighted
    }

    pub fn vertex_size(&self) -> usize {
        self.matrix.vertex_size()
    }

    /// Read-only access to the underlying matrix.
    pub fn storage(&self) -> &S {
        &self.matrix
    }

    pub(crate) fn storage_mut(&mut self) -> &mut S {
        &mut self.matrix
    }

    pub fn names(&self) -> &VertexNames {
        &self.names
    }

    pub(crate) fn names_mut(&mut self) -> &mut VertexNames {
        &mut self.names
    }

    pub(crate) fn check_vertex(&self, vid: VertexId) -> Result<usize> {
        let vertex_size = self.vertex_size();
        if vid.0 < vertex_size {
            Ok(vid.0)
        } else {
            Err(GraphError::IndexOutOfRange {
                index: vid.0,
                vertex_size,
            })
        }
    }

    /// Translates a requested weight into the value to store.
    fn check_weight(&self, weight: S::Value) -> Result<S::Value> {
        if !weight.is_valid_edge_weight() {
            Err(GraphError::InvalidWeight(weight.to_string()))
        } else if self.kind.weighted {
            Ok(weight)
        } else {
            Ok(S::Value::one())
        }
    }

    /// Writes a cell and, for undirected graphs, its mirror.
    pub(crate) fn write_edge(&mut self, src: usize, snk: usize, value: S::Value) {
        self.matrix.set(src, snk, value);
        if !self.kind.oriented {
            self.matrix.set(snk, src, value);
        }
    }

    /// Adds an edge of weight `1`, or overwrites the existing one.
    pub fn add_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()> {
        self.add_weighted_edge(source, sink, S::Value::one())
    }

    /// Adds an edge, or overwrites the existing one.
    ///
    /// For unweighted graphs, any valid weight is recorded as `1`.
    /// Weights must be positive and below [Weight::unreachable].
    pub fn add_weighted_edge(
        &mut self,
        source: VertexId,
        sink: VertexId,
        weight: S::Value,
    ) -> Result<()> {
        let src = self.check_vertex(source)?;
        let snk = self.check_vertex(sink)?;
        let value = self.check_weight(weight)?;
        self.write_edge(src, snk, value);
        Ok(())
    }

    pub fn remove_edge(&mut self, source: VertexId, sink: VertexId) -> Result<()> {
        let src = self.check_vertex(source)?;
        let snk = self.check_vertex(sink)?;
        self.write_edge(src, snk, S::Value::zero());
        Ok(())
    }

    pub fn edge_weight(&self, source: VertexId, sink: VertexId) -> Result<Option<S::Value>> {
        let src = self.check_vertex(source)?;
        let snk = self.check_vertex(sink)?;
        let w = self.matrix.get(src, snk);
        if w.is_zero() {
            Ok(None)
        } else {
            Ok(Some(w))
        }
    }

    pub fn has_edge(&self, source: VertexId, sink: VertexId) -> Result<bool> {
        self.edge_weight(source, sink).map(|w| w.is_some())
    }

    /// Removes all edges.
    pub fn clear_matrix(&mut self) {
        self.matrix.fill(S::Value::zero());
    }

    /// Connects every pair of vertices, self-loops included, with weight `1`.
    pub fn connect_all(&mut self) {
        self.matrix.fill(S::Value::one());
    }

    /// Connects every pair of vertices, self-loops included.
    pub fn connect_all_weighted(&mut self, weight: S::Value) -> Result<()> {
        let value = self.check_weight(weight)?;
        self.matrix.fill(value);
        Ok(())
    }

    /// Enumerates edges in row-major order.
    ///
    /// For undirected graphs only the upper triangle is scanned,
    /// so that each edge appears once.
    /// The order fixes columns of the incidence matrix.
    pub fn edges(&self) -> Vec<Edge> {
        let n = self.vertex_size();
        let mut eid_factory = EdgeIdFactory::new();
        let mut res = vec![];
        for src in 0..n {
            let start = if self.kind.oriented { 0 } else { src };
            for snk in start..n {
                if !self.matrix.get(src, snk).is_zero() {
                    res.push(Edge {
                        id: eid_factory.one_more(),
                        source: VertexId(src),
                        sink: VertexId(snk),
                    });
                }
            }
        }
        res
    }

    pub fn edge_size(&self) -> usize {
        self.edges().len()
    }

    pub fn set_vertex_name(&mut self, vid: VertexId, name: impl Into<String>) -> Result<()> {
        self.check_vertex(vid)?;
        self.names.set(vid, name.into())
    }

    pub fn vertex_name(&self, vid: VertexId) -> Option<&str> {
        self.names.name_of(vid)
    }

    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.names.vertex_of(name)
    }

    pub fn clear_vertex_name(&mut self, vid: VertexId) -> Option<String> {
        self.names.remove(vid)
    }
}
