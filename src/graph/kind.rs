/// Orientation and weighted-ness of a graph, fixed when the graph is created.
///
/// *   An undirected graph mirrors every edge write, so its matrix stays symmetric.
/// *   An unweighted graph records presence only: every edge is stored as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphKind {
    pub oriented: bool,
    pub weighted: bool,
}

impl GraphKind {
    pub const DIRECTED_WEIGHTED: GraphKind = GraphKind::new(true, true);
    pub const DIRECTED_UNWEIGHTED: GraphKind = GraphKind::new(true, false);
    pub const UNDIRECTED_WEIGHTED: GraphKind = GraphKind::new(false, true);
    pub const UNDIRECTED_UNWEIGHTED: GraphKind = GraphKind::new(false, false);

    pub const fn new(oriented: bool, weighted: bool) -> Self {
        Self { oriented, weighted }
    }
}

impl Default for GraphKind {
    fn default() -> Self {
        Self::DIRECTED_WEIGHTED
    }
}
