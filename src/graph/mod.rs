//! Adjacency-matrix graphs and the types they are made of.
//!
//! # Fixed-size and resizable graphs
//!
//! [AdjacencyMatrix] is generic over its storage, a [SquareStorage].
//! [FixedSquare] has a vertex count fixed at compile time,
//! thus so do [FixedAdjacencyMatrix] and all matrices derived from it.
//! [DynSquare] has a vertex count decided at runtime;
//! [ResizableAdjacencyMatrix] can grow and shrink via `resize`, `add_vertex` and `remove_vertex`.
//!
//! # Kinds of graphs
//!
//! Whether a graph is directed and whether it is weighted is a [GraphKind],
//! given when the graph is created and never changed afterwards.
//!
//! # Vertices and edges
//!
//! Vertices are lightweight indices, [VertexId].
//! Edges are not stored as such: they are cells of the matrix.
//! Enumerating them gives [Edge]s whose [EdgeId]s are positions in the enumeration.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod weight;
pub use self::weight::*;
mod kind;
pub use self::kind::*;
mod storage;
pub use self::storage::*;
mod names;
pub use self::names::*;
mod adjacency;
pub use self::adjacency::*;
mod structural;

#[cfg(test)]
pub(crate) use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::Arbitrary;
    use quickcheck_macros::quickcheck;
    use rs_quickcheck_util::*;

    /// The directed weighted graph of 7 vertices used across tests.
    pub(crate) const SAMPLE_EDGES: [(usize, usize, i32); 9] = [
        (0, 2, 12),
        (0, 4, 19),
        (0, 5, 15),
        (0, 6, 7),
        (1, 0, 21),
        (2, 1, 4),
        (3, 0, 25),
        (3, 1, 23),
        (6, 1, 42),
    ];

    pub(crate) fn add_sample_edges<S>(g: &mut AdjacencyMatrix<S>)
    where
        S: SquareStorage<Value = i32>,
    {
        for (src, snk, w) in SAMPLE_EDGES.iter() {
            g.add_weighted_edge(VertexId(*src), VertexId(*snk), *w)
                .unwrap();
        }
    }

    pub(crate) fn sample_digraph() -> ResizableAdjacencyMatrix<i32> {
        let mut g = ResizableAdjacencyMatrix::<i32>::new(GraphKind::DIRECTED_WEIGHTED);
        g.resize(7);
        add_sample_edges(&mut g);
        g
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Op {
        AddVertex,
        RemoveVertex(VertexId),
        AddEdge((VertexId, VertexId, i32)),
        RemoveEdge((VertexId, VertexId)),
    }

    /// A random kind of graph and a random sequence of valid operations on it.
    #[derive(Clone)]
    pub(crate) struct Ops {
        pub(crate) kind: GraphKind,
        pub(crate) ops: Vec<Op>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?} {:?}", self.kind, self.ops)
        }
    }

    impl Ops {
        pub(crate) fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
            self.ops.iter()
        }

        pub(crate) fn build(&self) -> ResizableAdjacencyMatrix<i32> {
            let mut g = ResizableAdjacencyMatrix::<i32>::new(self.kind);
            for op in self.iter() {
                match op {
                    Op::AddVertex => {
                        let _ = g.add_vertex();
                    }
                    Op::RemoveVertex(vid) => g.remove_vertex(*vid).unwrap(),
                    Op::AddEdge((src, snk, w)) => g.add_weighted_edge(*src, *snk, *w).unwrap(),
                    Op::RemoveEdge((src, snk)) => g.remove_edge(*src, *snk).unwrap(),
                }
            }
            g
        }
    }

    impl quickcheck::Arbitrary for Ops {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let kind = GraphKind::new(bool::arbitrary(g), bool::arbitrary(g));
            let mut vertex_size = 0usize;
            let ops = gen_bytes(g, b"abcde.", b'.', 0..)
                .iter()
                .filter_map(|_| match u8::arbitrary(g) % 5 {
                    0 | 1 => {
                        vertex_size += 1;
                        Some(Op::AddVertex)
                    }
                    2 => {
                        if vertex_size == 0 {
                            None
                        } else {
                            let vid = VertexId(usize::arbitrary(g) % vertex_size);
                            vertex_size -= 1;
                            Some(Op::RemoveVertex(vid))
                        }
                    }
                    3 => {
                        if vertex_size == 0 {
                            None
                        } else {
                            let src = VertexId(usize::arbitrary(g) % vertex_size);
                            let snk = VertexId(usize::arbitrary(g) % vertex_size);
                            let w = i32::from(u8::arbitrary(g) % 50) + 1;
                            Some(Op::AddEdge((src, snk, w)))
                        }
                    }
                    4 => {
                        if vertex_size == 0 {
                            None
                        } else {
                            let src = VertexId(usize::arbitrary(g) % vertex_size);
                            let snk = VertexId(usize::arbitrary(g) % vertex_size);
                            Some(Op::RemoveEdge((src, snk)))
                        }
                    }
                    _ => unreachable!(),
                })
                .collect();
            Self { kind, ops }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.ops.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.ops = me.ops[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }

    #[quickcheck]
    fn undirected_graphs_stay_symmetric(ops: Ops) {
        let g = ops.build();
        if g.is_oriented() {
            return;
        }
        let rows = g.storage().to_rows();
        for (i, row) in rows.iter().enumerate() {
            for (j, x) in row.iter().enumerate() {
                assert_eq!(*x, rows[j][i]);
            }
        }
    }

    #[quickcheck]
    fn unweighted_graphs_store_presence(ops: Ops) {
        let g = ops.build();
        if g.is_weighted() {
            return;
        }
        for row in g.storage().to_rows() {
            assert!(row.iter().all(|x| *x == 0 || *x == 1));
        }
    }

    #[quickcheck]
    fn enumerated_edges_match_the_matrix(ops: Ops) {
        let g = ops.build();
        let rows = g.storage().to_rows();
        let cells = rows.iter().flatten().filter(|x| **x != 0).count();
        let loops = (0..g.vertex_size()).filter(|i| rows[*i][*i] != 0).count();
        let edges = g.edges();
        if g.is_oriented() {
            assert_eq!(edges.len(), cells);
        } else {
            assert_eq!(edges.len() * 2 - loops, cells);
        }
        for (i, e) in edges.iter().enumerate() {
            assert_eq!(e.id, EdgeId(i));
            assert_ne!(rows[e.source.to_raw()][e.sink.to_raw()], 0);
        }
    }

    #[quickcheck]
    fn fixed_and_resizable_agree(ops: Ops) {
        let mut g = ops.build();
        g.resize(6);
        let mut fixed = FixedAdjacencyMatrix::<i32, 6>::new(g.kind());
        for e in g.edges() {
            let w = g.edge_weight(e.source, e.sink).unwrap().unwrap();
            fixed.add_weighted_edge(e.source, e.sink, w).unwrap();
        }
        assert_eq!(fixed.storage().to_rows(), g.storage().to_rows());
        assert_eq!(fixed.edges(), g.edges());
        assert_eq!(fixed.incidence_matrix(), g.incidence_matrix());
        assert_eq!(fixed.degree_matrix().to_rows(), g.degree_matrix().to_rows());
        assert_eq!(
            fixed.kirchhoff_matrix().to_rows(),
            g.kirchhoff_matrix().to_rows()
        );
        assert_eq!(
            fixed.distance_matrix().to_rows(),
            g.distance_matrix().to_rows()
        );
        assert_eq!(
            fixed.reachability_matrix().to_rows(),
            g.reachability_matrix().to_rows()
        );
    }
}
