use crate::graph::*;
use std::ops::Index;

/// Vertices-by-edges matrix.
///
/// Columns follow the enumeration order of [AdjacencyMatrix::edges].
/// *   For directed graphs, a column holds `-1` at the source and `1` at the sink of its edge.
///     A self-loop shows only `1`.
/// *   For undirected graphs, a column holds `1` at every endpoint of its edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceMatrix {
    vertex_size: usize,
    edges: Vec<Edge>,
    cells: Vec<i8>,
}

impl IncidenceMatrix {
    pub fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    pub fn edge_size(&self) -> usize {
        self.edges.len()
    }

    /// Edges labelling the columns.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn get(&self, vertex: usize, edge: usize) -> i8 {
        self[(vertex, edge)]
    }

    /// Panics if `vertex` is out of range, even when there is no edge.
    pub fn row(&self, vertex: usize) -> &[i8] {
        assert!(vertex < self.vertex_size);
        let start = vertex * self.edges.len();
        &self.cells[start..start + self.edges.len()]
    }

    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        (0..self.vertex_size).map(|v| self.row(v).to_vec()).collect()
    }
}

impl Index<(usize, usize)> for IncidenceMatrix {
    type Output = i8;

    fn index(&self, (vertex, edge): (usize, usize)) -> &i8 {
        assert!(vertex < self.vertex_size && edge < self.edges.len());
        &self.cells[vertex * self.edges.len() + edge]
    }
}

impl<S> AdjacencyMatrix<S>
where
    S: SquareStorage,
    S::Value: Weight,
{
    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        let vertex_size = self.vertex_size();
        let edges = self.edges();
        let edge_size = edges.len();
        let mut cells = vec![0i8; vertex_size * edge_size];
        for (col, e) in edges.iter().enumerate() {
            let src = e.source.to_raw() * edge_size + col;
            let snk = e.sink.to_raw() * edge_size + col;
            if self.is_oriented() {
                cells[src] = -1;
                cells[snk] = 1;
            } else {
                cells[src] = 1;
                cells[snk] = 1;
            }
        }
        IncidenceMatrix {
            vertex_size,
            edges,
            cells,
        }
    }
}
