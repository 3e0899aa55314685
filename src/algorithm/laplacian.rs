use crate::{algorithm::*, graph::*};
use num_traits::{Saturating, Zero};

impl<S> AdjacencyMatrix<S>
where
    S: SquareStorage,
    S::Value: Weight,
{
    /// Sum over all `j` of `max(matrix[i][j], matrix[j][i])`.
    ///
    /// Each connection counts once even if both directions are populated.
    /// For directed graphs this is an aggregate, not an in- or out-degree.
    /// The sum saturates at [Weight::unreachable].
    fn aggregate_degree(&self, i: usize) -> S::Value {
        let matrix = self.storage();
        (0..self.vertex_size()).fold(S::Value::zero(), |acc, j| {
            acc.saturating_add(matrix.get(i, j).max(matrix.get(j, i)))
        })
    }

    /// Diagonal matrix of aggregate degrees.
    ///
    /// See [AdjacencyMatrix::kirchhoff_matrix] about how degrees aggregate.
    pub fn degree_matrix(&self) -> DegreeMatrix<S> {
        let mut res = self.storage().rebind::<S::Value>();
        for i in 0..self.vertex_size() {
            res.set(i, i, self.aggregate_degree(i));
        }
        res
    }

    /// The Kirchhoff (Laplacian) matrix, degree matrix minus adjacency matrix.
    ///
    /// The diagonal holds, for each vertex `i`, the sum over all `j` of
    /// `max(matrix[i][j], matrix[j][i])`, saturating at [Weight::unreachable].
    /// Off the diagonal, `[i][j]` is `-matrix[j][i]` if only the reverse edge exists,
    /// and `-matrix[i][j]` otherwise.
    pub fn kirchhoff_matrix(&self) -> KirchhoffMatrix<S> {
        let matrix = self.storage();
        let n = self.vertex_size();
        let mut res = matrix.rebind::<S::Value>();
        for i in 0..n {
            res.set(i, i, self.aggregate_degree(i));
            for j in (0..n).filter(|j| *j != i) {
                let forward = matrix.get(i, j);
                let backward = matrix.get(j, i);
                let x = if forward.is_zero() && !backward.is_zero() {
                    -backward
                } else {
                    -forward
                };
                res.set(i, j, x);
            }
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn directed_sample_degrees() {
        let g = sample_digraph();
        let trial = g.degree_matrix();
        let diagonal: Vec<_> = (0..7).map(|i| trial[(i, i)]).collect();
        assert_eq!(diagonal, vec![99, 90, 16, 48, 19, 15, 49]);
        for i in 0..7 {
            for j in (0..7).filter(|j| *j != i) {
                assert_eq!(trial[(i, j)], 0);
            }
        }
    }

    #[test]
    fn directed_sample_kirchhoff() {
        let g = sample_digraph();
        let trial = g.kirchhoff_matrix();
        let rows = trial.to_rows();
        assert_eq!(rows[0], vec![99, -21, -12, -25, -19, -15, -7]);
        assert_eq!(rows[1], vec![-21, 90, -4, -23, 0, 0, -42]);
        assert_eq!(rows[4], vec![-19, 0, 0, 0, 19, 0, 0]);
    }

    #[test]
    fn fixed_size_keeps_extent() {
        let mut g = FixedAdjacencyMatrix::<i32, 7>::new(GraphKind::DIRECTED_WEIGHTED);
        add_sample_edges(&mut g);
        let degrees: FixedSquare<i32, 7> = g.degree_matrix();
        let kirchhoff: FixedSquare<i32, 7> = g.kirchhoff_matrix();
        let oracle = sample_digraph();
        assert_eq!(degrees.to_rows(), oracle.degree_matrix().to_rows());
        assert_eq!(kirchhoff.to_rows(), oracle.kirchhoff_matrix().to_rows());
    }

    #[test]
    fn unweighted_undirected_path() {
        let mut g = FixedAdjacencyMatrix::<i8, 3>::new(GraphKind::UNDIRECTED_UNWEIGHTED);
        g.add_edge(VertexId(0), VertexId(1)).unwrap();
        g.add_edge(VertexId(1), VertexId(2)).unwrap();
        assert_eq!(
            g.kirchhoff_matrix().to_rows(),
            vec![vec![1, -1, 0], vec![-1, 2, -1], vec![0, -1, 1]]
        );
    }

    #[test]
    fn degrees_saturate() {
        let mut g = FixedAdjacencyMatrix::<i8, 3>::new(GraphKind::UNDIRECTED_WEIGHTED);
        g.connect_all_weighted(100).unwrap();
        assert_eq!(g.degree_matrix()[(0, 0)], i8::MAX);
    }

    #[quickcheck]
    fn undirected_rows_sum_to_self_loops(ops: Ops) {
        let g = ops.build();
        if g.is_oriented() {
            return;
        }
        let kirchhoff = g.kirchhoff_matrix();
        for i in 0..g.vertex_size() {
            let sum: i32 = kirchhoff.row(i).iter().sum();
            assert_eq!(sum, g.storage()[(i, i)]);
        }
    }

    #[quickcheck]
    fn kirchhoff_diagonal_is_degree(ops: Ops) {
        let g = ops.build();
        let kirchhoff = g.kirchhoff_matrix();
        let degrees = g.degree_matrix();
        for i in 0..g.vertex_size() {
            assert_eq!(kirchhoff[(i, i)], degrees[(i, i)]);
        }
    }
}
