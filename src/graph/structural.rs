use crate::{graph::*, GraphError, Result};
use num_traits::{One, Zero};

impl<W: Weight> AdjacencyMatrix<DynSquare<W>> {
    /// Grows or shrinks the graph to `vertex_size` vertices.
    ///
    /// New vertices come without edges.
    /// Shrinking silently drops edges and names of the vertices cut off.
    pub fn resize(&mut self, vertex_size: usize) {
        #[cfg(feature = "logging")]
        log::debug!("resize graph from {} to {} vertices", self.vertex_size(), vertex_size);
        self.storage_mut().resize(vertex_size);
        self.names_mut().truncate(vertex_size);
    }

    /// Appends a vertex without edges and returns it.
    pub fn add_vertex(&mut self) -> VertexId {
        let vid = VertexId(self.vertex_size());
        #[cfg(feature = "logging")]
        log::debug!("add {:?}", vid);
        self.storage_mut().push_vertex();
        vid
    }

    /// Removes a vertex together with its edges.
    ///
    /// Vertices of higher indices shift down by one.
    pub fn remove_vertex(&mut self, vid: VertexId) -> Result<()> {
        let idx = self.check_vertex(vid)?;
        #[cfg(feature = "logging")]
        log::debug!("remove {:?} of {} vertices", vid, self.vertex_size());
        self.storage_mut().remove_vertex(idx);
        self.names_mut().remove_and_shift(vid);
        Ok(())
    }
}

impl<S> AdjacencyMatrix<S>
where
    S: SquareStorage,
    S::Value: Weight,
{
    /// Copies the graph into a resizable one.
    pub fn to_resizable(&self) -> ResizableAdjacencyMatrix<S::Value> {
        AdjacencyMatrix::from_parts(
            self.kind(),
            DynSquare::from_storage(self.storage()),
            self.names().clone(),
        )
    }

    /// Extracts the sub-graph induced by all vertices but `vid`.
    ///
    /// Vertices of higher indices shift down by one in the result.
    pub fn without_vertex(&self, vid: VertexId) -> Result<ResizableAdjacencyMatrix<S::Value>> {
        let idx = self.check_vertex(vid)?;
        let mut res = self.to_resizable();
        res.storage_mut().remove_vertex(idx);
        res.names_mut().remove_and_shift(vid);
        Ok(res)
    }

    /// Contracts `merge` into `keep`.
    ///
    /// The result lacks `merge`.
    /// Every edge between `merge` and some other vertex `n` is rewired to connect `keep` and `n`,
    /// in the same direction for directed graphs.
    /// Where `keep` and `n` are already connected, the existing edge wins.
    /// Edges between `keep` and `merge`, and self-loops on `merge`, disappear.
    ///
    /// `keep` is shifted down by one in the result if it is above `merge`.
    pub fn pull_edge(
        &self,
        keep: VertexId,
        merge: VertexId,
    ) -> Result<ResizableAdjacencyMatrix<S::Value>> {
        let k = self.check_vertex(keep)?;
        let m = self.check_vertex(merge)?;
        if k == m {
            return Err(GraphError::SelfContraction(merge));
        }
        #[cfg(feature = "logging")]
        log::debug!("contract {:?} into {:?}", merge, keep);
        let mut res = self.without_vertex(merge)?;
        let shifted = |x: usize| if x > m { x - 1 } else { x };
        let kk = shifted(k);
        let matrix = self.storage();
        for n in (0..self.vertex_size()).filter(|n| *n != k && *n != m) {
            let nn = shifted(n);
            let out = matrix.get(m, n);
            if !out.is_zero() && res.storage().get(kk, nn).is_zero() {
                res.write_edge(kk, nn, out);
            }
            if self.is_oriented() {
                let inc = matrix.get(n, m);
                if !inc.is_zero() && res.storage().get(nn, kk).is_zero() {
                    res.write_edge(nn, kk, inc);
                }
            }
        }
        Ok(res)
    }

    /// Intersects edges of two graphs of the same kind.
    ///
    /// Without `removed`, both graphs must have the same number of vertices.
    /// With `removed`, one of them must have exactly one more vertex,
    /// and `removed` is taken out of that larger graph before comparing.
    ///
    /// The result has an edge `(i, j)`, of weight `1`,
    /// iff both graphs hold the same nonzero value at `(i, j)`.
    /// Vertex names are taken from `self`.
    pub fn graph_intersection<S2>(
        &self,
        other: &AdjacencyMatrix<S2>,
        removed: Option<VertexId>,
    ) -> Result<ResizableAdjacencyMatrix<S::Value>>
    where
        S2: SquareStorage<Value = S::Value>,
    {
        if self.kind() != other.kind() {
            return Err(GraphError::KindMismatch {
                expected: self.kind(),
                actual: other.kind(),
            });
        }
        let (left_size, right_size) = (self.vertex_size(), other.vertex_size());
        let (left, right) = match removed {
            None if left_size == right_size => (self.to_resizable(), other.to_resizable()),
            None => {
                return Err(GraphError::SizeMismatch {
                    expected: left_size,
                    actual: right_size,
                })
            }
            Some(vid) if right_size == left_size + 1 => {
                (self.to_resizable(), other.without_vertex(vid)?)
            }
            Some(vid) if left_size == right_size + 1 => {
                (self.without_vertex(vid)?, other.to_resizable())
            }
            Some(_) => {
                return Err(GraphError::SizeMismatch {
                    expected: left_size + 1,
                    actual: right_size,
                })
            }
        };
        #[cfg(feature = "logging")]
        log::debug!("intersect graphs of {} vertices", left.vertex_size());
        let n = left.vertex_size();
        let mut res: ResizableAdjacencyMatrix<S::Value> = AdjacencyMatrix::from_parts(
            self.kind(),
            DynSquare::with_vertex_size(n),
            left.names().clone(),
        );
        for i in 0..n {
            for j in 0..n {
                let x = left.storage().get(i, j);
                if !x.is_zero() && x == right.storage().get(i, j) {
                    res.storage_mut().set(i, j, S::Value::one());
                }
            }
        }
        Ok(res)
    }
}
