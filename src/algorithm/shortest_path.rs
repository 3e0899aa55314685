use crate::{algorithm::*, graph::*, Result};
use num_traits::{Saturating, Zero};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;

impl<S> AdjacencyMatrix<S>
where
    S: SquareStorage,
    S::Value: Weight,
{
    /// Weight of a shortest path from `source` to `target`,
    /// or [Weight::unreachable] if there is none.
    ///
    /// Path weights saturate at [Weight::unreachable],
    /// so a path too heavy to be represented counts as no path.
    pub fn shortest_distance(&self, source: VertexId, target: VertexId) -> Result<S::Value> {
        let src = self.check_vertex(source)?;
        let dst = self.check_vertex(target)?;
        Ok(self.dijkstra(src, dst))
    }

    pub fn is_reachable(&self, source: VertexId, target: VertexId) -> Result<bool> {
        self.shortest_distance(source, target)
            .map(|w| !w.is_unreachable())
    }

    /// Reachability between all ordered pairs. Every vertex reaches itself.
    pub fn reachability_matrix(&self) -> ReachabilityMatrix<S> {
        let n = self.vertex_size();
        let mut res = self.storage().rebind::<bool>();
        for i in 0..n {
            for j in 0..n {
                res.set(i, j, i == j || !self.dijkstra(i, j).is_unreachable());
            }
        }
        res
    }

    /// Shortest-path weights between all ordered pairs.
    ///
    /// The diagonal is `0`. Pairs without a path hold [Weight::unreachable].
    pub fn distance_matrix(&self) -> DistanceMatrix<S> {
        let n = self.vertex_size();
        let mut res = self.storage().rebind::<S::Value>();
        for i in 0..n {
            for j in 0..n {
                res.set(i, j, self.dijkstra(i, j));
            }
        }
        res
    }

    /// Dijkstra from `source` until `target` is settled.
    ///
    /// Zero cells are absent edges.
    /// Among unvisited vertices of equal tentative weight, the lowest index is settled first.
    fn dijkstra(&self, source: usize, target: usize) -> S::Value {
        if source == target {
            return S::Value::zero();
        }
        let n = self.vertex_size();
        let matrix = self.storage();
        let mut visited = vec![false; n];
        let mut tentative = vec![S::Value::unreachable(); n];
        let mut frontier: KeyedPriorityQueue<usize, Reverse<(S::Value, usize)>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        visited[source] = true;
        tentative[source] = S::Value::zero();
        let mut current = source;
        while current != target {
            for next in 0..n {
                let weight = matrix.get(current, next);
                if visited[next] || weight.is_zero() {
                    continue;
                }
                let candidate = tentative[current].saturating_add(weight);
                if candidate < tentative[next] {
                    tentative[next] = candidate;
                    let _ = frontier.push(next, Reverse((candidate, next)));
                }
            }
            match frontier.pop() {
                Some((next, _)) => {
                    visited[next] = true;
                    current = next;
                }
                None => {
                    #[cfg(feature = "logging")]
                    log::trace!("no path from {} to {}", source, target);
                    return S::Value::unreachable();
                }
            }
        }
        #[cfg(feature = "logging")]
        log::trace!(
            "shortest path from {} to {} weighs {}",
            source,
            target,
            tentative[target]
        );
        tentative[target]
    }
}
