/*!
# Weighted Shortest Paths

Edge labels are interpreted as edge weights. Path costs are summed as [`Cost`] so that
long paths over large labels do not overflow.

- [`ShortestPaths::dijkstra_shortest_path`] requires non-negative labels.
- [`ShortestPaths::bellman_ford_shortest_path`] handles negative labels and detects negative
  cycles reachable from the source.
- [`ShortestPaths::all_pairs_shortest_paths`] computes the full distance matrix (Floyd–Warshall).

Unreachable targets have cost `None`.
*/

use super::*;

/// Total weight of a path
pub type Cost = i64;

/// Single-source and all-pairs shortest path computations
pub trait ShortestPaths: AdjacencyList {
    /// Computes the cost of a cheapest directed path from `src` to every vertex.
    ///
    /// All labels are assumed to be non-negative. Uses the array-based variant of
    /// Dijkstra's algorithm in time `O(n^2 + m)`. If `src` is not a vertex of the graph,
    /// every vertex is unreachable.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1, 1), (1, 6, 2), (1, 2, 3)]);
    /// assert_eq!(g.dijkstra_shortest_path(0), vec![Some(0), Some(1), Some(7), Some(3)]);
    /// assert_eq!(g.dijkstra_shortest_path(2), vec![None, None, Some(0), None]);
    /// ```
    fn dijkstra_shortest_path(&self, src: Node) -> Vec<Option<Cost>> {
        let mut costs: Vec<Option<Cost>> = vec![None; self.len()];
        if !self.contains_vertex(src) {
            return costs;
        }

        let mut settled = NodeBitSet::new(self.vertex_count());
        costs[src as usize] = Some(0);

        while let Some((u, cost)) = self
            .vertices()
            .filter(|&u| !settled.get_bit(u))
            .filter_map(|u| Some((u, costs[u as usize]?)))
            .min_by_key(|&(_, cost)| cost)
        {
            settled.set_bit(u);

            for LabelledEdge(_, label, v) in self.out_edges_of(u) {
                let relaxed = cost + label as Cost;
                if !settled.get_bit(v) && costs[v as usize].is_none_or(|c| relaxed < c) {
                    costs[v as usize] = Some(relaxed);
                }
            }
        }

        costs
    }

    /// Computes the cost of a cheapest directed path from `src` to every vertex, allowing
    /// negative labels.
    ///
    /// Runs at most `n - 1` rounds of edge relaxations, stopping early once no cost changes.
    /// Fails with [`AlgoError::NegativeCycle`] if a cycle of negative weight is reachable
    /// from `src`; negative cycles elsewhere in the graph do not matter.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = AdjList::from_edges(3, [(0, 4, 1), (1, -3, 2), (0, 2, 2)]);
    /// assert_eq!(g.bellman_ford_shortest_path(0), Ok(vec![Some(0), Some(4), Some(1)]));
    ///
    /// g.set_edge(2, 1, 1);
    /// assert_eq!(g.bellman_ford_shortest_path(0), Err(AlgoError::NegativeCycle));
    /// ```
    fn bellman_ford_shortest_path(&self, src: Node) -> AlgoResult<Vec<Option<Cost>>> {
        let mut costs: Vec<Option<Cost>> = vec![None; self.len()];
        if !self.contains_vertex(src) {
            return Ok(costs);
        }
        costs[src as usize] = Some(0);

        for round in 1..self.len() {
            if !relax_edges(self, &mut costs) {
                trace!(round, "costs are stable");
                return Ok(costs);
            }
        }

        if relax_edges(self, &mut costs) {
            debug!(src, "negative cycle reachable from source");
            return Err(AlgoError::NegativeCycle);
        }

        Ok(costs)
    }

    /// Computes the cost of a cheapest directed path between every ordered pair of vertices.
    ///
    /// Entry `[u][v]` is `None` iff `v` is not reachable from `u`. The diagonal is `0` unless
    /// a cheaper closed walk exists. Fails with [`AlgoError::NegativeCycle`] if the graph
    /// contains any cycle of negative weight. Runs in time `O(n^3)`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, -2, 1), (1, 5, 2)]);
    /// let costs = g.all_pairs_shortest_paths().unwrap();
    ///
    /// assert_eq!(costs[0], vec![Some(0), Some(-2), Some(3)]);
    /// assert_eq!(costs[2], vec![None, None, Some(0)]);
    /// ```
    fn all_pairs_shortest_paths(&self) -> AlgoResult<Vec<Vec<Option<Cost>>>> {
        let n = self.len();
        let mut costs: Vec<Vec<Option<Cost>>> = vec![vec![None; n]; n];

        for u in self.vertices() {
            costs[u as usize][u as usize] = Some(0);
            for LabelledEdge(_, label, v) in self.out_edges_of(u) {
                let entry = &mut costs[u as usize][v as usize];
                *entry = Some(entry.map_or(label as Cost, |c| c.min(label as Cost)));
            }
        }

        for k in 0..n {
            let via_row = costs[k].clone();
            for row in costs.iter_mut() {
                let Some(to_k) = row[k] else {
                    continue;
                };

                for (entry, from_k) in row.iter_mut().zip(&via_row) {
                    let Some(from_k) = *from_k else {
                        continue;
                    };

                    let relaxed = to_k.saturating_add(from_k);
                    if entry.is_none_or(|c| relaxed < c) {
                        *entry = Some(relaxed);
                    }
                }
            }
        }

        if let Some(u) = (0..n).find(|&u| costs[u][u].is_some_and(|c| c < 0)) {
            debug!(u, "vertex lies on a negative cycle");
            return Err(AlgoError::NegativeCycle);
        }

        Ok(costs)
    }
}

impl<G> ShortestPaths for G where G: AdjacencyList {}

/// Relaxes every edge leaving a reached vertex once.
/// Returns *true* if any cost decreased.
fn relax_edges<G>(graph: &G, costs: &mut [Option<Cost>]) -> bool
where
    G: AdjacencyList,
{
    let mut changed = false;
    for u in graph.vertices() {
        let Some(cost) = costs[u as usize] else {
            continue;
        };

        for LabelledEdge(_, label, v) in graph.out_edges_of(u) {
            let relaxed = cost.saturating_add(label as Cost);
            if costs[v as usize].is_none_or(|c| relaxed < c) {
                costs[v as usize] = Some(relaxed);
                changed = true;
            }
        }
    }
    changed
}
