/*!
# Matching Algorithms

This module provides **maximum matchings** in bipartite graphs.

A *matching* is a set of edges without shared endpoints; a **maximum matching** is the
largest possible one. Matchings are computed on the undirected view of the graph,
where the bipartition is given by [`BipartiteTest::bipartite_graph`]: nodes of color `0`
form the *left* side, nodes of color `1` the *right* side.
*/

use std::collections::VecDeque;

use itertools::Itertools;

use super::*;

/// A trait providing matching algorithms on bipartite graphs.
pub trait BipartiteMatching: AdjacencyList + BipartiteTest {
    /// Computes a **maximum matching** on the undirected view of a bipartite graph.
    ///
    /// Returns pairs `Edge(left, right)` sorted by their left node, where `left` has
    /// color `0` in [`BipartiteTest::bipartite_graph`].
    /// Fails with [`AlgoError::NotBipartite`] if the graph is not bipartite.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 3), (0, 2), (1, 2)]);
    /// assert_eq!(g.maximum_bipartite_matching(), Ok(vec![Edge(0, 3), Edge(1, 2)]));
    /// ```
    fn maximum_bipartite_matching(&self) -> AlgoResult<Vec<Edge>> {
        let coloring = self.bipartite_graph().ok_or(AlgoError::NotBipartite)?;
        let is_left = |u: Node| coloring[u as usize] == 0;

        /*
        Augmenting path search starting at every free left node:
         - a BFS alternates between left nodes and their (undirected) neighbors on the right,
         - a free right node ends an augmenting path, which is flipped along the BFS predecessors,
         - a matched right node continues the search at its mate.
        */
        let mut mate: Vec<Option<Node>> = vec![None; self.len()];
        let mut pred = vec![0; self.len()];
        let mut visited = NodeBitSet::new(self.vertex_count());
        let mut queue = VecDeque::new();

        for root in self.vertices().filter(|&u| is_left(u)) {
            if mate[root as usize].is_some() {
                continue;
            }

            visited.clear_all();
            queue.clear();
            queue.push_back(root);

            'search: while let Some(u) = queue.pop_front() {
                for r in self.adjacent(u) {
                    if visited.set_bit(r) {
                        continue;
                    }
                    pred[r as usize] = u;

                    match mate[r as usize] {
                        Some(l) => queue.push_back(l),
                        None => {
                            let mut r = r;
                            loop {
                                let l = pred[r as usize];
                                let prev = mate[l as usize].replace(r);
                                mate[r as usize] = Some(l);
                                match prev {
                                    Some(next) => r = next,
                                    None => break,
                                }
                            }
                            break 'search;
                        }
                    }
                }
            }
        }

        let matching = self
            .vertices()
            .filter(|&u| is_left(u))
            .filter_map(|u| Some(Edge(u, mate[u as usize]?)))
            .collect_vec();

        trace!(size = matching.len(), "maximum bipartite matching");
        Ok(matching)
    }

    /// Computes a **maximum matching** as a graph on the same vertex set that contains
    /// an edge `(left, right)` with label `0` for every matched pair.
    /// Fails with [`AlgoError::NotBipartite`] if the graph is not bipartite.
    fn bipartite_graph_matching(&self) -> AlgoResult<Self>
    where
        Self: GraphNew + GraphEdgeEditing,
    {
        let mut matching = Self::new(self.vertex_count());
        for Edge(u, v) in self.maximum_bipartite_matching()? {
            matching.set_edge(u, 0, v);
        }
        Ok(matching)
    }
}

impl<G> BipartiteMatching for G where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::test_for_each_repr;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn assert_matching<G: Graph>(graph: &G, matching: &[Edge]) {
        let coloring = graph.bipartite_graph().unwrap();
        for &Edge(u, v) in matching {
            assert!(graph.has_undirected_edge(u, v));
            assert_eq!(coloring[u as usize], 0);
            assert_eq!(coloring[v as usize], 1);
        }
        assert!(matching.iter().flat_map(|e| [e.0, e.1]).all_unique());
    }

    /// Size of a maximum matching by trying all subsets of `edges`
    fn exhaustive_matching_size(edges: &[Edge], matched: &mut Vec<Node>) -> usize {
        let Some((&Edge(u, v), rest)) = edges.split_first() else {
            return 0;
        };

        let mut best = exhaustive_matching_size(rest, matched);
        if !matched.contains(&u) && !matched.contains(&v) {
            matched.extend([u, v]);
            best = best.max(1 + exhaustive_matching_size(rest, matched));
            matched.truncate(matched.len() - 2);
        }
        best
    }

    fn simple<G: Graph>() {
        let mut graph = G::from_edges(4, [(0, 3), (0, 2), (1, 2)]);
        let matching = graph.maximum_bipartite_matching().unwrap();
        assert_matching(&graph, &matching);
        assert_eq!(matching, vec![Edge(0, 3), Edge(1, 2)]);

        let matching_graph = graph.bipartite_graph_matching().unwrap();
        assert_eq!(
            matching_graph.ordered_edges(),
            vec![LabelledEdge(0, 0, 3), LabelledEdge(1, 0, 2)]
        );

        graph.set_edge(3, 0, 2);
        assert_eq!(graph.maximum_bipartite_matching(), Err(AlgoError::NotBipartite));
        assert!(graph.bipartite_graph_matching().is_err());
    }

    fn book<G: Graph>() {
        let graph = G::from_edges(
            8,
            [(0, 4), (0, 5), (1, 4), (1, 5), (1, 6), (2, 5), (3, 6), (3, 7)],
        );
        let matching = graph.maximum_bipartite_matching().unwrap();
        assert_matching(&graph, &matching);
        assert_eq!(matching, vec![Edge(0, 4), Edge(1, 6), Edge(2, 5), Edge(3, 7)]);
    }

    fn complex<G: Graph>() {
        let graph = G::from_edges(
            10,
            [(0, 5), (0, 6), (0, 7), (0, 8), (0, 9), (1, 8), (2, 6), (3, 7), (3, 9)],
        );
        let matching = graph.maximum_bipartite_matching().unwrap();
        assert_matching(&graph, &matching);
        assert_eq!(matching.len(), 4);
        assert!(matching.contains(&Edge(2, 6)));
        assert!(matching.contains(&Edge(1, 8)));
    }

    fn reversed_edges<G: Graph>() {
        // edges pointing from right to left are matched all the same
        let graph = G::from_edges(6, [(3, 0), (4, 0), (4, 1), (5, 2), (1, 3)]);
        let matching = graph.maximum_bipartite_matching().unwrap();
        assert_matching(&graph, &matching);
        assert_eq!(matching.len(), 3);

        assert_eq!(G::new(0).maximum_bipartite_matching(), Ok(vec![]));
        assert_eq!(G::new(3).maximum_bipartite_matching(), Ok(vec![]));
    }

    fn random_bipartite<G: Graph>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for _ in 0..50 {
            let mut graph = G::new(9);
            for u in 0..4 {
                for v in 4..9 {
                    if rng.random_bool(0.3) {
                        if rng.random_bool(0.5) {
                            graph.set_edge(u, 0, v);
                        } else {
                            graph.set_edge(v, 0, u);
                        }
                    }
                }
            }

            let matching = graph.maximum_bipartite_matching().unwrap();
            assert_matching(&graph, &matching);

            let edges = graph.edges().map(|e| e.edge()).collect_vec();
            assert_eq!(matching.len(), exhaustive_matching_size(&edges, &mut Vec::new()));
        }
    }

    test_for_each_repr!(simple, book, complex, reversed_edges, random_bipartite);
}
