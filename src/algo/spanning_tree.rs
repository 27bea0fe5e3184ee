/*!
# Minimum Spanning Trees

Spanning trees are computed on the undirected view of the graph: the weight of the
undirected edge `{u, v}` is the smaller label of `(u, v)` and `(v, u)`.

The result is a new graph on the same vertex set with one directed edge per tree edge,
carrying the weight of the tree edge as its label.
*/

use itertools::Itertools;

use super::*;

/// Minimum spanning tree constructions
pub trait SpanningTree: Graph {
    /// Computes a minimum spanning tree with Prim's algorithm, grown from vertex `0`.
    ///
    /// Every tree edge points from the vertex already in the tree to the newly added one.
    /// If the graph is disconnected, only the component of vertex `0` is spanned.
    /// Runs in time `O(n^2 + m)`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1, 1), (0, 3, 3), (0, 4, 2), (1, 2, 3), (2, 5, 3)]);
    /// let tree = g.prim_min_spanning_tree();
    ///
    /// assert_eq!(
    ///     tree.ordered_edges(),
    ///     vec![LabelledEdge(0, 1, 1), LabelledEdge(0, 4, 2), LabelledEdge(1, 2, 3)]
    /// );
    /// ```
    fn prim_min_spanning_tree(&self) -> Self {
        let mut tree = Self::new(self.vertex_count());
        if self.is_empty() {
            return tree;
        }

        let mut in_tree = NodeBitSet::new(self.vertex_count());
        let mut cheapest: Vec<Option<(Label, Node)>> = vec![None; self.len()];

        let mut u = 0;
        in_tree.set_bit(0);
        loop {
            for v in self.adjacent(u) {
                if in_tree.get_bit(v) {
                    continue;
                }

                let Some(label) = self.get_undirected_edge(u, v) else {
                    continue;
                };
                if cheapest[v as usize].is_none_or(|(best, _)| label < best) {
                    cheapest[v as usize] = Some((label, u));
                }
            }

            let Some((label, v, from)) = self
                .vertices()
                .filter(|&v| !in_tree.get_bit(v))
                .filter_map(|v| {
                    let (label, from) = cheapest[v as usize]?;
                    Some((label, v, from))
                })
                .min()
            else {
                break;
            };

            in_tree.set_bit(v);
            tree.set_edge(from, label, v);
            u = v;
        }

        if (tree.edge_count() as usize) + 1 < self.len() {
            debug!(
                spanned = tree.edge_count() + 1,
                n = self.len(),
                "graph is disconnected, tree spans the component of vertex 0"
            );
        }

        tree
    }

    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Edges are considered by increasing `(label, source, target)`. An edge is kept
    /// unless it closes a cycle with the edges kept before. Stops as soon as `n - 1`
    /// edges are kept; on a disconnected graph the result is a minimum spanning forest.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 5, 1), (1, 1, 2), (2, 2, 0), (1, 1, 0)]);
    /// let tree = g.kruskal_min_spanning_tree();
    ///
    /// assert_eq!(
    ///     tree.ordered_edges(),
    ///     vec![LabelledEdge(1, 1, 0), LabelledEdge(1, 1, 2)]
    /// );
    /// ```
    fn kruskal_min_spanning_tree(&self) -> Self {
        let mut tree = Self::new(self.vertex_count());
        let target = self.vertex_count().saturating_sub(1);

        let candidates = self
            .edges()
            .sorted_by_key(|e| (e.label(), e.source(), e.target()))
            .collect_vec();

        for LabelledEdge(u, label, v) in candidates {
            if tree.edge_count() >= target {
                break;
            }

            if tree.has_undirected_edge(u, v) {
                continue;
            }

            tree.set_edge(u, label, v);
            if !tree.acyclic(Direction::Undirected) {
                trace!(u, v, label, "edge closes a cycle");
                tree.remove_edge(u, v);
            }
        }

        tree
    }
}

impl<G> SpanningTree for G where G: Graph {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::test_for_each_repr};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn total_weight<G: Graph>(tree: &G) -> i64 {
        tree.edges().map(|e| e.label() as i64).sum()
    }

    /// Asserts that `tree` is a spanning tree of `graph` built from its (undirected) edges
    fn assert_spanning_tree<G: Graph>(graph: &G, tree: &G) {
        assert_eq!(tree.vertex_count(), graph.vertex_count());
        assert_eq!(tree.edge_count() + 1, graph.vertex_count());
        assert!(tree.acyclic(Direction::Undirected));
        for LabelledEdge(u, label, v) in tree.edges() {
            assert_eq!(graph.get_undirected_edge(u, v), Some(label));
        }
    }

    fn prim_basic<G: Graph>() {
        let graph = G::from_edges(4, [(0, 1, 1), (0, 3, 3), (0, 4, 2), (1, 2, 3), (2, 5, 3)]);
        let tree = graph.prim_min_spanning_tree();

        assert_spanning_tree(&graph, &tree);
        assert!(tree.has_undirected_edge(0, 1));
        assert!(tree.has_undirected_edge(0, 2));
        assert!(tree.has_undirected_edge(1, 3));
    }

    fn prim_small<G: Graph>() {
        let graph = G::from_edges(
            5,
            [(0, 2, 1), (0, 3, 2), (1, 1, 2), (1, 3, 3), (4, 4, 2), (3, 5, 4), (1, 2, 4)],
        );
        let tree = graph.prim_min_spanning_tree();

        assert_spanning_tree(&graph, &tree);
        assert_eq!(
            tree.ordered_edges(),
            vec![
                LabelledEdge(0, 2, 1),
                LabelledEdge(1, 1, 2),
                LabelledEdge(1, 3, 3),
                LabelledEdge(1, 2, 4),
            ]
        );
    }

    fn prim_complex<G: Graph>() {
        let graph = G::from_edges(
            6,
            [
                (0, 8, 1),
                (0, 7, 2),
                (1, 2, 2),
                (1, 1, 4),
                (2, 3, 3),
                (5, 9, 4),
                (1, 4, 5),
                (4, 5, 3),
                (2, 3, 4),
            ],
        );
        let tree = graph.prim_min_spanning_tree();

        assert_spanning_tree(&graph, &tree);
        assert_eq!(total_weight(&tree), 17);
        for (u, v) in [(0, 2), (1, 2), (1, 4), (1, 5), (2, 3)] {
            assert!(tree.has_undirected_edge(u, v));
        }
    }

    fn prim_disconnected<G: Graph>() {
        let graph = G::from_edges(5, [(1, 3, 0), (2, 1, 1), (3, 1, 4)]);
        let tree = graph.prim_min_spanning_tree();

        // tree edges point away from vertex 0
        assert_eq!(
            tree.ordered_edges(),
            vec![LabelledEdge(0, 3, 1), LabelledEdge(1, 1, 2)]
        );
        assert!(G::new(0).prim_min_spanning_tree().is_empty());
    }

    fn kruskal_basic<G: Graph>() {
        let graph = G::from_edges(
            5,
            [(0, 4, 1), (0, 2, 2), (1, 3, 2), (1, 5, 3), (1, 1, 4), (2, 6, 3), (3, 7, 4)],
        );
        let tree = graph.kruskal_min_spanning_tree();

        assert_spanning_tree(&graph, &tree);
        for (u, v) in [(0, 2), (1, 2), (1, 3), (1, 4)] {
            assert!(tree.has_undirected_edge(u, v));
        }
    }

    fn kruskal_long<G: Graph>() {
        let graph = G::from_edges(
            6,
            [(0, 7, 1), (1, 3, 2), (2, 2, 3), (3, 1, 4), (2, 3, 3), (5, 8, 4), (3, 2, 5)],
        );
        let tree = graph.kruskal_min_spanning_tree();

        assert_spanning_tree(&graph, &tree);
        for (u, v) in [(1, 2), (2, 3), (3, 5), (0, 1), (3, 4)] {
            assert!(tree.has_undirected_edge(u, v));
        }
    }

    fn kruskal_complex<G: Graph>() {
        let graph = G::from_edges(
            6,
            [
                (0, 7, 1),
                (1, 3, 2),
                (2, 2, 3),
                (3, 1, 4),
                (2, 3, 3),
                (5, 8, 4),
                (3, 2, 5),
                (1, 2, 5),
                (0, 1, 4),
                (2, 12, 5),
                (0, 5, 5),
            ],
        );
        let tree = graph.kruskal_min_spanning_tree();

        assert_spanning_tree(&graph, &tree);
        assert!(tree.has_undirected_edge(1, 5));
        assert!(tree.has_undirected_edge(3, 5));
        assert_eq!(total_weight(&tree), 9);
    }

    fn kruskal_loops_and_forests<G: Graph>() {
        // the self-loop is never kept and (1, 0) duplicates (0, 1)
        let graph = G::from_edges(4, [(0, -5, 0), (0, 1, 1), (1, 2, 0), (2, 3, 3)]);
        let tree = graph.kruskal_min_spanning_tree();
        assert_eq!(
            tree.ordered_edges(),
            vec![LabelledEdge(0, 1, 1), LabelledEdge(2, 3, 3)]
        );

        assert!(G::new(0).kruskal_min_spanning_tree().is_edgeless());
        assert!(G::new(1).kruskal_min_spanning_tree().is_edgeless());
    }

    fn prim_and_kruskal_agree<G: Graph>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(43);

        for n in [3, 8, 20] {
            for _ in 0..10 {
                let graph: G = RandomGraph::gnp(rng, n, 0.5, -10..30);
                if graph.bfs_connected_components().iter().any(|&c| c != 0) {
                    continue;
                }

                let prim = graph.prim_min_spanning_tree();
                let kruskal = graph.kruskal_min_spanning_tree();

                assert_spanning_tree(&graph, &prim);
                assert_spanning_tree(&graph, &kruskal);
                assert_eq!(total_weight(&prim), total_weight(&kruskal));
            }
        }
    }

    test_for_each_repr!(
        prim_basic,
        prim_small,
        prim_complex,
        prim_disconnected,
        kruskal_basic,
        kruskal_long,
        kruskal_complex,
        kruskal_loops_and_forests,
        prim_and_kruskal_agree,
    );
}
