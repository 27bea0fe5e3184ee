/// Checks a representation against a reference model on seeded random graphs
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::prelude::*;
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates `m_ub` random labelled edges for nodes `0..n` (possibly repeating pairs)
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<LabelledEdge> {
                (0..m_ub)
                    .map(|_| {
                        LabelledEdge(
                            rng.random_range(0..n),
                            rng.random_range(-10..10),
                            rng.random_range(0..n),
                        )
                    })
                    .collect_vec()
            }

            #[test]
            fn graph_new() {
                for n in 0..20 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.edge_count(), 0);
                    assert_eq!(graph.vertex_count(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.edges().next().is_none());
                }
            }

            #[test]
            fn set_edge_is_idempotent() {
                let mut graph = <$graph>::new(4);
                graph.set_edge(0, 3, 1);
                graph.set_edge(0, 3, 1);
                assert_eq!(graph.edge_count(), 1);

                graph.set_edge(0, -7, 1);
                assert_eq!(graph.edge_count(), 1);
                assert_eq!(graph.get_edge(0, 1), Some(-7));

                // label 0 is a real edge
                assert_eq!(graph.insert_edge(2, 0, 2), None);
                assert!(graph.has_self_loop(2));
                assert_eq!(graph.edge_count(), 2);
            }

            #[test]
            fn out_of_range_is_ignored() {
                let mut graph = <$graph>::new(3);
                graph.set_edge(3, 1, 0);
                graph.set_edge(0, 1, 3);
                graph.set_edge(Node::MAX, 1, 1);
                assert_eq!(graph.edge_count(), 0);

                graph.set_edge(0, 1, 1);
                assert!(!graph.has_edge(0, 5));
                assert!(!graph.has_edge(5, 0));
                assert_eq!(graph.get_edge(7, 7), None);
                assert_eq!(graph.remove_edge(0, 9), None);
                assert_eq!(graph.connected_to(4).count(), 0);
                assert_eq!(graph.connected_from(4).count(), 0);
                assert_eq!(graph.adjacent(4).count(), 0);
                assert_eq!(graph.out_degree_of(4), 0);
                assert_eq!(graph.in_degree_of(4), 0);
                assert_eq!(graph.edge_count(), 1);
            }

            #[test]
            fn remove_edge() {
                let mut graph = <$graph>::from_edges(3, [(0, 4, 1), (1, 5, 2)]);
                assert_eq!(graph.remove_edge(1, 0), None);
                assert_eq!(graph.edge_count(), 2);

                assert_eq!(graph.remove_edge(0, 1), Some(4));
                assert_eq!(graph.edge_count(), 1);
                assert!(!graph.has_edge(0, 1));
                assert_eq!(graph.connected_from(1).count(), 0);

                assert_eq!(graph.remove_edge(0, 1), None);
                assert_eq!(graph.edge_count(), 1);
            }

            #[test]
            fn adjacent_reports_both_directions() {
                let graph = <$graph>::from_edges(3, [(0, 1), (1, 0), (2, 0)]);
                assert_eq!(graph.adjacent(0).sorted().collect_vec(), vec![1, 1, 2]);
                assert_eq!(
                    graph.neighbors_of(Direction::Directed, 0).collect_vec(),
                    vec![1]
                );
                assert_eq!(graph.neighbors_of(Direction::Undirected, 2).collect_vec(), vec![0]);
            }

            #[test]
            fn matches_reference_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumNodes, 10, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, m_ub as NumEdges);

                            // later edges overwrite earlier ones
                            let mut model: FxHashMap<(Node, Node), Label> = FxHashMap::default();
                            for &LabelledEdge(u, label, v) in &edges {
                                model.insert((u, v), label);
                            }

                            let mut graph = <$graph>::from_edges(n, edges.iter());

                            assert_eq!(graph.vertex_count(), n);
                            assert_eq!(graph.edge_count() as usize, model.len());

                            let expected = model
                                .iter()
                                .map(|(&(u, v), &label)| LabelledEdge(u, label, v))
                                .sorted_by_key(|e| (e.source(), e.target()))
                                .collect_vec();
                            assert_eq!(graph.ordered_edges(), expected);

                            for u in 0..n {
                                let out = model.keys().filter(|(x, _)| *x == u).map(|&(_, v)| v).sorted().collect_vec();
                                let inc = model.keys().filter(|(_, y)| *y == u).map(|&(x, _)| x).sorted().collect_vec();

                                assert_eq!(graph.connected_to(u).sorted().collect_vec(), out);
                                assert_eq!(graph.connected_from(u).sorted().collect_vec(), inc);
                                assert_eq!(graph.out_degree_of(u) as usize, out.len());
                                assert_eq!(graph.in_degree_of(u) as usize, inc.len());

                                for v in 0..n {
                                    assert_eq!(graph.get_edge(u, v), model.get(&(u, v)).copied());
                                }
                            }

                            // remove roughly half of the edges again
                            for (&(u, v), &label) in model.iter().filter(|((u, v), _)| (u + v) % 2 == 0) {
                                assert_eq!(graph.remove_edge(u, v), Some(label));
                                assert!(!graph.has_edge(u, v));
                                assert!(!graph.connected_from(v).contains(&u));
                            }

                            let remaining = model.keys().filter(|(u, v)| (u + v) % 2 == 1).count();
                            assert_eq!(graph.edge_count() as usize, remaining);
                            assert_eq!(graph.edges().count(), remaining);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Runs each listed generic test body `fn name<G: Graph>()` on every representation.
/// Generates a module `name` with one `#[test]` per representation.
#[cfg(test)]
macro_rules! test_for_each_repr {
    ($($test:ident),* $(,)?) => {
        $(
            mod $test {
                #[test]
                fn adj_list() {
                    super::$test::<crate::repr::AdjList>();
                }

                #[test]
                fn sparse_adj_list() {
                    super::$test::<crate::repr::SparseAdjList>();
                }

                #[test]
                fn adj_matrix() {
                    super::$test::<crate::repr::AdjMatrix>();
                }
            }
        )*
    };
}

#[cfg(test)]
pub(crate) use test_for_each_repr;

/// Returns *true* if every consecutive pair of `path` is an edge of `graph`
#[cfg(test)]
pub(crate) fn is_walk<G: crate::ops::AdjacencyTest>(graph: &G, path: &[crate::Node]) -> bool {
    path.windows(2).all(|w| graph.has_edge(w[0], w[1]))
}
