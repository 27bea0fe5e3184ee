use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Cycle detection
pub trait Acyclicity: AdjacencyList {
    /// Returns *true* if the graph contains no cycle.
    ///
    /// - [`Direction::Directed`]: any directed cycle, including a self-loop.
    /// - [`Direction::Undirected`]: any cycle of the undirected view. The edges
    ///   `(u, v)` and `(v, u)` form a single undirected edge and thus no cycle,
    ///   while a self-loop is a cycle.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
    /// assert!(g.acyclic(Direction::Directed));
    /// assert!(!g.acyclic(Direction::Undirected));
    /// ```
    fn acyclic(&self, direction: Direction) -> bool {
        let mut color = vec![Color::White; self.len()];

        for root in self.vertices() {
            if color[root as usize] != Color::White {
                continue;
            }

            color[root as usize] = Color::Gray;
            let mut call_stack = vec![(root, None, self.neighbors_of(direction, root))];
            while let Some((u, parent, neighbors)) = call_stack.last_mut() {
                let (u, parent) = (*u, *parent);

                // undirected: never walk back along the tree edge we came from
                match neighbors.find(|&v| direction.is_directed() || Some(v) != parent) {
                    Some(v) => match color[v as usize] {
                        Color::White => {
                            color[v as usize] = Color::Gray;
                            call_stack.push((v, Some(u), self.neighbors_of(direction, v)));
                        }
                        Color::Gray => {
                            trace!(u, v, ?direction, "back edge closes a cycle");
                            return false;
                        }
                        Color::Black => {}
                    },
                    None => {
                        color[u as usize] = Color::Black;
                        call_stack.pop();
                    }
                }
            }
        }

        true
    }
}

impl<G> Acyclicity for G where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::test_for_each_repr};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn undirected_cycles<G: Graph>() {
        let mut graph = G::from_edges(4, [(0, 1), (0, 3), (1, 2)]);
        assert!(graph.acyclic(Direction::Undirected));
        graph.set_edge(3, 0, 2);
        assert!(!graph.acyclic(Direction::Undirected));

        let mut graph = G::from_edges(3, [(0, 1), (1, 2)]);
        assert!(graph.acyclic(Direction::Undirected));
        graph.set_edge(2, 0, 0);
        assert!(!graph.acyclic(Direction::Undirected));

        let mut graph = G::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert!(graph.acyclic(Direction::Undirected));
        graph.set_edge(3, 0, 1);
        assert!(!graph.acyclic(Direction::Undirected));

        let mut graph = G::from_edges(5, [(0, 1), (2, 3), (3, 4)]);
        assert!(graph.acyclic(Direction::Undirected));
        graph.set_edge(4, 0, 2);
        assert!(!graph.acyclic(Direction::Undirected));
    }

    fn directed_cycles<G: Graph>() {
        let mut graph = G::from_edges(4, [(0, 1), (1, 2), (0, 3)]);
        assert!(graph.acyclic(Direction::Directed));
        graph.set_edge(2, 0, 0);
        assert!(!graph.acyclic(Direction::Directed));
        graph.remove_edge(2, 0);
        assert!(graph.acyclic(Direction::Directed));

        let mut graph = G::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert!(!graph.acyclic(Direction::Directed));
        graph.remove_edge(2, 0);
        assert!(graph.acyclic(Direction::Directed));

        let mut graph = G::from_edges(2, [(0, 1)]);
        assert!(graph.acyclic(Direction::Directed));
        graph.set_edge(1, 0, 0);
        assert!(!graph.acyclic(Direction::Directed));

        let mut graph = G::from_edges(8, [(0, 1), (1, 2), (2, 3), (4, 5), (5, 6), (4, 7)]);
        assert!(graph.acyclic(Direction::Directed));
        graph.set_edge(3, 0, 0);
        assert!(!graph.acyclic(Direction::Directed));
    }

    fn antiparallel_edges<G: Graph>() {
        let graph = G::from_edges(4, [(3, 2), (2, 1), (1, 0)]);
        assert!(graph.acyclic(Direction::Undirected));

        let graph = G::from_edges(2, [(0, 1), (1, 0)]);
        assert!(graph.acyclic(Direction::Undirected));
        assert!(!graph.acyclic(Direction::Directed));
    }

    fn self_loops<G: Graph>() {
        let graph = G::from_edges(3, [(0, 1), (2, 2)]);
        assert!(!graph.acyclic(Direction::Directed));
        assert!(!graph.acyclic(Direction::Undirected));

        assert!(G::new(0).acyclic(Direction::Directed));
        assert!(G::new(3).acyclic(Direction::Undirected));
    }

    fn matches_component_counts<G: Graph>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [5, 10, 25] {
            for _ in 0..20 {
                let graph: G = RandomGraph::gnp(rng, n, 1.0 / n as f64, 0..1);

                // a forest has exactly n - #components undirected edges
                let undirected_edges = graph
                    .edges()
                    .map(|e| e.edge().normalized())
                    .unique()
                    .collect_vec();
                let has_loop = undirected_edges.iter().any(|e| e.is_loop());
                let num_components = graph.connected_components().count();
                assert_eq!(
                    graph.acyclic(Direction::Undirected),
                    !has_loop && undirected_edges.len() + num_components == n as usize
                );

                // a directed graph is acyclic iff every SCC is a single node without a loop
                let classes = graph.strongly_connected_classes();
                assert_eq!(
                    graph.acyclic(Direction::Directed),
                    classes.len() == n as usize && graph.vertices().all(|u| !graph.has_self_loop(u))
                );
            }
        }
    }

    test_for_each_repr!(
        undirected_cycles,
        directed_cycles,
        antiparallel_edges,
        self_loops,
        matches_component_counts,
    );
}
