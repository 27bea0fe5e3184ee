/*!
# Eulerian & Hamiltonian Paths

- An **Eulerian path** uses every edge of the graph exactly once.
- A **Hamiltonian path** visits every vertex of the graph exactly once.

Both are returned as the sequence of visited vertices; `None` indicates that no
such path exists.
*/

use super::*;

/// Directed path searches covering all edges or all vertices
pub trait PathSearch: AdjacencyList + GraphEdgeOrder {
    /// Computes a directed walk that uses every edge exactly once.
    ///
    /// Such a walk exists iff all edges lie in a single weakly connected component,
    /// every vertex is balanced (in-degree = out-degree) except for at most one
    /// *source* with one surplus out-edge and one *sink* with one surplus in-edge.
    /// The walk starts at the source if there is one and otherwise at the first
    /// vertex with an outgoing edge, in which case it is a closed circuit.
    ///
    /// The returned path has `edge_count() + 1` vertices. An edgeless graph yields
    /// an empty path.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0), (0, 2)]);
    /// let path = g.directed_eulerian_path().unwrap();
    /// assert_eq!(path.len(), 5);
    /// assert_eq!(path.first(), Some(&0));
    /// assert_eq!(path.last(), Some(&2));
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (0, 2)]);
    /// assert_eq!(g.directed_eulerian_path(), None);
    /// ```
    fn directed_eulerian_path(&self) -> Option<Vec<Node>> {
        if self.is_edgeless() {
            return Some(Vec::new());
        }

        let mut source = None;
        let mut sink = None;
        for u in self.vertices() {
            let (out_deg, in_deg) = (self.out_degree_of(u), self.in_degree_of(u));
            match out_deg as i64 - in_deg as i64 {
                0 => {}
                1 if source.is_none() => source = Some(u),
                -1 if sink.is_none() => sink = Some(u),
                _ => {
                    debug!(u, out_deg, in_deg, "degrees admit no eulerian path");
                    return None;
                }
            }
        }

        let start = source.or_else(|| self.vertices().find(|&u| self.out_degree_of(u) > 0))?;

        // Hierholzer: extend the walk until stuck, then backtrack and splice in detours
        let mut unused = self
            .vertices()
            .map(|u| self.connected_to(u).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let mut stack = vec![start];
        let mut path = Vec::with_capacity(self.edge_count() as usize + 1);
        while let Some(&u) = stack.last() {
            match unused[u as usize].pop() {
                Some(v) => stack.push(v),
                None => {
                    stack.pop();
                    path.push(u);
                }
            }
        }

        if path.len() != self.edge_count() as usize + 1 {
            debug!(
                covered = path.len() - 1,
                edges = self.edge_count(),
                "edges are not connected, no eulerian path"
            );
            return None;
        }

        path.reverse();
        Some(path)
    }

    /// Computes a directed path that visits every vertex exactly once by backtracking
    /// from every possible start vertex. Returns the first path found.
    ///
    /// Runs in exponential time in the worst case. The graph without vertices has the
    /// empty path.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(1, 0), (2, 1), (0, 2)]);
    /// assert_eq!(g.directed_hamiltonian_path(), Some(vec![0, 2, 1]));
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (0, 2)]);
    /// assert_eq!(g.directed_hamiltonian_path(), None);
    /// ```
    fn directed_hamiltonian_path(&self) -> Option<Vec<Node>> {
        if self.is_empty() {
            return Some(Vec::new());
        }

        let mut path = Vec::with_capacity(self.len());
        let mut on_path = NodeBitSet::new(self.vertex_count());
        for start in self.vertices() {
            path.push(start);
            on_path.set_bit(start);

            if extend_hamiltonian_path(self, &mut path, &mut on_path) {
                return Some(path);
            }

            on_path.clear_bit(start);
            path.pop();
        }

        trace!(n = self.len(), "no hamiltonian path");
        None
    }
}

impl<G> PathSearch for G where G: AdjacencyList + GraphEdgeOrder {}

/// Tries to extend the non-empty `path` to all nodes of the graph.
/// On failure `path` and `on_path` are restored to their state on entry.
fn extend_hamiltonian_path<G>(graph: &G, path: &mut Vec<Node>, on_path: &mut NodeBitSet) -> bool
where
    G: AdjacencyList,
{
    if path.len() == graph.len() {
        return true;
    }

    let Some(&u) = path.last() else {
        return false;
    };

    for v in graph.connected_to(u) {
        if on_path.set_bit(v) {
            continue;
        }

        path.push(v);

        if extend_hamiltonian_path(graph, path, on_path) {
            return true;
        }

        on_path.clear_bit(v);
        path.pop();
    }

    false
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        gens::*,
        testing::{is_walk, test_for_each_repr},
    };
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn assert_eulerian<G: Graph>(graph: &G, path: &[Node]) {
        assert_eq!(path.len(), graph.edge_count() as usize + 1);
        assert!(is_walk(graph, path));

        // every edge is used exactly once
        let used = path.windows(2).map(|w| Edge(w[0], w[1])).sorted().collect_vec();
        let edges = graph.ordered_edges().iter().map(|e| e.edge()).collect_vec();
        assert_eq!(used, edges);
    }

    fn assert_hamiltonian<G: Graph>(graph: &G, path: &[Node]) {
        assert_eq!(path.len(), graph.len());
        assert!(path.iter().all_unique());
        assert!(is_walk(graph, path));
    }

    fn eulerian_path<G: Graph>() {
        let mut graph = G::from_edges(
            5,
            [(0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 1), (3, 4)],
        );
        let path = graph.directed_eulerian_path().unwrap();
        assert_eulerian(&graph, &path);
        assert_eq!(path[0], 2);
        assert_eq!(path[path.len() - 1], 4);

        graph.set_edge(2, 0, 4);
        assert_eq!(graph.directed_eulerian_path(), None);
    }

    fn eulerian_circuit<G: Graph>() {
        let mut graph = G::new(5);
        graph.connect_cycle([0, 1, 2, 3, 4], 0);
        graph.connect_cycle([4, 3, 2, 1, 0], 0);

        let path = graph.directed_eulerian_path().unwrap();
        assert_eulerian(&graph, &path);
        assert_eq!(path.first(), path.last());
    }

    fn eulerian_complex<G: Graph>() {
        let mut graph = G::from_edges(
            6,
            [(0, 1), (1, 2), (0, 4), (2, 5), (3, 0), (4, 3), (4, 2), (5, 4)],
        );
        let path = graph.directed_eulerian_path().unwrap();
        assert_eulerian(&graph, &path);

        graph.set_edge(5, 0, 3);
        assert_eq!(graph.directed_eulerian_path(), None);
    }

    fn eulerian_corner_cases<G: Graph>() {
        assert_eq!(G::new(0).directed_eulerian_path(), Some(vec![]));
        assert_eq!(G::new(3).directed_eulerian_path(), Some(vec![]));

        let graph = G::from_edges(3, [(1, 1)]);
        assert_eq!(graph.directed_eulerian_path(), Some(vec![1, 1]));

        // balanced, but split into two circuits
        let mut graph = G::new(6);
        graph.connect_cycle([0, 1, 2], 0);
        graph.connect_cycle([3, 4, 5], 0);
        assert_eq!(graph.directed_eulerian_path(), None);

        // a path with a disconnected circuit
        let mut graph = G::new(6);
        graph.connect_path([0, 1, 2], 0);
        graph.connect_cycle([3, 4, 5], 0);
        assert_eq!(graph.directed_eulerian_path(), None);
    }

    fn hamiltonian_exists<G: Graph>() {
        let graph = G::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 0), (1, 3), (2, 0), (3, 2)]);
        let path = graph.directed_hamiltonian_path().unwrap();
        assert_hamiltonian(&graph, &path);

        let mut graph = G::from_edges(
            6,
            [
                (0, 1),
                (1, 2),
                (2, 3),
                (1, 5),
                (0, 5),
                (2, 5),
                (4, 5),
                (3, 4),
                (2, 4),
                (0, 4),
            ],
        );
        let path = graph.directed_hamiltonian_path().unwrap();
        assert_hamiltonian(&graph, &path);
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);

        graph.remove_edge(4, 5);
        assert_eq!(graph.directed_hamiltonian_path(), None);
    }

    fn hamiltonian_missing<G: Graph>() {
        let graph = G::from_edges(5, [(0, 2), (1, 2), (2, 1), (2, 3), (3, 2), (2, 4)]);
        assert_eq!(graph.directed_hamiltonian_path(), None);

        assert_eq!(G::new(0).directed_hamiltonian_path(), Some(vec![]));
        assert_eq!(G::new(1).directed_hamiltonian_path(), Some(vec![0]));
        assert_eq!(G::new(2).directed_hamiltonian_path(), None);
    }

    fn hamiltonian_matches_permutations<G: Graph>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);

        for n in 2..7 {
            for _ in 0..15 {
                let graph: G = RandomGraph::gnp(rng, n, 0.4, 0..1);
                let exists = (0..n)
                    .permutations(n as usize)
                    .any(|perm| is_walk(&graph, &perm));

                match graph.directed_hamiltonian_path() {
                    Some(path) => {
                        assert!(exists);
                        assert_hamiltonian(&graph, &path);
                    }
                    None => assert!(!exists),
                }
            }
        }
    }

    test_for_each_repr!(
        eulerian_path,
        eulerian_circuit,
        eulerian_complex,
        eulerian_corner_cases,
        hamiltonian_exists,
        hamiltonian_missing,
        hamiltonian_matches_permutations,
    );
}
