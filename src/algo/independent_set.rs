use super::*;

/// Weighted independent sets on restricted graph classes
pub trait IndependentSet: AdjacencyList {
    /// Computes an independent set of maximum total weight on a graph that is a single
    /// directed path `p_0 -> p_1 -> ... -> p_{n-1}` covering all vertices.
    ///
    /// `weights[u]` is the weight of vertex `u`. Vertices with negative weight are never
    /// selected. The result is sorted ascending.
    ///
    /// Fails with [`AlgoError::WeightCountMismatch`] if there is not exactly one weight per
    /// vertex and with [`AlgoError::NotAPath`] if the graph is not a simple directed path.
    /// The graph without vertices yields the empty set.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// assert_eq!(g.path_max_independent_set(&[1, 4, 5, 4]), Ok(vec![1, 3]));
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (3, 2)]);
    /// assert_eq!(g.path_max_independent_set(&[1, 4, 5, 4]), Err(AlgoError::NotAPath));
    /// ```
    fn path_max_independent_set(&self, weights: &[Label]) -> AlgoResult<Vec<Node>> {
        if weights.len() != self.len() {
            return Err(AlgoError::WeightCountMismatch {
                expected: self.len(),
                found: weights.len(),
            });
        }

        if self.is_empty() {
            return Ok(Vec::new());
        }

        let path = self.path_order().ok_or(AlgoError::NotAPath)?;
        let weight = |i: usize| weights[path[i] as usize] as Cost;

        // best[i] is the maximum weight of an independent set among the first i path nodes
        let mut best: Vec<Cost> = Vec::with_capacity(path.len() + 1);
        best.push(0);
        best.push(weight(0).max(0));
        for i in 2..=path.len() {
            best.push(best[i - 1].max(best[i - 2] + weight(i - 1)));
        }

        let mut set = Vec::new();
        let mut i = path.len();
        while i > 0 {
            if best[i] != best[i - 1] {
                set.push(path[i - 1]);
                i = i.saturating_sub(2);
            } else {
                i -= 1;
            }
        }

        set.sort_unstable();
        trace!(weight = best[path.len()], size = set.len(), "max independent set on path");
        Ok(set)
    }

    /// Returns the vertices in path order if the graph is a single simple directed path
    /// through all vertices.
    fn path_order(&self) -> Option<Vec<Node>> {
        if self
            .vertices()
            .any(|u| self.out_degree_of(u) > 1 || self.in_degree_of(u) > 1)
        {
            debug!("a vertex has more than one predecessor or successor");
            return None;
        }

        let mut starts = self.vertices().filter(|&u| self.in_degree_of(u) == 0);
        let (Some(start), None) = (starts.next(), starts.next()) else {
            debug!("graph has no unique start vertex");
            return None;
        };

        let mut path = Vec::with_capacity(self.len());
        path.push(start);
        // with all degrees at most 1, the walk from a source cannot run into a cycle
        while let Some(next) = path.last().and_then(|&u| self.connected_to(u).next()) {
            path.push(next);
        }

        (path.len() == self.len()).then_some(path)
    }
}

impl<G> IndependentSet for G where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::test_for_each_repr};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn path_graph<G: Graph>(n: NumNodes) -> G {
        let mut graph = G::new(n);
        graph.connect_path(0..n, 0);
        graph
    }

    fn basic<G: Graph>() {
        let graph: G = path_graph(4);
        assert_eq!(graph.path_max_independent_set(&[1, 4, 5, 4]), Ok(vec![1, 3]));
    }

    fn small<G: Graph>() {
        let graph: G = path_graph(6);
        assert_eq!(
            graph.path_max_independent_set(&[3, 2, 1, 6, 4, 5]),
            Ok(vec![0, 3, 5])
        );
    }

    fn big<G: Graph>() {
        let graph: G = path_graph(10);
        assert_eq!(
            graph.path_max_independent_set(&[1, 6, 3, 9, 2, 6, 2, 8, 3, 7]),
            Ok(vec![1, 3, 5, 7, 9])
        );
    }

    fn negative_weights<G: Graph>() {
        let graph: G = path_graph(6);
        assert_eq!(
            graph.path_max_independent_set(&[-1, 1, -6, 3, 8, 6]),
            Ok(vec![1, 3, 5])
        );

        let graph: G = path_graph(3);
        assert_eq!(graph.path_max_independent_set(&[-1, -2, -3]), Ok(vec![]));
    }

    fn shuffled_path<G: Graph>() {
        // the path 2 -> 0 -> 3 -> 1
        let mut graph = G::new(4);
        graph.connect_path([2, 0, 3, 1], 0);
        assert_eq!(graph.path_max_independent_set(&[5, 1, 1, 5]), Ok(vec![2, 3]));
        assert_eq!(graph.path_order(), Some(vec![2, 0, 3, 1]));
    }

    fn invalid_inputs<G: Graph>() {
        let graph: G = path_graph(4);
        assert_eq!(
            graph.path_max_independent_set(&[1, 2, 3]),
            Err(AlgoError::WeightCountMismatch {
                expected: 4,
                found: 3
            })
        );

        // two separate paths
        let graph = G::from_edges(4, [(0, 1), (2, 3)]);
        assert_eq!(graph.path_max_independent_set(&[1; 4]), Err(AlgoError::NotAPath));

        // a path followed by a cycle is caught by the in-degree of its entry
        let graph = G::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 1)]);
        assert_eq!(graph.path_max_independent_set(&[1; 4]), Err(AlgoError::NotAPath));

        // a path plus a disjoint cycle
        let graph = G::from_edges(5, [(0, 1), (2, 3), (3, 4), (4, 2)]);
        assert_eq!(graph.path_max_independent_set(&[1; 5]), Err(AlgoError::NotAPath));

        let mut graph = G::new(3);
        graph.connect_cycle(0..3, 0);
        assert_eq!(graph.path_max_independent_set(&[1; 3]), Err(AlgoError::NotAPath));

        let graph = G::from_edges(3, [(0, 1), (0, 2)]);
        assert_eq!(graph.path_max_independent_set(&[1; 3]), Err(AlgoError::NotAPath));
    }

    fn trivial_paths<G: Graph>() {
        assert_eq!(G::new(0).path_max_independent_set(&[]), Ok(vec![]));
        assert_eq!(G::new(1).path_max_independent_set(&[3]), Ok(vec![0]));
        assert_eq!(G::new(1).path_max_independent_set(&[-3]), Ok(vec![]));
        assert_eq!(
            G::new(2).path_max_independent_set(&[1, 1]),
            Err(AlgoError::NotAPath)
        );
    }

    fn matches_exhaustive_search<G: Graph>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(47);

        for n in 1..12 {
            let graph: G = path_graph(n);
            for _ in 0..10 {
                let weights = (0..n).map(|_| rng.random_range(-5..20)).collect_vec();

                let set = graph.path_max_independent_set(&weights).unwrap();
                assert!(set.iter().tuple_windows().all(|(&u, &v)| u + 1 < v));

                let weight_of = |set: &[Node]| set.iter().map(|&u| weights[u as usize] as i64).sum::<i64>();
                let optimum = (0..n)
                    .powerset()
                    .filter(|set| set.iter().tuple_windows().all(|(&u, &v)| u + 1 < v))
                    .map(|set| weight_of(&set))
                    .max()
                    .unwrap_or(0);

                assert_eq!(weight_of(&set), optimum);
            }
        }
    }

    test_for_each_repr!(
        basic,
        small,
        big,
        negative_weights,
        shuffled_path,
        invalid_inputs,
        trivial_paths,
        matches_exhaustive_search,
    );
}
