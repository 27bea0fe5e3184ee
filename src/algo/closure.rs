/*!
# Transitive Closure & Reduction

Both operations return a new graph on the same vertex set and leave `self` untouched.
- The **closure** adds an edge `(u, v)` for every `v` reachable from `u`.
- The **reduction** keeps as few edges as possible while preserving reachability.
*/

use itertools::Itertools;

use super::*;

/// Reachability-preserving graph transformations
pub trait TransitiveClosure: Graph {
    /// Returns a copy of the graph with an additional edge `(u, v)` of label `0` for every
    /// `v != u` that is reachable from `u`. Labels of existing edges are kept.
    ///
    /// In [`Direction::Directed`] mode a self-loop `(u, u)` is added iff `u` lies on a
    /// directed cycle. In [`Direction::Undirected`] mode reachability is computed on the
    /// undirected view and no self-loops are added; both `(u, v)` and `(v, u)` are present
    /// in the result.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 5, 1), (1, 3, 2)]);
    /// let closure = g.unweighted_transitive_closure(Direction::Directed);
    ///
    /// assert_eq!(closure.get_edge(0, 2), Some(0));
    /// assert_eq!(closure.get_edge(0, 1), Some(5));
    /// assert!(!closure.has_edge(2, 0));
    /// ```
    fn unweighted_transitive_closure(&self, direction: Direction) -> Self {
        let mut closure = self.clone();

        for u in self.vertices() {
            for v in self.bfs(direction, u).skip(1) {
                if !closure.has_edge(u, v) {
                    closure.set_edge(u, 0, v);
                }
            }

            if direction.is_directed()
                && !closure.has_self_loop(u)
                && self
                    .connected_from(u)
                    .any(|w| self.is_reachable(Direction::Directed, u, w))
            {
                closure.set_edge(u, 0, u);
            }
        }

        trace!(
            edges_before = self.edge_count(),
            edges_after = closure.edge_count(),
            "transitive closure"
        );
        closure
    }

    /// Returns a graph with the same reachability relation and a minimum number of edges.
    ///
    /// - Every strongly connected component with more than one node becomes a single
    ///   cycle through its nodes in ascending order.
    /// - A single node keeps its self-loop if it has one.
    /// - Between components, edges only join their representatives (their smallest node):
    ///   `(a, b)` is added iff `b` is reachable from `a` but not yet via the edges added so
    ///   far. Sources are processed in reverse topological order, targets in topological order.
    ///
    /// Edges that also exist in `self` keep their label, all others get label `0`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2), (0, 2)]);
    /// let reduction = g.transitive_reduction();
    ///
    /// assert_eq!(reduction.edge_count(), 2);
    /// assert!(!reduction.has_edge(0, 2));
    /// ```
    fn transitive_reduction(&self) -> Self {
        let mut reduction = Self::new(self.vertex_count());
        let label_of = |u: Node, v: Node| self.get_edge(u, v).unwrap_or(0);

        let classes = self.strongly_connected_classes();
        for class in &classes {
            match class.as_slice() {
                &[u] => {
                    if let Some(label) = self.get_edge(u, u) {
                        reduction.set_edge(u, label, u);
                    }
                }
                members => {
                    for (u, v) in members
                        .iter()
                        .copied()
                        .circular_tuple_windows::<(Node, Node)>()
                    {
                        reduction.set_edge(u, label_of(u, v), v);
                    }
                }
            }
        }

        // classes are non-empty and sorted, so the first member is the smallest
        let representatives = classes.iter().map(|class| class[0]).collect_vec();
        for (i, &a) in representatives.iter().enumerate().rev() {
            let reachable = self.bfs_tree(Direction::Directed, a);
            for &b in &representatives[i + 1..] {
                if reachable.contains(b)
                    && !reduction
                        .shortest_path_length(Direction::Directed, a, b)
                        .is_found()
                {
                    reduction.set_edge(a, label_of(a, b), b);
                }
            }
        }

        trace!(
            num_components = classes.len(),
            edges_before = self.edge_count(),
            edges_after = reduction.edge_count(),
            "transitive reduction"
        );
        reduction
    }
}

impl<G> TransitiveClosure for G where G: Graph {}
