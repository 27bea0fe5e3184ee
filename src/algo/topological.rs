use super::*;

/// Topological ordering of directed acyclic graphs
pub trait TopologicalSort: AdjacencyList + Acyclicity {
    /// Assigns every vertex its position `1..=n` in a topological order, i.e. for
    /// every edge `(u, v)` the number of `u` is smaller than the number of `v`.
    ///
    /// Numbers are handed out in reverse DFS finish order, where the DFS follows
    /// outgoing edges and restarts at the smallest unvisited vertex.
    /// Returns `None` if the graph contains a directed cycle (self-loops included).
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(2, 1), (1, 0)]);
    /// assert_eq!(g.dfs_topological_sort(), Some(vec![3, 2, 1]));
    ///
    /// let g = AdjList::from_edges(2, [(0, 1), (1, 0)]);
    /// assert_eq!(g.dfs_topological_sort(), None);
    /// ```
    fn dfs_topological_sort(&self) -> Option<Vec<NumNodes>> {
        if !self.acyclic(Direction::Directed) {
            debug!("graph has a directed cycle, no topological order");
            return None;
        }

        let mut visited = NodeBitSet::new(self.vertex_count());
        let mut finished = Vec::with_capacity(self.len());
        for root in self.vertices() {
            if visited.set_bit(root) {
                continue;
            }

            let mut call_stack = vec![(root, self.connected_to(root))];
            while let Some((u, neighbors)) = call_stack.last_mut() {
                let u = *u;
                match neighbors.find(|&v| !visited.get_bit(v)) {
                    Some(v) => {
                        visited.set_bit(v);
                        call_stack.push((v, self.connected_to(v)));
                    }
                    None => {
                        call_stack.pop();
                        finished.push(u);
                    }
                }
            }
        }

        let mut order = vec![0; self.len()];
        for (i, &u) in finished.iter().rev().enumerate() {
            order[u as usize] = i as NumNodes + 1;
        }
        Some(order)
    }
}

impl<G> TopologicalSort for G where G: AdjacencyList {}
