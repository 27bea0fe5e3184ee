use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Weak and strong connectivity of directed graphs
pub trait Connectivity: AdjacencyList + Traversal + Sized {
    /// Iterates over the weakly connected components of the graph, i.e. the components
    /// obtained when every edge is treated as undirected.
    ///
    /// Components are emitted in order of their smallest node.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Labels every node with the id of its weakly connected component.
    ///
    /// Ids start at `0` and increase in order of the smallest node of each component,
    /// so node `0` is always in component `0`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(1, 0), (2, 3)]);
    /// assert_eq!(g.bfs_connected_components(), vec![0, 0, 1, 1]);
    /// ```
    fn bfs_connected_components(&self) -> Vec<usize> {
        let mut components = vec![0; self.len()];
        for (id, component) in self.connected_components().enumerate() {
            for u in component {
                components[u as usize] = id;
            }
        }
        components
    }

    /// Labels every node with the id of its strongly connected component.
    ///
    /// Ids start at `0` and follow a topological order of the condensation: for every
    /// edge `(u, v)` the id of `u` is at most the id of `v`.
    fn strongly_connected_components(&self) -> Vec<usize> {
        /*
        Two-pass Kosaraju:
         1.) DFS over outgoing edges, recording nodes in the order they finish.
         2.) DFS over incoming edges, starting at nodes in decreasing finish time. Every
             search of this pass collects exactly one SCC.

        Both searches keep an explicit call stack of (node, neighbor iterator) frames to
        avoid stack overflows on long paths.
        */
        let n = self.len();

        let mut visited = NodeBitSet::new(self.vertex_count());
        let mut finished = Vec::with_capacity(n);
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

        const UNASSIGNED: usize = usize::MAX;
        let mut components = vec![UNASSIGNED; n];
        let mut num_components = 0;
        for &root in finished.iter().rev() {
            if components[root as usize] != UNASSIGNED {
                continue;
            }

            components[root as usize] = num_components;
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for v in self.connected_from(u) {
                    if components[v as usize] == UNASSIGNED {
                        components[v as usize] = num_components;
                        stack.push(v);
                    }
                }
            }

            num_components += 1;
        }

        trace!(num_components, "strongly connected components");
        components
    }

    /// Returns the node sets of all strongly connected components.
    /// The position of a set is its id in [`Connectivity::strongly_connected_components`].
    fn strongly_connected_classes(&self) -> Vec<Vec<Node>> {
        let components = self.strongly_connected_components();
        let num_components = components.iter().max().map_or(0, |&c| c + 1);

        let mut classes = vec![Vec::new(); num_components];
        for (u, &c) in components.iter().enumerate() {
            classes[c].push(u as Node);
        }
        classes
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

/// Iterator over the weakly connected components of a graph
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(Direction::Undirected, 0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

/// Sorts the nodes within each component and the components by their smallest node
pub fn sort_components(mut components: Vec<Vec<Node>>) -> Vec<Vec<Node>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}
