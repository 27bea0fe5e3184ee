/*!
# Bipartite Graph Algorithms

Testing whether the undirected view of a graph is bipartite and computing a
2-coloring if one exists.

A coloring is a `Vec<u8>` indexed by vertex with values in `{0, 1}`.
*/

use super::*;

/// A trait for testing and computing 2-colorings of graphs
pub trait BipartiteTest: AdjacencyList + Traversal {
    /// Tests whether `coloring` assigns one of two colors to every vertex such that
    /// no edge joins two vertices of equal color. A self-loop is never properly colored.
    fn is_bipartition(&self, coloring: &[u8]) -> bool {
        coloring.len() == self.len()
            && coloring.iter().all(|&c| c <= 1)
            && self
                .edges()
                .all(|LabelledEdge(u, _, v)| coloring[u as usize] != coloring[v as usize])
    }

    /// Computes a 2-coloring of the undirected view of the graph, if one exists.
    ///
    /// Vertex `0` receives color `0`; every other component is colored starting
    /// with color `0` at its smallest vertex.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (2, 1), (2, 3)]);
    /// assert_eq!(g.bipartite_graph(), Some(vec![0, 1, 0, 1]));
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// assert_eq!(g.bipartite_graph(), None);
    /// ```
    fn bipartite_graph(&self) -> Option<Vec<u8>> {
        let coloring = propose_possibly_illegal_coloring(self);
        if self.is_bipartition(&coloring) {
            Some(coloring)
        } else {
            debug!("graph is not bipartite");
            None
        }
    }

    /// Tests whether the graph is bipartite.
    fn is_bipartite(&self) -> bool {
        self.bipartite_graph().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList {}

/// Colors the graph along undirected BFS trees: roots get `0` and every other node
/// the opposite color of its tree parent.
///
/// - If the graph is bipartite, the returned coloring is valid
/// - If the graph is not bipartite, some edge joins two nodes of equal color
fn propose_possibly_illegal_coloring<G>(graph: &G) -> Vec<u8>
where
    G: AdjacencyList,
{
    let mut coloring = vec![0; graph.len()];
    if graph.is_empty() {
        return coloring;
    }

    let mut bfs = graph.bfs_with_predecessor(Direction::Undirected, 0);
    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            coloring[node as usize] = 1 - coloring[pred as usize];
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    coloring
}
