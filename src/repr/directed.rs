/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] or
[`DirectedGraphIn`] with one or two [`Neighborhood`] types, which
control how labelled adjacency information is stored.

## Provided Representations

- [`AdjList`]: labelled adjacency arrays for outgoing and incoming neighbors.
- [`SparseAdjList`]: same, but using inline small vectors.
- [`AdjMatrix`]: a dense matrix with one `Option<Label>` per cell.

## Design
- [`DirectedGraph`] stores **only outgoing neighborhoods** and derives
  incoming neighborhoods by scanning all vertices. For a matrix this is a
  column scan in `O(n)`.
- [`DirectedGraphIn`] stores **both outgoing and incoming neighborhoods**,
  so both directions cost `O(degree)`.
*/

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A directed graph storing only **outgoing neighborhoods**.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
#[derive(Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// A directed graph storing **both outgoing and incoming neighborhoods**.
///
/// Both neighborhoods carry the label, so an edge `(u, v)` is stored
/// as `(v, label)` in `out_nbs[u]` and as `(u, label)` in `in_nbs[v]`.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
/// - `InNbs`: [`Neighborhood`] implementation used for incoming adjacency.
#[derive(Clone)]
pub struct DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    num_edges: NumEdges,
}

/// Adjacency list: labelled adjacency arrays in both directions.
pub type AdjList = DirectedGraphIn<ArrNeighborhood, ArrNeighborhood>;

/// Adjacency list using `SmallVec`s in both directions.
pub type SparseAdjList = DirectedGraphIn<SparseNeighborhood, SparseNeighborhood>;

/// Dense adjacency matrix.
pub type AdjMatrix = DirectedGraph<MatrixNeighborhood>;

impl_common_graph_ops!(DirectedGraph<out_nbs : OutNbs> => out_nbs);
impl_common_graph_ops!(DirectedGraphIn<out_nbs : OutNbs, in_nbs : InNbs> => out_nbs);

/// Iterator over the in-neighbors of a node in a [`DirectedGraph`].
///
/// Scans all vertices, checking if they have an edge into the target node.
pub struct DirectedInNeighborIter<'a, OutNbs>
where
    OutNbs: Neighborhood,
{
    graph: &'a DirectedGraph<OutNbs>,
    node: Node,
    lb: Node,
}

impl<OutNbs> Iterator for DirectedInNeighborIter<'_, OutNbs>
where
    OutNbs: Neighborhood,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        while self.lb < self.graph.vertex_count() {
            self.lb += 1;

            if self.graph.has_edge(self.lb - 1, self.node) {
                return Some(self.lb - 1);
            }
        }

        None
    }
}

impl<OutNbs> AdjacencyList for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn connected_to(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs
            .get(u as usize)
            .into_iter()
            .flat_map(|nbs| nbs.neighbors().map(|(v, _)| v))
    }

    fn connected_from(&self, v: Node) -> impl Iterator<Item = Node> + '_ {
        DirectedInNeighborIter {
            graph: self,
            node: v,
            // an out-of-range node starts exhausted
            lb: if self.contains_vertex(v) {
                0
            } else {
                self.vertex_count()
            },
        }
    }

    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = LabelledEdge> + '_ {
        self.out_nbs
            .get(u as usize)
            .into_iter()
            .flat_map(move |nbs| nbs.neighbors().map(move |(v, label)| LabelledEdge(u, label, v)))
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs
            .get(u as usize)
            .map_or(0, |nbs| nbs.num_of_neighbors())
    }

    fn in_degree_of(&self, v: Node) -> NumNodes {
        // Should be avoided as this is costly
        self.connected_from(v).count() as NumNodes
    }
}

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn insert_edge(&mut self, u: Node, label: Label, v: Node) -> Option<Label> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return None;
        }

        let old = self.out_nbs[u as usize].set_neighbor(v, label);
        if old.is_none() {
            self.num_edges += 1;
        }
        old
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Option<Label> {
        let old = self.out_nbs.get_mut(u as usize)?.try_remove_neighbor(v)?;
        self.num_edges -= 1;
        Some(old)
    }
}

impl<OutNbs, InNbs> AdjacencyList for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn connected_to(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs
            .get(u as usize)
            .into_iter()
            .flat_map(|nbs| nbs.neighbors().map(|(v, _)| v))
    }

    fn connected_from(&self, v: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs
            .get(v as usize)
            .into_iter()
            .flat_map(|nbs| nbs.neighbors().map(|(u, _)| u))
    }

    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = LabelledEdge> + '_ {
        self.out_nbs
            .get(u as usize)
            .into_iter()
            .flat_map(move |nbs| nbs.neighbors().map(move |(v, label)| LabelledEdge(u, label, v)))
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs
            .get(u as usize)
            .map_or(0, |nbs| nbs.num_of_neighbors())
    }

    fn in_degree_of(&self, v: Node) -> NumNodes {
        self.in_nbs
            .get(v as usize)
            .map_or(0, |nbs| nbs.num_of_neighbors())
    }
}

impl<OutNbs, InNbs> GraphEdgeEditing for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn insert_edge(&mut self, u: Node, label: Label, v: Node) -> Option<Label> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return None;
        }

        self.in_nbs[v as usize].set_neighbor(u, label);
        let old = self.out_nbs[u as usize].set_neighbor(v, label);
        if old.is_none() {
            self.num_edges += 1;
        }
        old
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Option<Label> {
        let old = self.out_nbs.get_mut(u as usize)?.try_remove_neighbor(v)?;
        self.in_nbs[v as usize].try_remove_neighbor(u);
        self.num_edges -= 1;
        Some(old)
    }
}

test_graph_ops!(test_adj_list, AdjList);
test_graph_ops!(test_sparse_adj_list, SparseAdjList);
test_graph_ops!(test_adj_matrix, AdjMatrix);
