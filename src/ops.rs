/*!
# Graph Operations

Capability traits every graph representation provides. Algorithms are written
purely against these traits and never against a concrete representation.

All traits are total with respect to vertex arguments: a vertex `u >= n` is
never an error. Mutations involving such a vertex are ignored and queries
report `false`, `None` or nothing.
*/

use std::ops::Range;

use itertools::{Either, Itertools};

use crate::*;

/// Chooses how edges are followed during a traversal.
///
/// Graphs are always stored directed. With [`Direction::Undirected`] an algorithm
/// follows edges in both directions, i.e. uses [`AdjacencyList::adjacent`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Follow `u -> v` only from `u`
    #[default]
    Directed,
    /// Follow `u -> v` from `u` and from `v`
    Undirected,
}

impl Direction {
    /// Returns *true* for [`Direction::Directed`]
    pub fn is_directed(&self) -> bool {
        matches!(self, Direction::Directed)
    }

    /// Returns *true* for [`Direction::Undirected`]
    pub fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn vertex_count(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.vertex_count() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range `0..n` of all vertices.
    /// The range does not borrow `self`, so it can be used while mutating the graph.
    fn vertices(&self) -> Range<Node> {
        0..self.vertex_count()
    }

    /// Returns *true* if `u < n`
    fn contains_vertex(&self, u: Node) -> bool {
        u < self.vertex_count()
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn edge_count(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.edge_count() == 0
    }
}

/// Trait to test existence of edges in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns the label of edge `(u, v)` if it exists
    fn get_edge(&self, u: Node, v: Node) -> Option<Label>;

    /// Returns *true* if the edge `(u, v)` exists in the graph.
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.get_edge(u, v).is_some()
    }

    /// Returns *true* if a self-loop `(u, u)` exists.
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }

    /// Returns *true* if `(u, v)` or `(v, u)` exists
    fn has_undirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) || self.has_edge(v, u)
    }

    /// Returns the smaller label of `(u, v)` and `(v, u)` if any of them exists
    fn get_undirected_edge(&self, u: Node, v: Node) -> Option<Label> {
        self.get_edge(u, v).into_iter().chain(self.get_edge(v, u)).min()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over all `v` with an edge `(u, v)`.
    fn connected_to(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all `u` with an edge `(u, v)`.
    fn connected_from(&self, v: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the outgoing edges of `u` including their labels.
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = LabelledEdge> + '_;

    /// Returns the number of outgoing edges of `u`
    fn out_degree_of(&self, u: Node) -> NumNodes;

    /// Returns the number of incoming edges of `v`
    fn in_degree_of(&self, v: Node) -> NumNodes;

    /// Returns `connected_to(v)` followed by `connected_from(v)`.
    ///
    /// A neighbor `w` with both `(v, w)` and `(w, v)` is reported twice.
    fn adjacent(&self, v: Node) -> impl Iterator<Item = Node> + '_ {
        self.connected_to(v).chain(self.connected_from(v))
    }

    /// Returns the neighbors of `u` an algorithm running in `direction` may walk to
    fn neighbors_of(&self, direction: Direction, u: Node) -> impl Iterator<Item = Node> + '_ {
        match direction {
            Direction::Directed => Either::Left(self.connected_to(u)),
            Direction::Undirected => Either::Right(self.adjacent(u)),
        }
    }

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl Iterator<Item = LabelledEdge> + '_ {
        self.vertices().flat_map(move |u| self.out_edges_of(u))
    }

    /// Returns all edges sorted by `(source, target)`
    fn ordered_edges(&self) -> Vec<LabelledEdge> {
        self.edges()
            .sorted_unstable_by_key(|e| (e.source(), e.target()))
            .collect_vec()
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with `n` singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Inserts the edge `(u, v)` with the given label or relabels it if it already exists.
    /// Returns the previous label if the edge existed.
    /// Does nothing and returns `None` if `u >= n || v >= n`.
    fn insert_edge(&mut self, u: Node, label: Label, v: Node) -> Option<Label>;

    /// Inserts or relabels the edge `(u, v)`. Ignored if `u >= n || v >= n`.
    fn set_edge(&mut self, u: Node, label: Label, v: Node) {
        self.insert_edge(u, label, v);
    }

    /// Sets all edges in the collection
    fn set_edges(&mut self, edges: impl IntoIterator<Item = impl Into<LabelledEdge>>) {
        for LabelledEdge(u, label, v) in edges.into_iter().map(|e| e.into()) {
            self.set_edge(u, label, v);
        }
    }

    /// Removes the edge `(u, v)`, i.e. the edge FROM u TO v, and returns its label.
    /// Returns `None` and does nothing if the edge does not exist.
    fn remove_edge(&mut self, u: Node, v: Node) -> Option<Label>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<LabelledEdge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<LabelledEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.set_edges(edges);
        graph
    }
}

/// Everything a full graph representation provides.
///
/// Algorithms that build a new graph as their result (closure, reduction,
/// spanning trees, matchings) require this trait.
pub trait Graph:
    GraphNew
    + GraphNodeOrder
    + GraphEdgeOrder
    + GraphEdgeEditing
    + AdjacencyList
    + AdjacencyTest
    + Clone
{
}

impl<G> Graph for G where
    G: GraphNew
        + GraphNodeOrder
        + GraphEdgeOrder
        + GraphEdgeEditing
        + AdjacencyList
        + AdjacencyTest
        + Clone
{
}
