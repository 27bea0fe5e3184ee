use std::fmt::{Debug, Display};

use crate::Node;

/// Edge labels double as weights in all weighted algorithms
pub type Label = i32;

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An unlabelled directed edge `(u, v)`, i.e. FROM `u` TO `v`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a label to the edge
    pub fn with_label(&self, label: Label) -> LabelledEdge {
        LabelledEdge(self.0, label, self.1)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A labelled directed edge `(u, label, v)`.
///
/// The field order follows the argument order of
/// [`GraphEdgeEditing::set_edge`](crate::ops::GraphEdgeEditing::set_edge).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelledEdge(pub Node, pub Label, pub Node);

impl Display for LabelledEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

impl Debug for LabelledEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl LabelledEdge {
    /// Returns the source of the edge
    pub fn source(&self) -> Node {
        self.0
    }

    /// Returns the label of the edge
    pub fn label(&self) -> Label {
        self.1
    }

    /// Returns the target of the edge
    pub fn target(&self) -> Node {
        self.2
    }

    /// Drops the label
    pub fn edge(&self) -> Edge {
        Edge(self.0, self.2)
    }

    /// Reverses the edge by switching the endpoints but keeps the label
    pub fn reverse(&self) -> Self {
        LabelledEdge(self.2, self.1, self.0)
    }
}

impl From<(Node, Label, Node)> for LabelledEdge {
    fn from(value: (Node, Label, Node)) -> Self {
        LabelledEdge(value.0, value.1, value.2)
    }
}

impl From<&(Node, Label, Node)> for LabelledEdge {
    fn from(value: &(Node, Label, Node)) -> Self {
        LabelledEdge(value.0, value.1, value.2)
    }
}

impl From<&LabelledEdge> for LabelledEdge {
    fn from(value: &LabelledEdge) -> Self {
        *value
    }
}

/// Unlabelled edges get label `0`
impl From<Edge> for LabelledEdge {
    fn from(value: Edge) -> Self {
        value.with_label(0)
    }
}

impl From<(Node, Node)> for LabelledEdge {
    fn from(value: (Node, Node)) -> Self {
        LabelledEdge(value.0, 0, value.1)
    }
}

impl From<&(Node, Node)> for LabelledEdge {
    fn from(value: &(Node, Node)) -> Self {
        LabelledEdge(value.0, 0, value.1)
    }
}
