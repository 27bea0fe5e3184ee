/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

All inserted edges carry the same given label. Existing edges between the
given nodes are relabelled.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = AdjList::new(5);
g.connect_path([0, 1, 2], 1);
g.connect_cycle([2, 3, 4], 2);
g.connect_clique([0, 2, 4], 3, false);

assert_eq!(
    g.ordered_edges(),
    vec![
        LabelledEdge(0, 1, 1),
        LabelledEdge(0, 3, 2),
        LabelledEdge(0, 3, 4),
        LabelledEdge(1, 1, 2),
        LabelledEdge(2, 3, 0),
        LabelledEdge(2, 2, 3),
        LabelledEdge(2, 3, 4),
        LabelledEdge(3, 2, 4),
        LabelledEdge(4, 3, 0),
        LabelledEdge(4, 3, 2),
    ]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjList::new(4);
    /// g.connect_path([0, 1, 2, 3], 7);
    ///
    /// assert_eq!(g.get_edge(0, 1), Some(7));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// assert!(!g.has_edge(1, 0));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P, label: Label)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes in order with edges in **both directions**.
    fn connect_bidirected_path<P>(&mut self, nodes_on_path: P, label: Label)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = AdjList::new(3);
    /// g.connect_cycle([0, 1, 2], 0);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 0));
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, label: Label)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique**, i.e. inserts `(u, v)` for every
    /// ordered pair of distinct nodes.
    ///
    /// If `with_loops` is `true`, each node also gets a self-loop.
    fn connect_clique<C>(&mut self, nodes: C, label: Label, with_loops: bool)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P, label: Label)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.set_edge(u, label, v);
        }
    }

    fn connect_bidirected_path<P>(&mut self, nodes_on_path: P, label: Label)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.set_edge(u, label, v);
            self.set_edge(v, label, u);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, label: Label)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.set_edge(prev, label, cur);
                prev = cur;
            }

            self.set_edge(prev, label, first);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C, label: Label, with_loops: bool)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for &u in &nodes {
            for &v in &nodes {
                if with_loops || u != v {
                    self.set_edge(u, label, v);
                }
            }
        }
    }
}
