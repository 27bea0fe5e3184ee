/*!
`lgraphs` is a graph data structure & algorithms library for **l**abelled directed graphs:
- Nodes are numbered `0` to `n - 1`
- Every edge `(u, v)` carries exactly one `i32` label, which doubles as its weight
- Edges are **directed**; undirected algorithms run on the undirected view of the graph

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use the tuple-structs `Edge(Node, Node)` and `LabelledEdge(Node, Label, Node)`.
There is at most one edge per ordered pair; setting an existing edge relabels it.
Self-loops are allowed and label `0` is a regular label.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjList`](crate::repr::AdjList)
- [`SparseAdjList`](crate::repr::SparseAdjList)
- [`AdjMatrix`](crate::repr::AdjMatrix)

The lists store in- and out-neighborhoods, the matrix answers edge queries in constant time
but has to scan a column to find in-neighbors.

# Design

All algorithms are implemented via traits on the graph itself and only depend on the
capability traits in [`ops`]. Configurable parts (traversal stoppers, readers, generators)
use the *Builder* / *Setter* pattern.

Vertex arguments out of range never cause errors: mutations are ignored and queries
report nothing. Precondition failures of algorithms are reported as [`error::AlgoError`],
while algorithmic impossibility (e.g. no Eulerian path) is reported via `None`.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(Direction::Directed, start)`), strongly connected components, matchings, shortest paths, ...
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes a reader for labelled edge lists.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::{Edge, Label, LabelledEdge, NumEdges};
pub use node::{Node, NumNodes};

/// `lgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
