/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversal, connectivity, ordering, matching, shortest paths and spanning trees.

Every algorithm family is an extension trait with a blanket implementation over the
capability traits in [`ops`](crate::ops), so it works unchanged on every representation.
Undirected algorithms work on the *undirected view* of the stored directed graph,
i.e. they follow [`AdjacencyList::adjacent`].
*/

mod bipartite;
mod cliques;
mod closure;
mod connectivity;
mod cycles;
mod independent_set;
mod matching;
mod paths;
mod shortest_paths;
mod spanning_tree;
mod topological;
mod traversal;

use crate::prelude::*;
use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

pub use crate::error::*;

pub use bipartite::*;
pub use cliques::*;
pub use closure::*;
pub use connectivity::*;
pub use cycles::*;
pub use independent_set::*;
pub use matching::*;
pub use paths::*;
pub use shortest_paths::*;
pub use spanning_tree::*;
pub use topological::*;
pub use traversal::*;
