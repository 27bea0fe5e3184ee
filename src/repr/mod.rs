/*!
# Graph Representations

All representations are **directed** and **labelled**: every edge `(u, v)` carries
exactly one [`Label`]. Undirected semantics are obtained by the algorithms via
[`Direction::Undirected`](crate::ops::Direction).

A representation is a generic graph parameterized by a [`Neighborhood`], which
controls how the labelled adjacency of a single node is stored.
*/

use crate::{ops::*, *};

mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;

pub(crate) mod macros {
    /// Implements all operations that only depend on the outgoing neighborhoods `$nbs`
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$first_field:ident : $first_generic:ident $(, $field:ident : $generic:ident)*> => $nbs:ident) => {
            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNodeOrder for $struct<$first_generic, $($generic),*> {
                fn vertex_count(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphEdgeOrder for $struct<$first_generic, $($generic),*> {
                fn edge_count(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> AdjacencyTest for $struct<$first_generic, $($generic),*> {
                fn get_edge(&self, u: Node, v: Node) -> Option<Label> {
                    if !self.contains_vertex(v) {
                        return None;
                    }
                    self.$nbs.get(u as usize)?.label_of(v)
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNew for $struct<$first_generic, $($generic),*> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $first_field: vec![$first_generic::new(n); n as usize],
                        $(
                            $field: vec![$generic::new(n); n as usize],
                        )*
                    }
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> std::fmt::Debug for $struct<$first_generic, $($generic),*> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($struct))
                        .field("n", &self.vertex_count())
                        .field("edges", &self.ordered_edges())
                        .finish()
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}
