/*!
# Graph Generators

This module provides random graph generators and deterministic substructures.

Each random generator allows parameterized control over structural properties of the graph (e.g., number
of nodes, edge probability, range of labels), and can produce either a complete collection of labelled edges or a stream
of them through iterators.

Generators are designed to support a builder-style pattern for fluent graph configuration. The typical
usage workflow is:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).labels(-5..5)`).
3. Generate edges via `generate()` or `stream()`.

In addition, the `RandomGraph` trait abstracts the generation of whole graph instances into reusable
constructors for every graph implementing `GraphFromScratch`.
*/

use std::ops::Range;

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    ///
    /// This collects the full result from `stream()` into a `Vec<LabelledEdge>` as default.
    fn generate<R>(&self, rng: &mut R) -> Vec<LabelledEdge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = LabelledEdge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p` and labels drawn
    /// uniformly from `labels`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, labels: Range<Label>) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, labels: Range<Label>) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, labels: Range<Label>) -> Self
    where
        R: Rng,
    {
        Self::from_edges(n, Gnp::new().nodes(n).prob(p).labels(labels).stream(rng))
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64, labels: Range<Label>) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .labels(labels)
                .no_loops()
                .stream(rng),
        )
    }
}
