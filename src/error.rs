//! Errors reported by algorithms whose preconditions do not hold on the given graph.

use thiserror::Error;

/// Failure of an algorithm precondition.
///
/// Algorithmic impossibility (e.g. no Hamiltonian path) is not an error and is
/// reported via `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgoError {
    /// The graph admits no 2-coloring
    #[error("graph is not bipartite")]
    NotBipartite,

    /// The graph is not a single simple directed path
    #[error("graph is not a simple path")]
    NotAPath,

    /// A cycle of negative total weight was found
    #[error("graph contains a negative cycle")]
    NegativeCycle,

    /// One weight per vertex was expected
    #[error("expected {expected} vertex weights, found {found}")]
    WeightCountMismatch { expected: usize, found: usize },
}

/// Shorthand for results of fallible algorithms
pub type AlgoResult<T> = std::result::Result<T, AlgoError>;
