use super::*;

/// Enumeration of maximal cliques
pub trait Cliques: AdjacencyList {
    /// Returns all maximal cliques of the undirected view of the graph.
    ///
    /// A clique is a set of nodes that are pairwise joined by an edge in at least one
    /// direction; it is maximal if no further node can be added. Self-loops are ignored,
    /// so isolated nodes form cliques of size one.
    ///
    /// Each clique is sorted, and the cliques are sorted lexicographically.
    /// Enumerates with the Bron–Kerbosch algorithm without pivoting, which runs in
    /// `O(3^{n/3})` in the worst case.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]);
    /// assert_eq!(g.cliques(), vec![vec![0, 1, 2], vec![2, 3]]);
    /// ```
    fn cliques(&self) -> Vec<Vec<Node>> {
        let neighbors = self
            .vertices()
            .map(|u| {
                self.adjacent(u)
                    .filter(|&v| v != u)
                    .collect::<FxHashSet<Node>>()
            })
            .collect::<Vec<_>>();

        let mut cliques = Vec::new();
        let mut clique = Vec::new();
        bron_kerbosch(
            &neighbors,
            &mut clique,
            self.vertices().rev().collect(),
            Vec::new(),
            &mut cliques,
        );

        cliques.sort_unstable();
        trace!(num_cliques = cliques.len(), "maximal cliques");
        cliques
    }
}

impl<G> Cliques for G where G: AdjacencyList {}

/// Reports every maximal clique that extends `clique` by nodes of `candidates`
/// and contains none of `excluded`.
///
/// `clique` is shared between all recursive calls and restored before returning.
fn bron_kerbosch(
    neighbors: &[FxHashSet<Node>],
    clique: &mut Vec<Node>,
    mut candidates: Vec<Node>,
    mut excluded: Vec<Node>,
    cliques: &mut Vec<Vec<Node>>,
) {
    if candidates.is_empty() {
        if excluded.is_empty() && !clique.is_empty() {
            let mut maximal = clique.clone();
            maximal.sort_unstable();
            cliques.push(maximal);
        }
        return;
    }

    while let Some(u) = candidates.pop() {
        let nbs = &neighbors[u as usize];

        clique.push(u);
        bron_kerbosch(
            neighbors,
            clique,
            candidates.iter().copied().filter(|v| nbs.contains(v)).collect(),
            excluded.iter().copied().filter(|v| nbs.contains(v)).collect(),
            cliques,
        );
        clique.pop();

        excluded.push(u);
    }
}
