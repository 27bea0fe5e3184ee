use std::{iter::Copied, iter::Enumerate, slice::Iter};

use smallvec::SmallVec;

use super::*;

/// Trait for methods on the labelled neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// Creates an empty neighborhood in a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = (Node, Label)> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all `(neighbor, label)` pairs in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns the label towards `v` if `v` is in the Neighborhood
    fn label_of(&self, v: Node) -> Option<Label> {
        self.neighbors().find(|&(u, _)| u == v).map(|(_, label)| label)
    }

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.label_of(v).is_some()
    }

    /// Adds `v` with the given label or relabels it.
    /// Returns the previous label if `v` was in the Neighborhood before.
    /// ** Might panic if `v >= n` **
    fn set_neighbor(&mut self, v: Node, label: Label) -> Option<Label>;

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns its label if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, v: Node) -> Option<Label>;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Shared implementation for neighborhoods that are a list of `(Node, Label)` pairs
macro_rules! impl_list_neighborhood {
    ($nbs:ident) => {
        impl Neighborhood for $nbs {
            fn new(_n: NumNodes) -> Self {
                Self(Default::default())
            }

            fn num_of_neighbors(&self) -> NumNodes {
                self.0.len() as NumNodes
            }

            type NeighborhoodIter<'a>
                = Copied<Iter<'a, (Node, Label)>>
            where
                Self: 'a;

            fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
                self.0.iter().copied()
            }

            fn set_neighbor(&mut self, v: Node, label: Label) -> Option<Label> {
                match self.0.iter_mut().find(|(u, _)| *u == v) {
                    Some((_, old)) => Some(std::mem::replace(old, label)),
                    None => {
                        self.0.push((v, label));
                        None
                    }
                }
            }

            fn try_remove_neighbor(&mut self, v: Node) -> Option<Label> {
                let pos = self.0.iter().position(|&(u, _)| u == v)?;
                Some(self.0.swap_remove(pos).1)
            }

            fn clear(&mut self) {
                self.0.clear();
            }
        }
    };
}

/// Neighborhood stored as a `Vec<(Node, Label)>`.
/// Queries are linear in the degree of the node.
#[derive(Debug, Clone, Default)]
pub struct ArrNeighborhood(Vec<(Node, Label)>);

impl_list_neighborhood!(ArrNeighborhood);

/// Neighborhood stored inline in a `SmallVec` for low-degree nodes.
/// Only spills to the heap once more than `4` neighbors are stored.
#[derive(Debug, Clone, Default)]
pub struct SparseNeighborhood(SmallVec<[(Node, Label); 4]>);

impl_list_neighborhood!(SparseNeighborhood);

/// One row of a dense adjacency matrix: one optional label per potential neighbor.
#[derive(Debug, Clone)]
pub struct MatrixNeighborhood {
    row: Vec<Option<Label>>,
    degree: NumNodes,
}

/// Iterator over the set cells of a [`MatrixNeighborhood`]
pub struct MatrixRowIter<'a> {
    cells: Enumerate<Iter<'a, Option<Label>>>,
}

impl Iterator for MatrixRowIter<'_> {
    type Item = (Node, Label);

    fn next(&mut self) -> Option<Self::Item> {
        self.cells
            .by_ref()
            .find_map(|(v, cell)| cell.map(|label| (v as Node, label)))
    }
}

impl Neighborhood for MatrixNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self {
            row: vec![None; n as usize],
            degree: 0,
        }
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.degree
    }

    type NeighborhoodIter<'a>
        = MatrixRowIter<'a>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        MatrixRowIter {
            cells: self.row.iter().enumerate(),
        }
    }

    // O(1) instead of the default scan
    fn label_of(&self, v: Node) -> Option<Label> {
        self.row.get(v as usize).copied().flatten()
    }

    fn set_neighbor(&mut self, v: Node, label: Label) -> Option<Label> {
        let old = self.row[v as usize].replace(label);
        if old.is_none() {
            self.degree += 1;
        }
        old
    }

    fn try_remove_neighbor(&mut self, v: Node) -> Option<Label> {
        let old = self.row.get_mut(v as usize)?.take();
        if old.is_some() {
            self.degree -= 1;
        }
        old
    }

    fn clear(&mut self) {
        self.row.iter_mut().for_each(|cell| *cell = None);
        self.degree = 0;
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn neighborhood_ops<N: Neighborhood>() {
        let mut nbs = N::new(10);
        assert_eq!(nbs.num_of_neighbors(), 0);

        assert_eq!(nbs.set_neighbor(3, 5), None);
        assert_eq!(nbs.set_neighbor(7, -2), None);
        assert_eq!(nbs.set_neighbor(3, 0), Some(5));
        assert_eq!(nbs.num_of_neighbors(), 2);

        assert_eq!(nbs.label_of(3), Some(0));
        assert!(nbs.has_neighbor(7));
        assert!(!nbs.has_neighbor(4));
        assert_eq!(
            nbs.neighbors().sorted().collect_vec(),
            vec![(3, 0), (7, -2)]
        );

        assert_eq!(nbs.try_remove_neighbor(4), None);
        assert_eq!(nbs.try_remove_neighbor(7), Some(-2));
        assert_eq!(nbs.num_of_neighbors(), 1);

        nbs.clear();
        assert_eq!(nbs.num_of_neighbors(), 0);
        assert_eq!(nbs.neighbors().count(), 0);
    }

    #[test]
    fn arr_neighborhood() {
        neighborhood_ops::<ArrNeighborhood>();
    }

    #[test]
    fn sparse_neighborhood() {
        neighborhood_ops::<SparseNeighborhood>();
    }

    #[test]
    fn matrix_neighborhood() {
        neighborhood_ops::<MatrixNeighborhood>();
    }
}
