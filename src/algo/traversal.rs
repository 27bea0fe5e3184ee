/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking)
  that follow edges either directed or undirected.
- [`SearchTree`], the parent-pointer map of a traversal, and the
  [`TraversalTree`] extension turning a predecessor-yielding traversal into one.
- Hop-count shortest paths via [`ShortestPath`].
- A high-level [`Traversal`] trait that exposes traversal algorithms
  directly as methods on graph data structures.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// The absence of a predecessor is encoded by setting both entries to the same node.
/// A self-loop is never a tree edge, so this is unambiguous.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// A node is marked visited (and its predecessor fixed) as soon as it is
/// discovered, i.e. when it is pushed into the frontier, not when it is popped.
/// For DFS this means all unvisited neighbors of a node are pushed eagerly.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    direction: Direction,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(self.direction, u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let num_visited = self.visited.cardinality() as usize;
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - num_visited + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, direction: Direction, start: Node) -> Self {
        assert!(graph.contains_vertex(start), "start node {start} out of range");

        let mut visited = NodeBitSet::new(graph.vertex_count());
        visited.set_bit(start);
        Self {
            graph,
            direction,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.graph.contains_vertex(u) && self.visited.get_bit(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let next_unvisited = self.visited.iter_cleared_bits().next();
        match next_unvisited {
            None => false,
            Some(x) => {
                self.visited.set_bit(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Consumes the traversal search and returns true iff `u` can be visited
    /// from the start node.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.set_stop_at(u);
        self.any(|v| v.item() == u)
    }
}

/// Parent-pointer map produced by a traversal.
///
/// Keyed over exactly the discovered vertices. A root (the start of a
/// traversal or a restart point) maps to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTree {
    parents: FxHashMap<Node, Option<Node>>,
}

impl SearchTree {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `node` as discovered from `parent` (or as a root)
    pub fn insert(&mut self, node: Node, parent: Option<Node>) {
        self.parents.insert(node, parent);
    }

    /// Returns the parent of `u`. `None` for roots and undiscovered nodes.
    pub fn parent_of(&self, u: Node) -> Option<Node> {
        self.parents.get(&u).copied().flatten()
    }

    /// Returns *true* if `u` was discovered
    pub fn contains(&self, u: Node) -> bool {
        self.parents.contains_key(&u)
    }

    /// Returns *true* if `u` was discovered without a parent
    pub fn is_root(&self, u: Node) -> bool {
        matches!(self.parents.get(&u), Some(None))
    }

    /// Returns all roots in arbitrary order
    pub fn roots(&self) -> impl Iterator<Item = Node> + '_ {
        self.parents
            .iter()
            .filter_map(|(&u, p)| p.is_none().then_some(u))
    }

    /// Number of discovered nodes
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns *true* if nothing was discovered
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterates over `(node, parent)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Node, Option<Node>)> + '_ {
        self.parents.iter().map(|(&u, &p)| (u, p))
    }

    /// Returns the tree path from the root of `u` to `u` (both inclusive).
    pub fn path_to(&self, u: Node) -> Option<Vec<Node>> {
        if !self.contains(u) {
            return None;
        }

        let mut path = vec![u];
        let mut cur = u;
        while let Some(p) = self.parent_of(cur) {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the number of tree edges between `u` and its root
    pub fn depth_of(&self, u: Node) -> Option<NumNodes> {
        self.path_to(u).map(|path| (path.len() - 1) as NumNodes)
    }
}

impl FromIterator<PredecessorOfNode> for SearchTree {
    fn from_iter<T: IntoIterator<Item = PredecessorOfNode>>(iter: T) -> Self {
        let mut tree = SearchTree::new();
        for item in iter {
            tree.insert(item.item(), item.predecessor());
        }
        tree
    }
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied search tree.
pub trait TraversalTree: Iterator<Item = PredecessorOfNode> + Sized {
    /// Consumes the iterator and returns the parent of every discovered node.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let tree = g.bfs_with_predecessor(Direction::Directed, 0).search_tree();
    /// assert_eq!(tree.parent_of(2), Some(1));
    /// assert!(tree.is_root(0));
    /// ```
    fn search_tree(self) -> SearchTree {
        self.collect()
    }
}

impl<G, S> TraversalTree for TraversalSearch<'_, G, S, PredecessorOfNode>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// Result of a hop-count shortest path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPath {
    /// A path from source to target, both inclusive
    Found(Vec<Node>),
    /// Source and target coincide
    SameVertex,
    /// Target cannot be reached from source (or one of them is out of range)
    Unreachable,
}

impl ShortestPath {
    /// Returns *true* for [`ShortestPath::Found`]
    pub fn is_found(&self) -> bool {
        matches!(self, ShortestPath::Found(_))
    }

    /// Returns the found path
    pub fn path(&self) -> Option<&[Node]> {
        match self {
            ShortestPath::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Returns the number of edges on the found path, `0` for [`ShortestPath::SameVertex`]
    pub fn hops(&self) -> Option<NumNodes> {
        match self {
            ShortestPath::Found(path) => Some((path.len() - 1) as NumNodes),
            ShortestPath::SameVertex => Some(0),
            ShortestPath::Unreachable => None,
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS, search trees, shortest paths)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(3, [(1, 0), (1, 2)]);
    ///
    /// assert_eq!(g.bfs(Direction::Directed, 0).collect::<Vec<_>>(), vec![0]);
    /// assert_eq!(g.bfs(Direction::Undirected, 0).collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    fn bfs(&self, direction: Direction, start: Node) -> BFS<'_, Self> {
        BFS::new(self, direction, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    /// ** Panics if `start >= n` **
    fn dfs(&self, direction: Direction, start: Node) -> DFS<'_, Self> {
        DFS::new(self, direction, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor of each node.
    /// ** Panics if `start >= n` **
    fn bfs_with_predecessor(&self, direction: Direction, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, direction, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor of each node.
    /// ** Panics if `start >= n` **
    fn dfs_with_predecessor(&self, direction: Direction, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, direction, start)
    }

    /// Returns the BFS tree of all nodes reachable from `start`.
    /// The tree is empty if `start >= n`.
    fn bfs_tree(&self, direction: Direction, start: Node) -> SearchTree {
        if !self.contains_vertex(start) {
            return SearchTree::new();
        }
        self.bfs_with_predecessor(direction, start).search_tree()
    }

    /// Returns the DFS tree of all nodes reachable from `start`.
    /// The tree is empty if `start >= n`.
    fn dfs_tree(&self, direction: Direction, start: Node) -> SearchTree {
        if !self.contains_vertex(start) {
            return SearchTree::new();
        }
        self.dfs_with_predecessor(direction, start).search_tree()
    }

    /// Returns *true* if `target` can be reached from `start`
    fn is_reachable(&self, direction: Direction, start: Node, target: Node) -> bool {
        self.contains_vertex(start)
            && self.contains_vertex(target)
            && self.bfs(direction, start).is_node_reachable(target)
    }

    /// Computes a path with the minimum number of edges from `start` to `target`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
    ///
    /// assert_eq!(g.shortest_path_length(Direction::Directed, 0, 2), ShortestPath::Found(vec![0, 2]));
    /// assert_eq!(g.shortest_path_length(Direction::Directed, 2, 0), ShortestPath::Unreachable);
    /// assert_eq!(g.shortest_path_length(Direction::Directed, 3, 3), ShortestPath::SameVertex);
    /// ```
    fn shortest_path_length(&self, direction: Direction, start: Node, target: Node) -> ShortestPath {
        if !self.contains_vertex(start) || !self.contains_vertex(target) {
            return ShortestPath::Unreachable;
        }
        if start == target {
            return ShortestPath::SameVertex;
        }

        let tree = self
            .bfs_with_predecessor(direction, start)
            .stop_at(target)
            .search_tree();

        match tree.path_to(target) {
            Some(path) => ShortestPath::Found(path),
            None => ShortestPath::Unreachable,
        }
    }
}

impl<T: AdjacencyList + Sized> Traversal for T {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::{gens::*, testing::test_for_each_repr};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn bfs_order<G: Graph>() {
        let graph = G::from_edges(9, [(0, 1), (1, 2), (1, 3), (2, 4), (3, 4), (4, 0), (5, 6)]);

        let order = graph.bfs(Direction::Directed, 0).collect_vec();
        assert_eq!(order.len(), 5);
        assert_eq!(order[0], 0);
        assert_eq!(order[1], 1);
        assert_eq!(order[2..4].iter().copied().sorted().collect_vec(), vec![2, 3]);
        assert_eq!(order[4], 4);

        assert_eq!(graph.bfs(Direction::Directed, 5).collect_vec(), vec![5, 6]);
        assert_eq!(graph.bfs(Direction::Undirected, 6).collect_vec(), vec![6, 5]);
        assert_eq!(graph.bfs(Direction::Directed, 8).collect_vec(), vec![8]);
    }

    fn bfs_path_tree<G: Graph>() {
        let mut graph = G::new(4);
        graph.connect_path([0, 1, 2, 3], 0);

        let tree = graph.bfs_tree(Direction::Directed, 0);
        assert_eq!(tree.len(), 4);
        assert!(tree.is_root(0));
        assert_eq!(tree.parent_of(1), Some(0));
        assert_eq!(tree.parent_of(2), Some(1));
        assert_eq!(tree.parent_of(3), Some(2));
        assert_eq!(tree.depth_of(3), Some(3));
        assert_eq!(tree.roots().collect_vec(), vec![0]);

        // directed search from the end of the path only sees itself
        let tree = graph.bfs_tree(Direction::Directed, 3);
        assert_eq!(tree.len(), 1);

        let tree = graph.bfs_tree(Direction::Undirected, 3);
        assert_eq!(tree.path_to(0), Some(vec![3, 2, 1, 0]));

        assert!(graph.bfs_tree(Direction::Directed, 4).is_empty());
    }

    fn dfs_tree_is_eager<G: Graph>() {
        // a star around 0 where 1 also reaches 2
        let graph = G::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2)]);

        // all neighbors of 0 are discovered before 1 is expanded
        let tree = graph.dfs_tree(Direction::Directed, 0);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.parent_of(1), Some(0));
        assert_eq!(tree.parent_of(2), Some(0));
        assert_eq!(tree.parent_of(3), Some(0));

        let order = graph.dfs(Direction::Directed, 0).collect_vec();
        assert_eq!(order[0], 0);
        assert_eq!(order.iter().copied().sorted().collect_vec(), vec![0, 1, 2, 3]);
    }

    fn bfs_tree_has_hop_distance<G: Graph>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [5, 20, 40] {
            for _ in 0..10 {
                let graph: G = RandomGraph::gnp(rng, n, 3.0 / n as f64, -5..5);
                for direction in [Direction::Directed, Direction::Undirected] {
                    let tree = graph.bfs_tree(direction, 0);

                    // reference distances via layered search
                    let mut dist = vec![None; n as usize];
                    dist[0] = Some(0);
                    let mut layer = vec![0];
                    let mut d = 0;
                    while !layer.is_empty() {
                        d += 1;
                        let mut next = Vec::new();
                        for u in layer {
                            for v in graph.neighbors_of(direction, u) {
                                if dist[v as usize].is_none() {
                                    dist[v as usize] = Some(d);
                                    next.push(v);
                                }
                            }
                        }
                        layer = next;
                    }

                    for v in graph.vertices() {
                        assert_eq!(tree.depth_of(v), dist[v as usize]);
                        if let Some(p) = tree.parent_of(v) {
                            match direction {
                                Direction::Directed => assert!(graph.has_edge(p, v)),
                                Direction::Undirected => assert!(graph.has_undirected_edge(p, v)),
                            }
                        }
                    }
                }
            }
        }
    }

    fn shortest_paths<G: Graph>() {
        let graph = G::from_edges(6, [(0, 1), (1, 2), (2, 3), (0, 4), (4, 3), (5, 0)]);

        let path = graph.shortest_path_length(Direction::Directed, 0, 3);
        assert_eq!(path, ShortestPath::Found(vec![0, 4, 3]));
        assert_eq!(path.hops(), Some(2));

        assert_eq!(
            graph.shortest_path_length(Direction::Directed, 3, 0),
            ShortestPath::Unreachable
        );
        assert_eq!(
            graph.shortest_path_length(Direction::Undirected, 3, 5),
            ShortestPath::Found(vec![3, 4, 0, 5])
        );
        assert_eq!(
            graph.shortest_path_length(Direction::Directed, 2, 2),
            ShortestPath::SameVertex
        );
        assert_eq!(
            graph.shortest_path_length(Direction::Directed, 0, 6),
            ShortestPath::Unreachable
        );
        assert_eq!(
            graph.shortest_path_length(Direction::Directed, 0, 1),
            ShortestPath::Found(vec![0, 1])
        );

        assert!(graph.is_reachable(Direction::Directed, 5, 3));
        assert!(!graph.is_reachable(Direction::Directed, 3, 5));
        assert!(!graph.is_reachable(Direction::Directed, 9, 5));
    }

    fn restart_covers_all<G: Graph>() {
        let graph = G::from_edges(5, [(0, 1), (3, 4)]);
        let mut bfs = graph.bfs(Direction::Undirected, 0);

        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.did_visit_node(1));
        assert!(!bfs.did_visit_node(2));
        assert!(!bfs.did_visit_node(5));
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![2]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![3, 4]);
        assert!(!bfs.try_restart_at_unvisited());
        assert!(graph.vertices().all(|u| bfs.did_visit_node(u)));
        assert_eq!(bfs.size_hint(), (0, Some(0)));
    }

    test_for_each_repr!(
        bfs_order,
        bfs_path_tree,
        dfs_tree_is_eager,
        bfs_tree_has_hop_distance,
        shortest_paths,
        restart_covers_all,
    );
}
