//! Lazy breadth-first traversal over generic adjacency mappings.
//!
//! ## Purpose
//!
//! This module provides [`Bfs`], an iterator that walks any [`Adjacency`]
//! mapping breadth-first from a root and yields each reachable node exactly
//! once, in queue order.
//!
//! ## Design notes
//!
//! * **Queue-based frontier**: Every declared neighbour is enqueued, including
//!   duplicates and nodes already seen; filtering happens when a node is
//!   dequeued. This fixes the exact visiting order on graphs with multi-edges
//!   and self-loops.
//! * **Lazy**: Work happens only inside `next()`. Dropping the iterator drops
//!   its queue and visited set.
//! * **Pluggable identity**: Node identity is decided by the [`VisitedSet`],
//!   so a host runtime can supply its own hashing and equality.
//!
//! ## Key concepts
//!
//! ```text
//! Ready ──first pull──▶ Running ──queue exhausted / error──▶ Done
//! ```
//!
//! * A root missing from the mapping has no neighbours but is still yielded.
//! * Without an explicit root, traversal starts at the mapping's first key
//!   (see [`Adjacency::first_key`]); an empty mapping then yields nothing.
//! * [`Bfs::new`] and [`bfs`] track identity with a `HashSet` under the `std`
//!   feature and with a `BTreeSet` without it.
//!
//! ## Invariants
//!
//! * The visited set holds exactly the nodes already yielded.
//! * After an error the iterator is exhausted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::convert::Infallible;
#[cfg(feature = "std")]
use core::hash::Hash;
use core::iter::FusedIterator;

// ============================================================================
// Traits
// ============================================================================

/// Read-only mapping from a node to its outgoing neighbours.
pub trait Adjacency {
    /// Node identifier.
    type Node;

    /// Failure raised while reading the mapping.
    type Error;

    /// Neighbours of `node` in declaration order, or `None` if the mapping has
    /// no entry for it.
    fn neighbors(&self, node: &Self::Node) -> Result<Option<Vec<Self::Node>>, Self::Error>;

    /// The first key in the mapping's iteration order.
    fn first_key(&self) -> Result<Option<Self::Node>, Self::Error>;
}

/// Set of nodes already yielded by a traversal.
pub trait VisitedSet<N> {
    /// Failure raised while hashing or comparing nodes.
    type Error;

    /// Record `node`, returning `false` if it was already present.
    fn insert(&mut self, node: &N) -> Result<bool, Self::Error>;
}

// ============================================================================
// Native Implementations
// ============================================================================

impl<G: Adjacency + ?Sized> Adjacency for &G {
    type Node = G::Node;
    type Error = G::Error;

    fn neighbors(&self, node: &Self::Node) -> Result<Option<Vec<Self::Node>>, Self::Error> {
        (**self).neighbors(node)
    }

    fn first_key(&self) -> Result<Option<Self::Node>, Self::Error> {
        (**self).first_key()
    }
}

impl<K: Ord + Clone> Adjacency for BTreeMap<K, Vec<K>> {
    type Node = K;
    type Error = Infallible;

    fn neighbors(&self, node: &K) -> Result<Option<Vec<K>>, Infallible> {
        Ok(self.get(node).cloned())
    }

    fn first_key(&self) -> Result<Option<K>, Infallible> {
        Ok(self.keys().next().cloned())
    }
}

/// Adjacency lists indexed by node; nodes past the end have no neighbours.
impl Adjacency for [Vec<usize>] {
    type Node = usize;
    type Error = Infallible;

    fn neighbors(&self, node: &usize) -> Result<Option<Vec<usize>>, Infallible> {
        Ok(self.get(*node).cloned())
    }

    fn first_key(&self) -> Result<Option<usize>, Infallible> {
        Ok((!self.is_empty()).then_some(0))
    }
}

impl Adjacency for Vec<Vec<usize>> {
    type Node = usize;
    type Error = Infallible;

    fn neighbors(&self, node: &usize) -> Result<Option<Vec<usize>>, Infallible> {
        self.as_slice().neighbors(node)
    }

    fn first_key(&self) -> Result<Option<usize>, Infallible> {
        self.as_slice().first_key()
    }
}

#[cfg(feature = "std")]
impl<N: Hash + Eq + Clone> VisitedSet<N> for HashSet<N> {
    type Error = Infallible;

    fn insert(&mut self, node: &N) -> Result<bool, Infallible> {
        Ok(HashSet::insert(self, node.clone()))
    }
}

impl<N: Ord + Clone> VisitedSet<N> for BTreeSet<N> {
    type Error = Infallible;

    fn insert(&mut self, node: &N) -> Result<bool, Infallible> {
        Ok(BTreeSet::insert(self, node.clone()))
    }
}

// ============================================================================
// Traversal State
// ============================================================================

/// Lifecycle of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// Created, nothing dequeued yet.
    Ready,

    /// At least one pull has happened and the queue may hold more nodes.
    Running,

    /// The queue is exhausted or an error was reported.
    Done,
}

/// Breadth-first traversal iterator.
#[derive(Debug)]
pub struct Bfs<G: Adjacency, V> {
    graph: G,
    visited: V,
    queue: VecDeque<G::Node>,
    root: Option<G::Node>,
    state: TraversalState,
    yielded: usize,
}

impl<G, V> Bfs<G, V>
where
    G: Adjacency,
    V: VisitedSet<G::Node, Error = G::Error>,
{
    /// Traverse `graph` from `root`, or from its first key when `root` is `None`.
    pub fn with_visited(graph: G, root: Option<G::Node>, visited: V) -> Self {
        Self {
            graph,
            visited,
            queue: VecDeque::new(),
            root,
            state: TraversalState::Ready,
            yielded: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// Number of nodes yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Number of queued entries, duplicates included.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    fn start(&mut self) -> Result<(), G::Error> {
        let root = match self.root.take() {
            Some(root) => Some(root),
            None => self.graph.first_key()?,
        };
        match root {
            Some(root) => {
                self.queue.push_back(root);
                self.state = TraversalState::Running;
            }
            None => self.state = TraversalState::Done,
        }
        Ok(())
    }

    fn advance(&mut self) -> Result<Option<G::Node>, G::Error> {
        if self.state == TraversalState::Ready {
            self.start()?;
        }

        while let Some(node) = self.queue.pop_front() {
            if !self.visited.insert(&node)? {
                continue;
            }
            if let Some(neighbors) = self.graph.neighbors(&node)? {
                self.queue.extend(neighbors);
            }
            self.yielded += 1;
            tracing::trace!(yielded = self.yielded, queued = self.queue.len(), "bfs node");
            return Ok(Some(node));
        }

        tracing::debug!(visited = self.yielded, "bfs complete");
        self.state = TraversalState::Done;
        Ok(None)
    }
}

#[cfg(feature = "std")]
impl<G> Bfs<G, HashSet<G::Node>>
where
    G: Adjacency<Error = Infallible>,
    G::Node: Hash + Eq + Clone,
{
    /// Traverse an in-memory mapping, tracking identity with a `HashSet`.
    pub fn new(graph: G, root: Option<G::Node>) -> Self {
        Self::with_visited(graph, root, HashSet::new())
    }
}

#[cfg(not(feature = "std"))]
impl<G> Bfs<G, BTreeSet<G::Node>>
where
    G: Adjacency<Error = Infallible>,
    G::Node: Ord + Clone,
{
    /// Traverse an in-memory mapping, tracking identity with a `BTreeSet`.
    pub fn new(graph: G, root: Option<G::Node>) -> Self {
        Self::with_visited(graph, root, BTreeSet::new())
    }
}

impl<G, V> Iterator for Bfs<G, V>
where
    G: Adjacency,
    V: VisitedSet<G::Node, Error = G::Error>,
{
    type Item = Result<G::Node, G::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == TraversalState::Done {
            return None;
        }
        match self.advance() {
            Ok(node) => node.map(Ok),
            Err(e) => {
                self.state = TraversalState::Done;
                self.queue.clear();
                Some(Err(e))
            }
        }
    }
}

impl<G, V> FusedIterator for Bfs<G, V>
where
    G: Adjacency,
    V: VisitedSet<G::Node, Error = G::Error>,
{
}

/// Lazy breadth-first traversal of an in-memory mapping from `root`, or from
/// its first key when `root` is `None`.
#[cfg(feature = "std")]
pub fn bfs<G>(graph: G, root: Option<G::Node>) -> impl Iterator<Item = G::Node>
where
    G: Adjacency<Error = Infallible>,
    G::Node: Hash + Eq + Clone,
{
    Bfs::new(graph, root).map(infallible)
}

/// Lazy breadth-first traversal of an in-memory mapping from `root`, or from
/// its first key when `root` is `None`.
#[cfg(not(feature = "std"))]
pub fn bfs<G>(graph: G, root: Option<G::Node>) -> impl Iterator<Item = G::Node>
where
    G: Adjacency<Error = Infallible>,
    G::Node: Ord + Clone,
{
    Bfs::new(graph, root).map(infallible)
}

fn infallible<N>(node: Result<N, Infallible>) -> N {
    match node {
        Ok(node) => node,
        Err(never) => match never {},
    }
}
