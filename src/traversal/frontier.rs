//! Frontiers: the discovered-but-unexpanded vertices of a traversal.
//!
//! [`BreadthFirstSearch`](super::BreadthFirstSearch) is generic over
//! [`Frontier`], so the same event shape drives:
//! - [`FifoFrontier`]: classic breadth-first order (the default)
//! - [`LifoFrontier`]: stack order
//! - [`BestFirstFrontier`]: pops the vertex with the best static key, for
//!   greedy best-first search
//!
//! [`PriorityQueue`] is the binary heap underneath [`BestFirstFrontier`] and
//! the Dijkstra/A* search. It is ordered by a [`DistanceRelaxer`]: the entry
//! whose key is *better* under the relaxer is on top.

use core::fmt;
use core::marker::PhantomData;
use std::collections::VecDeque;

use crate::shortest_path::relaxer::{Cost, DistanceRelaxer, ShortestDistance};

/// Queue discipline of a traversal.
pub trait Frontier<V> {
    /// Adds a newly discovered vertex.
    fn push(&mut self, vertex: V);

    /// Removes the next vertex to expand.
    fn pop(&mut self) -> Option<V>;

    /// Number of pending vertices.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending vertex.
    fn clear(&mut self);
}

/// First-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct FifoFrontier<V> {
    queue: VecDeque<V>,
}

impl<V> Default for FifoFrontier<V> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<V> FifoFrontier<V> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> Frontier<V> for FifoFrontier<V> {
    fn push(&mut self, vertex: V) {
        self.queue.push_back(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last-in, first-out frontier.
#[derive(Debug, Clone)]
pub struct LifoFrontier<V> {
    stack: Vec<V>,
}

impl<V> Default for LifoFrontier<V> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<V> LifoFrontier<V> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V> Frontier<V> for LifoFrontier<V> {
    fn push(&mut self, vertex: V) {
        self.stack.push(vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// A binary heap of `(key, item)` pairs ordered by a relaxer.
///
/// Equal keys pop in no particular order. There is no decrease-key: callers
/// push again with the better key and skip stale entries when they pop
/// (lazy deletion).
pub struct PriorityQueue<K, T, R = ShortestDistance> {
    data: Vec<(K, T)>,
    _relaxer: PhantomData<R>,
}

impl<K, T, R> Default for PriorityQueue<K, T, R> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            _relaxer: PhantomData,
        }
    }
}

impl<K: fmt::Debug, T: fmt::Debug, R> fmt::Debug for PriorityQueue<K, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue").field("data", &self.data).finish()
    }
}

impl<K: Cost, T, R: DistanceRelaxer<K>> PriorityQueue<K, T, R> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with a specific capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _relaxer: PhantomData,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pushes an item with its key.
    pub fn push(&mut self, key: K, item: T) {
        self.data.push((key, item));
        self.sift_up(self.data.len() - 1);
    }

    /// Pops the item with the best key.
    pub fn pop(&mut self) -> Option<(K, T)> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let item = self.data.pop()?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// The best entry, without removing it.
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.data.first().map(|(k, t)| (k, t))
    }

    /// Clears the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.better(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < len && self.better(right, left) {
                best = right;
            }

            if self.better(best, node) {
                self.data.swap(node, best);
                node = best;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn better(&self, a: usize, b: usize) -> bool {
        R::compare(self.data[a].0, self.data[b].0)
    }
}

/// A frontier that pops the vertex whose key is best under `R`.
///
/// The key of a vertex is computed once, when it is pushed.
pub struct BestFirstFrontier<V, K, F, R = ShortestDistance> {
    heap: PriorityQueue<K, V, R>,
    key: F,
}

impl<V, K, F, R> BestFirstFrontier<V, K, F, R>
where
    K: Cost,
    F: Fn(&V) -> K,
    R: DistanceRelaxer<K>,
{
    /// Creates an empty frontier keyed by `key`.
    pub fn new(key: F) -> Self {
        Self {
            heap: PriorityQueue::new(),
            key,
        }
    }
}

impl<V, K, F, R> Frontier<V> for BestFirstFrontier<V, K, F, R>
where
    K: Cost,
    F: Fn(&V) -> K,
    R: DistanceRelaxer<K>,
{
    fn push(&mut self, vertex: V) {
        let key = (self.key)(&vertex);
        self.heap.push(key, vertex);
    }

    fn pop(&mut self) -> Option<V> {
        self.heap.pop().map(|(_, v)| v)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
