//! A labelled, bidirectional adjacency-list graph.
//!
//! Vertices are arbitrary hashable labels; edges carry a payload `D` (a
//! weight, a capacity, or `()`). Both out- and in-adjacency are kept so the
//! graph implements [`BidirectionalGraph`] and can be viewed through the
//! [`Reversed`](super::Reversed) and [`Undirected`](super::Undirected) adapters.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Idempotent; returns the dense index |
//! | `add_edge` | \(O(1)\) amortized | Inserts missing endpoints; parallel edges allowed |
//! | `out_edges` / `in_edges` | \(O(1)\) | Iterates a contiguous `Vec` |
//! | `out_degree` / `in_degree` | \(O(1)\) | Hash lookup plus `Vec::len` |
//! | `contains_edge` | \(O(\text{out-degree})\) | Linear scan of the source's list |

use core::fmt::Debug;
use core::hash::Hash;
use core::iter::Cloned;
use core::slice;
use std::collections::HashMap;

use crate::graph::traits::{BidirectionalGraph, EdgeRef, GraphBase, IncidenceGraph, VertexListGraph};

/// An edge of an [`AdjacencyGraph`].
///
/// `id` is the insertion index, so parallel edges with identical payloads
/// remain distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, D = ()> {
    /// Source vertex.
    pub source: V,
    /// Target vertex.
    pub target: V,
    /// Edge payload.
    pub data: D,
    /// Insertion index within the owning graph.
    pub id: usize,
}

impl<V, D> EdgeRef<V> for Edge<V, D> {
    fn source(&self) -> &V {
        &self.source
    }

    fn target(&self) -> &V {
        &self.target
    }
}

/// A directed multigraph over labelled vertices with out- and in-adjacency.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, D = ()> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    outgoing: Vec<Vec<Edge<V, D>>>,
    incoming: Vec<Vec<Edge<V, D>>>,
    edge_count: usize,
}

impl<V, D> Default for AdjacencyGraph<V, D> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<V, D> AdjacencyGraph<V, D>
where
    V: Clone + Eq + Hash,
    D: Clone,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(source, target, data)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, D)>,
    {
        let mut graph = Self::new();
        for (source, target, data) in edges {
            graph.add_edge(source, target, data);
        }
        graph
    }

    /// Adds `vertex` if absent and returns its dense index.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.clone(), idx);
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        idx
    }

    /// Adds a directed edge, inserting missing endpoints, and returns it.
    pub fn add_edge(&mut self, source: V, target: V, data: D) -> Edge<V, D> {
        let s = self.add_vertex(source.clone());
        let t = self.add_vertex(target.clone());
        let edge = Edge {
            source,
            target,
            data,
            id: self.edge_count,
        };
        self.edge_count += 1;
        self.outgoing[s].push(edge.clone());
        self.incoming[t].push(edge.clone());
        edge
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All edges, grouped by source in vertex insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<V, D>> + '_ {
        self.outgoing.iter().flatten()
    }

    fn out_slice(&self, vertex: &V) -> &[Edge<V, D>] {
        self.index
            .get(vertex)
            .map_or(&[][..], |&idx| self.outgoing[idx].as_slice())
    }

    fn in_slice(&self, vertex: &V) -> &[Edge<V, D>] {
        self.index
            .get(vertex)
            .map_or(&[][..], |&idx| self.incoming[idx].as_slice())
    }
}

impl<V, D> GraphBase for AdjacencyGraph<V, D>
where
    V: Clone + Eq + Hash + Debug,
    D: Clone + PartialEq + Debug,
{
    type Vertex = V;
    type Edge = Edge<V, D>;
}

impl<V, D> VertexListGraph for AdjacencyGraph<V, D>
where
    V: Clone + Eq + Hash + Debug,
    D: Clone + PartialEq + Debug,
{
    type Vertices<'a> = Cloned<slice::Iter<'a, V>> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.iter().cloned()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }
}

impl<V, D> IncidenceGraph for AdjacencyGraph<V, D>
where
    V: Clone + Eq + Hash + Debug,
    D: Clone + PartialEq + Debug,
{
    type OutEdges<'a> = Cloned<slice::Iter<'a, Edge<V, D>>> where Self: 'a;

    fn out_edges(&self, vertex: &V) -> Self::OutEdges<'_> {
        self.out_slice(vertex).iter().cloned()
    }

    fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).map(|&idx| self.outgoing[idx].len())
    }

    fn contains_edge(&self, edge: &Edge<V, D>) -> bool {
        self.out_slice(&edge.source).contains(edge)
    }
}

impl<V, D> BidirectionalGraph for AdjacencyGraph<V, D>
where
    V: Clone + Eq + Hash + Debug,
    D: Clone + PartialEq + Debug,
{
    type InEdges<'a> = Cloned<slice::Iter<'a, Edge<V, D>>> where Self: 'a;

    fn in_edges(&self, vertex: &V) -> Self::InEdges<'_> {
        self.in_slice(vertex).iter().cloned()
    }

    fn in_degree(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).map(|&idx| self.incoming[idx].len())
    }
}
