//! Graph capability traits.
//!
//! Algorithms in this crate never see a concrete graph type. They are generic
//! over the smallest capability they need:
//!
//! | Trait | Provides | Used by |
//! |-------|----------|---------|
//! | [`GraphBase`] | vertex and edge types | everything |
//! | [`VertexListGraph`] | vertex enumeration, containment | initialization, forest mode |
//! | [`IncidenceGraph`] | out-edges, out-degree | DFS, BFS, all relaxation algorithms |
//! | [`BidirectionalGraph`] | in-edges, in-degree | [`Reversed`](super::Reversed), [`Undirected`](super::Undirected) |
//! | [`UndirectedGraph`] | adjacent edges oriented away from a vertex | undirected DFS |
//!
//! Enumeration methods return iterators borrowed from the graph through
//! generic associated types, so storage layouts can hand out slices,
//! ranges or linked structures without boxing.

use core::fmt::Debug;
use core::hash::Hash;

/// An edge with a source and a target vertex.
pub trait EdgeRef<V> {
    /// The vertex this edge leaves.
    fn source(&self) -> &V;

    /// The vertex this edge enters.
    fn target(&self) -> &V;

    /// Returns `true` if source and target are the same vertex.
    fn is_self_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.source() == self.target()
    }
}

impl<V> EdgeRef<V> for (V, V) {
    fn source(&self) -> &V {
        &self.0
    }

    fn target(&self) -> &V {
        &self.1
    }
}

/// Vertex and edge types of a graph.
pub trait GraphBase {
    /// Vertex handle. Cloned freely by the algorithms.
    type Vertex: Clone + Eq + Hash + Debug;

    /// Edge handle. Cloned when recorded or pushed on a traversal stack.
    type Edge: EdgeRef<Self::Vertex> + Clone + PartialEq + Debug;
}

/// A graph whose vertex set can be enumerated.
pub trait VertexListGraph: GraphBase {
    /// Iterator over all vertices, in a stable enumeration order.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Enumerates every vertex.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if `vertex` belongs to the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// A graph whose out-edges can be enumerated per vertex.
pub trait IncidenceGraph: GraphBase {
    /// Iterator over the out-edges of one vertex.
    type OutEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Enumerates the out-edges of `vertex`. Unknown vertices have none.
    fn out_edges(&self, vertex: &Self::Vertex) -> Self::OutEdges<'_>;

    /// Out-degree of `vertex`, or `None` if it is not in the graph.
    fn out_degree(&self, vertex: &Self::Vertex) -> Option<usize>;

    /// Returns `true` if `edge` is one of its source's out-edges.
    fn contains_edge(&self, edge: &Self::Edge) -> bool {
        self.out_edges(edge.source()).any(|e| e == *edge)
    }
}

/// A graph that can also enumerate in-edges.
pub trait BidirectionalGraph: IncidenceGraph {
    /// Iterator over the in-edges of one vertex.
    type InEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Enumerates the edges whose target is `vertex`.
    fn in_edges(&self, vertex: &Self::Vertex) -> Self::InEdges<'_>;

    /// In-degree of `vertex`, or `None` if it is not in the graph.
    fn in_degree(&self, vertex: &Self::Vertex) -> Option<usize>;
}

/// A graph whose edges have no inherent direction.
///
/// Each adjacent edge of `v` is reported through [`IncidenceGraph::out_edges`]
/// oriented so that its source is `v`. Two orientations of the same
/// underlying edge must compare equal, which lets undirected DFS recognize the
/// edge it arrived through.
pub trait UndirectedGraph: IncidenceGraph {
    /// Enumerates the edges incident to `vertex`.
    fn adjacent_edges(&self, vertex: &Self::Vertex) -> Self::OutEdges<'_> {
        self.out_edges(vertex)
    }

    /// Number of edges incident to `vertex`, or `None` if it is not in the graph.
    fn adjacent_degree(&self, vertex: &Self::Vertex) -> Option<usize> {
        self.out_degree(vertex)
    }
}
