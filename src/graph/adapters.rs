//! Views that re-orient a [`BidirectionalGraph`] without copying it.
//!
//! - [`Reversed`] swaps the roles of in- and out-edges, so any algorithm
//!   written against [`IncidenceGraph`] walks the graph backwards.
//! - [`Undirected`] merges in- and out-edges, so the same algorithms see the
//!   graph as undirected.

use core::iter::{Chain, Map};

use crate::graph::traits::{
    BidirectionalGraph, EdgeRef, GraphBase, IncidenceGraph, UndirectedGraph, VertexListGraph,
};

/// An edge seen in the opposite direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReversedEdge<E>(pub E);

impl<E> ReversedEdge<E> {
    /// The edge as stored in the underlying graph.
    pub fn inner(&self) -> &E {
        &self.0
    }
}

impl<V, E: EdgeRef<V>> EdgeRef<V> for ReversedEdge<E> {
    fn source(&self) -> &V {
        self.0.target()
    }

    fn target(&self) -> &V {
        self.0.source()
    }
}

/// A graph with every edge reversed.
#[derive(Debug)]
pub struct Reversed<'g, G> {
    graph: &'g G,
}

impl<G> Clone for Reversed<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Reversed<'_, G> {}

impl<'g, G> Reversed<'g, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// The underlying graph.
    pub fn inner(&self) -> &'g G {
        self.graph
    }
}

impl<G: BidirectionalGraph> GraphBase for Reversed<'_, G> {
    type Vertex = G::Vertex;
    type Edge = ReversedEdge<G::Edge>;
}

impl<G: BidirectionalGraph + VertexListGraph> VertexListGraph for Reversed<'_, G> {
    type Vertices<'a> = G::Vertices<'a> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.graph.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.graph.contains_vertex(vertex)
    }
}

impl<G: BidirectionalGraph> IncidenceGraph for Reversed<'_, G> {
    type OutEdges<'a> = Map<G::InEdges<'a>, fn(G::Edge) -> ReversedEdge<G::Edge>> where Self: 'a;

    fn out_edges(&self, vertex: &G::Vertex) -> Self::OutEdges<'_> {
        let graph: &G = self.graph;
        graph.in_edges(vertex).map(ReversedEdge as fn(_) -> _)
    }

    fn out_degree(&self, vertex: &G::Vertex) -> Option<usize> {
        self.graph.in_degree(vertex)
    }
}

impl<G: BidirectionalGraph> BidirectionalGraph for Reversed<'_, G> {
    type InEdges<'a> = Map<G::OutEdges<'a>, fn(G::Edge) -> ReversedEdge<G::Edge>> where Self: 'a;

    fn in_edges(&self, vertex: &G::Vertex) -> Self::InEdges<'_> {
        let graph: &G = self.graph;
        graph.out_edges(vertex).map(ReversedEdge as fn(_) -> _)
    }

    fn in_degree(&self, vertex: &G::Vertex) -> Option<usize> {
        self.graph.out_degree(vertex)
    }
}

/// An edge of an [`Undirected`] view, oriented away from the vertex it was
/// enumerated from.
///
/// Equality ignores orientation: both sightings of one underlying edge are
/// equal.
#[derive(Debug, Clone)]
pub struct UndirectedEdge<E> {
    edge: E,
    reversed: bool,
}

impl<E> UndirectedEdge<E> {
    fn forward(edge: E) -> Self {
        Self { edge, reversed: false }
    }

    fn backward(edge: E) -> Self {
        Self { edge, reversed: true }
    }

    /// The edge as stored in the underlying graph.
    pub fn inner(&self) -> &E {
        &self.edge
    }

    /// Returns `true` if this sighting runs against the stored direction.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

impl<E: PartialEq> PartialEq for UndirectedEdge<E> {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl<V, E: EdgeRef<V>> EdgeRef<V> for UndirectedEdge<E> {
    fn source(&self) -> &V {
        if self.reversed {
            self.edge.target()
        } else {
            self.edge.source()
        }
    }

    fn target(&self) -> &V {
        if self.reversed {
            self.edge.source()
        } else {
            self.edge.target()
        }
    }
}

type Oriented<I, E> = Map<I, fn(E) -> UndirectedEdge<E>>;

/// A bidirectional graph viewed as undirected.
///
/// A self-loop is reported twice from its vertex, once per stored direction.
#[derive(Debug)]
pub struct Undirected<'g, G> {
    graph: &'g G,
}

impl<G> Clone for Undirected<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Undirected<'_, G> {}

impl<'g, G> Undirected<'g, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// The underlying graph.
    pub fn inner(&self) -> &'g G {
        self.graph
    }
}

impl<G: BidirectionalGraph> GraphBase for Undirected<'_, G> {
    type Vertex = G::Vertex;
    type Edge = UndirectedEdge<G::Edge>;
}

impl<G: BidirectionalGraph + VertexListGraph> VertexListGraph for Undirected<'_, G> {
    type Vertices<'a> = G::Vertices<'a> where Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.graph.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn contains_vertex(&self, vertex: &G::Vertex) -> bool {
        self.graph.contains_vertex(vertex)
    }
}

impl<G: BidirectionalGraph> IncidenceGraph for Undirected<'_, G> {
    type OutEdges<'a> = Chain<Oriented<G::OutEdges<'a>, G::Edge>, Oriented<G::InEdges<'a>, G::Edge>>
    where
        Self: 'a;

    fn out_edges(&self, vertex: &G::Vertex) -> Self::OutEdges<'_> {
        let graph: &G = self.graph;
        let outgoing = graph
            .out_edges(vertex)
            .map(UndirectedEdge::forward as fn(_) -> _);
        let incoming = graph
            .in_edges(vertex)
            .map(UndirectedEdge::backward as fn(_) -> _);
        outgoing.chain(incoming)
    }

    fn out_degree(&self, vertex: &G::Vertex) -> Option<usize> {
        Some(self.graph.out_degree(vertex)? + self.graph.in_degree(vertex)?)
    }

    fn contains_edge(&self, edge: &Self::Edge) -> bool {
        self.graph.contains_edge(&edge.edge)
    }
}

impl<G: BidirectionalGraph> UndirectedGraph for Undirected<'_, G> {}
