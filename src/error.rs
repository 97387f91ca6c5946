//! Error types for graph algorithms.
//!
//! Vertex and edge payloads are carried as their `Debug` rendering so the error
//! type stays independent of the graph's vertex and edge types.
//!
//! A negative-weight cycle found by Bellman-Ford is *not* an error: it is a
//! property of the graph and is reported through
//! `BellmanFordShortestPath::found_negative_cycle`.

use core::fmt::Debug;
use thiserror::Error;

/// Result type alias for graph algorithm operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors surfaced by the traversal and shortest-path algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A root or target vertex is not part of the graph being computed.
    #[error("vertex not found in graph: {0}")]
    VertexNotFound(String),

    /// `compute` was called on an algorithm that requires a root, without one.
    #[error("root vertex not set")]
    RootNotSet,

    /// Dijkstra/A* met an edge whose weight is negative.
    #[error("negative weight {weight} on edge {edge}")]
    NegativeWeight {
        /// The offending edge.
        edge: String,
        /// The weight the weight function returned for it.
        weight: String,
    },

    /// The graph has a cycle where an acyclic graph is required.
    #[error("graph is not acyclic: cycle closes at vertex {0}")]
    CyclicGraph(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn negative_weight<E: Debug, C: Debug>(edge: &E, weight: &C) -> Self {
        Self::NegativeWeight {
            edge: format!("{edge:?}"),
            weight: format!("{weight:?}"),
        }
    }

    pub(crate) fn cyclic<V: Debug>(vertex: &V) -> Self {
        Self::CyclicGraph(format!("{vertex:?}"))
    }
}
