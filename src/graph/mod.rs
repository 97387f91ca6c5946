//! Graph capabilities, adapters and reference containers.
//!
//! The algorithms only depend on the capability traits in [`traits`]. The
//! containers here exist so the engine is usable on its own:
//! - `adjacency`: labelled, bidirectional adjacency lists with edge payloads
//! - `csr`: compressed sparse row over `usize` vertices
//! - `adapters`: reversed and undirected views of a bidirectional graph

pub mod adapters;
pub mod adjacency;
pub mod csr;
pub mod traits;

pub use adapters::{Reversed, ReversedEdge, Undirected, UndirectedEdge};
pub use adjacency::{AdjacencyGraph, Edge};
pub use csr::{CsrEdge, CsrGraph};
pub use traits::{
    BidirectionalGraph, EdgeRef, GraphBase, IncidenceGraph, UndirectedGraph, VertexListGraph,
};
