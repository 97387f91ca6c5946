//! Recorders: observers that turn events into results.
//!
//! A recorder is attached to any algorithm whose events implement
//! [`TreeEvents`](crate::algorithm::TreeEvents) or
//! [`VertexEvents`](crate::algorithm::VertexEvents), so the same recorder
//! works on depth-first search, breadth-first search and every relaxation
//! algorithm. Recorders keep their data behind an `Rc`: the caller holds one
//! handle, the attached handlers hold another, and results stay readable
//! after the observer is detached.
//!
//! ```rust
//! use halo_graph::algorithm::{Algorithm, Observable};
//! use halo_graph::graph::{AdjacencyGraph, Edge};
//! use halo_graph::observers::PredecessorRecorder;
//! use halo_graph::shortest_path::DijkstraShortestPath;
//!
//! let roads: AdjacencyGraph<&str, f64> = AdjacencyGraph::from_edges([
//!     ("home", "bridge", 2.0),
//!     ("home", "tunnel", 4.0),
//!     ("bridge", "office", 5.0),
//!     ("tunnel", "office", 1.0),
//! ]);
//! let parents = PredecessorRecorder::new();
//! let mut dijkstra: DijkstraShortestPath<'_, AdjacencyGraph<&str, f64>, f64, _> =
//!     DijkstraShortestPath::new(|e: &Edge<&str, f64>| e.data);
//! dijkstra.set_root("home");
//! dijkstra.observe(&parents, |d| d.compute(&roads)).unwrap();
//!
//! assert_eq!(parents.vertices_to(&"office"), vec!["home", "tunnel", "office"]);
//! ```

mod distance;
mod predecessor;
mod timestamp;

pub use distance::{DistanceRecorder, HopCount};
pub use predecessor::PredecessorRecorder;
pub use timestamp::{DiscoverOrderRecorder, TimeStampRecorder};
