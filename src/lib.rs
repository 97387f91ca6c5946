//! # `halo-graph` - Event-Driven Graph Algorithms
//!
//! Traversal and relaxation-based shortest paths written against small graph
//! capability traits, with every step of every algorithm exposed as a typed
//! event.
//!
//! ## Key Features
//!
//! - **Capability traits**: algorithms ask only for what they use
//!   (`VertexListGraph`, `IncidenceGraph`, `BidirectionalGraph`,
//!   `UndirectedGraph`); any container implementing them works.
//! - **Three-color state machine**: every vertex moves
//!   Unvisited → Discovered → Finished and never back.
//! - **Event channel**: observers attach under a token, receive each event
//!   with a read-only view of the algorithm state, and detach by token.
//! - **Distance relaxers**: one relaxation loop serves shortest and critical
//!   (longest) paths by swapping the `(combine, compare)` pair.
//! - **Cooperative cancellation**: a shared token stops a run between steps,
//!   leaving partial results readable.
//!
//! ## Architecture
//!
//! 1. **Graph** (`graph`): capability traits, reversed/undirected views, and two
//!    reference containers (`AdjacencyGraph`, `CsrGraph`).
//! 2. **Algorithm core** (`algorithm`): roots, run state, cancellation, color
//!    maps, configuration and the event channel.
//! 3. **Traversal** (`traversal`): depth-first and breadth-first search,
//!    topological order.
//! 4. **Shortest paths** (`shortest_path`): Dijkstra, A*, Bellman-Ford and DAG
//!    shortest path over a `DistanceRelaxer`.
//! 5. **Observers** (`observers`): recorders for predecessors, distances,
//!    timestamps and discovery order.
//!
//! ### Invariants
//!
//! **Color monotonicity**: a vertex's color only moves forward during a run.
//!
//! **Parenthesis property**: depth-first discover/finish intervals are nested
//! or disjoint.
//!
//! **Relaxation soundness**: a distance changes only when the relaxer's
//! `compare` says the new value is strictly better.
//!
//! ## Example
//!
//! ```rust
//! use halo_graph::algorithm::{Algorithm, Observable};
//! use halo_graph::graph::AdjacencyGraph;
//! use halo_graph::observers::DiscoverOrderRecorder;
//! use halo_graph::traversal::BreadthFirstSearch;
//!
//! let graph: AdjacencyGraph<u32> =
//!     AdjacencyGraph::from_edges([(0, 1, ()), (0, 2, ()), (1, 3, ()), (2, 3, ())]);
//!
//! let order = DiscoverOrderRecorder::new();
//! let mut bfs: BreadthFirstSearch<'_, AdjacencyGraph<u32>> = BreadthFirstSearch::new();
//! bfs.set_root(0);
//! bfs.observe(&order, |bfs| bfs.compute(&graph)).unwrap();
//!
//! assert_eq!(order.order(), vec![0, 1, 2, 3]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::type_complexity)]

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod observers;
pub mod shortest_path;
pub mod traversal;

pub use algorithm::{
    Algorithm, CancellationToken, Color, ColorMap, Observable, Observer, ObserverToken,
    RelaxationConfig, RunState, TraversalConfig,
};
pub use error::{GraphError, GraphResult};
pub use graph::{AdjacencyGraph, CsrGraph, Reversed, Undirected};
pub use observers::{DiscoverOrderRecorder, DistanceRecorder, PredecessorRecorder, TimeStampRecorder};
pub use shortest_path::{
    AStarShortestPath, BellmanFordShortestPath, CriticalDistance, DagShortestPath,
    DijkstraShortestPath, DistanceRelaxer, ShortestDistance,
};
pub use traversal::{topological_order, BreadthFirstSearch, DepthFirstSearch};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Colors are a single byte.
    assert!(mem::size_of::<Color>() == 1);
    assert!(mem::size_of::<RunState>() == 1);

    // Relaxers are zero-sized markers.
    assert!(mem::size_of::<ShortestDistance>() == 0);
    assert!(mem::size_of::<CriticalDistance>() == 0);

    // A token is a single counter.
    assert!(mem::size_of::<ObserverToken>() == mem::size_of::<u64>());
};
