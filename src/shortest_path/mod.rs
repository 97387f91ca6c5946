//! Single-source relaxation algorithms.
//!
//! | Algorithm | Weights | Cost |
//! |-----------|---------|------|
//! | [`DijkstraShortestPath`] | non-negative | \(O((n + m) \log m)\) |
//! | [`AStarShortestPath`] | non-negative, admissible heuristic | at most Dijkstra's |
//! | [`BellmanFordShortestPath`] | any; detects negative cycles | \(O(nm)\) |
//! | [`DagShortestPath`] | any; graph must be acyclic | \(O(n + m)\) |
//!
//! All four are generic over a [`DistanceRelaxer`]. The default
//! [`ShortestDistance`] minimizes; [`CriticalDistance`] maximizes, which on a
//! DAG yields the critical path:
//!
//! ```rust
//! use halo_graph::algorithm::Algorithm;
//! use halo_graph::graph::{AdjacencyGraph, Edge};
//! use halo_graph::shortest_path::{CriticalDistance, DagShortestPath};
//!
//! let tasks: AdjacencyGraph<&str, i32> = AdjacencyGraph::from_edges([
//!     ("design", "build", 5),
//!     ("design", "docs", 2),
//!     ("build", "ship", 3),
//!     ("docs", "ship", 1),
//! ]);
//! let mut critical: DagShortestPath<'_, AdjacencyGraph<&str, i32>, i32, _, CriticalDistance> =
//!     DagShortestPath::new(|e: &Edge<&str, i32>| e.data);
//! critical.set_root("design");
//! critical.compute(&tasks).unwrap();
//! assert_eq!(critical.distances().get(&"ship"), 8);
//! ```

pub mod bellman_ford;
pub mod dag;
pub mod dijkstra;
pub mod distance;
pub mod events;
pub mod relaxer;

pub use bellman_ford::BellmanFordShortestPath;
pub use dag::DagShortestPath;
pub use dijkstra::{AStarShortestPath, DijkstraShortestPath, ZeroHeuristic};
pub use distance::{DistanceMap, ShortestPathState};
pub use events::{BellmanFordEvents, ShortestPathEvents};
pub use relaxer::{Cost, CriticalDistance, DistanceRelaxer, ShortestDistance};
