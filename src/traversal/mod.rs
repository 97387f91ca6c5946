//! Graph traversals: depth-first, breadth-first and topological order.
//!
//! Both searches share the same lifecycle ([`crate::algorithm::Algorithm`])
//! and report progress only through their events; what a traversal *computes*
//! (predecessors, timestamps, orders) is decided by the observers attached to
//! it.

pub mod bfs;
pub mod dfs;
pub mod frontier;
pub mod topological;

pub use bfs::{BfsEvents, BreadthFirstSearch, UndirectedBreadthFirstSearch};
pub use dfs::{DepthFirstSearch, DfsEvents};
pub use frontier::{BestFirstFrontier, FifoFrontier, Frontier, LifoFrontier, PriorityQueue};
pub use topological::topological_order;
