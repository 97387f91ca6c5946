//! Dijkstra and A* single-source shortest paths.
//!
//! Both run the same best-first relaxation loop over a [`PriorityQueue`]
//! keyed by `combine(distance, heuristic(vertex))`. Dijkstra is A* with a
//! heuristic that is always zero.
//!
//! The queue has no decrease-key. A vertex is pushed again every time its
//! distance improves and stale entries are skipped when popped, since by then
//! the vertex is already Finished.
//!
//! With non-negative weights and a consistent heuristic (zero included) a
//! Finished vertex never relaxes again. An admissible but inconsistent
//! heuristic can finish a vertex before its best path is known; when a
//! shorter path into it appears later, the vertex is reopened and pushed
//! again, so it may be examined and finished more than once.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `compute` | \(O((n + m) \log m)\) | At most one heap entry per relaxation |

use crate::algorithm::{Algorithm, AlgorithmCore, Color, ColorMap, EventChannel, Observable};
use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeRef, GraphBase, IncidenceGraph, VertexListGraph};
use crate::shortest_path::distance::{DistanceMap, ShortestPathState};
use crate::shortest_path::events::ShortestPathEvents;
use crate::shortest_path::relaxer::{Cost, DistanceRelaxer, ShortestDistance};
use crate::traversal::frontier::PriorityQueue;

/// A* search: best-first relaxation guided by a heuristic.
///
/// The heuristic must be admissible (never better than the true remaining
/// distance under `R`) for the distances to be exact. It need not be
/// consistent: a finished vertex that is later improved is reopened and
/// examined again. Without a target the search covers everything reachable
/// from the root.
pub struct AStarShortestPath<'h, G: GraphBase, C, W, H, R = ShortestDistance> {
    core: AlgorithmCore<G::Vertex>,
    channel: EventChannel<ShortestPathEvents<'h, G::Vertex, G::Edge, C, R>>,
    state: ShortestPathState<G::Vertex, C, R>,
    heap: PriorityQueue<C, G::Vertex, R>,
    weight: W,
    heuristic: H,
    target: Option<G::Vertex>,
}

impl<'h, G, C, W, H, R> AStarShortestPath<'h, G, C, W, H, R>
where
    G: GraphBase,
    C: Cost,
    W: Fn(&G::Edge) -> C,
    H: Fn(&G::Vertex) -> C,
    R: DistanceRelaxer<C>,
{
    /// Creates a search with edge costs from `weight` and estimates of the
    /// remaining distance from `heuristic`.
    pub fn new(weight: W, heuristic: H) -> Self {
        Self {
            core: AlgorithmCore::default(),
            channel: EventChannel::default(),
            state: ShortestPathState::default(),
            heap: PriorityQueue::new(),
            weight,
            heuristic,
            target: None,
        }
    }

    /// Stops the next run once `target` is finished.
    pub fn set_target(&mut self, target: G::Vertex) {
        self.target = Some(target);
    }

    /// Searches everything reachable from the root again.
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// The stored target, if any.
    pub fn target(&self) -> Option<&G::Vertex> {
        self.target.as_ref()
    }

    /// Distances after the last run.
    pub fn distances(&self) -> &DistanceMap<G::Vertex, C, R> {
        &self.state.distances
    }

    /// Colors after the last run.
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.state.colors
    }

    /// Runs the search from the root.
    ///
    /// # Errors
    /// - [`GraphError::RootNotSet`] without a root
    /// - [`GraphError::VertexNotFound`] if the root or target is not in `graph`
    /// - [`GraphError::NegativeWeight`] on the first edge with a negative
    ///   weight; the run is left Aborted
    pub fn compute(&mut self, graph: &G) -> GraphResult<()>
    where
        G: IncidenceGraph + VertexListGraph,
    {
        let root = self.core.required_root(graph)?;
        if let Some(target) = self.target.as_ref().filter(|t| !graph.contains_vertex(t)) {
            tracing::warn!(vertex = ?target, "search target is not in the graph");
            return Err(GraphError::vertex_not_found(target));
        }

        let _span = tracing::debug_span!(
            "best_first_shortest_path",
            vertices = graph.vertex_count(),
            targeted = self.target.is_some()
        )
        .entered();

        self.core.begin();
        self.state.reset(false);
        self.heap.clear();
        let result = self.search(graph, root);
        self.heap.clear();

        match &result {
            Err(err) => {
                self.core.fail();
                tracing::warn!(%err, "shortest path search stopped");
            }
            Ok(()) if self.core.should_abort() => {
                tracing::debug!(reached = self.state.distances.len(), "shortest path search aborted");
            }
            Ok(()) => {
                self.core.complete();
                tracing::debug!(reached = self.state.distances.len(), "shortest path search finished");
            }
        }
        result
    }

    fn search(&mut self, graph: &G, root: G::Vertex) -> GraphResult<()>
    where
        G: IncidenceGraph + VertexListGraph,
    {
        let Self {
            core,
            channel,
            state,
            heap,
            weight,
            heuristic,
            target,
        } = self;
        let events = channel.events_mut();

        if !events.initialize_vertex.is_empty() {
            for vertex in graph.vertices() {
                events.initialize_vertex.emit(&vertex, state);
            }
        }

        events.start_vertex.emit(&root, state);
        state.distances.set(root.clone(), R::zero());
        state.colors.discover(root.clone());
        events.discover_vertex.emit(&root, state);
        heap.push(R::combine(R::zero(), heuristic(&root)), root);

        while let Some((_, vertex)) = heap.pop() {
            if core.should_abort() {
                return Ok(());
            }
            if state.colors.get(&vertex) == Color::Finished {
                continue;
            }
            events.examine_vertex.emit(&vertex, state);

            if target.as_ref() == Some(&vertex) {
                state.colors.finish(&vertex);
                events.finish_vertex.emit(&vertex, state);
                events.target_reached.emit(&vertex, state);
                tracing::debug!(vertex = ?vertex, "target reached");
                return Ok(());
            }

            let base = state.distances.get(&vertex);
            for edge in graph.out_edges(&vertex) {
                if core.should_abort() {
                    return Ok(());
                }
                events.examine_edge.emit(&edge, state);

                let cost = weight(&edge);
                if cost < C::zero() {
                    return Err(GraphError::negative_weight(&edge, &cost));
                }

                let next = edge.target();
                match R::relax(state.distances.get(next), cost, base) {
                    Some(distance) => {
                        state.distances.set(next.clone(), distance);
                        events.edge_relaxed.emit(&edge, state);
                        match state.colors.get(next) {
                            Color::Unvisited => {
                                state.colors.discover(next.clone());
                                events.discover_vertex.emit(next, state);
                            }
                            // Finished too early under an inconsistent heuristic.
                            Color::Finished => state.colors.reopen(next),
                            Color::Discovered => {}
                        }
                        heap.push(R::combine(distance, heuristic(next)), next.clone());
                    }
                    None => events.edge_not_relaxed.emit(&edge, state),
                }
            }

            state.colors.finish(&vertex);
            events.finish_vertex.emit(&vertex, state);
        }
        Ok(())
    }
}

impl<'h, G: GraphBase, C, W, H, R> Algorithm for AStarShortestPath<'h, G, C, W, H, R> {
    type Vertex = G::Vertex;

    fn core(&self) -> &AlgorithmCore<G::Vertex> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore<G::Vertex> {
        &mut self.core
    }
}

impl<'h, G: GraphBase, C, W, H, R> Observable for AStarShortestPath<'h, G, C, W, H, R> {
    type Events = ShortestPathEvents<'h, G::Vertex, G::Edge, C, R>;

    fn channel(&self) -> &EventChannel<Self::Events> {
        &self.channel
    }

    fn channel_mut(&mut self) -> &mut EventChannel<Self::Events> {
        &mut self.channel
    }
}

/// The heuristic Dijkstra runs A* with.
pub type ZeroHeuristic<V, C> = fn(&V) -> C;

fn zero_heuristic<V, C: Cost>(_: &V) -> C {
    C::zero()
}

/// Dijkstra's algorithm: A* without a heuristic.
///
/// Edge weights must be non-negative.
pub struct DijkstraShortestPath<'h, G: GraphBase, C, W, R = ShortestDistance> {
    search: AStarShortestPath<'h, G, C, W, ZeroHeuristic<G::Vertex, C>, R>,
}

impl<'h, G, C, W, R> DijkstraShortestPath<'h, G, C, W, R>
where
    G: GraphBase,
    C: Cost,
    W: Fn(&G::Edge) -> C,
    R: DistanceRelaxer<C>,
{
    /// Creates a search with edge costs from `weight`.
    pub fn new(weight: W) -> Self {
        Self {
            search: AStarShortestPath::new(weight, zero_heuristic::<G::Vertex, C>),
        }
    }

    /// Stops the next run once `target` is finished.
    pub fn set_target(&mut self, target: G::Vertex) {
        self.search.set_target(target);
    }

    /// Searches everything reachable from the root again.
    pub fn clear_target(&mut self) {
        self.search.clear_target();
    }

    /// Distances after the last run.
    pub fn distances(&self) -> &DistanceMap<G::Vertex, C, R> {
        self.search.distances()
    }

    /// Colors after the last run.
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        self.search.colors()
    }

    /// Runs the search from the root.
    ///
    /// # Errors
    /// See [`AStarShortestPath::compute`].
    pub fn compute(&mut self, graph: &G) -> GraphResult<()>
    where
        G: IncidenceGraph + VertexListGraph,
    {
        self.search.compute(graph)
    }
}

impl<'h, G: GraphBase, C, W, R> Algorithm for DijkstraShortestPath<'h, G, C, W, R> {
    type Vertex = G::Vertex;

    fn core(&self) -> &AlgorithmCore<G::Vertex> {
        &self.search.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore<G::Vertex> {
        &mut self.search.core
    }
}

impl<'h, G: GraphBase, C, W, R> Observable for DijkstraShortestPath<'h, G, C, W, R> {
    type Events = ShortestPathEvents<'h, G::Vertex, G::Edge, C, R>;

    fn channel(&self) -> &EventChannel<Self::Events> {
        &self.search.channel
    }

    fn channel_mut(&mut self) -> &mut EventChannel<Self::Events> {
        &mut self.search.channel
    }
}
