//! Single-source shortest (or critical) paths on a directed acyclic graph.
//!
//! One topological pass relaxes the out-edges of every reached vertex, in
//! \(O(n + m)\). With [`CriticalDistance`](super::CriticalDistance) this is
//! the critical path of a task graph.

use crate::algorithm::{
    Algorithm, AlgorithmCore, Color, ColorMap, EventChannel, Observable, RelaxationConfig,
};
use crate::error::GraphResult;
use crate::graph::{EdgeRef, GraphBase, IncidenceGraph, VertexListGraph};
use crate::shortest_path::distance::{DistanceMap, ShortestPathState};
use crate::shortest_path::events::ShortestPathEvents;
use crate::shortest_path::relaxer::{Cost, DistanceRelaxer, ShortestDistance};
use crate::traversal::topological_order;

/// Shortest paths over a DAG in topological order.
pub struct DagShortestPath<'h, G: GraphBase, C, W, R = ShortestDistance> {
    core: AlgorithmCore<G::Vertex>,
    channel: EventChannel<ShortestPathEvents<'h, G::Vertex, G::Edge, C, R>>,
    state: ShortestPathState<G::Vertex, C, R>,
    config: RelaxationConfig,
    weight: W,
}

impl<'h, G, C, W, R> DagShortestPath<'h, G, C, W, R>
where
    G: GraphBase,
    C: Cost,
    W: Fn(&G::Edge) -> C,
    R: DistanceRelaxer<C>,
{
    /// Creates a search with edge costs from `weight`.
    pub fn new(weight: W) -> Self {
        Self::with_config(weight, RelaxationConfig::default())
    }

    /// Creates a search with `config`.
    pub fn with_config(weight: W, config: RelaxationConfig) -> Self {
        Self {
            core: AlgorithmCore::default(),
            channel: EventChannel::default(),
            state: ShortestPathState::default(),
            config,
            weight,
        }
    }

    /// The relaxation options.
    pub fn config(&self) -> &RelaxationConfig {
        &self.config
    }

    /// Mutable relaxation options.
    pub fn config_mut(&mut self) -> &mut RelaxationConfig {
        &mut self.config
    }

    /// Distances after the last run.
    pub fn distances(&self) -> &DistanceMap<G::Vertex, C, R> {
        &self.state.distances
    }

    /// Colors after the last run. Vertices not reachable from the root stay
    /// Unvisited.
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.state.colors
    }

    /// Runs the search from the root.
    ///
    /// # Errors
    /// - [`GraphError::RootNotSet`](crate::GraphError::RootNotSet) without a root
    /// - [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if the
    ///   root is not in `graph`
    /// - [`GraphError::CyclicGraph`](crate::GraphError::CyclicGraph) if `graph`
    ///   has a cycle anywhere, reachable from the root or not
    pub fn compute(&mut self, graph: &G) -> GraphResult<()>
    where
        G: IncidenceGraph + VertexListGraph,
    {
        let root = self.core.required_root(graph)?;
        let order = topological_order(graph)?;

        let _span = tracing::debug_span!(
            "dag_shortest_path",
            vertices = graph.vertex_count(),
            accumulate = self.config.accumulate_distances
        )
        .entered();

        self.core.begin();
        self.state.reset(self.config.accumulate_distances);
        self.run(graph, root, order);

        if self.core.should_abort() {
            tracing::debug!(reached = self.state.distances.len(), "dag shortest path aborted");
        } else {
            self.core.complete();
            tracing::debug!(reached = self.state.distances.len(), "dag shortest path finished");
        }
        Ok(())
    }

    fn run(&mut self, graph: &G, root: G::Vertex, order: Vec<G::Vertex>)
    where
        G: IncidenceGraph + VertexListGraph,
    {
        let Self {
            core,
            channel,
            state,
            weight,
            ..
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

        for vertex in order {
            if core.should_abort() {
                return;
            }
            if state.colors.get(&vertex) != Color::Discovered {
                continue;
            }
            events.examine_vertex.emit(&vertex, state);

            let base = state.distances.get(&vertex);
            for edge in graph.out_edges(&vertex) {
                if core.should_abort() {
                    return;
                }
                events.examine_edge.emit(&edge, state);

                let next = edge.target();
                match R::relax(state.distances.get(next), weight(&edge), base) {
                    Some(distance) => {
                        state.distances.set(next.clone(), distance);
                        events.edge_relaxed.emit(&edge, state);
                        if state.colors.is_unvisited(next) {
                            state.colors.discover(next.clone());
                            events.discover_vertex.emit(next, state);
                        }
                    }
                    None => events.edge_not_relaxed.emit(&edge, state),
                }
            }

            state.colors.finish(&vertex);
            events.finish_vertex.emit(&vertex, state);
        }
    }
}

impl<'h, G: GraphBase, C, W, R> Algorithm for DagShortestPath<'h, G, C, W, R> {
    type Vertex = G::Vertex;

    fn core(&self) -> &AlgorithmCore<G::Vertex> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore<G::Vertex> {
        &mut self.core
    }
}

impl<'h, G: GraphBase, C, W, R> Observable for DagShortestPath<'h, G, C, W, R> {
    type Events = ShortestPathEvents<'h, G::Vertex, G::Edge, C, R>;

    fn channel(&self) -> &EventChannel<Self::Events> {
        &self.channel
    }

    fn channel_mut(&mut self) -> &mut EventChannel<Self::Events> {
        &mut self.channel
    }
}
