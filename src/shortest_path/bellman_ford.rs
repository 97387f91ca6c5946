//! Bellman-Ford single-source shortest paths with negative-cycle detection.
//!
//! Edges are collected once and relaxed in that order for up to `|V| - 1`
//! passes; a pass that changes nothing ends the loop early. A final pass then
//! classifies every edge leaving a reached vertex as minimized or not. Any
//! edge that still relaxes proves a negative cycle (a positive one under
//! [`CriticalDistance`](super::CriticalDistance)) reachable from the root.

use crate::algorithm::{
    Algorithm, AlgorithmCore, Color, ColorMap, EventChannel, Observable, RelaxationConfig,
};
use crate::error::GraphResult;
use crate::graph::{EdgeRef, GraphBase, IncidenceGraph, VertexListGraph};
use crate::shortest_path::distance::{DistanceMap, ShortestPathState};
use crate::shortest_path::events::BellmanFordEvents;
use crate::shortest_path::relaxer::{Cost, DistanceRelaxer, ShortestDistance};

/// Bellman-Ford shortest paths. Negative weights are allowed.
pub struct BellmanFordShortestPath<'h, G: GraphBase, C, W, R = ShortestDistance> {
    core: AlgorithmCore<G::Vertex>,
    channel: EventChannel<BellmanFordEvents<'h, G::Vertex, G::Edge, C, R>>,
    state: ShortestPathState<G::Vertex, C, R>,
    config: RelaxationConfig,
    weight: W,
    negative_cycle: bool,
}

impl<'h, G, C, W, R> BellmanFordShortestPath<'h, G, C, W, R>
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
            negative_cycle: false,
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

    /// Colors after the last run: reached vertices are Finished.
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.state.colors
    }

    /// Returns `true` if the last run found a negative cycle reachable from
    /// the root. Distances are then not meaningful.
    pub fn found_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Runs the search from the root.
    ///
    /// # Errors
    /// - [`GraphError::RootNotSet`](crate::GraphError::RootNotSet) without a root
    /// - [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if the
    ///   root is not in `graph`
    pub fn compute(&mut self, graph: &G) -> GraphResult<()>
    where
        G: IncidenceGraph + VertexListGraph,
    {
        let root = self.core.required_root(graph)?;

        let _span = tracing::debug_span!(
            "bellman_ford_shortest_path",
            vertices = graph.vertex_count(),
            accumulate = self.config.accumulate_distances
        )
        .entered();

        self.core.begin();
        self.state.reset(self.config.accumulate_distances);
        self.negative_cycle = false;
        self.run(graph, root);

        if self.core.should_abort() {
            tracing::debug!(reached = self.state.distances.len(), "bellman-ford aborted");
        } else {
            self.core.complete();
            if self.negative_cycle {
                tracing::debug!("bellman-ford found a negative cycle");
            } else {
                tracing::debug!(reached = self.state.distances.len(), "bellman-ford finished");
            }
        }
        Ok(())
    }

    fn run(&mut self, graph: &G, root: G::Vertex)
    where
        G: IncidenceGraph + VertexListGraph,
    {
        let Self {
            core,
            channel,
            state,
            weight,
            negative_cycle,
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

        let edges: Vec<G::Edge> = graph.vertices().flat_map(|v| graph.out_edges(&v)).collect();
        let passes = graph.vertex_count().saturating_sub(1);

        for pass in 0..passes {
            let mut changed = false;
            for edge in &edges {
                if core.should_abort() {
                    return;
                }
                // Sources not reached in this run have nothing to offer.
                if state.colors.is_unvisited(edge.source()) {
                    continue;
                }
                events.examine_edge.emit(edge, state);

                let base = state.distances.get(edge.source());
                let next = edge.target();
                match R::relax(state.distances.get(next), weight(edge), base) {
                    Some(distance) => {
                        state.distances.set(next.clone(), distance);
                        events.edge_relaxed.emit(edge, state);
                        if state.colors.is_unvisited(next) {
                            state.colors.discover(next.clone());
                            events.discover_vertex.emit(next, state);
                        }
                        changed = true;
                    }
                    None => events.edge_not_relaxed.emit(edge, state),
                }
            }
            if !changed {
                tracing::trace!(pass, "relaxation converged");
                break;
            }
        }

        for edge in &edges {
            if core.should_abort() {
                return;
            }
            if state.colors.is_unvisited(edge.source()) {
                continue;
            }
            let base = state.distances.get(edge.source());
            if R::relax(state.distances.get(edge.target()), weight(edge), base).is_some() {
                *negative_cycle = true;
                events.edge_not_minimized.emit(edge, state);
            } else {
                events.edge_minimized.emit(edge, state);
            }
        }

        for vertex in graph.vertices() {
            if state.colors.get(&vertex) == Color::Discovered {
                state.colors.finish(&vertex);
                events.finish_vertex.emit(&vertex, state);
            }
        }
    }
}

impl<'h, G: GraphBase, C, W, R> Algorithm for BellmanFordShortestPath<'h, G, C, W, R> {
    type Vertex = G::Vertex;

    fn core(&self) -> &AlgorithmCore<G::Vertex> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore<G::Vertex> {
        &mut self.core
    }
}

impl<'h, G: GraphBase, C, W, R> Observable for BellmanFordShortestPath<'h, G, C, W, R> {
    type Events = BellmanFordEvents<'h, G::Vertex, G::Edge, C, R>;

    fn channel(&self) -> &EventChannel<Self::Events> {
        &self.channel
    }

    fn channel_mut(&mut self) -> &mut EventChannel<Self::Events> {
        &mut self.channel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::RunState;
    use crate::error::GraphError;
    use crate::graph::{AdjacencyGraph, Edge};
    use crate::shortest_path::relaxer::CriticalDistance;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Graph = AdjacencyGraph<u32, i64>;
    type Weight = fn(&Edge<u32, i64>) -> i64;
    type BellmanFord<'h, R = ShortestDistance> = BellmanFordShortestPath<'h, Graph, i64, Weight, R>;

    fn weight(edge: &Edge<u32, i64>) -> i64 {
        edge.data
    }

    #[test]
    fn handles_negative_weights() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)]);
        let mut bf: BellmanFord<'_> = BellmanFordShortestPath::new(weight);
        bf.set_root(0);
        bf.compute(&g).unwrap();

        assert!(!bf.found_negative_cycle());
        assert_eq!(bf.distances().get(&1), 2);
        assert_eq!(bf.distances().get(&3), 4);
        assert_eq!(bf.colors().count(Color::Finished), 4);
        assert_eq!(bf.state(), RunState::Finished);
    }

    #[test]
    fn reports_reachable_negative_cycle() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 1, 1), (1, 2, -1), (2, 1, -1), (3, 0, 1)]);
        let mut bf: BellmanFord<'_> = BellmanFordShortestPath::new(weight);
        let unminimized = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&unminimized);
        bf.subscribe(|token, ev| {
            ev.edge_not_minimized.connect(token, move |e, _| sink.borrow_mut().push(e.id));
        });
        bf.set_root(0);
        bf.compute(&g).unwrap();

        assert!(bf.found_negative_cycle());
        assert!(!unminimized.borrow().is_empty());
        // 3 is not reachable from 0; its edge is never examined.
        assert!(bf.colors().is_unvisited(&3));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 1, 2), (5, 6, -1), (6, 5, -1)]);
        let mut bf: BellmanFord<'_> = BellmanFordShortestPath::new(weight);
        bf.set_root(0);
        bf.compute(&g).unwrap();

        assert!(!bf.found_negative_cycle());
        assert_eq!(bf.distances().try_get(&5), None);
    }

    #[test]
    fn cyclic_graph_with_unit_weights() {
        let g: Graph = AdjacencyGraph::from_edges([(1, 2, 1), (2, 3, 1), (1, 4, 1), (3, 1, 1)]);
        let mut bf: BellmanFord<'_> = BellmanFordShortestPath::new(weight);
        bf.set_root(1);
        bf.compute(&g).unwrap();

        assert!(!bf.found_negative_cycle());
        assert_eq!(bf.distances().get(&3), 2);
        assert_eq!(bf.distances().get(&4), 1);
    }

    #[test]
    fn critical_relaxer_finds_longest_paths() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 1, 3), (0, 2, 1), (2, 1, 5), (1, 3, 1)]);
        let mut bf: BellmanFord<'_, CriticalDistance> = BellmanFordShortestPath::new(weight);
        bf.set_root(0);
        bf.compute(&g).unwrap();

        assert_eq!(bf.distances().get(&1), 6);
        assert_eq!(bf.distances().get(&3), 7);
        assert!(!bf.found_negative_cycle());
    }

    #[test]
    fn accumulates_distances_across_roots() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 2, 10), (1, 2, 3), (2, 3, 1)]);
        let mut bf: BellmanFord<'_> =
            BellmanFordShortestPath::with_config(weight, RelaxationConfig::accumulating());
        bf.set_root(0);
        bf.compute(&g).unwrap();
        assert_eq!(bf.distances().get(&3), 11);

        bf.set_root(1);
        bf.compute(&g).unwrap();
        assert_eq!(bf.distances().get(&0), 0);
        assert_eq!(bf.distances().get(&1), 0);
        assert_eq!(bf.distances().get(&3), 4);

        bf.config_mut().accumulate_distances = false;
        bf.compute(&g).unwrap();
        assert_eq!(bf.distances().try_get(&0), None);
    }

    #[test]
    fn missing_root_is_an_error() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 1, 1)]);
        let mut bf: BellmanFord<'_> = BellmanFordShortestPath::new(weight);
        assert_eq!(bf.compute(&g), Err(GraphError::RootNotSet));
        bf.set_root(9);
        assert!(matches!(bf.compute(&g), Err(GraphError::VertexNotFound(_))));
    }

    #[test]
    fn cancelled_run_keeps_partial_distances() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 1, 4), (1, 2, 2)]);
        let mut bf: BellmanFord<'_> = BellmanFordShortestPath::new(weight);
        let cancel = bf.cancellation_token();
        let finished = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&finished);
        bf.subscribe(|token, ev| {
            ev.edge_relaxed.connect(token, move |_, _| cancel.cancel());
            ev.finish_vertex.connect(token, move |_, _| *sink.borrow_mut() += 1);
        });
        bf.set_root(0);
        bf.compute(&g).unwrap();

        assert_eq!(bf.state(), RunState::Aborted);
        assert_eq!(bf.distances().get(&1), 4);
        assert_eq!(bf.distances().try_get(&2), None);
        assert!(!bf.found_negative_cycle());
        assert_eq!(*finished.borrow(), 0);
    }
}
