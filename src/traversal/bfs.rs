//! Breadth-first search over a pluggable [`Frontier`].
//!
//! Vertices are colored Discovered when they enter the frontier and Finished
//! after all their out-edges were examined. Non-tree edges are further split
//! by the color of their target: `gray_target` while it still waits in the
//! frontier (or is being expanded), `black_target` once it is finished.
//!
//! Undirected breadth-first search runs over the [`Undirected`] view; see
//! [`UndirectedBreadthFirstSearch`].

use std::collections::HashMap;

use crate::algorithm::events::event_set;
use crate::algorithm::{
    Algorithm, AlgorithmCore, Color, ColorMap, EventChannel, Observable, ObserverToken,
    TraversalConfig, TreeEvents, VertexEvents,
};
use crate::error::GraphResult;
use crate::graph::{EdgeRef, GraphBase, IncidenceGraph, Undirected, VertexListGraph};
use crate::traversal::frontier::{FifoFrontier, Frontier};

event_set! {
    /// Notification points of [`BreadthFirstSearch`].
    pub struct BfsEvents<V, E> (state = ColorMap<V>) {
        /// Every vertex, before the traversal starts.
        initialize_vertex: V,
        /// A vertex that roots a new breadth-first tree.
        start_vertex: V,
        /// A vertex entered the frontier.
        discover_vertex: V,
        /// A vertex left the frontier and is about to be expanded.
        examine_vertex: V,
        /// Every out-edge of an expanded vertex.
        examine_edge: E,
        /// An edge to an Unvisited vertex.
        tree_edge: E,
        /// An edge to a vertex that is no longer Unvisited.
        non_tree_edge: E,
        /// A non-tree edge whose target is Discovered.
        gray_target: E,
        /// A non-tree edge whose target is Finished.
        black_target: E,
        /// A vertex whose out-edges were all examined.
        finish_vertex: V,
    }
}

impl<V, E> TreeEvents<V, E> for BfsEvents<'_, V, E> {
    fn on_start_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.start_vertex.connect(token, move |v, _| handler(v));
    }

    fn on_tree_edge<F: FnMut(&E) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.tree_edge.connect(token, move |e, _| handler(e));
    }
}

impl<V, E> VertexEvents<V> for BfsEvents<'_, V, E> {
    fn on_discover_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.discover_vertex.connect(token, move |v, _| handler(v));
    }

    fn on_finish_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.finish_vertex.connect(token, move |v, _| handler(v));
    }
}

/// Breadth-first search over an [`IncidenceGraph`].
///
/// `Q` picks the queue discipline; the default FIFO frontier yields the
/// classic level order.
pub struct BreadthFirstSearch<'h, G: GraphBase, Q = FifoFrontier<<G as GraphBase>::Vertex>> {
    core: AlgorithmCore<G::Vertex>,
    channel: EventChannel<BfsEvents<'h, G::Vertex, G::Edge>>,
    colors: ColorMap<G::Vertex>,
    config: TraversalConfig,
    frontier: Q,
    depths: HashMap<G::Vertex, usize>,
    reuse_colors: bool,
}

/// Breadth-first search over the undirected view of a bidirectional graph.
pub type UndirectedBreadthFirstSearch<'h, 'g, G> = BreadthFirstSearch<'h, Undirected<'g, G>>;

impl<'h, G: GraphBase> Default for BreadthFirstSearch<'h, G> {
    fn default() -> Self {
        Self::with_config(TraversalConfig::default())
    }
}

impl<'h, G: GraphBase> BreadthFirstSearch<'h, G> {
    /// Creates a level-order search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a level-order search with `config`.
    pub fn with_config(config: TraversalConfig) -> Self {
        Self::with_frontier(FifoFrontier::new(), config)
    }
}

impl<'h, G, Q> BreadthFirstSearch<'h, G, Q>
where
    G: GraphBase,
    Q: Frontier<G::Vertex>,
{
    /// Creates a search that schedules vertices through `frontier`.
    pub fn with_frontier(frontier: Q, config: TraversalConfig) -> Self {
        Self {
            core: AlgorithmCore::default(),
            channel: EventChannel::default(),
            colors: ColorMap::new(),
            config,
            frontier,
            depths: HashMap::new(),
            reuse_colors: false,
        }
    }

    /// Uses `colors` as the color map and keeps it across runs.
    #[must_use]
    pub fn with_color_map(mut self, colors: ColorMap<G::Vertex>) -> Self {
        self.colors = colors;
        self.reuse_colors = true;
        self
    }

    /// The traversal options.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Mutable traversal options.
    pub fn config_mut(&mut self) -> &mut TraversalConfig {
        &mut self.config
    }

    /// Colors after the last run.
    pub fn colors(&self) -> &ColorMap<G::Vertex> {
        &self.colors
    }

    /// Takes the color map out, leaving an empty one.
    pub fn take_colors(&mut self) -> ColorMap<G::Vertex> {
        core::mem::take(&mut self.colors)
    }

    /// Runs the search on `graph`.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if the root is not in `graph`
    /// - [`GraphError::RootNotSet`](crate::GraphError::RootNotSet) if there is no root and forest mode is off
    pub fn compute(&mut self, graph: &G) -> GraphResult<()>
    where
        G: IncidenceGraph + VertexListGraph,
    {
        let root = self
            .core
            .traversal_root(graph, self.config.process_all_components)?;

        let _span =
            tracing::debug_span!("breadth_first_search", vertices = graph.vertex_count()).entered();

        self.core.begin();
        self.initialize(graph);

        if let Some(root) = root {
            self.visit_component(graph, root);
        }
        if self.config.process_all_components {
            for vertex in graph.vertices() {
                if self.core.should_abort() {
                    break;
                }
                if self.colors.is_unvisited(&vertex) {
                    self.visit_component(graph, vertex);
                }
            }
        }

        // An aborted run leaves vertices behind in the frontier.
        self.frontier.clear();
        self.depths.clear();

        if self.core.should_abort() {
            tracing::debug!(discovered = self.colors.touched(), "breadth-first search aborted");
        } else {
            self.core.complete();
            tracing::debug!(discovered = self.colors.touched(), "breadth-first search finished");
        }
        Ok(())
    }

    fn initialize(&mut self, graph: &G)
    where
        G: VertexListGraph,
    {
        if !self.reuse_colors {
            self.colors.clear();
        }
        self.frontier.clear();
        self.depths.clear();

        let events = self.channel.events_mut();
        if events.initialize_vertex.is_empty() {
            return;
        }
        for vertex in graph.vertices() {
            if self.colors.is_unvisited(&vertex) {
                events.initialize_vertex.emit(&vertex, &self.colors);
            }
        }
    }

    fn visit_component(&mut self, graph: &G, root: G::Vertex)
    where
        G: IncidenceGraph,
    {
        let Self {
            core,
            channel,
            colors,
            config,
            frontier,
            depths,
            ..
        } = self;
        let events = channel.events_mut();
        let bounded = config.max_depth != usize::MAX;

        events.start_vertex.emit(&root, colors);
        colors.discover(root.clone());
        events.discover_vertex.emit(&root, colors);
        if bounded {
            depths.insert(root.clone(), 0);
        }
        frontier.push(root);

        while let Some(vertex) = frontier.pop() {
            if core.should_abort() {
                return;
            }
            events.examine_vertex.emit(&vertex, colors);

            let depth = if bounded {
                depths.get(&vertex).copied().unwrap_or_default()
            } else {
                0
            };
            if depth < config.max_depth {
                for edge in graph.out_edges(&vertex) {
                    if core.should_abort() {
                        return;
                    }
                    events.examine_edge.emit(&edge, colors);
                    let target = edge.target();
                    match colors.get(target) {
                        Color::Unvisited => {
                            events.tree_edge.emit(&edge, colors);
                            colors.discover(target.clone());
                            events.discover_vertex.emit(target, colors);
                            if bounded {
                                depths.insert(target.clone(), depth + 1);
                            }
                            frontier.push(target.clone());
                        }
                        Color::Discovered => {
                            events.non_tree_edge.emit(&edge, colors);
                            events.gray_target.emit(&edge, colors);
                        }
                        Color::Finished => {
                            events.non_tree_edge.emit(&edge, colors);
                            events.black_target.emit(&edge, colors);
                        }
                    }
                }
            }

            colors.finish(&vertex);
            events.finish_vertex.emit(&vertex, colors);
        }
    }
}

impl<'h, G: GraphBase, Q> Algorithm for BreadthFirstSearch<'h, G, Q> {
    type Vertex = G::Vertex;

    fn core(&self) -> &AlgorithmCore<G::Vertex> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore<G::Vertex> {
        &mut self.core
    }
}

impl<'h, G: GraphBase, Q> Observable for BreadthFirstSearch<'h, G, Q> {
    type Events = BfsEvents<'h, G::Vertex, G::Edge>;

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
    use crate::error::GraphError;
    use crate::algorithm::RunState;
    use crate::graph::AdjacencyGraph;
    use crate::traversal::frontier::{BestFirstFrontier, LifoFrontier};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Graph = AdjacencyGraph<u32>;

    fn diamond() -> Graph {
        // 0 -> {1, 2} -> 3, 3 -> 0
        AdjacencyGraph::from_edges([(0, 1, ()), (0, 2, ()), (1, 3, ()), (2, 3, ()), (3, 0, ())])
    }

    fn record_discoveries<Q: Frontier<u32>>(
        bfs: &mut BreadthFirstSearch<'_, Graph, Q>,
    ) -> Rc<RefCell<Vec<u32>>> {
        let order = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&order);
        bfs.subscribe(|token, ev| {
            ev.discover_vertex.connect(token, move |v, _| sink.borrow_mut().push(*v));
        });
        order
    }

    #[test]
    fn visits_in_level_order() {
        let g = diamond();
        let mut bfs: BreadthFirstSearch<'_, Graph> = BreadthFirstSearch::new();
        let order = record_discoveries(&mut bfs);
        bfs.set_root(0);
        bfs.compute(&g).unwrap();

        assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
        assert_eq!(bfs.state(), RunState::Finished);
        assert_eq!(bfs.colors().count(Color::Finished), 4);
    }

    #[test]
    fn splits_non_tree_edges_by_target_color() {
        let g = diamond();
        let mut bfs: BreadthFirstSearch<'_, Graph> = BreadthFirstSearch::new();
        let gray = Rc::new(RefCell::new(Vec::new()));
        let black = Rc::new(RefCell::new(Vec::new()));
        let non_tree = Rc::new(RefCell::new(0));
        {
            let (gray, black, non_tree) = (Rc::clone(&gray), Rc::clone(&black), Rc::clone(&non_tree));
            bfs.subscribe(move |token, ev| {
                ev.gray_target.connect(token, move |e, _| gray.borrow_mut().push((e.source, e.target)));
                ev.black_target.connect(token, move |e, _| black.borrow_mut().push((e.source, e.target)));
                ev.non_tree_edge.connect(token, move |_, _| *non_tree.borrow_mut() += 1);
            });
        }
        bfs.set_root(0);
        bfs.compute(&g).unwrap();

        // 2 -> 3 while 3 still waits in the queue; 3 -> 0 after 0 finished.
        assert_eq!(*gray.borrow(), vec![(2, 3)]);
        assert_eq!(*black.borrow(), vec![(3, 0)]);
        assert_eq!(*non_tree.borrow(), 2);
    }

    #[test]
    fn max_depth_bounds_levels() {
        let g: Graph = AdjacencyGraph::from_edges([(0, 1, ()), (1, 2, ()), (0, 3, ()), (3, 4, ())]);
        let mut bfs: BreadthFirstSearch<'_, Graph> =
            BreadthFirstSearch::with_config(TraversalConfig::with_max_depth(1));
        let order = record_discoveries(&mut bfs);
        bfs.set_root(0);
        bfs.compute(&g).unwrap();

        assert_eq!(*order.borrow(), vec![0, 1, 3]);
        assert_eq!(bfs.colors().get(&1), Color::Finished);
        assert!(bfs.colors().is_unvisited(&2));
    }

    #[test]
    fn forest_mode_and_missing_root() {
        let mut g: Graph = AdjacencyGraph::from_edges([(0, 1, ())]);
        g.add_vertex(5);

        let mut bfs: BreadthFirstSearch<'_, Graph> = BreadthFirstSearch::new();
        assert_eq!(bfs.compute(&g), Err(GraphError::RootNotSet));

        bfs.config_mut().process_all_components = true;
        let order = record_discoveries(&mut bfs);
        bfs.compute(&g).unwrap();
        assert_eq!(*order.borrow(), vec![0, 1, 5]);
    }

    #[test]
    fn lifo_frontier_changes_only_the_schedule() {
        let g = diamond();
        let mut bfs = BreadthFirstSearch::with_frontier(LifoFrontier::new(), TraversalConfig::default());
        let order = record_discoveries(&mut bfs);
        bfs.set_root(0);
        bfs.compute(&g).unwrap();

        // 2 is expanded before 1, so 3 is discovered through 2.
        assert_eq!(*order.borrow(), vec![0, 1, 2, 3]);
        assert_eq!(bfs.colors().count(Color::Finished), 4);
    }

    #[test]
    fn best_first_frontier_follows_the_key() {
        // 0 -> {10, 3}, 3 -> 4, 10 -> 11
        let g: Graph = AdjacencyGraph::from_edges([(0, 10, ()), (0, 3, ()), (3, 4, ()), (10, 11, ())]);
        let frontier: BestFirstFrontier<u32, u32, _> = BestFirstFrontier::new(|v: &u32| *v);
        let mut bfs: BreadthFirstSearch<'_, Graph, _> =
            BreadthFirstSearch::with_frontier(frontier, TraversalConfig::default());
        let examined = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&examined);
        bfs.subscribe(|token, ev| {
            ev.examine_vertex.connect(token, move |v: &u32, _| sink.borrow_mut().push(*v));
        });
        bfs.set_root(0);
        bfs.compute(&g).unwrap();

        assert_eq!(*examined.borrow(), vec![0, 3, 4, 10, 11]);
    }

    #[test]
    fn undirected_view_reaches_predecessors() {
        let g: Graph = AdjacencyGraph::from_edges([(1, 0, ()), (2, 1, ())]);
        let view = Undirected::new(&g);
        let mut bfs: UndirectedBreadthFirstSearch<'_, '_, Graph> = BreadthFirstSearch::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&order);
        bfs.subscribe(|token, ev| {
            ev.discover_vertex.connect(token, move |v, _| sink.borrow_mut().push(*v));
        });
        bfs.set_root(0);
        bfs.compute(&view).unwrap();

        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn cancellation_leaves_a_clean_frontier() {
        let g = diamond();
        let mut bfs: BreadthFirstSearch<'_, Graph> = BreadthFirstSearch::new();
        let cancel = bfs.cancellation_token();
        let canceller = bfs.subscribe(|token, ev| {
            ev.tree_edge.connect(token, move |_, _| cancel.cancel());
        });
        bfs.set_root(0);
        bfs.compute(&g).unwrap();
        assert_eq!(bfs.state(), RunState::Aborted);
        assert_eq!(bfs.colors().get(&0), Color::Discovered);

        assert!(bfs.detach(canceller));
        bfs.compute(&g).unwrap();
        assert_eq!(bfs.colors().count(Color::Finished), 4);
        assert_eq!(bfs.state(), RunState::Finished);
    }
}
