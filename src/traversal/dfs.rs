//! Depth-first search with edge classification.
//!
//! The traversal keeps an explicit stack of `(vertex, out-edge iterator)`
//! frames instead of recursing, so arbitrarily deep graphs cannot overflow
//! the native stack. Every edge leaving an expanded vertex is classified by
//! the color of its target at examination time:
//!
//! | Target color | Event |
//! |--------------|-------|
//! | Unvisited | `tree_edge`, then the target is discovered and expanded |
//! | Discovered | `back_edge` (the edge closes a cycle; self-loops land here) |
//! | Finished | `forward_or_cross_edge` |
//!
//! Discover/finish events nest like parentheses: for any two vertices the
//! intervals are either disjoint or one contains the other.
//!
//! In undirected mode ([`DepthFirstSearch::undirected`]) the edge a vertex was
//! reached through is not examined again from the child side, so a tree edge
//! is never reported a second time as a back edge.

use crate::algorithm::events::event_set;
use crate::algorithm::{
    Algorithm, AlgorithmCore, Color, ColorMap, EventChannel, Observable, ObserverToken,
    TraversalConfig, TreeEvents, VertexEvents,
};
use crate::error::GraphResult;
use crate::graph::{EdgeRef, GraphBase, IncidenceGraph, UndirectedGraph, VertexListGraph};

event_set! {
    /// Notification points of [`DepthFirstSearch`].
    pub struct DfsEvents<V, E> (state = ColorMap<V>) {
        /// Every vertex, before the traversal starts.
        initialize_vertex: V,
        /// A vertex that roots a new depth-first tree.
        start_vertex: V,
        /// A vertex turned Discovered.
        discover_vertex: V,
        /// Every out-edge of an expanded vertex.
        examine_edge: E,
        /// An edge to an Unvisited vertex.
        tree_edge: E,
        /// An edge to a Discovered vertex.
        back_edge: E,
        /// An edge to a Finished vertex.
        forward_or_cross_edge: E,
        /// A vertex turned Finished.
        finish_vertex: V,
    }
}

impl<V, E> TreeEvents<V, E> for DfsEvents<'_, V, E> {
    fn on_start_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.start_vertex.connect(token, move |v, _| handler(v));
    }

    fn on_tree_edge<F: FnMut(&E) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.tree_edge.connect(token, move |e, _| handler(e));
    }
}

impl<V, E> VertexEvents<V> for DfsEvents<'_, V, E> {
    fn on_discover_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.discover_vertex.connect(token, move |v, _| handler(v));
    }

    fn on_finish_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
        self.finish_vertex.connect(token, move |v, _| handler(v));
    }
}

struct Frame<V, E, I> {
    vertex: V,
    edges: I,
    depth: usize,
    parent: Option<E>,
}

/// Depth-first search over an [`IncidenceGraph`].
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `compute` | \(O(n + m)\) | Plus the cost of attached handlers |
/// | stack depth | \(O(\min(n, \text{max\_depth}))\) | Heap-allocated frames |
pub struct DepthFirstSearch<'h, G: GraphBase> {
    core: AlgorithmCore<G::Vertex>,
    channel: EventChannel<DfsEvents<'h, G::Vertex, G::Edge>>,
    colors: ColorMap<G::Vertex>,
    config: TraversalConfig,
    undirected: bool,
    reuse_colors: bool,
}

impl<'h, G: GraphBase> Default for DepthFirstSearch<'h, G> {
    fn default() -> Self {
        Self::with_config(TraversalConfig::default())
    }
}

impl<'h, G: GraphBase> DepthFirstSearch<'h, G> {
    /// Creates a search with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a search with `config`.
    pub fn with_config(config: TraversalConfig) -> Self {
        Self {
            core: AlgorithmCore::default(),
            channel: EventChannel::default(),
            colors: ColorMap::new(),
            config,
            undirected: false,
            reuse_colors: false,
        }
    }

    /// Uses `colors` as the color map and keeps it across runs instead of
    /// clearing it at the start of each `compute`. Finished vertices are not
    /// visited again.
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
    /// Starts from the root if one is set; in forest mode, then continues
    /// from every vertex still unvisited.
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

        let _span = tracing::debug_span!(
            "depth_first_search",
            vertices = graph.vertex_count(),
            undirected = self.undirected
        )
        .entered();

        self.core.begin();
        self.initialize(graph);

        if let Some(root) = root {
            self.visit_tree(graph, root);
        }
        if self.config.process_all_components {
            for vertex in graph.vertices() {
                if self.core.should_abort() {
                    break;
                }
                if self.colors.is_unvisited(&vertex) {
                    self.visit_tree(graph, vertex);
                }
            }
        }

        if self.core.should_abort() {
            tracing::debug!(discovered = self.colors.touched(), "depth-first search aborted");
        } else {
            self.core.complete();
            tracing::debug!(discovered = self.colors.touched(), "depth-first search finished");
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

    fn visit_tree(&mut self, graph: &G, root: G::Vertex)
    where
        G: IncidenceGraph,
    {
        let Self {
            core,
            channel,
            colors,
            config,
            undirected,
            ..
        } = self;
        let events = channel.events_mut();

        events.start_vertex.emit(&root, colors);
        colors.discover(root.clone());
        events.discover_vertex.emit(&root, colors);

        let mut stack = vec![Frame {
            edges: graph.out_edges(&root),
            vertex: root,
            depth: 0,
            parent: None,
        }];

        while let Some(frame) = stack.last_mut() {
            if core.should_abort() {
                return;
            }

            let next = if frame.depth < config.max_depth {
                frame.edges.next()
            } else {
                None
            };
            let Some(edge) = next else {
                if let Some(done) = stack.pop() {
                    colors.finish(&done.vertex);
                    events.finish_vertex.emit(&done.vertex, colors);
                }
                continue;
            };
            if *undirected && frame.parent.as_ref() == Some(&edge) {
                continue;
            }
            let depth = frame.depth + 1;

            events.examine_edge.emit(&edge, colors);
            let target = edge.target().clone();
            match colors.get(&target) {
                Color::Unvisited => {
                    events.tree_edge.emit(&edge, colors);
                    colors.discover(target.clone());
                    events.discover_vertex.emit(&target, colors);
                    stack.push(Frame {
                        edges: graph.out_edges(&target),
                        vertex: target,
                        depth,
                        parent: Some(edge),
                    });
                }
                Color::Discovered => events.back_edge.emit(&edge, colors),
                Color::Finished => events.forward_or_cross_edge.emit(&edge, colors),
            }
        }
    }
}

impl<'h, G: UndirectedGraph> DepthFirstSearch<'h, G> {
    /// Creates a search that treats `G` as undirected: the edge a vertex was
    /// reached through is skipped when that vertex is expanded.
    pub fn undirected() -> Self {
        Self::undirected_with_config(TraversalConfig::default())
    }

    /// Undirected search with `config`.
    pub fn undirected_with_config(config: TraversalConfig) -> Self {
        let mut dfs = Self::with_config(config);
        dfs.undirected = true;
        dfs
    }
}

impl<'h, G: GraphBase> Algorithm for DepthFirstSearch<'h, G> {
    type Vertex = G::Vertex;

    fn core(&self) -> &AlgorithmCore<G::Vertex> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AlgorithmCore<G::Vertex> {
        &mut self.core
    }
}

impl<'h, G: GraphBase> Observable for DepthFirstSearch<'h, G> {
    type Events = DfsEvents<'h, G::Vertex, G::Edge>;

    fn channel(&self) -> &EventChannel<Self::Events> {
        &self.channel
    }

    fn channel_mut(&mut self) -> &mut EventChannel<Self::Events> {
        &mut self.channel
    }
}
