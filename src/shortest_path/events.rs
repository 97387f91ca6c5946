//! Notification points of the relaxation algorithms.
//!
//! For recorders, the tree edges of a relaxation algorithm are its
//! `edge_relaxed` events: the last relaxed edge into a vertex is the one on
//! its best path.

use crate::algorithm::events::event_set;
use crate::algorithm::{ObserverToken, TreeEvents, VertexEvents};
use crate::shortest_path::distance::ShortestPathState;

event_set! {
    /// Notification points of Dijkstra, A* and DAG shortest path.
    pub struct ShortestPathEvents<V, E, C, R> (state = ShortestPathState<V, C, R>) {
        /// Every vertex, before the run starts.
        initialize_vertex: V,
        /// The root.
        start_vertex: V,
        /// A vertex reached for the first time.
        discover_vertex: V,
        /// A vertex whose out-edges are about to be relaxed.
        examine_vertex: V,
        /// Every out-edge of an examined vertex.
        examine_edge: E,
        /// An edge that improved the distance of its target.
        edge_relaxed: E,
        /// An edge that did not.
        edge_not_relaxed: E,
        /// A vertex whose out-edges were all relaxed. Under an inconsistent
        /// A* heuristic a reopened vertex finishes again.
        finish_vertex: V,
        /// The search target was popped. Fires right after the target's
        /// `finish_vertex`; the run then stops without examining its edges.
        target_reached: V,
    }
}

event_set! {
    /// Notification points of Bellman-Ford.
    ///
    /// Bellman-Ford relaxes edges, not vertices, so `examine_vertex` and
    /// `target_reached` never fire; they exist so handlers written against the
    /// common points connect unchanged.
    pub struct BellmanFordEvents<V, E, C, R> (state = ShortestPathState<V, C, R>) {
        /// Every vertex, before the run starts.
        initialize_vertex: V,
        /// The root.
        start_vertex: V,
        /// A vertex reached for the first time.
        discover_vertex: V,
        /// Never fired.
        examine_vertex: V,
        /// An edge whose source is reached, in every pass.
        examine_edge: E,
        /// An edge that improved the distance of its target.
        edge_relaxed: E,
        /// An edge that did not.
        edge_not_relaxed: E,
        /// Every reached vertex, after the final check.
        finish_vertex: V,
        /// Never fired.
        target_reached: V,
        /// Final check: the edge cannot be relaxed any further.
        edge_minimized: E,
        /// Final check: the edge still relaxes, so it lies on or behind a
        /// negative cycle.
        edge_not_minimized: E,
    }
}

macro_rules! relaxation_recorder_hooks {
    ($events:ident) => {
        impl<V, E, C, R> TreeEvents<V, E> for $events<'_, V, E, C, R> {
            fn on_start_vertex<F: FnMut(&V) + 'static>(
                &mut self,
                token: ObserverToken,
                mut handler: F,
            ) {
                self.start_vertex.connect(token, move |v, _| handler(v));
            }

            fn on_tree_edge<F: FnMut(&E) + 'static>(&mut self, token: ObserverToken, mut handler: F) {
                self.edge_relaxed.connect(token, move |e, _| handler(e));
            }
        }

        impl<V, E, C, R> VertexEvents<V> for $events<'_, V, E, C, R> {
            fn on_discover_vertex<F: FnMut(&V) + 'static>(
                &mut self,
                token: ObserverToken,
                mut handler: F,
            ) {
                self.discover_vertex.connect(token, move |v, _| handler(v));
            }

            fn on_finish_vertex<F: FnMut(&V) + 'static>(
                &mut self,
                token: ObserverToken,
                mut handler: F,
            ) {
                self.finish_vertex.connect(token, move |v, _| handler(v));
            }
        }
    };
}

relaxation_recorder_hooks!(ShortestPathEvents);
relaxation_recorder_hooks!(BellmanFordEvents);
