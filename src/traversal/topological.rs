//! Topological order as a depth-first search observer.

use std::cell::RefCell;
use std::rc::Rc;

use crate::algorithm::{Algorithm, Observable, TraversalConfig};
use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeRef, IncidenceGraph, VertexListGraph};
use crate::traversal::DepthFirstSearch;

/// Orders the vertices of a directed acyclic graph so that every edge points
/// forward.
///
/// Runs a forest depth-first search and reverses the finish order. The first
/// back edge cancels the search.
///
/// # Errors
/// [`GraphError::CyclicGraph`] naming the vertex the first back edge points to.
pub fn topological_order<G>(graph: &G) -> GraphResult<Vec<G::Vertex>>
where
    G: IncidenceGraph + VertexListGraph,
{
    let order = Rc::new(RefCell::new(Vec::with_capacity(graph.vertex_count())));
    let cycle = Rc::new(RefCell::new(None));

    let mut dfs: DepthFirstSearch<'_, G> = DepthFirstSearch::with_config(TraversalConfig::forest());
    let cancel = dfs.cancellation_token();
    {
        let order = Rc::clone(&order);
        let cycle = Rc::clone(&cycle);
        dfs.subscribe(move |token, events| {
            events
                .finish_vertex
                .connect(token, move |v, _| order.borrow_mut().push(v.clone()));
            events.back_edge.connect(token, move |e, _| {
                cycle
                    .borrow_mut()
                    .get_or_insert_with(|| e.target().clone());
                cancel.cancel();
            });
        });
    }
    dfs.compute(graph)?;

    if let Some(vertex) = cycle.take() {
        tracing::warn!(vertex = ?vertex, "topological order requested on a cyclic graph");
        return Err(GraphError::cyclic(&vertex));
    }
    let mut order = order.take();
    order.reverse();
    Ok(order)
}
