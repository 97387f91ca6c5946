use core::hash::Hash;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::algorithm::{Observer, ObserverToken, TreeEvents};
use crate::graph::EdgeRef;

/// Records, for every vertex, the tree edge that reached it last.
///
/// On a traversal that is the edge the vertex was discovered through; on a
/// relaxation algorithm it is the edge of the best path found.
///
/// Clones share the recorded map, so a recorder can be kept by the caller
/// while a clone is attached.
#[derive(Debug)]
pub struct PredecessorRecorder<V, E> {
    edges: Rc<RefCell<HashMap<V, E>>>,
}

impl<V, E> Clone for PredecessorRecorder<V, E> {
    fn clone(&self) -> Self {
        Self {
            edges: Rc::clone(&self.edges),
        }
    }
}

impl<V, E> Default for PredecessorRecorder<V, E> {
    fn default() -> Self {
        Self {
            edges: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl<V, E> PredecessorRecorder<V, E>
where
    V: Clone + Eq + Hash,
    E: EdgeRef<V> + Clone,
{
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The edge that reached `vertex`, if any.
    pub fn try_get(&self, vertex: &V) -> Option<E> {
        self.edges.borrow().get(vertex).cloned()
    }

    /// Number of vertices with a recorded predecessor.
    pub fn len(&self) -> usize {
        self.edges.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.edges.borrow().is_empty()
    }

    /// Forgets every recorded edge.
    pub fn clear(&self) {
        self.edges.borrow_mut().clear();
    }

    /// The edges from the tree root down to `target`.
    ///
    /// Walks back from `target` until a vertex has no predecessor or is its
    /// own predecessor. Empty for a root or an unreached vertex.
    pub fn path_to(&self, target: &V) -> Vec<E> {
        let edges = self.edges.borrow();
        let mut path = Vec::new();
        let mut current = target;
        while let Some(edge) = edges.get(current) {
            if edge.source() == current || path.len() >= edges.len() {
                break;
            }
            path.push(edge.clone());
            current = edge.source();
        }
        path.reverse();
        path
    }

    /// Vertex sequence of [`path_to`](Self::path_to), starting at the root.
    ///
    /// `[target]` alone when `target` has no recorded predecessor.
    pub fn vertices_to(&self, target: &V) -> Vec<V> {
        let path = self.path_to(target);
        let mut vertices = Vec::with_capacity(path.len() + 1);
        if let Some(first) = path.first() {
            vertices.push(first.source().clone());
        }
        vertices.extend(path.iter().map(|e| e.target().clone()));
        if vertices.is_empty() {
            vertices.push(target.clone());
        }
        vertices
    }
}

impl<V, E, Ev> Observer<Ev> for PredecessorRecorder<V, E>
where
    V: Clone + Eq + Hash + 'static,
    E: EdgeRef<V> + Clone + 'static,
    Ev: TreeEvents<V, E>,
{
    fn register(&self, token: ObserverToken, events: &mut Ev) {
        let edges = Rc::clone(&self.edges);
        events.on_tree_edge(token, move |edge: &E| {
            edges
                .borrow_mut()
                .insert(edge.target().clone(), edge.clone());
        });
    }
}
