use core::hash::Hash;
use core::marker::PhantomData;
use std::cell::RefCell;
use std::rc::Rc;

use crate::algorithm::{Observer, ObserverToken, TreeEvents};
use crate::graph::EdgeRef;
use crate::shortest_path::{Cost, DistanceMap, DistanceRelaxer, ShortestDistance};

/// Rebuilds distances from a search tree.
///
/// Tree roots get the relaxer's zero; each tree edge gives its target the
/// source distance combined with the edge cost. On a relaxation algorithm the
/// last relaxed edge wins, so the recorded map matches the algorithm's own.
pub struct DistanceRecorder<V, E, C, F, R = ShortestDistance> {
    distances: Rc<RefCell<DistanceMap<V, C, R>>>,
    cost: Rc<F>,
    _edge: PhantomData<fn(&E)>,
}

impl<V, E, C, F, R> Clone for DistanceRecorder<V, E, C, F, R> {
    fn clone(&self) -> Self {
        Self {
            distances: Rc::clone(&self.distances),
            cost: Rc::clone(&self.cost),
            _edge: PhantomData,
        }
    }
}

impl<V, E, C, F, R> DistanceRecorder<V, E, C, F, R>
where
    V: Eq + Hash,
    C: Cost,
    F: Fn(&E) -> C,
    R: DistanceRelaxer<C>,
{
    /// Creates a recorder that charges `cost` per tree edge.
    pub fn new(cost: F) -> Self {
        Self {
            distances: Rc::new(RefCell::new(DistanceMap::new())),
            cost: Rc::new(cost),
            _edge: PhantomData,
        }
    }

    /// Recorded distance of `vertex`, if it was reached.
    pub fn try_get(&self, vertex: &V) -> Option<C> {
        self.distances.borrow().try_get(vertex)
    }

    /// Recorded distance of `vertex`, infinity if it was not reached.
    pub fn get(&self, vertex: &V) -> C {
        self.distances.borrow().get(vertex)
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.distances.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.distances.borrow().is_empty()
    }

    /// Forgets every recorded distance.
    pub fn clear(&self) {
        self.distances.borrow_mut().clear();
    }
}

/// Cost function of [`DistanceRecorder::hops`].
pub type HopCount<E> = fn(&E) -> usize;

fn one_hop<E>(_: &E) -> usize {
    1
}

impl<V: Eq + Hash, E> DistanceRecorder<V, E, usize, HopCount<E>> {
    /// Records the number of tree edges between each vertex and its root.
    pub fn hops() -> Self {
        Self::new(one_hop::<E>)
    }
}

impl<V, E, C, F, R, Ev> Observer<Ev> for DistanceRecorder<V, E, C, F, R>
where
    V: Clone + Eq + Hash + 'static,
    E: EdgeRef<V> + 'static,
    C: Cost + 'static,
    F: Fn(&E) -> C + 'static,
    R: DistanceRelaxer<C> + 'static,
    Ev: TreeEvents<V, E>,
{
    fn register(&self, token: ObserverToken, events: &mut Ev) {
        let distances = Rc::clone(&self.distances);
        events.on_start_vertex(token, move |root: &V| {
            distances.borrow_mut().set(root.clone(), R::zero());
        });

        let distances = Rc::clone(&self.distances);
        let cost = Rc::clone(&self.cost);
        events.on_tree_edge(token, move |edge: &E| {
            let mut distances = distances.borrow_mut();
            let reached = R::combine(distances.get(edge.source()), cost(edge));
            distances.set(edge.target().clone(), reached);
        });
    }
}
