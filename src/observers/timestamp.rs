use core::hash::Hash;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::algorithm::{Observer, ObserverToken, VertexEvents};

#[derive(Debug)]
struct Clock<V> {
    now: usize,
    discovered: HashMap<V, usize>,
    finished: HashMap<V, usize>,
}

impl<V> Default for Clock<V> {
    fn default() -> Self {
        Self {
            now: 0,
            discovered: HashMap::new(),
            finished: HashMap::new(),
        }
    }
}

/// Stamps every discover and finish event with a shared, increasing clock.
///
/// On a depth-first search the stamps satisfy the parenthesis property: for
/// any two vertices the intervals `[discover, finish]` are disjoint or nested.
#[derive(Debug)]
pub struct TimeStampRecorder<V> {
    clock: Rc<RefCell<Clock<V>>>,
}

impl<V> Clone for TimeStampRecorder<V> {
    fn clone(&self) -> Self {
        Self {
            clock: Rc::clone(&self.clock),
        }
    }
}

impl<V> Default for TimeStampRecorder<V> {
    fn default() -> Self {
        Self {
            clock: Rc::default(),
        }
    }
}

impl<V: Clone + Eq + Hash> TimeStampRecorder<V> {
    /// Creates a recorder with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// When `vertex` was discovered.
    pub fn discover_time(&self, vertex: &V) -> Option<usize> {
        self.clock.borrow().discovered.get(vertex).copied()
    }

    /// When `vertex` was finished.
    pub fn finish_time(&self, vertex: &V) -> Option<usize> {
        self.clock.borrow().finished.get(vertex).copied()
    }

    /// The `[discover, finish]` interval of `vertex`, once it is finished.
    pub fn interval(&self, vertex: &V) -> Option<(usize, usize)> {
        Some((self.discover_time(vertex)?, self.finish_time(vertex)?))
    }

    /// Number of events stamped so far.
    pub fn ticks(&self) -> usize {
        self.clock.borrow().now
    }

    /// Every recorded interval. Vertices still open are left out.
    pub fn intervals(&self) -> Vec<(V, usize, usize)> {
        let clock = self.clock.borrow();
        clock
            .finished
            .iter()
            .filter_map(|(v, &end)| clock.discovered.get(v).map(|&start| (v.clone(), start, end)))
            .collect()
    }

    /// Resets the clock and forgets every stamp.
    pub fn clear(&self) {
        *self.clock.borrow_mut() = Clock::default();
    }
}

impl<V, Ev> Observer<Ev> for TimeStampRecorder<V>
where
    V: Clone + Eq + Hash + 'static,
    Ev: VertexEvents<V>,
{
    fn register(&self, token: ObserverToken, events: &mut Ev) {
        let clock = Rc::clone(&self.clock);
        events.on_discover_vertex(token, move |v: &V| {
            let mut clock = clock.borrow_mut();
            let now = clock.now;
            clock.discovered.insert(v.clone(), now);
            clock.now += 1;
        });

        let clock = Rc::clone(&self.clock);
        events.on_finish_vertex(token, move |v: &V| {
            let mut clock = clock.borrow_mut();
            let now = clock.now;
            clock.finished.insert(v.clone(), now);
            clock.now += 1;
        });
    }
}

/// Collects vertices in the order they are discovered.
#[derive(Debug)]
pub struct DiscoverOrderRecorder<V> {
    order: Rc<RefCell<Vec<V>>>,
}

impl<V> Clone for DiscoverOrderRecorder<V> {
    fn clone(&self) -> Self {
        Self {
            order: Rc::clone(&self.order),
        }
    }
}

impl<V> Default for DiscoverOrderRecorder<V> {
    fn default() -> Self {
        Self {
            order: Rc::default(),
        }
    }
}

impl<V: Clone> DiscoverOrderRecorder<V> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded vertices.
    pub fn order(&self) -> Vec<V> {
        self.order.borrow().clone()
    }

    /// Number of recorded vertices.
    pub fn len(&self) -> usize {
        self.order.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.order.borrow().is_empty()
    }

    /// Forgets the recorded order.
    pub fn clear(&self) {
        self.order.borrow_mut().clear();
    }
}

impl<V, Ev> Observer<Ev> for DiscoverOrderRecorder<V>
where
    V: Clone + 'static,
    Ev: VertexEvents<V>,
{
    fn register(&self, token: ObserverToken, events: &mut Ev) {
        let order = Rc::clone(&self.order);
        events.on_discover_vertex(token, move |v: &V| order.borrow_mut().push(v.clone()));
    }
}
