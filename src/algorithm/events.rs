//! Event channel: typed notification points and token-scoped observers.
//!
//! Every algorithm owns an [`EventChannel`] holding a fixed struct of
//! [`Signal`]s, one per notification point (`discover_vertex`, `tree_edge`,
//! ...). Observers register handlers on the signals they care about under an
//! [`ObserverToken`]; detaching the token removes exactly those handlers.
//!
//! Handlers receive the event item and a *shared* reference to the
//! algorithm's state (its color map, or colors and distances). The algorithm
//! keeps the only mutable borrow, so handlers can read but never mutate what
//! drives the traversal.
//!
//! ```rust
//! use halo_graph::algorithm::{Algorithm, Observable};
//! use halo_graph::graph::AdjacencyGraph;
//! use halo_graph::traversal::DepthFirstSearch;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let graph: AdjacencyGraph<i32> = AdjacencyGraph::from_edges([(0, 1, ()), (1, 2, ())]);
//! let mut dfs = DepthFirstSearch::<AdjacencyGraph<i32>>::new();
//! dfs.set_root(0);
//!
//! let order = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&order);
//! let token = dfs.subscribe(|token, events| {
//!     events.discover_vertex.connect(token, move |v, _colors| sink.borrow_mut().push(*v));
//! });
//!
//! dfs.compute(&graph).unwrap();
//! assert_eq!(*order.borrow(), vec![0, 1, 2]);
//! assert!(dfs.detach(token));
//! ```

use core::fmt;

/// Identifies the handlers registered by one attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverToken(u64);

impl fmt::Display for ObserverToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

type Handler<'h, T, S> = Box<dyn FnMut(&T, &S) + 'h>;

/// One notification point: an ordered list of handlers.
///
/// Handlers fire in connection order, each at most once per emission.
pub struct Signal<'h, T, S> {
    slots: Vec<(ObserverToken, Handler<'h, T, S>)>,
}

impl<T, S> Default for Signal<'_, T, S> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T, S> fmt::Debug for Signal<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("handlers", &self.slots.len())
            .finish()
    }
}

impl<'h, T, S> Signal<'h, T, S> {
    /// Creates a signal with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `token`.
    pub fn connect<F>(&mut self, token: ObserverToken, handler: F)
    where
        F: FnMut(&T, &S) + 'h,
    {
        self.slots.push((token, Box::new(handler)));
    }

    /// Removes every handler registered under `token`, returning how many.
    pub fn disconnect(&mut self, token: ObserverToken) -> usize {
        let before = self.slots.len();
        self.slots.retain(|(t, _)| *t != token);
        before - self.slots.len()
    }

    /// Invokes every handler with `item` and a read-only view of `state`.
    #[inline]
    pub fn emit(&mut self, item: &T, state: &S) {
        for (_, handler) in &mut self.slots {
            handler(item, state);
        }
    }

    /// Number of connected handlers.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is connected.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A struct of signals that can drop all handlers of one token at once.
pub trait EventSet {
    /// Removes every handler registered under `token`, returning how many.
    fn disconnect(&mut self, token: ObserverToken) -> usize;

    /// Total number of connected handlers across all signals.
    fn handler_count(&self) -> usize;
}

/// Declares an events struct whose fields are [`Signal`]s sharing one state
/// view, together with its `Default` and [`EventSet`] impls.
macro_rules! event_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident<$($generic:ident),*> (state = $state:ty) {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $item:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub struct $name<'h, $($generic),*> {
            $(
                $(#[$field_meta])*
                pub $field: $crate::algorithm::events::Signal<'h, $item, $state>,
            )*
        }

        impl<'h, $($generic),*> Default for $name<'h, $($generic),*> {
            fn default() -> Self {
                Self {
                    $($field: $crate::algorithm::events::Signal::new(),)*
                }
            }
        }

        impl<'h, $($generic),*> ::core::fmt::Debug for $name<'h, $($generic),*> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field.len()))*
                    .finish()
            }
        }

        impl<'h, $($generic),*> $crate::algorithm::events::EventSet for $name<'h, $($generic),*> {
            fn disconnect(&mut self, token: $crate::algorithm::events::ObserverToken) -> usize {
                0 $(+ self.$field.disconnect(token))*
            }

            fn handler_count(&self) -> usize {
                0 $(+ self.$field.len())*
            }
        }
    };
}

pub(crate) use event_set;

/// Something that installs handlers on an events struct.
///
/// Implemented by the recorders in [`crate::observers`]; any type can
/// implement it for the events structs it understands.
pub trait Observer<Ev> {
    /// Connects this observer's handlers under `token`.
    fn register(&self, token: ObserverToken, events: &mut Ev);
}

/// Owns an algorithm's events and hands out observer tokens.
#[derive(Debug)]
pub struct EventChannel<Ev> {
    events: Ev,
    next_token: u64,
}

impl<Ev: Default> Default for EventChannel<Ev> {
    fn default() -> Self {
        Self {
            events: Ev::default(),
            next_token: 0,
        }
    }
}

impl<Ev: EventSet> EventChannel<Ev> {
    /// Issues a fresh token and lets `register` connect handlers under it.
    pub fn subscribe<F>(&mut self, register: F) -> ObserverToken
    where
        F: FnOnce(ObserverToken, &mut Ev),
    {
        let token = ObserverToken(self.next_token);
        self.next_token += 1;
        register(token, &mut self.events);
        token
    }

    /// Attaches `observer` and returns the token that detaches it.
    pub fn attach<O: Observer<Ev> + ?Sized>(&mut self, observer: &O) -> ObserverToken {
        self.subscribe(|token, events| observer.register(token, events))
    }

    /// Detaches every handler registered under `token`. Returns `false` if
    /// there was none.
    pub fn detach(&mut self, token: ObserverToken) -> bool {
        self.events.disconnect(token) > 0
    }

    /// The signals, for emission.
    pub fn events(&self) -> &Ev {
        &self.events
    }

    pub(crate) fn events_mut(&mut self) -> &mut Ev {
        &mut self.events
    }
}

/// An algorithm that exposes an [`EventChannel`].
pub trait Observable {
    /// The algorithm's events struct.
    type Events: EventSet;

    /// The algorithm's channel.
    fn channel(&self) -> &EventChannel<Self::Events>;

    /// Mutable access to the algorithm's channel.
    fn channel_mut(&mut self) -> &mut EventChannel<Self::Events>;

    /// Attaches `observer`; see [`EventChannel::attach`].
    fn attach<O: Observer<Self::Events> + ?Sized>(&mut self, observer: &O) -> ObserverToken {
        self.channel_mut().attach(observer)
    }

    /// Connects ad-hoc handlers; see [`EventChannel::subscribe`].
    fn subscribe<F>(&mut self, register: F) -> ObserverToken
    where
        F: FnOnce(ObserverToken, &mut Self::Events),
    {
        self.channel_mut().subscribe(register)
    }

    /// Detaches the handlers of `token`; see [`EventChannel::detach`].
    fn detach(&mut self, token: ObserverToken) -> bool {
        self.channel_mut().detach(token)
    }

    /// Runs `f` with `observer` attached, detaching it afterwards.
    fn observe<O, R, F>(&mut self, observer: &O, f: F) -> R
    where
        Self: Sized,
        O: Observer<Self::Events> + ?Sized,
        F: FnOnce(&mut Self) -> R,
    {
        let token = self.attach(observer);
        let result = f(self);
        self.detach(token);
        result
    }
}

/// Events that describe a search tree: where it starts and which edges grow it.
///
/// For traversals the tree edges are `tree_edge`; for relaxation algorithms
/// they are `edge_relaxed`.
pub trait TreeEvents<V, E> {
    /// Connects `handler` to the point where a root starts a tree.
    fn on_start_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, handler: F);

    /// Connects `handler` to the point where an edge joins the tree.
    fn on_tree_edge<F: FnMut(&E) + 'static>(&mut self, token: ObserverToken, handler: F);
}

/// Events that bracket each vertex's expansion.
pub trait VertexEvents<V> {
    /// Connects `handler` to vertex discovery.
    fn on_discover_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, handler: F);

    /// Connects `handler` to vertex completion.
    fn on_finish_vertex<F: FnMut(&V) + 'static>(&mut self, token: ObserverToken, handler: F);
}
