//! Algorithm lifecycle: roots, run state, cancellation and events.
//!
//! Every algorithm in this crate embeds an [`AlgorithmCore`] and exposes it
//! through the [`Algorithm`] trait:
//!
//! ```text
//!             compute()              completes
//! NotRunning ──────────▶ Running ─────────────▶ Finished
//!                           │
//!                           │ cancel / mid-run error
//!                           ▼
//!                        Aborted
//! ```
//!
//! Setting a root is a pure data operation; whether it belongs to the graph
//! is checked when `compute` runs.

pub mod color;
pub mod config;
pub mod events;
mod invariant;

use core::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::graph::VertexListGraph;

pub use color::{Color, ColorMap};
pub use config::{RelaxationConfig, TraversalConfig};
pub use events::{
    EventChannel, EventSet, Observable, Observer, ObserverToken, Signal, TreeEvents, VertexEvents,
};

/// Lifecycle of a single `compute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No computation has started, or the last call was rejected up front.
    #[default]
    NotRunning,
    /// A computation is in progress.
    Running,
    /// The last computation ran to completion.
    Finished,
    /// The last computation was cancelled or stopped by an error.
    Aborted,
}

/// Cooperative cancellation flag shared between an algorithm and its callers.
///
/// Clones share the flag, so a clone can be moved into an event handler or
/// another thread and cancel the run from there. Algorithms check the flag at
/// every vertex and edge examination and clear it when a new run starts.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Returns `true` once cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Root, run state and cancellation shared by every algorithm.
#[derive(Debug, Clone)]
pub struct AlgorithmCore<V> {
    root: Option<V>,
    state: RunState,
    cancellation: CancellationToken,
}

impl<V> Default for AlgorithmCore<V> {
    fn default() -> Self {
        Self {
            root: None,
            state: RunState::NotRunning,
            cancellation: CancellationToken::new(),
        }
    }
}

impl<V> AlgorithmCore<V> {
    /// The stored root.
    pub fn root(&self) -> Option<&V> {
        self.root.as_ref()
    }

    /// Stores `root`. Never fails.
    pub fn set_root(&mut self, root: V) {
        self.root = Some(root);
    }

    /// Forgets the root.
    pub fn clear_root(&mut self) {
        self.root = None;
    }

    /// State of the last run.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The cancellation flag of this algorithm.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub(crate) fn begin(&mut self) {
        self.cancellation.reset();
        self.state = RunState::Running;
    }

    /// Checks the cancellation flag, moving to `Aborted` if it is set.
    #[inline]
    pub(crate) fn should_abort(&mut self) -> bool {
        if self.state == RunState::Aborted {
            return true;
        }
        if self.cancellation.is_cancelled() {
            self.state = RunState::Aborted;
            return true;
        }
        false
    }

    pub(crate) fn complete(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Finished;
        }
    }

    pub(crate) fn fail(&mut self) {
        self.state = RunState::Aborted;
    }
}

impl<V: Clone + Debug> AlgorithmCore<V> {
    /// The root if it is set, checked against `graph`.
    pub(crate) fn checked_root<G>(&self, graph: &G) -> GraphResult<Option<V>>
    where
        G: VertexListGraph<Vertex = V>,
    {
        match &self.root {
            Some(root) if !graph.contains_vertex(root) => {
                tracing::warn!(root = ?root, "root is not in the graph");
                Err(GraphError::vertex_not_found(root))
            }
            root => Ok(root.clone()),
        }
    }

    /// The root of a traversal: optional when every component is visited,
    /// required otherwise.
    pub(crate) fn traversal_root<G>(&self, graph: &G, all_components: bool) -> GraphResult<Option<V>>
    where
        G: VertexListGraph<Vertex = V>,
    {
        if all_components {
            self.checked_root(graph)
        } else {
            self.required_root(graph).map(Some)
        }
    }

    /// The root, which must be set and belong to `graph`.
    pub(crate) fn required_root<G>(&self, graph: &G) -> GraphResult<V>
    where
        G: VertexListGraph<Vertex = V>,
    {
        self.checked_root(graph)?.ok_or_else(|| {
            tracing::warn!("compute called without a root");
            GraphError::RootNotSet
        })
    }
}

/// Lifecycle operations common to every algorithm.
pub trait Algorithm {
    /// Vertex type of the graphs this algorithm runs on.
    type Vertex;

    /// Shared lifecycle state.
    fn core(&self) -> &AlgorithmCore<Self::Vertex>;

    /// Mutable lifecycle state. Only the root is writable from outside the crate.
    fn core_mut(&mut self) -> &mut AlgorithmCore<Self::Vertex>;

    /// State of the last run.
    fn state(&self) -> RunState {
        self.core().state()
    }

    /// Sets the vertex the next run starts from.
    fn set_root(&mut self, root: Self::Vertex) {
        self.core_mut().set_root(root);
    }

    /// The stored root, if any.
    fn try_get_root(&self) -> Option<&Self::Vertex> {
        self.core().root()
    }

    /// Forgets the stored root.
    fn clear_root(&mut self) {
        self.core_mut().clear_root();
    }

    /// A handle that cancels the current or next run.
    fn cancellation_token(&self) -> CancellationToken {
        self.core().cancellation_token().clone()
    }

    /// Requests cancellation of the current run.
    fn abort(&self) {
        self.core().cancellation_token().cancel();
    }
}
