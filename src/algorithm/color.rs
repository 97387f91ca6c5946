//! Per-vertex visitation colors.
//!
//! A [`ColorMap`] replaces the boolean visited set of a plain traversal with
//! the three-state marker every algorithm in this crate drives:
//!
//! ```text
//! Unvisited ──discover──▶ Discovered ──finish──▶ Finished
//! ```
//!
//! Transitions never go backwards. Vertices absent from the map read as
//! [`Color::Unvisited`], so initializing a pass is a `clear`.

use core::hash::Hash;
use std::collections::hash_map::{self, HashMap};

use serde::{Deserialize, Serialize};

use super::invariant::{debug_assert_reopen, debug_assert_transition};

/// Visitation state of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Not reached yet ("white").
    #[default]
    Unvisited,
    /// Reached, still being expanded ("gray").
    Discovered,
    /// Fully expanded ("black").
    Finished,
}

/// Mapping from vertex to [`Color`].
#[derive(Debug, Clone)]
pub struct ColorMap<V> {
    colors: HashMap<V, Color>,
}

impl<V> Default for ColorMap<V> {
    fn default() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }
}

impl<V: Eq + Hash> ColorMap<V> {
    /// Creates an empty map: every vertex is unvisited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color of `vertex`.
    #[inline]
    pub fn get(&self, vertex: &V) -> Color {
        self.colors.get(vertex).copied().unwrap_or_default()
    }

    /// Returns `true` if `vertex` is [`Color::Unvisited`].
    #[inline]
    pub fn is_unvisited(&self, vertex: &V) -> bool {
        self.get(vertex) == Color::Unvisited
    }

    /// Marks an unvisited vertex as discovered.
    pub fn discover(&mut self, vertex: V) {
        let previous = self.colors.insert(vertex, Color::Discovered);
        debug_assert_transition(previous.unwrap_or_default(), Color::Discovered);
    }

    /// Marks a discovered vertex as finished.
    pub fn finish(&mut self, vertex: &V)
    where
        V: Clone,
    {
        match self.colors.get_mut(vertex) {
            Some(color) => {
                debug_assert_transition(*color, Color::Finished);
                *color = Color::Finished;
            }
            None => {
                debug_assert_transition(Color::Unvisited, Color::Finished);
                self.colors.insert(vertex.clone(), Color::Finished);
            }
        }
    }

    /// Moves a finished vertex back to discovered.
    ///
    /// Only best-first search under a heuristic that is admissible but not
    /// consistent needs this: a vertex finished too early is reopened when a
    /// shorter path into it turns up.
    pub(crate) fn reopen(&mut self, vertex: &V) {
        if let Some(color) = self.colors.get_mut(vertex) {
            debug_assert_reopen(*color);
            *color = Color::Discovered;
        }
    }

    /// Forgets every color.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Number of vertices that left [`Color::Unvisited`].
    pub fn touched(&self) -> usize {
        self.colors.len()
    }

    /// Number of vertices with color `color`. Unvisited vertices are not tracked
    /// and always count as zero.
    pub fn count(&self, color: Color) -> usize {
        self.colors.values().filter(|&&c| c == color).count()
    }

    /// Iterates over vertices that left [`Color::Unvisited`].
    pub fn iter(&self) -> hash_map::Iter<'_, V, Color> {
        self.colors.iter()
    }
}

impl<'a, V> IntoIterator for &'a ColorMap<V> {
    type Item = (&'a V, &'a Color);
    type IntoIter = hash_map::Iter<'a, V, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
