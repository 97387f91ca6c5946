//! Distance maps and the state relaxation algorithms expose to handlers.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use std::collections::hash_map::{self, HashMap};

use crate::algorithm::ColorMap;
use crate::shortest_path::relaxer::{Cost, DistanceRelaxer, ShortestDistance};

/// Mapping from vertex to its best known distance.
///
/// Vertices without an entry read as the relaxer's infinity.
pub struct DistanceMap<V, C, R = ShortestDistance> {
    distances: HashMap<V, C>,
    _relaxer: PhantomData<R>,
}

impl<V, C, R> Default for DistanceMap<V, C, R> {
    fn default() -> Self {
        Self {
            distances: HashMap::new(),
            _relaxer: PhantomData,
        }
    }
}

impl<V: Clone, C: Clone, R> Clone for DistanceMap<V, C, R> {
    fn clone(&self) -> Self {
        Self {
            distances: self.distances.clone(),
            _relaxer: PhantomData,
        }
    }
}

impl<V: fmt::Debug, C: fmt::Debug, R> fmt::Debug for DistanceMap<V, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.distances.iter()).finish()
    }
}

impl<V, C, R> DistanceMap<V, C, R>
where
    V: Eq + Hash,
    C: Cost,
    R: DistanceRelaxer<C>,
{
    /// Creates an empty map: every vertex is at infinity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Distance of `vertex`, infinity if it was never reached.
    #[inline]
    pub fn get(&self, vertex: &V) -> C {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or_else(R::infinity)
    }

    /// Distance of `vertex` if it was reached.
    pub fn try_get(&self, vertex: &V) -> Option<C> {
        self.distances.get(vertex).copied()
    }

    /// Returns `true` if `vertex` has a finite distance.
    pub fn is_reached(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Records `distance` for `vertex`.
    pub fn set(&mut self, vertex: V, distance: C) {
        self.distances.insert(vertex, distance);
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if no vertex was reached.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Forgets every distance.
    pub fn clear(&mut self) {
        self.distances.clear();
    }

    /// Iterates over reached vertices and their distances.
    pub fn iter(&self) -> hash_map::Iter<'_, V, C> {
        self.distances.iter()
    }
}

impl<'a, V, C, R> IntoIterator for &'a DistanceMap<V, C, R> {
    type Item = (&'a V, &'a C);
    type IntoIter = hash_map::Iter<'a, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.distances.iter()
    }
}

/// What relaxation handlers can see: colors and tentative distances.
pub struct ShortestPathState<V, C, R = ShortestDistance> {
    pub(crate) colors: ColorMap<V>,
    pub(crate) distances: DistanceMap<V, C, R>,
}

impl<V, C, R> Default for ShortestPathState<V, C, R> {
    fn default() -> Self {
        Self {
            colors: ColorMap::default(),
            distances: DistanceMap::default(),
        }
    }
}

impl<V: fmt::Debug, C: fmt::Debug, R> fmt::Debug for ShortestPathState<V, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortestPathState")
            .field("colors", &self.colors)
            .field("distances", &self.distances)
            .finish()
    }
}

impl<V, C, R> ShortestPathState<V, C, R> {
    /// Vertex colors.
    pub fn colors(&self) -> &ColorMap<V> {
        &self.colors
    }

    /// Tentative distances.
    pub fn distances(&self) -> &DistanceMap<V, C, R> {
        &self.distances
    }
}

impl<V, C, R> ShortestPathState<V, C, R>
where
    V: Eq + Hash,
    C: Cost,
    R: DistanceRelaxer<C>,
{
    /// Clears colors, and distances too unless `keep_distances` is set.
    pub(crate) fn reset(&mut self, keep_distances: bool) {
        self.colors.clear();
        if !keep_distances {
            self.distances.clear();
        }
    }
}
