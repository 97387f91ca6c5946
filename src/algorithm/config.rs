//! Algorithm configuration.
//!
//! Both structs deserialize with every field optional, so a configuration
//! document only names what it changes:
//!
//! ```rust
//! use halo_graph::algorithm::TraversalConfig;
//!
//! let config = TraversalConfig::from_json(r#"{ "max_depth": 2 }"#).unwrap();
//! assert_eq!(config.max_depth, 2);
//! assert!(!config.process_all_components);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Options shared by depth-first and breadth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Deepest tree level whose vertices are expanded. The root is depth 0;
    /// vertices at `max_depth` are discovered and finished but their
    /// out-edges are not examined.
    pub max_depth: usize,

    /// Forest mode: after the root's tree (if any), start a new tree from
    /// every vertex still unvisited, in enumeration order.
    pub process_all_components: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            process_all_components: false,
        }
    }
}

impl TraversalConfig {
    /// Config that bounds the traversal depth.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Config that visits every component.
    #[must_use]
    pub fn forest() -> Self {
        Self {
            process_all_components: true,
            ..Self::default()
        }
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::InvalidConfig(e.to_string()))
    }
}

/// Options for Bellman-Ford and DAG shortest path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxationConfig {
    /// Keep the distances of previous runs and relax on top of them, so
    /// successive roots accumulate into one map.
    pub accumulate_distances: bool,
}

impl RelaxationConfig {
    /// Config that accumulates distances across runs.
    #[must_use]
    pub fn accumulating() -> Self {
        Self {
            accumulate_distances: true,
        }
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::InvalidConfig(e.to_string()))
    }
}
