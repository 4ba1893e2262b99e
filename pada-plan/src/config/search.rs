//! Search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// A* and guide-path settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchSection {
    /// Maximum nodes to expand per search
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// Fine cells per coarse block for guide paths
    #[serde(default = "defaults::guide_stride")]
    pub guide_stride: f64,

    /// Wall-clock budget per search in milliseconds (none = unlimited)
    #[serde(default)]
    pub deadline_ms: Option<u64>,

    /// Support-to-goal distance at which the walk counts as arrived
    #[serde(default = "defaults::arrival_tolerance")]
    pub arrival_tolerance: f64,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_iterations: defaults::max_iterations(),
            guide_stride: defaults::guide_stride(),
            deadline_ms: None,
            arrival_tolerance: defaults::arrival_tolerance(),
        }
    }
}
