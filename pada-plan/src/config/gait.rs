//! Gait configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Step limits and foot dimensions, in grid cells and radians
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GaitSection {
    #[serde(default = "defaults::max_stride")]
    pub max_stride: f64,

    /// Largest deviation of the step direction from the support heading
    #[serde(default = "defaults::max_turn")]
    pub max_turn: f64,

    #[serde(default = "defaults::min_separation")]
    pub min_separation: f64,

    #[serde(default = "defaults::max_separation")]
    pub max_separation: f64,

    /// Sampling step of the candidate sweep
    #[serde(default = "defaults::scan_step")]
    pub scan_step: f64,

    #[serde(default = "defaults::foot_length")]
    pub foot_length: f64,

    #[serde(default = "defaults::foot_width")]
    pub foot_width: f64,

    /// Steepest accepted foothold plane
    #[serde(default = "defaults::max_stand_angle")]
    pub max_stand_angle: f64,
}

impl Default for GaitSection {
    fn default() -> Self {
        Self {
            max_stride: defaults::max_stride(),
            max_turn: defaults::max_turn(),
            min_separation: defaults::min_separation(),
            max_separation: defaults::max_separation(),
            scan_step: defaults::scan_step(),
            foot_length: defaults::foot_length(),
            foot_width: defaults::foot_width(),
            max_stand_angle: defaults::max_stand_angle(),
        }
    }
}
