//! Main PlannerConfig and conversion methods.

use std::path::Path;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::gait::{FootShape, GaitLimits};
use crate::grid::BlockScale;
use crate::pathfinding::{AStarConfig, BlendError, Decay, DirectionBlender};

use super::blending::{BlendingSection, DecayKind};
use super::error::ConfigLoadError;
use super::gait::GaitSection;
use super::search::SearchSection;

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/planner.yaml";

/// Full footstep planner configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct PlannerConfig {
    /// Search settings
    #[serde(default)]
    pub search: SearchSection,

    /// Gait limits and foot size
    #[serde(default)]
    pub gait: GaitSection,

    /// Direction blending
    #[serde(default)]
    pub blending: BlendingSection,
}

impl PlannerConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from the default config path, or defaults when it is absent
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no planner can work with
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let gait = &self.gait;
        let checks: [(bool, String); 11] = [
            (
                self.search.max_iterations > 0,
                "search.max_iterations must be positive".to_string(),
            ),
            (
                self.search.guide_stride.is_finite()
                    && self.search.guide_stride >= BlockScale::MIN_STRIDE,
                format!(
                    "search.guide_stride {} must be at least {}",
                    self.search.guide_stride,
                    BlockScale::MIN_STRIDE
                ),
            ),
            (
                self.search.arrival_tolerance.is_finite() && self.search.arrival_tolerance >= 0.0,
                format!(
                    "search.arrival_tolerance {} must be non-negative",
                    self.search.arrival_tolerance
                ),
            ),
            (
                gait.max_stride.is_finite() && gait.max_stride > 0.0,
                format!("gait.max_stride {} must be positive", gait.max_stride),
            ),
            (
                gait.max_turn.is_finite() && gait.max_turn >= 0.0,
                format!("gait.max_turn {} must be non-negative", gait.max_turn),
            ),
            (
                gait.min_separation.is_finite()
                    && gait.max_separation.is_finite()
                    && gait.min_separation >= 0.0
                    && gait.min_separation <= gait.max_separation,
                format!(
                    "gait separation window [{}, {}] is empty",
                    gait.min_separation, gait.max_separation
                ),
            ),
            (
                gait.scan_step.is_finite() && gait.scan_step > 0.0,
                format!("gait.scan_step {} must be positive", gait.scan_step),
            ),
            (
                gait.foot_length.is_finite()
                    && gait.foot_width.is_finite()
                    && gait.foot_length > 0.0
                    && gait.foot_width > 0.0,
                format!(
                    "foot size {}x{} must be positive",
                    gait.foot_length, gait.foot_width
                ),
            ),
            (
                gait.max_stand_angle.is_finite() && gait.max_stand_angle >= 0.0,
                format!(
                    "gait.max_stand_angle {} must be non-negative",
                    gait.max_stand_angle
                ),
            ),
            (
                self.blending.decay == DecayKind::Square
                    || (self.blending.ratio > 0.0 && self.blending.ratio < 1.0),
                format!("blending.ratio {} must lie in (0, 1)", self.blending.ratio),
            ),
            (
                self.blending.lookahead > 0,
                "blending.lookahead must be positive".to_string(),
            ),
        ];

        for (ok, message) in checks {
            if !ok {
                warn!("[Planner] rejected config: {}", message);
                return Err(ConfigLoadError::Invalid(message));
            }
        }
        Ok(())
    }

    /// Convert to AStarConfig
    pub fn to_astar_config(&self) -> AStarConfig {
        AStarConfig {
            max_iterations: self.search.max_iterations,
            deadline: self.search.deadline_ms.map(Duration::from_millis),
        }
    }

    /// Convert to GaitLimits
    pub fn to_gait_limits(&self) -> GaitLimits {
        GaitLimits {
            max_stride: self.gait.max_stride,
            max_turn: self.gait.max_turn,
            min_separation: self.gait.min_separation,
            max_separation: self.gait.max_separation,
            scan_step: self.gait.scan_step,
            max_stand_angle: self.gait.max_stand_angle,
        }
    }

    pub fn foot_shape(&self) -> FootShape {
        FootShape::new(self.gait.foot_length, self.gait.foot_width)
    }

    /// Build the configured blender
    pub fn direction_blender(&self) -> Result<DirectionBlender, BlendError> {
        match self.blending.decay {
            DecayKind::Geometric => DirectionBlender::new(Decay::Geometric {
                ratio: self.blending.ratio,
            }),
            DecayKind::Square => Ok(DirectionBlender::square()),
        }
    }

    /// Block scale used for guide paths
    pub fn block_scale(&self) -> Result<BlockScale, ConfigLoadError> {
        BlockScale::new(self.search.guide_stride)
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))
    }
}
