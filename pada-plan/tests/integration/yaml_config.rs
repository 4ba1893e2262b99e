//! YAML configuration structures for walking scenarios
//!
//! A scenario describes a synthetic terrain, the initial stance, the goal
//! and what the walk is expected to do.

use serde::Deserialize;

use pada_plan::PlannerConfig;

/// Top-level scenario configuration loaded from YAML.
#[derive(Debug, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario name
    pub name: String,
    pub terrain: TerrainConfig,
    pub left: FootConfig,
    pub right: FootConfig,
    /// Goal cell as [row, col]
    pub goal: [i32; 2],
    /// Step budget
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    pub expect: Expectation,
    /// Planner overrides; omitted sections use defaults
    #[serde(default)]
    pub planner: PlannerConfig,
}

fn default_max_steps() -> usize {
    40
}

/// Synthetic terrain: a plane `base + slope · row` with obstacle rectangles.
#[derive(Debug, Deserialize)]
pub struct TerrainConfig {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub base: f64,
    /// Height gained per row
    #[serde(default)]
    pub slope: f64,
    #[serde(default)]
    pub obstacles: Vec<RectConfig>,
}

/// Inclusive cell rectangle
#[derive(Debug, Deserialize)]
pub struct RectConfig {
    pub min: [i32; 2],
    pub max: [i32; 2],
}

impl RectConfig {
    pub fn contains(&self, row: i32, col: i32) -> bool {
        (self.min[0]..=self.max[0]).contains(&row) && (self.min[1]..=self.max[1]).contains(&col)
    }
}

/// Foot pose in cells and radians
#[derive(Debug, Deserialize)]
pub struct FootConfig {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub heading: f64,
}

/// Expected walk outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    Arrived,
    Blocked,
}
