//! YAML scenario runner
//!
//! Loads a scenario file, builds its terrain and walks it with the
//! [`WalkHarness`].

use std::path::Path;

use pada_plan::{BipedState, FootPose, GridCoord, GridPoint, Side, TerrainGrid};

use crate::harness::{WalkHarness, WalkResult};
use crate::yaml_config::{FootConfig, ScenarioConfig, TerrainConfig};

/// Height written for obstacle cells; the grid reads negatives as obstacles
const OBSTACLE_MARK: f64 = -1.0;

/// Load a scenario configuration from a YAML file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Rasterize the synthetic terrain.
pub fn build_grid(terrain: &TerrainConfig) -> Result<TerrainGrid, Box<dyn std::error::Error>> {
    let rows = (0..terrain.rows)
        .map(|x| {
            (0..terrain.cols)
                .map(|y| {
                    if terrain.obstacles.iter().any(|r| r.contains(x as i32, y as i32)) {
                        OBSTACLE_MARK
                    } else {
                        terrain.base + terrain.slope * x as f64
                    }
                })
                .collect()
        })
        .collect();
    Ok(TerrainGrid::from_rows(rows)?)
}

fn foot(config: &FootConfig) -> FootPose {
    FootPose::new(GridPoint::new(config.x, config.y), config.heading)
}

/// A loaded and executed scenario
pub struct ScenarioRun {
    pub config: ScenarioConfig,
    pub grid: TerrainGrid,
    pub result: WalkResult,
}

/// Run a scenario from a YAML file. The left foot swings first.
pub fn run_scenario<P: AsRef<Path>>(yaml_path: P) -> Result<ScenarioRun, Box<dyn std::error::Error>> {
    let config = load_scenario(yaml_path)?;
    let grid = build_grid(&config.terrain)?;

    let state = BipedState::new(foot(&config.left), foot(&config.right), Side::Left);
    let goal = GridCoord::new(config.goal[0], config.goal[1]);

    let result = WalkHarness::new(&grid, &config.planner)?.run(state, goal, config.max_steps);
    Ok(ScenarioRun {
        config,
        grid,
        result,
    })
}
