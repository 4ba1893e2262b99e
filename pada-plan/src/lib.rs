//! # Pada-Plan: Biped Footstep Planning on Terrain Grids
//!
//! Plans where a two-legged robot should put its next foot, one step at a
//! time, over a rectangular height grid.
//!
//! ## Features
//!
//! - **A\* Search**: deterministic 4-connected shortest paths over any
//!   [`SearchSpace`](pathfinding::SearchSpace), with iteration, deadline and
//!   cancellation budgets
//! - **Hierarchical Guides**: coarse block search gated on terrain roughness
//! - **Plane Fitting**: supporting planes under a footprint and their tilt
//! - **Foothold Stabilizer**: bounded slide toward flatter ground
//! - **Gait Checks**: stride, foot separation and turn limits
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pada_plan::{BipedState, FootPose, GridCoord, GridPoint, Side, StepPlan, StepPlanner, TerrainGrid};
//!
//! let grid = TerrainGrid::new(60, 30, 0.0);
//! let planner = StepPlanner::with_defaults(&grid).unwrap();
//!
//! let mut state = BipedState::new(
//!     FootPose::new(GridPoint::new(10.0, 17.0), 0.0),
//!     FootPose::new(GridPoint::new(10.0, 12.0), 0.0),
//!     Side::Left,
//! );
//! while let StepPlan::Step(step) = planner.plan_step(&state, GridCoord::new(50, 15)) {
//!     state.commit_step(step.pose);
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! - **x** is the row index, **y** the column index
//! - Headings are `atan2(Δy, Δx)`, so heading 0 points toward increasing rows
//! - Obstacles are stored as `+inf`; negative input heights are read as obstacles
//!
//! ## Architecture
//!
//! - [`core`]: coordinates, angles, series sums, cancellation
//! - [`grid`]: terrain storage and block scaling
//! - [`terrain`]: flatness, plane fitting, footprints, stabilizer
//! - [`pathfinding`]: A*, hierarchical guides, direction blending
//! - [`gait`]: foot model, gait limits and candidate enumeration
//! - [`config`]: YAML configuration
//! - [`planner`]: the per-step pipeline

pub mod config;
pub mod core;
pub mod gait;
pub mod grid;
pub mod pathfinding;
pub mod planner;
pub mod terrain;

pub use config::{ConfigLoadError, PlannerConfig};
pub use self::core::{CancelToken, Direction, GridCoord, GridPoint, Point3};
pub use gait::{
    BipedState, FootPose, FootShape, GaitConstraintChecker, GaitLimits, GaitVerdict, Side,
    direct_target, ideal_walk,
};
pub use grid::{BlockScale, GridError, OBSTACLE, TerrainGrid};
pub use pathfinding::{
    AStarConfig, AStarPlanner, DirectionBlender, GuidePath, GuideStatus, HierarchicalPlanner,
    PathFailure, PathResult, find_path,
};
pub use planner::{StepDecision, StepPlan, StepPlanner};
pub use terrain::{
    FlatnessEvaluator, FootholdStabilizer, Footprint, Plane, PlaneFitError, PlaneFitter,
    SlideOutcome,
};
