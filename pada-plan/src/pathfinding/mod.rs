//! Path planning algorithms.
//!
//! This module provides route planning on the terrain grid:
//!
//! - **A* Search**: shortest 4-connected paths over any [`SearchSpace`]
//! - **Hierarchical Search**: coarse, steepness-gated guide paths
//! - **Direction Blending**: one look-ahead point from a guide path
//!
//! ## A* Pathfinding
//!
//! ```rust,ignore
//! use pada_plan::pathfinding::{AStarPlanner, AStarConfig};
//!
//! let planner = AStarPlanner::new(&grid, AStarConfig::default());
//! let result = planner.find_path(start, goal);
//! if result.success() {
//!     println!("Path found with {} cells", result.path.len());
//! }
//! ```
//!
//! ## Guide Paths
//!
//! ```rust,ignore
//! use pada_plan::pathfinding::{DirectionBlender, HierarchicalPlanner};
//!
//! let guide = HierarchicalPlanner::with_defaults(&grid).guide_path_ratio(start, goal, 0.125);
//! let target = DirectionBlender::default().blend_coords(&guide.points);
//! ```

pub mod astar;
pub mod direction;
pub mod hierarchical;

pub use astar::{
    AStarConfig, AStarPlanner, PathFailure, PathResult, SearchSpace, find_path, path_exists,
};
pub use direction::{BlendError, Decay, DirectionBlender};
pub use hierarchical::{CoarseSpace, GuidePath, GuideStatus, HierarchicalPlanner, block_steepness};
