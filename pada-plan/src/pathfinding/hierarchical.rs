//! Hierarchical ("scale-star") guide path search.
//!
//! Shrinks the problem before fine-grained planning:
//!
//! 1. Map start, goal and grid dimensions onto coarse blocks via [`BlockScale`].
//! 2. Run A* over the block space. Each edge is gated on the steepness of the
//!    destination block measured on the fine grid: blocks at least half
//!    covered by obstacles are rejected, others add their roughness score
//!    to the unit step cost.
//! 3. Use Euclidean distance in block space as the heuristic.
//! 4. Restore every intermediate block to its fine center and bracket the
//!    result with the exact fine start and goal.
//!
//! When the coarse search fails the guide collapses to `[start, goal]` and
//! is tagged [`GuideStatus::Fallback`]; callers must not treat it as a
//! verified route.
//!
//! Block steepness is recomputed for every relaxed edge and not memoized.

use log::{debug, trace};

use crate::core::{CancelToken, GridCoord};
use crate::grid::{BlockScale, TerrainGrid};
use crate::terrain::FlatnessEvaluator;

use super::astar::{AStarConfig, AStarPlanner, PathFailure, SearchSpace};

/// Roughness of a coarse block measured on the fine grid.
///
/// `None` when at least half of the block's cells are obstacles (or the block
/// lies entirely outside the grid), otherwise the flatness score of its
/// passable cells.
pub fn block_steepness(grid: &TerrainGrid, block: GridCoord, scale: BlockScale) -> Option<f64> {
    let (raw_lo, raw_hi) = scale.corners(block);
    let disjoint = raw_hi.x < 0
        || raw_hi.y < 0
        || raw_lo.x >= grid.rows() as i32
        || raw_lo.y >= grid.cols() as i32;
    if grid.is_empty() || disjoint {
        return None;
    }

    let (lo, hi) = grid.restore(block, scale);

    let total = ((hi.x - lo.x + 1) * (hi.y - lo.y + 1)) as usize;
    let heights = grid.heights_in(lo, hi);
    let obstacles = total - heights.len();
    if obstacles * 2 >= total {
        return None;
    }

    Some(FlatnessEvaluator::evaluate(&heights))
}

/// Coarse block graph over a fine terrain grid
pub struct CoarseSpace<'a> {
    grid: &'a TerrainGrid,
    scale: BlockScale,
    rows: usize,
    cols: usize,
}

impl<'a> CoarseSpace<'a> {
    pub fn new(grid: &'a TerrainGrid, scale: BlockScale) -> Self {
        Self {
            grid,
            scale,
            rows: scale.coarse_len(grid.rows()),
            cols: scale.coarse_len(grid.cols()),
        }
    }

    /// Coarse (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl SearchSpace for CoarseSpace<'_> {
    fn contains(&self, node: GridCoord) -> bool {
        node.x >= 0
            && node.y >= 0
            && (node.x as usize) < self.rows
            && (node.y as usize) < self.cols
    }

    fn step_cost(&self, from: GridCoord, to: GridCoord) -> Option<f64> {
        let steepness = block_steepness(self.grid, to, self.scale)?;
        Some(from.manhattan_distance(&to) as f64 + steepness)
    }

    /// Euclidean distance in block space
    fn heuristic(&self, from: GridCoord, goal: GridCoord) -> f64 {
        from.distance(&goal)
    }

    fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}

/// Whether a guide path came from a successful coarse search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuideStatus {
    /// Coarse search succeeded
    Found,
    /// Coarse search failed; the guide is just `[start, goal]`
    Fallback(PathFailure),
}

/// Fine-grid guide points from start to goal
#[derive(Clone, Debug, PartialEq)]
pub struct GuidePath {
    /// Waypoints, always beginning with the start and ending with the goal
    pub points: Vec<GridCoord>,
    pub status: GuideStatus,
}

impl GuidePath {
    fn fallback(start: GridCoord, goal: GridCoord, reason: PathFailure) -> Self {
        Self {
            points: vec![start, goal],
            status: GuideStatus::Fallback(reason),
        }
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self.status, GuideStatus::Fallback(_))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Multi-resolution planner producing guide paths
pub struct HierarchicalPlanner<'a> {
    grid: &'a TerrainGrid,
    config: AStarConfig,
}

impl<'a> HierarchicalPlanner<'a> {
    pub fn new(grid: &'a TerrainGrid, config: AStarConfig) -> Self {
        Self { grid, config }
    }

    pub fn with_defaults(grid: &'a TerrainGrid) -> Self {
        Self::new(grid, AStarConfig::default())
    }

    /// Guide path using a down-scaling ratio (`0.25` = 4x4 cells per block)
    pub fn guide_path_ratio(&self, start: GridCoord, goal: GridCoord, ratio: f64) -> GuidePath {
        match BlockScale::from_ratio(ratio) {
            Ok(scale) => self.guide_path(start, goal, scale),
            Err(e) => {
                debug!("[ScaleStar] FAILED: {}", e);
                GuidePath::fallback(start, goal, PathFailure::InvalidScale)
            }
        }
    }

    /// Guide path at the given block scale
    pub fn guide_path(&self, start: GridCoord, goal: GridCoord, scale: BlockScale) -> GuidePath {
        self.guide_path_with(start, goal, scale, &CancelToken::new())
    }

    /// Guide path at the given block scale, polling `cancel` during the coarse search
    pub fn guide_path_with(
        &self,
        start: GridCoord,
        goal: GridCoord,
        scale: BlockScale,
        cancel: &CancelToken,
    ) -> GuidePath {
        trace!(
            "[ScaleStar] guide_path: start=({},{}) goal=({},{}) stride={:.2}",
            start.x,
            start.y,
            goal.x,
            goal.y,
            scale.stride()
        );

        if !self.grid.contains(start) || !self.grid.contains(goal) {
            debug!("[ScaleStar] FAILED: OutOfBounds - start or goal outside grid");
            return GuidePath::fallback(start, goal, PathFailure::OutOfBounds);
        }

        let space = CoarseSpace::new(self.grid, scale);
        let coarse_start = scale.block_of(start);
        let coarse_goal = scale.block_of(goal);

        let result = AStarPlanner::new(&space, self.config.clone()).find_path_with(
            coarse_start,
            coarse_goal,
            cancel,
        );
        if let Some(reason) = result.failure {
            debug!("[ScaleStar] coarse search failed: {:?}, falling back", reason);
            return GuidePath::fallback(start, goal, reason);
        }

        let mut points = Vec::with_capacity(result.path.len() + 2);
        points.push(start);
        if result.path.len() > 2 {
            for block in &result.path[1..result.path.len() - 1] {
                points.push(self.grid.restore_dot(*block, scale));
            }
        }
        points.push(goal);

        trace!(
            "[ScaleStar] SUCCESS: {} coarse nodes, {} guide points",
            result.path.len(),
            points.len()
        );

        GuidePath {
            points,
            status: GuideStatus::Found,
        }
    }
}
