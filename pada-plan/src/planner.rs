//! Single-step footstep planning.
//!
//! [`StepPlanner`] chains the building blocks into one decision per step:
//!
//! 1. Coarse guide path from the support foot to the goal.
//! 2. Blend the next few guide points into one look-ahead point.
//! 3. Clamp the look-ahead to one stride and cover it with the sole.
//! 4. Let the stabilizer slide the sole onto flatter ground.
//! 5. Accept if the sole is passable, the stand angle is small enough and
//!    the gait limits hold.
//!
//! When the direct target is rejected, the stride x separation sweep of
//! [`ideal_walk`] is tried nearest-to-look-ahead first.

use log::{debug, trace};

use crate::config::{ConfigLoadError, PlannerConfig};
use crate::core::{CancelToken, GridCoord, GridPoint};
use crate::gait::{
    BipedState, FootPose, FootShape, GaitConstraintChecker, GaitLimits, Side, direct_target,
    ideal_walk,
};
use crate::grid::{BlockScale, TerrainGrid};
use crate::pathfinding::{
    AStarConfig, DirectionBlender, GuidePath, GuideStatus, HierarchicalPlanner, PathFailure,
};
use crate::terrain::{FootholdStabilizer, Footprint, SlideOutcome};

/// Stand angle slack when comparing against the limit
const ANGLE_TOLERANCE: f64 = 1e-9;

/// An accepted swing-foot placement
#[derive(Clone, Debug, PartialEq)]
pub struct StepDecision {
    /// Foot that moves
    pub side: Side,
    /// Where it lands
    pub pose: FootPose,
    /// Cells under the sole at `pose`
    pub footprint: Footprint,
    /// What the stabilizer did to the raw target
    pub slide: SlideOutcome,
    pub stand_angle: f64,
    /// Blended look-ahead point the step aimed at
    pub lookahead: GridPoint,
    pub guide: GuidePath,
}

/// Outcome of planning one step
#[derive(Clone, Debug, PartialEq)]
pub enum StepPlan {
    Step(StepDecision),
    /// Support foot is within the arrival tolerance of the goal
    Arrived,
    /// No admissible foothold
    Blocked,
}

/// Plans one footstep at a time over a terrain grid
pub struct StepPlanner<'a> {
    grid: &'a TerrainGrid,
    checker: GaitConstraintChecker,
    blender: DirectionBlender,
    astar: AStarConfig,
    scale: BlockScale,
    lookahead: usize,
    arrival_tolerance: f64,
}

impl<'a> StepPlanner<'a> {
    /// Build a planner from a validated configuration
    pub fn new(grid: &'a TerrainGrid, config: &PlannerConfig) -> Result<Self, ConfigLoadError> {
        config.validate()?;
        let blender = config
            .direction_blender()
            .map_err(|e| ConfigLoadError::Invalid(e.to_string()))?;
        Ok(Self {
            grid,
            checker: GaitConstraintChecker::new(config.to_gait_limits(), config.foot_shape()),
            blender,
            astar: config.to_astar_config(),
            scale: config.block_scale()?,
            lookahead: config.blending.lookahead,
            arrival_tolerance: config.search.arrival_tolerance,
        })
    }

    pub fn with_defaults(grid: &'a TerrainGrid) -> Result<Self, ConfigLoadError> {
        Self::new(grid, &PlannerConfig::default())
    }

    #[inline]
    pub fn limits(&self) -> &GaitLimits {
        self.checker.limits()
    }

    #[inline]
    pub fn shape(&self) -> &FootShape {
        self.checker.shape()
    }

    #[inline]
    pub fn checker(&self) -> &GaitConstraintChecker {
        &self.checker
    }

    /// Plan the next swing-foot placement toward `goal`
    pub fn plan_step(&self, state: &BipedState, goal: GridCoord) -> StepPlan {
        self.plan_step_with(state, goal, &CancelToken::new())
    }

    /// Plan the next step, aborting the guide search when `cancel` fires
    pub fn plan_step_with(
        &self,
        state: &BipedState,
        goal: GridCoord,
        cancel: &CancelToken,
    ) -> StepPlan {
        let support = state.support_foot();
        trace!(
            "[Planner] plan_step: {:?} swings, support=({:.1},{:.1}) goal=({},{})",
            state.swing_side(),
            support.position.x,
            support.position.y,
            goal.x,
            goal.y
        );

        if support.position.distance(&goal.to_point()) <= self.arrival_tolerance {
            trace!("[Planner] arrived");
            return StepPlan::Arrived;
        }

        let start = support.position.round();
        if !self.grid.contains(start) || !self.grid.contains(goal) {
            debug!("[Planner] FAILED: support or goal outside grid");
            return StepPlan::Blocked;
        }

        let guide = HierarchicalPlanner::new(self.grid, self.astar.clone())
            .guide_path_with(start, goal, self.scale, cancel);
        if guide.status == GuideStatus::Fallback(PathFailure::Cancelled) {
            debug!("[Planner] FAILED: cancelled");
            return StepPlan::Blocked;
        }

        let ahead = &guide.points[1..];
        let lookahead = self.blender.blend_coords(&ahead[..ahead.len().min(self.lookahead)]);
        let heading = if support.position.distance(&lookahead) > f64::EPSILON {
            support.position.angle_to(&lookahead)
        } else {
            support.heading
        };

        let direct = direct_target(support.position, lookahead, self.limits().max_stride);
        if let Some(decision) = self.evaluate(state, direct.to_point(), heading, lookahead, &guide) {
            trace!("[Planner] direct target accepted");
            return StepPlan::Step(decision);
        }

        let swing = state.swing_foot().position;
        let mut candidates: Vec<(f64, GridCoord)> =
            ideal_walk(state, self.limits(), self.grid.shape())
                .into_iter()
                .map(|offset| {
                    let target = swing + offset.to_point();
                    (target.distance(&lookahead), offset)
                })
                .collect();
        candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        trace!("[Planner] direct target rejected, {} candidates", candidates.len());

        for (_, offset) in candidates {
            let target = swing + offset.to_point();
            if let Some(decision) = self.evaluate(state, target, heading, lookahead, &guide) {
                return StepPlan::Step(decision);
            }
        }

        debug!("[Planner] FAILED: no admissible foothold");
        StepPlan::Blocked
    }

    /// Cover, stabilize and check one candidate target
    fn evaluate(
        &self,
        state: &BipedState,
        target: GridPoint,
        heading: f64,
        lookahead: GridPoint,
        guide: &GuidePath,
    ) -> Option<StepDecision> {
        let stabilizer = FootholdStabilizer::new(self.grid);
        let mut footprint = self.shape().cover(target, heading);
        let slide = stabilizer.slide(&mut footprint);
        let position = match slide {
            SlideOutcome::Modified { offset, .. } => target + offset.to_point(),
            _ => target,
        };

        if footprint.cells().iter().any(|c| !self.grid.edge_allowed(*c)) {
            return None;
        }
        let stand_angle = stabilizer.stand_angle(&footprint)?;
        if stand_angle > self.limits().max_stand_angle + ANGLE_TOLERANCE {
            return None;
        }

        let pose = FootPose::new(position, heading);
        if !self.checker.check(state.support_foot(), &pose).is_admissible() {
            return None;
        }

        Some(StepDecision {
            side: state.swing_side(),
            pose,
            footprint,
            slide,
            stand_angle,
            lookahead,
            guide: guide.clone(),
        })
    }
}
