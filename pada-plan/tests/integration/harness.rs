//! Multi-step walking harness.
//!
//! Drives a [`StepPlanner`] from an initial stance until it arrives, gets
//! blocked or runs out of steps, recording every committed step together
//! with the support foot it was planned against.

use pada_plan::{
    BipedState, ConfigLoadError, FootPose, GridCoord, PlannerConfig, StepDecision, StepPlan,
    StepPlanner, TerrainGrid,
};

/// How a walk ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    Arrived,
    Blocked,
    StepLimit,
}

/// One committed step
#[derive(Clone, Debug)]
pub struct StepRecord {
    /// Support foot at planning time
    pub support: FootPose,
    pub decision: StepDecision,
}

/// Full walk result
#[derive(Clone, Debug)]
pub struct WalkResult {
    pub outcome: WalkOutcome,
    pub steps: Vec<StepRecord>,
    pub final_state: BipedState,
}

impl WalkResult {
    /// One-line summary for test output
    pub fn summary(&self) -> String {
        let support = self.final_state.support_foot().position;
        format!(
            "{:?} after {} steps, support at ({:.1}, {:.1})",
            self.outcome,
            self.steps.len(),
            support.x,
            support.y
        )
    }
}

/// Runs a step planner in a loop
pub struct WalkHarness<'a> {
    planner: StepPlanner<'a>,
}

impl<'a> WalkHarness<'a> {
    pub fn new(grid: &'a TerrainGrid, config: &PlannerConfig) -> Result<Self, ConfigLoadError> {
        Ok(Self {
            planner: StepPlanner::new(grid, config)?,
        })
    }

    pub fn planner(&self) -> &StepPlanner<'a> {
        &self.planner
    }

    /// Walk toward `goal` for at most `max_steps` committed steps
    pub fn run(&self, mut state: BipedState, goal: GridCoord, max_steps: usize) -> WalkResult {
        let mut steps = Vec::new();

        loop {
            let outcome = match self.planner.plan_step(&state, goal) {
                StepPlan::Arrived => WalkOutcome::Arrived,
                StepPlan::Blocked => WalkOutcome::Blocked,
                StepPlan::Step(_) if steps.len() >= max_steps => WalkOutcome::StepLimit,
                StepPlan::Step(decision) => {
                    let support = *state.support_foot();
                    state.commit_step(decision.pose);
                    steps.push(StepRecord { support, decision });
                    continue;
                }
            };

            return WalkResult {
                outcome,
                steps,
                final_state: state,
            };
        }
    }
}
