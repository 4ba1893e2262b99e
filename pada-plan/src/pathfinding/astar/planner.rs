//! A* planner implementation.

use crate::core::{CancelToken, GridCoord};
use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use super::space::SearchSpace;
use super::types::{AStarConfig, AStarNode, PathFailure, PathResult};

/// A* pathfinder over any [`SearchSpace`]
pub struct AStarPlanner<'a, S: SearchSpace + ?Sized> {
    space: &'a S,
    config: AStarConfig,
}

impl<'a, S: SearchSpace + ?Sized> AStarPlanner<'a, S> {
    /// Create a new A* planner
    pub fn new(space: &'a S, config: AStarConfig) -> Self {
        Self { space, config }
    }

    /// Create with default configuration
    pub fn with_defaults(space: &'a S) -> Self {
        Self::new(space, AStarConfig::default())
    }

    /// Find a path from start to goal
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> PathResult {
        self.find_path_with(start, goal, &CancelToken::new())
    }

    /// Find a path from start to goal, polling `cancel` once per expansion
    pub fn find_path_with(
        &self,
        start: GridCoord,
        goal: GridCoord,
        cancel: &CancelToken,
    ) -> PathResult {
        trace!(
            "[AStar] find_path: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        // Check bounds
        if !self.space.contains(start) || !self.space.contains(goal) {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside search space");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        let deadline = self.config.deadline.map(|d| Instant::now() + d);

        let mut open_set = BinaryHeap::new();
        let mut closed_set = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();
        let mut g_scores: HashMap<GridCoord, f64> = HashMap::new();

        let h_start = self.space.heuristic(start, goal);
        open_set.push(AStarNode {
            coord: start,
            g_cost: 0.0,
            h_cost: h_start,
            f_cost: h_start,
        });
        g_scores.insert(start, 0.0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            if closed_set.contains(&current.coord) {
                continue;
            }

            if cancel.is_cancelled() {
                debug!("[AStar] FAILED: Cancelled after {} nodes", nodes_expanded);
                return PathResult::failed(PathFailure::Cancelled, nodes_expanded);
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                debug!(
                    "[AStar] FAILED: DeadlineExceeded after {} nodes",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::DeadlineExceeded, nodes_expanded);
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            // Goal reached
            if current.coord == goal {
                return self.reconstruct_path(&came_from, start, goal, current.g_cost, nodes_expanded);
            }

            closed_set.insert(current.coord);

            for neighbor in self.space.neighbors(current.coord) {
                if closed_set.contains(&neighbor) || !self.space.contains(neighbor) {
                    continue;
                }

                let Some(move_cost) = self.space.step_cost(current.coord, neighbor) else {
                    continue;
                };

                let tentative_g = current.g_cost + move_cost;
                let current_g = g_scores.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                if tentative_g < current_g {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative_g);

                    let h = self.space.heuristic(neighbor, goal);
                    open_set.push(AStarNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        h_cost: h,
                        f_cost: tentative_g + h,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Reconstruct the path from the came_from map.
    ///
    /// The walk is bounded by the node count of the space; a longer chain
    /// means the bookkeeping is inconsistent and degrades to no path.
    fn reconstruct_path(
        &self,
        came_from: &HashMap<GridCoord, GridCoord>,
        start: GridCoord,
        goal: GridCoord,
        cost: f64,
        nodes_expanded: usize,
    ) -> PathResult {
        let limit = self.space.cell_count();
        let mut path = vec![goal];
        let mut current = goal;

        while current != start {
            let Some(&prev) = came_from.get(&current) else {
                debug!("[AStar] FAILED: predecessor chain broken at ({},{})", current.x, current.y);
                return PathResult::failed(PathFailure::BrokenPredecessorChain, nodes_expanded);
            };
            if path.len() >= limit {
                debug!("[AStar] FAILED: predecessor chain exceeds {} cells", limit);
                return PathResult::failed(PathFailure::BrokenPredecessorChain, nodes_expanded);
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            path.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            nodes_expanded,
            failure: None,
        }
    }
}
