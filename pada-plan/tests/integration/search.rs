//! End-to-end search properties on small grids.

use pada_plan::pathfinding::path_exists;
use pada_plan::{
    AStarConfig, AStarPlanner, CancelToken, DirectionBlender, GridCoord, GuideStatus,
    HierarchicalPlanner, OBSTACLE, PathFailure, TerrainGrid, find_path,
};

fn assert_continuous(path: &[GridCoord]) {
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(&w[1]), "{:?} -> {:?} is not a step", w[0], w[1]);
    }
}

/// Grid with a few rock bands and uneven heights
fn rocky_grid() -> TerrainGrid {
    let rows = (0..24)
        .map(|x| {
            (0..24)
                .map(|y| {
                    if (x == 8 && y < 18) || (x == 16 && y > 5) {
                        -1.0
                    } else {
                        ((x * 7 + y * 3) % 5) as f64 * 0.1
                    }
                })
                .collect()
        })
        .collect();
    TerrainGrid::from_rows(rows).unwrap()
}

#[test]
fn test_scenario_a_uniform_grid() {
    env_logger::try_init().ok();

    let grid = TerrainGrid::new(5, 5, 0.0);
    let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(4, 4));

    assert!(result.success());
    assert_eq!(result.path.len(), 9);
    assert_continuous(&result.path);
}

#[test]
fn test_scenario_b_single_obstacle() {
    env_logger::try_init().ok();

    let mut grid = TerrainGrid::new(5, 5, 0.0);
    grid.set_value(GridCoord::new(2, 2), OBSTACLE).unwrap();
    let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(4, 4));

    assert_eq!(result.path.len(), 9);
    assert!(!result.path.contains(&GridCoord::new(2, 2)));
    assert_continuous(&result.path);
}

#[test]
fn test_optimal_length_on_uniform_grids() {
    let grid = TerrainGrid::new(12, 9, 0.0);
    for (start, goal) in [
        (GridCoord::new(0, 0), GridCoord::new(11, 8)),
        (GridCoord::new(11, 0), GridCoord::new(0, 8)),
        (GridCoord::new(5, 4), GridCoord::new(5, 4)),
        (GridCoord::new(3, 7), GridCoord::new(9, 1)),
    ] {
        let result = find_path(&grid, start, goal);
        assert_eq!(
            result.path.len(),
            1 + start.manhattan_distance(&goal) as usize,
            "{:?} -> {:?}",
            start,
            goal
        );
    }
}

#[test]
fn test_rocky_grid_path_avoids_obstacles() {
    let grid = rocky_grid();
    let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(23, 0));

    assert!(result.success());
    assert_continuous(&result.path);
    assert!(result.path.iter().all(|c| !grid.is_obstacle(*c)));
    // must pass through the gaps at the band ends
    assert!(result.path.iter().any(|c| c.x == 8 && c.y >= 18));
    assert!(result.path.iter().any(|c| c.x == 16 && c.y <= 5));
}

#[test]
fn test_enclosed_goal_has_no_path() {
    let mut grid = TerrainGrid::new(7, 7, 0.0);
    let goal = GridCoord::new(3, 3);
    for n in goal.neighbors_4() {
        grid.set_obstacle(n).unwrap();
    }

    let result = find_path(&grid, GridCoord::new(0, 0), goal);
    assert!(result.path.is_empty());
    assert_eq!(result.failure, Some(PathFailure::NoPath));
    assert!(!path_exists(&grid, GridCoord::new(0, 0), goal));
}

#[test]
fn test_search_is_reproducible() {
    let grid = rocky_grid();
    let first = find_path(&grid, GridCoord::new(0, 23), GridCoord::new(23, 12));
    for _ in 0..3 {
        let again = find_path(&grid, GridCoord::new(0, 23), GridCoord::new(23, 12));
        assert_eq!(again.path, first.path);
        assert_eq!(again.nodes_expanded, first.nodes_expanded);
    }
}

#[test]
fn test_budgets() {
    let grid = rocky_grid();
    let start = GridCoord::new(0, 0);
    let goal = GridCoord::new(23, 0);

    let capped = AStarPlanner::new(&grid, AStarConfig::default().with_max_iterations(5))
        .find_path(start, goal);
    assert_eq!(capped.failure, Some(PathFailure::MaxIterationsExceeded));
    assert!(capped.path.is_empty());

    let cancel = CancelToken::new();
    cancel.cancel();
    let cancelled = AStarPlanner::with_defaults(&grid).find_path_with(start, goal, &cancel);
    assert_eq!(cancelled.failure, Some(PathFailure::Cancelled));
}

#[test]
fn test_hierarchical_brackets_start_and_goal() {
    env_logger::try_init().ok();

    let grid = rocky_grid();
    let planner = HierarchicalPlanner::with_defaults(&grid);
    let start = GridCoord::new(1, 2);
    let goal = GridCoord::new(22, 3);

    for ratio in [0.1, 0.125, 0.25, 0.5, 1.0, 0.0, -1.0] {
        let guide = planner.guide_path_ratio(start, goal, ratio);
        assert_eq!(guide.points.first(), Some(&start), "ratio {}", ratio);
        assert_eq!(guide.points.last(), Some(&goal), "ratio {}", ratio);
        assert!(guide.points.iter().all(|p| grid.contains(*p)));
    }

    let invalid = planner.guide_path_ratio(start, goal, 0.0);
    assert_eq!(invalid.status, GuideStatus::Fallback(PathFailure::InvalidScale));
    assert_eq!(invalid.points, vec![start, goal]);
}

#[test]
fn test_hierarchical_fallback_on_blocked_goal() {
    let mut grid = TerrainGrid::new(16, 16, 0.0);
    for y in 0..16 {
        for x in 8..10 {
            grid.set_obstacle(GridCoord::new(x, y)).unwrap();
        }
    }
    let start = GridCoord::new(1, 1);
    let goal = GridCoord::new(14, 14);

    let guide = HierarchicalPlanner::with_defaults(&grid).guide_path_ratio(start, goal, 0.25);
    assert!(guide.is_fallback());
    assert_eq!(guide.points, vec![start, goal]);
}

#[test]
fn test_blended_lookahead_follows_guide() {
    let grid = TerrainGrid::new(40, 40, 0.0);
    let start = GridCoord::new(2, 2);
    let goal = GridCoord::new(37, 2);
    let guide = HierarchicalPlanner::with_defaults(&grid).guide_path_ratio(start, goal, 0.125);
    assert_eq!(guide.status, GuideStatus::Found);

    let target = DirectionBlender::default().blend_coords(&guide.points[1..]);
    // straight corridor: blended point stays on the column and ahead of start
    assert!(target.x > start.x as f64);
    assert!((target.y - 4.0).abs() < 2.5);
}
