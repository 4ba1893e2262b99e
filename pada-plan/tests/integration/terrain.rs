//! Terrain analysis through the public API.

use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_2;

use pada_plan::{
    BlockScale, FlatnessEvaluator, FootShape, FootholdStabilizer, GridCoord, GridPoint, Plane,
    PlaneFitError, PlaneFitter, Point3, SlideOutcome, TerrainGrid,
};

#[test]
fn test_flatness_edge_cases_and_order() {
    assert_eq!(FlatnessEvaluator::evaluate(&[]), f64::INFINITY);
    assert_eq!(FlatnessEvaluator::evaluate(&[42.0]), 0.0);
    assert_eq!(FlatnessEvaluator::evaluate(&[-3.5]), 0.0);

    let heights = [0.3, 1.7, 0.0, 2.2, 0.9, 0.9];
    let mut reversed = heights;
    reversed.reverse();
    let mut sorted = heights;
    sorted.sort_by(f64::total_cmp);

    let score = FlatnessEvaluator::evaluate(&heights);
    assert_relative_eq!(FlatnessEvaluator::evaluate(&reversed), score, epsilon = 1e-12);
    assert_relative_eq!(FlatnessEvaluator::evaluate(&sorted), score, epsilon = 1e-12);
}

#[test]
fn test_collinear_plane_is_left_untouched() {
    let mut plane = Plane::through(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
    )
    .unwrap();
    let before = plane;

    let defined = plane.define(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(1.0, 1.0, 1.0),
        &Point3::new(2.0, 2.0, 2.0),
    );
    assert!(!defined);
    assert_eq!(plane, before);
    assert!(plane.a.is_finite() && plane.b.is_finite() && plane.c.is_finite());
}

#[test]
fn test_normal_angle_extremes() {
    let level = Plane {
        a: 0.0,
        b: 0.0,
        c: 1.0,
        d: 0.0,
    };
    assert_eq!(level.normal_angle(), 0.0);

    let wall = Plane {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
    };
    assert_relative_eq!(wall.normal_angle(), FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn test_fitter_rejects_bad_areas() {
    let mut grid = TerrainGrid::new(6, 6, 0.0);
    grid.set_obstacle(GridCoord::new(2, 2)).unwrap();
    let fitter = PlaneFitter::new(&grid);

    let outside = [GridCoord::new(0, 0), GridCoord::new(0, 1), GridCoord::new(9, 9)];
    assert_eq!(
        fitter.fit(&outside),
        Err(PlaneFitError::OutOfBounds(GridCoord::new(9, 9)))
    );

    let blocked = [GridCoord::new(1, 1), GridCoord::new(1, 2), GridCoord::new(2, 2)];
    assert_eq!(
        fitter.fit(&blocked),
        Err(PlaneFitError::ObstacleInArea(GridCoord::new(2, 2)))
    );

    let line = [GridCoord::new(0, 0), GridCoord::new(0, 1), GridCoord::new(0, 2)];
    assert_eq!(fitter.fit(&line), Err(PlaneFitError::Collinear));
}

#[test]
fn test_sole_on_ramp_reports_incline() {
    let rows = (0..20).map(|x| vec![0.5 * x as f64; 20]).collect();
    let grid = TerrainGrid::from_rows(rows).unwrap();
    let footprint = FootShape::default().cover(GridPoint::new(10.0, 10.0), 0.3);

    let angle = FootholdStabilizer::new(&grid).stand_angle(&footprint).unwrap();
    assert_relative_eq!(angle, 0.5f64.atan(), epsilon = 1e-9);
}

#[test]
fn test_stabilizer_moves_sole_off_a_ridge() {
    // level plateau of rows 0..=9, downhill beyond
    let rows = (0..20)
        .map(|x| vec![if x <= 9 { 10.0 } else { 10.0 - (x - 9) as f64 }; 20])
        .collect();
    let grid = TerrainGrid::from_rows(rows).unwrap();
    let stabilizer = FootholdStabilizer::new(&grid);

    let mut footprint = FootShape::new(4.0, 2.0).cover(GridPoint::new(11.0, 10.0), 0.0);
    let before = stabilizer.stand_angle(&footprint).unwrap();
    let outcome = stabilizer.slide(&mut footprint);

    let SlideOutcome::Modified {
        offset,
        stand_angle,
    } = outcome
    else {
        panic!("expected a slide, got {:?}", outcome);
    };
    // back up onto the plateau
    assert_eq!(offset, GridCoord::new(-3, 0));
    assert!(stand_angle < before);
    assert_relative_eq!(stabilizer.stand_angle(&footprint).unwrap(), stand_angle);
}

#[test]
fn test_down_sampling_shapes() {
    let grid = TerrainGrid::new(10, 7, 1.0);
    let scale = BlockScale::new(4.0).unwrap();

    let coarse = grid.scale_graph(scale);
    assert_eq!(coarse.shape(), (3, 2));
    assert!(coarse.cells().all(|(_, v)| v == 0.0));

    let variance = grid.scale_graph_variance(scale);
    assert_eq!(variance.shape(), (3, 2));
    assert!(variance.cells().all(|(_, v)| v == 0.0));
}
