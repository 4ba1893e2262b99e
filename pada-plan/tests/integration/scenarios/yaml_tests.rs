//! YAML-based scenario tests
//!
//! Every committed step is re-checked against the planner's own limits:
//! the sole stays on passable cells, the stand angle stays under the
//! limit, the gait verdict holds and the feet alternate.

use pada_plan::{GaitConstraintChecker, Side, TerrainGrid};

use crate::WalkOutcome;
use crate::harness::WalkResult;
use crate::yaml_config::Expectation;
use crate::yaml_runner::{self, ScenarioRun};

fn run_single_scenario(name: &str) -> ScenarioRun {
    env_logger::try_init().ok();

    let scenario_path = format!(
        "{}/tests/integration/scenarios/{}.yaml",
        env!("CARGO_MANIFEST_DIR"),
        name
    );

    println!("\n--- Running scenario: {} ---", name);

    match yaml_runner::run_scenario(&scenario_path) {
        Ok(run) => {
            println!("{}", run.result.summary());
            check_steps(&run.grid, &run.result, &run.config.planner);
            check_expectation(&run);
            run
        }
        Err(e) => panic!("Scenario {} failed to load: {}", name, e),
    }
}

fn check_steps(grid: &TerrainGrid, result: &WalkResult, config: &pada_plan::PlannerConfig) {
    let checker = GaitConstraintChecker::new(config.to_gait_limits(), config.foot_shape());
    let max_angle = config.gait.max_stand_angle;

    let mut side = Side::Left;
    for (i, record) in result.steps.iter().enumerate() {
        let step = &record.decision;
        assert_eq!(step.side, side, "step {} moved the wrong foot", i);
        side = side.other();

        assert!(
            checker.check(&record.support, &step.pose).is_admissible(),
            "step {} violates gait limits: {:?}",
            i,
            checker.check(&record.support, &step.pose)
        );
        assert!(
            step.footprint.cells().iter().all(|c| grid.edge_allowed(*c)),
            "step {} touches an obstacle",
            i
        );
        assert!(step.stand_angle <= max_angle + 1e-9, "step {} too steep", i);
        assert_eq!(step.guide.points.first(), Some(&record.support.position.round()));
    }
}

fn check_expectation(run: &ScenarioRun) {
    let expected = match run.config.expect {
        Expectation::Arrived => WalkOutcome::Arrived,
        Expectation::Blocked => WalkOutcome::Blocked,
    };
    assert_eq!(
        run.result.outcome, expected,
        "scenario {}: {}",
        run.config.name,
        run.result.summary()
    );
}

#[test]
fn test_flat_walk() {
    let run = run_single_scenario("flat_walk");
    let steps = &run.result.steps;
    assert!(steps.len() >= 5);
    // every step lands further down the rows than its support foot
    assert!(
        steps
            .iter()
            .all(|r| r.decision.pose.position.x > r.support.position.x)
    );
}

#[test]
fn test_pillar_detour() {
    let run = run_single_scenario("pillar_detour");
    let guide = &run.result.steps[0].decision.guide;
    assert!(!guide.is_fallback());
    // the guide swings around the open side of the block
    assert!(guide.points.iter().any(|p| p.y >= 14));
}

#[test]
fn test_gentle_ramp() {
    let run = run_single_scenario("gentle_ramp");
    let expected = 0.2f64.atan();
    for record in &run.result.steps {
        assert!((record.decision.stand_angle - expected).abs() < 1e-6);
    }
}

#[test]
fn test_steep_ramp() {
    let run = run_single_scenario("steep_ramp");
    assert!(run.result.steps.is_empty());
}

#[test]
fn test_walled_in() {
    let run = run_single_scenario("walled_in");
    assert!(run.result.steps.is_empty());
}

#[test]
fn test_yaml_scenarios() {
    env_logger::try_init().ok();

    let scenarios_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/integration/scenarios");
    let mut names: Vec<String> = std::fs::read_dir(scenarios_dir)
        .expect("scenario directory")
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "yaml" || e == "yml"))
        .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
        .collect();
    names.sort();

    assert!(names.len() >= 5);
    for name in names {
        run_single_scenario(&name);
    }
}
