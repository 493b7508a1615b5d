use skydrift_core::AltitudeDelta;
use skydrift_planners::{
    planner_by_name, trajectory_score, Genetic, Greedy, Planner, RandomDrift,
};
use skydrift_system_advection::advance;
use skydrift_world::Scenario;

/// 5x5 grid, one calm flight level, radius 1, two platforms, four turns,
/// launch on the central target.
const CALM_SCENARIO: &str = "\
5 5 1
2 1 2 4
2 2
2 2
0 0
0 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0 0 0
";

/// 4x4 grid, two flight levels with opposing vertical winds, radius 1, one
/// platform, three turns.
const WINDY_SCENARIO: &str = "\
4 4 2
1 1 1 3
2 1
1 1
1 0 1 0 1 0 1 0
1 0 1 0 1 0 1 0
1 0 1 0 1 0 1 0
1 0 1 0 1 0 1 0
-1 0 -1 0 -1 0 -1 0
-1 0 -1 0 -1 0 -1 0
-1 0 -1 0 -1 0 -1 0
-1 0 -1 0 -1 0 -1 0
";

fn calm_scenario() -> Scenario {
    Scenario::parse(CALM_SCENARIO).expect("calm scenario parses")
}

fn windy_scenario() -> Scenario {
    Scenario::parse(WINDY_SCENARIO).expect("windy scenario parses")
}

fn assert_shape(scenario: &Scenario, trajectory: &skydrift_core::Trajectory) {
    assert_eq!(trajectory.turn_count(), scenario.turn_count());
    for row in trajectory.turns() {
        assert_eq!(row.len(), scenario.platform_count());
    }
}

#[test]
fn greedy_climbs_off_the_pad_and_holds_coverage() {
    let scenario = calm_scenario();
    let mut planner = Greedy::new();
    let trajectory = planner.compute(&scenario).expect("greedy plans");
    assert_shape(&scenario, &trajectory);

    assert_eq!(trajectory.turns()[0][0], AltitudeDelta::Climb);

    // The launch cell is itself a target; one airborne platform covers it
    // on every one of the four turns.
    let score = trajectory_score(&scenario, &trajectory).expect("replay scores");
    assert_eq!(score, 4);
}

#[test]
fn random_planner_is_reproducible_per_seed() {
    let scenario = windy_scenario();

    let first = RandomDrift::new(42)
        .compute(&scenario)
        .expect("random plans");
    let second = RandomDrift::new(42)
        .compute(&scenario)
        .expect("random plans");
    assert_eq!(first, second);
    assert_shape(&scenario, &first);
}

#[test]
fn random_planner_only_emits_viable_moves() {
    let scenario = windy_scenario();
    let trajectory = RandomDrift::new(7)
        .compute(&scenario)
        .expect("random plans");

    let mut positions = vec![scenario.launch(); scenario.platform_count()];
    for row in trajectory.turns() {
        for (platform, &delta) in row.iter().enumerate() {
            let outcome = advance(scenario.wind(), positions[platform], delta);
            assert!(outcome.is_valid(), "planner emitted a rejected move");
            positions[platform] = outcome.position();
        }
    }
}

#[test]
fn genetic_planner_is_reproducible_per_seed() {
    let scenario = calm_scenario();

    let first = Genetic::new(11).compute(&scenario).expect("genetic plans");
    let second = Genetic::new(11).compute(&scenario).expect("genetic plans");
    assert_eq!(first, second);
    assert_shape(&scenario, &first);
}

#[test]
fn genetic_output_replays_without_rejections() {
    let scenario = windy_scenario();
    let trajectory = Genetic::new(3).compute(&scenario).expect("genetic plans");
    assert_shape(&scenario, &trajectory);

    let mut positions = vec![scenario.launch(); scenario.platform_count()];
    for row in trajectory.turns() {
        for (platform, &delta) in row.iter().enumerate() {
            let outcome = advance(scenario.wind(), positions[platform], delta);
            assert!(outcome.is_valid(), "repair left an infeasible gene");
            positions[platform] = outcome.position();
        }
    }
}

#[test]
fn genetic_finds_coverage_on_the_calm_scenario() {
    let scenario = calm_scenario();
    let genetic = Genetic::new(5).compute(&scenario).expect("genetic plans");
    let score = trajectory_score(&scenario, &genetic).expect("replay scores");

    // The launch cell is a target and the air is calm; any run that never
    // lifts a platform over it has failed to search at all.
    assert!(score >= 1, "evolved plan never covered a target");
}

#[test]
fn registry_planners_solve_the_calm_scenario() {
    let scenario = calm_scenario();
    for name in skydrift_planners::PLANNER_NAMES {
        let mut planner = planner_by_name(name, 9).expect("registered planner");
        let trajectory = planner.compute(&scenario).expect("planner computes");
        assert_shape(&scenario, &trajectory);
        let _score = trajectory_score(&scenario, &trajectory).expect("replay scores");
    }
}

#[test]
fn replay_rejects_mismatched_fleet_rows() {
    let scenario = calm_scenario();
    let trajectory =
        skydrift_core::Trajectory::from_turns(vec![vec![AltitudeDelta::Climb]]);
    let result = trajectory_score(&scenario, &trajectory);
    assert!(matches!(
        result,
        Err(skydrift_planners::PlanError::FleetMismatch {
            turn: 0,
            expected: 2,
            found: 1
        })
    ));
}
