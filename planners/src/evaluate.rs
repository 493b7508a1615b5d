//! Replay scoring for complete trajectories.

use skydrift_core::Trajectory;
use skydrift_system_advection::advance;
use skydrift_system_coverage::CoverageArbitrator;
use skydrift_world::Scenario;

use crate::PlanError;

/// Replays a trajectory from the launch cell and sums the per-turn scores.
///
/// Every planner and the CLI verify their output through this one path so a
/// plan is always worth what the arbitrator says it is. A rejected move
/// leaves its platform in place for the turn rather than failing the whole
/// replay, which keeps arbitrary planner output scoreable.
pub fn trajectory_score(scenario: &Scenario, trajectory: &Trajectory) -> Result<u32, PlanError> {
    let mut arbitrator = CoverageArbitrator::new(
        scenario.rows(),
        scenario.cols(),
        scenario.coverage_radius(),
        scenario.targets(),
    )?;

    let mut positions = vec![scenario.launch(); scenario.platform_count()];
    let mut total = 0;

    for (turn, row) in trajectory.turns().iter().enumerate() {
        if row.len() != positions.len() {
            return Err(PlanError::FleetMismatch {
                turn,
                expected: positions.len(),
                found: row.len(),
            });
        }

        for (platform, &delta) in row.iter().enumerate() {
            let outcome = advance(scenario.wind(), positions[platform], delta);
            if outcome.is_valid() {
                positions[platform] = outcome.position();
            }
        }

        total += arbitrator.turn_score(&positions)?;
    }

    Ok(total)
}
