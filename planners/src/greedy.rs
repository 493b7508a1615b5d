//! Greedy one-step-lookahead planner.

use skydrift_core::{AltitudeDelta, GridPosition, Trajectory};
use skydrift_system_advection::advance;
use skydrift_system_coverage::CoverageArbitrator;
use skydrift_world::Scenario;

use crate::{PlanError, Planner};

/// Decisions tried per platform, most promising first: climbing explores new
/// wind layers and is the only way off the launch pad, so ties fall to it.
const PREFERENCE: [AltitudeDelta; 3] = [
    AltitudeDelta::Climb,
    AltitudeDelta::Hold,
    AltitudeDelta::Descend,
];

/// Planner that picks, platform by platform, the altitude decision that
/// maximizes the arbitrator's score for the turn being built.
///
/// Platforms already steered this turn are evaluated at their new cells,
/// the rest at their pre-move cells, so the fleet's choices compound within
/// a turn. Fully deterministic: ties break on the fixed decision order.
#[derive(Debug, Default)]
pub struct Greedy;

impl Greedy {
    /// Creates the greedy planner.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Planner for Greedy {
    fn compute(&mut self, scenario: &Scenario) -> Result<Trajectory, PlanError> {
        let mut arbitrator = CoverageArbitrator::new(
            scenario.rows(),
            scenario.cols(),
            scenario.coverage_radius(),
            scenario.targets(),
        )?;

        let mut positions = vec![scenario.launch(); scenario.platform_count()];
        let mut trajectory = Trajectory::new();

        for turn in 0..scenario.turn_count() {
            let mut decisions = Vec::with_capacity(positions.len());
            for platform in 0..positions.len() {
                let (delta, next) =
                    best_decision(scenario, &mut arbitrator, &mut positions, platform)?
                        .ok_or(PlanError::Stuck { platform, turn })?;
                positions[platform] = next;
                decisions.push(delta);
            }
            trajectory.push_turn(decisions);
        }

        Ok(trajectory)
    }
}

fn best_decision(
    scenario: &Scenario,
    arbitrator: &mut CoverageArbitrator,
    positions: &mut [GridPosition],
    platform: usize,
) -> Result<Option<(AltitudeDelta, GridPosition)>, PlanError> {
    let ceiling = i64::from(scenario.altitude_ceiling());
    let current = positions[platform];
    let mut best: Option<(u32, AltitudeDelta, GridPosition)> = None;

    for delta in PREFERENCE {
        let altitude = i64::from(current.altitude()) + i64::from(delta.offset());
        if altitude < 0 || altitude > ceiling {
            continue;
        }

        let outcome = advance(scenario.wind(), current, delta);
        if !outcome.is_valid() {
            continue;
        }

        positions[platform] = outcome.position();
        let score = arbitrator.turn_score(positions);
        positions[platform] = current;
        let score = score?;

        let better = match best {
            Some((best_score, _, _)) => score > best_score,
            None => true,
        };
        if better {
            best = Some((score, delta, outcome.position()));
        }
    }

    Ok(best.map(|(_, delta, next)| (delta, next)))
}
