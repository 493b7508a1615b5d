//! Random-walk planner with bounded in-grid retry.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skydrift_core::{AltitudeDelta, GridPosition, Trajectory};
use skydrift_system_advection::advance;
use skydrift_world::Scenario;

use crate::{flight_deltas, PlanError, Planner};

/// Random decisions retried this many times before a deterministic sweep.
const RETRY_BUDGET: usize = 100;

/// Planner that steers every platform with uniformly random viable decisions.
///
/// Cheap, seed-reproducible baseline: each platform draws decisions that
/// keep it airborne, retrying while the wind would push it off the grid,
/// and lands or idles only when no flight decision is viable.
#[derive(Debug)]
pub struct RandomDrift {
    rng: ChaCha8Rng,
}

impl RandomDrift {
    /// Creates a random planner from the provided seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn steer(
        &mut self,
        scenario: &Scenario,
        position: GridPosition,
        turn: usize,
        platform: usize,
    ) -> Result<(AltitudeDelta, GridPosition), PlanError> {
        let candidates: Vec<AltitudeDelta> =
            flight_deltas(position.altitude(), scenario.altitude_ceiling()).collect();

        if !candidates.is_empty() {
            for _ in 0..RETRY_BUDGET {
                let delta = candidates[self.rng.gen_range(0..candidates.len())];
                let outcome = advance(scenario.wind(), position, delta);
                if outcome.is_valid() {
                    return Ok((delta, outcome.position()));
                }
            }
            for &delta in &candidates {
                let outcome = advance(scenario.wind(), position, delta);
                if outcome.is_valid() {
                    return Ok((delta, outcome.position()));
                }
            }
        }

        // No flight decision keeps the platform in the grid; land it when a
        // single descent reaches the ground, or idle it if already there.
        if position.altitude() == 1 {
            return Ok((AltitudeDelta::Descend, position.with_altitude(0)));
        }
        if position.is_grounded() {
            return Ok((AltitudeDelta::Hold, position));
        }

        Err(PlanError::Stuck { platform, turn })
    }
}

impl Planner for RandomDrift {
    fn compute(&mut self, scenario: &Scenario) -> Result<Trajectory, PlanError> {
        let mut positions = vec![scenario.launch(); scenario.platform_count()];
        let mut trajectory = Trajectory::new();

        for turn in 0..scenario.turn_count() {
            let mut decisions = Vec::with_capacity(positions.len());
            for platform in 0..positions.len() {
                let (delta, next) = self.steer(scenario, positions[platform], turn, platform)?;
                positions[platform] = next;
                decisions.push(delta);
            }
            trajectory.push_turn(decisions);
        }

        Ok(trajectory)
    }
}
