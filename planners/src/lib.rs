#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Trajectory-search strategies built on the advection and coverage cores.
//!
//! Every strategy implements [`Planner`]: consume an immutable scenario,
//! produce a full per-turn, per-platform altitude plan. Strategies own their
//! retry policy when a move is rejected; the cores stay pure and pass no
//! judgement on how the search explores.

mod evaluate;
mod genetic;
mod greedy;
mod random;

pub use evaluate::trajectory_score;
pub use genetic::Genetic;
pub use greedy::Greedy;
pub use random::RandomDrift;

use skydrift_core::{AltitudeDelta, Trajectory};
use skydrift_system_coverage::CoverageError;
use skydrift_world::Scenario;
use thiserror::Error;

/// Names accepted by [`planner_by_name`], in registry order.
pub const PLANNER_NAMES: [&str; 3] = ["random", "greedy", "genetic"];

/// Failures raised while planning or scoring a trajectory.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The requested planner name is not registered.
    #[error("unknown planner '{name}'; known planners: random, greedy, genetic")]
    UnknownPlanner {
        /// Name that failed to resolve.
        name: String,
    },
    /// Every altitude decision for a platform would leave the grid.
    #[error("no viable altitude decision for platform {platform} on turn {turn}")]
    Stuck {
        /// Index of the platform that cannot move.
        platform: usize,
        /// Zero-based turn on which the platform got stuck.
        turn: usize,
    },
    /// A trajectory row does not match the scenario's platform count.
    #[error("turn {turn} holds {found} decisions but the fleet has {expected} platforms")]
    FleetMismatch {
        /// Zero-based turn with the mismatched row.
        turn: usize,
        /// Number of platforms the scenario declares.
        expected: usize,
        /// Number of decisions the row actually holds.
        found: usize,
    },
    /// The coverage arbitrator rejected its configuration or a call.
    #[error(transparent)]
    Coverage(#[from] CoverageError),
}

/// A trajectory-search strategy.
pub trait Planner {
    /// Computes a full steering plan for the scenario's fleet.
    fn compute(&mut self, scenario: &Scenario) -> Result<Trajectory, PlanError>;
}

/// Resolves a planner by registry name, seeding its random state.
///
/// Deterministic planners ignore the seed.
pub fn planner_by_name(name: &str, seed: u64) -> Result<Box<dyn Planner>, PlanError> {
    match name {
        "random" => Ok(Box::new(RandomDrift::new(seed))),
        "greedy" => Ok(Box::new(Greedy::new())),
        "genetic" => Ok(Box::new(Genetic::new(seed))),
        _ => Err(PlanError::UnknownPlanner {
            name: name.to_owned(),
        }),
    }
}

/// Altitude decisions that keep a platform airborne within the ceiling.
pub(crate) fn flight_deltas(altitude: u32, ceiling: u32) -> impl Iterator<Item = AltitudeDelta> {
    AltitudeDelta::ALL.into_iter().filter(move |delta| {
        let next = i64::from(altitude) + i64::from(delta.offset());
        next >= 1 && next <= i64::from(ceiling)
    })
}
