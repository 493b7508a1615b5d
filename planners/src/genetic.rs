//! Genetic search over whole trajectories.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use skydrift_core::{AltitudeDelta, Trajectory};
use skydrift_system_advection::advance;
use skydrift_system_coverage::CoverageArbitrator;
use skydrift_world::Scenario;

use crate::{PlanError, Planner};

const POPULATION_SIZE: usize = 24;
const GENERATIONS: usize = 40;
const TOURNAMENT_SIZE: usize = 3;
const CROSSOVER_RATE: f64 = 0.8;
const MUTATION_RATE: f64 = 0.01;

/// Fitness penalty for a decision the wind turns into a grid exit.
const OUT_OF_GRID_PENALTY: i64 = 1000;
/// Fitness penalty for a decision that leaves the altitude band.
const ALTITUDE_PENALTY: i64 = 100;

/// Whole-trajectory candidate: one decision per platform per turn.
type Genome = Vec<Vec<AltitudeDelta>>;

/// Planner that evolves a population of complete steering plans.
///
/// Classic generational loop: elitism keeps the best plans verbatim, the
/// rest of each generation comes from tournament-selected parents combined
/// by single-point crossover over the fleet axis and mutated gene by gene.
/// Infeasible genes are not discarded during evolution — they cost fitness
/// penalties instead — and the winning genome is repaired into a feasible
/// plan before it leaves the planner.
#[derive(Debug)]
pub struct Genetic {
    rng: ChaCha8Rng,
}

impl Genetic {
    /// Creates a genetic planner from the provided seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn random_genome(&mut self, scenario: &Scenario) -> Genome {
        (0..scenario.turn_count())
            .map(|_| {
                (0..scenario.platform_count())
                    .map(|_| {
                        *AltitudeDelta::ALL
                            .choose(&mut self.rng)
                            .unwrap_or(&AltitudeDelta::Hold)
                    })
                    .collect()
            })
            .collect()
    }

    fn crossover(&mut self, first: &Genome, second: &Genome, platforms: usize) -> (Genome, Genome) {
        if platforms < 2 || !self.rng.gen_bool(CROSSOVER_RATE) {
            return (first.clone(), second.clone());
        }

        let point = self.rng.gen_range(1..platforms);
        let splice = |left: &Genome, right: &Genome| {
            left.iter()
                .zip(right)
                .map(|(a, b)| {
                    let mut row = a[..point].to_vec();
                    row.extend_from_slice(&b[point..]);
                    row
                })
                .collect()
        };
        (splice(first, second), splice(second, first))
    }

    fn mutate(&mut self, genome: &mut Genome) {
        for row in genome {
            for gene in row {
                if self.rng.gen_bool(MUTATION_RATE) {
                    *gene = *AltitudeDelta::ALL
                        .choose(&mut self.rng)
                        .unwrap_or(&AltitudeDelta::Hold);
                }
            }
        }
    }

    fn tournament_pick(&mut self, fitnesses: &[i64]) -> usize {
        let mut best = self.rng.gen_range(0..fitnesses.len());
        for _ in 1..TOURNAMENT_SIZE {
            let challenger = self.rng.gen_range(0..fitnesses.len());
            if fitnesses[challenger] > fitnesses[best] {
                best = challenger;
            }
        }
        best
    }
}

impl Planner for Genetic {
    fn compute(&mut self, scenario: &Scenario) -> Result<Trajectory, PlanError> {
        let mut arbitrator = CoverageArbitrator::new(
            scenario.rows(),
            scenario.cols(),
            scenario.coverage_radius(),
            scenario.targets(),
        )?;

        let platforms = scenario.platform_count();
        let elite_count = (POPULATION_SIZE / 10).max(1);

        let mut population: Vec<Genome> = (0..POPULATION_SIZE)
            .map(|_| self.random_genome(scenario))
            .collect();

        for _ in 0..GENERATIONS {
            let mut fitnesses = Vec::with_capacity(population.len());
            for genome in &population {
                fitnesses.push(fitness(scenario, &mut arbitrator, genome)?);
            }

            let mut ranking: Vec<usize> = (0..population.len()).collect();
            ranking.sort_by_key(|&index| std::cmp::Reverse(fitnesses[index]));

            let mut next_generation: Vec<Genome> = ranking[..elite_count]
                .iter()
                .map(|&index| population[index].clone())
                .collect();

            while next_generation.len() < POPULATION_SIZE {
                let first = self.tournament_pick(&fitnesses);
                let second = self.tournament_pick(&fitnesses);
                let (mut child_a, mut child_b) =
                    self.crossover(&population[first], &population[second], platforms);
                self.mutate(&mut child_a);
                self.mutate(&mut child_b);
                next_generation.push(child_a);
                if next_generation.len() < POPULATION_SIZE {
                    next_generation.push(child_b);
                }
            }

            population = next_generation;
        }

        let mut champion = 0;
        let mut champion_fitness = i64::MIN;
        for (index, genome) in population.iter().enumerate() {
            let score = fitness(scenario, &mut arbitrator, genome)?;
            if score > champion_fitness {
                champion_fitness = score;
                champion = index;
            }
        }

        Ok(repair(scenario, &population[champion]))
    }
}

/// Penalized replay score used as the selection signal.
///
/// Mirrors the coverage replay, but infeasible genes cost penalties instead
/// of invalidating the genome: an altitude-band exit costs
/// [`ALTITUDE_PENALTY`] and holds the platform, a wind-driven grid exit
/// costs [`OUT_OF_GRID_PENALTY`] and holds the platform for the turn.
fn fitness(
    scenario: &Scenario,
    arbitrator: &mut CoverageArbitrator,
    genome: &Genome,
) -> Result<i64, PlanError> {
    let ceiling = i64::from(scenario.altitude_ceiling());
    let mut positions = vec![scenario.launch(); scenario.platform_count()];
    let mut score = 0i64;

    for row in genome {
        for (platform, &delta) in row.iter().enumerate() {
            let current = positions[platform];
            if current.is_grounded() && delta == AltitudeDelta::Descend {
                continue;
            }

            let altitude = i64::from(current.altitude()) + i64::from(delta.offset());
            if altitude < 1 || altitude > ceiling {
                score -= ALTITUDE_PENALTY;
                continue;
            }

            let outcome = advance(scenario.wind(), current, delta);
            if outcome.is_valid() {
                positions[platform] = outcome.position();
            } else {
                score -= OUT_OF_GRID_PENALTY;
            }
        }
        score += i64::from(arbitrator.turn_score(&positions)?);
    }

    Ok(score)
}

/// Rewrites infeasible genes so the emitted plan replays cleanly.
///
/// Each gene is replaced by the first feasible decision among the gene
/// itself, then hold, climb, descend. A platform with no feasible decision
/// keeps its gene and its cell; the replay scorer treats that as holding in
/// place.
fn repair(scenario: &Scenario, genome: &Genome) -> Trajectory {
    let ceiling = i64::from(scenario.altitude_ceiling());
    let mut positions = vec![scenario.launch(); scenario.platform_count()];
    let mut trajectory = Trajectory::new();

    for row in genome {
        let mut decisions = Vec::with_capacity(row.len());
        for (platform, &gene) in row.iter().enumerate() {
            let current = positions[platform];
            let fallbacks = [
                gene,
                AltitudeDelta::Hold,
                AltitudeDelta::Climb,
                AltitudeDelta::Descend,
            ];

            let mut chosen = gene;
            for candidate in fallbacks {
                let altitude = i64::from(current.altitude()) + i64::from(candidate.offset());
                if altitude < 0 || altitude > ceiling {
                    continue;
                }
                let outcome = advance(scenario.wind(), current, candidate);
                if outcome.is_valid() {
                    positions[platform] = outcome.position();
                    chosen = candidate;
                    break;
                }
            }
            decisions.push(chosen);
        }
        trajectory.push_turn(decisions);
    }

    trajectory
}
