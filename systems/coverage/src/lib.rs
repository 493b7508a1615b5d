#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Per-turn target coverage scoring with a bucketed spatial index.
//!
//! The arbitrator answers one question: given the fleet's positions for a
//! turn, how many distinct targets does at least one airborne platform
//! cover? Platforms move every turn, so the index is rebuilt on every call;
//! the bucket storage is reused across calls to keep the inner planner loop
//! allocation-free once warm.

mod buckets;

use buckets::BucketIndex;
use skydrift_core::GridPosition;
use thiserror::Error;

/// Failures raised by arbitrator construction or scoring calls.
#[derive(Debug, Error)]
pub enum CoverageError {
    /// The grid dimensions were zero on at least one axis.
    #[error("grid dimensions must be positive (rows={rows}, cols={cols})")]
    EmptyGrid {
        /// Number of rows supplied for the grid.
        rows: u32,
        /// Number of columns supplied for the grid.
        cols: u32,
    },
    /// The arbitrator was built without any targets to score.
    #[error("target set must not be empty")]
    NoTargets,
    /// A target cell lies outside the grid.
    #[error("target {index} at ({row}, {column}) lies outside the {rows}x{cols} grid")]
    TargetOutOfBounds {
        /// Position of the target within the supplied target list.
        index: usize,
        /// Row of the offending target cell.
        row: u32,
        /// Column of the offending target cell.
        column: u32,
        /// Number of rows in the grid.
        rows: u32,
        /// Number of columns in the grid.
        cols: u32,
    },
    /// `turn_score` was called with an empty platform list.
    #[error("turn_score requires at least one platform position")]
    NoPlatforms,
}

/// Toroidal distance between two columns of a grid `cols` wide.
///
/// Rows never wrap, so only the column axis gets this treatment. The result
/// never exceeds `cols / 2`.
#[must_use]
pub fn column_distance(cols: u32, a: u32, b: u32) -> u32 {
    let direct = a.abs_diff(b);
    direct.min(cols - direct)
}

/// Counts targets covered by at least one airborne platform each turn.
///
/// Built once per scenario; [`CoverageArbitrator::turn_score`] is then
/// called once per simulated turn with a snapshot of the fleet. The
/// arbitrator never mutates the snapshot and retains no history between
/// calls — cumulative scoring belongs to the caller.
#[derive(Debug)]
pub struct CoverageArbitrator {
    cols: u32,
    radius_sq: u64,
    targets: Vec<GridPosition>,
    index: BucketIndex,
}

impl CoverageArbitrator {
    /// Creates an arbitrator for the provided grid, radius, and target set.
    ///
    /// Fails fast on a degenerate grid, an empty target set, or a target
    /// outside the grid; a constructed arbitrator is always usable.
    pub fn new(
        rows: u32,
        cols: u32,
        coverage_radius: u32,
        targets: &[GridPosition],
    ) -> Result<Self, CoverageError> {
        if rows == 0 || cols == 0 {
            return Err(CoverageError::EmptyGrid { rows, cols });
        }
        if targets.is_empty() {
            return Err(CoverageError::NoTargets);
        }
        for (index, target) in targets.iter().enumerate() {
            if target.row() >= rows || target.column() >= cols {
                return Err(CoverageError::TargetOutOfBounds {
                    index,
                    row: target.row(),
                    column: target.column(),
                    rows,
                    cols,
                });
            }
        }

        Ok(Self {
            cols,
            radius_sq: u64::from(coverage_radius) * u64::from(coverage_radius),
            targets: targets.to_vec(),
            index: BucketIndex::new(rows, cols, coverage_radius),
        })
    }

    /// Counts the distinct targets covered by the provided fleet snapshot.
    ///
    /// A target counts as covered as soon as one airborne platform passes
    /// the in-range test; coverage is a boolean per target, never a count
    /// of covering platforms, so the result is invariant under any
    /// permutation of `platforms`.
    pub fn turn_score(&mut self, platforms: &[GridPosition]) -> Result<u32, CoverageError> {
        if platforms.is_empty() {
            return Err(CoverageError::NoPlatforms);
        }

        self.index.rebuild(platforms);

        let mut score = 0;
        for target in &self.targets {
            let covered = self
                .index
                .candidates(target.row(), target.column())
                .any(|candidate| {
                    !candidate.is_grounded() && self.in_range(*candidate, *target)
                });
            if covered {
                score += 1;
            }
        }
        Ok(score)
    }

    /// Number of targets the arbitrator scores against.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    fn in_range(&self, platform: GridPosition, target: GridPosition) -> bool {
        let row_gap = u64::from(platform.row().abs_diff(target.row()));
        let column_gap = u64::from(column_distance(self.cols, platform.column(), target.column()));
        row_gap * row_gap + column_gap * column_gap <= self.radius_sq
    }
}
