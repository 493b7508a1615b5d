#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable scenario description for the skydrift toolkit.
//!
//! A [`Scenario`] owns everything a mission needs to be simulated: grid
//! dimensions, the per-altitude wind field, the target set, the launch cell,
//! and the mission counts. Construction validates the whole description up
//! front; a scenario that exists is always internally consistent, so the
//! systems built on top of it never re-validate.

mod parser;

use skydrift_core::{GridPosition, WindVector};
use thiserror::Error;

/// Failures raised while constructing or parsing a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The grid dimensions were zero on at least one axis.
    #[error("grid dimensions must be positive (rows={rows}, cols={cols})")]
    EmptyGrid {
        /// Number of rows supplied for the grid.
        rows: u32,
        /// Number of columns supplied for the grid.
        cols: u32,
    },
    /// The scenario declared no flight altitude levels.
    #[error("scenario must provide at least one altitude level")]
    NoAltitudes,
    /// The launch cell lies outside the grid.
    #[error("launch cell ({row}, {column}) lies outside the grid")]
    LaunchOutOfBounds {
        /// Row of the offending launch cell.
        row: u32,
        /// Column of the offending launch cell.
        column: u32,
    },
    /// A target cell lies outside the grid.
    #[error("target {index} at ({row}, {column}) lies outside the grid")]
    TargetOutOfBounds {
        /// Position of the target within the scenario's target list.
        index: usize,
        /// Row of the offending target cell.
        row: u32,
        /// Column of the offending target cell.
        column: u32,
    },
    /// The wind field vector count does not match the declared grid volume.
    #[error("wind field holds {found} vectors but the grid needs {expected}")]
    WindFieldMismatch {
        /// Number of vectors the declared dimensions require.
        expected: usize,
        /// Number of vectors actually supplied.
        found: usize,
    },
    /// The scenario text ended before a required section was complete.
    #[error("scenario text ended while reading {expected}")]
    UnexpectedEnd {
        /// Description of the section that was being read.
        expected: &'static str,
    },
    /// A line held the wrong number of whitespace-separated integers.
    #[error("line {line}: expected {expected} integers, found {found}")]
    FieldCount {
        /// One-based line number within the scenario text.
        line: usize,
        /// Number of integers the line must hold.
        expected: usize,
        /// Number of integers the line actually held.
        found: usize,
    },
    /// A token could not be parsed as an integer.
    #[error("line {line}: '{token}' is not an integer")]
    MalformedInteger {
        /// One-based line number within the scenario text.
        line: usize,
        /// Token that failed to parse.
        token: String,
    },
    /// A field that must be non-negative carried a negative value.
    #[error("line {line}: value {value} must not be negative")]
    NegativeValue {
        /// One-based line number within the scenario text.
        line: usize,
        /// Negative value found in the text.
        value: i64,
    },
}

/// Read-only wind vectors for every flight altitude level of the grid.
///
/// Vectors are stored flat in `[altitude-1][row][column]` order; ground
/// level has no wind entry because grounded platforms never drift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindField {
    levels: u32,
    rows: u32,
    cols: u32,
    vectors: Vec<WindVector>,
}

impl WindField {
    /// Creates a wind field after validating the dimensions and volume.
    pub fn new(
        levels: u32,
        rows: u32,
        cols: u32,
        vectors: Vec<WindVector>,
    ) -> Result<Self, ScenarioError> {
        if rows == 0 || cols == 0 {
            return Err(ScenarioError::EmptyGrid { rows, cols });
        }
        if levels == 0 {
            return Err(ScenarioError::NoAltitudes);
        }

        let expected = levels as usize * rows as usize * cols as usize;
        if vectors.len() != expected {
            return Err(ScenarioError::WindFieldMismatch {
                expected,
                found: vectors.len(),
            });
        }

        Ok(Self {
            levels,
            rows,
            cols,
            vectors,
        })
    }

    /// Number of flight altitude levels, excluding ground level.
    #[must_use]
    pub const fn levels(&self) -> u32 {
        self.levels
    }

    /// Number of rows covered by every altitude grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns covered by every altitude grid.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Wind vector at the provided flight altitude, row, and column.
    ///
    /// `altitude` must be in `[1, levels]` and the cell must lie within the
    /// grid; the advector guarantees both before sampling.
    #[must_use]
    pub fn at(&self, altitude: u32, row: u32, column: u32) -> WindVector {
        debug_assert!(altitude >= 1 && altitude <= self.levels);
        debug_assert!(row < self.rows && column < self.cols);
        let level = (altitude - 1) as usize;
        let index = (level * self.rows as usize + row as usize) * self.cols as usize
            + column as usize;
        self.vectors[index]
    }
}

/// Immutable description of one mission: grid, winds, targets, and counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    coverage_radius: u32,
    platform_count: usize,
    turn_count: usize,
    launch: GridPosition,
    targets: Vec<GridPosition>,
    wind: WindField,
}

impl Scenario {
    /// Assembles a scenario from pre-built parts, validating cell bounds.
    ///
    /// Grid dimensions and the altitude ceiling are taken from the wind
    /// field. Target altitude components are normalized to ground level
    /// because coverage only considers rows and columns.
    pub fn from_parts(
        coverage_radius: u32,
        platform_count: usize,
        turn_count: usize,
        launch: GridPosition,
        targets: Vec<GridPosition>,
        wind: WindField,
    ) -> Result<Self, ScenarioError> {
        if launch.row() >= wind.rows() || launch.column() >= wind.cols() {
            return Err(ScenarioError::LaunchOutOfBounds {
                row: launch.row(),
                column: launch.column(),
            });
        }

        for (index, target) in targets.iter().enumerate() {
            if target.row() >= wind.rows() || target.column() >= wind.cols() {
                return Err(ScenarioError::TargetOutOfBounds {
                    index,
                    row: target.row(),
                    column: target.column(),
                });
            }
        }

        Ok(Self {
            coverage_radius,
            platform_count,
            turn_count,
            launch: launch.with_altitude(0),
            targets: targets
                .into_iter()
                .map(|target| target.with_altitude(0))
                .collect(),
            wind,
        })
    }

    /// Parses a scenario from its textual description.
    ///
    /// The layout is: one line `rows cols altitudes`; one line
    /// `num_targets coverage_radius num_platforms num_turns`; the launch
    /// cell; `num_targets` target cells; then `altitudes x rows` lines each
    /// holding `2 x cols` integers forming (Δrow, Δcolumn) wind pairs.
    /// Anything after a `#` on a line is ignored.
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        parser::parse(text)
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.wind.rows()
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.wind.cols()
    }

    /// Highest altitude level a platform may occupy.
    #[must_use]
    pub const fn altitude_ceiling(&self) -> u32 {
        self.wind.levels()
    }

    /// Radius within which an airborne platform covers a target.
    #[must_use]
    pub const fn coverage_radius(&self) -> u32 {
        self.coverage_radius
    }

    /// Number of platforms launched for the mission.
    #[must_use]
    pub const fn platform_count(&self) -> usize {
        self.platform_count
    }

    /// Number of turns the mission lasts.
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Grounded cell every platform starts from.
    #[must_use]
    pub const fn launch(&self) -> GridPosition {
        self.launch
    }

    /// Cells the mission wants covered.
    #[must_use]
    pub fn targets(&self) -> &[GridPosition] {
        &self.targets
    }

    /// Per-altitude wind vectors for the grid.
    #[must_use]
    pub const fn wind(&self) -> &WindField {
        &self.wind
    }
}

#[cfg(test)]
mod tests {
    use super::{Scenario, ScenarioError, WindField};
    use skydrift_core::{GridPosition, WindVector};

    const SAMPLE: &str = "\
3 5 3 # rows cols altitudes
2 1 1 5 # targets radius platforms turns
1 2 # launch cell
0 2
0 4
0 1 0 1 0 1 0 1 0 1
0 1 0 1 0 1 0 1 0 1
0 1 0 1 0 1 0 1 0 1
-1 0 -1 0 -1 0 -1 0 -1 0
-1 0 -1 0 -1 0 -1 0 -1 0
-1 0 -1 0 -1 0 -1 0 -1 0
0 1 0 1 0 1 0 2 0 1
0 2 0 1 0 2 0 3 0 2
0 1 0 1 0 1 0 2 0 1
";

    #[test]
    fn parses_the_sample_scenario() {
        let scenario = Scenario::parse(SAMPLE).expect("sample scenario parses");

        assert_eq!(scenario.rows(), 3);
        assert_eq!(scenario.cols(), 5);
        assert_eq!(scenario.altitude_ceiling(), 3);
        assert_eq!(scenario.coverage_radius(), 1);
        assert_eq!(scenario.platform_count(), 1);
        assert_eq!(scenario.turn_count(), 5);
        assert_eq!(scenario.launch(), GridPosition::new(1, 2, 0));
        assert_eq!(
            scenario.targets(),
            &[GridPosition::new(0, 2, 0), GridPosition::new(0, 4, 0)]
        );
    }

    #[test]
    fn wind_lookup_honours_altitude_row_column_order() {
        let scenario = Scenario::parse(SAMPLE).expect("sample scenario parses");
        let wind = scenario.wind();

        assert_eq!(wind.at(1, 0, 0), WindVector::new(0, 1));
        assert_eq!(wind.at(2, 0, 0), WindVector::new(-1, 0));
        assert_eq!(wind.at(3, 1, 3), WindVector::new(0, 3));
        assert_eq!(wind.at(3, 2, 4), WindVector::new(0, 1));
    }

    #[test]
    fn rejects_empty_grid_dimensions() {
        let result = WindField::new(1, 0, 4, Vec::new());
        assert!(matches!(
            result,
            Err(ScenarioError::EmptyGrid { rows: 0, cols: 4 })
        ));
    }

    #[test]
    fn rejects_wind_volume_mismatch() {
        let result = WindField::new(1, 2, 2, vec![WindVector::new(0, 0); 3]);
        assert!(matches!(
            result,
            Err(ScenarioError::WindFieldMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn rejects_targets_outside_the_grid() {
        let wind = WindField::new(1, 2, 2, vec![WindVector::new(0, 0); 4]).expect("wind field");
        let result = Scenario::from_parts(
            1,
            1,
            1,
            GridPosition::new(0, 0, 0),
            vec![GridPosition::new(5, 0, 0)],
            wind,
        );
        assert!(matches!(
            result,
            Err(ScenarioError::TargetOutOfBounds { index: 0, row: 5, .. })
        ));
    }

    #[test]
    fn rejects_launch_outside_the_grid() {
        let wind = WindField::new(1, 2, 2, vec![WindVector::new(0, 0); 4]).expect("wind field");
        let result = Scenario::from_parts(1, 1, 1, GridPosition::new(0, 9, 0), Vec::new(), wind);
        assert!(matches!(
            result,
            Err(ScenarioError::LaunchOutOfBounds { row: 0, column: 9 })
        ));
    }

    #[test]
    fn truncated_text_reports_the_missing_section() {
        let result = Scenario::parse("3 5 3\n2 1 1 5\n1 2\n0 2\n");
        assert!(matches!(
            result,
            Err(ScenarioError::UnexpectedEnd { expected: "target cell" })
        ));
    }
}
