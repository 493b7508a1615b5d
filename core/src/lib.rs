#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the skydrift trajectory toolkit.
//!
//! This crate defines the value types that cross crate boundaries: grid
//! positions, wind vectors, altitude steering decisions, and whole
//! trajectories. Positions are immutable values; systems that move a
//! platform return a fresh position rather than mutating a shared one, so
//! two planners evaluating the same fleet can never corrupt each other's
//! in-flight computation.

use serde::{Deserialize, Serialize};

/// Location of a platform or target expressed as row, column, and altitude.
///
/// Altitude level `0` means the platform sits on the ground: it drifts with
/// no wind and never contributes to coverage. Targets ignore their altitude
/// component entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    row: u32,
    column: u32,
    altitude: u32,
}

impl GridPosition {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(row: u32, column: u32, altitude: u32) -> Self {
        Self {
            row,
            column,
            altitude,
        }
    }

    /// Zero-based row index of the position. Rows never wrap.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the position. Columns wrap toroidally.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Altitude level of the position, with `0` meaning grounded.
    #[must_use]
    pub const fn altitude(&self) -> u32 {
        self.altitude
    }

    /// Reports whether the position sits at ground level.
    #[must_use]
    pub const fn is_grounded(&self) -> bool {
        self.altitude == 0
    }

    /// Returns a copy of the position with the provided altitude level.
    #[must_use]
    pub const fn with_altitude(self, altitude: u32) -> Self {
        Self { altitude, ..self }
    }
}

/// Horizontal wind displacement applied to a platform during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindVector {
    delta_row: i32,
    delta_column: i32,
}

impl WindVector {
    /// Creates a new wind vector from signed row and column displacements.
    #[must_use]
    pub const fn new(delta_row: i32, delta_column: i32) -> Self {
        Self {
            delta_row,
            delta_column,
        }
    }

    /// Signed row displacement carried by the wind.
    #[must_use]
    pub const fn delta_row(&self) -> i32 {
        self.delta_row
    }

    /// Signed column displacement carried by the wind.
    #[must_use]
    pub const fn delta_column(&self) -> i32 {
        self.delta_column
    }

    /// Reports whether the vector displaces nothing.
    #[must_use]
    pub const fn is_calm(&self) -> bool {
        self.delta_row == 0 && self.delta_column == 0
    }
}

/// Altitude steering decision issued for one platform on one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AltitudeDelta {
    /// Drop one altitude level.
    Descend,
    /// Keep the current altitude level.
    Hold,
    /// Gain one altitude level.
    Climb,
}

impl AltitudeDelta {
    /// Every steering decision, in ascending offset order.
    pub const ALL: [Self; 3] = [Self::Descend, Self::Hold, Self::Climb];

    /// Signed altitude offset encoded by the decision.
    #[must_use]
    pub const fn offset(self) -> i32 {
        match self {
            Self::Descend => -1,
            Self::Hold => 0,
            Self::Climb => 1,
        }
    }

    /// Decodes a decision from its signed offset, if the offset is valid.
    #[must_use]
    pub const fn from_offset(offset: i32) -> Option<Self> {
        match offset {
            -1 => Some(Self::Descend),
            0 => Some(Self::Hold),
            1 => Some(Self::Climb),
            _ => None,
        }
    }
}

/// Complete steering plan for a fleet: one decision per platform per turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    turns: Vec<Vec<AltitudeDelta>>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub const fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Creates a trajectory from pre-assembled per-turn decision rows.
    #[must_use]
    pub fn from_turns(turns: Vec<Vec<AltitudeDelta>>) -> Self {
        Self { turns }
    }

    /// Appends the decisions for one turn.
    pub fn push_turn(&mut self, decisions: Vec<AltitudeDelta>) {
        self.turns.push(decisions);
    }

    /// Per-turn decision rows, in turn order.
    #[must_use]
    pub fn turns(&self) -> &[Vec<AltitudeDelta>] {
        &self.turns
    }

    /// Number of turns recorded in the trajectory.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Reports whether the trajectory holds no turns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AltitudeDelta, GridPosition, Trajectory, WindVector};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn grid_position_round_trips_through_bincode() {
        assert_round_trip(&GridPosition::new(4, 17, 2));
    }

    #[test]
    fn wind_vector_round_trips_through_bincode() {
        assert_round_trip(&WindVector::new(-3, 2));
    }

    #[test]
    fn trajectory_round_trips_through_bincode() {
        let trajectory = Trajectory::from_turns(vec![
            vec![AltitudeDelta::Climb, AltitudeDelta::Hold],
            vec![AltitudeDelta::Descend, AltitudeDelta::Climb],
        ]);
        assert_round_trip(&trajectory);
    }

    #[test]
    fn altitude_delta_offsets_round_trip() {
        for delta in AltitudeDelta::ALL {
            assert_eq!(AltitudeDelta::from_offset(delta.offset()), Some(delta));
        }
        assert_eq!(AltitudeDelta::from_offset(2), None);
        assert_eq!(AltitudeDelta::from_offset(-2), None);
    }

    #[test]
    fn ground_level_is_reported_as_grounded() {
        assert!(GridPosition::new(3, 3, 0).is_grounded());
        assert!(!GridPosition::new(3, 3, 1).is_grounded());
    }

    #[test]
    fn with_altitude_preserves_row_and_column() {
        let position = GridPosition::new(5, 9, 2).with_altitude(0);
        assert_eq!(position, GridPosition::new(5, 9, 0));
    }

    #[test]
    fn push_turn_extends_the_plan() {
        let mut trajectory = Trajectory::new();
        assert!(trajectory.is_empty());
        trajectory.push_turn(vec![AltitudeDelta::Climb]);
        assert_eq!(trajectory.turn_count(), 1);
        assert_eq!(trajectory.turns()[0], vec![AltitudeDelta::Climb]);
    }
}
