#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure position advector: one platform, one altitude decision, one turn.
//!
//! Advection is the inner loop of every planner, so rejection is a cheap
//! boolean outcome rather than an error, and nothing here allocates.

use skydrift_core::{AltitudeDelta, GridPosition};
use skydrift_world::WindField;

/// Result of advancing one platform by one turn.
///
/// An invalid outcome means the chosen altitude decision is not viable this
/// turn: either it left the altitude band, or the wind at the new altitude
/// would push the platform off the top or bottom of the grid. Callers are
/// expected to retry with a different decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceOutcome {
    position: GridPosition,
    valid: bool,
}

impl AdvanceOutcome {
    const fn valid(position: GridPosition) -> Self {
        Self {
            position,
            valid: true,
        }
    }

    const fn rejected(position: GridPosition) -> Self {
        Self {
            position,
            valid: false,
        }
    }

    /// Position after the move, or the pre-move position (with the altitude
    /// component possibly applied) when the move was rejected.
    #[must_use]
    pub const fn position(&self) -> GridPosition {
        self.position
    }

    /// Reports whether the move kept the platform inside the grid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Advances one platform by one turn under the provided wind field.
///
/// The altitude decision is applied first. A decision that leaves
/// `[0, levels]` is rejected without touching the altitude. A platform that
/// ends up grounded stays exactly where it is. Otherwise the wind sampled at
/// the pre-move row and column of the post-move altitude is applied: the
/// column wraps toroidally into `[0, cols)`, while a row that leaves
/// `[0, rows)` rejects the move.
#[must_use]
pub fn advance(wind: &WindField, position: GridPosition, delta: AltitudeDelta) -> AdvanceOutcome {
    let altitude = i64::from(position.altitude()) + i64::from(delta.offset());
    if altitude < 0 || altitude > i64::from(wind.levels()) {
        return AdvanceOutcome::rejected(position);
    }

    let altitude = altitude as u32;
    if altitude == 0 {
        return AdvanceOutcome::valid(position.with_altitude(0));
    }

    let vector = wind.at(altitude, position.row(), position.column());
    let row = i64::from(position.row()) + i64::from(vector.delta_row());
    let column = (i64::from(position.column()) + i64::from(vector.delta_column()))
        .rem_euclid(i64::from(wind.cols())) as u32;

    if row < 0 || row >= i64::from(wind.rows()) {
        return AdvanceOutcome::rejected(position.with_altitude(altitude));
    }

    AdvanceOutcome::valid(GridPosition::new(row as u32, column, altitude))
}

#[cfg(test)]
mod tests {
    use super::advance;
    use skydrift_core::{AltitudeDelta, GridPosition, WindVector};
    use skydrift_world::WindField;

    fn calm_field(levels: u32, rows: u32, cols: u32) -> WindField {
        let volume = (levels * rows * cols) as usize;
        WindField::new(levels, rows, cols, vec![WindVector::new(0, 0); volume])
            .expect("calm wind field")
    }

    #[test]
    fn grounded_platform_ignores_wind() {
        let vectors = vec![WindVector::new(1, 1); 4];
        let wind = WindField::new(1, 2, 2, vectors).expect("wind field");
        let outcome = advance(&wind, GridPosition::new(0, 0, 0), AltitudeDelta::Hold);
        assert!(outcome.is_valid());
        assert_eq!(outcome.position(), GridPosition::new(0, 0, 0));
    }

    #[test]
    fn descending_to_ground_keeps_row_and_column() {
        let vectors = vec![WindVector::new(1, 1); 4];
        let wind = WindField::new(1, 2, 2, vectors).expect("wind field");
        let outcome = advance(&wind, GridPosition::new(1, 1, 1), AltitudeDelta::Descend);
        assert!(outcome.is_valid());
        assert_eq!(outcome.position(), GridPosition::new(1, 1, 0));
    }

    #[test]
    fn decisions_below_ground_are_rejected_unchanged() {
        let wind = calm_field(1, 2, 2);
        let position = GridPosition::new(0, 0, 0);
        let outcome = advance(&wind, position, AltitudeDelta::Descend);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.position(), position);
    }

    #[test]
    fn decisions_above_the_ceiling_are_rejected_unchanged() {
        let wind = calm_field(2, 2, 2);
        let position = GridPosition::new(0, 0, 2);
        let outcome = advance(&wind, position, AltitudeDelta::Climb);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.position(), position);
    }
}
