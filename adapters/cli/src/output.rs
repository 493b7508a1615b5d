//! Textual trajectory serialization.
//!
//! One line per turn, one signed integer per platform, single spaces in
//! between — the layout mission tooling downstream expects.

use skydrift_core::Trajectory;

pub(crate) fn render_trajectory(trajectory: &Trajectory) -> String {
    let mut out = String::new();
    for row in trajectory.turns() {
        let mut first = true;
        for delta in row {
            if !first {
                out.push(' ');
            }
            out.push_str(&delta.offset().to_string());
            first = false;
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_trajectory;
    use skydrift_core::{AltitudeDelta, Trajectory};

    #[test]
    fn renders_one_line_per_turn() {
        let trajectory = Trajectory::from_turns(vec![
            vec![AltitudeDelta::Climb, AltitudeDelta::Hold],
            vec![AltitudeDelta::Descend, AltitudeDelta::Climb],
        ]);
        assert_eq!(render_trajectory(&trajectory), "1 0\n-1 1\n");
    }

    #[test]
    fn renders_nothing_for_an_empty_plan() {
        assert_eq!(render_trajectory(&Trajectory::new()), "");
    }
}
