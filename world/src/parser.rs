//! Line-oriented parser for the textual scenario description.

use skydrift_core::{GridPosition, WindVector};

use crate::{Scenario, ScenarioError, WindField};

pub(crate) fn parse(text: &str) -> Result<Scenario, ScenarioError> {
    let mut cursor = LineCursor::new(text);

    let dimensions = cursor.take("grid dimensions", 3)?;
    let rows = unsigned(dimensions.line, dimensions.values[0])?;
    let cols = unsigned(dimensions.line, dimensions.values[1])?;
    let levels = unsigned(dimensions.line, dimensions.values[2])?;

    let counts = cursor.take("mission counts", 4)?;
    let target_count = unsigned(counts.line, counts.values[0])? as usize;
    let coverage_radius = unsigned(counts.line, counts.values[1])?;
    let platform_count = unsigned(counts.line, counts.values[2])? as usize;
    let turn_count = unsigned(counts.line, counts.values[3])? as usize;

    let launch_line = cursor.take("launch cell", 2)?;
    let launch = GridPosition::new(
        unsigned(launch_line.line, launch_line.values[0])?,
        unsigned(launch_line.line, launch_line.values[1])?,
        0,
    );

    let mut targets = Vec::with_capacity(target_count);
    for _ in 0..target_count {
        let target_line = cursor.take("target cell", 2)?;
        targets.push(GridPosition::new(
            unsigned(target_line.line, target_line.values[0])?,
            unsigned(target_line.line, target_line.values[1])?,
            0,
        ));
    }

    let wind_rows = levels as usize * rows as usize;
    let mut vectors = Vec::with_capacity(wind_rows * cols as usize);
    for _ in 0..wind_rows {
        let wind_line = cursor.take("wind row", 2 * cols as usize)?;
        for pair in wind_line.values.chunks_exact(2) {
            vectors.push(WindVector::new(
                signed(wind_line.line, pair[0])?,
                signed(wind_line.line, pair[1])?,
            ));
        }
    }

    let wind = WindField::new(levels, rows, cols, vectors)?;
    Scenario::from_parts(
        coverage_radius,
        platform_count,
        turn_count,
        launch,
        targets,
        wind,
    )
}

struct Fields {
    line: usize,
    values: Vec<i64>,
}

struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    number: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            number: 0,
        }
    }

    /// Yields the next line that still holds content once `#` comments and
    /// surrounding whitespace are stripped, enforcing the field count.
    fn take(&mut self, expected: &'static str, count: usize) -> Result<Fields, ScenarioError> {
        loop {
            let Some(raw) = self.lines.next() else {
                return Err(ScenarioError::UnexpectedEnd { expected });
            };
            self.number += 1;

            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let mut values = Vec::with_capacity(count);
            for token in content.split_whitespace() {
                let value = token.parse::<i64>().map_err(|_| {
                    ScenarioError::MalformedInteger {
                        line: self.number,
                        token: token.to_owned(),
                    }
                })?;
                values.push(value);
            }

            if values.len() != count {
                return Err(ScenarioError::FieldCount {
                    line: self.number,
                    expected: count,
                    found: values.len(),
                });
            }

            return Ok(Fields {
                line: self.number,
                values,
            });
        }
    }
}

fn unsigned(line: usize, value: i64) -> Result<u32, ScenarioError> {
    u32::try_from(value).map_err(|_| ScenarioError::NegativeValue { line, value })
}

fn signed(line: usize, value: i64) -> Result<i32, ScenarioError> {
    i32::try_from(value).map_err(|_| ScenarioError::NegativeValue { line, value })
}
