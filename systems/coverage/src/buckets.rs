//! Bucketed spatial partition of fleet positions.
//!
//! Buckets are square cells whose side matches the coverage radius, so any
//! platform within range of a target lives in the target's bucket or one of
//! its eight neighbors. Row neighbors are clamped at the grid edges because
//! rows never wrap; column neighbors wrap modulo the bucket count. The
//! gathered candidates are a superset — the exact in-range test still runs
//! on every candidate.

use skydrift_core::GridPosition;

#[derive(Debug)]
pub(crate) struct BucketIndex {
    side: u32,
    row_buckets: u32,
    col_buckets: u32,
    buckets: Vec<Vec<GridPosition>>,
}

impl BucketIndex {
    /// Creates an empty index for a grid of the given size and radius.
    ///
    /// A zero radius still needs usable buckets, so the side is floored at
    /// one cell.
    pub(crate) fn new(rows: u32, cols: u32, coverage_radius: u32) -> Self {
        let side = coverage_radius.max(1);
        let row_buckets = (rows / side).max(1);
        let col_buckets = (cols / side).max(1);
        let buckets = vec![Vec::new(); row_buckets as usize * col_buckets as usize];
        Self {
            side,
            row_buckets,
            col_buckets,
            buckets,
        }
    }

    /// Refiles the fleet into the buckets, reusing bucket allocations.
    pub(crate) fn rebuild(&mut self, platforms: &[GridPosition]) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        for platform in platforms {
            let index = self.bucket_index(
                self.bucket_row(platform.row()),
                self.bucket_col(platform.column()),
            );
            self.buckets[index].push(*platform);
        }
    }

    /// Platforms filed in the home bucket of `(row, column)` and its
    /// neighbors. Out-of-range row neighbors are omitted, never wrapped;
    /// column neighbors wrap. Coinciding neighbor buckets on small grids
    /// are visited once.
    pub(crate) fn candidates(
        &self,
        row: u32,
        column: u32,
    ) -> impl Iterator<Item = &GridPosition> {
        let home_row = self.bucket_row(row);
        let home_col = self.bucket_col(column);

        let mut selected = [0usize; 9];
        let mut count = 0;
        for row_offset in -1i64..=1 {
            let bucket_row = i64::from(home_row) + row_offset;
            if bucket_row < 0 || bucket_row >= i64::from(self.row_buckets) {
                continue;
            }
            for col_offset in -1i64..=1 {
                let bucket_col = (i64::from(home_col) + col_offset)
                    .rem_euclid(i64::from(self.col_buckets));
                let index = self.bucket_index(bucket_row as u32, bucket_col as u32);
                if !selected[..count].contains(&index) {
                    selected[count] = index;
                    count += 1;
                }
            }
        }

        let buckets = &self.buckets;
        (0..count).flat_map(move |slot| buckets[selected[slot]].iter())
    }

    fn bucket_row(&self, row: u32) -> u32 {
        (row / self.side).min(self.row_buckets - 1)
    }

    fn bucket_col(&self, column: u32) -> u32 {
        (column / self.side).min(self.col_buckets - 1)
    }

    fn bucket_index(&self, bucket_row: u32, bucket_col: u32) -> usize {
        bucket_row as usize * self.col_buckets as usize + bucket_col as usize
    }
}
