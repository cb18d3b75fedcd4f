use std::ops::Add;

use max_subarray::MaxSubarray;

/// Largest sum over the non-empty sub-rectangles of `a`, or `None` if `a`
/// has no cells.
///
/// Fixes the top and bottom rows, folds the rows in between into column
/// sums, and runs Kadane over them in O(rows² · cols) time.
pub fn max_subrect_sum<T>(a: &[Vec<T>]) -> Option<T>
where
    T: Copy + Ord + Add<Output = T>,
{
    let cols = a.first().map_or(0, |row| row.len());
    assert!(
        a.iter().all(|row| row.len() == cols),
        "matrix rows must have equal length"
    );

    let mut best: Option<T> = None;
    for (top, row) in a.iter().enumerate() {
        let mut sum = row.clone();
        best = best.max(sum.max_subarray_sum());
        for row in &a[top + 1..] {
            sum.iter_mut().zip(row).for_each(|(s, &x)| *s = *s + x);
            best = best.max(sum.max_subarray_sum());
        }
    }
    best
}
