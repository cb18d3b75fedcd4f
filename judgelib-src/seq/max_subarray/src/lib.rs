use std::ops::Add;

pub trait MaxSubarray {
    type Item;
    /// Largest sum of a non-empty contiguous run, or `None` if empty.
    fn max_subarray_sum(&self) -> Option<Self::Item>;
}

impl<T: Copy + Ord + Add<Output = T>> MaxSubarray for [T] {
    type Item = T;
    fn max_subarray_sum(&self) -> Option<T> {
        let (&first, rest) = self.split_first()?;
        let mut best = first;
        let mut cur = first;
        for &x in rest {
            cur = (cur + x).max(x);
            best = best.max(cur);
        }
        Some(best)
    }
}
