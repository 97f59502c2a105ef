//! Counting sort
//!
//! Integer keys only: the working array is floored before the first step.
//! Keys are offset by the minimum, so negative input needs no special case.
//! When the key range is wider than [`DENSE_RANGE_LIMIT`] the count table is
//! indexed by rank among the distinct keys instead of by `key - lo`.
//!
//! Placement walks right to left into a scratch buffer, which keeps equal
//! keys in input order. The copy back into the main array records one
//! `swapped` step per write.

use super::{ArrayTracer, SortOptions};
use crate::algorithms::{Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};

pub const PSEUDOCODE: &[&str] = &[
    "countingSort(A)",
    "    lo ← min(A); hi ← max(A)",
    "    count ← array of (hi - lo + 1) zeros",
    "    for i ← 0 to n-1",
    "        count[A[i] - lo] ← count[A[i] - lo] + 1",
    "    for k ← 1 to hi - lo",
    "        count[k] ← count[k] + count[k-1]",
    "    for i ← n-1 down to 0",
    "        count[A[i] - lo] ← count[A[i] - lo] - 1",
    "        output[count[A[i] - lo]] ← A[i]",
    "    copy output back into A",
];

/// Widest key range that gets one count slot per possible key
pub const DENSE_RANGE_LIMIT: u64 = 1 << 16;

pub const META: Meta = Meta::fixed(
    "O(n + k)",
    "O(n + k)",
    "O(n + k)",
    "O(n + k)",
    "Stable, non-comparative. k is the key range (max - min + 1). Values are floored to integers and offset by the minimum, so negatives are fine. Ranges wider than 65536 count by rank among the distinct keys.",
);

/// Maps a key to its slot in the count table
enum Slots {
    Dense { lo: i64, size: usize },
    Ranked(Vec<i64>),
}

impl Slots {
    fn new(keys: &[i64], lo: i64, hi: i64) -> Self {
        let range = hi.abs_diff(lo);
        if range < DENSE_RANGE_LIMIT {
            Slots::Dense {
                lo,
                size: range as usize + 1,
            }
        } else {
            let mut distinct = keys.to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            Slots::Ranked(distinct)
        }
    }

    fn size(&self) -> usize {
        match self {
            Slots::Dense { size, .. } => *size,
            Slots::Ranked(distinct) => distinct.len(),
        }
    }

    fn of(&self, key: i64) -> usize {
        match self {
            Slots::Dense { lo, .. } => key.abs_diff(*lo) as usize,
            Slots::Ranked(distinct) => match distinct.binary_search(&key) {
                Ok(slot) | Err(slot) => slot,
            },
        }
    }
}

pub fn sort(input: &[f64], _options: &SortOptions) -> RunResult<ArrayFrame> {
    let mut t = ArrayTracer::integral(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, META);
    }
    let n = t.len();

    t.mark(&[1], Marks::none());

    let keys: Vec<i64> = (0..n).map(|i| t.key(i)).collect();
    let (mut lo_idx, mut hi_idx) = (0, 0);
    for (i, &key) in keys.iter().enumerate() {
        if key < keys[lo_idx] {
            lo_idx = i;
        }
        if key > keys[hi_idx] {
            hi_idx = i;
        }
    }
    let slots = Slots::new(&keys, keys[lo_idx], keys[hi_idx]);
    let mut count = vec![0usize; slots.size()];
    t.mark(&[2, 3], Marks::none().select(&[lo_idx, hi_idx]));

    for (i, &key) in keys.iter().enumerate() {
        count[slots.of(key)] += 1;
        t.mark(&[4, 5], Marks::none().select(&[i]));
    }

    for k in 1..count.len() {
        count[k] += count[k - 1];
    }
    t.mark(&[6, 7], Marks::none());

    let mut output = vec![0.0; n];
    for i in (0..n).rev() {
        let slot = slots.of(keys[i]);
        count[slot] -= 1;
        let pos = count[slot];
        output[pos] = t.arr[i];
        t.mark(&[8, 9, 10], Marks::none().select(&[pos]).swap(&[i]));
    }

    for (pos, value) in output.into_iter().enumerate() {
        t.arr[pos] = value;
        t.mark(&[11], Marks::none().select(&[pos]).swap(&[pos]));
    }

    t.mark(&[1], Marks::none());
    t.finish(PSEUDOCODE, META)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;

    #[test]
    fn test_sorts_duplicates_and_negatives() {
        let input = [4.0, 2.0, -2.0, 8.0, 3.0, 3.0, -7.0, 1.0];
        let run = sort(&input, &SortOptions::default());
        assert_eq!(final_array(&run), sorted(&input));
        assert!(lines_in_range(&run));
    }

    #[test]
    fn test_fractions_are_floored() {
        let run = sort(&[2.7, -1.2, 2.1], &SortOptions::default());
        assert_eq!(run.steps[0].frame.array, vec![2.0, -2.0, 2.0]);
        assert_eq!(final_array(&run), vec![-2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_wide_range_counts_by_rank() {
        let input = [1e12, 5.0, -3e9, 5.0];
        let run = sort(&input, &SortOptions::default());
        assert_eq!(final_array(&run), vec![-3e9, 5.0, 5.0, 1e12]);
    }

    #[test]
    fn test_count_pass_never_swaps() {
        let input = [3.0, 1.0, 2.0];
        let run = sort(&input, &SortOptions::default());
        let counting = run.steps.iter().filter(|s| s.active_lines == vec![4, 5]);
        assert!(counting.clone().all(|s| s.frame.swapped.is_empty()));
        assert_eq!(counting.count(), input.len());

        let copies: Vec<_> = run
            .steps
            .iter()
            .filter(|s| s.active_lines == vec![11])
            .collect();
        assert_eq!(copies.len(), input.len());
        for (pos, step) in copies.iter().enumerate() {
            assert_eq!(step.frame.swapped, vec![pos]);
        }
    }

    #[test]
    fn test_extremes_clamp_to_integer_range() {
        let run = sort(&[1e300, -1e300, 0.0], &SortOptions::default());
        assert_eq!(
            final_array(&run),
            vec![i64::MIN as f64, 0.0, i64::MAX as f64]
        );
    }
}
