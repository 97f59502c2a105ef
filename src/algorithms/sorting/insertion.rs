//! Insertion sort

use super::{ArrayTracer, SortOptions};
use crate::algorithms::{Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};

pub const PSEUDOCODE: &[&str] = &[
    "for i ← 1 to n-1",
    "    key ← A[i]",
    "    j ← i-1",
    "    while j ≥ 0 and A[j] > key",
    "        A[j+1] ← A[j]",
    "        j ← j-1",
    "    A[j+1] ← key",
];

pub const META: Meta = Meta::fixed(
    "O(n)",
    "O(n²)",
    "O(n²)",
    "O(1)",
    "Stable, in-place. Best case when array is already sorted (only n-1 comparisons).",
);

pub fn sort(input: &[f64], _options: &SortOptions) -> RunResult<ArrayFrame> {
    let mut t = ArrayTracer::new(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, META);
    }

    t.mark(&[1], Marks::none());

    for i in 1..t.len() {
        let key = t.arr[i];
        // `hole` is j+1 in the pseudocode
        let mut hole = i;
        t.mark(&[1, 2, 3], Marks::none().select(&[i]));

        while hole > 0 && t.arr[hole - 1] > key {
            t.mark(&[4], Marks::none().select(&[i]).compare(&[hole - 1, hole]));
            t.arr[hole] = t.arr[hole - 1];
            t.mark(&[5], Marks::none().select(&[i]).swap(&[hole - 1, hole]));
            hole -= 1;
            t.mark(&[6], Marks::none().select(&[i]));
        }

        t.arr[hole] = key;
        t.mark(&[7], Marks::none().select(&[hole]));
    }

    t.finish(PSEUDOCODE, META)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;

    #[test]
    fn test_sorts_with_shift_triplets() {
        let run = sort(&[3.0, 1.0, 2.0], &SortOptions::default());
        assert_eq!(final_array(&run), vec![1.0, 2.0, 3.0]);

        // i = 1: announce, compare, shift, move-left, place
        let lines: Vec<Vec<usize>> = run.steps[1..6].iter().map(|s| s.active_lines.clone()).collect();
        assert_eq!(lines, vec![vec![1, 2, 3], vec![4], vec![5], vec![6], vec![7]]);
        assert_eq!(run.steps[3].frame.array, vec![3.0, 3.0, 2.0]);
        assert_eq!(run.steps[5].frame.selected, vec![0]);
        assert!(lines_in_range(&run));
    }

    #[test]
    fn test_ascending_input_never_shifts() {
        let run = sort(&[1.0, 2.0, 3.0, 4.0, 5.0], &SortOptions::default());
        assert!(run.steps.iter().all(|s| s.frame.swapped.is_empty()));
        assert_eq!(run.steps.len(), 1 + 4 * 2);
    }
}
