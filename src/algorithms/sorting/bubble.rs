//! Bubble sort with early exit

use super::{ArrayTracer, SortOptions};
use crate::algorithms::{Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};

pub const PSEUDOCODE: &[&str] = &[
    "for i ← 0 to n-2",
    "    swapped ← false",
    "    for j ← 0 to n-2-i",
    "        if A[j] > A[j+1]",
    "            swap A[j], A[j+1]",
    "    if not swapped then break",
];

pub const META: Meta = Meta::fixed(
    "O(n)",
    "O(n²)",
    "O(n²)",
    "O(1)",
    "Stable when implemented with adjacent swaps. Early-exit when the array is already sorted.",
);

pub fn sort(input: &[f64], _options: &SortOptions) -> RunResult<ArrayFrame> {
    let mut t = ArrayTracer::new(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, META);
    }
    let n = t.len();

    t.mark(&[1], Marks::none());

    for i in 0..n - 1 {
        let boundary = n - 1 - i;
        let mut swapped = false;
        t.mark(&[1, 2], Marks::none().select(&[boundary]));

        for j in 0..boundary {
            t.mark(&[3, 4], Marks::none().select(&[j]).compare(&[j, j + 1]));
            if t.arr[j] > t.arr[j + 1] {
                t.arr.swap(j, j + 1);
                swapped = true;
                t.mark(&[5], Marks::none().select(&[j + 1]).swap(&[j, j + 1]));
            }
        }

        // the no-swap check is recorded every pass
        t.mark(&[6], Marks::none().select(&[boundary]));
        if !swapped {
            break;
        }
    }

    t.mark(&[6], Marks::none());
    t.finish(PSEUDOCODE, META)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;

    #[test]
    fn test_sorts_and_ends_on_exit_line() {
        let run = sort(&[5.0, 1.0, 4.0, 2.0, 8.0], &SortOptions::default());
        assert_eq!(final_array(&run), vec![1.0, 2.0, 4.0, 5.0, 8.0]);
        assert_eq!(run.last_step().unwrap().active_lines, vec![6]);
        assert!(lines_in_range(&run));
    }

    #[test]
    fn test_early_exit_on_sorted_input() {
        let run = sort(&[1.0, 2.0, 3.0, 4.0], &SortOptions::default());
        // initial, pass announce, 3 compares, no-swap check, final
        assert_eq!(run.steps.len(), 7);
        assert!(run.steps.iter().all(|s| s.frame.swapped.is_empty()));
        assert_eq!(run.steps[5].active_lines, vec![6]);
    }

    #[test]
    fn test_swap_is_separate_from_compare() {
        let run = sort(&[2.0, 1.0], &SortOptions::default());
        let compare = &run.steps[2];
        let swap = &run.steps[3];
        assert_eq!(compare.frame.compared, vec![0, 1]);
        assert_eq!(compare.frame.array, vec![2.0, 1.0]);
        assert_eq!(swap.frame.swapped, vec![0, 1]);
        assert_eq!(swap.frame.array, vec![1.0, 2.0]);
    }

    #[test]
    fn test_empty_input_is_one_trivial_step() {
        let run = sort(&[], &SortOptions::default());
        assert_eq!(run.steps.len(), 1);
        assert!(run.steps[0].active_lines.is_empty());
        assert!(run.steps[0].frame.array.is_empty());
    }
}
