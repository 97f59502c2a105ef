//! Selection sort

use super::{ArrayTracer, SortOptions};
use crate::algorithms::{Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};

pub const PSEUDOCODE: &[&str] = &[
    "for i ← 0 to n-2",
    "    min ← i",
    "    for j ← i+1 to n-1",
    "        if A[j] < A[min]",
    "            min ← j",
    "    swap A[i], A[min]",
];

pub const META: Meta = Meta::fixed(
    "O(n²)",
    "O(n²)",
    "O(n²)",
    "O(1)",
    "Not stable by default. Always performs n(n-1)/2 comparisons regardless of input order.",
);

pub fn sort(input: &[f64], _options: &SortOptions) -> RunResult<ArrayFrame> {
    let mut t = ArrayTracer::new(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, META);
    }
    let n = t.len();

    t.mark(&[1], Marks::none());

    for i in 0..n - 1 {
        let mut min = i;
        t.mark(&[1, 2], Marks::none().select(&[i]));

        for j in i + 1..n {
            t.mark(&[3, 4], Marks::none().select(&[i, min]).compare(&[j]));
            if t.arr[j] < t.arr[min] {
                min = j;
                t.mark(&[5], Marks::none().select(&[i, min]));
            }
        }

        if min != i {
            t.arr.swap(i, min);
            t.mark(&[6], Marks::none().select(&[i, min]).swap(&[i, min]));
        } else {
            t.mark(&[6], Marks::none().select(&[i]));
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
    fn test_sorts() {
        let run = sort(&[29.0, 10.0, 14.0, 37.0, 13.0], &SortOptions::default());
        assert_eq!(final_array(&run), vec![10.0, 13.0, 14.0, 29.0, 37.0]);
        assert!(lines_in_range(&run));
    }

    #[test]
    fn test_no_swap_pass_still_records_placement() {
        let run = sort(&[1.0, 2.0], &SortOptions::default());
        // initial, announce, compare, placement without swap, final
        assert_eq!(run.steps.len(), 5);
        let placement = &run.steps[3];
        assert_eq!(placement.active_lines, vec![6]);
        assert!(placement.frame.swapped.is_empty());
        assert_eq!(placement.frame.selected, vec![0]);
    }
}
