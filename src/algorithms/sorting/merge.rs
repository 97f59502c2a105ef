//! Top-down merge sort
//!
//! Merge records five kinds of checkpoints: the segment announce, each
//! comparison with its copy into the scratch buffer, the leftover flush, and
//! the copy back into the main array. Ties take the left element, which keeps
//! the sort stable.

use super::{span, ArrayTracer, SortOptions};
use crate::algorithms::{Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};

pub const PSEUDOCODE: &[&str] = &[
    "mergeSort(A, left, right)",
    "    if left ≥ right return",
    "    mid ← ⌊(left + right) / 2⌋",
    "    mergeSort(A, left, mid)",
    "    mergeSort(A, mid+1, right)",
    "    merge(A, left, mid, right)",
    "merge(A, left, mid, right)",
    "    i ← left, j ← mid+1, k ← left",
    "    while i ≤ mid and j ≤ right",
    "        if A[i] ≤ A[j]",
    "            temp[k] ← A[i]; i++",
    "        else",
    "            temp[k] ← A[j]; j++",
    "        k++",
    "    copy remaining elements of left or right to temp",
    "    copy temp[left..right] back into A",
];

pub const META: Meta = Meta::fixed(
    "O(n log n)",
    "O(n log n)",
    "O(n log n)",
    "O(n)",
    "Stable divide-and-conquer algorithm. Uses auxiliary array during merge.",
);

pub fn sort(input: &[f64], _options: &SortOptions) -> RunResult<ArrayFrame> {
    let mut t = ArrayTracer::new(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, META);
    }

    t.mark(&[1], Marks::none());

    let mut temp = vec![0.0; t.len()];
    let high = t.len() - 1;
    sort_range(&mut t, &mut temp, 0, high);

    t.finish(PSEUDOCODE, META)
}

fn sort_range(t: &mut ArrayTracer, temp: &mut [f64], left: usize, right: usize) {
    if left >= right {
        t.mark(&[1, 2], Marks::none().select(&[left]));
        return;
    }
    let mid = left + (right - left) / 2;
    t.mark(
        &[1, 3],
        Marks::none().select(&span(left, right)).within(left, right),
    );
    sort_range(t, temp, left, mid);
    sort_range(t, temp, mid + 1, right);
    merge(t, temp, left, mid, right);
}

fn merge(t: &mut ArrayTracer, temp: &mut [f64], left: usize, mid: usize, right: usize) {
    let seg = || Marks::none().within(left, right);
    let (mut i, mut j, mut k) = (left, mid + 1, left);

    t.mark(&[7, 8], seg().select(&span(left, right)));

    while i <= mid && j <= right {
        t.mark(&[9, 10], seg().select(&[i, j]).compare(&[i, j]));
        if t.arr[i] <= t.arr[j] {
            temp[k] = t.arr[i];
            t.mark(&[11], seg().select(&[k]).swap(&[i]));
            i += 1;
        } else {
            temp[k] = t.arr[j];
            t.mark(&[12, 13], seg().select(&[k]).swap(&[j]));
            j += 1;
        }
        k += 1;
        t.mark(&[14], seg().select(&[k - 1]));
    }

    while i <= mid {
        temp[k] = t.arr[i];
        t.mark(&[15], seg().select(&[k]).swap(&[i]));
        i += 1;
        k += 1;
    }
    while j <= right {
        temp[k] = t.arr[j];
        t.mark(&[15], seg().select(&[k]).swap(&[j]));
        j += 1;
        k += 1;
    }

    for idx in left..=right {
        t.arr[idx] = temp[idx];
        t.mark(&[16], seg().select(&[idx]).swap(&[idx]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;
    use crate::snapshot::Segment;

    #[test]
    fn test_sorts_with_duplicates() {
        let input = [38.0, 27.0, 43.0, 3.0, 9.0, 82.0, 10.0, 27.0];
        let run = sort(&input, &SortOptions::default());
        assert_eq!(final_array(&run), sorted(&input));
        assert!(lines_in_range(&run));
    }

    #[test]
    fn test_tie_takes_left_element() {
        let run = sort(&[5.0, 5.0], &SortOptions::default());
        let copy = run
            .steps
            .iter()
            .find(|s| s.active_lines == vec![11] || s.active_lines == vec![12, 13])
            .unwrap();
        assert_eq!(copy.active_lines, vec![11]);
        assert_eq!(copy.frame.swapped, vec![0]);
    }

    #[test]
    fn test_merge_steps_carry_segment() {
        let run = sort(&[2.0, 1.0], &SortOptions::default());
        let merge_steps: Vec<_> = run
            .steps
            .iter()
            .filter(|s| s.active_lines.iter().any(|&l| l >= 7))
            .collect();
        assert!(!merge_steps.is_empty());
        assert!(merge_steps
            .iter()
            .all(|s| s.frame.segment == Some(Segment { low: 0, high: 1 })));
    }

    #[test]
    fn test_single_element_hits_base_case() {
        let run = sort(&[7.0], &SortOptions::default());
        assert_eq!(run.steps.len(), 2);
        assert_eq!(run.steps[1].active_lines, vec![1, 2]);
    }
}
