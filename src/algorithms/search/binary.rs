//! Binary search on a defensively sorted copy
//!
//! One step per loop iteration carries `low`, `high`, `mid` and the branch
//! taken. The first iteration's step also carries the window initialization,
//! so a hit never costs more than ⌈log2 n⌉ + 1 steps. The midpoint is `low + (high - low) / 2`, so a two-element window
//! always shrinks.

use super::check_target;
use crate::algorithms::{normalize, AlgoError, Meta, RunResult};
use crate::snapshot::{Outcome, SearchCursor, SearchFrame, StepRecorder, Window};

pub const PSEUDOCODE: &[&str] = &[
    "int binarySearch(int arr[], int n, int target)",
    "    int left = 0, right = n - 1;",
    "    while (left <= right)",
    "        int mid = left + (right - left) / 2;",
    "        if (arr[mid] == target)",
    "            return mid;  // Found",
    "        else if (arr[mid] > target)",
    "            right = mid - 1;  // Search left half",
    "        else",
    "            left = mid + 1;   // Search right half",
    "    return -1;  // Not found",
];

pub const META: Meta = Meta::fixed(
    "O(1)",
    "O(log n)",
    "O(log n)",
    "O(1)",
    "Requires sorted array; the input is sorted ascending before searching. Halves the window every iteration.",
);

fn cursor(window: Option<Window>, mid: Option<usize>) -> SearchCursor {
    SearchCursor::Binary { window, mid }
}

pub fn search(input: &[f64], target: f64) -> Result<RunResult<SearchFrame>, AlgoError> {
    check_target(target)?;
    let mut arr = normalize(input);
    arr.sort_by(|a, b| a.total_cmp(b));
    if arr.is_empty() {
        let frame = SearchFrame::capture(&[], target, cursor(None, None));
        return Ok(RunResult::trivial(frame, PSEUDOCODE, META));
    }

    let mut recorder = StepRecorder::new();
    let mut window = Window {
        low: 0,
        high: arr.len() as i64 - 1,
    };

    while !window.is_empty() {
        let mid = (window.low + (window.high - window.low) / 2) as usize;
        let frame = SearchFrame::capture(&arr, target, cursor(Some(window), Some(mid)));
        let mut lines: Vec<usize> = if recorder.is_empty() {
            vec![1, 2, 3, 4]
        } else {
            vec![3, 4]
        };

        if arr[mid] == target {
            lines.extend([5, 6]);
            recorder.record(&lines, frame.with_outcome(Outcome::Found(mid)));
            return Ok(RunResult::from_recorder(recorder, PSEUDOCODE, META));
        } else if arr[mid] > target {
            lines.extend([7, 8]);
            recorder.record(&lines, frame);
            window.high = mid as i64 - 1;
        } else {
            lines.extend([9, 10]);
            recorder.record(&lines, frame);
            window.low = mid as i64 + 1;
        }
    }

    recorder.record(
        &[11],
        SearchFrame::capture(&arr, target, cursor(Some(window), None)).with_outcome(Outcome::NotFound),
    );
    Ok(RunResult::from_recorder(recorder, PSEUDOCODE, META))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED: [f64; 10] = [2.0, 10.0, 27.0, 30.0, 40.0, 45.0, 70.0, 80.0, 85.0, 90.0];

    #[test]
    fn test_finds_within_log_bound() {
        let run = search(&SORTED, 80.0).unwrap();
        let last = run.last_step().unwrap();
        assert_eq!(last.frame.outcome, Some(Outcome::Found(7)));
        let bound = (SORTED.len() as f64).log2().ceil() as usize + 1;
        assert!(run.steps.len() <= bound);
    }

    #[test]
    fn test_power_of_two_hit_stays_within_ceil_bound() {
        let arr: Vec<f64> = (1..=8).map(f64::from).collect();
        for (idx, &target) in arr.iter().enumerate() {
            let run = search(&arr, target).unwrap();
            assert_eq!(run.last_step().unwrap().frame.outcome, Some(Outcome::Found(idx)));
            assert!(run.steps.len() <= 4, "target {} took {} steps", target, run.steps.len());
        }
    }

    #[test]
    fn test_first_step_carries_initialization() {
        let run = search(&SORTED, 40.0).unwrap();
        assert_eq!(run.steps[0].active_lines, vec![1, 2, 3, 4, 5, 6]);
        let run = search(&SORTED, 2.0).unwrap();
        assert_eq!(run.steps[0].active_lines, vec![1, 2, 3, 4, 7, 8]);
        assert_eq!(run.steps[1].active_lines, vec![3, 4, 7, 8]);
    }

    #[test]
    fn test_every_present_target_is_found() {
        for (idx, &target) in SORTED.iter().enumerate() {
            let run = search(&SORTED, target).unwrap();
            assert_eq!(run.last_step().unwrap().frame.outcome, Some(Outcome::Found(idx)));
            assert!(run.steps.len() <= 5);
        }
    }

    #[test]
    fn test_missing_target_ends_with_minus_one() {
        let run = search(&SORTED, 1.0).unwrap();
        let last = run.last_step().unwrap();
        assert_eq!(last.frame.outcome.map(|o| o.as_index()), Some(-1));
        match last.frame.cursor {
            SearchCursor::Binary { window: Some(w), .. } => {
                assert!(w.is_empty());
                assert_eq!(w.high, -1);
            }
            other => panic!("unexpected cursor {:?}", other),
        }
    }

    #[test]
    fn test_unsorted_input_sorted_first() {
        let run = search(&[9.0, 1.0, 5.0], 9.0).unwrap();
        assert_eq!(run.steps[0].frame.array, vec![1.0, 5.0, 9.0]);
        assert_eq!(run.last_step().unwrap().frame.outcome, Some(Outcome::Found(2)));
    }
}
