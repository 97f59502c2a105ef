//! Quick sort with Lomuto partitioning and pluggable pivot selection
//!
//! The partition always pivots on `A[high]`. When the strategy picks a
//! different index, that element is swapped into `high` first and the swap is
//! recorded as its own step. Elements equal to the pivot go left (`<=`).
//!
//! Besides the step list, every partition call is logged as a
//! [`PartitionCall`] in `meta.partition_calls`, with the id of the call that
//! spawned it. Renderers use the log to draw the recursion tree.

use super::{ArrayTracer, SortOptions};
use crate::algorithms::{AlgoError, Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};
use serde::Serialize;
use std::str::FromStr;

pub const PSEUDOCODE: &[&str] = &[
    "quickSort(A, low, high)",
    "    if low < high",
    "        pivot ← partition(A, low, high)",
    "        quickSort(A, low, pivot-1)",
    "        quickSort(A, pivot+1, high)",
    "partition(A, low, high)",
    "    swap A[choosePivot(low, high)], A[high]",
    "    pivotValue ← A[high]",
    "    i ← low - 1",
    "    for j ← low to high-1",
    "        if A[j] ≤ pivotValue",
    "            i ← i + 1",
    "            swap A[i], A[j]",
    "    swap A[i+1], A[high]",
    "    return i + 1",
];

pub const NOTES: &str = "In-place, unstable. Worst case occurs on already sorted input with poor pivot choice.

Pivot strategies:
- last: pivot on A[high]. Simple, but sorted or reverse-sorted input degrades to O(n²).
- first: pivot on A[low], swapped into A[high] before partitioning. Same weakness on sorted input.
- median: median of A[low], A[mid], A[high]. Defeats the sorted-input worst case at the cost of two extra comparisons.
- random: uniformly random index in [low, high]. Expected O(n log n) on every input; pass a seed for reproducible runs.
- custom: caller-supplied index per partition call, in call order. Out-of-range or missing entries fall back to A[high].

Whichever index is chosen, it is swapped into A[high] so the Lomuto loop is unchanged.";

pub fn meta() -> Meta {
    Meta::fixed("O(n log n)", "O(n log n)", "O(n²)", "O(log n)", NOTES)
}

/// How each partition call picks its pivot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PivotStrategy {
    #[default]
    Last,
    First,
    MedianOfThree,
    /// Uniform over `[low, high]`; `None` seeds from entropy
    Random { seed: Option<u64> },
    /// Absolute array indices, consumed one per partition call
    Custom(Vec<usize>),
}

impl FromStr for PivotStrategy {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "last" => return Ok(PivotStrategy::Last),
            "first" => return Ok(PivotStrategy::First),
            "median" | "median-of-three" => return Ok(PivotStrategy::MedianOfThree),
            "random" => return Ok(PivotStrategy::Random { seed: None }),
            _ => {}
        }

        if let Some(list) = lower.strip_prefix("custom:") {
            let indices = list
                .split(',')
                .map(str::trim)
                .filter(|tok| !tok.is_empty())
                .map(|tok| {
                    tok.parse::<usize>().map_err(|_| {
                        AlgoError::invalid_input(format!("bad custom pivot index '{}'", tok))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(PivotStrategy::Custom(indices));
        }

        Err(AlgoError::invalid_input(format!(
            "unknown pivot strategy '{}' (expected last, first, median, random or custom:i,j,...)",
            s
        )))
    }
}

/// One partition invocation, for the recursion-tree view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionCall {
    pub id: usize,
    /// Call that recursed into this one; `None` for the top-level call
    pub parent: Option<usize>,
    pub depth: usize,
    pub low: usize,
    pub high: usize,
    /// Index the strategy picked, before it was moved to `high`
    pub chosen_index: usize,
    pub pivot_value: f64,
    /// Final resting index of the pivot
    pub pivot_index: usize,
    pub before: Vec<f64>,
    pub after: Vec<f64>,
    /// Steps recorded by this partition, from the pivot pick to the final swap
    pub first_step: usize,
    pub last_step: usize,
}

impl PartitionCall {
    /// Whether step `index` was recorded inside this partition
    pub fn covers(&self, index: usize) -> bool {
        (self.first_step..=self.last_step).contains(&index)
    }
}

struct PivotChooser {
    strategy: PivotStrategy,
    rng: fastrand::Rng,
    next_custom: usize,
}

impl PivotChooser {
    fn new(strategy: &PivotStrategy) -> Self {
        let rng = match strategy {
            PivotStrategy::Random { seed: Some(seed) } => fastrand::Rng::with_seed(*seed),
            _ => fastrand::Rng::new(),
        };
        PivotChooser {
            strategy: strategy.clone(),
            rng,
            next_custom: 0,
        }
    }

    fn choose(&mut self, arr: &[f64], low: usize, high: usize) -> usize {
        match &self.strategy {
            PivotStrategy::Last => high,
            PivotStrategy::First => low,
            PivotStrategy::MedianOfThree => median_of_three(arr, low, high),
            PivotStrategy::Random { .. } => self.rng.usize(low..=high),
            PivotStrategy::Custom(indices) => {
                let pick = indices.get(self.next_custom).copied();
                self.next_custom += 1;
                match pick {
                    Some(idx) if (low..=high).contains(&idx) => idx,
                    _ => high,
                }
            }
        }
    }
}

fn median_of_three(arr: &[f64], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;
    let (a, b, c) = (arr[low], arr[mid], arr[high]);
    if (a <= b && b <= c) || (c <= b && b <= a) {
        mid
    } else if (b <= a && a <= c) || (c <= a && a <= b) {
        low
    } else {
        high
    }
}

struct QuickRun {
    t: ArrayTracer,
    chooser: PivotChooser,
    calls: Vec<PartitionCall>,
}

pub fn sort(input: &[f64], options: &SortOptions) -> RunResult<ArrayFrame> {
    let t = ArrayTracer::new(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, meta());
    }

    let mut run = QuickRun {
        t,
        chooser: PivotChooser::new(&options.pivot),
        calls: Vec::new(),
    };

    run.t.mark(&[1], Marks::none());
    let high = run.t.len() - 1;
    run.sort_range(0, high, None, 0);

    let mut meta = meta();
    meta.partition_calls = run.calls;
    run.t.finish(PSEUDOCODE, meta)
}

impl QuickRun {
    fn sort_range(&mut self, low: usize, high: usize, parent: Option<usize>, depth: usize) {
        let seg = Marks::none().within(low, high);
        if low < high {
            self.t.mark(&[1, 2], seg.clone().select(&[low, high]));
            let (call_id, pivot) = self.partition(low, high, parent, depth);
            self.t.mark(&[3], seg.select(&[pivot]));
            if pivot > low {
                self.sort_range(low, pivot - 1, Some(call_id), depth + 1);
            }
            if pivot < high {
                self.sort_range(pivot + 1, high, Some(call_id), depth + 1);
            }
        } else if low == high {
            self.t.mark(&[1], seg.select(&[low]));
        }
    }

    fn partition(
        &mut self,
        low: usize,
        high: usize,
        parent: Option<usize>,
        depth: usize,
    ) -> (usize, usize) {
        let seg = || Marks::none().within(low, high);
        let before = self.t.arr.clone();
        let first_step = self.t.next_step();

        let chosen = self.chooser.choose(&self.t.arr, low, high);
        if chosen != high {
            self.t.arr.swap(chosen, high);
            self.t.mark(&[7], seg().select(&[high]).swap(&[chosen, high]));
        }

        let pivot_value = self.t.arr[high];
        self.t.mark(&[6, 8], seg().select(&[high]));

        // `store` is i+1 in the pseudocode
        let mut store = low;
        for j in low..high {
            self.t.mark(
                &[9, 10, 11],
                seg().select(&[low, high, store]).compare(&[j, high]),
            );
            if self.t.arr[j] <= pivot_value {
                self.t.arr.swap(store, j);
                self.t.mark(&[12, 13], seg().select(&[store]).swap(&[store, j]));
                store += 1;
            }
        }

        self.t.arr.swap(store, high);
        self.t.mark(&[14, 15], seg().select(&[store]).swap(&[store, high]));

        let id = self.calls.len();
        self.calls.push(PartitionCall {
            id,
            parent,
            depth,
            low,
            high,
            chosen_index: chosen,
            pivot_value,
            pivot_index: store,
            before,
            after: self.t.arr.clone(),
            first_step,
            last_step: self.t.next_step() - 1,
        });
        tracing::trace!(id, low, high, pivot_value, pivot_index = store, "partition");
        (id, store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;

    const SAMPLE: [f64; 10] = [27.0, 90.0, 2.0, 40.0, 45.0, 80.0, 10.0, 70.0, 85.0, 30.0];

    #[test]
    fn test_first_partition_with_last_pivot() {
        let run = sort(&SAMPLE, &SortOptions::default());
        let first = &run.meta.partition_calls[0];
        assert_eq!(first.pivot_index, 3);
        assert_eq!(first.pivot_value, 30.0);
        assert_eq!(first.parent, None);
        assert_eq!(
            first.after,
            vec![27.0, 2.0, 10.0, 30.0, 45.0, 80.0, 90.0, 70.0, 85.0, 40.0]
        );
        assert_eq!(first.before, SAMPLE.to_vec());
        assert_eq!(final_array(&run), sorted(&SAMPLE));
        assert!(lines_in_range(&run));
    }

    #[test]
    fn test_every_strategy_sorts() {
        let strategies = [
            PivotStrategy::Last,
            PivotStrategy::First,
            PivotStrategy::MedianOfThree,
            PivotStrategy::Random { seed: Some(7) },
            PivotStrategy::Custom(vec![0, 99, 4]),
        ];
        for strategy in strategies {
            let run = sort(&SAMPLE, &SortOptions::with_pivot(strategy.clone()));
            assert_eq!(final_array(&run), sorted(&SAMPLE), "{:?}", strategy);
        }
    }

    #[test]
    fn test_pivot_swap_recorded_when_not_last() {
        let run = sort(&[3.0, 1.0, 2.0], &SortOptions::with_pivot(PivotStrategy::First));
        let swap = run.steps.iter().find(|s| s.active_lines == vec![7]).unwrap();
        assert_eq!(swap.frame.swapped, vec![0, 2]);
        assert_eq!(swap.frame.array, vec![2.0, 1.0, 3.0]);

        let last = sort(&[3.0, 1.0, 2.0], &SortOptions::default());
        assert!(last.steps.iter().all(|s| s.active_lines != vec![7]));
    }

    #[test]
    fn test_partition_log_records_true_parents() {
        let run = sort(&SAMPLE, &SortOptions::default());
        let calls = &run.meta.partition_calls;
        for call in calls.iter().skip(1) {
            let parent = &calls[call.parent.unwrap()];
            assert!(parent.id < call.id);
            assert_eq!(call.depth, parent.depth + 1);
            assert!(parent.low <= call.low && call.high <= parent.high);
            assert!(call.high < parent.pivot_index || call.low > parent.pivot_index);
        }
    }

    #[test]
    fn test_partition_step_ranges_are_disjoint() {
        let run = sort(&SAMPLE, &SortOptions::with_pivot(PivotStrategy::First));
        let calls = &run.meta.partition_calls;
        for call in calls {
            assert!(call.first_step <= call.last_step);
            assert_eq!(run.steps[call.last_step].active_lines, vec![14, 15]);
            assert!(call.covers(call.first_step) && !call.covers(call.last_step + 1));
        }
        for pair in calls.windows(2) {
            assert!(pair[0].last_step < pair[1].first_step);
        }
        // every partition step belongs to exactly one call
        for step in &run.steps {
            let owners = calls.iter().filter(|c| c.covers(step.index)).count();
            let in_partition = step.active_lines.iter().any(|&l| l >= 6);
            assert_eq!(owners, usize::from(in_partition), "step {}", step.index);
        }
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        let options = SortOptions::with_pivot(PivotStrategy::Random { seed: Some(42) });
        assert_eq!(sort(&SAMPLE, &options), sort(&SAMPLE, &options));
    }

    #[test]
    fn test_median_of_three_picks_middle_value() {
        assert_eq!(median_of_three(&[1.0, 9.0, 5.0], 0, 2), 2);
        assert_eq!(median_of_three(&[5.0, 1.0, 9.0], 0, 2), 0);
        assert_eq!(median_of_three(&[1.0, 5.0, 9.0], 0, 2), 1);
    }

    #[test]
    fn test_parse_strategies() {
        assert_eq!("median".parse::<PivotStrategy>().unwrap(), PivotStrategy::MedianOfThree);
        assert_eq!(
            "custom:3, 1".parse::<PivotStrategy>().unwrap(),
            PivotStrategy::Custom(vec![3, 1])
        );
        assert!("custom:x".parse::<PivotStrategy>().is_err());
        assert!("middle".parse::<PivotStrategy>().is_err());
    }
}
