//! LSD radix sort, base 10
//!
//! Each pass is a stable counting sort on one decimal digit of `A[i] - lo`,
//! so negative input sorts without a separate sign pass. Values are floored
//! before the first step, like counting sort.

use super::{ArrayTracer, SortOptions};
use crate::algorithms::{Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};

pub const PSEUDOCODE: &[&str] = &[
    "radixSort(A)",
    "    lo ← min(A); key(x) = x - lo",
    "    m ← max key(x) over A",
    "    exp ← 1",
    "    while ⌊m / exp⌋ > 0",
    "        for each x in A: count[⌊key(x) / exp⌋ mod 10]++",
    "        prefix-sum count[0..9]",
    "        for i ← n-1 down to 0",
    "            d ← ⌊key(A[i]) / exp⌋ mod 10; count[d]--; output[count[d]] ← A[i]",
    "        copy output back into A",
    "        exp ← exp × 10",
];

pub const META: Meta = Meta::fixed(
    "O(d·(n + 10))",
    "O(d·(n + 10))",
    "O(d·(n + 10))",
    "O(n + 10)",
    "Stable, non-comparative. d is the digit count of the largest key. Values are floored to integers and offset by the minimum, so negatives are fine.",
);

const BASE: u64 = 10;

pub fn sort(input: &[f64], _options: &SortOptions) -> RunResult<ArrayFrame> {
    let mut t = ArrayTracer::integral(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, META);
    }
    let n = t.len();

    t.mark(&[1], Marks::none());

    let mut lo_idx = 0;
    for i in 1..n {
        if t.key(i) < t.key(lo_idx) {
            lo_idx = i;
        }
    }
    let lo = t.key(lo_idx);
    let max_key = (0..n).map(|i| t.key(i).abs_diff(lo)).max().unwrap_or(0);
    t.mark(&[2, 3, 4], Marks::none().select(&[lo_idx]));

    let mut exp: u64 = 1;
    loop {
        t.mark(&[5], Marks::none());
        if max_key / exp == 0 {
            break;
        }
        digit_pass(&mut t, lo, exp);
        match exp.checked_mul(BASE) {
            Some(next) => exp = next,
            None => break,
        }
        t.mark(&[11], Marks::none());
    }

    t.mark(&[1], Marks::none());
    t.finish(PSEUDOCODE, META)
}

fn digit_pass(t: &mut ArrayTracer, lo: i64, exp: u64) {
    let n = t.len();
    let digits: Vec<usize> = (0..n)
        .map(|i| (t.key(i).abs_diff(lo) / exp % BASE) as usize)
        .collect();
    let mut count = [0usize; BASE as usize];

    for (i, &d) in digits.iter().enumerate() {
        count[d] += 1;
        t.mark(&[6], Marks::none().select(&[i]));
    }

    for d in 1..count.len() {
        count[d] += count[d - 1];
    }
    t.mark(&[7], Marks::none());

    let mut output = vec![0.0; n];
    for i in (0..n).rev() {
        let d = digits[i];
        count[d] -= 1;
        output[count[d]] = t.arr[i];
        t.mark(&[8, 9], Marks::none().select(&[count[d]]).swap(&[i]));
    }

    for (pos, value) in output.into_iter().enumerate() {
        t.arr[pos] = value;
        t.mark(&[10], Marks::none().select(&[pos]).swap(&[pos]));
    }
    tracing::trace!(exp, "radix pass");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::*;

    const SAMPLE: [f64; 8] = [170.0, 45.0, 75.0, 90.0, 2.0, 802.0, 24.0, 66.0];

    fn passes(run: &RunResult<ArrayFrame>) -> usize {
        run.steps.iter().filter(|s| s.active_lines == vec![7]).count()
    }

    #[test]
    fn test_sorts_sample_in_three_passes() {
        let run = sort(&SAMPLE, &SortOptions::default());
        assert_eq!(final_array(&run), sorted(&SAMPLE));
        // keys are offset by the minimum (2), so the largest is 800
        assert_eq!(passes(&run), 3);
        assert!(lines_in_range(&run));
    }

    #[test]
    fn test_first_pass_orders_by_last_digit() {
        let run = sort(&[21.0, 13.0, 32.0], &SortOptions::default());
        let after_first = run
            .steps
            .iter()
            .filter(|s| s.active_lines == vec![10])
            .nth(2)
            .unwrap();
        // keys 8, 0, 19 → last digits 8, 0, 9
        assert_eq!(after_first.frame.array, vec![13.0, 21.0, 32.0]);
        assert_eq!(passes(&run), 2);
        assert_eq!(final_array(&run), vec![13.0, 21.0, 32.0]);
    }

    #[test]
    fn test_negatives_and_fractions() {
        let run = sort(&[-5.5, 3.0, -12.0, 0.9, 3.0], &SortOptions::default());
        assert_eq!(final_array(&run), vec![-12.0, -6.0, 0.0, 3.0, 3.0]);
    }

    #[test]
    fn test_equal_keys_need_no_pass() {
        let run = sort(&[4.0, 4.0, 4.0], &SortOptions::default());
        assert_eq!(passes(&run), 0);
        assert!(run.steps.iter().all(|s| s.frame.swapped.is_empty()));
        assert_eq!(final_array(&run), vec![4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_extremes_clamp_to_integer_range() {
        let run = sort(&[1e300, -1e300, 0.0, 7.0], &SortOptions::default());
        assert_eq!(
            final_array(&run),
            vec![i64::MIN as f64, 0.0, 7.0, i64::MAX as f64]
        );
    }
}
