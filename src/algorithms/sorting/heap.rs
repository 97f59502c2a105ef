//! Heap sort over an implicit max-heap
//!
//! The unsorted heap region is reported as `segment`; everything right of it
//! is already in final position.

use super::{ArrayTracer, SortOptions};
use crate::algorithms::{Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks};

pub const PSEUDOCODE: &[&str] = &[
    "heapSort(A)",
    "    for i ← ⌊n/2⌋-1 down to 0",
    "        siftDown(A, i, n)",
    "    for end ← n-1 down to 1",
    "        swap A[0], A[end]",
    "        siftDown(A, 0, end)",
    "siftDown(A, i, size)",
    "    largest ← i; l ← 2i+1; r ← 2i+2",
    "    if l < size and A[l] > A[largest] then largest ← l",
    "    if r < size and A[r] > A[largest] then largest ← r",
    "    if largest ≠ i",
    "        swap A[i], A[largest]",
    "        siftDown(A, largest, size)",
];

pub const META: Meta = Meta::fixed(
    "O(n log n)",
    "O(n log n)",
    "O(n log n)",
    "O(1)",
    "In-place, unstable. Builds a max-heap bottom-up, then repeatedly moves the maximum to the end.",
);

pub fn sort(input: &[f64], _options: &SortOptions) -> RunResult<ArrayFrame> {
    let mut t = ArrayTracer::new(input);
    if t.is_empty() {
        return ArrayTracer::trivial(PSEUDOCODE, META);
    }
    let n = t.len();

    t.mark(&[1], Marks::none());

    for i in (0..n / 2).rev() {
        t.mark(&[2, 3], Marks::none().select(&[i]).within(0, n - 1));
        sift_down(&mut t, i, n);
    }

    for end in (1..n).rev() {
        t.arr.swap(0, end);
        t.mark(&[4, 5], Marks::none().swap(&[0, end]).within(0, end - 1));
        sift_down(&mut t, 0, end);
    }

    t.mark(&[1], Marks::none());
    t.finish(PSEUDOCODE, META)
}

fn sift_down(t: &mut ArrayTracer, mut i: usize, size: usize) {
    let seg = Marks::none().within(0, size - 1);
    loop {
        let (left, right) = (2 * i + 1, 2 * i + 2);
        let children: Vec<usize> = [left, right].into_iter().filter(|&c| c < size).collect();
        let mut compared = vec![i];
        compared.extend(&children);
        t.mark(&[7, 8, 9, 10], seg.clone().select(&[i]).compare(&compared));

        let mut largest = i;
        for c in children {
            if t.arr[c] > t.arr[largest] {
                largest = c;
            }
        }

        if largest == i {
            t.mark(&[11], seg.clone().select(&[i]));
            return;
        }

        t.arr.swap(i, largest);
        t.mark(&[11, 12], seg.clone().select(&[largest]).swap(&[i, largest]));
        i = largest;
        t.mark(&[13], seg.clone().select(&[i]));
    }
}
