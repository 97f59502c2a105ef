//! Sorting engines
//!
//! Every engine takes `&[f64]` plus [`SortOptions`] and returns a
//! [`RunResult`] of [`ArrayFrame`]s. Input is normalized (non-finite values
//! dropped) into a private working array; the caller's slice is never touched.
//!
//! Checkpoints shared by all engines:
//! - before each outer iteration (pass announce)
//! - before each comparison (`compared`)
//! - right after each swap or write (`swapped`), as a separate step
//! - at termination

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

pub use quick::{PartitionCall, PivotStrategy};

use super::{normalize, Meta, RunResult};
use crate::snapshot::{ArrayFrame, Marks, StepRecorder};

/// Engine options. Only quick sort reads `pivot`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortOptions {
    pub pivot: PivotStrategy,
}

impl SortOptions {
    pub fn with_pivot(pivot: PivotStrategy) -> Self {
        SortOptions { pivot }
    }
}

/// Working array plus the recorder that snapshots it
pub(crate) struct ArrayTracer {
    pub arr: Vec<f64>,
    recorder: StepRecorder<ArrayFrame>,
}

impl ArrayTracer {
    pub fn new(input: &[f64]) -> Self {
        ArrayTracer {
            arr: normalize(input),
            recorder: StepRecorder::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// Index the next recorded step will get
    pub fn next_step(&self) -> usize {
        self.recorder.len()
    }

    /// Record the current array with role markers
    pub fn mark(&mut self, lines: &[usize], marks: Marks) {
        self.recorder
            .record(lines, ArrayFrame::capture(&self.arr, marks));
    }

    pub fn finish(self, pseudocode: &'static [&'static str], meta: Meta) -> RunResult<ArrayFrame> {
        RunResult::from_recorder(self.recorder, pseudocode, meta)
    }

    /// Working copy for the integer-keyed sorts. Values are floored and
    /// clamped to the `i64` range, so equal keys always mean equal values.
    pub fn integral(input: &[f64]) -> Self {
        let floored: Vec<f64> = normalize(input)
            .into_iter()
            .map(|v| v.floor().clamp(i64::MIN as f64, i64::MAX as f64))
            .collect();
        ArrayTracer::new(&floored)
    }

    pub fn key(&self, index: usize) -> i64 {
        self.arr[index] as i64
    }

    pub fn trivial(pseudocode: &'static [&'static str], meta: Meta) -> RunResult<ArrayFrame> {
        RunResult::trivial(ArrayFrame::capture(&[], Marks::none()), pseudocode, meta)
    }
}

/// Indices `low..=high`, for segment-wide selection
pub(crate) fn span(low: usize, high: usize) -> Vec<usize> {
    (low..=high).collect()
}
