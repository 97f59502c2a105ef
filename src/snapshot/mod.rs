//! Step recording for replayable algorithm runs
//!
//! Every engine owns a [`StepRecorder`] for the duration of one invocation and
//! calls [`StepRecorder::record`] at each checkpoint. A recorded [`Step`] owns
//! its frame outright: engines build frames from copies of their working state,
//! so later mutation of that state can never reach back into history.
//!
//! # Frames
//!
//! Each algorithm family records its own frame type:
//! - [`ArrayFrame`]: sorting (array plus selected/compared/swapped roles)
//! - [`SearchFrame`]: linear and binary search cursors
//! - [`GraphFrame`]: BFS/DFS frontier and visitation order
//! - [`TreeFrame`]: BST snapshot plus highlighted operation

pub mod frames;

pub use frames::{
    ArrayFrame, Dir, Frontier, GraphFrame, Marks, NodeId, Outcome, SearchCursor, SearchFrame, Segment,
    TreeFrame, TreeHighlight, TreeNode, TreeOp, Window,
};

use serde::Serialize;

/// Rough byte footprint of a frame, used for history accounting
pub trait Footprint {
    fn estimated_size(&self) -> usize;
}

/// One immutable snapshot of algorithm state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<F> {
    /// Position in the run, assigned by the recorder
    pub index: usize,
    /// 1-based pseudocode lines executing at this instant
    pub active_lines: Vec<usize>,
    pub frame: F,
}

impl<F> Step<F> {
    /// Check whether a pseudocode line is active in this step
    pub fn is_active(&self, line: usize) -> bool {
        self.active_lines.contains(&line)
    }
}

/// Append-only history of steps for one run (or one BST session)
#[derive(Debug, Clone)]
pub struct StepRecorder<F> {
    steps: Vec<Step<F>>,
    current_memory: usize,
}

impl<F: Footprint> StepRecorder<F> {
    pub fn new() -> Self {
        StepRecorder {
            steps: Vec::new(),
            current_memory: 0,
        }
    }

    /// Append a step. Never fails; call order is sequence order.
    pub fn record(&mut self, active_lines: &[usize], frame: F) {
        let step = Step {
            index: self.steps.len(),
            active_lines: active_lines.to_vec(),
            frame,
        };
        self.current_memory += step.frame.estimated_size() + step.active_lines.len() * 8;
        self.steps.push(step);
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step<F>> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step<F>> {
        self.steps.last()
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step<F>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step<F>> {
        self.steps
    }

    /// Drop all recorded history
    pub fn clear(&mut self) {
        self.steps.clear();
        self.current_memory = 0;
    }

    /// Get current memory usage estimate in bytes
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}

impl<F: Footprint> Default for StepRecorder<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_sequence_indices() {
        let mut recorder = StepRecorder::new();
        recorder.record(&[1], ArrayFrame::capture(&[3.0, 1.0], Marks::none()));
        recorder.record(&[2, 3], ArrayFrame::capture(&[1.0, 3.0], Marks::none().swap(&[0, 1])));

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.get(0).unwrap().index, 0);
        assert_eq!(recorder.get(1).unwrap().index, 1);
        assert!(recorder.get(1).unwrap().is_active(3));
        assert!(recorder.memory_usage() > 0);
    }

    #[test]
    fn test_captured_array_is_detached() {
        let mut working = vec![5.0, 4.0, 3.0];
        let mut recorder = StepRecorder::new();
        recorder.record(&[1], ArrayFrame::capture(&working, Marks::none()));
        working.swap(0, 2);
        recorder.record(&[2], ArrayFrame::capture(&working, Marks::none()));

        assert_eq!(recorder.get(0).unwrap().frame.array, vec![5.0, 4.0, 3.0]);
        assert_eq!(recorder.get(1).unwrap().frame.array, vec![3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_clear_resets_accounting() {
        let mut recorder = StepRecorder::new();
        recorder.record(&[1], ArrayFrame::capture(&[1.0], Marks::none()));
        recorder.clear();

        assert!(recorder.is_empty());
        assert_eq!(recorder.memory_usage(), 0);
    }
}
