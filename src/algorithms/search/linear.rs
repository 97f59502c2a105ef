//! Linear search over the chained-list view of the array
//!
//! Node `i` links to node `i + 1`; the head is node 0 and the last node links
//! to nothing. Each node visited records a compare step, then either the
//! terminal found step or an advance step.

use super::check_target;
use crate::algorithms::{normalize, AlgoError, Meta, RunResult};
use crate::snapshot::{Outcome, SearchCursor, SearchFrame, StepRecorder};

pub const PSEUDOCODE: &[&str] = &[
    "struct Node* linearSearch(struct Node* head, int target)",
    "    struct Node* current = head;",
    "    int position = 0;",
    "    while (current != NULL)",
    "        if (current->data == target)",
    "            return current;  // Found",
    "        current = current->next;",
    "        position++;",
    "    return NULL;  // Not found",
];

pub const META: Meta = Meta::fixed(
    "O(1)",
    "O(n)",
    "O(n)",
    "O(1)",
    "Sequential search through a linked list. Works on unsorted data. Each step follows one next pointer.",
);

fn cursor(current: Option<usize>, compare: Option<usize>) -> SearchCursor {
    SearchCursor::Linear { current, compare }
}

pub fn search(input: &[f64], target: f64) -> Result<RunResult<SearchFrame>, AlgoError> {
    check_target(target)?;
    let nodes = normalize(input);
    if nodes.is_empty() {
        let frame = SearchFrame::capture(&[], target, cursor(None, None));
        return Ok(RunResult::trivial(frame, PSEUDOCODE, META));
    }

    let mut recorder = StepRecorder::new();
    recorder.record(&[1, 2], SearchFrame::capture(&nodes, target, cursor(None, None)));

    let mut current = Some(0);
    while let Some(idx) = current {
        recorder.record(
            &[3, 4],
            SearchFrame::capture(&nodes, target, cursor(Some(idx), Some(idx))),
        );

        if nodes[idx] == target {
            recorder.record(
                &[5, 6],
                SearchFrame::capture(&nodes, target, cursor(Some(idx), Some(idx)))
                    .with_outcome(Outcome::Found(idx)),
            );
            return Ok(RunResult::from_recorder(recorder, PSEUDOCODE, META));
        }

        recorder.record(
            &[7, 8],
            SearchFrame::capture(&nodes, target, cursor(Some(idx), None)),
        );
        current = (idx + 1 < nodes.len()).then_some(idx + 1);
    }

    recorder.record(
        &[9],
        SearchFrame::capture(&nodes, target, cursor(None, None)).with_outcome(Outcome::NotFound),
    );
    Ok(RunResult::from_recorder(recorder, PSEUDOCODE, META))
}
