//! Step-recording algorithm engines
//!
//! This module provides the engines and the entry points the player calls:
//! - [`sorting`]: bubble, insertion, selection, merge, quick, heap, counting
//!   and radix sort
//! - [`search`]: linear and binary search
//! - [`graph`]: BFS and DFS over an ordered adjacency list
//! - [`bst`]: long-lived binary search tree sessions
//! - [`registry`]: kind → engine function table, built once at startup
//! - [`errors`]: error types
//!
//! # Execution Model
//!
//! Every engine is a plain function that copies its input into local working
//! state, runs to completion, and returns a [`RunResult`] holding the full step
//! list. There is no streaming and no cancellation: inputs are expected to be
//! visualization-sized.
//!
//! The BST is the exception. A [`TreeSession`] keeps its tree and its step
//! history between calls, and each `insert`/`search` appends to that history.

pub mod bst;
pub mod errors;
pub mod graph;
pub mod registry;
pub mod search;
pub mod sorting;

pub use bst::{NodeIdAllocator, TreeSession, DEFAULT_SEED};
pub use errors::{AlgoError, ErrorKind};
pub use graph::Graph;
pub use registry::Registry;
pub use search::default_target;
pub use sorting::{PartitionCall, PivotStrategy, SortOptions};

use crate::snapshot::{ArrayFrame, Footprint, GraphFrame, SearchFrame, Step, StepRecorder};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Asymptotic running time of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub avg: &'static str,
    pub worst: &'static str,
}

/// Static documentation attached to a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meta {
    pub complexity: Complexity,
    pub space: &'static str,
    pub notes: &'static str,
    /// Quick sort only: one entry per partition call, in call order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partition_calls: Vec<PartitionCall>,
}

impl Meta {
    pub const fn fixed(
        best: &'static str,
        avg: &'static str,
        worst: &'static str,
        space: &'static str,
        notes: &'static str,
    ) -> Self {
        Meta {
            complexity: Complexity { best, avg, worst },
            space,
            notes,
            partition_calls: Vec::new(),
        }
    }
}

/// Full output of one algorithm invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult<F> {
    pub steps: Vec<Step<F>>,
    pub pseudocode: &'static [&'static str],
    pub meta: Meta,
}

impl<F> RunResult<F> {
    pub fn last_step(&self) -> Option<&Step<F>> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<F: Footprint> RunResult<F> {
    pub(crate) fn from_recorder(
        recorder: StepRecorder<F>,
        pseudocode: &'static [&'static str],
        meta: Meta,
    ) -> Self {
        RunResult {
            steps: recorder.into_steps(),
            pseudocode,
            meta,
        }
    }

    /// Single step with no active lines, used for empty input
    pub(crate) fn trivial(frame: F, pseudocode: &'static [&'static str], meta: Meta) -> Self {
        let mut recorder = StepRecorder::new();
        recorder.record(&[], frame);
        Self::from_recorder(recorder, pseudocode, meta)
    }
}

/// Drop non-finite values; the rest keeps its order
pub fn normalize(numbers: &[f64]) -> Vec<f64> {
    numbers.iter().copied().filter(|n| n.is_finite()).collect()
}

macro_rules! algorithm_kind {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = AlgoError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.name() == wanted)
                    .ok_or_else(|| AlgoError::UnknownAlgorithm { name: s.to_string() })
            }
        }
    };
}

algorithm_kind!(
    /// Sorting engines
    SortKind {
        Bubble => "bubble",
        Insertion => "insertion",
        Selection => "selection",
        Merge => "merge",
        Quick => "quick",
        Heap => "heap",
        Counting => "counting",
        Radix => "radix",
    }
);

algorithm_kind!(
    /// Searching engines
    SearchKind {
        Linear => "linear",
        Binary => "binary",
    }
);

algorithm_kind!(
    /// Graph traversal engines
    TraversalKind {
        Bfs => "bfs",
        Dfs => "dfs",
    }
);

/// Run a sorting engine with default options
pub fn run_sort(kind: SortKind, numbers: &[f64]) -> RunResult<ArrayFrame> {
    run_sort_with(kind, numbers, &SortOptions::default())
}

pub fn run_sort_with(
    kind: SortKind,
    numbers: &[f64],
    options: &SortOptions,
) -> RunResult<ArrayFrame> {
    let result = kind.engine()(numbers, options);
    tracing::debug!(
        algorithm = %kind,
        input_len = numbers.len(),
        steps = result.steps.len(),
        "sort run recorded"
    );
    result
}

/// Run a searching engine
pub fn run_search(
    kind: SearchKind,
    numbers: &[f64],
    target: f64,
) -> Result<RunResult<SearchFrame>, AlgoError> {
    let result = kind.engine()(numbers, target)?;
    tracing::debug!(
        algorithm = %kind,
        input_len = numbers.len(),
        target,
        steps = result.steps.len(),
        "search run recorded"
    );
    Ok(result)
}

/// Run a graph traversal from `start`
pub fn run_graph_traversal(
    kind: TraversalKind,
    graph: &Graph,
    start: &str,
) -> Result<RunResult<GraphFrame>, AlgoError> {
    let result = kind.engine()(graph, start)?;
    tracing::debug!(
        algorithm = %kind,
        vertices = graph.universe().len(),
        start,
        steps = result.steps.len(),
        "traversal run recorded"
    );
    Ok(result)
}

/// Open a BST session seeded with `initial_keys` (inserted in order)
pub fn create_tree_session(initial_keys: &[i64]) -> TreeSession {
    TreeSession::new(initial_keys)
}
