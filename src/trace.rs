//! A recorded run of any algorithm family, ready for playback or export

use crate::algorithms::{
    default_target, AlgoError, Meta, PivotStrategy, Registry, RunResult, SearchKind, SortKind,
    SortOptions, TraversalKind, TreeSession, DEFAULT_SEED,
};
use crate::config::{ArrayInput, Command, DEFAULT_RANDOM_LEN};
use crate::input;
use crate::snapshot::{ArrayFrame, GraphFrame, SearchFrame};
use serde::Serialize;

#[derive(Debug, Clone)]
pub enum Trace {
    Sort {
        kind: SortKind,
        run: RunResult<ArrayFrame>,
    },
    Search {
        kind: SearchKind,
        run: RunResult<SearchFrame>,
    },
    Graph {
        kind: TraversalKind,
        run: RunResult<GraphFrame>,
    },
    Tree(TreeSession),
}

#[derive(Serialize)]
struct Export<'a, F> {
    algorithm: &'a str,
    #[serde(flatten)]
    run: &'a RunResult<F>,
}

impl Trace {
    /// Resolve the subcommand's input and record the run
    pub fn record(command: &Command, registry: &Registry) -> Result<Trace, AlgoError> {
        match command {
            Command::Sort { kind, input, pivot } => {
                let numbers = array_input(input);
                let options = SortOptions::with_pivot(seed_pivot(pivot.clone(), input));
                let run = registry.sort(*kind, &numbers, &options)?;
                tracing::debug!(algorithm = %kind, steps = run.len(), "sort trace recorded");
                Ok(Trace::Sort { kind: *kind, run })
            }
            Command::Search { kind, input, target } => {
                let numbers = array_input(input);
                let target = target.unwrap_or_else(|| default_target(&numbers));
                let run = registry.search(*kind, &numbers, target)?;
                tracing::debug!(algorithm = %kind, target, steps = run.len(), "search trace recorded");
                Ok(Trace::Search { kind: *kind, run })
            }
            Command::Graph { kind, graph, start } => {
                let graph = input::parse_graph(graph)?;
                let run = registry.traverse(*kind, &graph, start.trim())?;
                tracing::debug!(algorithm = %kind, start = %start, steps = run.len(), "traversal trace recorded");
                Ok(Trace::Graph { kind: *kind, run })
            }
            Command::Tree { keys, insert, search } => {
                let keys = match keys {
                    Some(text) => input::parse_keys(text)?,
                    None => DEFAULT_SEED.to_vec(),
                };
                let mut session = TreeSession::new(&keys);
                for &key in insert {
                    session.insert(key);
                }
                for &key in search {
                    session.search(key);
                }
                tracing::debug!(size = session.size(), steps = session.len(), "tree session opened");
                Ok(Trace::Tree(session))
            }
        }
    }

    pub fn title(&self) -> String {
        match self {
            Trace::Sort { kind, .. } => format!("{} sort", kind),
            Trace::Search { kind, .. } => format!("{} search", kind),
            Trace::Graph { kind, .. } => kind.name().to_uppercase(),
            Trace::Tree(_) => "binary search tree".to_string(),
        }
    }

    /// Number of recorded steps
    pub fn len(&self) -> usize {
        match self {
            Trace::Sort { run, .. } => run.len(),
            Trace::Search { run, .. } => run.len(),
            Trace::Graph { run, .. } => run.len(),
            Trace::Tree(session) => session.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn pseudocode(&self) -> &'static [&'static str] {
        match self {
            Trace::Sort { run, .. } => run.pseudocode,
            Trace::Search { run, .. } => run.pseudocode,
            Trace::Graph { run, .. } => run.pseudocode,
            Trace::Tree(session) => session.pseudocode(),
        }
    }

    pub fn meta(&self) -> Meta {
        match self {
            Trace::Sort { run, .. } => run.meta.clone(),
            Trace::Search { run, .. } => run.meta.clone(),
            Trace::Graph { run, .. } => run.meta.clone(),
            Trace::Tree(session) => session.meta(),
        }
    }

    /// Active pseudocode lines of step `index`
    pub fn active_lines(&self, index: usize) -> &[usize] {
        let lines = match self {
            Trace::Sort { run, .. } => run.steps.get(index).map(|s| &s.active_lines),
            Trace::Search { run, .. } => run.steps.get(index).map(|s| &s.active_lines),
            Trace::Graph { run, .. } => run.steps.get(index).map(|s| &s.active_lines),
            Trace::Tree(session) => session.steps().get(index).map(|s| &s.active_lines),
        };
        lines.map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tree_session_mut(&mut self) -> Option<&mut TreeSession> {
        match self {
            Trace::Tree(session) => Some(session),
            _ => None,
        }
    }

    /// Pretty-printed JSON of the whole run
    pub fn to_json(&self) -> serde_json::Result<String> {
        let title = self.title();
        match self {
            Trace::Sort { run, .. } => export(&title, run),
            Trace::Search { run, .. } => export(&title, run),
            Trace::Graph { run, .. } => export(&title, run),
            Trace::Tree(session) => export(&title, &session.to_run_result()),
        }
    }
}

fn export<F: Serialize>(algorithm: &str, run: &RunResult<F>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Export { algorithm, run })
}

fn array_input(input: &ArrayInput) -> Vec<f64> {
    match (&input.numbers, input.random) {
        (Some(text), _) => input::parse_numbers(text),
        (None, count) => {
            input::random_numbers(count.unwrap_or(DEFAULT_RANDOM_LEN), &mut input.rng())
        }
    }
}

/// An unseeded random pivot picks up `--seed` when one was given
fn seed_pivot(pivot: PivotStrategy, input: &ArrayInput) -> PivotStrategy {
    match (pivot, input.seed) {
        (PivotStrategy::Random { seed: None }, Some(seed)) => PivotStrategy::Random { seed: Some(seed) },
        (pivot, _) => pivot,
    }
}
