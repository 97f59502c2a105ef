//! Graph traversal engines over an ordered adjacency list
//!
//! Vertices are named by strings in the [`Graph`] but every frame refers to
//! them by index into the traversal's node universe. The universe is all keys
//! in insertion order, followed by neighbor names not seen as keys.

pub mod bfs;
pub mod dfs;

use super::{AlgoError, Meta, RunResult};
use crate::snapshot::{Frontier, GraphFrame, StepRecorder};
use rustc_hash::{FxHashMap, FxHashSet};

/// Directed adjacency list that remembers insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<(String, Vec<String>)>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Build from `(key, neighbors)` pairs; repeated keys merge their lists
    pub fn from_pairs<K, N, I>(pairs: I) -> Self
    where
        K: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = (K, Vec<N>)>,
    {
        let mut graph = Graph::new();
        for (key, neighbors) in pairs {
            graph.add_edges(key, neighbors);
        }
        graph
    }

    pub fn add_edges<K, N>(&mut self, key: K, neighbors: Vec<N>) -> &mut Self
    where
        K: Into<String>,
        N: Into<String>,
    {
        let key = key.into();
        let neighbors = neighbors.into_iter().map(Into::into);
        match self.adjacency.iter_mut().find(|(k, _)| *k == key) {
            Some((_, list)) => list.extend(neighbors),
            None => self.adjacency.push((key, neighbors.collect())),
        }
        self
    }

    /// Outgoing neighbors of `key`, in adjacency order
    pub fn neighbors(&self, key: &str) -> &[String] {
        self.adjacency
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.adjacency.iter().map(|(k, _)| k.as_str())
    }

    /// Every vertex name, keys first, without duplicates
    pub fn universe(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut nodes = Vec::new();
        let keys = self.adjacency.iter().map(|(k, _)| k);
        let neighbors = self.adjacency.iter().flat_map(|(_, list)| list.iter());
        for name in keys.chain(neighbors) {
            if seen.insert(name.as_str()) {
                nodes.push(name.clone());
            }
        }
        nodes
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Working state shared by BFS and DFS
pub(crate) struct GraphTracer {
    nodes: Vec<String>,
    adjacency: Vec<Vec<usize>>,
    order: Vec<usize>,
    counter: usize,
    visited: Vec<usize>,
    visited_set: FxHashSet<usize>,
    recorder: StepRecorder<GraphFrame>,
}

/// Result of preparing a traversal: either a tracer positioned at `start`, or
/// the finished trivial run for an empty graph
pub(crate) enum Prepared {
    Ready(GraphTracer, usize),
    Empty(RunResult<GraphFrame>),
}

impl GraphTracer {
    pub(crate) fn prepare(
        graph: &Graph,
        start: &str,
        empty_frontier: Frontier,
        pseudocode: &'static [&'static str],
        meta: Meta,
    ) -> Result<Prepared, AlgoError> {
        let nodes = graph.universe();
        if nodes.is_empty() {
            let frame = GraphFrame {
                nodes,
                order: Vec::new(),
                selected: Vec::new(),
                compared: Vec::new(),
                frontier: empty_frontier,
                visited: Vec::new(),
                current: None,
                neighbor: None,
            };
            return Ok(Prepared::Empty(RunResult::trivial(frame, pseudocode, meta)));
        }

        let index_of: FxHashMap<&str, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        let start_idx = *index_of
            .get(start)
            .ok_or_else(|| AlgoError::InvalidStartVertex {
                start: start.to_string(),
            })?;

        let adjacency = nodes
            .iter()
            .map(|name| {
                graph
                    .neighbors(name)
                    .iter()
                    .filter_map(|w| index_of.get(w.as_str()).copied())
                    .collect()
            })
            .collect();

        let len = nodes.len();
        Ok(Prepared::Ready(
            GraphTracer {
                nodes,
                adjacency,
                order: vec![0; len],
                counter: 0,
                visited: Vec::new(),
                visited_set: FxHashSet::default(),
                recorder: StepRecorder::new(),
            },
            start_idx,
        ))
    }

    pub(crate) fn neighbors(&self, v: usize) -> Vec<usize> {
        self.adjacency.get(v).cloned().unwrap_or_default()
    }

    pub(crate) fn is_visited(&self, v: usize) -> bool {
        self.visited_set.contains(&v)
    }

    /// Mark `v` visited and hand it the next order number
    pub(crate) fn visit(&mut self, v: usize) {
        if self.visited_set.insert(v) {
            self.visited.push(v);
            self.counter += 1;
            self.order[v] = self.counter;
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn record(
        &mut self,
        lines: &[usize],
        selected: Option<usize>,
        compared: Option<usize>,
        frontier: Frontier,
        current: Option<usize>,
        neighbor: Option<usize>,
    ) {
        let frame = GraphFrame {
            nodes: self.nodes.clone(),
            order: self.order.clone(),
            selected: selected.into_iter().collect(),
            compared: compared.into_iter().collect(),
            frontier,
            visited: self.visited.clone(),
            current,
            neighbor,
        };
        self.recorder.record(lines, frame);
    }

    pub(crate) fn finish(
        self,
        pseudocode: &'static [&'static str],
        meta: Meta,
    ) -> RunResult<GraphFrame> {
        RunResult::from_recorder(self.recorder, pseudocode, meta)
    }
}
