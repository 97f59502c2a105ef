//! Explicit engine table
//!
//! [`Registry::standard`] maps every algorithm kind to its engine function
//! once, at startup. The player receives the registry by value instead of
//! looking engines up through global state.

use super::graph::{bfs, dfs, Graph};
use super::search::{binary, linear};
use super::sorting::{self, SortOptions};
use super::{AlgoError, RunResult, SearchKind, SortKind, TraversalKind};
use crate::snapshot::{ArrayFrame, GraphFrame, SearchFrame};
use rustc_hash::FxHashMap;

pub type SortEngine = fn(&[f64], &SortOptions) -> RunResult<ArrayFrame>;
pub type SearchEngine = fn(&[f64], f64) -> Result<RunResult<SearchFrame>, AlgoError>;
pub type TraversalEngine = fn(&Graph, &str) -> Result<RunResult<GraphFrame>, AlgoError>;

impl SortKind {
    pub fn engine(self) -> SortEngine {
        match self {
            SortKind::Bubble => sorting::bubble::sort,
            SortKind::Insertion => sorting::insertion::sort,
            SortKind::Selection => sorting::selection::sort,
            SortKind::Merge => sorting::merge::sort,
            SortKind::Quick => sorting::quick::sort,
            SortKind::Heap => sorting::heap::sort,
            SortKind::Counting => sorting::counting::sort,
            SortKind::Radix => sorting::radix::sort,
        }
    }
}

impl SearchKind {
    pub fn engine(self) -> SearchEngine {
        match self {
            SearchKind::Linear => linear::search,
            SearchKind::Binary => binary::search,
        }
    }
}

impl TraversalKind {
    pub fn engine(self) -> TraversalEngine {
        match self {
            TraversalKind::Bfs => bfs::traverse,
            TraversalKind::Dfs => dfs::traverse,
        }
    }
}

/// Kind → engine lookup table
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sorts: FxHashMap<SortKind, SortEngine>,
    searches: FxHashMap<SearchKind, SearchEngine>,
    traversals: FxHashMap<TraversalKind, TraversalEngine>,
}

impl Registry {
    /// Registry with no engines
    pub fn empty() -> Self {
        Registry::default()
    }

    /// Registry with every built-in engine
    pub fn standard() -> Self {
        let mut registry = Registry::empty();
        for &kind in SortKind::ALL {
            registry.register_sort(kind, kind.engine());
        }
        for &kind in SearchKind::ALL {
            registry.register_search(kind, kind.engine());
        }
        for &kind in TraversalKind::ALL {
            registry.register_traversal(kind, kind.engine());
        }
        registry
    }

    pub fn register_sort(&mut self, kind: SortKind, engine: SortEngine) {
        self.sorts.insert(kind, engine);
    }

    pub fn register_search(&mut self, kind: SearchKind, engine: SearchEngine) {
        self.searches.insert(kind, engine);
    }

    pub fn register_traversal(&mut self, kind: TraversalKind, engine: TraversalEngine) {
        self.traversals.insert(kind, engine);
    }

    pub fn sort(
        &self,
        kind: SortKind,
        numbers: &[f64],
        options: &SortOptions,
    ) -> Result<RunResult<ArrayFrame>, AlgoError> {
        let engine = self.sorts.get(&kind).ok_or_else(|| unregistered(kind.name()))?;
        Ok(engine(numbers, options))
    }

    pub fn search(
        &self,
        kind: SearchKind,
        numbers: &[f64],
        target: f64,
    ) -> Result<RunResult<SearchFrame>, AlgoError> {
        let engine = self
            .searches
            .get(&kind)
            .ok_or_else(|| unregistered(kind.name()))?;
        engine(numbers, target)
    }

    pub fn traverse(
        &self,
        kind: TraversalKind,
        graph: &Graph,
        start: &str,
    ) -> Result<RunResult<GraphFrame>, AlgoError> {
        let engine = self
            .traversals
            .get(&kind)
            .ok_or_else(|| unregistered(kind.name()))?;
        engine(graph, start)
    }

    /// Registered sort kinds, in declaration order
    pub fn sort_kinds(&self) -> Vec<SortKind> {
        SortKind::ALL
            .iter()
            .copied()
            .filter(|k| self.sorts.contains_key(k))
            .collect()
    }

    pub fn search_kinds(&self) -> Vec<SearchKind> {
        SearchKind::ALL
            .iter()
            .copied()
            .filter(|k| self.searches.contains_key(k))
            .collect()
    }

    pub fn traversal_kinds(&self) -> Vec<TraversalKind> {
        TraversalKind::ALL
            .iter()
            .copied()
            .filter(|k| self.traversals.contains_key(k))
            .collect()
    }
}

fn unregistered(name: &str) -> AlgoError {
    AlgoError::UnknownAlgorithm {
        name: name.to_string(),
    }
}
