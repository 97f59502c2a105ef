//! # Introduction
//!
//! algotrace runs classic algorithms to completion while recording an
//! immutable snapshot of their state at every checkpoint. Each snapshot names
//! the pseudocode lines executing at that instant. The recorded history is
//! then replayed forward and backward through a terminal player built with
//! [ratatui](https://docs.rs/ratatui), or exported as JSON.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Engine → StepRecorder → RunResult → Playback → TUI / JSON
//! ```
//!
//! 1. [`input`]: parses numbers, BST keys and adjacency lists from text.
//! 2. [`algorithms`]: the engines (sorting, searching, BFS/DFS, BST sessions)
//!    and the [`algorithms::Registry`] that maps kinds to engines.
//! 3. [`snapshot`]: [`snapshot::Step`], the per-family frame types, and the
//!    append-only [`snapshot::StepRecorder`].
//! 4. [`trace`]: one recorded run of any family, with JSON export.
//! 5. [`playback`]: cursor and auto-play clock over a step sequence.
//! 6. [`ui`]: ratatui-based player; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Sorting: bubble, insertion, selection, merge, quick (pluggable pivot), heap,
//! counting, radix.
//! Searching: linear (over a linked-list view), binary.
//! Graphs: BFS, DFS. Trees: unbalanced BST insert and search.

pub mod algorithms;
pub mod config;
pub mod input;
pub mod playback;
pub mod snapshot;
pub mod trace;
pub mod ui;
