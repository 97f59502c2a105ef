//! Command-line configuration
//!
//! [`Cli`] is parsed once in `main`; the player only ever sees the resolved
//! [`PlayerConfig`] and the [`Trace`](crate::trace::Trace) built from the
//! chosen subcommand.

use crate::algorithms::{PivotStrategy, SearchKind, SortKind, TraversalKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Graph used when `graph` is run without `--graph`
pub const DEMO_GRAPH: &str = "A:B,C; B:D,E; C:F; D:; E:F; F:";

/// Array length used when neither `--numbers` nor `--random` is given
pub const DEFAULT_RANDOM_LEN: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "algotrace")]
#[command(about = "Step through classic algorithms one recorded snapshot at a time")]
#[command(version)]
pub struct Cli {
    /// Print the recorded run as JSON instead of opening the player
    #[arg(long, global = true)]
    pub json: bool,

    /// Auto-play interval in milliseconds
    #[arg(long, global = true, default_value_t = 500, value_name = "MS")]
    pub speed: u64,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Record a sorting run
    Sort {
        /// bubble, insertion, selection, merge, quick, heap, counting or radix
        kind: SortKind,

        #[command(flatten)]
        input: ArrayInput,

        /// Quick sort pivot: last, first, median, random or custom:i,j,...
        #[arg(long, default_value = "last")]
        pivot: PivotStrategy,
    },

    /// Record a search run
    Search {
        /// linear or binary
        kind: SearchKind,

        #[command(flatten)]
        input: ArrayInput,

        /// Value to look for (defaults to the middle element)
        #[arg(long, allow_negative_numbers = true)]
        target: Option<f64>,
    },

    /// Record a graph traversal
    Graph {
        /// bfs or dfs
        kind: TraversalKind,

        /// Adjacency list, e.g. "A:B,C; B:D"
        #[arg(long, default_value = DEMO_GRAPH)]
        graph: String,

        /// Start vertex
        #[arg(long, default_value = "A")]
        start: String,
    },

    /// Open a binary search tree session
    Tree {
        /// Initial keys, inserted in order (defaults to 8,3,10,1,6,14,4,7,13)
        #[arg(long)]
        keys: Option<String>,

        /// Insert a key after seeding; repeatable
        #[arg(long, allow_negative_numbers = true)]
        insert: Vec<i64>,

        /// Search for a key after seeding; repeatable
        #[arg(long, allow_negative_numbers = true)]
        search: Vec<i64>,
    },
}

/// Where the array comes from
#[derive(Debug, Clone, clap::Args)]
pub struct ArrayInput {
    /// Comma or space separated numbers
    #[arg(long, conflicts_with = "random")]
    pub numbers: Option<String>,

    /// Generate this many random values in 1..=99
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for random values and the random pivot
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ArrayInput {
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}

/// Settings the terminal player runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    pub speed: Duration,
    pub json: bool,
    pub log_file: Option<PathBuf>,
}

impl PlayerConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        PlayerConfig {
            speed: Duration::from_millis(cli.speed.max(1)),
            json: cli.json,
            log_file: cli.log_file.clone(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            speed: Duration::from_millis(500),
            json: false,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sort_command_parses() {
        let cli = Cli::try_parse_from([
            "algotrace", "--speed", "100", "sort", "quick", "--numbers", "3,1,2", "--pivot",
            "median",
        ])
        .unwrap();
        let config = PlayerConfig::from_cli(&cli);
        assert_eq!(config.speed, Duration::from_millis(100));
        match cli.command {
            Command::Sort { kind, input, pivot } => {
                assert_eq!(kind, SortKind::Quick);
                assert_eq!(input.numbers.as_deref(), Some("3,1,2"));
                assert_eq!(pivot, PivotStrategy::MedianOfThree);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(Cli::try_parse_from(["algotrace", "sort", "bogo"]).is_err());
        assert!(Cli::try_parse_from(["algotrace", "search", "linear", "--numbers", "1", "--random", "3"]).is_err());
    }

    #[test]
    fn test_tree_flags_repeat() {
        let cli = Cli::try_parse_from([
            "algotrace", "--json", "tree", "--insert", "5", "--insert", "-2", "--search", "6",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Tree { keys, insert, search } => {
                assert!(keys.is_none());
                assert_eq!(insert, vec![5, -2]);
                assert_eq!(search, vec![6]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
