//! Text input for the player and the CLI
//!
//! Numbers are forgiving: anything that is not a finite number is dropped.
//! BST keys and graph descriptions are strict and report the offending token.

use crate::algorithms::{AlgoError, Graph};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{token}' is not an integer key")]
    BadKey { token: String },

    #[error("graph entry '{entry}' is missing ':' between vertex and neighbors")]
    MissingSeparator { entry: String },

    #[error("graph entry '{entry}' has an empty vertex name")]
    EmptyVertex { entry: String },
}

impl From<InputError> for AlgoError {
    fn from(err: InputError) -> Self {
        AlgoError::invalid_input(err.to_string())
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

/// Comma or whitespace separated numbers; bad tokens are skipped
pub fn parse_numbers(text: &str) -> Vec<f64> {
    tokens(text)
        .filter_map(|t| t.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .collect()
}

/// Integer BST keys
pub fn parse_keys(text: &str) -> Result<Vec<i64>, InputError> {
    tokens(text)
        .map(|t| {
            t.parse::<i64>().map_err(|_| InputError::BadKey {
                token: t.to_string(),
            })
        })
        .collect()
}

/// Parse `A:B,C; B:D; D:` into an adjacency list
///
/// Entries are separated by `;` or newlines. A vertex with no outgoing edges
/// is written with nothing after the colon.
pub fn parse_graph(text: &str) -> Result<Graph, InputError> {
    let mut graph = Graph::new();
    for entry in text
        .split(|c: char| c == ';' || c == '\n')
        .map(str::trim)
        .filter(|e| !e.is_empty())
    {
        let (key, rest) = entry.split_once(':').ok_or_else(|| InputError::MissingSeparator {
            entry: entry.to_string(),
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(InputError::EmptyVertex {
                entry: entry.to_string(),
            });
        }
        graph.add_edges(key, tokens(rest).collect::<Vec<_>>());
    }
    Ok(graph)
}

/// `count` values drawn uniformly from `1..=99`
pub fn random_numbers(count: usize, rng: &mut fastrand::Rng) -> Vec<f64> {
    (0..count).map(|_| rng.u32(1..=99) as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_skip_garbage() {
        assert_eq!(
            parse_numbers("5, 3.5 x NaN -2,,inf 7"),
            vec![5.0, 3.5, -2.0, 7.0]
        );
        assert!(parse_numbers("  ").is_empty());
    }

    #[test]
    fn test_keys_are_strict() {
        assert_eq!(parse_keys("8 3,10").unwrap(), vec![8, 3, 10]);
        assert_eq!(
            parse_keys("8 x").unwrap_err(),
            InputError::BadKey {
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn test_graph_text() {
        let graph = parse_graph("A:B,C; B:D\nC: D E; D:").unwrap();
        assert_eq!(graph.universe(), vec!["A", "B", "C", "D", "E"]);
        assert_eq!(graph.neighbors("C"), ["D".to_string(), "E".to_string()]);
        assert!(graph.neighbors("D").is_empty());

        assert!(matches!(
            parse_graph("A B"),
            Err(InputError::MissingSeparator { .. })
        ));
        assert!(matches!(
            parse_graph(" :B"),
            Err(InputError::EmptyVertex { .. })
        ));
    }

    #[test]
    fn test_graph_error_converts_to_invalid_input() {
        let err: AlgoError = parse_graph("oops").unwrap_err().into();
        assert_eq!(err.kind(), crate::algorithms::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_random_numbers_in_range_and_seeded() {
        let a = random_numbers(50, &mut fastrand::Rng::with_seed(7));
        let b = random_numbers(50, &mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|&n| (1.0..=99.0).contains(&n)));
    }
}
