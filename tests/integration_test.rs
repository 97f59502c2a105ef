// Integration tests for the public engine API

use algotrace::algorithms::{
    create_tree_session, run_graph_traversal, run_search, run_sort, run_sort_with, ErrorKind,
    Graph, NodeIdAllocator, PivotStrategy, Registry, SearchKind, SortKind, SortOptions,
    TraversalKind, TreeSession, DEFAULT_SEED,
};
use algotrace::input::parse_graph;
use algotrace::snapshot::{Outcome, TreeOp};

const SAMPLE: [f64; 10] = [27.0, 90.0, 2.0, 40.0, 45.0, 80.0, 10.0, 70.0, 85.0, 30.0];

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

#[test]
fn test_every_sort_ends_sorted() {
    for &kind in SortKind::ALL {
        let run = run_sort(kind, &SAMPLE);
        let last = run.last_step().expect("at least one step");
        assert_eq!(last.frame.array, sorted(&SAMPLE), "{} did not sort", kind);
        assert!(!run.pseudocode.is_empty());
        for (i, step) in run.steps.iter().enumerate() {
            assert_eq!(step.index, i);
            assert!(step
                .active_lines
                .iter()
                .all(|&l| l >= 1 && l <= run.pseudocode.len()));
        }
    }
}

#[test]
fn test_empty_input_is_one_trivial_step() {
    for &kind in SortKind::ALL {
        let run = run_sort(kind, &[]);
        assert_eq!(run.steps.len(), 1);
        assert!(run.steps[0].frame.array.is_empty());
        assert!(run.steps[0].active_lines.is_empty());
    }
}

#[test]
fn test_integer_sorts_floor_and_handle_negatives() {
    let input = [3.9, -4.5, 0.0, 170.0, -4.0, 12.2];
    for kind in [SortKind::Counting, SortKind::Radix] {
        let run = run_sort(kind, &input);
        assert_eq!(
            run.last_step().unwrap().frame.array,
            vec![-5.0, -4.0, 0.0, 3.0, 12.0, 170.0],
            "{}",
            kind
        );
        assert!(run.steps.iter().any(|s| !s.frame.swapped.is_empty()));
    }
    assert_eq!("radix".parse::<SortKind>().unwrap(), SortKind::Radix);
}

#[test]
fn test_insertion_sort_on_sorted_input_never_swaps() {
    let run = run_sort(SortKind::Insertion, &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert!(run.steps.iter().all(|s| s.frame.swapped.is_empty()));
}

#[test]
fn test_quick_sort_first_partition() {
    let run = run_sort_with(
        SortKind::Quick,
        &SAMPLE,
        &SortOptions::with_pivot(PivotStrategy::Last),
    );
    let first = &run.meta.partition_calls[0];
    assert_eq!(first.parent, None);
    assert_eq!(first.pivot_index, 3);
    assert_eq!(
        first.after,
        vec![27.0, 2.0, 10.0, 30.0, 45.0, 80.0, 90.0, 70.0, 85.0, 40.0]
    );
}

#[test]
fn test_binary_search_sample() {
    let haystack = [2.0, 10.0, 27.0, 30.0, 40.0, 45.0, 70.0, 80.0, 85.0, 90.0];
    let run = run_search(SearchKind::Binary, &haystack, 80.0).unwrap();
    assert_eq!(run.last_step().unwrap().frame.outcome, Some(Outcome::Found(7)));
    assert!(run.steps.len() <= 5);
}

#[test]
fn test_linear_search_ignores_order() {
    let run = run_search(SearchKind::Linear, &[9.0, 3.0, 7.0], 7.0).unwrap();
    assert_eq!(run.last_step().unwrap().frame.outcome, Some(Outcome::Found(2)));

    let err = run_search(SearchKind::Linear, &[1.0], f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn test_traversals_number_reachable_vertices() {
    let graph = parse_graph("A:B,C; B:D; C:D,E; D:F; E:F; X:A").unwrap();
    for &kind in TraversalKind::ALL {
        let run = run_graph_traversal(kind, &graph, "A").unwrap();
        let last = &run.last_step().unwrap().frame;
        let mut orders: Vec<usize> = last.order.iter().copied().filter(|&o| o > 0).collect();
        orders.sort_unstable();
        assert_eq!(orders, (1..=6).collect::<Vec<_>>(), "{}", kind);
        let x = last.nodes.iter().position(|n| n == "X").unwrap();
        assert_eq!(last.order[x], 0);
    }
}

#[test]
fn test_unknown_start_vertex() {
    let graph = Graph::from_pairs(vec![("A", vec!["B"])]);
    let err = run_graph_traversal(TraversalKind::Bfs, &graph, "nope").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidReference);
}

#[test]
fn test_bst_default_seed_search() {
    let mut session = create_tree_session(&DEFAULT_SEED);
    let start = session.len();
    session.search(6);

    let steps = &session.steps()[start..];
    let last = steps.last().unwrap();
    assert_eq!(last.frame.highlight.op, TreeOp::SearchResult);
    assert_eq!(last.frame.highlight.found, Some(true));

    let tree = last.frame.tree.as_ref().unwrap();
    let path: Vec<i64> = steps
        .iter()
        .filter(|s| s.frame.highlight.op == TreeOp::SearchVisit)
        .filter_map(|s| s.frame.highlight.node)
        .filter_map(|id| tree.find_id(id).map(|n| n.key))
        .collect();
    assert_eq!(path, vec![8, 3, 6]);
}

#[test]
fn test_bst_snapshots_do_not_alias() {
    let mut session = TreeSession::with_allocator(&[5], NodeIdAllocator::starting_at(100));
    let first = session.steps()[0].frame.clone();
    session.insert(1);
    session.insert(9);
    assert_eq!(session.steps()[0].frame, first);
    assert!(first.tree.is_none());
}

#[test]
fn test_registry_matches_direct_calls() {
    let registry = Registry::standard();
    for &kind in SortKind::ALL {
        let via_registry = registry
            .sort(kind, &SAMPLE, &SortOptions::default())
            .unwrap();
        assert_eq!(via_registry, run_sort(kind, &SAMPLE));
    }
}

#[test]
fn test_run_serializes_to_json() {
    let run = run_search(SearchKind::Linear, &[1.0, 2.0], 5.0).unwrap();
    let json = serde_json::to_value(&run).unwrap();
    let last = json["steps"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["frame"]["result"], -1);
    assert_eq!(last["frame"]["cursor"]["kind"], "linear");
    assert_eq!(json["meta"]["complexity"]["worst"], "O(n)");
}
