//! Breadth-first traversal
//!
//! A vertex is marked visited (and numbered) when it is enqueued, so it can
//! never sit in the queue twice.

use super::{Graph, GraphTracer, Prepared};
use crate::algorithms::{AlgoError, Meta, RunResult};
use crate::snapshot::{Frontier, GraphFrame};
use std::collections::VecDeque;

pub const PSEUDOCODE: &[&str] = &[
    "for each vertex v set visited[v] \u{2190} false",
    "create empty queue Q",
    "enqueue(start)",
    "visited[start] \u{2190} true",
    "while Q not empty",
    "    v \u{2190} dequeue(Q)",
    "    for each neighbor w in Adj[v]",
    "        if not visited[w]",
    "            visited[w] \u{2190} true",
    "            enqueue(w)",
];

pub const META: Meta = Meta::fixed(
    "O(V + E)",
    "O(V + E)",
    "O(V + E)",
    "O(V)",
    "Operates on adjacency-list graphs. Steps record visitation order and queue contents.",
);

fn snapshot(queue: &VecDeque<usize>) -> Frontier {
    Frontier::Queue(queue.iter().copied().collect())
}

pub fn traverse(graph: &Graph, start: &str) -> Result<RunResult<GraphFrame>, AlgoError> {
    let (mut t, start) =
        match GraphTracer::prepare(graph, start, Frontier::Queue(Vec::new()), PSEUDOCODE, META)? {
            Prepared::Ready(tracer, start) => (tracer, start),
            Prepared::Empty(run) => return Ok(run),
        };

    let mut queue = VecDeque::new();
    t.record(&[1], None, None, snapshot(&queue), None, None);

    queue.push_back(start);
    t.visit(start);
    t.record(&[2, 3, 4], Some(start), None, snapshot(&queue), None, None);

    while let Some(v) = queue.pop_front() {
        t.record(&[5, 6], Some(v), None, snapshot(&queue), Some(v), None);

        for w in t.neighbors(v) {
            t.record(&[7, 8], Some(v), Some(w), snapshot(&queue), Some(v), Some(w));
            if !t.is_visited(w) {
                t.visit(w);
                queue.push_back(w);
                t.record(&[9, 10], Some(w), None, snapshot(&queue), Some(v), Some(w));
            }
        }
    }

    Ok(t.finish(PSEUDOCODE, META))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::diamond;
    use super::*;

    fn order_by_name(frame: &GraphFrame) -> Vec<(&str, usize)> {
        let mut named: Vec<_> = frame
            .nodes
            .iter()
            .zip(&frame.order)
            .filter(|&(_, &o)| o > 0)
            .map(|(n, &o)| (n.as_str(), o))
            .collect();
        named.sort_by_key(|&(_, o)| o);
        named
    }

    #[test]
    fn test_visits_level_by_level() {
        let run = traverse(&diamond(), "A").unwrap();
        let last = run.last_step().unwrap();
        let names: Vec<_> = order_by_name(&last.frame).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E", "F"]);
        assert!(last.frame.frontier.items().is_empty());
    }

    #[test]
    fn test_unreachable_vertices_keep_order_zero() {
        let graph = Graph::from_pairs(vec![("A", vec!["B"]), ("C", vec!["A"])]);
        let run = traverse(&graph, "A").unwrap();
        let last = &run.last_step().unwrap().frame;
        let c = last.nodes.iter().position(|n| n == "C").unwrap();
        assert_eq!(last.order[c], 0);
        let mut orders: Vec<_> = last.order.iter().copied().filter(|&o| o > 0).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_queue_never_holds_duplicates() {
        let run = traverse(&diamond(), "A").unwrap();
        for step in &run.steps {
            let items = step.frame.frontier.items();
            let mut dedup = items.to_vec();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(dedup.len(), items.len());
        }
    }

    #[test]
    fn test_empty_graph_yields_one_trivial_step() {
        let run = traverse(&Graph::new(), "A").unwrap();
        assert_eq!(run.steps.len(), 1);
        assert!(run.steps[0].active_lines.is_empty());
    }
}
