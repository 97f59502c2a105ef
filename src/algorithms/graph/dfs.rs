//! Iterative depth-first traversal
//!
//! Vertices are marked visited when popped. A vertex can be pushed more than
//! once before it is reached; the stale copies pop as no-ops but still record
//! their pop step.

use super::{Graph, GraphTracer, Prepared};
use crate::algorithms::{AlgoError, Meta, RunResult};
use crate::snapshot::{Frontier, GraphFrame};

pub const PSEUDOCODE: &[&str] = &[
    "create empty stack S",
    "push(start)",
    "while S not empty",
    "    v \u{2190} pop(S)",
    "    if not visited[v]",
    "        visited[v] \u{2190} true",
    "        for each neighbor w in reverse(Adj[v])",
    "            if not visited[w]",
    "                push(w)",
];

pub const META: Meta = Meta::fixed(
    "O(V + E)",
    "O(V + E)",
    "O(V + E)",
    "O(V)",
    "Iterative depth-first traversal using a stack. Reversing adjacency ensures natural recursion order.",
);

fn snapshot(stack: &[usize]) -> Frontier {
    Frontier::Stack(stack.to_vec())
}

pub fn traverse(graph: &Graph, start: &str) -> Result<RunResult<GraphFrame>, AlgoError> {
    let (mut t, start) =
        match GraphTracer::prepare(graph, start, Frontier::Stack(Vec::new()), PSEUDOCODE, META)? {
            Prepared::Ready(tracer, start) => (tracer, start),
            Prepared::Empty(run) => return Ok(run),
        };

    let mut stack = Vec::new();
    t.record(&[1], None, None, snapshot(&stack), None, None);

    stack.push(start);
    t.record(&[2], Some(start), None, snapshot(&stack), None, None);

    while let Some(v) = stack.pop() {
        t.record(&[3, 4], Some(v), None, snapshot(&stack), Some(v), None);
        if t.is_visited(v) {
            continue;
        }

        t.visit(v);
        t.record(&[5, 6], Some(v), None, snapshot(&stack), Some(v), None);

        for w in t.neighbors(v).into_iter().rev() {
            t.record(&[7, 8], Some(v), Some(w), snapshot(&stack), Some(v), Some(w));
            if !t.is_visited(w) {
                stack.push(w);
                t.record(&[9], Some(w), None, snapshot(&stack), Some(v), Some(w));
            }
        }
    }

    Ok(t.finish(PSEUDOCODE, META))
}
