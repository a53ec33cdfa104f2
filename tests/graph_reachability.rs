//! Loop-back search over arbitrary connection graphs.

mod helpers;

use proptest::prelude::*;
use serde_json::{Value, json};

use loopcheck::parse::WorkflowGraph;

use helpers::*;

/// Workflow over nodes n0..n{count} with the given edges; n0 is the loop node.
fn graph_workflow(count: usize, edges: &[(usize, usize)]) -> loopcheck::parse::Workflow {
    let mut nodes = vec![good_loop_node("n0")];
    nodes.extend((1..count).map(|i| plain_node(&format!("n{}", i))));

    let mut connections = serde_json::Map::new();
    for &(from, to) in edges {
        let entry = connections
            .entry(format!("n{}", from))
            .or_insert_with(|| json!({ "main": [[[]], [[]]] }));
        // Alternate slots so both get traversed.
        let slot = to % 2;
        if let Some(group) = entry["main"][slot][0].as_array_mut() {
            group.push(json!({ "node": format!("n{}", to), "type": "main", "index": 0 }));
        }
    }
    workflow(nodes, Value::Object(connections))
}

/// Plain worklist reachability used as the reference answer.
fn reference_reaches(count: usize, edges: &[(usize, usize)], from: usize, to: usize) -> bool {
    let mut seen = vec![false; count];
    let mut queue = std::collections::VecDeque::from([from]);
    while let Some(n) = queue.pop_front() {
        if n == to {
            return true;
        }
        if std::mem::replace(&mut seen[n], true) {
            continue;
        }
        queue.extend(edges.iter().filter(|(f, _)| *f == n).map(|(_, t)| *t));
    }
    false
}

#[test]
fn self_reference_counts_as_reached() {
    let wf = graph_workflow(2, &[(0, 1)]);
    let graph = WorkflowGraph::build(&wf);
    assert!(graph.reaches("n1", "n1"));
    assert!(!graph.reaches("n1", "n0"));
}

#[test]
fn unknown_names_never_reach() {
    let wf = graph_workflow(2, &[(0, 1), (1, 0)]);
    let graph = WorkflowGraph::build(&wf);
    assert!(!graph.reaches("missing", "n0"));
    assert!(!graph.reaches("n1", "missing"));
}

#[test]
fn search_follows_every_output_slot() {
    // n1 -> n3 is wired on slot 1.
    let wf = graph_workflow(4, &[(0, 1), (1, 3), (3, 0)]);
    let graph = WorkflowGraph::build(&wf);
    assert!(graph.reaches("n1", "n0"));
}

#[test]
fn dense_cycles_terminate() {
    let edges: Vec<(usize, usize)> = (1..30)
        .flat_map(|a| (1..30).map(move |b| (a, b)))
        .collect();
    let wf = graph_workflow(30, &edges);
    let graph = WorkflowGraph::build(&wf);
    assert!(!graph.reaches("n1", "n0"));
}

fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..12).prop_flat_map(|count| {
        (
            Just(count),
            prop::collection::vec((0..count, 0..count), 0..40),
        )
    })
}

proptest! {
    #[test]
    fn reachability_matches_reference((count, edges) in edges_strategy(), from in 0usize..12) {
        let from = from % count;
        let wf = graph_workflow(count, &edges);
        let graph = WorkflowGraph::build(&wf);
        let expected = reference_reaches(count, &edges, from, 0);
        prop_assert_eq!(graph.reaches(&format!("n{}", from), "n0"), expected);
    }

    #[test]
    fn analysis_is_deterministic((count, edges) in edges_strategy()) {
        let wf = graph_workflow(count, &edges);
        let first = analyze(&wf);
        let second = analyze(&wf);
        prop_assert_eq!(first.issues, second.issues);
    }
}
