#![allow(dead_code)]

use serde_json::{Value, json};

use loopcheck::error::Issue;
use loopcheck::parse::{self, Workflow, WorkflowGraph};
use loopcheck::validate::{self, Analysis};

// =============================================================================
// Workflow JSON builders
// =============================================================================

/// A split-in-batches node with the given parameters.
pub fn loop_node(name: &str, parameters: Value) -> Value {
    json!({
        "name": name,
        "type": validate::LOOP_NODE_TYPE,
        "typeVersion": 3,
        "parameters": parameters,
    })
}

/// A well-configured split-in-batches node.
pub fn good_loop_node(name: &str) -> Value {
    loop_node(name, json!({ "batchSize": 1, "options": {} }))
}

pub fn plain_node(name: &str) -> Value {
    json!({ "name": name, "type": "n8n-nodes-base.noOp", "parameters": {} })
}

pub fn code_node(name: &str, mode: Option<&str>) -> Value {
    let parameters = match mode {
        Some(mode) => json!({ "mode": mode }),
        None => json!({}),
    };
    json!({ "name": name, "type": validate::CODE_NODE_TYPE, "parameters": parameters })
}

/// `main` outputs where every slot holds one group of the listed targets.
pub fn outputs(slots: &[&[&str]]) -> Value {
    let main: Vec<Value> = slots
        .iter()
        .map(|targets| {
            let group: Vec<Value> = targets
                .iter()
                .map(|t| json!({ "node": t, "type": "main", "index": 0 }))
                .collect();
            json!([group])
        })
        .collect();
    json!({ "main": main })
}

pub fn workflow(nodes: Vec<Value>, connections: Value) -> Workflow {
    let doc = json!({ "name": "Test Workflow", "nodes": nodes, "connections": connections });
    parse::parse(&doc.to_string()).expect("test workflow should parse")
}

/// Loop → A → B → Loop, done → Done.
pub fn healthy_loop() -> Workflow {
    workflow(
        vec![
            good_loop_node("Loop"),
            plain_node("A"),
            plain_node("B"),
            plain_node("Done"),
        ],
        json!({
            "Loop": outputs(&[&["A"], &["Done"]]),
            "A": outputs(&[&["B"]]),
            "B": outputs(&[&["Loop"]]),
        }),
    )
}

// =============================================================================
// Running
// =============================================================================

pub fn analyze(workflow: &Workflow) -> Analysis {
    let graph = WorkflowGraph::build(workflow);
    validate::analyze(workflow, &graph)
}

pub fn codes(issues: &[Issue]) -> Vec<&'static str> {
    issues.iter().map(Issue::code).collect()
}

pub fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
