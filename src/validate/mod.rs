//! Inspection phase.
//!
//! Finds every split-in-batches node and runs the loop rules against it.
//! Pure: reads the parsed workflow and graph, returns an `Analysis`.

pub mod connections;
pub mod loop_rules;
pub mod types;

pub use types::*;

use crate::error::{Issue, Rule};
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{Node, Workflow};

pub const LOOP_NODE_TYPE: &str = "n8n-nodes-base.splitInBatches";
pub const CODE_NODE_TYPE: &str = "n8n-nodes-base.code";
pub const MODE_EACH_ITEM: &str = "runOnceForEachItem";
pub const MODE_ALL_ITEMS: &str = "runOnceForAllItems";

/// Loop nodes in document order.
pub fn loop_nodes(workflow: &Workflow) -> Vec<&Node> {
    workflow
        .nodes
        .iter()
        .filter(|n| n.node_type == LOOP_NODE_TYPE)
        .collect()
}

/// Run every loop rule over the workflow. Passes iff no issue was recorded.
pub fn analyze(workflow: &Workflow, graph: &WorkflowGraph) -> Analysis {
    let mut analysis = Analysis {
        workflow_name: workflow.name.clone(),
        node_count: workflow.nodes.len(),
        loops: Vec::new(),
        issues: Vec::new(),
    };

    let loops = loop_nodes(workflow);
    if loops.is_empty() {
        analysis.issues.push(Issue::workflow(
            Rule::NoLoopNode,
            "No 'Split in Batches' loop node found",
        ));
        return analysis;
    }

    for node in loops {
        let report = inspect_loop(node, workflow, graph, &mut analysis.issues);
        analysis.loops.push(report);
    }

    analysis
}

/// All checks for one loop node. Only a missing loop/done slot cuts the
/// remaining wiring checks short.
pub fn inspect_loop(
    node: &Node,
    workflow: &Workflow,
    graph: &WorkflowGraph,
    issues: &mut Vec<Issue>,
) -> LoopReport {
    log::debug!("inspecting loop node '{}'", node.name);
    let first_issue = issues.len();

    let batch_size = loop_rules::l001_batch_size(node, issues);
    let reset = loop_rules::reset_flag(node);
    let always_output_data = loop_rules::l002_always_output_data(node, issues);
    let disabled = loop_rules::l003_not_disabled(node, issues);

    let wiring = connections::l004_connection_shape(node, workflow, issues).map(
        |(loop_slot, done_slot)| LoopWiring {
            loop_groups: loop_slot.len(),
            loop_targets: connections::describe_targets(loop_slot, workflow),
            done_groups: done_slot.len(),
            done_targets: connections::describe_targets(done_slot, workflow),
            loops_back: connections::l005_loops_back(node, loop_slot, graph, issues),
            first_node: connections::l006_first_node(loop_slot, workflow, issues),
        },
    );

    LoopReport {
        name: node.name.clone(),
        type_version: node.type_version,
        batch_size,
        reset,
        always_output_data,
        disabled,
        wiring,
        issues: issues[first_issue..].to_vec(),
    }
}
