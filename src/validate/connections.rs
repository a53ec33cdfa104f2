//! Wiring rules for a split-in-batches node (L004–L006).

use crate::error::{Issue, Rule};
use crate::parse::graph::WorkflowGraph;
use crate::parse::types::{Node, OutputSlot, Workflow, slot_targets};

use super::types::{FirstNode, TargetRef};
use super::{CODE_NODE_TYPE, MODE_EACH_ITEM};

/// Slot 0 ("loop") and slot 1 ("done") must both exist. Returns them when
/// they do; every later wiring check depends on them.
pub fn l004_connection_shape<'w>(
    node: &Node,
    workflow: &'w Workflow,
    issues: &mut Vec<Issue>,
) -> Option<(&'w OutputSlot, &'w OutputSlot)> {
    match workflow.outputs_of(&node.name) {
        Some([loop_slot, done_slot, ..]) => Some((loop_slot, done_slot)),
        _ => {
            issues.push(Issue::node(
                Rule::ConnectionShape,
                &node.name,
                "Invalid connection structure (missing loop/done outputs)",
            ));
            None
        }
    }
}

/// The node that the loop branch enters first, if slot 0 has any wiring.
pub fn first_target(loop_slot: &OutputSlot) -> Option<&str> {
    loop_slot
        .first()
        .and_then(|group| group.first())
        .map(|conn| conn.node.as_str())
}

/// Following the loop branch must eventually lead back into the loop node.
pub fn l005_loops_back(
    node: &Node,
    loop_slot: &OutputSlot,
    graph: &WorkflowGraph,
    issues: &mut Vec<Issue>,
) -> bool {
    let loops_back = first_target(loop_slot).is_some_and(|seed| graph.reaches(seed, &node.name));
    log::debug!("loop '{}' loops back: {}", node.name, loops_back);

    if !loops_back {
        issues.push(Issue::node(
            Rule::LoopBack,
            &node.name,
            "No loop back connection found",
        ));
    }
    loops_back
}

/// Inspect the first node of the loop branch. Unresolvable targets are
/// skipped without an issue.
pub fn l006_first_node(
    loop_slot: &OutputSlot,
    workflow: &Workflow,
    issues: &mut Vec<Issue>,
) -> Option<FirstNode> {
    let target = workflow.find_node(first_target(loop_slot)?)?;

    if target.disabled {
        issues.push(Issue::node(
            Rule::FirstNodeDisabled,
            &target.name,
            "First node in loop is disabled",
        ));
    }

    let mode = (target.node_type == CODE_NODE_TYPE)
        .then(|| target.parameters.str_or("mode", MODE_EACH_ITEM).to_string());

    let flag = |key: &str| {
        target
            .parameters
            .get(key)
            .is_some_and(|v| v.is_truthy())
    };

    Some(FirstNode {
        name: target.name.clone(),
        node_type: target.node_type.clone(),
        disabled: target.disabled,
        mode,
        continue_on_fail: target.continue_on_fail || flag("continueOnFail"),
        always_output_data: target.always_output_data || flag("alwaysOutputData"),
    })
}

/// Resolve every target of a slot against the declared nodes.
pub fn describe_targets(slot: &OutputSlot, workflow: &Workflow) -> Vec<TargetRef> {
    slot_targets(slot)
        .map(|name| {
            let node = workflow.find_node(name);
            TargetRef {
                name: name.to_string(),
                resolved: node.is_some(),
                disabled: node.is_some_and(|n| n.disabled),
            }
        })
        .collect()
}
