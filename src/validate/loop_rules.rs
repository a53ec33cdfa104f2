//! Configuration rules for a single split-in-batches node (L001–L003).

use crate::error::{Issue, Rule};
use crate::parse::types::{Node, ParamValue};

use super::types::BatchSize;

/// `parameters.batchSize` must be exactly 1.
pub fn l001_batch_size(node: &Node, issues: &mut Vec<Issue>) -> BatchSize {
    match node.parameters.get("batchSize") {
        None | Some(ParamValue::Null) => {
            issues.push(Issue::node(
                Rule::BatchSize,
                &node.name,
                "Batch size not set (must be explicitly set to 1)",
            ));
            BatchSize::Unset
        }
        Some(value) if value.as_f64() == Some(1.0) => BatchSize::One,
        Some(value) => {
            issues.push(Issue::node(
                Rule::BatchSize,
                &node.name,
                format!("Batch size is {}, should be 1", quoted(value)),
            ));
            BatchSize::Other(value.clone())
        }
    }
}

fn quoted(value: &ParamValue) -> String {
    match value {
        ParamValue::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

/// `parameters.options.reset` is only ever reported, never an issue.
pub fn reset_flag(node: &Node) -> Option<bool> {
    match node.parameters.get_path(&["options", "reset"]) {
        None | Some(ParamValue::Null) => None,
        Some(value) => Some(value.is_truthy()),
    }
}

pub fn l002_always_output_data(node: &Node, issues: &mut Vec<Issue>) -> bool {
    if node.always_output_data {
        issues.push(Issue::node(
            Rule::AlwaysOutputData,
            &node.name,
            "Always Output Data is enabled (should be OFF)",
        ));
    }
    node.always_output_data
}

pub fn l003_not_disabled(node: &Node, issues: &mut Vec<Issue>) -> bool {
    if node.disabled {
        issues.push(Issue::node(Rule::LoopDisabled, &node.name, "Loop node is disabled"));
    }
    node.disabled
}
