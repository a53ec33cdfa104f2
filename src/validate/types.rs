//! What the inspector found for each loop node.
//!
//! These are plain values so the reporter can render every check that ran,
//! not only the ones that failed.

use serde::Serialize;

use crate::error::Issue;
use crate::parse::types::ParamValue;

/// Outcome of one full inspection run.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub workflow_name: String,
    pub node_count: usize,
    /// One entry per loop node, in document order.
    pub loops: Vec<LoopReport>,
    pub issues: Vec<Issue>,
}

impl Analysis {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoopReport {
    pub name: String,
    pub type_version: Option<f64>,
    pub batch_size: BatchSize,
    /// `None` when `options.reset` is absent, otherwise its truthiness.
    pub reset: Option<bool>,
    pub always_output_data: bool,
    pub disabled: bool,
    /// `None` when the loop/done slots are missing; nothing past the shape
    /// check ran in that case.
    pub wiring: Option<LoopWiring>,
    /// This node's share of `Analysis::issues`.
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "camelCase")]
pub enum BatchSize {
    Unset,
    One,
    Other(ParamValue),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoopWiring {
    /// Connection groups on slot 0.
    pub loop_groups: usize,
    pub loop_targets: Vec<TargetRef>,
    /// Connection groups on slot 1.
    pub done_groups: usize,
    pub done_targets: Vec<TargetRef>,
    pub loops_back: bool,
    pub first_node: Option<FirstNode>,
}

/// A connection target as seen from the loop node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRef {
    pub name: String,
    pub resolved: bool,
    pub disabled: bool,
}

/// The node the loop branch enters first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FirstNode {
    pub name: String,
    pub node_type: String,
    pub disabled: bool,
    /// Execution mode, only tracked for code nodes.
    pub mode: Option<String>,
    pub continue_on_fail: bool,
    pub always_output_data: bool,
}

impl FirstNode {
    pub fn runs_once_for_all_items(&self) -> bool {
        self.mode.as_deref() == Some(super::MODE_ALL_ITEMS)
    }
}
