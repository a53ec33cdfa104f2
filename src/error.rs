//! Load failures and per-rule findings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal failures while turning an input path into a `Workflow`.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    MalformedInput(String),
}

/// Which rule an issue was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    NoLoopNode,
    BatchSize,
    AlwaysOutputData,
    LoopDisabled,
    ConnectionShape,
    LoopBack,
    FirstNodeDisabled,
}

impl Rule {
    pub fn code(self) -> &'static str {
        match self {
            Rule::NoLoopNode => "L000",
            Rule::BatchSize => "L001",
            Rule::AlwaysOutputData => "L002",
            Rule::LoopDisabled => "L003",
            Rule::ConnectionShape => "L004",
            Rule::LoopBack => "L005",
            Rule::FirstNodeDisabled => "L006",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single finding. Issues are accumulated, never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub rule: Rule,
    pub message: String,
    /// The node the finding is about, if it is node-scoped.
    pub node: Option<String>,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node {
            Some(node) => write!(f, "{}: {}", node, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Issue {
    pub fn workflow(rule: Rule, message: impl Into<String>) -> Self {
        Issue {
            rule,
            message: message.into(),
            node: None,
        }
    }

    pub fn node(rule: Rule, node: &str, message: impl Into<String>) -> Self {
        Issue {
            rule,
            message: message.into(),
            node: Some(node.to_string()),
        }
    }

    pub fn code(&self) -> &'static str {
        self.rule.code()
    }
}
