//! Load phase: file → JSON → Rust types + connection graph.

pub mod graph;
pub mod types;

use std::path::Path;

pub use graph::WorkflowGraph;
pub use types::*;

use crate::error::LoadError;

/// Deserialize a workflow JSON string into a `Workflow` struct.
pub fn parse(json: &str) -> Result<Workflow, LoadError> {
    serde_json::from_str::<Workflow>(json).map_err(|e| LoadError::MalformedInput(e.to_string()))
}

/// Read and parse the workflow at `path`.
pub fn load(path: &Path) -> Result<Workflow, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    log::debug!("read {} bytes from {}", json.len(), path.display());
    parse(&json)
}

/// Load the file and build the graph in one step.
pub fn load_and_build(path: &Path) -> Result<(Workflow, WorkflowGraph), LoadError> {
    let workflow = load(path)?;
    let graph = WorkflowGraph::build(&workflow);
    Ok((workflow, graph))
}
