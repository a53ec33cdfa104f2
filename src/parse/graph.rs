//! petgraph-based directed graph over the workflow's `main` connections.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, EdgeRef};

use super::types::Workflow;

/// Which output slot of the source node an edge leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLabel {
    pub output: usize,
}

pub struct WorkflowGraph {
    pub graph: DiGraph<String, EdgeLabel>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl WorkflowGraph {
    /// Every declared node becomes a vertex, and so does every name that only
    /// appears in `connections`. Dangling targets therefore stay traversable
    /// (as dead ends) instead of failing the build.
    pub fn build(workflow: &Workflow) -> Self {
        let mut graph = WorkflowGraph {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        };

        for node in &workflow.nodes {
            graph.intern(&node.name);
        }

        for (source, outputs) in &workflow.connections {
            let s = graph.intern(source);
            for (output, slot) in outputs.main.iter().enumerate() {
                for conn in slot.iter().flatten() {
                    let t = graph.intern(&conn.node);
                    graph.graph.add_edge(s, t, EdgeLabel { output });
                }
            }
        }

        log::debug!(
            "built connection graph: {} vertices, {} edges",
            graph.graph.node_count(),
            graph.graph.edge_count()
        );
        graph
    }

    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.node_indices.insert(name.to_string(), idx);
        idx
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_indices.contains_key(name)
    }

    pub fn successors(&self, name: &str) -> Vec<(&str, EdgeLabel)> {
        let Some(&idx) = self.node_indices.get(name) else {
            return vec![];
        };
        self.graph
            .edges(idx)
            .map(|e| (self.graph[e.target()].as_str(), *e.weight()))
            .collect()
    }

    pub fn outgoing_count(&self, name: &str) -> usize {
        self.successors(name).len()
    }

    /// Breadth-first search from `from` over all output slots. Each vertex is
    /// visited at most once, so this terminates on any cyclic input.
    pub fn reaches(&self, from: &str, to: &str) -> bool {
        let (Some(&start), Some(&goal)) = (self.node_indices.get(from), self.node_indices.get(to))
        else {
            return false;
        };

        let mut bfs = Bfs::new(&self.graph, start);
        while let Some(nx) = bfs.next(&self.graph) {
            if nx == goal {
                return true;
            }
        }
        false
    }
}
