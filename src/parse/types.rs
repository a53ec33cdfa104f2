//! Rust types for an exported n8n workflow document.
//!
//! Only the parts the loop checks read are modelled strictly. Per-node
//! `parameters` are kept as an open `ParamValue` tree since every node kind
//! defines its own shape. Unknown keys are ignored everywhere.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub name: String,
    pub nodes: Vec<Node>,
    /// Source node name → its outputs.
    #[serde(default)]
    pub connections: BTreeMap<String, NodeOutputs>,
}

impl Workflow {
    /// Look a node up by its (unique) name.
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// The `main` output slots wired from `name`, if any were declared.
    pub fn outputs_of(&self, name: &str) -> Option<&[OutputSlot]> {
        self.connections.get(name).map(|c| c.main.as_slice())
    }
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: Option<f64>,
    pub position: Option<[f64; 2]>,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub always_output_data: bool,
    #[serde(default)]
    pub continue_on_fail: bool,
    pub notes: Option<String>,
}

/// Kind-specific node configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(pub BTreeMap<String, ParamValue>);

impl Parameters {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Walk nested maps, e.g. `["options", "reset"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&ParamValue> {
        let (first, rest) = path.split_first()?;
        rest.iter().try_fold(self.get(first)?, |value, key| value.get(key))
    }

    /// String lookup falling back to `default` when absent or not a string.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(ParamValue::as_str).unwrap_or(default)
    }
}

/// A single configuration value of unconstrained shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<ParamValue>),
    Map(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        match self {
            ParamValue::Map(map) => map.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// JavaScript-style truthiness, which is what n8n applies to loose flags.
    pub fn is_truthy(&self) -> bool {
        match self {
            ParamValue::Null => false,
            ParamValue::Bool(b) => *b,
            ParamValue::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            ParamValue::String(s) => !s.is_empty(),
            ParamValue::Array(_) | ParamValue::Map(_) => true,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Null => f.write_str("null"),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::String(s) => f.write_str(s),
            ParamValue::Array(_) | ParamValue::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

// =============================================================================
// CONNECTIONS
// =============================================================================

/// Output slot → connection group → connection.
pub type OutputSlot = Vec<ConnectionGroup>;
pub type ConnectionGroup = Vec<Connection>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeOutputs {
    /// Slot 0, slot 1, ... in port order. `null` slots read as empty.
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub main: Vec<OutputSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub node: String,
    #[serde(rename = "type", default = "default_connection_kind")]
    pub kind: String,
    #[serde(default)]
    pub index: u32,
}

fn default_connection_kind() -> String {
    "main".to_string()
}

/// Flattened target names of one output slot, in wiring order.
pub fn slot_targets(slot: &OutputSlot) -> impl Iterator<Item = &str> {
    slot.iter().flatten().map(|c| c.node.as_str())
}

/// A group is normally a list, but exports that wire a slot directly to a
/// connection object are accepted as a group of one.
#[derive(Deserialize)]
#[serde(untagged)]
enum GroupRepr {
    Many(Vec<Connection>),
    One(Connection),
}

fn deserialize_slots<'de, D>(deserializer: D) -> Result<Vec<OutputSlot>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<Vec<GroupRepr>>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_default()
                .into_iter()
                .map(|group| match group {
                    GroupRepr::Many(conns) => conns,
                    GroupRepr::One(conn) => vec![conn],
                })
                .collect()
        })
        .collect())
}
