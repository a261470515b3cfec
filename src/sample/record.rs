//! Sample - root entity of the sample schema

use std::collections::HashSet;

use serde::{de, Deserialize, Deserializer, Serialize};

use super::SampleNode;
use crate::error::{Error, Result};

/// Sample represents a specimen record made of a tree of nodes.
///
/// The node sequence is ordered: a node's parent must appear earlier in the
/// sequence than the node itself. Identity and versioning are assigned by
/// the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    nodes: Vec<SampleNode>,
    name: Option<String>,
}

/// Unchecked wire form; deserialization goes through `Sample::new`.
#[derive(Deserialize)]
struct RawSample {
    nodes: Vec<SampleNode>,
    name: Option<String>,
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawSample::deserialize(deserializer)?;
        Self::new(raw.nodes, raw.name).map_err(de::Error::custom)
    }
}

impl Sample {
    /// Create a new sample from an ordered node list.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Nodes in tree order; at least one is required
    /// * `name` - Optional human-readable sample name
    ///
    /// # Errors
    ///
    /// Returns `Error::IllegalParameter` if `nodes` is empty, if a node's id
    /// is empty, or if a node's parent does not appear earlier in the list.
    pub fn new(nodes: Vec<SampleNode>, name: Option<String>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::illegal_parameter(
                "At least one node per sample is required",
            ));
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            if node.id().is_empty() {
                return Err(Error::illegal_parameter(format!(
                    "Node at index {index} has an empty id"
                )));
            }
            if let Some(parent) = node.parent() {
                if !seen.contains(parent) {
                    return Err(Error::illegal_parameter(format!(
                        "Parent {parent} of node {} does not appear in node list prior to node.",
                        node.id()
                    )));
                }
            }
            seen.insert(node.id());
        }
        Ok(Self { nodes, name })
    }

    /// Get the nodes in tree order.
    #[must_use]
    pub fn nodes(&self) -> &[SampleNode] {
        &self.nodes
    }

    /// Get the sample name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Look up a node by ID.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&SampleNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Get the direct children of a node, in tree order.
    pub fn children<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a SampleNode> + 'a {
        self.nodes.iter().filter(move |n| n.parent() == Some(id))
    }
}
