//! Sample Node - one node of a sample's tree

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Type of a sample node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubSampleType {
    /// A biological replicate; the conventional root of a tree.
    BioReplicate,
    /// A technical replicate derived from another node.
    TechReplicate,
    /// A sub-sample taken from another node.
    SubSample,
}

impl SubSampleType {
    /// All node types, in declaration order.
    pub const ALL: [Self; 3] = [Self::BioReplicate, Self::TechReplicate, Self::SubSample];

    /// The wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BioReplicate => "BioReplicate",
            Self::TechReplicate => "TechReplicate",
            Self::SubSample => "SubSample",
        }
    }
}

impl fmt::Display for SubSampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubSampleType {
    type Err = String;

    /// Parse a wire name. Matching is case sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A metadata value: a string, number, boolean or null.
///
/// Numbers keep their JSON representation, so `782` stays integral and
/// `78.91` stays a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    /// JSON null
    Null,
    /// JSON boolean
    Boolean(bool),
    /// JSON number
    Number(Number),
    /// JSON string
    String(String),
}

impl PrimitiveValue {
    /// Convert a JSON value, returning `None` for arrays and objects.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Null),
            Value::Bool(b) => Some(Self::Boolean(*b)),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::String(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for PrimitiveValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for PrimitiveValue {
    /// Non-finite floats have no JSON form and become `Null`.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

/// Node metadata: category key -> (field -> primitive value), in input order.
pub type Metadata = IndexMap<String, IndexMap<String, PrimitiveValue>>;

/// A node in a sample's tree.
///
/// Nodes are value objects: they are built once per request and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleNode {
    id: String,
    #[serde(rename = "type")]
    node_type: SubSampleType,
    parent: Option<String>,
    meta_controlled: Metadata,
    meta_user: Metadata,
}

impl SampleNode {
    /// Create a `BioReplicate` node with no parent and no metadata.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        SampleNodeBuilder::new(id).build()
    }

    /// Create a builder for constructing a node with optional fields.
    #[must_use]
    pub fn builder(id: impl Into<String>) -> SampleNodeBuilder {
        SampleNodeBuilder::new(id)
    }

    /// Get the node ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the node type.
    #[must_use]
    pub const fn node_type(&self) -> SubSampleType {
        self.node_type
    }

    /// Get the parent node ID, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Get the controlled metadata.
    #[must_use]
    pub const fn controlled_metadata(&self) -> &Metadata {
        &self.meta_controlled
    }

    /// Get the user metadata.
    #[must_use]
    pub const fn user_metadata(&self) -> &Metadata {
        &self.meta_user
    }
}

/// Builder for `SampleNode`.
#[derive(Debug)]
pub struct SampleNodeBuilder {
    id: String,
    node_type: SubSampleType,
    parent: Option<String>,
    meta_controlled: Metadata,
    meta_user: Metadata,
}

impl SampleNodeBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: SubSampleType::BioReplicate,
            parent: None,
            meta_controlled: Metadata::new(),
            meta_user: Metadata::new(),
        }
    }

    /// Set the node type.
    #[must_use]
    pub const fn node_type(mut self, node_type: SubSampleType) -> Self {
        self.node_type = node_type;
        self
    }

    /// Set the parent node ID.
    #[must_use]
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Set the controlled metadata.
    #[must_use]
    pub fn controlled_metadata(mut self, metadata: Metadata) -> Self {
        self.meta_controlled = metadata;
        self
    }

    /// Set the user metadata.
    #[must_use]
    pub fn user_metadata(mut self, metadata: Metadata) -> Self {
        self.meta_user = metadata;
        self
    }

    /// Build the `SampleNode`.
    #[must_use]
    pub fn build(self) -> SampleNode {
        SampleNode {
            id: self.id,
            node_type: self.node_type,
            parent: self.parent,
            meta_controlled: self.meta_controlled,
            meta_user: self.meta_user,
        }
    }
}
