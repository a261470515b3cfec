//! Sample creation parameters
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. top level: `params`, `sample`, `node_tree`, `name`, `id`, `prior_version`
//! 2. structure of each node, in input order
//! 3. tree invariants (at least one node, parents precede children)

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};
use uuid::Uuid;

use super::{describe, get_id_from_object};
use crate::error::{Error, Result};
use crate::sample::{Metadata, PrimitiveValue, Sample, SampleNode, SubSampleType};

/// A parsed sample creation request: the sample, its optional ID and the
/// optional prior version it updates.
pub type CreateSampleParams = (Sample, Option<Uuid>, Option<i64>);

/// Parse and validate the parameters of a sample creation request.
///
/// `params` is the decoded request body. Keys other than those validated
/// here are ignored.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `params` is `None` or `null`, and
/// `Error::IllegalParameter` describing the first invalid field otherwise.
pub fn create_sample_params(params: Option<&Value>) -> Result<CreateSampleParams> {
    let result = parse(params);
    match &result {
        Ok((sample, id, prior_version)) => debug!(
            nodes = sample.nodes().len(),
            has_id = id.is_some(),
            prior_version = ?prior_version,
            "parsed sample creation params"
        ),
        Err(e) => debug!(error = %e, "rejected sample creation params"),
    }
    result
}

fn parse(params: Option<&Value>) -> Result<CreateSampleParams> {
    let params = match params {
        None | Some(Value::Null) => return Err(Error::invalid_argument("params may not be None")),
        Some(p) => p,
    };
    let Some(Value::Object(sample)) = params.get("sample") else {
        return Err(Error::illegal_parameter(
            "params must contain sample key that maps to a structure",
        ));
    };
    let Some(Value::Array(node_tree)) = sample.get("node_tree") else {
        return Err(Error::illegal_parameter(
            "sample node tree must be present and a list",
        ));
    };
    let name = match sample.get("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            return Err(Error::illegal_parameter(
                "sample name must be omitted or a string",
            ))
        }
    };
    let id = get_id_from_object(Some(sample))?;
    let prior_version = match params.get("prior_version") {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) if n.is_i64() => n.as_i64(),
        Some(_) => {
            return Err(Error::illegal_parameter(
                "prior_version must be an integer if supplied",
            ))
        }
    };

    let nodes = node_tree
        .iter()
        .enumerate()
        .map(|(index, node)| parse_node(index, node))
        .collect::<Result<Vec<_>>>()?;

    Ok((Sample::new(nodes, name)?, id, prior_version))
}

fn parse_node(index: usize, node: &Value) -> Result<SampleNode> {
    let Value::Object(node) = node else {
        return Err(Error::illegal_parameter(format!(
            "Node at index {index} is not a structure"
        )));
    };
    let id = match node.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id,
        _ => {
            return Err(Error::illegal_parameter(format!(
                "Node at index {index} must have an id key that maps to a string"
            )))
        }
    };
    let node_type = parse_node_type(index, node.get("type"))?;
    let mut builder = SampleNode::builder(id.as_str()).node_type(node_type);
    match node.get("parent") {
        None | Some(Value::Null) => {}
        Some(Value::String(parent)) => builder = builder.parent(parent.as_str()),
        Some(_) => {
            return Err(Error::illegal_parameter(format!(
                "Node at index {index} has a parent entry that is not a string"
            )))
        }
    }
    let controlled = parse_metadata(index, "controlled metadata", node.get("meta_controlled"))?;
    let user = parse_metadata(index, "user metadata", node.get("meta_user"))?;
    trace!(index, id = %id, node_type = %node_type, "parsed sample node");

    Ok(builder
        .controlled_metadata(controlled)
        .user_metadata(user)
        .build())
}

fn parse_node_type(index: usize, value: Option<&Value>) -> Result<SubSampleType> {
    let invalid = |v: &Value| {
        Error::illegal_parameter(format!(
            "Node at index {index} has an invalid sample type: {}",
            describe(v)
        ))
    };
    match value {
        Some(v @ Value::String(s)) => s.parse().map_err(|_| invalid(v)),
        Some(other) => Err(invalid(other)),
        None => Err(invalid(&Value::Null)),
    }
}

fn parse_metadata(index: usize, label: &str, value: Option<&Value>) -> Result<Metadata> {
    let map: &Map<String, Value> = match value {
        None | Some(Value::Null) => return Ok(Metadata::new()),
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(Error::illegal_parameter(format!(
                "Node at index {index}'s {label} entry must be a mapping"
            )))
        }
    };
    let mut metadata = Metadata::with_capacity(map.len());
    for (key, fields) in map {
        let Value::Object(fields) = fields else {
            return Err(Error::illegal_parameter(format!(
                "Node at index {index}'s {label} entry does not have a dict as a value at key {key}"
            )));
        };
        let mut values = IndexMap::with_capacity(fields.len());
        for (field, v) in fields {
            let primitive = PrimitiveValue::from_json(v).ok_or_else(|| {
                Error::illegal_parameter(format!(
                    "Node at index {index}'s {label} entry does not have a primitive type as the value at {key}/{field}"
                ))
            })?;
            values.insert(field.clone(), primitive);
        }
        metadata.insert(key.clone(), values);
    }
    Ok(metadata)
}
