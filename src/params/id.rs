//! Sample ID extraction

use serde_json::{Map, Value};
use uuid::Uuid;

use super::describe;
use crate::error::{Error, Result};

/// Get the optional sample ID from a structure's `id` key.
///
/// A missing structure, a missing key or a `null` value all yield `Ok(None)`.
///
/// # Errors
///
/// Returns `Error::IllegalParameter` if the value is not a UUID string.
pub fn get_id_from_object(obj: Option<&Map<String, Value>>) -> Result<Option<Uuid>> {
    let Some(value) = obj.and_then(|o| o.get("id")) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Uuid::parse_str(s).map(Some).map_err(|_| not_a_uuid(value)),
        _ => Err(not_a_uuid(value)),
    }
}

fn not_a_uuid(value: &Value) -> Error {
    Error::illegal_parameter(format!("Sample ID {} must be a UUID string", describe(value)))
}
