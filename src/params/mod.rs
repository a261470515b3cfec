//! Request Parameter Parsing
//!
//! Turns loosely typed, decoded request bodies (`serde_json::Value`) into
//! the strongly typed records of [`crate::sample`], with error messages
//! suitable for returning to the API caller.
//!
//! ## Usage
//!
//! ```rust
//! use sample_service::params::create_sample_params;
//! use serde_json::json;
//!
//! let params = json!({
//!     "sample": {
//!         "name": "soil core",
//!         "node_tree": [
//!             {"id": "root", "type": "BioReplicate"},
//!             {"id": "rep-1", "type": "TechReplicate", "parent": "root"}
//!         ]
//!     },
//!     "prior_version": 3
//! });
//!
//! let (sample, id, prior_version) = create_sample_params(Some(&params))?;
//! assert_eq!(sample.nodes().len(), 2);
//! assert!(id.is_none());
//! assert_eq!(prior_version, Some(3));
//! # Ok::<(), sample_service::Error>(())
//! ```

mod create;
mod id;
mod timestamp;

use serde_json::Value;

pub use create::{create_sample_params, CreateSampleParams};
pub use id::get_id_from_object;
pub use timestamp::datetime_to_epoch_millis;

/// Render a value for an error message: strings raw, null as `None`,
/// everything else as JSON (`true`, `["a"]`), not in any host-language
/// literal syntax such as `True` or `['a']`.
fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}
