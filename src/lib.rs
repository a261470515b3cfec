//! # Sample Service: Sample Creation Parameters
//!
//! **Version**: 0.1.0
//!
//! Validates and normalizes client supplied parameters for creating a
//! sample: a specimen record made of an ordered tree of nodes, each with a
//! type, an optional parent and controlled/user metadata.
//!
//! ## Design Principles
//!
//! - **Fail fast**: checks run in a fixed order and the first violation is
//!   returned; there are no partial results
//! - **Caller-ready errors**: every `IllegalParameter` message names the
//!   offending field, node index or value
//! - **Pure**: no I/O, no shared state; safe to call from any thread
//!
//! ## Example Usage
//!
//! ```rust
//! use sample_service::params::create_sample_params;
//! use sample_service::sample::SubSampleType;
//! use serde_json::json;
//!
//! let params = json!({
//!     "sample": {
//!         "id": "706fe9e1-70ef-4feb-bbd9-32295104a119",
//!         "node_tree": [{"id": "foo", "type": "BioReplicate"}]
//!     }
//! });
//!
//! let (sample, id, _prior_version) = create_sample_params(Some(&params))?;
//! assert_eq!(sample.nodes()[0].node_type(), SubSampleType::BioReplicate);
//! assert!(id.is_some());
//! # Ok::<(), sample_service::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod params;
pub mod sample;

pub use error::{Error, Result};
