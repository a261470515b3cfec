//! Sample Schema
//!
//! Strongly typed records produced by parameter parsing and consumed by the
//! storage layer.
//!
//! ## Schema Overview
//!
//! ```text
//! Sample (1) ──< SampleNode (N) [ordered; parent precedes child]
//!                    │
//!                    ├── meta_controlled: key -> field -> PrimitiveValue
//!                    └── meta_user:       key -> field -> PrimitiveValue
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use sample_service::sample::{Sample, SampleNode, SubSampleType};
//!
//! let root = SampleNode::new("root");
//! let child = SampleNode::builder("rep-1")
//!     .node_type(SubSampleType::TechReplicate)
//!     .parent("root")
//!     .build();
//!
//! let sample = Sample::new(vec![root, child], Some("soil core".to_string()))?;
//! assert_eq!(sample.nodes().len(), 2);
//! # Ok::<(), sample_service::Error>(())
//! ```

mod node;
mod record;

pub use node::{Metadata, PrimitiveValue, SampleNode, SampleNodeBuilder, SubSampleType};
pub use record::Sample;
