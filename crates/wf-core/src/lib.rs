//! wf-core: stable foundation for windflow.
//!
//! Contains:
//! - numeric (tolerances + float guards + angle conversion)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{WfError, WfResult};
pub use numeric::*;
