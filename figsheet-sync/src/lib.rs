//! # figsheet-sync
//!
//! Selection, row transformation, and the one-shot publish pipeline.
//!
//! Call [`pipeline::run`] with a component source and a sheet sink to fetch,
//! transform, and overwrite the destination table in a single linear pass.

pub mod error;
pub mod pipeline;
pub mod transform;

pub use error::SyncError;
pub use pipeline::{run, ComponentSource, RunSummary, SheetSink};
pub use transform::{build_batch, component_url, select};
