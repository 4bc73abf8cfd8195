//! One-shot publish pipeline.
//!
//! Stage order is strictly linear: fetch, transform, access check, clear,
//! write. Any stage failure aborts the remaining stages and nothing is
//! retried. A failed write leaves the sheet transiently empty (the clear has
//! already run); the operator re-runs the whole pipeline.

use std::collections::HashMap;

use chrono::Utc;

use figsheet_core::types::{Component, FileKey, LinkStyle, NodeId, PublishBatch, SyncConfig};
use figsheet_figma::{join_usage, FetchError, FigmaClient};
use figsheet_sheets::{PublishError, SheetsClient, ValueInputOption};

use crate::error::SyncError;
use crate::transform::{build_batch, select};

/// Fixed clear range, intentionally larger than any batch so stale rows from
/// longer previous runs never survive.
pub const CLEAR_RANGE: &str = "A1:Z1000";
/// Origin cell of the written table.
pub const WRITE_ORIGIN: &str = "A1";

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// Anything that can produce the joined component list for a file.
pub trait ComponentSource {
    fn fetch(&self, file_key: &FileKey, include_usage: bool) -> Result<Vec<Component>, FetchError>;
}

/// Anything that can receive the published table.
pub trait SheetSink {
    fn verify_access(&self) -> Result<(), PublishError>;
    fn clear(&self, range: &str) -> Result<(), PublishError>;
    fn write(
        &self,
        origin: &str,
        batch: &PublishBatch,
        mode: ValueInputOption,
    ) -> Result<(), PublishError>;
}

impl ComponentSource for FigmaClient {
    fn fetch(&self, file_key: &FileKey, include_usage: bool) -> Result<Vec<Component>, FetchError> {
        let records = self.components(file_key)?;
        if !include_usage || records.is_empty() {
            return Ok(join_usage(records, &HashMap::new()));
        }
        let ids: Vec<NodeId> = records.iter().map(|r| r.node_id.clone()).collect();
        let counts = self.usage_counts(file_key, &ids)?;
        Ok(join_usage(records, &counts))
    }
}

impl SheetSink for SheetsClient {
    fn verify_access(&self) -> Result<(), PublishError> {
        SheetsClient::verify_access(self)
    }

    fn clear(&self, range: &str) -> Result<(), PublishError> {
        SheetsClient::clear(self, range)
    }

    fn write(
        &self,
        origin: &str,
        batch: &PublishBatch,
        mode: ValueInputOption,
    ) -> Result<(), PublishError> {
        SheetsClient::write(self, origin, batch, mode)
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Components returned by the fetch, before truncation.
    pub components_fetched: usize,
    /// Data rows actually written (excludes the header).
    pub rows_published: usize,
}

/// Value-interpretation mode matching how the transformer rendered links.
/// Formula links must be evaluated; everything else is stored literally.
pub fn value_mode(style: LinkStyle) -> ValueInputOption {
    match style {
        LinkStyle::Plain => ValueInputOption::Raw,
        LinkStyle::Formula => ValueInputOption::UserEntered,
    }
}

/// Run the full fetch → transform → publish pipeline once.
pub fn run<S, K>(source: &S, sink: &K, config: &SyncConfig) -> Result<RunSummary, SyncError>
where
    S: ComponentSource,
    K: SheetSink,
{
    let components = source.fetch(&config.file_key, config.options.include_usage_lookup)?;
    let fetched = components.len();
    tracing::info!("fetched {fetched} components from {}", config.file_key);

    let selected = select(components, config.max_components)?;
    let batch = build_batch(&selected, config, Utc::now());
    tracing::debug!("transformed {} data rows", batch.data_rows());

    if config.options.verify_access_first {
        sink.verify_access()?;
        tracing::debug!("spreadsheet access verified");
    }

    sink.clear(CLEAR_RANGE)?;
    sink.write(WRITE_ORIGIN, &batch, value_mode(config.options.link_style))?;
    tracing::info!(
        "published {} rows to {}",
        batch.data_rows(),
        config.spreadsheet_id
    );

    Ok(RunSummary {
        components_fetched: fetched,
        rows_published: batch.data_rows(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_links_are_written_literally() {
        assert_eq!(value_mode(LinkStyle::Plain), ValueInputOption::Raw);
    }

    #[test]
    fn formula_links_are_written_evaluated() {
        assert_eq!(value_mode(LinkStyle::Formula), ValueInputOption::UserEntered);
    }
}
