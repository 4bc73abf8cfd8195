//! Error types for figsheet-sync.

use thiserror::Error;

use figsheet_figma::FetchError;
use figsheet_sheets::PublishError;

/// All errors that can arise from a pipeline run. Every variant is terminal:
/// nothing is retried and the run aborts at the failing stage.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The design-file fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The spreadsheet publish failed (access check, clear, or write).
    #[error(transparent)]
    Publish(#[from] PublishError),

    /// No components survived selection; there is nothing to publish and the
    /// sheet is left untouched.
    #[error("no components to publish (fetched {fetched})")]
    Empty { fetched: usize },
}
