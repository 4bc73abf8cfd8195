//! figsheet core library — domain types, run configuration, credentials.
//!
//! Public API surface:
//! - [`types`] — newtypes, records, cells, and the run configuration
//! - [`credentials`] — [`CredentialSource`] and its env/static impls
//! - [`error`] — [`CredentialError`]

pub mod credentials;
pub mod error;
pub mod types;

pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use error::CredentialError;
pub use types::{
    CellValue, Component, ComponentRecord, FileKey, LinkStyle, NodeId, PublishBatch, SheetRow,
    SpreadsheetId, SyncConfig, SyncOptions,
};
