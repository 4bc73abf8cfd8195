//! Domain types for the figsheet pipeline.
//!
//! Record types deserialize straight from the design-file API's JSON; cell
//! types serialize straight into the spreadsheet write payload. Nothing here
//! is cached or persisted — every run starts from a fresh fetch.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed key identifying a design file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileKey(pub String);

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for FileKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FileKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed node identifier for a component within a design file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed identifier for the destination spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpreadsheetId(pub String);

impl fmt::Display for SpreadsheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SpreadsheetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SpreadsheetId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Component records
// ---------------------------------------------------------------------------

/// A raw component record as returned by the design-file API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub node_id: NodeId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A component joined with its usage count.
///
/// `usage_count` is 0 when the usage lookup is disabled or the usage response
/// had no entry for this node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub node_id: NodeId,
    pub name: String,
    pub description: Option<String>,
    pub usage_count: u64,
}

// ---------------------------------------------------------------------------
// Sheet cells
// ---------------------------------------------------------------------------

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(u64),
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<u64> for CellValue {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

/// One ordered row of cells. A row has no identity beyond its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct SheetRow(pub Vec<CellValue>);

/// The full table written in one overwrite: header row followed by data rows.
///
/// Invariant: a batch always replaces 100% of the previously written range;
/// partial updates are never attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PublishBatch {
    pub rows: Vec<SheetRow>,
}

impl PublishBatch {
    /// Number of data rows (total rows minus the header).
    pub fn data_rows(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// How link cells are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// The bare component URL as a literal string.
    #[default]
    Plain,
    /// A `HYPERLINK` formula embedding the same URL behind a fixed label.
    Formula,
}

/// Per-run feature toggles. The historical script variants differed only in
/// these four switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncOptions {
    /// Issue the second, batched usage-count fetch and join it by node id.
    pub include_usage_lookup: bool,
    pub link_style: LinkStyle,
    /// Append a transform-time timestamp column to every row.
    pub include_timestamp: bool,
    /// Probe the spreadsheet with a metadata read before clearing anything.
    pub verify_access_first: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            include_usage_lookup: true,
            link_style: LinkStyle::Plain,
            include_timestamp: false,
            verify_access_first: true,
        }
    }
}

/// Full configuration for one pipeline run, passed in explicitly so tests can
/// inject fake endpoints instead of patching module state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    pub file_key: FileKey,
    pub spreadsheet_id: SpreadsheetId,
    /// Upper bound on published components; selection truncates to this.
    pub max_components: usize,
    #[serde(default)]
    pub options: SyncOptions,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
