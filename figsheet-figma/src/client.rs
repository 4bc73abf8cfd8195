//! Blocking client for the design-file components API.
//!
//! At most one request is outstanding at any time; the usage lookup is a
//! second sequential call, never concurrent with the first.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use figsheet_core::types::{Component, ComponentRecord, FileKey, NodeId};

use crate::error::FetchError;

const DEFAULT_API_BASE: &str = "https://api.figma.com";
const TOKEN_HEADER: &str = "X-Figma-Token";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Wire models
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ComponentsResponse {
    meta: ComponentsMeta,
}

#[derive(Debug, Deserialize)]
struct ComponentsMeta {
    #[serde(default)]
    components: Vec<ComponentRecord>,
}

#[derive(Debug, Deserialize)]
struct UsageResponse {
    #[serde(default)]
    meta: HashMap<String, UsageEntry>,
}

#[derive(Debug, Deserialize)]
struct UsageEntry {
    #[serde(default)]
    instances_count: Option<u64>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Authenticated client for the design-file API.
pub struct FigmaClient {
    agent: ureq::Agent,
    api_base: String,
    token: String,
}

impl FigmaClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Client against a non-default endpoint (stub servers in tests).
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        let api_base = api_base.into();
        Self {
            agent,
            api_base: api_base.trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    /// Fetch the raw component list for a file. An empty list is not an error
    /// at this stage; selection decides whether the run can proceed.
    pub fn components(&self, file_key: &FileKey) -> Result<Vec<ComponentRecord>, FetchError> {
        let url = components_url(&self.api_base, file_key);
        let resp = self.get(&url)?;
        let body: ComponentsResponse = resp.into_json().map_err(FetchError::Decode)?;
        Ok(body.meta.components)
    }

    /// Fetch usage counts for the given node ids in one batched call.
    ///
    /// Nodes absent from the response are simply missing from the map; the
    /// caller defaults them to 0 at join time.
    pub fn usage_counts(
        &self,
        file_key: &FileKey,
        ids: &[NodeId],
    ) -> Result<HashMap<String, u64>, FetchError> {
        let url = usage_url(&self.api_base, file_key, ids);
        let resp = self.get(&url)?;
        let body: UsageResponse = resp.into_json().map_err(FetchError::Decode)?;
        Ok(body
            .meta
            .into_iter()
            .map(|(id, entry)| (id, entry.instances_count.unwrap_or(0)))
            .collect())
    }

    fn get(&self, url: &str) -> Result<ureq::Response, FetchError> {
        match self.agent.get(url).set(TOKEN_HEADER, &self.token).call() {
            Ok(resp) => Ok(resp),
            Err(ureq::Error::Status(status, resp)) => Err(FetchError::Status {
                status,
                status_text: resp.status_text().to_owned(),
            }),
            Err(ureq::Error::Transport(t)) => Err(FetchError::Transport(t.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// URL builders and join
// ---------------------------------------------------------------------------

/// `<base>/v1/files/<key>/components`
fn components_url(base: &str, file_key: &FileKey) -> String {
    format!("{base}/v1/files/{file_key}/components")
}

/// `<base>/v1/files/<key>/component_usages?ids=<id,id,...>`
fn usage_url(base: &str, file_key: &FileKey, ids: &[NodeId]) -> String {
    let joined = ids.iter().map(|id| id.0.as_str()).collect::<Vec<_>>().join(",");
    format!("{base}/v1/files/{file_key}/component_usages?ids={joined}")
}

/// Join usage counts onto raw records by node id, preserving fetch order.
/// Records without a usage entry get count 0.
pub fn join_usage(records: Vec<ComponentRecord>, counts: &HashMap<String, u64>) -> Vec<Component> {
    records
        .into_iter()
        .map(|record| {
            let usage_count = counts.get(&record.node_id.0).copied().unwrap_or(0);
            Component {
                node_id: record.node_id,
                name: record.name,
                description: record.description,
                usage_count,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
