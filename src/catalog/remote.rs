//! Remote model manifest entries and the fetcher seam.

use std::collections::HashMap;

use async_trait::async_trait;
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::canonical_provider_name;

/// A model as reported by the remote manifest.
///
/// Only `model_id` is guaranteed; every capability field may be missing.
#[derive(Debug, Clone, Default, Builder, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteModelEntry {
    #[builder(into)]
    pub model_id: String,
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_vision: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_tool_calling: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u64>,
}

impl RemoteModelEntry {
    /// An entry carrying nothing but its id.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }
}

/// Supplies the authoritative list of model ids for a provider.
///
/// Implementations own timeouts, retries, and staleness. An error here is
/// never fatal to resolution; callers treat it as an empty list.
#[async_trait]
pub trait RemoteCatalogFetcher: Send + Sync {
    async fn fetch(&self, provider: &str) -> Result<Vec<RemoteModelEntry>>;
}

/// In-memory fetcher returning fixed lists per provider.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    lists: HashMap<String, Vec<RemoteModelEntry>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_models(
        mut self,
        provider: &str,
        models: impl IntoIterator<Item = RemoteModelEntry>,
    ) -> Self {
        self.lists
            .insert(canonical_provider_name(provider).to_string(), models.into_iter().collect());
        self
    }
}

#[async_trait]
impl RemoteCatalogFetcher for StaticFetcher {
    async fn fetch(&self, provider: &str) -> Result<Vec<RemoteModelEntry>> {
        Ok(self
            .lists
            .get(canonical_provider_name(provider))
            .cloned()
            .unwrap_or_default())
    }
}
