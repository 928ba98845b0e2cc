//! Anthropic Models API fetcher.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::remote::{RemoteCatalogFetcher, RemoteModelEntry};
use crate::config::FetcherConfig;
use crate::error::{CatalogError, Result};
use crate::models::ProviderKey;

use super::http::{anthropic_headers, shared_client, status_to_error};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";
const PAGE_SIZE: u32 = 1000;
const MAX_PAGES: usize = 16;

/// Lists the models an Anthropic API key can reach.
///
/// The Models API reports ids and display names only, so every entry it
/// produces carries no capability fields.
pub struct AnthropicModelsFetcher {
    api_key: String,
    base_url: String,
}

impl AnthropicModelsFetcher {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Build from config, failing when no API key is configured.
    pub fn from_config(config: &FetcherConfig) -> Result<Self> {
        let provider = ProviderKey::Anthropic.as_str();
        let api_key = config.get_api_key(provider).ok_or_else(|| {
            CatalogError::Authentication("no Anthropic API key configured".to_string())
        })?;
        Ok(Self::new(api_key, config.get_base_url(provider)))
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.base_url.trim_end_matches('/'))
    }

    async fn fetch_page(&self, after_id: Option<&str>) -> Result<ModelsPage> {
        let mut req = shared_client()
            .get(self.models_url())
            .headers(anthropic_headers(&self.api_key, API_VERSION))
            .query(&[("limit", PAGE_SIZE)]);
        if let Some(id) = after_id {
            req = req.query(&[("after_id", id)]);
        }
        let resp = req.send().await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        if !(200..300).contains(&status) {
            return Err(status_to_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RemoteCatalogFetcher for AnthropicModelsFetcher {
    async fn fetch(&self, provider: &str) -> Result<Vec<RemoteModelEntry>> {
        if ProviderKey::parse(provider) != Some(ProviderKey::Anthropic) {
            debug!(provider = %provider, "Anthropic fetcher asked for another provider");
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        let mut after_id: Option<String> = None;

        let mut pages = 0;
        loop {
            let page = self.fetch_page(after_id.as_deref()).await?;
            pages += 1;
            entries.extend(page.data.into_iter().map(|model| RemoteModelEntry {
                model_id: model.id,
                display_name: model.display_name,
                ..Default::default()
            }));

            match (page.has_more, page.last_id) {
                (true, Some(last_id)) if pages < MAX_PAGES => after_id = Some(last_id),
                (true, Some(_)) => {
                    warn!(
                        provider = %provider,
                        pages,
                        count = entries.len(),
                        "Anthropic model list still has more pages, stopping at page limit"
                    );
                    break;
                }
                _ => break,
            }
        }

        debug!(provider = %provider, count = entries.len(), "fetched Anthropic models");
        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct ModelsPage {
    #[serde(default)]
    data: Vec<ModelInfo>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    last_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    id: String,
    #[serde(default)]
    display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_url_trims_trailing_slash() {
        let fetcher = AnthropicModelsFetcher::new("k".into(), Some("http://host/v1/".into()));
        assert_eq!(fetcher.models_url(), "http://host/v1/models");
    }

    #[test]
    fn from_config_requires_api_key() {
        let config = FetcherConfig::new();
        assert!(matches!(
            AnthropicModelsFetcher::from_config(&config),
            Err(CatalogError::Authentication(_))
        ));
        config.set_api_key("anthropic", "sk-test".to_string());
        assert!(AnthropicModelsFetcher::from_config(&config).is_ok());
    }
}
