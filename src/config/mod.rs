//! Fetcher configuration (layered: code > env).
//!
//! This only configures how remote manifests are fetched. The override table
//! is static data and has no environment or runtime surface.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::models::canonical_provider_name;

/// Global default config (lazy-initialized from env).
static DEFAULT_CONFIG: OnceLock<FetcherConfig> = OnceLock::new();

const API_KEY_ENV: [(&str, &str); 1] = [("ANTHROPIC_API_KEY", "Anthropic")];
const BASE_URL_ENV: [(&str, &str); 1] = [("ANTHROPIC_BASE_URL", "Anthropic")];

/// Per-provider credentials and endpoints for remote catalog fetchers.
///
/// Keys are canonical provider names, so `set_api_key("anthropic", ..)` and
/// `get_api_key("Anthropic")` refer to the same slot.
#[derive(Debug, Clone, Default)]
pub struct FetcherConfig {
    api_keys: Arc<RwLock<HashMap<String, String>>>,
    base_urls: Arc<RwLock<HashMap<String, String>>>,
}

impl FetcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (`ANTHROPIC_API_KEY`, `ANTHROPIC_BASE_URL`).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let config = Self::new();

        for (env_var, provider) in &API_KEY_ENV {
            if let Ok(key) = std::env::var(env_var) {
                if !key.trim().is_empty() {
                    config.set_api_key(provider, key);
                }
            }
        }

        for (env_var, provider) in &BASE_URL_ENV {
            if let Ok(url) = std::env::var(env_var) {
                if !url.trim().is_empty() {
                    config.set_base_url(provider, url);
                }
            }
        }

        config
    }

    /// Get (or create) the global default config.
    pub fn global() -> &'static FetcherConfig {
        DEFAULT_CONFIG.get_or_init(Self::from_env)
    }

    pub fn set_api_key(&self, provider: &str, key: String) {
        if let Ok(mut keys) = self.api_keys.write() {
            keys.insert(canonical_provider_name(provider).to_string(), key);
        }
    }

    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        self.api_keys
            .read()
            .ok()?
            .get(canonical_provider_name(provider))
            .cloned()
    }

    pub fn set_base_url(&self, provider: &str, url: String) {
        if let Ok(mut urls) = self.base_urls.write() {
            urls.insert(canonical_provider_name(provider).to_string(), url);
        }
    }

    pub fn get_base_url(&self, provider: &str) -> Option<String> {
        self.base_urls
            .read()
            .ok()?
            .get(canonical_provider_name(provider))
            .cloned()
    }

    pub fn has_credentials(&self, provider: &str) -> bool {
        self.get_api_key(provider).is_some()
    }
}
