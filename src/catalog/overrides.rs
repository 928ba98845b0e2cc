//! Locally authored capability overrides.
//!
//! The table is loaded once at startup, either from the built-in defaults or
//! from a versioned TOML document, and is read-only afterwards. Overrides are
//! a deployment-time decision; nothing here mutates a table after it is built.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::models::{canonical_provider_name, AnthropicModel, CapabilityDescriptor, ProviderKey};

/// One override, keyed by `(provider, model_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub provider: String,
    pub model_id: String,
    pub capabilities: CapabilityDescriptor,
}

impl OverrideEntry {
    pub fn new(
        provider: impl Into<String>,
        model_id: impl Into<String>,
        capabilities: CapabilityDescriptor,
    ) -> Self {
        Self {
            provider: provider.into(),
            model_id: model_id.into(),
            capabilities,
        }
    }
}

/// Immutable mapping from `(provider, model_id)` to a capability descriptor.
///
/// Entries keep their declaration order; the resolver appends override-only
/// models in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
    /// provider -> model_id -> index into `entries`
    index: HashMap<String, HashMap<String, usize>>,
}

impl OverrideTable {
    /// Build a table, validating every descriptor and rejecting duplicate keys.
    ///
    /// Provider names are canonicalized, so `anthropic` and `Anthropic` name
    /// the same provider.
    pub fn new(entries: impl IntoIterator<Item = OverrideEntry>) -> Result<Self> {
        let mut table = Self::default();

        for mut entry in entries {
            if entry.provider.trim().is_empty() {
                return Err(CatalogError::Configuration(format!(
                    "override for '{}' has an empty provider name",
                    entry.model_id
                )));
            }
            if entry.model_id.trim().is_empty() {
                return Err(CatalogError::Configuration(format!(
                    "override under '{}' has an empty model id",
                    entry.provider
                )));
            }
            entry.provider = canonical_provider_name(&entry.provider).to_string();

            entry
                .capabilities
                .check()
                .map_err(|violation| CatalogError::invalid_capability(&entry.model_id, violation))?;

            let position = table.entries.len();
            let models = table.index.entry(entry.provider.clone()).or_default();
            if models.contains_key(&entry.model_id) {
                return Err(CatalogError::DuplicateKey {
                    provider: entry.provider,
                    model_id: entry.model_id,
                });
            }
            models.insert(entry.model_id.clone(), position);
            table.entries.push(entry);
        }

        Ok(table)
    }

    /// An empty table; every resolution falls back to remote data.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The overrides shipped with this crate.
    pub fn builtin() -> Self {
        let entries = AnthropicModel::KNOWN.into_iter().filter_map(|model| {
            let capabilities = model.capabilities()?;
            Some(OverrideEntry::new(
                ProviderKey::Anthropic.as_str(),
                model.as_str(),
                capabilities,
            ))
        });
        Self::new(entries).expect("built-in overrides are valid")
    }

    /// Parse a TOML override document.
    ///
    /// ```toml
    /// version = 1
    ///
    /// [[override]]
    /// provider = "Anthropic"
    /// model_id = "claude-sonnet-4-0"
    /// display_name = "Claude Sonnet 4"
    /// supports_vision = true
    /// supports_tool_calling = true
    /// max_input_tokens = 200000
    /// max_output_tokens = 64000
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let parsed: OverrideFileSerde = toml::from_str(source)?;
        if let Some(version) = parsed.version {
            if version != SUPPORTED_VERSION {
                return Err(CatalogError::Configuration(format!(
                    "unsupported override table version {version} (expected {SUPPORTED_VERSION})"
                )));
            }
        }
        Self::new(parsed.overrides.into_iter().map(OverrideEntry::from))
    }

    /// Read and parse a TOML override document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    /// Capabilities declared for `(provider, model_id)`, if any.
    ///
    /// `None` means "no override"; callers fall back to remote data.
    pub fn lookup(&self, provider: &str, model_id: &str) -> Option<&CapabilityDescriptor> {
        let position = *self
            .index
            .get(canonical_provider_name(provider))?
            .get(model_id)?;
        Some(&self.entries[position].capabilities)
    }

    /// Entries for one provider, in declaration order.
    pub fn for_provider<'a>(
        &'a self,
        provider: &str,
    ) -> impl Iterator<Item = &'a OverrideEntry> + 'a {
        let provider = canonical_provider_name(provider).to_string();
        self.entries
            .iter()
            .filter(move |entry| entry.provider == provider)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[OverrideEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideFileSerde {
    #[serde(default)]
    version: Option<u32>,
    #[serde(rename = "override", default)]
    overrides: Vec<OverrideEntrySerde>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideEntrySerde {
    provider: String,
    model_id: String,
    display_name: String,
    supports_vision: bool,
    supports_tool_calling: bool,
    max_input_tokens: u64,
    max_output_tokens: u64,
}

impl From<OverrideEntrySerde> for OverrideEntry {
    fn from(value: OverrideEntrySerde) -> Self {
        Self {
            provider: value.provider,
            model_id: value.model_id,
            capabilities: CapabilityDescriptor {
                display_name: value.display_name,
                supports_vision: value.supports_vision,
                supports_tool_calling: value.supports_tool_calling,
                max_input_tokens: value.max_input_tokens,
                max_output_tokens: value.max_output_tokens,
            },
        }
    }
}
