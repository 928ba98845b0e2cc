//! Merge a remote manifest with the override table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use tracing::{debug, warn};

use super::overrides::OverrideTable;
use super::policy::{KnownLimits, ResolutionPolicy};
use super::remote::RemoteModelEntry;
use crate::error::{CatalogError, Result};
use crate::models::{canonical_provider_name, CapabilityDescriptor};

/// Where a resolved entry's data came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Origin {
    /// Present remotely, capabilities filled from remote data and policy defaults.
    Remote,
    /// Unknown to the remote manifest; visible only through the override table.
    Override,
    /// Present remotely, capabilities taken from the override table.
    Merged,
}

/// One model in a resolved catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModel {
    pub model_id: String,
    pub provider: String,
    pub capabilities: CapabilityDescriptor,
    pub origin: Origin,
}

/// Ordered, de-duplicated model list for one provider.
///
/// Remote entries come first in fetcher order, followed by override-only
/// entries in declaration order. A catalog is a fresh value per resolution;
/// it is never shared or cached by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCatalog {
    provider: String,
    models: Vec<ResolvedModel>,
}

impl ResolvedCatalog {
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn models(&self) -> &[ResolvedModel] {
        &self.models
    }

    pub fn get(&self, model_id: &str) -> Option<&ResolvedModel> {
        self.models.iter().find(|model| model.model_id == model_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|model| model.model_id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedModel> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn into_models(self) -> Vec<ResolvedModel> {
        self.models
    }
}

impl<'a> IntoIterator for &'a ResolvedCatalog {
    type Item = &'a ResolvedModel;
    type IntoIter = std::slice::Iter<'a, ResolvedModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

/// Stateless resolver parameterized by a [`ResolutionPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogResolver {
    policy: ResolutionPolicy,
}

impl CatalogResolver {
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ResolutionPolicy {
        &self.policy
    }

    /// Resolve the catalog for `provider`.
    ///
    /// Override capabilities win over remote ones; remote order wins over
    /// declaration order. An empty remote list yields an override-only
    /// catalog. Only a broken override table can make this fail.
    pub fn resolve(
        &self,
        provider: &str,
        remote: &[RemoteModelEntry],
        overrides: &OverrideTable,
    ) -> Result<ResolvedCatalog> {
        let provider = canonical_provider_name(provider).to_string();

        let mut known = KnownLimits::default();
        for entry in overrides.for_provider(&provider) {
            known.observe(
                Some(entry.capabilities.max_input_tokens),
                Some(entry.capabilities.max_output_tokens),
            );
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(remote.len());
        for entry in remote {
            let id = entry.model_id.as_str();
            if id.trim().is_empty() || !seen.insert(id) || overrides.lookup(&provider, id).is_some()
            {
                continue;
            }
            known.observe(entry.max_input_tokens, entry.max_output_tokens);
        }

        let mut models = Vec::with_capacity(remote.len());
        let mut remote_ids: HashSet<&str> = HashSet::with_capacity(remote.len());

        for entry in remote {
            if entry.model_id.trim().is_empty() {
                warn!(provider = %provider, "skipping remote entry with empty model id");
                continue;
            }
            if !remote_ids.insert(entry.model_id.as_str()) {
                debug!(
                    provider = %provider,
                    model_id = %entry.model_id,
                    "skipping duplicate remote entry"
                );
                continue;
            }

            let (capabilities, origin) = match overrides.lookup(&provider, &entry.model_id) {
                Some(capabilities) => (capabilities.clone(), Origin::Merged),
                None => (self.policy.fill(entry, &known), Origin::Remote),
            };
            models.push(ResolvedModel {
                model_id: entry.model_id.clone(),
                provider: provider.clone(),
                capabilities,
                origin,
            });
        }

        let remote_count = models.len();
        let mut appended: HashSet<&str> = HashSet::new();
        for entry in overrides.for_provider(&provider) {
            if remote_ids.contains(entry.model_id.as_str()) {
                continue;
            }
            if !appended.insert(entry.model_id.as_str()) {
                return Err(CatalogError::DuplicateModelId {
                    provider,
                    model_id: entry.model_id.clone(),
                });
            }
            models.push(ResolvedModel {
                model_id: entry.model_id.clone(),
                provider: provider.clone(),
                capabilities: entry.capabilities.clone(),
                origin: Origin::Override,
            });
        }

        debug!(
            provider = %provider,
            remote = remote_count,
            override_only = models.len() - remote_count,
            "resolved model catalog"
        );

        Ok(ResolvedCatalog { provider, models })
    }
}

/// Resolve with the default [`ResolutionPolicy`].
pub fn resolve(
    provider: &str,
    remote: &[RemoteModelEntry],
    overrides: &OverrideTable,
) -> Result<ResolvedCatalog> {
    CatalogResolver::default().resolve(provider, remote, overrides)
}
