//! Gate, fetch, and resolve in one call for the model picker.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::overrides::OverrideTable;
use super::policy::ResolutionPolicy;
use super::remote::RemoteCatalogFetcher;
use super::resolver::{CatalogResolver, ResolvedCatalog};
use crate::eligibility::{AccountTierFlags, Eligibility, EligibilityPolicy};
use crate::error::Result;

/// Entry point for the model picker.
///
/// Holds the immutable override table and a fetcher. Every call evaluates
/// the eligibility gate first and never touches the fetcher when access is
/// denied.
#[derive(Clone)]
pub struct CatalogService {
    fetcher: Arc<dyn RemoteCatalogFetcher>,
    overrides: Arc<OverrideTable>,
    resolver: CatalogResolver,
    eligibility: EligibilityPolicy,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("fetcher", &"..")
            .field("overrides", &self.overrides.len())
            .field("resolver", &self.resolver)
            .field("eligibility", &self.eligibility)
            .finish()
    }
}

impl CatalogService {
    pub fn new(fetcher: Arc<dyn RemoteCatalogFetcher>, overrides: OverrideTable) -> Self {
        Self {
            fetcher,
            overrides: Arc::new(overrides),
            resolver: CatalogResolver::default(),
            eligibility: EligibilityPolicy::default(),
        }
    }

    pub fn with_resolution_policy(mut self, policy: ResolutionPolicy) -> Self {
        self.resolver = CatalogResolver::new(policy);
        self
    }

    pub fn with_eligibility_policy(mut self, policy: EligibilityPolicy) -> Self {
        self.eligibility = policy;
        self
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Whether BYOK models should be shown to this account at all.
    pub fn is_enabled(&self, flags: &AccountTierFlags) -> bool {
        self.eligibility.is_enabled(flags)
    }

    /// Resolve the catalog for `provider`, or `None` when the account is not eligible.
    ///
    /// Fetcher failures degrade to an empty remote list, so the result is an
    /// override-only catalog rather than an error. `Err` only comes from
    /// resolution itself.
    pub async fn available_models(
        &self,
        flags: &AccountTierFlags,
        provider: &str,
    ) -> Result<Option<ResolvedCatalog>> {
        if let Eligibility::Denied(reason) = self.eligibility.evaluate(flags) {
            debug!(provider = %provider, ?reason, "BYOK catalog hidden for account");
            return Ok(None);
        }

        let remote = match self.fetcher.fetch(provider).await {
            Ok(remote) => remote,
            Err(error) => {
                warn!(provider = %provider, %error, "remote catalog fetch failed, using overrides only");
                Vec::new()
            }
        };

        self.resolver
            .resolve(provider, &remote, &self.overrides)
            .map(Some)
    }
}
