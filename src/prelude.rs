//! Convenience re-exports for common use.

pub use crate::catalog::{
    CatalogResolver, CatalogService, Origin, OverrideEntry, OverrideTable, RemoteCatalogFetcher,
    RemoteModelEntry, ResolutionPolicy, ResolvedCatalog, ResolvedModel,
};
pub use crate::config::FetcherConfig;
pub use crate::eligibility::{AccountTierFlags, Eligibility, EligibilityPolicy};
pub use crate::error::{CatalogError, Result};
pub use crate::intents::ModeLabel;
pub use crate::models::CapabilityDescriptor;
