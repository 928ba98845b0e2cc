//! Catalog resolution: remote manifest + local overrides -> ordered model list.

pub mod overrides;
pub mod policy;
pub mod remote;
pub mod resolver;
pub mod service;

pub use overrides::{OverrideEntry, OverrideTable};
pub use policy::ResolutionPolicy;
pub use remote::{RemoteCatalogFetcher, RemoteModelEntry, StaticFetcher};
pub use resolver::{resolve, CatalogResolver, Origin, ResolvedCatalog, ResolvedModel};
pub use service::CatalogService;
