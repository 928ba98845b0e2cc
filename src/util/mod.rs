//! Utilities that live outside the resolver.

pub mod cache;

pub use cache::CatalogCache;
