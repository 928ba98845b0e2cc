//! Remote catalog fetchers backed by provider HTTP APIs.

pub mod http;

#[cfg(feature = "anthropic")]
pub mod anthropic;

#[cfg(feature = "anthropic")]
pub use anthropic::AnthropicModelsFetcher;
