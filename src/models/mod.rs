//! Model definitions: capability descriptors and provider naming.

pub mod anthropic;
pub mod capabilities;
pub mod provider_key;

pub use anthropic::AnthropicModel;
pub use capabilities::CapabilityDescriptor;
pub use provider_key::{canonical_provider_name, ProviderKey};
