//! Model capability descriptor.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{CapabilityViolation, CatalogError, Result};

/// Describes what a model can do and how many tokens it accepts.
///
/// All fields are required. A model without a descriptor is *unknown*, which
/// is not the same thing as a model with no capabilities.
///
/// ```
/// use byok_catalog::models::CapabilityDescriptor;
///
/// let caps = CapabilityDescriptor::builder()
///     .display_name("Claude Sonnet 4")
///     .supports_vision(true)
///     .supports_tool_calling(true)
///     .max_input_tokens(200_000)
///     .max_output_tokens(64_000)
///     .build();
/// assert!(caps.validate("claude-sonnet-4-0").is_ok());
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CapabilityDescriptor {
    #[builder(into)]
    pub display_name: String,
    pub supports_vision: bool,
    pub supports_tool_calling: bool,
    pub max_input_tokens: u64,
    pub max_output_tokens: u64,
}

impl CapabilityDescriptor {
    /// Check the descriptor's invariants without attaching a model id.
    pub fn check(&self) -> std::result::Result<(), CapabilityViolation> {
        if self.display_name.trim().is_empty() {
            return Err(CapabilityViolation::EmptyDisplayName);
        }
        if self.max_input_tokens == 0 {
            return Err(CapabilityViolation::ZeroInputLimit);
        }
        if self.max_output_tokens == 0 {
            return Err(CapabilityViolation::ZeroOutputLimit);
        }
        if self.max_output_tokens > self.max_input_tokens {
            return Err(CapabilityViolation::OutputExceedsInput {
                input: self.max_input_tokens,
                output: self.max_output_tokens,
            });
        }
        Ok(())
    }

    /// Validate the descriptor declared for `model_id`.
    pub fn validate(&self, model_id: &str) -> Result<()> {
        self.check()
            .map_err(|violation| CatalogError::invalid_capability(model_id, violation))
    }
}
