//! Conservative defaults for remote entries that carry partial capability data.

use tracing::warn;

use super::remote::RemoteModelEntry;
use crate::error::{CatalogError, Result};
use crate::models::CapabilityDescriptor;

/// How missing remote capability fields are filled in.
///
/// Booleans default to `false`. Token limits default to the smallest limit
/// known for the provider (from its overrides and from remote entries that
/// declare limits), and to the fallback limits when nothing is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionPolicy {
    default_vision: bool,
    default_tool_calling: bool,
    fallback_max_input_tokens: u64,
    fallback_max_output_tokens: u64,
}

impl Default for ResolutionPolicy {
    fn default() -> Self {
        Self {
            default_vision: false,
            default_tool_calling: false,
            fallback_max_input_tokens: 4096,
            fallback_max_output_tokens: 4096,
        }
    }
}

impl ResolutionPolicy {
    /// Replace the fallback limits used when a provider has no known limits.
    pub fn with_fallback_limits(
        mut self,
        max_input_tokens: u64,
        max_output_tokens: u64,
    ) -> Result<Self> {
        if max_input_tokens == 0 || max_output_tokens == 0 || max_output_tokens > max_input_tokens
        {
            return Err(CatalogError::Configuration(format!(
                "invalid fallback limits: input {max_input_tokens}, output {max_output_tokens}"
            )));
        }
        self.fallback_max_input_tokens = max_input_tokens;
        self.fallback_max_output_tokens = max_output_tokens;
        Ok(self)
    }

    pub fn with_default_vision(mut self, enabled: bool) -> Self {
        self.default_vision = enabled;
        self
    }

    pub fn with_default_tool_calling(mut self, enabled: bool) -> Self {
        self.default_tool_calling = enabled;
        self
    }

    pub fn fallback_limits(&self) -> (u64, u64) {
        (self.fallback_max_input_tokens, self.fallback_max_output_tokens)
    }

    /// Build a valid descriptor for a remote entry with no override.
    pub(crate) fn fill(
        &self,
        entry: &RemoteModelEntry,
        known: &KnownLimits,
    ) -> CapabilityDescriptor {
        let display_name = entry
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(entry.model_id.as_str())
            .to_string();

        if entry.max_input_tokens == Some(0) || entry.max_output_tokens == Some(0) {
            warn!(
                model_id = %entry.model_id,
                max_input_tokens = ?entry.max_input_tokens,
                max_output_tokens = ?entry.max_output_tokens,
                "remote entry declares a zero token limit, using the default instead"
            );
        }

        let max_input_tokens = positive(entry.max_input_tokens)
            .or(known.max_input_tokens)
            .unwrap_or(self.fallback_max_input_tokens);
        let mut max_output_tokens = positive(entry.max_output_tokens)
            .or(known.max_output_tokens)
            .unwrap_or(self.fallback_max_output_tokens);

        if max_output_tokens > max_input_tokens {
            if entry.max_output_tokens.is_some() {
                warn!(
                    model_id = %entry.model_id,
                    max_input_tokens,
                    max_output_tokens,
                    "remote output limit exceeds input limit, clamping"
                );
            }
            max_output_tokens = max_input_tokens;
        }

        CapabilityDescriptor {
            display_name,
            supports_vision: entry.supports_vision.unwrap_or(self.default_vision),
            supports_tool_calling: entry
                .supports_tool_calling
                .unwrap_or(self.default_tool_calling),
            max_input_tokens,
            max_output_tokens,
        }
    }
}

fn positive(value: Option<u64>) -> Option<u64> {
    value.filter(|v| *v > 0)
}

/// Smallest token limits observed for one provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct KnownLimits {
    pub max_input_tokens: Option<u64>,
    pub max_output_tokens: Option<u64>,
}

impl KnownLimits {
    pub fn observe(&mut self, max_input_tokens: Option<u64>, max_output_tokens: Option<u64>) {
        if let Some(input) = positive(max_input_tokens) {
            self.max_input_tokens = Some(self.max_input_tokens.map_or(input, |v| v.min(input)));
        }
        if let Some(output) = positive(max_output_tokens) {
            self.max_output_tokens = Some(self.max_output_tokens.map_or(output, |v| v.min(output)));
        }
    }
}
