//! Anthropic model definitions shipped as built-in overrides.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::capabilities::CapabilityDescriptor;

const CLAUDE_4_CONTEXT: u64 = 200_000;

/// Anthropic models the remote manifest may lag behind on.
///
/// Dated snapshots and `-0` "latest" aliases are distinct wire ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
pub enum AnthropicModel {
    #[strum(serialize = "claude-sonnet-4-20250514")]
    ClaudeSonnet4,
    #[strum(serialize = "claude-sonnet-4-0")]
    ClaudeSonnet4Latest,
    #[strum(serialize = "claude-opus-4-20250514")]
    ClaudeOpus4,
    #[strum(serialize = "claude-opus-4-0")]
    ClaudeOpus4Latest,
    /// Custom/unknown Anthropic model by ID.
    #[strum(default)]
    Custom(String),
}

impl AnthropicModel {
    /// Known models in presentation order.
    pub const KNOWN: [AnthropicModel; 4] = [
        Self::ClaudeSonnet4,
        Self::ClaudeSonnet4Latest,
        Self::ClaudeOpus4,
        Self::ClaudeOpus4Latest,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::ClaudeSonnet4 => "claude-sonnet-4-20250514",
            Self::ClaudeSonnet4Latest => "claude-sonnet-4-0",
            Self::ClaudeOpus4 => "claude-opus-4-20250514",
            Self::ClaudeOpus4Latest => "claude-opus-4-0",
            Self::Custom(s) => s,
        }
    }

    fn display_name(&self) -> Option<&'static str> {
        match self {
            Self::ClaudeSonnet4 | Self::ClaudeSonnet4Latest => Some("Claude Sonnet 4"),
            Self::ClaudeOpus4 | Self::ClaudeOpus4Latest => Some("Claude Opus 4"),
            Self::Custom(_) => None,
        }
    }

    /// Declared capabilities, or `None` for models this crate knows nothing about.
    pub fn capabilities(&self) -> Option<CapabilityDescriptor> {
        let max_output_tokens = match self {
            Self::ClaudeSonnet4 | Self::ClaudeSonnet4Latest => 64_000,
            Self::ClaudeOpus4 | Self::ClaudeOpus4Latest => 32_000,
            Self::Custom(_) => return None,
        };
        Some(CapabilityDescriptor {
            display_name: self.display_name()?.to_string(),
            supports_vision: true,
            supports_tool_calling: true,
            max_input_tokens: CLAUDE_4_CONTEXT,
            max_output_tokens,
        })
    }
}
