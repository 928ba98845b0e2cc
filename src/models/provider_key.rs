//! Typed provider identifiers and alias handling.

/// Canonical BYOK provider keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKey {
    Anthropic,
    OpenAi,
    Gemini,
    Groq,
    OpenRouter,
    Ollama,
    Azure,
    Xai,
}

impl ProviderKey {
    /// Provider name as it appears in override tables and resolved catalogs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "Anthropic",
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
            Self::Groq => "Groq",
            Self::OpenRouter => "OpenRouter",
            Self::Ollama => "Ollama",
            Self::Azure => "Azure",
            Self::Xai => "xAI",
        }
    }

    /// Parse user-facing provider aliases, ignoring ASCII case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "anthropic" | "claude" => Some(Self::Anthropic),
            "openai" => Some(Self::OpenAi),
            "gemini" | "google" => Some(Self::Gemini),
            "groq" => Some(Self::Groq),
            "openrouter" => Some(Self::OpenRouter),
            "ollama" => Some(Self::Ollama),
            "azure" => Some(Self::Azure),
            "xai" | "grok" => Some(Self::Xai),
            _ => None,
        }
    }
}

/// Canonical spelling of a provider name.
///
/// Known providers collapse onto their [`ProviderKey::as_str`] form so that
/// `"anthropic"` and `"Anthropic"` scope to the same overrides. Unknown names
/// pass through untouched.
pub fn canonical_provider_name(raw: &str) -> &str {
    ProviderKey::parse(raw).map_or(raw, |key| key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_anthropic_aliases() {
        for alias in ["anthropic", "Anthropic", "ANTHROPIC", "claude", " anthropic "] {
            assert_eq!(ProviderKey::parse(alias), Some(ProviderKey::Anthropic));
        }
    }

    #[test]
    fn unknown_provider_passes_through() {
        assert_eq!(canonical_provider_name("MyCloud"), "MyCloud");
        assert_eq!(canonical_provider_name("xai"), "xAI");
    }
}
