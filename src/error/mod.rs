//! Error types for catalog resolution.

use thiserror::Error;

/// Why a capability descriptor was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityViolation {
    #[error("display name is empty")]
    EmptyDisplayName,

    #[error("max input tokens must be positive")]
    ZeroInputLimit,

    #[error("max output tokens must be positive")]
    ZeroOutputLimit,

    #[error("max output tokens ({output}) exceeds max input tokens ({input})")]
    OutputExceedsInput { input: u64, output: u64 },
}

/// Primary error type for all catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid capability for {model_id}: {violation}")]
    InvalidCapability {
        model_id: String,
        violation: CapabilityViolation,
    },

    #[error("Duplicate override key: {provider}/{model_id}")]
    DuplicateKey { provider: String, model_id: String },

    #[error("Duplicate model id in resolved catalog: {provider}/{model_id}")]
    DuplicateModelId { provider: String, model_id: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Override table parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Authentication(String),
}

/// Coarse classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Override table or policy authoring mistake.
    Configuration,
    Network,
    Authentication,
    Api,
    Io,
}

impl CatalogError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_capability(model_id: impl Into<String>, violation: CapabilityViolation) -> Self {
        Self::InvalidCapability {
            model_id: model_id.into(),
            violation,
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCapability { .. }
            | Self::DuplicateKey { .. }
            | Self::DuplicateModelId { .. }
            | Self::Configuration(_)
            | Self::Parse(_) => ErrorCategory::Configuration,
            Self::Network(_) => ErrorCategory::Network,
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                _ => ErrorCategory::Api,
            },
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Io,
        }
    }

    /// Whether this error must abort startup of the catalog subsystem.
    ///
    /// Only configuration-authoring errors are fatal; everything on the
    /// remote fetch path degrades to an empty remote list instead.
    pub fn is_fatal(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CatalogError>;
