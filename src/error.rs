//! Error types for cursor-pager
//!
//! All fallible operations in the crate return `Result<T, Error>` where Error is
//! defined here. Loader implementations report their own failures as
//! `anyhow::Error`, which the pager wraps together with the failing page key.

use thiserror::Error;

/// The main error type for cursor-pager
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    // ============================================================================
    // Construction Errors
    // ============================================================================
    /// Invalid construction option, or no loader
    #[error("{message}")]
    InvalidConfig { message: String },

    // ============================================================================
    // Loading Errors
    // ============================================================================
    /// The loader failed for the page at `key`
    #[error("page {key}: {source:#}")]
    LoadFailed {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    // ============================================================================
    // Config File Errors
    // ============================================================================
    /// Config is not valid YAML or has unknown fields
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Config is not valid JSON or has unknown fields
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a load failure for the given page key
    pub fn load_failed(key: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self::LoadFailed {
            key: key.into(),
            source: source.into(),
        }
    }

    /// Page key at which a load failed, if this is a load failure
    pub fn page_key(&self) -> Option<&str> {
        match self {
            Error::LoadFailed { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Check if retrying the failed operation on the same pager makes sense.
    ///
    /// A failed load leaves the pager untouched, so calling it again resumes
    /// from the same key. Configuration errors need a new pager.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::LoadFailed { .. })
    }
}

/// Result type alias for cursor-pager
pub type Result<T> = std::result::Result<T, Error>;
