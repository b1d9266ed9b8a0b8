//! Error types for preference storage, DOM lookup, and configuration.

/// Failure reported by a [`crate::store::PreferenceStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store cannot be reached (disabled, private mode, no window).
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    /// Reading a key failed.
    #[error("failed to read preference {key:?}: {reason}")]
    Read { key: String, reason: String },
    /// Writing a key failed (quota, security policy).
    #[error("failed to write preference {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// Error raised while wiring the toggle to a page.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// A required anchor element is not in the document.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// The supplied configuration is malformed or inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for ToggleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
