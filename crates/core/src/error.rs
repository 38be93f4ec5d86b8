//! Domain error type shared by all core modules.

/// Error type for domain-level failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed a domain range check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
