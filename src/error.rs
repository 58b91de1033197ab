//! Error types for the contact resolver.
//!
//! Provider failures are absorbed by the refresh path and never reach search
//! callers. Configuration errors surface at startup, and calls on a stopped
//! worker report [`ResolverError::WorkerStopped`].

use thiserror::Error;

/// Errors reported by a contacts provider while enumerating the address book.
///
/// These never reach search callers: a failed refresh is logged and the
/// previous snapshot stays in service.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The user has not granted access to the address book
    #[error("Contacts access not granted")]
    PermissionDenied,

    /// Enumeration started but could not complete
    #[error("Contact enumeration failed: {0}")]
    EnumerationFailure(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned to callers of the resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The worker has shut down and no longer accepts requests
    #[error("Resolver worker has stopped")]
    WorkerStopped,
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ResolverError
pub type ResolverResult<T> = Result<T, ResolverError>;
