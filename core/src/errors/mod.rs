//! Domain-specific error types and error handling.

mod types;

pub use types::{
    AuthenticationError, ConfigurationError, KeyAccessError, SigningError, ValidationError,
};

use thiserror::Error;

/// Unified domain error, bridging the closed set of failure kinds so callers
/// can distinguish configuration failure from auth failure from signing
/// failure programmatically.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    KeyAccess(#[from] KeyAccessError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
