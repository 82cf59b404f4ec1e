//! Error type definitions for keystore access, token signing and the
//! authentication boundary.
//!
//! Messages carry the operation context (path, alias) but never secret
//! material: no passwords, no key bytes. HTTP status codes and
//! machine-readable reason codes are assigned in the presentation layer.

use thiserror::Error;

/// Keystore configuration errors.
///
/// These are fatal at startup: the key container is loaded eagerly and a
/// failure here aborts process initialization.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Missing configuration setting: {name}")]
    MissingSetting { name: String },

    #[error("Invalid configuration setting {name}: {reason}")]
    InvalidSetting { name: String, reason: String },

    #[error("Store and key passwords must match for a PKCS#12 container")]
    PasswordMismatch,

    #[error("Key container not readable: {path}")]
    UnreadableContainer { path: String },

    #[error("Failed to open key container {path}: {reason}")]
    InvalidContainer { path: String, reason: String },
}

/// Key entry access errors.
///
/// Raised when the container opened fine but the configured alias does not
/// resolve to a usable private-key/certificate pair.
#[derive(Error, Debug)]
pub enum KeyAccessError {
    #[error("Alias not found in key container: {alias}")]
    AliasNotFound { alias: String },

    #[error("Entry is not a private key: {alias}")]
    NotAPrivateKey { alias: String },

    #[error("No certificate associated with alias: {alias}")]
    CertificateMissing { alias: String },
}

/// Token signing errors.
///
/// Never retried automatically: signing again with the same rejected key
/// cannot succeed.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Signing primitive rejected the key material")]
    KeyRejected,

    #[error("Token signing failed")]
    SigningFailed,
}

/// Authentication errors raised at the HTTP boundary.
#[derive(Error, Debug)]
pub enum AuthenticationError {
    #[error("Missing Authorization header")]
    MissingAuthorizationHeader,

    #[error("Invalid Basic credentials format")]
    InvalidCredentialsFormat,

    #[error("Invalid client credentials")]
    InvalidCredentials,
}

/// Request validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported grant type: {grant_type}")]
    UnsupportedGrantType { grant_type: String },
}
