//! # TokenMint Core
//!
//! Core key management and token signing for the TokenMint provider.
//! This crate contains the domain entities, the keystore loading and caching
//! services, the JWT issuer, the public certificate exporter and the error
//! types shared with the API layer.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
