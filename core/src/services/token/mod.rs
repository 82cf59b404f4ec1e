//! Token issuance and public key export.
//!
//! This module signs access tokens with the cached RSA key material and
//! renders the matching certificate as PEM for verifiers.

mod exporter;
mod service;

#[cfg(test)]
mod tests;

pub use exporter::PublicKeyExporter;
pub use service::TokenService;
