//! JWT issuance service.

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, Header};
use tracing::debug;

use crate::domain::entities::claims::TokenClaims;
use crate::errors::{DomainError, SigningError};
use crate::services::keystore::KeyMaterialCache;

/// Role list embedded in every issued token.
const TOKEN_ROLES: &[&str] = &["admin"];

/// Service issuing RS256-signed access tokens.
///
/// Two calls with the same subject differ only in their timestamps; the
/// claim layout and role list are fixed.
pub struct TokenService {
    keys: Arc<KeyMaterialCache>,
    roles: Vec<String>,
}

impl TokenService {
    /// Creates a new token service over the cached key material.
    pub fn new(keys: Arc<KeyMaterialCache>) -> Self {
        Self {
            keys,
            roles: TOKEN_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Generates a signed access token for an authenticated client.
    ///
    /// # Arguments
    ///
    /// * `subject` - The client identifier to place in the `sub` claim
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact JWT (header.payload.signature)
    /// * `Err(DomainError)` - The signing primitive rejected the key material
    pub fn generate_token(&self, subject: &str) -> Result<String, DomainError> {
        let material = self.keys.current();
        let claims = TokenClaims::new(subject, self.roles.clone());
        let header = Header::new(Algorithm::RS256);

        let token = encode(&header, &claims, material.encoding_key())
            .map_err(|_| SigningError::KeyRejected)?;

        debug!(subject = %subject, "access token issued");
        Ok(token)
    }
}
