//! Credential validation for Basic-authenticated clients.

use crate::errors::ConfigurationError;

/// Capability the token endpoint depends on to authenticate a client
/// id/secret pair before any token is issued.
pub trait CredentialValidator: Send + Sync {
    /// Returns `true` when the pair matches a registered client.
    fn authenticate(&self, client_id: &str, client_secret: &str) -> bool;
}

/// The single preconfigured client identity.
///
/// The secret is stored as a bcrypt hash computed once at construction; the
/// plaintext is dropped immediately and never logged.
#[derive(Clone)]
pub struct ClientCredentials {
    client_id: String,
    client_secret_hash: String,
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret_hash", &"<redacted>")
            .finish()
    }
}

impl ClientCredentials {
    /// Creates client credentials, hashing the plaintext secret.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: &str,
    ) -> Result<Self, ConfigurationError> {
        let client_secret_hash =
            bcrypt::hash(client_secret, bcrypt::DEFAULT_COST).map_err(|e| {
                ConfigurationError::InvalidSetting {
                    name: "OAUTH_CLIENT_SECRET".to_string(),
                    reason: e.to_string(),
                }
            })?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret_hash,
        })
    }

    /// Creates credentials from `OAUTH_CLIENT_ID` / `OAUTH_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let client_id =
            std::env::var("OAUTH_CLIENT_ID").map_err(|_| ConfigurationError::MissingSetting {
                name: "OAUTH_CLIENT_ID".to_string(),
            })?;
        let client_secret =
            std::env::var("OAUTH_CLIENT_SECRET").map_err(|_| ConfigurationError::MissingSetting {
                name: "OAUTH_CLIENT_SECRET".to_string(),
            })?;

        Self::new(client_id, &client_secret)
    }

    /// Returns the registered client identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

/// Validator backed by one explicitly constructed client identity.
///
/// Passed in at startup rather than hidden behind a global, so additional
/// clients remain a non-breaking extension.
pub struct SingleClientValidator {
    credentials: ClientCredentials,
}

impl SingleClientValidator {
    /// Creates a validator for the given client identity.
    pub fn new(credentials: ClientCredentials) -> Self {
        Self { credentials }
    }
}

impl CredentialValidator for SingleClientValidator {
    fn authenticate(&self, client_id: &str, client_secret: &str) -> bool {
        if client_id != self.credentials.client_id {
            return false;
        }
        bcrypt::verify(client_secret, &self.credentials.client_secret_hash).unwrap_or(false)
    }
}
