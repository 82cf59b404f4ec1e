//! Configuration for the keystore loader.

use crate::errors::ConfigurationError;

/// Configuration for the PKCS#12 key container.
///
/// Supplied once at process start and never changed afterwards. The store
/// and key passwords are kept as separate fields for parity with the
/// deployment properties (`KEYSTORE_PASSWORD` / `KEYSTORE_KEY_PASSWORD`),
/// but PKCS#12 protects the container and its key bags under a single
/// password, so `validate` rejects mismatched values up front.
#[derive(Clone)]
pub struct KeyStoreConfig {
    /// Path to the container; a `classpath:` prefix resolves against the
    /// bundled resource directory
    pub path: String,
    /// Password protecting the container
    pub store_password: String,
    /// Alias of the private-key/certificate entry to load
    pub alias: String,
    /// Password protecting the key entry
    pub key_password: String,
}

impl std::fmt::Debug for KeyStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStoreConfig")
            .field("path", &self.path)
            .field("store_password", &"<redacted>")
            .field("alias", &self.alias)
            .field("key_password", &"<redacted>")
            .finish()
    }
}

impl KeyStoreConfig {
    /// Creates a keystore configuration from environment variables.
    ///
    /// Expects:
    /// - `KEYSTORE_PATH`: container path (default: `classpath:keystore.p12`)
    /// - `KEYSTORE_PASSWORD`: store password (required)
    /// - `KEYSTORE_ALIAS`: entry alias (default: `tokenmint`)
    /// - `KEYSTORE_KEY_PASSWORD`: key password (defaults to the store password)
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let store_password = std::env::var("KEYSTORE_PASSWORD").map_err(|_| {
            ConfigurationError::MissingSetting {
                name: "KEYSTORE_PASSWORD".to_string(),
            }
        })?;
        let key_password =
            std::env::var("KEYSTORE_KEY_PASSWORD").unwrap_or_else(|_| store_password.clone());

        Ok(Self {
            path: std::env::var("KEYSTORE_PATH")
                .unwrap_or_else(|_| "classpath:keystore.p12".to_string()),
            store_password,
            alias: std::env::var("KEYSTORE_ALIAS").unwrap_or_else(|_| "tokenmint".to_string()),
            key_password,
        })
    }

    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Configuration is usable
    /// * `Err(ConfigurationError)` - Store and key passwords differ
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.store_password != self.key_password {
            return Err(ConfigurationError::PasswordMismatch);
        }
        Ok(())
    }
}
