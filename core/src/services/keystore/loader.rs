//! Loading key material from a PKCS#12 container.

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::EncodingKey;
use p12_keystore::{KeyStore, KeyStoreEntry};
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use tracing::info;

use crate::errors::{ConfigurationError, DomainError, KeyAccessError};

use super::config::KeyStoreConfig;
use super::material::KeyMaterial;

/// Prefix marking a container path as a bundled resource rather than a
/// plain filesystem path.
const CLASSPATH_PREFIX: &str = "classpath:";

/// Environment variable overriding the bundled resource root.
const RESOURCE_DIR_ENV: &str = "RESOURCE_DIR";

/// Loader for the PKCS#12 key container.
///
/// Opens the container with the store password, extracts the private key and
/// certificate for the configured alias and returns them as one immutable
/// [`KeyMaterial`]. The loader itself holds no key state; callers cache the
/// result (see [`super::KeyMaterialCache`]).
#[derive(Debug, Clone)]
pub struct KeyStoreLoader {
    config: KeyStoreConfig,
}

impl KeyStoreLoader {
    /// Creates a new loader for the given configuration.
    pub fn new(config: KeyStoreConfig) -> Self {
        Self { config }
    }

    /// Returns the configured alias.
    pub fn alias(&self) -> &str {
        &self.config.alias
    }

    /// Loads the private key and certificate for the configured alias.
    ///
    /// # Returns
    ///
    /// * `Ok(KeyMaterial)` - Key and certificate from the same alias entry
    /// * `Err(DomainError)` - `Configuration` if the container cannot be
    ///   opened, `KeyAccess` if the alias entry is missing or unusable
    pub fn load(&self) -> Result<KeyMaterial, DomainError> {
        self.config.validate()?;

        let path = resolve_store_path(&self.config.path, &resource_root());
        let display_path = path.display().to_string();

        let bytes = fs::read(&path).map_err(|_| ConfigurationError::UnreadableContainer {
            path: display_path.clone(),
        })?;

        // Wrong store password and corrupt containers both surface here.
        let store = KeyStore::from_pkcs12(&bytes, &self.config.store_password).map_err(|e| {
            ConfigurationError::InvalidContainer {
                path: display_path.clone(),
                reason: e.to_string(),
            }
        })?;

        let alias = &self.config.alias;
        let chain = match store.entry(alias) {
            None => {
                return Err(KeyAccessError::AliasNotFound {
                    alias: alias.clone(),
                }
                .into())
            }
            Some(KeyStoreEntry::PrivateKeyChain(chain)) => chain,
            Some(_) => {
                return Err(KeyAccessError::NotAPrivateKey {
                    alias: alias.clone(),
                }
                .into())
            }
        };

        // jsonwebtoken expects PKCS#1 DER; the container stores PKCS#8.
        // A key that is not an RSA private key is rejected here.
        let private_key = RsaPrivateKey::from_pkcs8_der(chain.key()).map_err(|_| {
            KeyAccessError::NotAPrivateKey {
                alias: alias.clone(),
            }
        })?;
        let pkcs1_der = private_key
            .to_pkcs1_der()
            .map_err(|_| KeyAccessError::NotAPrivateKey {
                alias: alias.clone(),
            })?;
        let encoding_key = EncodingKey::from_rsa_der(pkcs1_der.as_bytes());

        let certificate = chain
            .chain()
            .first()
            .ok_or_else(|| KeyAccessError::CertificateMissing {
                alias: alias.clone(),
            })?;

        info!(path = %display_path, alias = %alias, "key container loaded");

        Ok(KeyMaterial::new(
            alias.clone(),
            encoding_key,
            certificate.as_der().to_vec(),
        ))
    }
}

/// Resolves a configured container path.
///
/// Paths with the `classpath:` prefix are joined onto the bundled resource
/// root; anything else is taken as a plain filesystem path.
pub(crate) fn resolve_store_path(path: &str, resource_root: &Path) -> PathBuf {
    match path.strip_prefix(CLASSPATH_PREFIX) {
        Some(resource) => resource_root.join(resource.trim_start_matches('/')),
        None => PathBuf::from(path),
    }
}

fn resource_root() -> PathBuf {
    PathBuf::from(std::env::var(RESOURCE_DIR_ENV).unwrap_or_else(|_| "resources".to_string()))
}
