//! Immutable key material produced by a successful keystore load.

use jsonwebtoken::EncodingKey;

/// The in-memory result of one load operation: the signing key and the
/// certificate extracted from the same alias entry.
///
/// Instances are immutable and shared read-only behind an `Arc`; the private
/// key and certificate can never mix across two different loads.
pub struct KeyMaterial {
    alias: String,
    encoding_key: EncodingKey,
    certificate_der: Vec<u8>,
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("alias", &self.alias)
            .field("certificate_der_len", &self.certificate_der.len())
            .finish()
    }
}

impl KeyMaterial {
    pub(crate) fn new(alias: String, encoding_key: EncodingKey, certificate_der: Vec<u8>) -> Self {
        Self {
            alias,
            encoding_key,
            certificate_der,
        }
    }

    /// Returns the alias this material was loaded from.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Returns the RSA signing key for JWT encoding.
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the DER bytes of the certificate associated with the alias.
    pub fn certificate_der(&self) -> &[u8] {
        &self.certificate_der
    }
}
