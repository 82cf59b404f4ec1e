//! PEM export of the verification certificate.

use std::sync::Arc;

use pem::{EncodeConfig, LineEnding, Pem};

use crate::services::keystore::KeyMaterialCache;

/// Exports the certificate from the cached key material as PEM text.
///
/// Pure read: no mutation, no I/O beyond the key-material read. The loader
/// guarantees a certificate is present for the configured alias, so export
/// is total once the cache exists.
pub struct PublicKeyExporter {
    keys: Arc<KeyMaterialCache>,
}

impl PublicKeyExporter {
    /// Creates a new exporter over the cached key material.
    pub fn new(keys: Arc<KeyMaterialCache>) -> Self {
        Self { keys }
    }

    /// Renders the certificate DER as a conventional PEM block:
    /// `BEGIN/END CERTIFICATE` frame, 64-column base64 body, LF line
    /// endings, trailing newline.
    pub fn export_pem(&self) -> String {
        let material = self.keys.current();
        let block = Pem::new("CERTIFICATE", material.certificate_der().to_vec());
        pem::encode_config(&block, EncodeConfig::new().set_line_ending(LineEnding::LF))
    }
}
