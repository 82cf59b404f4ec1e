//! Shared fixtures for API integration tests: a generated PKCS#12 container
//! and a fully wired application state.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::web;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use p12_keystore::{Certificate, KeyStore, KeyStoreEntry, PrivateKeyChain};
use rand::RngCore;
use rsa::pkcs8::EncodePrivateKey;
use rsa::RsaPrivateKey;

use tm_api::routes::oauth::AppState;
use tm_core::services::auth::{ClientCredentials, SingleClientValidator};
use tm_core::services::keystore::{KeyMaterialCache, KeyStoreConfig, KeyStoreLoader};
use tm_core::services::token::{PublicKeyExporter, TokenService};

pub const TEST_ALIAS: &str = "tokenmint-test";
pub const TEST_PASSWORD: &str = "changeit";
pub const TEST_CLIENT_ID: &str = "client-42";
pub const TEST_CLIENT_SECRET: &str = "s3cret";

static FIXTURE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Writes a PKCS#12 container with a fresh RSA key and self-signed
/// certificate to a unique temp file. Returns the path and certificate DER.
pub fn write_keystore_file() -> (PathBuf, Vec<u8>) {
    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("generate RSA key");
    let pkcs8 = private_key.to_pkcs8_der().expect("encode PKCS#8");

    let key_pair = rcgen::KeyPair::try_from(pkcs8.as_bytes()).expect("import key pair");
    let params =
        rcgen::CertificateParams::new(vec!["tokenmint.test".to_string()]).expect("cert params");
    let certificate = params.self_signed(&key_pair).expect("self-sign certificate");
    let certificate_der = certificate.der().to_vec();

    let mut local_key_id = [0u8; 20];
    rng.fill_bytes(&mut local_key_id);
    let chain = PrivateKeyChain::new(
        pkcs8.as_bytes().to_vec(),
        local_key_id.to_vec(),
        vec![Certificate::from_der(&certificate_der).expect("certificate from DER")],
    );

    let mut store = KeyStore::new();
    store.add_entry(TEST_ALIAS, KeyStoreEntry::PrivateKeyChain(chain));
    let bytes = store
        .writer(TEST_PASSWORD)
        .write()
        .expect("serialize PKCS#12 container");

    let path = std::env::temp_dir().join(format!(
        "tokenmint-api-keystore-{}-{}.p12",
        std::process::id(),
        FIXTURE_COUNTER.fetch_add(1, Ordering::Relaxed),
    ));
    std::fs::write(&path, bytes).expect("write keystore fixture");
    (path, certificate_der)
}

/// Builds the application state used by `create_app`, backed by a fresh
/// keystore fixture and the test client identity. Returns the state and the
/// certificate DER for verification.
pub fn test_state() -> (web::Data<AppState<SingleClientValidator>>, Vec<u8>) {
    let (path, certificate_der) = write_keystore_file();

    let config = KeyStoreConfig {
        path: path.display().to_string(),
        store_password: TEST_PASSWORD.to_string(),
        alias: TEST_ALIAS.to_string(),
        key_password: TEST_PASSWORD.to_string(),
    };
    let cache = Arc::new(
        KeyMaterialCache::initialize(KeyStoreLoader::new(config)).expect("initialize cache"),
    );

    let credentials =
        ClientCredentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET).expect("client credentials");

    let state = web::Data::new(AppState {
        token_service: Arc::new(TokenService::new(Arc::clone(&cache))),
        public_key_exporter: Arc::new(PublicKeyExporter::new(cache)),
        credential_validator: Arc::new(SingleClientValidator::new(credentials)),
    });

    (state, certificate_der)
}

/// Builds a Basic `Authorization` header value for the given pair.
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Extracts a JWT decoding key from certificate DER.
pub fn decoding_key_from_cert_der(der: &[u8]) -> jsonwebtoken::DecodingKey {
    let (_, certificate) = x509_parser::parse_x509_certificate(der).expect("parse certificate");
    jsonwebtoken::DecodingKey::from_rsa_der(
        certificate.public_key().subject_public_key.data.as_ref(),
    )
}
