//! Tests for the JWT issuance service.

use std::sync::Arc;

use jsonwebtoken::{decode, decode_header, Algorithm, Validation};

use crate::domain::entities::claims::{TokenClaims, TOKEN_TTL_SECONDS};
use crate::services::keystore::tests::fixtures::{
    config_for, decoding_key_from_cert_der, write_keystore_file, TEST_ALIAS, TEST_PASSWORD,
};
use crate::services::keystore::{KeyMaterialCache, KeyStoreLoader};
use crate::services::token::TokenService;

fn service_with_certificate() -> (TokenService, Vec<u8>) {
    let (path, certificate_der) = write_keystore_file(TEST_ALIAS, TEST_PASSWORD);
    let cache = KeyMaterialCache::initialize(KeyStoreLoader::new(config_for(
        &path,
        TEST_ALIAS,
        TEST_PASSWORD,
    )))
    .expect("initialize cache");

    (TokenService::new(Arc::new(cache)), certificate_der)
}

#[test]
fn test_token_has_three_base64url_segments() {
    let (service, _) = service_with_certificate();
    let token = service.generate_token("client-42").expect("issue token");
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_token_verifies_and_carries_the_expected_claims() {
    let (service, certificate_der) = service_with_certificate();
    let token = service.generate_token("client-42").expect("issue token");

    let header = decode_header(&token).expect("decode header");
    assert_eq!(header.alg, Algorithm::RS256);

    let decoding_key = decoding_key_from_cert_der(&certificate_der);
    let decoded = decode::<TokenClaims>(&token, &decoding_key, &Validation::new(Algorithm::RS256))
        .expect("verify token");

    assert_eq!(decoded.claims.sub, "client-42");
    assert_eq!(decoded.claims.roles, vec!["admin".to_string()]);
    assert_eq!(decoded.claims.exp - decoded.claims.iat, TOKEN_TTL_SECONDS);
}

#[test]
fn test_repeated_issuance_for_one_subject_always_verifies() {
    let (service, certificate_der) = service_with_certificate();
    let decoding_key = decoding_key_from_cert_der(&certificate_der);
    let validation = Validation::new(Algorithm::RS256);

    for _ in 0..5 {
        let token = service.generate_token("client-42").expect("issue token");
        let decoded =
            decode::<TokenClaims>(&token, &decoding_key, &validation).expect("verify token");
        assert_eq!(decoded.claims.sub, "client-42");
    }
}

#[test]
fn test_concurrent_issuance_for_distinct_subjects() {
    let (service, certificate_der) = service_with_certificate();
    let service = Arc::new(service);

    let handles: Vec<_> = (0..100)
        .map(|i| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                let subject = format!("client-{i}");
                let token = service.generate_token(&subject).expect("issue token");
                (subject, token)
            })
        })
        .collect();

    let decoding_key = decoding_key_from_cert_der(&certificate_der);
    let validation = Validation::new(Algorithm::RS256);

    for handle in handles {
        let (subject, token) = handle.join().expect("issuer thread");
        let decoded =
            decode::<TokenClaims>(&token, &decoding_key, &validation).expect("verify token");
        assert_eq!(decoded.claims.sub, subject);
        assert_eq!(decoded.claims.roles, vec!["admin".to_string()]);
    }
}
