//! Tests for token issuance and public key export.

mod service_tests;
