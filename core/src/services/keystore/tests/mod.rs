//! Tests for keystore loading and caching.
