//! Request extractors for the HTTP boundary.

pub mod basic_auth;

pub use basic_auth::BasicCredentials;
