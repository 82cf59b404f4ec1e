//! Client authentication boundary.

mod validator;

pub use validator::{ClientCredentials, CredentialValidator, SingleClientValidator};
