//! Business services.

pub mod auth;
pub mod keystore;
pub mod token;
